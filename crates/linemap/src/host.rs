//! A minimal host model: projects, their documents, and parsed files.

use crate::tree::SourceFile;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use syntax::{NodeOrToken, Parse, SyntaxElement, SyntaxNode};
use text_buffer::{ByteOffset, TextBuffer};

/// Identifies a file within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub u32);

/// Identifies a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(pub u32);

/// The text buffers a project knows about, keyed by file.
#[derive(Debug, Clone, Default)]
pub struct DocumentManager {
    documents: FxHashMap<FileId, Arc<TextBuffer>>,
}

impl DocumentManager {
    /// Creates an empty document manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the buffer for `file`, returning the previous one.
    pub fn insert(&mut self, file: FileId, buffer: Arc<TextBuffer>) -> Option<Arc<TextBuffer>> {
        self.documents.insert(file, buffer)
    }

    /// Returns the buffer registered for `file`.
    pub fn get(&self, file: FileId) -> Option<&TextBuffer> {
        self.documents.get(&file).map(Arc::as_ref)
    }
}

/// A project owning a set of documents.
#[derive(Debug, Clone)]
pub struct Project {
    id: ProjectId,
    name: String,
    documents: DocumentManager,
}

impl Project {
    /// Creates a project with no documents.
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            documents: DocumentManager::new(),
        }
    }

    /// The project id.
    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// The project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The project's documents.
    pub fn documents(&self) -> &DocumentManager {
        &self.documents
    }

    /// Mutable access to the project's documents.
    pub fn documents_mut(&mut self) -> &mut DocumentManager {
        &mut self.documents
    }
}

/// A parsed file belonging to a project.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    id: FileId,
    project: Arc<Project>,
    parse: Parse,
    root: SyntaxNode,
    buffer: Option<Arc<TextBuffer>>,
}

impl ParsedFile {
    /// Parses `text` and attaches a buffer holding it.
    pub fn new(id: FileId, project: Arc<Project>, text: &str) -> Self {
        let mut file = Self::detached(id, project, text);
        file.buffer = Some(Arc::new(TextBuffer::new(text)));
        file
    }

    /// Parses `text` without attaching a buffer.
    ///
    /// Line queries then rely on the project's documents.
    pub fn detached(id: FileId, project: Arc<Project>, text: &str) -> Self {
        let parse = syntax::parse(text);
        let root = parse.syntax_node();
        Self {
            id,
            project,
            parse,
            root,
            buffer: None,
        }
    }

    /// Attaches `buffer` to this file.
    pub fn with_buffer(mut self, buffer: Arc<TextBuffer>) -> Self {
        self.buffer = Some(buffer);
        self
    }

    /// The file id.
    pub fn id(&self) -> FileId {
        self.id
    }

    /// The owning project.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// The parse result, including errors.
    pub fn parse(&self) -> &Parse {
        &self.parse
    }

    /// The root of the syntax tree.
    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    /// The root as a tree element.
    pub fn root_element(&self) -> SyntaxElement {
        NodeOrToken::Node(self.root.clone())
    }
}

impl SourceFile for ParsedFile {
    type Element = SyntaxElement;
    type Buffer = TextBuffer;

    fn element_at(&self, offset: ByteOffset) -> Option<SyntaxElement> {
        syntax::token_at(&self.root, offset).map(NodeOrToken::Token)
    }

    fn attached_buffer(&self) -> Option<&TextBuffer> {
        self.buffer.as_deref()
    }

    fn project_buffer(&self) -> Option<&TextBuffer> {
        self.project.documents().get(self.id)
    }
}
