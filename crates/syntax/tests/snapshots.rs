use syntax::{debug_tree, parse, ParseErrorKind};

fn tree(source: &str) -> String {
    let parse = parse(source);
    assert!(parse.errors.is_empty(), "unexpected errors: {:?}", parse.errors);
    debug_tree(&parse.syntax_node())
}

#[test]
fn test_snapshot_trivia_between_statements() {
    insta::assert_snapshot!(tree("foo\n  // c\nbar()\n"), @r#"
    SourceFile@0..17
      ExprStmt@0..3
        NameRef@0..3
          Ident@0..3 "foo"
      Whitespace@3..6 "\n  "
      Comment@6..10 "// c"
      Whitespace@10..11 "\n"
      ExprStmt@11..16
        CallExpr@11..16
          NameRef@11..14
            Ident@11..14 "bar"
          ArgList@14..16
            LParen@14..15 "("
            RParen@15..16 ")"
      Whitespace@16..17 "\n"
    "#);
}

#[test]
fn test_snapshot_let_with_binary() {
    insta::assert_snapshot!(tree("let x = a + 1;"), @r#"
    SourceFile@0..14
      LetStmt@0..14
        LetKw@0..3 "let"
        Whitespace@3..4 " "
        Name@4..5
          Ident@4..5 "x"
        Whitespace@5..6 " "
        Eq@6..7 "="
        Whitespace@7..8 " "
        BinaryExpr@8..13
          NameRef@8..9
            Ident@8..9 "a"
          Whitespace@9..10 " "
          Operator@10..11 "+"
          Whitespace@11..12 " "
          Literal@12..13
            Number@12..13 "1"
        Semicolon@13..14 ";"
    "#);
}

#[test]
fn test_snapshot_block_keeps_inner_trivia() {
    insta::assert_snapshot!(tree("{\n  a.b\n}"), @r#"
    SourceFile@0..9
      ExprStmt@0..9
        Block@0..9
          LBrace@0..1 "{"
          Whitespace@1..4 "\n  "
          ExprStmt@4..7
            FieldExpr@4..7
              NameRef@4..5
                Ident@4..5 "a"
              Dot@5..6 "."
              NameRef@6..7
                Ident@6..7 "b"
          Whitespace@7..8 "\n"
          RBrace@8..9 "}"
    "#);
}

#[test]
fn test_unclosed_block_is_reported() {
    let parse = parse("{\n  f(x\n");
    let kinds: Vec<_> = parse.errors.iter().map(|e| e.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            ParseErrorKind::UnclosedDelimiter { delimiter: '(' },
            ParseErrorKind::UnclosedDelimiter { delimiter: '{' },
        ]
    );
    assert_eq!(parse.syntax_node().text().to_string(), "{\n  f(x\n");
}

#[test]
fn test_stray_closing_brace_is_recovered() {
    let parse = parse("a }\nb");
    assert_eq!(parse.errors.len(), 1);
    assert_eq!(
        parse.errors[0].kind,
        ParseErrorKind::UnexpectedToken {
            expected: "item".to_string(),
            found: "'}'".to_string(),
        }
    );
}
