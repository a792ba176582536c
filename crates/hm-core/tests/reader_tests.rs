use hm_core::error::SyntaxErrorKind;
use hm_core::span::Span;
use hm_core::{read_all, read_one, Keyword, Node};
use pretty_assertions::assert_eq;

#[test]
fn reads_letrec_form() {
    let node = read_one(
        "(letrec ((factorial (lambda (n) (if (zero n) 1 (* n (factorial (pred n)))))))
           (factorial 5))",
    )
    .unwrap();

    assert_eq!(node.keyword(), Some(Keyword::LetRec));
    let items = node.as_list().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[2], Node::list([Node::symbol("factorial"), Node::int(5)]));
}

#[test]
fn display_reprints_source_forms() {
    let source = "(let ((f (lambda (x) x))) (pair (f 4) (f #t)))";
    assert_eq!(read_one(source).unwrap().to_string(), source);

    let bracketed = read_one("(let ([s \"hi\"]) s)").unwrap();
    assert_eq!(bracketed.to_string(), "(let ((s \"hi\")) s)");
}

#[test]
fn reads_a_source_file() {
    let source = r#"
        ; identity
        (lambda (x) x)

        ; pairs
        (pair 6)
        (error "boom")
    "#;
    let nodes = read_all(source).unwrap();
    let printed: Vec<String> = nodes.iter().map(ToString::to_string).collect();
    assert_eq!(
        printed,
        vec!["(lambda (x) x)", "(pair 6)", "(error \"boom\")"]
    );
}

#[test]
fn read_all_of_blank_source_is_empty() {
    assert_eq!(read_all("  ; nothing here\n").unwrap(), Vec::<Node>::new());
}

#[test]
fn errors_carry_spans() {
    let source = "(pair 1 \"open";
    let err = read_all(source).unwrap_err();
    assert_eq!(err.kind(), &SyntaxErrorKind::UnterminatedString);
    assert_eq!(err.span(), Span::new(8, source.len()));
    assert_eq!(
        err.to_string(),
        "syntax error at 8..13: unterminated string literal"
    );
}

#[test]
fn nested_mismatch_reports_inner_bracket() {
    let err = read_one("[f (g x]]").unwrap_err();
    assert_eq!(
        err.kind(),
        &SyntaxErrorKind::MismatchedClose {
            expected: ')',
            found: ']'
        }
    );
    assert_eq!(err.span().range(), 7..8);
}
