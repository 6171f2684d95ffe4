use quill::{
    ast::{Program, Statement},
    error::ParseError,
    interpreter::{lexer::lex, parser::statement::parse_program},
};

fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let tokens = lex(source);
    let mut tokens = tokens.iter().peekable();

    parse_program(&mut tokens)
}

fn parse_display(source: &str) -> String {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected parse errors for {source:?}: {errors:?}");

    program.to_string()
}

#[test]
fn operator_precedence_renders_canonically() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b * c", "(a + (b * c))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("a == b < c", "(a == (b < c))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("false != true", "(false != true)"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("a * [1, 2, 3][b * c] * d", "((a * ([1, 2, 3][(b * c)])) * d)"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (source, expected) in cases {
        assert_eq!(parse_display(source), expected, "source: {source}");
    }
}

#[test]
fn let_statements_round_trip() {
    assert_eq!(parse_display("let myVar = anotherVar;"), "let myVar = anotherVar;");
    assert_eq!(parse_display("let x = 5"), "let x = 5;");
}

#[test]
fn return_statements_round_trip() {
    assert_eq!(parse_display("return 5;"), "return 5;");
    assert_eq!(parse_display("return add(1, 2)"), "return add(1, 2);");
}

#[test]
fn if_expressions_render_their_blocks() {
    assert_eq!(parse_display("if (x < y) { x }"), "if(x < y) x");
    assert_eq!(parse_display("if (x < y) { x } else { y }"), "if(x < y) x else y");
}

#[test]
fn function_literals_render_parameters_and_body() {
    assert_eq!(parse_display("fn(x, y) { x + y; }"), "fn(x, y)(x + y)");
    assert_eq!(parse_display("fn() { 1 }"), "fn()1");
}

#[test]
fn hash_literals_parse_arbitrary_key_expressions() {
    assert_eq!(parse_display("{\"one\": 1, 2: \"two\", true: 3}"), "{one:1, 2:two, true:3}");
    assert_eq!(parse_display("{}"), "{}");
    assert_eq!(parse_display("{1 + 1: 2 * 2}"), "{(1 + 1):(2 * 2)}");
}

#[test]
fn canonical_form_is_stable_under_reparsing() {
    for source in ["-a * b",
                   "a + b * c - d / e",
                   "a == b < c",
                   "add(a, b * c)[0]",
                   "[1, 2 + 3, add(4)]",
                   "let x = a + b; x * 2",
                   "return 1 + 2;"]
    {
        let first = parse_display(source);
        let second = parse_display(&first);

        assert_eq!(first, second, "canonical form drifted for {source}");
    }
}

#[test]
fn missing_delimiters_are_recorded_without_panicking() {
    let (_, errors) = parse("let x 5;");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("expected next token to be"),
            "unexpected message: {}",
            errors[0]);

    let (_, errors) = parse("if (x { 1 }");
    assert!(!errors.is_empty());
    assert!(errors[0].to_string().contains("expected next token to be )"));

    let (_, errors) = parse("let = 5;");
    assert!(!errors.is_empty());
    assert!(errors[0].to_string().contains("an identifier"));

    let (_, errors) = parse("fn(x, y { x }");
    assert!(!errors.is_empty());
}

#[test]
fn parsing_recovers_at_statement_boundaries() {
    let (program, errors) = parse("let x 5; let y = 7; let 8; return y;");

    assert_eq!(errors.len(), 2);
    assert_eq!(program.statements.len(), 2);
    assert!(matches!(&program.statements[0], Statement::Let { name, .. } if name == "y"));
    assert!(matches!(&program.statements[1], Statement::Return { .. }));
}

#[test]
fn tokens_without_a_prefix_rule_are_reported() {
    let (_, errors) = parse("let x = ;");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("no prefix parse function for ;"));

    let (_, errors) = parse("5 + @");
    assert!(!errors.is_empty());
    assert!(errors[0].to_string().contains("no prefix parse function for @"));
}

#[test]
fn oversized_integer_literals_are_parse_errors() {
    let (_, errors) = parse("92233720368547758078;");

    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string()
                     .contains("cannot parse 92233720368547758078 as integer"));
    assert!(matches!(errors[0], ParseError::IntegerOutOfRange { .. }));
}

#[test]
fn statements_track_their_source_lines() {
    let (program, errors) = parse("let x = 1;\nlet y = 2;");
    assert!(errors.is_empty());

    let lines: Vec<usize> = program.statements
                                   .iter()
                                   .map(|statement| match statement {
                                       Statement::Let { line, .. }
                                       | Statement::Return { line, .. }
                                       | Statement::Expression { line, .. } => *line,
                                   })
                                   .collect();
    assert_eq!(lines, vec![1, 2]);
}
