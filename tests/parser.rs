use canopy::{
    ast::{Expr, Statement},
    interpreter::parser::core::Parser,
};

fn parse_ok(source: &str) -> canopy::ast::Program {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    assert!(parser.errors().is_empty(),
            "unexpected diagnostics for {source:?}: {:?}",
            parser.errors());
    program
}

fn parse_errors(source: &str) -> Vec<String> {
    let mut parser = Parser::new(source);
    parser.parse_program();

    let errors = parser.errors().to_vec();
    assert!(!errors.is_empty(), "expected diagnostics for {source:?}");
    errors
}

#[test]
fn operator_precedence() {
    let tests = [("-a * b", "((-a) * b);"),
                 ("!-a", "(!(-a));"),
                 ("a + b + c", "((a + b) + c);"),
                 ("a + b - c", "((a + b) - c);"),
                 ("a * b * c", "((a * b) * c);"),
                 ("a * b / c", "((a * b) / c);"),
                 ("a + b / c", "(a + (b / c));"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f);"),
                 ("3 + 4; -5 * 5", "(3 + 4); ((-5) * 5);"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4));"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)));"),
                 ("true", "true;"),
                 ("3 > 5 == false", "((3 > 5) == false);"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4);"),
                 ("(5 + 5) * 2", "((5 + 5) * 2);"),
                 ("2 / (5 + 5)", "(2 / (5 + 5));"),
                 ("-(5 + 5)", "(-(5 + 5));"),
                 ("!(true == true)", "(!(true == true));"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d);"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)));"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d);"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])));")];

    for (input, expected) in tests {
        assert_eq!(parse_ok(input).to_string(), expected, "input: {input}");
    }
}

#[test]
fn let_statements() {
    let program = parse_ok("let x = 5; let y = true; let foobar = y;");

    assert_eq!(program.statements.len(), 3);
    assert!(matches!(&program.statements[0],
                     Statement::Let { name, value: Expr::IntegerLiteral { value: 5 } }
                     if name == "x"));
    assert!(matches!(&program.statements[1],
                     Statement::Let { name, value: Expr::BooleanLiteral { value: true } }
                     if name == "y"));
    assert!(matches!(&program.statements[2],
                     Statement::Let { name, value: Expr::Identifier { name: target } }
                     if name == "foobar" && target == "y"));
}

#[test]
fn return_statements() {
    let program = parse_ok("return 5; return 10;");

    assert_eq!(program.statements.len(), 2);
    for statement in &program.statements {
        assert!(matches!(statement, Statement::Return { .. }));
    }
}

#[test]
fn assignment_statements() {
    let program = parse_ok("x = 5;");

    assert!(matches!(&program.statements[0],
                     Statement::Assign { name, value: Expr::IntegerLiteral { value: 5 } }
                     if name == "x"));
}

#[test]
fn index_assignments_are_promoted_at_statement_level() {
    let program = parse_ok("a[0] = 5;");

    assert!(matches!(&program.statements[0],
                     Statement::IndexAssign { target: Expr::Identifier { name },
                                              index: Expr::IntegerLiteral { value: 0 },
                                              value: Expr::IntegerLiteral { value: 5 }, }
                     if name == "a"));

    assert_eq!(parse_ok("h[\"key\"] = 1 + 2;").to_string(), "h[\"key\"] = (1 + 2);");
    assert_eq!(parse_ok("grid[1][2] = 9;").to_string(), "(grid[1])[2] = 9;");
}

#[test]
fn assigning_to_a_non_index_expression_is_diagnosed() {
    parse_errors("5 = 3;");
    parse_errors("add(1) = 2;");
}

#[test]
fn if_expressions() {
    assert_eq!(parse_ok("if (x < y) { x }").to_string(), "if ((x < y)) { x; };");
    assert_eq!(parse_ok("if (x < y) { x } else { y }").to_string(),
               "if ((x < y)) { x; } else { y; };");
}

#[test]
fn function_literals_and_calls() {
    assert_eq!(parse_ok("fn(x, y) { x + y; }").to_string(), "fn(x, y) { (x + y); };");
    assert_eq!(parse_ok("fn() { 1 }").to_string(), "fn() { 1; };");
    assert_eq!(parse_ok("add(1, 2 * 3, 4 + 5);").to_string(), "add(1, (2 * 3), (4 + 5));");
    assert_eq!(parse_ok("fn(x) { x }(5)").to_string(), "fn(x) { x; }(5);");
}

#[test]
fn for_statements() {
    assert_eq!(parse_ok("for i, v in [1, 2] { puts(i) }").to_string(),
               "for i, v in [1, 2] { puts(i); }");

    let program = parse_ok("for key, value in h { value }");
    assert!(matches!(&program.statements[0],
                     Statement::For { index, value, .. }
                     if index == "key" && value == "value"));
}

#[test]
fn collection_literals() {
    assert_eq!(parse_ok("[1, 2 * 2, 3 + 3]").to_string(), "[1, (2 * 2), (3 + 3)];");
    assert_eq!(parse_ok("[]").to_string(), "[];");
    assert_eq!(parse_ok(r#"{"one": 1, "two": 2}"#).to_string(), r#"{"one": 1, "two": 2};"#);
    assert_eq!(parse_ok("{}").to_string(), "{};");
    assert_eq!(parse_ok(r#"{1: "a", true: f(2)}"#).to_string(), r#"{1: "a", true: f(2)};"#);
}

#[test]
fn string_literals() {
    assert_eq!(parse_ok(r#""hello world""#).to_string(), r#""hello world";"#);

    // Unterminated strings are lenient and run to the end of input.
    let program = parse_ok("\"abc");
    assert!(matches!(&program.statements[0],
                     Statement::Expression { expr: Expr::StringLiteral { value } }
                     if value == "abc"));
}

#[test]
fn parse_errors_are_collected_with_recovery() {
    let errors = parse_errors("let x 5; let = 10; let y = 3;");
    assert_eq!(errors.len(), 2, "diagnostics: {errors:?}");
    assert!(errors[0].contains("line 1"), "diagnostics: {errors:?}");

    // The parser recovered and still produced the valid trailing statement.
    let mut parser = Parser::new("let x 5; let y = 3;");
    let program = parser.parse_program();
    assert!(program.statements.iter()
                   .any(|s| matches!(s, Statement::Let { name, .. } if name == "y")));
}

#[test]
fn unrecognized_bytes_are_diagnosed() {
    let errors = parse_errors("let x = 5 @");
    assert!(errors[0].contains("Unrecognized token"), "diagnostics: {errors:?}");
}

#[test]
fn diagnostics_carry_source_lines() {
    let errors = parse_errors("let a = 1;\nlet b 2;");
    assert!(errors[0].contains("line 2"), "diagnostics: {errors:?}");
}

#[test]
fn printed_programs_reparse_to_the_same_shape() {
    let sources = ["let add = fn(x, y) { x + y }; add(2, add(6, 2))",
                   "let arr = [1, 2, 3]; arr[0] + arr[1] + arr[2]",
                   r#"let h = {"one": 1, "two": 2}; h["two"]"#,
                   "if (10 > 1) { if (10 > 1) { return true; } return 1; }",
                   "for i, v in range(0, 10) { puts(i, v) }",
                   "let counter = fn() { let n = 0; fn() { n = n + 1; n } };",
                   "a[0] = 5; x = !y; -a * b",
                   r#"{true: 1, 2: "two"}"#];

    for source in sources {
        let printed = parse_ok(source).to_string();
        let reparsed = parse_ok(&printed).to_string();
        assert_eq!(printed, reparsed, "source: {source}");
    }
}
