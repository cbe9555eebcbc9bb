use std::fs;

use canopy::{Value, error::InterpretError, interpret};
use walkdir::WalkDir;

fn eval_source(source: &str) -> Result<Value, InterpretError> {
    let mut out = String::new();
    interpret(source, &mut out)
}

fn eval_value(source: &str) -> Value {
    eval_source(source).unwrap_or_else(|e| panic!("Script failed: {e}\nScript: {source}"))
}

fn eval_error(source: &str) -> String {
    match eval_source(source) {
        Ok(value) => panic!("Script yielded {value} but was expected to fail: {source}"),
        Err(error) => error.to_string(),
    }
}

#[test]
fn integer_arithmetic() {
    let tests = [("5", 5),
                 ("10", 10),
                 ("-5", -5),
                 ("-10", -10),
                 ("5 + 5 + 5 + 5 - 10", 10),
                 ("2 * 2 * 2 * 2 * 2", 32),
                 ("-50 + 100 + -50", 0),
                 ("5 * 2 + 10", 20),
                 ("5 + 2 * 10", 25),
                 ("20 + 2 * -10", 0),
                 ("50 / 2 * 2 + 10", 60),
                 ("2 * (5 + 10)", 30),
                 ("3 * 3 * 3 + 10", 37),
                 ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
                 ("7 / 2", 3),
                 ("-7 / 2", -3)];

    for (input, expected) in tests {
        assert_eq!(eval_value(input), Value::Integer(expected), "input: {input}");
    }
}

#[test]
fn string_concatenation_and_comparison() {
    assert_eq!(eval_value(r#""hello" + " " + "world""#), Value::from("hello world"));
    assert_eq!(eval_value(r#""abc" < "add""#), Value::Bool(true));
    assert_eq!(eval_value(r#""abc" < "ab""#), Value::Bool(false));
    assert_eq!(eval_value(r#""abc" > "ab""#), Value::Bool(true));
    assert_eq!(eval_value(r#""name" == "name""#), Value::Bool(true));
    assert_eq!(eval_value(r#""name" != "name""#), Value::Bool(false));
}

#[test]
fn boolean_expressions() {
    let tests = [("true", true),
                 ("false", false),
                 ("1 < 2", true),
                 ("1 < 1", false),
                 ("1 > 2", false),
                 ("-1 < 0", true),
                 ("1 == 1", true),
                 ("1 != 1", false),
                 ("34 == 35", false),
                 ("true == true", true),
                 ("false == false", true),
                 ("true == false", false),
                 ("true != false", true),
                 ("(1 < 2) == true", true),
                 ("(1 > 2) == true", false)];

    for (input, expected) in tests {
        assert_eq!(eval_value(input), Value::Bool(expected), "input: {input}");
    }
}

#[test]
fn bang_operator() {
    let tests = [("!true", false),
                 ("!false", true),
                 ("!5", false),
                 ("!0", false),
                 ("!!true", true),
                 ("!!false", false),
                 ("!!5", true)];

    for (input, expected) in tests {
        assert_eq!(eval_value(input), Value::Bool(expected), "input: {input}");
    }
}

#[test]
fn if_else_expressions() {
    let tests = [("if (true) { 10 }", Value::Integer(10)),
                 ("if (false) { 10 }", Value::Null),
                 ("if (1) { 10 }", Value::Integer(10)),
                 ("if (0) { 10 }", Value::Integer(10)),
                 (r#"if ("") { 10 }"#, Value::Integer(10)),
                 ("if (1 < 2) { 10 }", Value::Integer(10)),
                 ("if (1 > 2) { 10 }", Value::Null),
                 ("if (1 > 2) { 10 } else { 20 }", Value::Integer(20)),
                 ("if (1 < 2) { 10 } else { 20 }", Value::Integer(10))];

    for (input, expected) in tests {
        assert_eq!(eval_value(input), expected, "input: {input}");
    }
}

#[test]
fn let_bindings_and_rebinding() {
    assert_eq!(eval_value("let a = 5; a"), Value::Integer(5));
    assert_eq!(eval_value("let a = 5 * 5; a"), Value::Integer(25));
    assert_eq!(eval_value("let a = 5; let b = a; b"), Value::Integer(5));
    assert_eq!(eval_value("let a = 5; a = a + 1; a"), Value::Integer(6));
    assert_eq!(eval_value("let a = 1; let shadow = fn() { let a = 2; a }; shadow(); a"),
               Value::Integer(1));
}

#[test]
fn assignment_to_undeclared_identifier_is_an_error() {
    assert_eq!(eval_error("x = 5"), "invalid assignment to non declared identifier x");
}

#[test]
fn return_statements_unwind_to_the_function_boundary() {
    let tests = [("return 10;", 10),
                 ("return 10; 9;", 10),
                 ("return 2 * 5; 9;", 10),
                 ("9; return 2 * 5; 9;", 10),
                 ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10),
                 ("let f = fn() { return 1; 2 }; f()", 1),
                 ("let f = fn() { if (true) { if (true) { return 3; } return 2; } return 1; }; f()",
                  3)];

    for (input, expected) in tests {
        assert_eq!(eval_value(input), Value::Integer(expected), "input: {input}");
    }
}

#[test]
fn function_application() {
    let tests = [("let identity = fn(x) { x; }; identity(5);", 5),
                 ("let identity = fn(x) { return x; }; identity(5);", 5),
                 ("let double = fn(x) { x * 2; }; double(5);", 10),
                 ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
                 ("let add = fn(x, y) { x + y; }; add(2, add(6, 2));", 10),
                 ("fn(x) { x; }(5)", 5)];

    for (input, expected) in tests {
        assert_eq!(eval_value(input), Value::Integer(expected), "input: {input}");
    }
}

#[test]
fn closures_capture_their_defining_scope() {
    let source = "let new_adder = fn(x) { fn(y) { x + y } }; \
                  let add_two = new_adder(2); \
                  add_two(3)";
    assert_eq!(eval_value(source), Value::Integer(5));
}

#[test]
fn closures_share_mutable_state_across_calls() {
    let source = "let counter = fn() { let n = 0; fn() { n = n + 1; n } }; \
                  let c = counter(); \
                  c(); c(); c()";
    assert_eq!(eval_value(source), Value::Integer(3));
}

#[test]
fn recursion_through_the_binding_environment() {
    let source = "let fibonacci = fn(n) { \
                      if (n < 2) { return n; } \
                      fibonacci(n - 1) + fibonacci(n - 2) \
                  }; \
                  fibonacci(10)";
    assert_eq!(eval_value(source), Value::Integer(55));
}

#[test]
fn higher_order_functions() {
    let source = "let apply = fn(f, x) { f(x) }; apply(fn(n) { n * 2 }, 21)";
    assert_eq!(eval_value(source), Value::Integer(42));
}

#[test]
fn wrong_function_arity_is_an_error() {
    assert_eq!(eval_error("let f = fn(x) { x }; f()"),
               "wrong number of arguments: got=0, want=1");
    assert_eq!(eval_error("let f = fn() { 1 }; f(1, 2)"),
               "wrong number of arguments: got=2, want=0");
}

#[test]
fn calling_a_non_function_is_an_error() {
    assert_eq!(eval_error("5(1)"), "not a function: INTEGER");
    assert_eq!(eval_error(r#"let x = "s"; x()"#), "not a function: STRING");
}

#[test]
fn array_literals_and_indexing() {
    assert_eq!(eval_value("[1, 2 * 2, 3 + 3]"),
               Value::from(vec![Value::Integer(1), Value::Integer(4), Value::Integer(6)]));

    let tests = [("[1, 2, 3][0]", Value::Integer(1)),
                 ("[1, 2, 3][1 + 1]", Value::Integer(3)),
                 ("let arr = [1, 2, 3]; arr[0] + arr[1] + arr[2]", Value::Integer(6)),
                 ("[1, 2, 3][3]", Value::Null),
                 ("[1, 2, 3][-1]", Value::Null)];

    for (input, expected) in tests {
        assert_eq!(eval_value(input), expected, "input: {input}");
    }
}

#[test]
fn array_index_assignment() {
    assert_eq!(eval_value("let a = [1, 2, 3]; a[0] = 9; a[0]"), Value::Integer(9));
    assert_eq!(eval_value("let a = [1]; a[0] = 5"), Value::Integer(5));

    assert_eq!(eval_error("let a = [1]; a[1] = 2"),
               "index out of range: got = 1 for array of size = 1");
    assert_eq!(eval_error("let a = [1]; a[-1] = 2"),
               "index out of range: got = -1 for array of size = 1");
}

#[test]
fn arrays_have_reference_semantics() {
    let source = "let a = [1, 2]; let f = fn(x) { x[0] = 9 }; f(a); a[0]";
    assert_eq!(eval_value(source), Value::Integer(9));
}

#[test]
fn push_does_not_mutate_its_argument() {
    assert_eq!(eval_value("let a = []; let b = push(a, 1); len(a)"), Value::Integer(0));
    assert_eq!(eval_value("let a = []; let b = push(a, 1); b[0]"), Value::Integer(1));
}

#[test]
fn hash_literals_and_structural_keys() {
    let tests = [(r#"let h = {"one": 1, "two": 2}; h["two"]"#, Value::Integer(2)),
                 (r#"{"k": 1}["k"]"#, Value::Integer(1)),
                 ("{1: 1}[1]", Value::Integer(1)),
                 ("{true: 1}[true]", Value::Integer(1)),
                 (r#"{"a": 1}["missing"]"#, Value::Null),
                 (r#"let key = "one"; {"one": 5 - 4}[key]"#, Value::Integer(1)),
                 (r#"{"a": 1, "a": 2}["a"]"#, Value::Integer(2))];

    for (input, expected) in tests {
        assert_eq!(eval_value(input), expected, "input: {input}");
    }
}

#[test]
fn hash_index_assignment() {
    assert_eq!(eval_value(r#"let h = {}; h["x"] = 1; h["x"]"#), Value::Integer(1));
    assert_eq!(eval_value(r#"let h = {"x": 1}; h["x"] = 2; h["x"]"#), Value::Integer(2));
    assert_eq!(eval_value(r#"let h = {}; h["x"] = 1"#), Value::Null);
    assert_eq!(eval_value(r#"let h = {}; let g = fn(m) { m[1] = true }; g(h); h[1]"#),
               Value::Bool(true));
}

#[test]
fn unusable_hash_keys_are_errors() {
    assert_eq!(eval_error("{[1]: 2}"), "unusable as hash key: ARRAY");
    assert_eq!(eval_error(r#"{"a": 1}[[1]]"#), "unusable as hash key: ARRAY");
    assert_eq!(eval_error(r#"{"name": "x"}[fn(x) { x }]"#), "unusable as hash key: FUNCTION");
}

#[test]
fn unsupported_index_operations_are_errors() {
    assert_eq!(eval_error("5[0]"), "index operator not supported: INTEGER");
    assert_eq!(eval_error("[1][true]"), "index operator not supported: ARRAY");
    assert_eq!(eval_error("5[0] = 1"), "index assignment not supported: INTEGER");
    assert_eq!(eval_error("[1][true] = 1"), "index assignment not supported: ARRAY");
}

#[test]
fn for_loops_over_arrays() {
    let source = "let sum = 0; \
                  for i, v in [10, 20, 30] { sum = sum + i + v } \
                  sum";
    assert_eq!(eval_value(source), Value::Integer(63));

    assert_eq!(eval_value("for i, v in [1, 2, 3] { v }"), Value::Null);
}

#[test]
fn for_loops_over_strings_use_byte_offsets() {
    let source = r#"let collected = ""; for i, c in "abc" { collected = collected + c } collected"#;
    assert_eq!(eval_value(source), Value::from("abc"));

    let source = r#"let last = 0; for i, c in "abc" { last = i } last"#;
    assert_eq!(eval_value(source), Value::Integer(2));
}

#[test]
fn for_loops_over_hashes_bind_key_and_value() {
    let source = r#"let h = {"a": 1, "b": 2, "c": 3};
                    let sum = 0;
                    for k, v in h { sum = sum + v }
                    sum"#;
    assert_eq!(eval_value(source), Value::Integer(6));

    let source = r#"let seen = ""; for k, v in {"x": 1} { seen = k } seen"#;
    assert_eq!(eval_value(source), Value::from("x"));
}

#[test]
fn for_loop_bindings_stay_in_their_own_scope() {
    assert_eq!(eval_error("for i, v in [1] { v } i"), "identifier not found: i");
}

#[test]
fn return_propagates_out_of_for_loops() {
    let source = "let find_big = fn(arr) { \
                      for i, v in arr { if (v > 1) { return v } } \
                      return 0; \
                  }; \
                  find_big([0, 5, 9])";
    assert_eq!(eval_value(source), Value::Integer(5));
}

#[test]
fn for_over_a_non_iterable_is_an_error() {
    assert_eq!(eval_error("for i, v in 5 { i }"),
               "for iterator must resolve to array, string or hash got INTEGER");
    assert_eq!(eval_error("for i, v in true { i }"),
               "for iterator must resolve to array, string or hash got BOOLEAN");
}

#[test]
fn len_builtin() {
    assert_eq!(eval_value(r#"len("four")"#), Value::Integer(4));
    assert_eq!(eval_value(r#"len("hello world")"#), Value::Integer(11));
    assert_eq!(eval_value(r#"len("")"#), Value::Integer(0));
    assert_eq!(eval_value("len([1, 2, 3])"), Value::Integer(3));
    assert_eq!(eval_value("len([])"), Value::Integer(0));
    assert_eq!(eval_value(r#"len({"a": 1, "b": 2})"#), Value::Integer(2));

    assert_eq!(eval_error("len(1)"), "argument to `len` not supported, got=INTEGER");
    assert_eq!(eval_error(r#"len("a", "b")"#),
               "wrong number of arguments to `len`. got=2, want=1");
}

#[test]
fn first_last_and_rest_builtins() {
    assert_eq!(eval_value("first([1, 2, 3])"), Value::Integer(1));
    assert_eq!(eval_value("first([])"), Value::Null);
    assert_eq!(eval_value("last([1, 2, 3])"), Value::Integer(3));
    assert_eq!(eval_value("last([])"), Value::Null);
    assert_eq!(eval_value("rest([1, 2, 3])"),
               Value::from(vec![Value::Integer(2), Value::Integer(3)]));
    assert_eq!(eval_value("rest([1])"), Value::from(vec![]));
    assert_eq!(eval_value("rest([])"), Value::Null);

    assert_eq!(eval_error("first(1)"), "argument to `first` must be ARRAY, got INTEGER");
    assert_eq!(eval_error(r#"last("s")"#), "argument to `last` must be ARRAY, got STRING");
    assert_eq!(eval_error("rest(true)"), "argument to `rest` must be ARRAY, got BOOLEAN");
}

#[test]
fn push_builtin() {
    assert_eq!(eval_value("push([], 1)"), Value::from(vec![Value::Integer(1)]));
    assert_eq!(eval_value("push([1], 2)"),
               Value::from(vec![Value::Integer(1), Value::Integer(2)]));

    assert_eq!(eval_error("push(1, 1)"), "first argument to `push` must be ARRAY, got INTEGER");
    assert_eq!(eval_error("push([])"), "wrong number of arguments to `push`. got=1, want=2");
}

#[test]
fn range_builtin() {
    assert_eq!(eval_value("range(0, 5)"),
               Value::from(vec![Value::Integer(0),
                                Value::Integer(1),
                                Value::Integer(2),
                                Value::Integer(3),
                                Value::Integer(4)]));
    assert_eq!(eval_value("range(3, 3)"), Value::from(vec![]));
    assert_eq!(eval_value("range(5, 0)"), Value::from(vec![]));
    assert_eq!(eval_value("range(-2, 1)"),
               Value::from(vec![Value::Integer(-2), Value::Integer(-1), Value::Integer(0)]));

    assert_eq!(eval_error(r#"range("a", 1)"#), "arguments to `range` must be INTEGER, got STRING");
    assert_eq!(eval_error("range(1, true)"), "arguments to `range` must be INTEGER, got BOOLEAN");
    assert_eq!(eval_error("range(1)"), "wrong number of arguments to `range`. got=1, want=2");
}

#[test]
fn puts_writes_to_the_output_sink() {
    let mut out = String::new();
    let result = interpret(r#"puts("hello", 1, true)"#, &mut out).unwrap();

    assert_eq!(result, Value::Null);
    assert_eq!(out, "hello, 1, true\n");

    let mut out = String::new();
    interpret("puts([1, 2]); puts(3)", &mut out).unwrap();
    assert_eq!(out, "[1, 2]\n3\n");
}

#[test]
fn error_messages_match_the_frozen_taxonomy() {
    let tests = [("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
                 ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
                 ("-true", "unknown operator: -BOOLEAN"),
                 ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                  "unknown operator: BOOLEAN + BOOLEAN"),
                 (r#""hello" - "world""#, "unknown operator: STRING - STRING"),
                 ("foobar", "identifier not found: foobar"),
                 ("5 / 0", "division by zero"),
                 ("9223372036854775807 + 1", "integer overflow")];

    for (input, expected) in tests {
        assert_eq!(eval_error(input), expected, "input: {input}");
    }
}

#[test]
fn errors_short_circuit_argument_lists() {
    let mut out = String::new();
    let error = interpret("puts(1, missing, 2)", &mut out).unwrap_err();

    assert_eq!(error.to_string(), "identifier not found: missing");
    assert_eq!(out, "", "no argument may be printed once one of them fails");
}

#[test]
fn null_and_booleans_compare_by_identity() {
    assert_eq!(eval_value("let n = if (false) { 1 }; n == true"), Value::Bool(false));
    assert_eq!(eval_value("let n = if (false) { 1 }; n != true"), Value::Bool(true));
    assert_eq!(eval_value("let n = if (false) { 1 }; n == n"), Value::Bool(true));
    assert_eq!(eval_value("let n = if (false) { 1 }; !n"), Value::Bool(true));

    assert_eq!(eval_error("5 == true"), "type mismatch: INTEGER == BOOLEAN");
    assert_eq!(eval_error("[1] == [1]"), "unknown operator: ARRAY == ARRAY");
}

#[test]
fn values_render_in_their_canonical_forms() {
    assert_eq!(eval_value(r#""hello""#).to_string(), "hello");
    assert_eq!(eval_value("[1, \"two\", true]").to_string(), "[1, two, true]");
    assert_eq!(eval_value("fn(x) { x; }").to_string(), "fn(x) { x; }");
    assert_eq!(eval_value(r#"{"a": 1}"#).to_string(), "{a: 1}");
    assert_eq!(eval_value("if (false) { 1 }").to_string(), "null");
    assert_eq!(eval_value("len").to_string(), "builtin function `len`");
}

#[test]
fn bindings_shadow_builtins() {
    assert_eq!(eval_value("let len = 5; len"), Value::Integer(5));
}

#[test]
fn unterminated_strings_run_to_end_of_input() {
    assert_eq!(eval_value("\"abc"), Value::from("abc"));
}

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "cnp"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut out = String::new();
        if let Err(e) = interpret(&source, &mut out) {
            panic!("Demo script {path:?} failed:\n{source}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
