use quill::{error::InterpretError, interpreter::value::core::Value, run};

fn eval(source: &str) -> Value {
    run(source).unwrap_or_else(|error| panic!("evaluation failed for {source:?}: {error}"))
}

fn eval_error(source: &str) -> String {
    match run(source) {
        Err(InterpretError::Runtime(error)) => error.to_string(),
        Ok(value) => panic!("expected a runtime error for {source:?}, got {value}"),
        Err(error) => panic!("expected a runtime error for {source:?}, got {error}"),
    }
}

#[test]
fn integer_expressions() {
    let cases = [("5", 5),
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
                 ("3 * (3 * 3) + 10", 37),
                 ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
                 ("7 / 2", 3)];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Integer(expected), "source: {source}");
    }
}

#[test]
fn boolean_expressions() {
    let cases = [("true", true),
                 ("false", false),
                 ("1 < 2", true),
                 ("1 > 2", false),
                 ("1 < 1", false),
                 ("1 == 1", true),
                 ("1 != 1", false),
                 ("1 == 2", false),
                 ("1 != 2", true),
                 ("true == true", true),
                 ("false == false", true),
                 ("true == false", false),
                 ("true != false", true),
                 ("(1 < 2) == true", true),
                 ("(1 > 2) == true", false)];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Bool(expected), "source: {source}");
    }
}

#[test]
fn bang_operator_negates_truthiness() {
    let cases = [("!true", false),
                 ("!false", true),
                 ("!5", false),
                 ("!0", false),
                 ("!!true", true),
                 ("!!false", false),
                 ("!!5", true),
                 ("!(if (false) { 1 })", true)];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Bool(expected), "source: {source}");
    }
}

#[test]
fn if_expressions_pick_the_truthy_branch() {
    assert_eq!(eval("if (true) { 10 }"), Value::Integer(10));
    assert_eq!(eval("if (false) { 10 }"), Value::Null);
    assert_eq!(eval("if (1) { 10 }"), Value::Integer(10));
    assert_eq!(eval("if (1 < 2) { 10 }"), Value::Integer(10));
    assert_eq!(eval("if (1 > 2) { 10 }"), Value::Null);
    assert_eq!(eval("if (1 > 2) { 10 } else { 20 }"), Value::Integer(20));
    assert_eq!(eval("if (1 < 2) { 10 } else { 20 }"), Value::Integer(10));
}

#[test]
fn return_unwinds_to_the_program_boundary() {
    assert_eq!(eval("return 10;"), Value::Integer(10));
    assert_eq!(eval("return 10; 9;"), Value::Integer(10));
    assert_eq!(eval("return 2 * 5; 9;"), Value::Integer(10));
    assert_eq!(eval("9; return 2 * 5; 9;"), Value::Integer(10));
}

#[test]
fn return_escapes_nested_blocks() {
    let source = "if (10 > 1) {
        if (10 > 1) {
            return 10;
        }
        return 1;
    }";

    assert_eq!(eval(source), Value::Integer(10));
}

#[test]
fn let_statements_bind_names() {
    assert_eq!(eval("let a = 5; a;"), Value::Integer(5));
    assert_eq!(eval("let a = 5 * 5; a;"), Value::Integer(25));
    assert_eq!(eval("let a = 5; let b = a; b;"), Value::Integer(5));
    assert_eq!(eval("let a = 5; let b = a; let c = a + b + 5; c;"), Value::Integer(15));
}

#[test]
fn a_trailing_let_yields_null() {
    assert_eq!(eval("let a = 5;"), Value::Null);
    assert_eq!(eval(""), Value::Null);
}

#[test]
fn blocks_do_not_open_a_new_scope() {
    assert_eq!(eval("if (true) { let x = 10; } x"), Value::Integer(10));
}

#[test]
fn function_application() {
    assert_eq!(eval("let identity = fn(x) { x; }; identity(5);"), Value::Integer(5));
    assert_eq!(eval("let identity = fn(x) { return x; }; identity(5);"), Value::Integer(5));
    assert_eq!(eval("let double = fn(x) { x * 2; }; double(5);"), Value::Integer(10));
    assert_eq!(eval("let add = fn(x, y) { x + y; }; add(5, 5);"), Value::Integer(10));
    assert_eq!(eval("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));"),
               Value::Integer(20));
    assert_eq!(eval("fn(x) { x; }(5)"), Value::Integer(5));
}

#[test]
fn closures_capture_their_defining_environment() {
    let source = "let newAdder = fn(x) { fn(y) { x + y } };
    let addTwo = newAdder(2);
    addTwo(3);";

    assert_eq!(eval(source), Value::Integer(5));
}

#[test]
fn closures_see_bindings_made_after_capture() {
    // The environment is captured by reference, so a function can call
    // itself through the name its own `let` introduces.
    let source = "let factorial = fn(n) {
        if (n < 1) {
            return 1;
        }
        n * factorial(n - 1)
    };
    factorial(5)";

    assert_eq!(eval(source), Value::Integer(120));
}

#[test]
fn functions_as_arguments_and_results() {
    let source = "let compose = fn(f, g) { fn(x) { g(f(x)) } };
    let inc = fn(x) { x + 1 };
    let double = fn(x) { x * 2 };
    compose(inc, double)(5)";

    assert_eq!(eval(source), Value::Integer(12));
}

#[test]
fn parameter_binding_is_lenient() {
    assert_eq!(eval("let pick = fn(x, y) { x }; pick(1)"), Value::Integer(1));
    assert_eq!(eval("let pick = fn(x, y) { x }; pick(1, 2, 3)"), Value::Integer(1));
    assert_eq!(eval_error("fn(x, y) { y }(1)"),
               "Error on line 1: identifier not found: y.");
}

#[test]
fn string_concatenation() {
    assert_eq!(eval("\"hello\" + \" \" + \"world\""), Value::from("hello world"));
    assert_eq!(eval("let greet = fn(name) { \"hello \" + name }; greet(\"quill\")"),
               Value::from("hello quill"));
}

#[test]
fn error_propagation_halts_evaluation() {
    let cases = [("5 + true;", "Error on line 1: type mismatch: INTEGER + BOOLEAN."),
                 ("5 + true; 5;", "Error on line 1: type mismatch: INTEGER + BOOLEAN."),
                 ("-true", "Error on line 1: unknown operator: -BOOLEAN."),
                 ("true + false;", "Error on line 1: unknown operator: BOOLEAN + BOOLEAN."),
                 ("5; true + false; 5", "Error on line 1: unknown operator: BOOLEAN + BOOLEAN."),
                 ("if (10 > 1) { true + false; }",
                  "Error on line 1: unknown operator: BOOLEAN + BOOLEAN."),
                 ("\"a\" == \"a\"", "Error on line 1: unknown operator: STRING == STRING."),
                 ("\"a\" - \"b\"", "Error on line 1: unknown operator: STRING - STRING."),
                 ("foobar", "Error on line 1: identifier not found: foobar."),
                 ("let f = 5; f();", "Error on line 1: not a function: INTEGER."),
                 ("5[0]", "Error on line 1: index operator not supported: INTEGER."),
                 ("5 / 0", "Error on line 1: Division by zero.")];

    for (source, expected) in cases {
        assert_eq!(eval_error(source), expected, "source: {source}");
    }
}

#[test]
fn errors_unwind_out_of_nested_blocks() {
    let source = "if (10 > 1) {
        if (10 > 1) {
            return true + false;
        }
        return 1;
    }";

    assert_eq!(eval_error(source), "Error on line 3: unknown operator: BOOLEAN + BOOLEAN.");
}

#[test]
fn mixed_type_equality_compares_identity() {
    assert_eq!(eval("5 == true"), Value::Bool(false));
    assert_eq!(eval("5 != true"), Value::Bool(true));
    assert_eq!(eval("let a = [1, 2]; a == a"), Value::Bool(true));
    assert_eq!(eval("[1] == [1]"), Value::Bool(false));
    assert_eq!(eval("(if (false) { 1 }) == (if (false) { 1 })"), Value::Bool(true));
}

#[test]
fn array_literals_and_indexing() {
    assert_eq!(eval("let a = [1, 2 * 2, 3 + 3]; a[1];"), Value::Integer(4));
    assert_eq!(eval("[1, 2, 3][0]"), Value::Integer(1));
    assert_eq!(eval("[1, 2, 3][2]"), Value::Integer(3));
    assert_eq!(eval("let i = 0; [1][i];"), Value::Integer(1));
    assert_eq!(eval("let a = [1, 2, 3]; a[2] + a[1] + a[0];"), Value::Integer(6));
    assert_eq!(eval("[1, 2, 3]").to_string(), "[1, 2, 3]");
}

#[test]
fn out_of_bounds_indexing_yields_null_not_an_error() {
    assert_eq!(eval("[1, 2, 3][3]"), Value::Null);
    assert_eq!(eval("[1, 2, 3][-1]"), Value::Null);
    assert_eq!(eval("[][0]"), Value::Null);
}

#[test]
fn hash_literals_and_indexing() {
    assert_eq!(eval("let h = {\"one\": 1, 2: \"two\", true: 3}; h[\"one\"]"),
               Value::Integer(1));
    assert_eq!(eval("let h = {\"one\": 1, 2: \"two\", true: 3}; h[2]"), Value::from("two"));
    assert_eq!(eval("let h = {\"one\": 1, 2: \"two\", true: 3}; h[true]"), Value::Integer(3));
    assert_eq!(eval("let h = {\"one\": 1, 2: \"two\", true: 3}; h[\"missing\"]"), Value::Null);
    assert_eq!(eval("let h = {\"one\": 1, 2: \"two\", true: 3}; h[false]"), Value::Null);
    assert_eq!(eval("{}[\"k\"]"), Value::Null);
    assert_eq!(eval("{\"k\": 5}[\"k\"]"), Value::Integer(5));
    assert_eq!(eval("let key = \"foo\"; {\"foo\": 5}[key]"), Value::Integer(5));
}

#[test]
fn later_duplicate_hash_keys_overwrite_earlier_ones() {
    assert_eq!(eval("{\"a\": 1, \"a\": 2}[\"a\"]"), Value::Integer(2));
}

#[test]
fn unhashable_keys_are_rejected() {
    assert_eq!(eval_error("{[1]: 1}"), "Error on line 1: unusable as hash key: ARRAY.");
    assert_eq!(eval_error("{\"name\": 1}[fn(x) { x }];"),
               "Error on line 1: unusable as hash key: FUNCTION.");
}

#[test]
fn hash_keys_agree_exactly_with_value_equality() {
    let equal = [(Value::from("Hello World"), Value::from("Hello World")),
                 (Value::Integer(42), Value::Integer(42)),
                 (Value::Bool(true), Value::Bool(true))];
    for (left, right) in equal {
        assert_eq!(left.hash_key(1).unwrap(), right.hash_key(1).unwrap());
    }

    let distinct = [(Value::from("Hello"), Value::from("World")),
                    (Value::Integer(1), Value::Integer(2)),
                    (Value::Bool(true), Value::Bool(false)),
                    (Value::Integer(1), Value::Bool(true)),
                    (Value::Integer(0), Value::Bool(false)),
                    (Value::from("1"), Value::Integer(1))];
    for (left, right) in distinct {
        assert_ne!(left.hash_key(1).unwrap(), right.hash_key(1).unwrap());
    }

    assert!(Value::Null.hash_key(1).is_err());
}

#[test]
fn builtin_len() {
    assert_eq!(eval("len(\"\")"), Value::Integer(0));
    assert_eq!(eval("len(\"four\")"), Value::Integer(4));
    assert_eq!(eval("len(\"hello world\")"), Value::Integer(11));
    assert_eq!(eval("len([1, 2, 3])"), Value::Integer(3));
    assert_eq!(eval("len([])"), Value::Integer(0));
    assert_eq!(eval_error("len(1)"),
               "Error on line 1: argument to `len` not supported, got INTEGER.");
    assert_eq!(eval_error("len(\"one\", \"two\")"),
               "Error on line 1: wrong number of arguments. got=2, want=1.");
}

#[test]
fn builtin_first_last_rest() {
    assert_eq!(eval("first([1, 2, 3])"), Value::Integer(1));
    assert_eq!(eval("first([])"), Value::Null);
    assert_eq!(eval("last([1, 2, 3])"), Value::Integer(3));
    assert_eq!(eval("last([])"), Value::Null);
    assert_eq!(eval("rest([1, 2])").to_string(), "[2]");
    assert_eq!(eval("rest([1])").to_string(), "[]");
    assert_eq!(eval("rest([])"), Value::Null);
    assert_eq!(eval("rest(rest([1, 2, 3]))").to_string(), "[3]");
    assert_eq!(eval_error("first(1)"),
               "Error on line 1: argument to `first` not supported, got INTEGER.");
}

#[test]
fn builtin_push_does_not_mutate() {
    assert_eq!(eval("let a = [1]; let b = push(a, 2); len(a)"), Value::Integer(1));
    assert_eq!(eval("let a = [1]; let b = push(a, 2); len(b)"), Value::Integer(2));
    assert_eq!(eval("push([], 1)").to_string(), "[1]");
    assert_eq!(eval("let a = [1, 2]; rest(a); len(a)"), Value::Integer(2));
    assert_eq!(eval_error("push(1, 1)"),
               "Error on line 1: argument to `push` not supported, got INTEGER.");
}

#[test]
fn builtin_puts_returns_null() {
    assert_eq!(eval("puts(\"hello\", 42)"), Value::Null);
    assert_eq!(eval("puts()"), Value::Null);
}

#[test]
fn user_bindings_shadow_builtins() {
    assert_eq!(eval("let len = fn(x) { 99 }; len([1, 2])"), Value::Integer(99));
}

#[test]
fn builtins_are_first_class_values() {
    assert_eq!(eval("let measure = len; measure(\"abc\")"), Value::Integer(3));
    assert_eq!(eval("len").to_string(), "builtin function");
}

#[test]
fn value_display_forms() {
    assert_eq!(eval("42").to_string(), "42");
    assert_eq!(eval("true").to_string(), "true");
    assert_eq!(eval("\"raw text\"").to_string(), "raw text");
    assert_eq!(eval("if (false) { 1 }").to_string(), "null");
    assert_eq!(eval("[1, 2 + 3, \"x\"]").to_string(), "[1, 5, x]");
    assert_eq!(eval("{\"a\": 1}").to_string(), "{a: 1}");
    assert_eq!(eval("fn(x, y) { x + y; }").to_string(), "fn(x, y) {\n(x + y)\n}");
}

#[test]
fn arithmetic_is_checked_not_wrapping() {
    let max = i64::MAX.to_string();
    assert!(eval_error(&format!("{max} + 1")).contains("overflow"));
    assert!(eval_error(&format!("-{max} - 2")).contains("overflow"));
}
