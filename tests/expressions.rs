use calyard::{evaluate_line, render_line};

fn assert_result(src: &str, expected: f64) {
    match evaluate_line(src) {
        Ok(value) => assert_eq!(value, expected, "Wrong result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_rendered(src: &str, expected: &str) {
    assert_eq!(render_line(src), expected, "Wrong rendering for {src:?}");
}

fn assert_failure(src: &str) {
    if evaluate_line(src).is_ok() {
        panic!("Expression {src:?} succeeded but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_result("1+2", 3.0);
    assert_result("8-5", 3.0);
    assert_result("7*9", 63.0);
    assert_result("10/2", 5.0);
    assert_result("5", 5.0);
}

#[test]
fn precedence_and_associativity() {
    assert_result("1+2*3", 7.0);
    assert_result("2*3+1", 7.0);
    assert_result("10-4/2", 8.0);
    // Equal-priority runs reduce left to right.
    assert_result("1-2-3", -4.0);
    assert_result("16/4/2", 2.0);
    assert_result("10-2+3", 11.0);
}

#[test]
fn parentheses_group() {
    assert_result("(1+2)*3", 9.0);
    assert_result("2*(3+4)", 14.0);
    assert_result("((2))", 2.0);
    assert_result("(1+2)-3", 0.0);
    assert_result("(1+2)*(3+4)", 21.0);
}

#[test]
fn decimal_literals() {
    assert_result("10/4", 2.5);
    assert_result("1.5+1.25", 2.75);
    assert_result(".5*4", 2.0);
    assert_result("2.", 2.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_result("1 + 2", 3.0);
    assert_result(" 1  +2 ", 3.0);
    assert_result("\t1+2\t", 3.0);
    // Spaces are even tolerated between the digits of one literal.
    assert_result("1 2+3", 15.0);
    assert_result("1 . 5 * 2", 3.0);
}

#[test]
fn unary_minus() {
    assert_result("-5+3", -2.0);
    assert_result("-5 + 3", -2.0);
    assert_result("3 - -2", 5.0);
    assert_result("3--2", 5.0);
    assert_result("2*-3", -6.0);
    assert_result("(-5+3)", -2.0);
    // A run of minus signs collapses into one sign.
    assert_result("--3", 3.0);
    assert_result("---3", -3.0);
    assert_result("3---2", 1.0);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("2/0");
    assert_failure("4/0");
    assert_failure("1/(2-2)");
    assert_failure("(1+1)/(2-2)");
    assert_failure("1/-0");
}

#[test]
fn unmatched_parentheses_are_errors() {
    assert_failure("(1+2");
    assert_failure("((1+2)");
    assert_failure("1+2)");
    assert_failure("(1+2))");
    assert_failure(")");
}

#[test]
fn malformed_literals_are_errors() {
    assert_failure("1..2");
    assert_failure("1.2.3");
    assert_failure("1. 2 .3");
}

#[test]
fn dangling_minus_is_error() {
    assert_failure("-");
    assert_failure("5-");
    assert_failure("3 - -");
    assert_failure("--");
}

#[test]
fn unrecognized_symbols_are_errors() {
    assert_failure("1+a");
    assert_failure("2^3");
    assert_failure("1#2");
}

#[test]
fn incomplete_expressions_are_errors() {
    assert_failure("");
    assert_failure("   ");
    assert_failure("1+");
    assert_failure("1++2");
    assert_failure("()");
    assert_failure("1 2 3 +");
    assert_failure("-(2)");
}

#[test]
fn rendering_uses_two_decimal_places() {
    assert_rendered("1+2*3", "7.00");
    assert_rendered("(1+2)*3", "9.00");
    assert_rendered("10/4", "2.50");
    assert_rendered("-5 + 3", "-2.00");
    assert_rendered("1/3", "0.33");
    assert_rendered("--3", "3.00");
    assert_rendered(".", "0.00");
}

#[test]
fn rendering_collapses_every_failure() {
    assert_rendered("2/0", "[error]");
    assert_rendered("((1+2)", "[error]");
    assert_rendered("1..2", "[error]");
    assert_rendered("1+a", "[error]");
    assert_rendered("", "[error]");
}

#[test]
fn re_evaluation_is_idempotent() {
    let first = evaluate_line("(8-3)*2.5").unwrap();
    let second = evaluate_line("(8-3)*2.5").unwrap();
    assert_eq!(first, second);
    assert_eq!(render_line("2/0"), render_line("2/0"));
}

#[test]
fn deep_nesting_does_not_recurse() {
    let depth = 10_000;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_result(&src, 1.0);
}
