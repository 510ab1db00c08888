//! Edge case tests for laki-interp: whole programs through the full
//! lexer → parser → evaluator pipeline.

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use laki_lex::Lexer;
    use laki_par::Parser;
    use laki_util::{ErrorKind, LakiError};

    use crate::{global_symbols, Context, Flow, Interpreter, Value, ValueKind};

    fn run(source: &str) -> Result<Option<Value>, Box<LakiError>> {
        let tokens = Lexer::new("<test>", source).tokenize()?;
        let ast = Parser::new("<test>", tokens).parse()?;
        let ctx = Context::program("<test>", global_symbols());
        match Interpreter::new().visit(&ast, &ctx)? {
            Flow::Value(value) => Ok(Some(value)),
            _ => Ok(None),
        }
    }

    /// Evaluates the source and returns the value of its last statement.
    fn last(source: &str) -> Value {
        let top = run(source).expect("run failed").expect("no program value");
        match &top.kind {
            ValueKind::List(elements) => elements.last().expect("empty program").clone(),
            _ => panic!("program value was not a statement list"),
        }
    }

    fn run_err(source: &str) -> Box<LakiError> {
        run(source).expect_err("program unexpectedly succeeded")
    }

    fn elements(value: &Value) -> Rc<Vec<Value>> {
        match &value.kind {
            ValueKind::List(elements) => elements.clone(),
            _ => panic!("expected a list"),
        }
    }

    // ==================== VARIABLES ====================

    #[test]
    fn test_var_defines_and_reads_back() {
        assert_eq!(last("var x = 1 + 2\nx").to_string(), "3");
    }

    #[test]
    fn test_compound_assignment() {
        assert_eq!(last("var a = 1\na += 2\na").to_string(), "3");
        assert_eq!(last("var a = 10\na -= 3\na *= 2\na").to_string(), "14");
        assert_eq!(last("var a = 2\na **= 3\na").to_string(), "8");
        assert_eq!(last("var a = 7\na %= 4\na").to_string(), "3");
        assert_eq!(last("var s = 'a'\ns += 'b'\ns").to_string(), "'ab'");
    }

    #[test]
    fn test_mutating_undefined_fails() {
        let err = run_err("x = 1");
        assert_eq!(err.kind, ErrorKind::Runtime);
        assert_eq!(err.detail, "x is undefined");
    }

    #[test]
    fn test_reading_undefined_fails() {
        assert_eq!(run_err("nope").detail, "nope is undefined");
    }

    #[test]
    fn test_compound_assign_undefined_fails() {
        assert_eq!(run_err("q += 1").detail, "q is undefined");
    }

    #[test]
    fn test_seeded_constants() {
        assert_eq!(last("true").to_string(), "1");
        assert_eq!(last("false").to_string(), "0");
        assert_eq!(last("null").to_string(), "0");
        assert_eq!(last("PI").to_string(), "3.141592653589793");
        assert_eq!(last("true + true").to_string(), "2");
    }

    #[test]
    fn test_runs_do_not_share_state() {
        assert!(run("var z = 1").is_ok());
        assert_eq!(run_err("z").detail, "z is undefined");
    }

    // ==================== EXPRESSIONS ====================

    #[test]
    fn test_string_repetition() {
        assert_eq!(last("var s = 'ab'\ns * 3").to_string(), "'ababab'");
        assert_eq!(last("'ab' * 0 == ''").to_string(), "1");
    }

    #[test]
    fn test_list_round_trip() {
        assert_eq!(last("[1, 2, 3] + [] == [1, 2, 3]").to_string(), "1");
    }

    #[test]
    fn test_division_by_zero_spans_the_divisor() {
        let err = run_err("1 / 0");
        assert_eq!(err.detail, "Divisor cannot be 0");
        assert_eq!(err.span.start.index, 4);
        assert_eq!(err.span.end.index, 5);
    }

    #[test]
    fn test_logic_keywords() {
        assert_eq!(last("1 and 2").to_string(), "2");
        assert_eq!(last("0 or 5").to_string(), "5");
        assert_eq!(last("not 0").to_string(), "1");
        assert_eq!(last("not 3").to_string(), "0");
    }

    #[test]
    fn test_pow_is_right_associative() {
        assert_eq!(last("2 ** 3 ** 2").to_string(), "512");
    }

    // ==================== IF ====================

    #[test]
    fn test_if_else_branches() {
        assert_eq!(last("if 1 == 1 { 'y' } else { 'n' }").to_string(), "'y'");
        assert_eq!(last("if 1 == 2 { 'y' } else { 'n' }").to_string(), "'n'");
    }

    #[test]
    fn test_elif_chain() {
        let source = "var x = 2\nif x == 1 { 'a' } elif x == 2 { 'b' } else { 'c' }";
        assert_eq!(last(source).to_string(), "'b'");
    }

    #[test]
    fn test_if_without_match_yields_null() {
        assert_eq!(last("if 0 == 1 { 2 }").to_string(), "0");
    }

    // ==================== LOOPS ====================

    #[test]
    fn test_for_binds_each_value() {
        assert_eq!(last("var s = 0\nfor i = 1 to 5 { s += i }\ns").to_string(), "15");
    }

    #[test]
    fn test_for_iteration_count_is_inclusive() {
        // a ≤ b with no step: exactly b - a + 1 iterations
        let collected = last("for i = 3 to 7 { i }");
        assert_eq!(elements(&collected).len(), 5);
    }

    #[test]
    fn test_for_negative_step() {
        let collected = last("for i = 10 to 1 step -3 { i }");
        assert_eq!(elements(&collected).len(), 4);
        assert_eq!(collected.to_string(), "10, 7, 4, 1");
    }

    #[test]
    fn test_for_float_bounds() {
        let collected = last("for i = 0.5 to 2 { i }");
        assert_eq!(collected.to_string(), "0.5, 1.5");
    }

    #[test]
    fn test_loop_variable_remains_after_loop() {
        // the loop variable lives in the enclosing frame
        assert_eq!(last("for i = 1 to 3 { i }\ni").to_string(), "3");
    }

    #[test]
    fn test_break_stops_the_loop() {
        let source = "var s = 0\nfor i = 1 to 10 { if i == 3 { break }\ns += i }\ns";
        assert_eq!(last(source).to_string(), "3");
    }

    #[test]
    fn test_continue_skips_collection() {
        let collected = last("for i = 1 to 5 { if i == 2 { continue }\ni }");
        assert_eq!(elements(&collected).len(), 4);
    }

    #[test]
    fn test_while_collects_body_values() {
        let collected = last("var i = 0\nwhile i < 3 { i += 1 }");
        assert_eq!(collected.to_string(), "1, 2, 3");
    }

    #[test]
    fn test_while_false_never_runs() {
        let collected = last("while 0 { 1 }");
        assert!(elements(&collected).is_empty());
    }

    // ==================== FUNCTIONS ====================

    #[test]
    fn test_arrow_function_auto_returns() {
        assert_eq!(last("func sq(x) -> x * x\nsq(5)").to_string(), "25");
    }

    #[test]
    fn test_brace_body_needs_explicit_return() {
        assert_eq!(last("func f() -> { 1 }\nf()").to_string(), "0");
        assert_eq!(last("func g() -> { return 1 }\ng()").to_string(), "1");
    }

    #[test]
    fn test_recursion() {
        let source =
            "func fib(n) -> { if n < 2 { return n } return fib(n-1) + fib(n-2) }\nfib(10)";
        assert_eq!(last(source).to_string(), "55");
    }

    #[test]
    fn test_closure_reads_defining_scope() {
        assert_eq!(last("var x = 10\nfunc get() -> x\nget()").to_string(), "10");
    }

    #[test]
    fn test_parameters_shadow_outer_bindings() {
        let source = "var x = 1\nfunc f(x) -> x * 2\nf(5) + x";
        assert_eq!(last(source).to_string(), "11");
    }

    #[test]
    fn test_anonymous_function_value() {
        assert_eq!(last("var f = func (a, b) -> a + b\nf(2, 3)").to_string(), "5");
    }

    #[test]
    fn test_too_many_arguments() {
        let err = run_err("func f(a, b) -> a\nf(1, 2, 3)");
        assert_eq!(err.detail, "1 more arguments passed into f");
    }

    #[test]
    fn test_too_few_arguments() {
        let err = run_err("func f(a, b) -> a\nf(1)");
        assert_eq!(err.detail, "1 fewer arguments passed into f");
    }

    #[test]
    fn test_anonymous_arity_error_name() {
        let err = run_err("var f = func (a) -> a\nf()");
        assert_eq!(err.detail, "1 fewer arguments passed into <anonymous>");
    }

    #[test]
    fn test_calling_a_number_fails() {
        assert_eq!(run_err("var x = 1\nx()").detail, "Illegal Operation");
    }

    #[test]
    fn test_break_escapes_through_a_call() {
        // calls consume only `return`; a pending break continues outward
        // into the loop around the call site
        let source = "func b() -> { break }\nvar out = 0\nfor i = 1 to 3 { b()\nout += 1 }\nout";
        assert_eq!(last(source).to_string(), "0");
    }

    #[test]
    fn test_escaped_closure_reports_dropped_scope() {
        let source = "func make() -> { return func () -> 1 }\nvar f = make()\nf()";
        let err = run_err(source);
        assert!(err.detail.contains("defining scope"), "{}", err.detail);
    }

    // ==================== BUILTINS ====================

    #[test]
    fn test_int_parses_strings() {
        assert_eq!(last("int('42')").to_string(), "42");
        assert_eq!(last("int(' -7 ')").to_string(), "-7");
    }

    #[test]
    fn test_int_truncates_floats() {
        assert_eq!(last("int(3.9)").to_string(), "3");
        assert_eq!(last("int(-3.9)").to_string(), "-3");
    }

    #[test]
    fn test_int_conversion_failure() {
        let err = run_err("int('4.5')");
        assert_eq!(err.detail, "'4.5' cannot be converted to an int");
    }

    #[test]
    fn test_str_round_trips() {
        assert_eq!(last("str(int('42')) == '42'").to_string(), "1");
        assert_eq!(last("int(str(7)) == 7").to_string(), "1");
        assert_eq!(last("str(3.0)").to_string(), "'3.0'");
    }

    #[test]
    fn test_builtin_arity() {
        let err = run_err("int(1, 2)");
        assert_eq!(err.detail, "1 more arguments passed into int");
        let err = run_err("str()");
        assert_eq!(err.detail, "1 fewer arguments passed into str");
    }

    // ==================== CONTROL FLOW AT TOP LEVEL ====================

    #[test]
    fn test_top_level_return_yields_no_value() {
        assert!(run("return 1").expect("run failed").is_none());
    }

    #[test]
    fn test_program_value_is_statement_list() {
        let top = run("1\n2\n3").expect("run failed").expect("no value");
        assert_eq!(top.to_string(), "1, 2, 3");
    }

    // ==================== TRACEBACKS ====================

    #[test]
    fn test_runtime_error_traceback_frames() {
        let err = run_err("func f() -> 1 / 0\nf()");
        assert_eq!(err.trace.len(), 2);
        assert_eq!(err.trace[0].name, "<program>");
        assert_eq!(err.trace[1].name, "f");
        let rendered = err.to_string();
        assert!(rendered.starts_with("Traceback (most recent call last):\n"));
        assert!(rendered.ends_with("Runtime Error: Divisor cannot be 0\nFile <test>, line 1"));
    }

    #[test]
    fn test_error_line_numbers_are_one_based() {
        let err = run_err("1\n2\nboom");
        assert!(err.to_string().ends_with("File <test>, line 3"));
    }
}
