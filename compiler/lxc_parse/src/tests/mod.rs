use super::*;
use lxc_lexer::tokenize;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn parse_src(source: &str) -> ParseOutput {
    parse(&tokenize(source), &ParseConfig::default())
}

fn positions(out: &ParseOutput) -> Vec<(u32, u32)> {
    out.diagnostics.iter().map(Diagnostic::position).collect()
}

fn codes(out: &ParseOutput) -> Vec<ErrorCode> {
    out.diagnostics.iter().map(|d| d.code).collect()
}

fn assert_clean(source: &str) -> ParseOutput {
    let out = parse_src(source);
    assert!(out.is_ok(), "unexpected diagnostics for {source:?}: {:#?}", out.diagnostics);
    out
}

// ─── End-to-end ──────────────────────────────────────────────────────

#[test]
fn valid_program_has_no_diagnostics() {
    let out = assert_clean("main: { int x = 5; display x; }");
    assert_eq!(out.trace.count_entered(Rule::Program), 1);
    assert_eq!(out.trace.count_entered(Rule::Block), 1);
    assert_eq!(out.trace.count_entered(Rule::DeclStmt), 1);
    assert_eq!(out.trace.count_entered(Rule::OutputStmt), 1);
    assert!(out.trace.events().contains(&TraceEvent::Exit {
        rule: Rule::Program,
        ok: true
    }));
}

#[test]
fn missing_initializer_is_one_diagnostic_at_semicolon() {
    let out = parse_src("main: { int x = ; }");
    assert_eq!(out.diagnostics.len(), 1);
    let diag = &out.diagnostics[0];
    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.position(), (1, 17));
    assert_eq!(diag.found, ";");
    assert!(diag.message.contains("Expected an expression"), "{}", diag.message);

    // The block still closes normally.
    assert!(out.trace.events().contains(&TraceEvent::Exit {
        rule: Rule::Block,
        ok: true
    }));
    assert_eq!(out.trace.consumed_texts().last(), Some("}"));
}

#[test]
fn conditional_fragment_parses_as_one_cond_stmt() {
    let out = assert_clean("do if (x >= 10) { display x; }");
    assert_eq!(out.trace.count_entered(Rule::CondStmt), 1);
    assert_eq!(out.trace.count_entered(Rule::Block), 1);
}

// ─── Multiple errors ─────────────────────────────────────────────────

#[test]
fn two_missing_semicolons_in_declarations() {
    let source = "main: {\n    int x = 5\n    int y = 6\n    display x;\n}";
    let out = parse_src(source);
    assert_eq!(codes(&out), vec![ErrorCode::E1006, ErrorCode::E1006]);
    // Each error points at the token where ';' was expected.
    assert_eq!(positions(&out), vec![(3, 5), (4, 5)]);
}

#[test]
fn two_missing_semicolons_in_assignments() {
    let source = "main: {\n  x = 1\n  y = 2\n  z = 3;\n}";
    let out = parse_src(source);
    assert_eq!(positions(&out), vec![(3, 3), (4, 3)]);
    assert!(out
        .diagnostics
        .iter()
        .all(|d| d.message == "Missing ';' at end of statement"));
}

#[test]
fn independent_errors_in_separate_statements() {
    let source = "main: {\n  int = 4;\n  display ;\n  put 5;\n}";
    let out = parse_src(source);
    assert_eq!(
        codes(&out),
        vec![ErrorCode::E1004, ErrorCode::E1002, ErrorCode::E1004]
    );
    assert_eq!(positions(&out), vec![(2, 7), (3, 11), (4, 7)]);
}

#[test]
fn panic_mode_suppresses_cascading_errors() {
    // After `int x = )` the rest of the statement is garbage; only the
    // first problem is reported.
    let out = parse_src("main: { int x = ) ) ) ; display x; }");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.trace.count_entered(Rule::OutputStmt), 1);
}

#[test]
fn error_inside_nested_block_recovers_locally() {
    let out = parse_src("main: { do if (x) { int y = ; } display x; }");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].position(), (1, 29));
    assert_eq!(out.trace.count_entered(Rule::OutputStmt), 1);
}

#[test]
fn missing_close_paren_skips_the_body_group() {
    let out = parse_src("main: { do if (x > 1 { display x; } display y; }");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].message, "Missing ')' after condition");
    assert_eq!(out.diagnostics[0].found, "{");
}

#[test]
fn resume_at_identifier_on_next_line() {
    let out = parse_src("main: {\n  display x\n  y = 2;\n}");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.trace.count_entered(Rule::AssignStmt), 1);
}

// ─── Declarations ────────────────────────────────────────────────────

#[test]
fn declaration_forms() {
    assert_clean("main: { int a; }");
    assert_clean("main: { let float b = 1.5; }");
    assert_clean("main: { var int a, b = 2, c; }");
    assert_clean("main: { int a = 1, b; }");
    assert_clean("main: { cons int LIMIT = 10; }");
    assert_clean("main: { only text name = \"lxc\"; }");
    assert_clean("main: { char c = 'a'; bool ok = true; }");
}

#[test]
fn bare_name_needs_terminator() {
    let out = parse_src("main: { int a b; }");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(
        out.diagnostics[0].message,
        "Expected ';', '=', or ',' after variable name"
    );
    assert_eq!(out.diagnostics[0].found, "b");
}

#[test]
fn constant_needs_value() {
    let out = parse_src("main: { cons int LIMIT; }");
    assert_eq!(codes(&out), vec![ErrorCode::E1011]);
}

#[test]
fn scope_modifier_without_type() {
    let out = parse_src("main: { let x = 1; }");
    assert_eq!(codes(&out), vec![ErrorCode::E1005]);
    assert_eq!(out.diagnostics[0].found, "x");
}

#[test]
fn assignment_needs_operator() {
    let out = parse_src("main: { x 5; }");
    assert_eq!(codes(&out), vec![ErrorCode::E1011]);
    assert_clean("main: { x += 5; y %= 2; z = a = b; }");
}

// ─── Statements ──────────────────────────────────────────────────────

#[test]
fn do_if_chain_with_clauses() {
    let out = assert_clean(
        "main: {\n  do if (x < 1) { display 1; }\n  what if (x < 2) display 2;\n  \
         then do { display 3; }\n}",
    );
    assert_eq!(out.trace.count_entered(Rule::CondStmt), 1);
    // The `what if` body is a bare statement.
    assert_eq!(out.trace.count_entered(Rule::Block), 2);
}

#[test]
fn do_without_if() {
    let out = parse_src("main: { do (x) { } }");
    assert_eq!(codes(&out), vec![ErrorCode::E1010]);
    assert_eq!(out.diagnostics[0].message, "Missing 'if' after 'do'");
}

#[test]
fn compare_statement() {
    let out = assert_clean(
        "main: {\n  compare x {\n    what if 1: display x; break;\n    \
         what if 2: display y; x = 0; break;\n    then do: display z;\n  }\n}",
    );
    assert_eq!(out.trace.count_entered(Rule::CondStmt), 1);
    assert_eq!(out.trace.count_entered(Rule::BreakStmt), 0);
}

#[test]
fn compare_case_without_break() {
    let out = parse_src("main: { compare x { what if 1: display x; } }");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].message, "Missing 'break' at end of case");
    assert_eq!(out.diagnostics[0].found, "}");
}

#[test]
fn compare_error_does_not_close_the_enclosing_block() {
    let out = parse_src("main: { compare x { what if : display x; break; } display y; }");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].position(), (1, 29));
    // The statement after the compare is parsed, not skipped as trailing code.
    assert_eq!(out.trace.count_entered(Rule::OutputStmt), 1);
    assert!(out.diagnostics.iter().all(|d| d.code != ErrorCode::E1009));
}

#[test]
fn errors_after_a_broken_compare_are_still_found() {
    let out = parse_src("main: { compare x { what if : display x; break; } int z = ; }");
    assert_eq!(codes(&out), vec![ErrorCode::E1002, ErrorCode::E1002]);
    assert_eq!(positions(&out), vec![(1, 29), (1, 59)]);
}

#[test]
fn compare_recovers_at_the_next_arm() {
    let out = parse_src(
        "main: {\n  compare x {\n    what if 1 display x; break;\n    \
         what if 2: display y; break;\n    then do: display z;\n  }\n  display w;\n}",
    );
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].message, "Missing ':' after case value");
    // `display x` is skipped with the broken arm; y, z and w are parsed.
    assert_eq!(out.trace.count_entered(Rule::OutputStmt), 3);
}

#[test]
fn stray_token_inside_compare() {
    let out = parse_src("main: { compare x { 5; what if 1: break; } display x; }");
    assert_eq!(codes(&out), vec![ErrorCode::E1010]);
    assert_eq!(out.diagnostics[0].found, "5");
    assert_eq!(out.trace.count_entered(Rule::OutputStmt), 1);
}

#[test]
fn nested_braces_inside_a_broken_case_are_skipped_whole() {
    let out = parse_src(
        "main: { compare x { what if ) do if (x) { display x; } break; then do: put y; } display z; }",
    );
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.trace.count_entered(Rule::InputStmt), 1);
    assert_eq!(out.trace.count_entered(Rule::OutputStmt), 1);
}

// ─── Panic mode ──────────────────────────────────────────────────────

#[test]
fn enclosing_rule_failing_at_same_token_is_not_reported_twice() {
    // Both blocks are missing '}' at end of input; only the first counts.
    let out = parse_src("main: { do if (x) { display x;");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].message, "Missing '}' to close a block");
    let errors = out
        .trace
        .events()
        .iter()
        .filter(|e| matches!(e, TraceEvent::Error { .. }))
        .count();
    assert_eq!(errors, 2);
}

#[test]
fn repeated_stray_keywords_report_once() {
    let out = parse_src("main: { what then what display x; }");
    assert_eq!(codes(&out), vec![ErrorCode::E1007]);
    assert_eq!(out.trace.count_entered(Rule::OutputStmt), 1);
}

#[test]
fn panic_ends_once_a_token_is_accepted() {
    // The second error follows a consumed `int`, so it is reported.
    let out = parse_src("main: {\n  display x\n  int = 2;\n}");
    assert_eq!(codes(&out), vec![ErrorCode::E1006, ErrorCode::E1004]);
}

#[test]
fn loops() {
    assert_clean("main: { continue until (i < 10) { i += 1; } }");
    assert_clean("main: { continue until (i = 0; i < 10; i++) display i; }");
    assert_clean("main: { stop when (x == 0) x -= 1; }");
}

#[test]
fn loop_header_errors() {
    let out = parse_src("main: { continue (i < 10) { } }");
    assert_eq!(out.diagnostics[0].message, "Missing 'until' after 'continue'");
    let out = parse_src("main: { continue until (i = 0; i < 10) { } }");
    assert_eq!(out.diagnostics[0].message, "Missing ';' in loop");
    let out = parse_src("main: { stop when x { } }");
    assert_eq!(out.diagnostics[0].message, "Missing '(' after 'when'");
}

#[test]
fn input_output_and_break() {
    assert_clean("main: { put x; display x, y + 1, \"done\"; break; back; }");
    let out = parse_src("main: { put 5; }");
    assert_eq!(codes(&out), vec![ErrorCode::E1004]);
}

#[test]
fn not_a_statement() {
    let out = parse_src("main: { 5; display x; }");
    assert_eq!(codes(&out), vec![ErrorCode::E1007]);
    assert_eq!(out.trace.count_entered(Rule::OutputStmt), 1);
}

// ─── Expressions ─────────────────────────────────────────────────────

#[test]
fn expression_ladder() {
    assert_clean("main: { x = a || b && c | d ^ e & f == g != h; }");
    assert_clean("main: { x = a < b <= c > d >= e; }");
    assert_clean("main: { x = a + b - c * d / e // f % g ** h ** i; }");
    assert_clean("main: { x = -a + !b - ++c + --d + e++ - f--; }");
    assert_clean("main: { x = a ? b : c ? d : e; }");
    assert_clean("main: { x = (a + (b * c)); }");
}

#[test]
fn shift_needs_adjacent_angles() {
    assert_clean("main: { x = a << 2 >> b; }");
    let out = parse_src("main: { x = a < < 2; }");
    assert_eq!(codes(&out), vec![ErrorCode::E1002]);
    assert_eq!(out.diagnostics[0].found, "<");
}

#[test]
fn reserved_word_as_value() {
    let out = parse_src("main: { int x = exit; }");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(
        out.diagnostics[0].message,
        "Reserved word 'exit' cannot be used as a value"
    );
    assert_clean("main: { bool b = true && !false; }");
}

#[test]
fn unclosed_paren() {
    let out = parse_src("main: { x = (a + b; }");
    assert_eq!(codes(&out), vec![ErrorCode::E1003]);
    assert_eq!(out.diagnostics[0].found, ";");
}

#[test]
fn missing_ternary_colon() {
    let out = parse_src("main: { x = a ? b; }");
    assert_eq!(
        out.diagnostics[0].message,
        "Missing ':' in conditional expression"
    );
}

// ─── Program structure ───────────────────────────────────────────────

#[test]
fn header_variants() {
    assert_clean("func main: { }");
    assert_clean("main: display x;");
    assert_clean("display x;");
}

#[test]
fn header_missing_main() {
    let out = parse_src("func: { display x; }");
    assert_eq!(codes(&out), vec![ErrorCode::E1008]);
    assert_eq!(out.diagnostics[0].position(), (1, 5));
    assert_eq!(out.trace.count_entered(Rule::OutputStmt), 1);
}

#[test]
fn header_missing_colon() {
    let out = parse_src("main { display x; }");
    assert_eq!(codes(&out), vec![ErrorCode::E1008]);
    assert_eq!(out.diagnostics[0].message, "Missing ':' after 'main'");
    assert_eq!(out.trace.count_entered(Rule::Block), 1);
}

#[test]
fn tokens_after_program_block() {
    let out = parse_src("main: { } display x; int y;");
    assert_eq!(codes(&out), vec![ErrorCode::E1009]);
    assert_eq!(out.diagnostics[0].position(), (1, 11));
}

#[test]
fn unclosed_block_reports_end_of_file() {
    let out = parse_src("main: { display x;");
    assert_eq!(out.diagnostics.len(), 1);
    let diag = &out.diagnostics[0];
    assert!(diag.is_at_end());
    assert_eq!(diag.position(), (1, 19));
    assert_eq!(diag.message, "Missing '}' to close a block");
}

#[test]
fn empty_input() {
    let out = assert_clean("");
    assert_eq!(out.trace.count_entered(Rule::Program), 1);
    let out = assert_clean("  ## only a comment\n");
    assert_eq!(out.trace.count_entered(Rule::Statement), 0);
}

#[test]
fn comments_are_invisible() {
    assert_clean("main: ## header\n{ #* block *# int x = 1; ## tail\n }");
}

// ─── Configuration ───────────────────────────────────────────────────

#[test]
fn diagnostic_limit_counts_the_rest() {
    let body = "int x = ;\n".repeat(8);
    let source = format!("main: {{\n{body}}}");
    let config = ParseConfig {
        max_diagnostics: 3,
        ..ParseConfig::default()
    };
    let out = parse(&tokenize(&source), &config);
    assert_eq!(out.diagnostics.len(), 3);
    assert_eq!(out.suppressed, 5);
    assert!(!out.is_ok());
}

#[test]
fn trace_can_be_disabled() {
    let config = ParseConfig {
        record_trace: false,
        ..ParseConfig::default()
    };
    let out = parse(&tokenize("main: { int x = ; }"), &config);
    assert!(out.trace.is_empty());
    assert_eq!(out.diagnostics.len(), 1);
}

#[test]
fn trace_rendering() {
    let out = assert_clean("main: { }");
    let rendered = out.trace.to_string();
    assert_eq!(
        rendered,
        "Entering <Program>\n  Consumed: 'main'\n  Consumed: ':'\n  Entering <Block>\n    \
         Consumed: '{'\n    Consumed: '}'\n  Exiting <Block> (success)\nExiting <Program> (success)\n"
    );
}

// ─── Depth ───────────────────────────────────────────────────────────

#[test]
fn deeply_nested_parentheses() {
    let depth = 5000;
    let source = format!(
        "main: {{ int x = {}1{}; }}",
        "(".repeat(depth),
        ")".repeat(depth)
    );
    let config = ParseConfig {
        record_trace: false,
        ..ParseConfig::default()
    };
    let out = parse(&tokenize(&source), &config);
    assert!(out.is_ok());
}

#[test]
fn deeply_nested_blocks_and_unary() {
    let depth = 2000;
    let source = format!(
        "main: {{ {}display {}x;{} }}",
        "do if (x) { ".repeat(depth),
        "- ".repeat(depth),
        " }".repeat(depth)
    );
    let config = ParseConfig {
        record_trace: false,
        ..ParseConfig::default()
    };
    let out = parse(&tokenize(&source), &config);
    assert!(out.is_ok(), "{:?}", out.diagnostics.first());
}

// ─── Properties ──────────────────────────────────────────────────────

fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "main", ":", "{", "}", "(", ")", ";", ",", "int", "cons", "let", "x", "y", "5", "=",
        "+=", "+", "<", "<", "**", "?", "do", "if", "what", "then", "compare", "break",
        "continue", "until", "stop", "when", "display", "put", "back", "true", "exit",
        "\"s\"", "'c'", "\n", "@",
    ])
}

proptest! {
    #[test]
    fn parser_terminates_with_ordered_diagnostics(parts in prop::collection::vec(fragment(), 0..80)) {
        let source = parts.join(" ");
        let out = parse_src(&source);

        let found = positions(&out);
        let mut sorted = found.clone();
        sorted.sort_unstable();
        prop_assert_eq!(found, sorted);
        prop_assert!(out.diagnostics.iter().all(|d| d.code.is_parser_error()));
    }

    #[test]
    fn every_entered_rule_exits(parts in prop::collection::vec(fragment(), 0..80)) {
        let out = parse_src(&parts.join(" "));
        let entered = out
            .trace
            .events()
            .iter()
            .filter(|e| matches!(e, TraceEvent::Enter(_)))
            .count();
        let exited = out
            .trace
            .events()
            .iter()
            .filter(|e| matches!(e, TraceEvent::Exit { .. }))
            .count();
        prop_assert_eq!(entered, exited);
    }

    #[test]
    fn valid_statements_stay_clean(n in 1usize..20) {
        let body = "int v = 1;\nv += v * 2;\ndisplay v;\n".repeat(n);
        let out = parse_src(&format!("main: {{\n{body}}}"));
        prop_assert!(out.is_ok());
        prop_assert_eq!(out.trace.count_entered(Rule::Statement), 3 * n);
    }
}
