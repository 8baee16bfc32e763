use super::*;

/// Undo `quote_for_string_literal`'s escaping (ignoring truncation) so the
/// round-trip property can be checked directly against the input.
fn unescape(escaped: &str) -> String {
    let mut out = String::new();
    let mut chars = escaped.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('"') => {
                chars.next();
                out.push('"');
            }
            Some('\\') => {
                chars.next();
                out.push('\\');
            }
            Some('n') => {
                chars.next();
                out.push('\n');
            }
            Some(d) if d.is_digit(8) => {
                let octal: String = (0..3)
                    .filter_map(|_| chars.next_if(|c| c.is_digit(8)))
                    .collect();
                let byte = u8::from_str_radix(&octal, 8).unwrap();
                out.push(byte as char);
            }
            _ => out.push('\\'),
        }
    }
    out
}

#[test]
fn quote_passes_through_printable_ascii() {
    assert_eq!(quote_for_string_literal("hello world", 64), "hello world");
}

#[test]
fn quote_escapes_quotes_backslashes_and_newlines() {
    let escaped = quote_for_string_literal("a\"b\\c\nd", 64);
    assert_eq!(escaped, "a\\\"b\\\\c\\nd");
}

#[test]
fn quote_escapes_non_ascii_as_octal() {
    let escaped = quote_for_string_literal("\u{7}", 64);
    assert_eq!(escaped, "\\007");
}

#[test]
fn quote_truncates_past_max_len() {
    let long = "x".repeat(200);
    let escaped = quote_for_string_literal(&long, 64);
    assert!(escaped.len() <= 64);
    assert!(escaped.ends_with(" ...\n [Truncated]\n"));
}

#[test]
#[should_panic]
fn quote_rejects_max_len_below_32() {
    quote_for_string_literal("x", 10);
}

#[test]
fn quote_escape_round_trip_untruncated() {
    for s in ["plain text", "has \"quotes\" and \\slashes\\", "multi\nline"] {
        let escaped = quote_for_string_literal(s, 4096);
        assert!(!escaped.ends_with("[Truncated]\n"));
        assert_eq!(unescape(&escaped), s);
    }
}

#[test]
fn quote_escape_round_trip_is_a_prefix_when_truncated() {
    let s = "abcdefghijklmnopqrstuvwxyz".repeat(10);
    let escaped = quote_for_string_literal(&s, 64);
    let unescaped = unescape(escaped.trim_end_matches(" ...\n [Truncated]\n"));
    assert!(s.starts_with(&unescaped));
}

#[test]
fn reflow_signature_strips_pure_virtual_suffix_and_semicolon() {
    let out = reflow_signature("virtual void Foo() = 0;", 80);
    assert_eq!(out, "virtual void Foo()");
}

#[test]
fn reflow_signature_wraps_long_declarations() {
    let sig = "void SetVeryLongParameterNameHere(int a, int b, int c, int d, int e);";
    let out = reflow_signature(sig, 30);
    assert!(out.contains('\n'));
    for line in out.lines().skip(1) {
        assert!(line.starts_with("  "));
    }
}

#[test]
fn reflow_signature_is_idempotent() {
    let sig = "void Set(int a, int b, int c, int d, int e, int f, int g);";
    let once = reflow_signature(sig, 24);
    let twice = reflow_signature(&once, 24);
    assert_eq!(once, twice);
}

#[test]
fn reflow_comment_collapses_whitespace() {
    let out = reflow_comment("hello   \n   world", 80);
    assert_eq!(out, "hello world");
}

#[test]
fn reflow_comment_treats_p_and_br_as_paragraph_breaks() {
    let out = reflow_comment("first <p> second <br> third", 80);
    assert_eq!(out, "first\nsecond\nthird");
}

#[test]
fn reflow_comment_turns_section_marker_into_heading() {
    let out = reflow_comment(".SECTION Caveats\nDo not call concurrently.", 80);
    assert_eq!(out, "Caveats:\nDo not call concurrently.");
}

#[test]
fn reflow_comment_indents_param_block_continuations() {
    let out = reflow_comment("\\param x the x coordinate of the point in device space", 20);
    let mut lines = out.lines();
    assert_eq!(lines.next().unwrap(), "\\param x the x");
    for line in lines {
        assert!(line.starts_with("    "), "continuation line not indented: {line:?}");
    }
}

#[test]
fn reflow_comment_preserves_code_blocks_literally() {
    let input = "See:\n\\code\n  int x = 1;\n\\endcode\nDone.";
    let out = reflow_comment(input, 80);
    assert!(out.contains("  int x = 1;"));
}

#[test]
fn reflow_comment_is_idempotent() {
    let text = "This is a moderately long sentence that should wrap at least once given a narrow width.";
    let once = reflow_comment(text, 20);
    let twice = reflow_comment(&once, 20);
    assert_eq!(once, twice);
}
