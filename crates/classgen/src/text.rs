//! Text utilities: string-literal escaping and fixed-width reflow (spec §4.2).
//!
//! Two pure functions, both with a fixed output contract and no mutable
//! shared state (spec §9: the original keeps reused static buffers; here
//! every call returns an owned `String` and callers never alias across
//! calls). The reflow contract is given by the spec, not derived from any
//! particular doxygen renderer; the implementation below is a direct,
//! unglamorous reading of that contract.

/// Escape `s` for embedding in a C string literal, truncating to `max_len`.
///
/// `"` and `\` escape to `\"` and `\\`; `\n` becomes the two-character
/// sequence `\n`; printable ASCII passes through unchanged; every other
/// byte is emitted as a three-digit octal escape `\NNN`. If the escaped
/// form would exceed `max_len` bytes, it is truncated and
/// `" ...\n [Truncated]\n"` is appended in its place.
///
/// # Panics
/// If `max_len < 32` (spec §4.2 precondition).
pub fn quote_for_string_literal(s: &str, max_len: usize) -> String {
    assert!(max_len >= 32, "quote_for_string_literal: max_len must be >= 32");

    const TRUNCATION_MARK: &str = " ...\n [Truncated]\n";

    let mut out = String::with_capacity(s.len().min(max_len));
    let mut truncated = false;
    for byte in s.bytes() {
        let piece_len = match byte {
            b'"' | b'\\' => 2,
            b'\n' => 2,
            0x20..=0x7e => 1,
            _ => 4,
        };
        if out.len() + piece_len > max_len.saturating_sub(TRUNCATION_MARK.len()) {
            truncated = true;
            break;
        }
        match byte {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            0x20..=0x7e => out.push(byte as char),
            other => out.push_str(&format!("\\{other:03o}")),
        }
    }
    if truncated {
        out.push_str(TRUNCATION_MARK);
    }
    out
}

/// Reflow a C++ method signature to `width` columns.
///
/// Strips a trailing `) = 0` pure-virtual suffix and a trailing `;`, then
/// word-wraps with a two-space continuation indent, escaping embedded
/// quotes so the result is safe to splice into a C string literal.
pub fn reflow_signature(s: &str, width: usize) -> String {
    let trimmed = s.trim_end();
    let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed).trim_end();
    let trimmed = trimmed.strip_suffix("= 0").map_or(trimmed, str::trim_end);
    let escaped = trimmed.replace('\\', "\\\\").replace('"', "\\\"");
    wrap_words(escaped.split_whitespace(), width, "  ")
}

/// Reflow a class/method doxygen-style comment to `width` columns.
///
/// Collapses whitespace, treats `<p>`/`<br>` (any case) and a leading
/// `.SECTION <title>` marker as paragraph breaks, recognizes a handful of
/// doxygen block tags (`\brief`, `\short`, `\pre`, `\post`, `\param`,
/// `\tparam`, `\cmdparam`, `\exception`, `\return`, `\li`) as the start of
/// a four-space-indented block, and passes `\code`/`\endcode` and
/// `\verbatim`/`\endverbatim` spans through without rejoining lines.
pub fn reflow_comment(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut indent = "  ";
    let mut literal = false;

    macro_rules! flush {
        () => {
            if !paragraph.is_empty() {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&wrap_words(paragraph.drain(..), width, indent));
            }
        };
    }

    for raw_line in s.lines() {
        let line = raw_line.trim();
        if literal {
            if is_tag(line, "endcode") || is_tag(line, "endverbatim") {
                literal = false;
                continue;
            }
            out.push('\n');
            out.push_str(raw_line);
            continue;
        }
        if line.is_empty() {
            flush!();
            indent = "  ";
            continue;
        }
        if let Some(title) = line
            .strip_prefix(".SECTION")
            .or_else(|| line.strip_prefix(".section"))
        {
            flush!();
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(title.trim());
            out.push(':');
            indent = "  ";
            continue;
        }
        if is_tag(line, "code") || is_tag(line, "verbatim") {
            flush!();
            literal = true;
            continue;
        }
        if is_block_tag(line) {
            flush!();
            indent = "    ";
        }
        for word in line.split_whitespace() {
            for part in split_html_breaks(word) {
                match part {
                    Word::Text(w) => paragraph.push(w),
                    Word::Break => {
                        flush!();
                        indent = "  ";
                    }
                }
            }
        }
    }
    flush!();
    out
}

enum Word<'a> {
    Text(&'a str),
    Break,
}

/// Split a whitespace-delimited token on embedded `<p>`/`<br>` markers
/// (case-insensitive), treating each marker as its own paragraph break.
fn split_html_breaks(word: &str) -> Vec<Word<'_>> {
    let lower = word.to_ascii_lowercase();
    if lower == "<p>" || lower == "<br>" || lower == "<br/>" {
        return vec![Word::Break];
    }
    vec![Word::Text(word)]
}

fn is_tag(line: &str, tag: &str) -> bool {
    line.eq_ignore_ascii_case(&format!("\\{tag}"))
}

fn is_block_tag(line: &str) -> bool {
    const BLOCK_TAGS: &[&str] = &[
        "\\brief",
        "\\short",
        "\\pre",
        "\\post",
        "\\param",
        "\\tparam",
        "\\cmdparam",
        "\\exception",
        "\\return",
        "\\li",
    ];
    BLOCK_TAGS
        .iter()
        .any(|tag| line.starts_with(tag) && line[tag.len()..].chars().next().is_none_or(char::is_whitespace))
}

/// Greedy word wrap shared by both reflow entry points: pack words onto a
/// line up to `width` columns, continuation lines prefixed with `indent`.
fn wrap_words<'a>(words: impl Iterator<Item = &'a str>, width: usize, indent: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in words {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(indent);
        }
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod text_tests;
