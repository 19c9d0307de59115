//! Positional message formatting

use std::fmt;
use std::fmt::Write as _;

/// Substitutes `{0}`, `{1}`, ... placeholders in `format` with the
/// corresponding entries of `params`. `{{` and `}}` escape literal braces.
///
/// A placeholder that is malformed or has no matching parameter is emitted
/// verbatim: log calls never fail on a bad format string.
pub fn format_message(format: &str, params: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(format.len() + 16 * params.len());
    let bytes = format.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                if bytes.get(i + 1) == Some(&b'{') {
                    out.push('{');
                    i += 2;
                    continue;
                }
                let mut j = i + 1;
                while j < bytes.len() && bytes[j].is_ascii_digit() {
                    j += 1;
                }
                if j > i + 1 && bytes.get(j) == Some(&b'}') {
                    let index = format[i + 1..j].parse::<usize>().ok();
                    if let Some(param) = index.and_then(|n| params.get(n)) {
                        let _ = write!(out, "{}", param);
                        i = j + 1;
                        continue;
                    }
                }
                out.push('{');
                i += 1;
            }
            b'}' => {
                // "}}" collapses to a single literal brace
                if bytes.get(i + 1) == Some(&b'}') {
                    i += 2;
                } else {
                    i += 1;
                }
                out.push('}');
            }
            _ => {
                let len = char_len(bytes[i]);
                out.push_str(&format[i..i + len]);
                i += len;
            }
        }
    }
    out
}

fn char_len(leading: u8) -> usize {
    match leading {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}
