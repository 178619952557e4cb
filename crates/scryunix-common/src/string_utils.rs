//! String measuring helpers that understand embedded SGR sequences.

use unicode_width::UnicodeWidthStr;

/// Strip ANSI escape codes from a string.
///
/// Handles SGR and other CSI sequences (`\x1b[...m`) as well as OSC
/// sequences terminated by BEL or `ESC \`.
pub fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            result.push(c);
            continue;
        }
        match chars.peek() {
            Some('[') => {
                chars.next();
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() || next == '~' || next == '@' {
                        break;
                    }
                }
            }
            Some(']') => {
                chars.next();
                while let Some(next) = chars.next() {
                    if next == '\x07' {
                        break;
                    }
                    if next == '\x1b' {
                        if chars.peek() == Some(&'\\') {
                            chars.next();
                        }
                        break;
                    }
                }
            }
            _ => {
                chars.next();
            }
        }
    }
    result
}

/// Number of terminal columns `s` occupies once styling is removed.
pub fn visible_width(s: &str) -> usize {
    strip_ansi_codes(s).width()
}

/// First `limit` characters of `s`.
pub fn truncate_chars(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
