//! Inline mana symbol coloring over a fully assembled card.

use std::iter::Peekable;
use std::str::Chars;

use crate::palette::symbol_style;

/// Recolors every character inside `{...}` tokens.
///
/// Colored mana letters take their hue and everything else inside a token
/// (digits, `/`, `P`, `X`, ...) is dimmed. The braces are copied as they
/// are. Escape sequences already present in `text` are copied through
/// untouched and never toggle token state.
pub fn colorize_mana_symbols(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut in_token = false;
    let mut chars = text.chars().peekable();
    let mut buf = [0u8; 4];

    while let Some(c) = chars.next() {
        match c {
            '\x1b' => {
                out.push(c);
                copy_escape_sequence(&mut chars, &mut out);
            }
            '{' => {
                in_token = true;
                out.push(c);
            }
            '}' => {
                in_token = false;
                out.push(c);
            }
            _ if in_token => out.push_str(&symbol_style(c).paint(c.encode_utf8(&mut buf))),
            _ => out.push(c),
        }
    }
    out
}

// CSI: '[' then parameter bytes up to a final byte in '@'..='~'.
fn copy_escape_sequence(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    if chars.peek() != Some(&'[') {
        return;
    }
    if let Some(open) = chars.next() {
        out.push(open);
    }
    for next in chars.by_ref() {
        out.push(next);
        if ('@'..='~').contains(&next) {
            break;
        }
    }
}
