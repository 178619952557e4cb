//! The bordered rules/flavor text box.
//!
//! Layout of a box `width` columns wide:
//!
//! ```text
//! +------------------------------------------------+
//! |                                                |
//! |  Lightning Bolt deals 3 damage to any target.  |
//! |                                                |
//! | The sparkmage shrieked, calling on the rage of |
//! |            the storms of his youth.            |
//! |                                                |
//! +------------------------------------------------+
//! ```
//!
//! Text is wrapped and centered in `width - 4` columns: one border glyph
//! and one space of padding on each side.

use scryunix_common::Style;
use unicode_width::UnicodeWidthStr;

use crate::block::RenderedBlock;
use crate::card::ManaColor;
use crate::palette::border_style;
use crate::palette::flavor_style;

/// Columns taken by the border glyphs and their padding.
pub const BOX_MARGIN: usize = 4;

/// Greedy word wrap of a single paragraph.
///
/// Words are never split; a word wider than `limit` gets a line of its own.
pub fn wrap_paragraph(paragraph: &str, limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in paragraph.split_whitespace() {
        let word_width = word.width();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= limit {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wraps every paragraph of `text` independently. Newlines are hard
/// breaks; blank paragraphs contribute no lines.
pub fn wrap_text(text: &str, limit: usize) -> Vec<String> {
    text.lines()
        .flat_map(|paragraph| wrap_paragraph(paragraph, limit))
        .collect()
}

/// Centers `line` in `width` columns. An odd leftover space goes right.
pub fn center(line: &str, width: usize) -> String {
    let pad = width.saturating_sub(line.width());
    let left = pad / 2;
    let right = pad - left;
    format!("{}{}{}", " ".repeat(left), line, " ".repeat(right))
}

fn text_rows(text: &str, width: usize, edge: &str, body_style: Style) -> Vec<String> {
    let inner = width.saturating_sub(BOX_MARGIN);
    wrap_text(text, inner)
        .iter()
        .map(|line| format!("{edge} {} {edge}", body_style.paint(&center(line, inner))))
        .collect()
}

/// Builds the framed text box for one face.
///
/// The border takes the color-identity hue of `colors`. Flavor text, when
/// present, follows the rules text after a padding row and is painted with
/// the flavor style instead.
pub fn build_text_box(
    width: usize,
    oracle_text: &str,
    flavor_text: Option<&str>,
    colors: &[ManaColor],
) -> RenderedBlock {
    let border = border_style(colors);
    let rule = "-".repeat(width.saturating_sub(2));
    let blank = " ".repeat(width.saturating_sub(2));
    let separator = border.paint(&format!("+{rule}+"));
    let padding = border.paint(&format!("|{blank}|"));
    let edge = border.paint("|");

    let mut block = RenderedBlock::new();
    block.push(separator.clone());
    block.push(padding.clone());
    for row in text_rows(oracle_text, width, &edge, Style::plain()) {
        block.push(row);
    }
    block.push(padding.clone());
    if let Some(flavor) = flavor_text {
        for row in text_rows(flavor, width, &edge, flavor_style()) {
            block.push(row);
        }
        block.push(padding);
    }
    block.push(separator);
    block
}
