//! Face composition for the supported physical layouts.
//!
//! Every row a composer emits has a known visible width so that faces can
//! be merged side by side without drifting out of their columns.

use scryunix_common::Style;
use scryunix_common::truncate_chars;
use unicode_width::UnicodeWidthStr;

use crate::block::RenderedBlock;
use crate::card::Card;
use crate::card::CardFace;
use crate::card::Rarity;
use crate::error::RenderError;
use crate::merge::merge;
use crate::palette::colors_from_cost;
use crate::palette::rarity_style;
use crate::text_box::build_text_box;

pub const CARD_WIDTH: usize = 50;
pub const SPLIT_FACE_WIDTH: usize = 25;
pub const NAME_LIMIT: usize = 32;
pub const SPLIT_NAME_LIMIT: usize = 16;
pub const WIDE_NAME_LIMIT: usize = 64;

/// Bold name on the left, mana cost flush right.
pub fn title_row(name: &str, mana_cost: &str, width: usize, name_limit: usize) -> String {
    let name = truncate_chars(name, name_limit);
    let gap = width.saturating_sub(name.width() + mana_cost.width());
    format!("{}{}{}", Style::bold().paint(name), " ".repeat(gap), mana_cost)
}

/// Type line with the rarity letter in the second-to-last column. Type
/// lines too long for the column are cut to `width - 2` characters.
pub fn type_row(type_line: &str, rarity: Rarity, width: usize) -> String {
    let type_line = truncate_chars(type_line, width.saturating_sub(2));
    let gap = width.saturating_sub(type_line.width() + 2);
    let letter = rarity.letter().to_string();
    format!(
        "{}{}{} ",
        type_line,
        " ".repeat(gap),
        rarity_style(rarity).paint(&letter)
    )
}

/// `lead` on the left and the face's stats bracket flush right. Faces
/// without stats get no bracket at all.
pub fn stats_row(lead: &str, face: &CardFace, width: usize) -> String {
    let bracket = face
        .stats()
        .map(|stats| format!("[{stats}]"))
        .unwrap_or_default();
    let gap = width.saturating_sub(lead.width() + bracket.width());
    format!("{lead}{}{bracket}", " ".repeat(gap))
}

fn two_faces(card: &Card) -> Result<(&CardFace, &CardFace), RenderError> {
    match card.card_faces.as_slice() {
        [front, back] => Ok((front, back)),
        faces => Err(RenderError::FaceCount {
            layout: card.layout.to_string(),
            found: faces.len(),
        }),
    }
}

/// A single-faced card: title, type line, text box and artist footer.
pub fn compose_normal(card: &Card) -> RenderedBlock {
    let face = &card.face;
    let mut block = RenderedBlock::new();
    block.push("");
    block.push(title_row(&face.name, &face.mana_cost, CARD_WIDTH, NAME_LIMIT));
    block.push("");
    block.push(type_row(&face.type_line, card.rarity, CARD_WIDTH));
    block.append(build_text_box(
        CARD_WIDTH,
        face.oracle_text(),
        face.flavor_text.as_deref(),
        card.colors(),
    ));
    block.push(stats_row(&card.artist, face, CARD_WIDTH));
    block
}

pub(crate) fn split_face(card: &Card, face: &CardFace) -> RenderedBlock {
    let width = SPLIT_FACE_WIDTH;
    let mut block = RenderedBlock::new();
    block.push(title_row(&face.name, &face.mana_cost, width, SPLIT_NAME_LIMIT));
    block.push(" ".repeat(width));
    block.push(type_row(&face.type_line, card.rarity, width));
    block.append(build_text_box(
        width,
        face.oracle_text(),
        face.flavor_text.as_deref(),
        &colors_from_cost(&face.mana_cost),
    ));
    block.push(stats_row("", face, width));
    block
}

/// Two half-width faces side by side over a shared artist line. Each face
/// takes its border colors from its own mana cost.
pub fn compose_split(card: &Card) -> Result<RenderedBlock, RenderError> {
    let (left, right) = two_faces(card)?;
    let mut block = RenderedBlock::new();
    block.push("");
    block.append(merge(
        &split_face(card, left),
        &split_face(card, right),
        SPLIT_FACE_WIDTH,
    ));
    block.push(card.artist.clone());
    Ok(block)
}

pub(crate) fn double_faced_face(card: &Card, face: &CardFace) -> RenderedBlock {
    let mut block = RenderedBlock::new();
    block.push(type_row(&face.type_line, card.rarity, CARD_WIDTH));
    block.append(build_text_box(
        CARD_WIDTH,
        face.oracle_text(),
        face.flavor_text.as_deref(),
        card.face_colors(face),
    ));
    block.push(stats_row("", face, CARD_WIDTH));
    block
}

/// Transform, flip and modal double-faced cards: one title spanning both
/// columns, then the two full-width faces side by side.
pub fn compose_double_faced(card: &Card) -> Result<RenderedBlock, RenderError> {
    let (front, back) = two_faces(card)?;
    let mut block = RenderedBlock::new();
    block.push("");
    block.push(title_row(
        card.name(),
        &front.mana_cost,
        CARD_WIDTH * 2,
        WIDE_NAME_LIMIT,
    ));
    block.push("");
    block.append(merge(
        &double_faced_face(card, front),
        &double_faced_face(card, back),
        CARD_WIDTH,
    ));
    block.push(card.artist.clone());
    Ok(block)
}
