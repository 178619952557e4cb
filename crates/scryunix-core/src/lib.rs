//! Card model and text rendering engine for scryunix.
//!
//! Turns a deserialized Scryfall card into a fixed-width, bordered and
//! ANSI-colored block of text. Every function here is pure: no I/O, no
//! shared state.

#![deny(clippy::all)]

mod block;
pub mod card;
pub mod colorize;
pub mod compose;
mod error;
pub mod merge;
pub mod palette;
pub mod render;
pub mod text_box;

#[cfg(test)]
pub mod test_fixtures;

pub use block::RenderedBlock;
pub use card::Card;
pub use card::CardFace;
pub use card::Layout;
pub use card::ManaColor;
pub use card::Rarity;
pub use colorize::colorize_mana_symbols;
pub use compose::compose_double_faced;
pub use compose::compose_normal;
pub use compose::compose_split;
pub use error::RenderError;
pub use merge::merge;
pub use palette::colors_from_cost;
pub use render::RenderOptions;
pub use render::render_card;
pub use text_box::build_text_box;
