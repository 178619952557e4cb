//! Color rules: border hue by color identity, rarity letters and mana
//! symbol hues.

use scryunix_common::Hue;
use scryunix_common::Style;

use crate::card::ManaColor;
use crate::card::Rarity;

impl ManaColor {
    pub fn hue(self) -> Hue {
        match self {
            ManaColor::White => Hue::White,
            ManaColor::Blue => Hue::Blue,
            ManaColor::Black => Hue::Gray,
            ManaColor::Red => Hue::Red,
            ManaColor::Green => Hue::Green,
        }
    }
}

/// Treatment for colorless things: borders of colorless cards and
/// generic/hybrid/Phyrexian symbol characters.
pub const fn colorless_style() -> Style {
    Style::fg(Hue::White).dimmed()
}

/// Flavor text never takes the card's hue.
pub const fn flavor_style() -> Style {
    Style::fg(Hue::White).on(Hue::Black).dimmed()
}

/// Border style for a color identity: mono-colored cards use their hue,
/// multicolored cards are gold, colorless cards are dim.
pub fn border_style(colors: &[ManaColor]) -> Style {
    match colors {
        [] => colorless_style(),
        [single] => Style::fg(single.hue()),
        _ => Style::fg(Hue::Yellow),
    }
}

pub fn rarity_style(rarity: Rarity) -> Style {
    match rarity {
        Rarity::Common => Style::fg(Hue::White),
        Rarity::Uncommon => Style::fg(Hue::Gray),
        Rarity::Rare => Style::fg(Hue::Yellow),
        Rarity::Mythic => Style::fg(Hue::Red),
        Rarity::Special => Style::fg(Hue::Magenta),
    }
}

/// Style for one character inside a `{...}` mana token.
pub fn symbol_style(c: char) -> Style {
    match ManaColor::from_symbol(c) {
        Some(color) => Style::fg(color.hue()),
        None => colorless_style(),
    }
}

/// Distinct colors named in a mana cost, in order of first appearance.
pub fn colors_from_cost(cost: &str) -> Vec<ManaColor> {
    let mut colors = Vec::new();
    for color in cost.chars().filter_map(ManaColor::from_symbol) {
        if !colors.contains(&color) {
            colors.push(color);
        }
    }
    colors
}
