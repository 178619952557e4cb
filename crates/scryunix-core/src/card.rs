//! Card data as delivered by the Scryfall API.
//!
//! Only the fields the renderer reads are modelled. Unknown fields are
//! ignored and every optional attribute is an explicit `Option`, so the
//! composer matches on presence instead of probing for keys.

use std::fmt;

use serde::Deserialize;

/// One of the five colors of mana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ManaColor {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl ManaColor {
    pub const ALL: [ManaColor; 5] = [
        ManaColor::White,
        ManaColor::Blue,
        ManaColor::Black,
        ManaColor::Red,
        ManaColor::Green,
    ];

    /// Parses a single mana letter (`W`, `U`, `B`, `R`, `G`).
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'W' => Some(ManaColor::White),
            'U' => Some(ManaColor::Blue),
            'B' => Some(ManaColor::Black),
            'R' => Some(ManaColor::Red),
            'G' => Some(ManaColor::Green),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            ManaColor::White => 'W',
            ManaColor::Blue => 'U',
            ManaColor::Black => 'B',
            ManaColor::Red => 'R',
            ManaColor::Green => 'G',
        }
    }
}

/// Printed rarity. Anything Scryfall reports beyond the four main tiers
/// (`special`, `bonus`) collapses into `Special`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Mythic,
    Special,
}

impl Rarity {
    pub fn letter(self) -> char {
        match self {
            Rarity::Common => 'C',
            Rarity::Uncommon => 'U',
            Rarity::Rare => 'R',
            Rarity::Mythic => 'M',
            Rarity::Special => 'S',
        }
    }
}

impl From<String> for Rarity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "common" => Rarity::Common,
            "uncommon" => Rarity::Uncommon,
            "rare" => Rarity::Rare,
            "mythic" => Rarity::Mythic,
            _ => Rarity::Special,
        }
    }
}

/// Physical card format, as named by Scryfall's `layout` field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Layout {
    #[default]
    Normal,
    Split,
    Flip,
    Transform,
    ModalDfc,
    Saga,
    Adventure,
    Meld,
    Leveler,
    Class,
    Other(String),
}

impl Layout {
    pub fn as_str(&self) -> &str {
        match self {
            Layout::Normal => "normal",
            Layout::Split => "split",
            Layout::Flip => "flip",
            Layout::Transform => "transform",
            Layout::ModalDfc => "modal_dfc",
            Layout::Saga => "saga",
            Layout::Adventure => "adventure",
            Layout::Meld => "meld",
            Layout::Leveler => "leveler",
            Layout::Class => "class",
            Layout::Other(tag) => tag,
        }
    }
}

impl From<String> for Layout {
    fn from(value: String) -> Self {
        match value.as_str() {
            "normal" => Layout::Normal,
            "split" => Layout::Split,
            "flip" => Layout::Flip,
            "transform" => Layout::Transform,
            "modal_dfc" => Layout::ModalDfc,
            "saga" => Layout::Saga,
            "adventure" => Layout::Adventure,
            "meld" => Layout::Meld,
            "leveler" => Layout::Leveler,
            "class" => Layout::Class,
            _ => Layout::Other(value),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One printable side of a card.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CardFace {
    pub name: String,
    #[serde(default)]
    pub mana_cost: String,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub flavor_text: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
    #[serde(default)]
    pub loyalty: Option<String>,
    #[serde(default)]
    pub defense: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<ManaColor>>,
}

impl CardFace {
    pub fn oracle_text(&self) -> &str {
        self.oracle_text.as_deref().unwrap_or_default()
    }

    /// Contents of the footer bracket, without the brackets.
    ///
    /// Loyalty wins over defense, which wins over power/toughness.
    pub fn stats(&self) -> Option<String> {
        if let Some(loyalty) = &self.loyalty {
            return Some(loyalty.clone());
        }
        if let Some(defense) = &self.defense {
            return Some(defense.clone());
        }
        self.power.as_ref().map(|power| {
            format!(
                "{}/{}",
                power,
                self.toughness.as_deref().unwrap_or_default()
            )
        })
    }
}

/// A card record. The card's own name/cost/text fields form its implicit
/// face; multi-faced layouts also carry `card_faces`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Card {
    #[serde(flatten)]
    pub face: CardFace,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub color_identity: Vec<ManaColor>,
    #[serde(default)]
    pub card_faces: Vec<CardFace>,
}

impl Card {
    pub fn name(&self) -> &str {
        &self.face.name
    }

    /// Card-level colors, falling back to the color identity when the
    /// record carries colors only on its faces.
    pub fn colors(&self) -> &[ManaColor] {
        self.face
            .colors
            .as_deref()
            .unwrap_or(self.color_identity.as_slice())
    }

    /// Colors for one face: its own when declared, else the card's.
    pub fn face_colors<'a>(&'a self, face: &'a CardFace) -> &'a [ManaColor] {
        face.colors.as_deref().unwrap_or_else(|| self.colors())
    }
}
