//! Layout dispatch: the single place that looks at a card's layout tag.

use tracing::debug;
use tracing::warn;

use crate::card::Card;
use crate::card::Layout;
use crate::colorize::colorize_mana_symbols;
use crate::compose::compose_double_faced;
use crate::compose::compose_normal;
use crate::compose::compose_split;
use crate::error::RenderError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    best_effort: bool,
}

impl RenderOptions {
    pub fn best_effort(&self) -> bool {
        self.best_effort
    }

    /// Render single-faced cards with unsupported layouts (sagas, levelers,
    /// classes, ...) as if they were normal cards instead of failing.
    pub fn with_best_effort(mut self, best_effort: bool) -> Self {
        self.best_effort = best_effort;
        self
    }
}

/// Renders `card` as a complete, colorized block of text ending in a
/// newline.
pub fn render_card(card: &Card, options: &RenderOptions) -> Result<String, RenderError> {
    debug!(name = %card.name(), layout = %card.layout, "Rendering card");

    let block = match &card.layout {
        Layout::Normal => compose_normal(card),
        Layout::Split => compose_split(card)?,
        Layout::Transform | Layout::Flip | Layout::ModalDfc => compose_double_faced(card)?,
        other if options.best_effort && card.card_faces.is_empty() => {
            warn!(layout = %other, "Rendering unsupported layout as a normal card");
            compose_normal(card)
        }
        other => return Err(RenderError::UnsupportedLayout(other.to_string())),
    };

    Ok(colorize_mana_symbols(&format!("{block}\n")))
}
