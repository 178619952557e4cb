use scryunix_common::ErrorCategory;
use thiserror::Error;

/// Failures of the rendering core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Unsupported card layout: {0}")]
    UnsupportedLayout(String),

    #[error("Layout '{layout}' needs exactly two faces, found {found}")]
    FaceCount { layout: String, found: usize },
}

impl RenderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RenderError::UnsupportedLayout(_) => ErrorCategory::Unsupported,
            RenderError::FaceCount { .. } => ErrorCategory::Internal,
        }
    }

    pub fn suggestion(&self) -> String {
        match self {
            RenderError::UnsupportedLayout(_) => {
                "Only normal, split, transform, flip and modal_dfc cards are laid out. Try --best-effort for single-faced cards."
                    .to_string()
            }
            RenderError::FaceCount { .. } => {
                "The card record does not match its layout. Please report the card name.".to_string()
            }
        }
    }
}
