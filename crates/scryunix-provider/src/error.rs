//! Provider errors with categories and suggestions for the CLI.

use scryunix_common::ErrorCategory;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("No card found: {0}")]
    NotFound(String),

    #[error("Scryfall API error ({status}): {details}")]
    Api { status: u16, details: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to decode card data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read card data: {0}")]
    Io(#[from] std::io::Error),
}

impl ProviderError {
    /// Returns the error category for programmatic handling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProviderError::NotFound(_) => ErrorCategory::NotFound,
            ProviderError::Api { status, .. } if (400..500).contains(status) => {
                ErrorCategory::InvalidInput
            }
            ProviderError::Api { .. } | ProviderError::Transport(_) | ProviderError::Io(_) => {
                ErrorCategory::External
            }
            ProviderError::Decode(_) => ErrorCategory::InvalidInput,
        }
    }

    /// Returns a helpful suggestion for resolving the error.
    pub fn suggestion(&self) -> String {
        match self {
            ProviderError::NotFound(_) => {
                "Check the spelling or add more of the card name to narrow the search.".to_string()
            }
            ProviderError::Api { status: 429, .. } => {
                "Scryfall is rate limiting requests. Wait a moment before trying again.".to_string()
            }
            ProviderError::Api { .. } => "Scryfall rejected the request.".to_string(),
            ProviderError::Transport(_) => {
                "Check your network connection or the --api-url setting.".to_string()
            }
            ProviderError::Decode(_) => {
                "The input is not a Scryfall card object. Check the --file document.".to_string()
            }
            ProviderError::Io(_) => "Check that the card file exists and is readable.".to_string(),
        }
    }

    /// Returns whether running the same command again might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Transport(_) => true,
            ProviderError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
