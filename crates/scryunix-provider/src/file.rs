use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::CardProvider;
use crate::ProviderError;
use crate::Result;
use scryunix_core::Card;

/// Body of a Scryfall error response (`"object": "error"`).
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub details: String,
}

impl ApiErrorBody {
    pub(crate) fn into_error(self, fallback_status: u16) -> ProviderError {
        let status = self.status.unwrap_or(fallback_status);
        let details = if self.details.is_empty() {
            format!("HTTP {status}")
        } else {
            self.details
        };
        if status == 404 {
            ProviderError::NotFound(details)
        } else {
            ProviderError::Api { status, details }
        }
    }
}

/// Parses a Scryfall card document, turning an error object into the
/// matching [`ProviderError`].
pub fn parse_card(body: &str) -> Result<Card> {
    let value: Value = serde_json::from_str(body)?;
    if value.get("object").and_then(Value::as_str) == Some("error") {
        let error: ApiErrorBody = serde_json::from_value(value)?;
        return Err(error.into_error(400));
    }
    Ok(serde_json::from_value(value)?)
}

/// Serves the one card stored in a JSON file, or read from stdin for `-`.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Card> {
        let mut body = String::new();
        if self.path.as_os_str() == "-" {
            debug!("Reading card from stdin");
            std::io::stdin().read_to_string(&mut body)?;
        } else {
            debug!(path = %self.path.display(), "Reading card file");
            body = std::fs::read_to_string(&self.path)?;
        }
        parse_card(&body)
    }
}

impl CardProvider for FileProvider {
    fn random(&self) -> Result<Card> {
        self.load()
    }

    fn named(&self, query: &str) -> Result<Card> {
        debug!(query, "Card file ignores the name query");
        self.load()
    }
}
