//! Card Data Provider for scryunix.
//!
//! Supplies a single [`Card`] either from the Scryfall HTTP API or from a
//! Scryfall JSON document on disk. Lookups are one-shot: no caching and no
//! retries.

#![deny(clippy::all)]

mod client;
mod config;
mod error;
mod file;
mod mock_provider;

pub use client::ScryfallClient;
pub use config::ClientConfig;
pub use config::DEFAULT_API_URL;
pub use error::ProviderError;
pub use file::FileProvider;
pub use file::parse_card;
pub use mock_provider::MockProvider;
pub use mock_provider::MockResponse;

use scryunix_core::Card;

pub type Result<T> = std::result::Result<T, ProviderError>;

/// Source of card records.
pub trait CardProvider {
    /// Any single card, chosen by the provider.
    fn random(&self) -> Result<Card>;

    /// The best fuzzy match for `query`.
    fn named(&self, query: &str) -> Result<Card>;
}
