use std::cell::RefCell;

use scryunix_core::Card;

use crate::CardProvider;
use crate::ProviderError;
use crate::Result;

/// Canned outcome for a [`MockProvider`] lookup.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Card(Box<Card>),
    NotFound(String),
    Transport(String),
}

/// An in-memory [`CardProvider`] for tests.
///
/// Every lookup returns the configured response and is recorded, so tests
/// can assert which query the caller built.
///
/// ```ignore
/// let provider = MockProvider::new(MockResponse::NotFound("nope".into()));
/// assert!(provider.named("Blightning").is_err());
/// assert_eq!(provider.queries(), vec![Some("Blightning".to_string())]);
/// ```
#[derive(Debug)]
pub struct MockProvider {
    response: MockResponse,
    queries: RefCell<Vec<Option<String>>>,
}

impl MockProvider {
    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn with_card(card: Card) -> Self {
        Self::new(MockResponse::Card(Box::new(card)))
    }

    /// Recorded lookups: `None` for a random card, `Some(query)` for a
    /// named one.
    pub fn queries(&self) -> Vec<Option<String>> {
        self.queries.borrow().clone()
    }

    fn respond(&self, query: Option<&str>) -> Result<Card> {
        self.queries.borrow_mut().push(query.map(str::to_string));
        match &self.response {
            MockResponse::Card(card) => Ok(card.as_ref().clone()),
            MockResponse::NotFound(details) => Err(ProviderError::NotFound(details.clone())),
            MockResponse::Transport(reason) => Err(ProviderError::Transport(reason.clone())),
        }
    }
}

impl CardProvider for MockProvider {
    fn random(&self) -> Result<Card> {
        self.respond(None)
    }

    fn named(&self, query: &str) -> Result<Card> {
        self.respond(Some(query))
    }
}
