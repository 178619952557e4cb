//! Scryfall HTTP client.

use tracing::debug;
use tracing::warn;

use crate::CardProvider;
use crate::ProviderError;
use crate::Result;
use crate::config::ClientConfig;
use crate::file::ApiErrorBody;
use crate::file::parse_card;
use scryunix_core::Card;

const RANDOM_PATH: &str = "/cards/random";
const NAMED_PATH: &str = "/cards/named";

pub struct ScryfallClient {
    agent: ureq::Agent,
    config: ClientConfig,
}

impl ScryfallClient {
    pub fn new(config: ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build();
        Self { agent, config }
    }

    fn fetch(&self, path: &str, query: &[(&str, &str)]) -> Result<Card> {
        let url = self.config.endpoint(path);
        debug!(%url, ?query, "Requesting card from Scryfall");

        let mut request = self.agent.get(&url).set("Accept", "application/json");
        for (param, value) in query {
            request = request.query(param, value);
        }

        match request.call() {
            Ok(response) => parse_card(&response.into_string()?),
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                warn!(status, "Scryfall returned an error status");
                Err(status_error(status, &body))
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(ProviderError::Transport(transport.to_string()))
            }
        }
    }
}

impl CardProvider for ScryfallClient {
    fn random(&self) -> Result<Card> {
        self.fetch(RANDOM_PATH, &[])
    }

    fn named(&self, query: &str) -> Result<Card> {
        self.fetch(NAMED_PATH, &[("fuzzy", query)])
    }
}

fn status_error(status: u16, body: &str) -> ProviderError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(error) => error.into_error(status),
        Err(_) => ApiErrorBody {
            status: Some(status),
            details: String::new(),
        }
        .into_error(status),
    }
}
