use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap::ValueEnum;
pub use clap_complete::Shell;
use scryunix_common::no_color_env;
use scryunix_core::RenderOptions;
use scryunix_provider::ClientConfig;
use scryunix_provider::DEFAULT_API_URL;

const LONG_ABOUT: &str = r#"scryunix prints Magic: The Gathering cards in the terminal.

With no NAME a random card is fetched from Scryfall. Otherwise the NAME words
are joined into one fuzzy search, so partial and misspelled names work.

LAYOUTS:
    normal                      One 50-column card
    split                       Two 25-column halves side by side
    transform, flip, modal_dfc  Both faces side by side under one title

    Other layouts (saga, adventure, meld, ...) are reported as unsupported.
    --best-effort renders the single-faced ones as normal cards.

EXAMPLES:
    scryunix                         # A random card
    scryunix lightning bolt          # Fuzzy lookup of "lightningbolt"
    scryunix --separator ' ' fire ice
    scryunix --file card.json        # Render a saved Scryfall card object
    curl -s https://api.scryfall.com/cards/named?exact=opt | scryunix -f -"#;

#[derive(Parser, Debug)]
#[command(name = "scryunix")]
#[command(author, version)]
#[command(about = "Fetch Magic: The Gathering cards from Scryfall and print them in the terminal")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    /// Card name to search for (omit for a random card)
    pub name: Vec<String>,

    /// Text placed between NAME words when building the search
    #[arg(long, default_value = "", value_name = "SEP")]
    pub separator: String,

    /// Render a Scryfall card JSON document instead of querying the API ('-' reads stdin)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Scryfall API base URL
    #[arg(long, env = "SCRYUNIX_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    pub timeout: u64,

    /// Render unsupported single-faced layouts as normal cards
    #[arg(long)]
    pub best_effort: bool,

    /// When to emit terminal colors
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorChoice,

    /// Disable colored output (shorthand for --color never, also respects NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl Cli {
    /// Returns the effective color choice, considering the --no-color
    /// shorthand and the `NO_COLOR` environment variable.
    pub fn effective_color(&self) -> ColorChoice {
        self.resolve_color(no_color_env())
    }

    fn resolve_color(&self, no_color_env: bool) -> ColorChoice {
        if self.no_color || no_color_env {
            ColorChoice::Never
        } else {
            self.color
        }
    }

    /// The fuzzy search string, or `None` for a random card.
    pub fn query(&self) -> Option<String> {
        if self.name.is_empty() {
            None
        } else {
            Some(self.name.join(&self.separator))
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(self.api_url.clone())
            .with_timeout(Duration::from_secs(self.timeout))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::default().with_best_effort(self.best_effort)
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
