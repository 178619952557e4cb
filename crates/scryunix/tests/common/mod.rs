#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_scryfall;

pub use mock_scryfall::{MockResponse, MockScryfall, RecordedRequest};

use assert_cmd::Command;
use std::path::PathBuf;

/// A `scryunix` command isolated from the caller's environment.
pub fn scryunix_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("scryunix"));
    cmd.env_remove("NO_COLOR")
        .env_remove("SCRYUNIX_API_URL")
        .env_remove("SCRYUNIX_LOG")
        .env_remove("RUST_LOG");
    cmd
}

pub fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture(name: &str) -> PathBuf {
    fixtures_path().join(name)
}

pub fn fixture_text(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).expect("fixture should be readable")
}

/// A command pointed at `mock` with a short timeout.
pub fn against(mock: &MockScryfall) -> Command {
    let mut cmd = scryunix_cmd();
    cmd.args(["--api-url", mock.base_url(), "--timeout", "5"]);
    cmd
}
