//! Entry flow: parse arguments, look up one card, render it, report errors.

use std::ffi::OsString;
use std::io;
use std::io::IsTerminal;
use std::io::Write;

use clap::CommandFactory;
use clap::Parser;
use clap::error::ErrorKind;
use clap_complete::generate;
use scryunix_common::Colors;
use scryunix_common::color_init;
use scryunix_common::error_codes;
use scryunix_common::strip_ansi_codes;
use scryunix_core::render_card;
use scryunix_provider::CardProvider;
use scryunix_provider::FileProvider;
use scryunix_provider::ScryfallClient;
use tracing::debug;
use tracing::info;

use crate::commands::Cli;
use crate::commands::ColorChoice;
use crate::error::AppError;
use crate::telemetry::init_tracing;

/// Runs the CLI with `args` (program name first) and returns the process
/// exit code.
pub fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => error_codes::EX_USAGE,
            };
        }
    };

    let color = cli.effective_color();
    color_init(color == ColorChoice::Never);
    let _guard = init_tracing(cli.log_level());

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "scryunix", &mut io::stdout());
        return 0;
    }

    let styled = match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match &cli.file {
        Some(path) => execute(&cli, &FileProvider::new(path), &mut out, styled),
        None => {
            let client = ScryfallClient::new(cli.client_config());
            execute(&cli, &client, &mut out, styled)
        }
    };

    match result {
        Ok(()) => 0,
        Err(e) if e.is_broken_pipe() => {
            debug!("Stdout closed before the card was written");
            0
        }
        Err(e) => {
            report(&e);
            e.exit_code()
        }
    }
}

/// Looks up the card `cli` asks for and writes it to `out`.
///
/// The card is rendered completely before anything is written, so a failed
/// lookup or an unsupported layout leaves `out` untouched.
pub fn execute(
    cli: &Cli,
    provider: &dyn CardProvider,
    out: &mut dyn Write,
    styled: bool,
) -> Result<(), AppError> {
    let card = match cli.query() {
        Some(query) => {
            info!(query = %query, "Looking up card by name");
            provider.named(&query)?
        }
        None => {
            info!("Looking up a random card");
            provider.random()?
        }
    };

    let rendered = render_card(&card, &cli.render_options())?;
    let text = if styled {
        rendered
    } else {
        strip_ansi_codes(&rendered)
    };

    out.write_all(text.as_bytes()).map_err(AppError::Output)?;
    out.flush().map_err(AppError::Output)
}

fn report(error: &AppError) {
    debug!(category = %error.category(), "Command failed");
    eprintln!("{} {}", Colors::error("Error:"), error);
    eprintln!("{} {}", Colors::dim("Suggestion:"), error.suggestion());
    if error.is_retryable() {
        eprintln!(
            "{}",
            Colors::dim("(This error may be transient - retry may succeed)")
        );
    }
}
