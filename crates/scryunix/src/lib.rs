#![deny(clippy::all)]

pub mod app;
pub mod commands;
pub mod error;
pub mod telemetry;

pub use app::execute;
pub use app::run;
pub use commands::Cli;
pub use commands::ColorChoice;
pub use error::AppError;
