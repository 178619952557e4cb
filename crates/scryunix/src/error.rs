//! Top-level CLI errors.
//!
//! Wraps the provider and render errors so `app::run` can print one
//! message, one suggestion and pick a sysexits.h exit code.

use std::io;

use scryunix_common::ErrorCategory;
use scryunix_core::RenderError;
use scryunix_provider::ProviderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl AppError {
    /// Returns the error category for programmatic handling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Provider(e) => e.category(),
            AppError::Render(e) => e.category(),
            AppError::Output(_) => ErrorCategory::External,
        }
    }

    /// Returns a helpful suggestion for resolving the error.
    pub fn suggestion(&self) -> String {
        match self {
            AppError::Provider(e) => e.suggestion(),
            AppError::Render(e) => e.suggestion(),
            AppError::Output(_) => "Check that stdout is still open.".to_string(),
        }
    }

    /// Returns whether this error is potentially transient and may succeed on retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Provider(e) => e.is_retryable(),
            AppError::Render(_) | AppError::Output(_) => false,
        }
    }

    /// Converts to UNIX sysexits.h-compliant exit code.
    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    /// A closed pipe (`scryunix | head`) is not worth reporting.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, AppError::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
