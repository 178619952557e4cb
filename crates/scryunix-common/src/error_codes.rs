//! Error categories and their process exit codes.
//!
//! Exit codes follow UNIX sysexits.h. A lookup that matches no card is a
//! clean no-op and exits with `EX_OK`.

pub const EX_OK: i32 = 0;
pub const EX_USAGE: i32 = 64;
pub const EX_DATAERR: i32 = 65;
pub const EX_SOFTWARE: i32 = 70;
pub const EX_IOERR: i32 = 74;

/// Error category for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// No card matched the lookup
    NotFound,
    /// Invalid arguments or unreadable input document
    InvalidInput,
    /// Card data the renderer does not handle (e.g. an unsupported layout)
    Unsupported,
    /// Broken data contract inside the renderer
    Internal,
    /// Network or filesystem failure
    External,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::InvalidInput => "invalid_input",
            ErrorCategory::Unsupported => "unsupported",
            ErrorCategory::Internal => "internal",
            ErrorCategory::External => "external",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::InvalidInput => EX_USAGE,
            ErrorCategory::Unsupported => EX_DATAERR,
            ErrorCategory::NotFound => EX_OK,
            ErrorCategory::Internal => EX_SOFTWARE,
            ErrorCategory::External => EX_IOERR,
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
