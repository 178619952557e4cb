//! Colors for CLI status and error messages.
//!
//! Rendered cards carry their own styling; this module only covers the
//! messages printed around them.

use std::ffi::OsStr;
use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::style::Hue;
use crate::style::wrap_with_ansi;

static NO_COLOR: OnceLock<bool> = OnceLock::new();

/// `NO_COLOR` disables color when it is set to any non-empty value.
pub fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

pub fn no_color_env() -> bool {
    no_color_requested(std::env::var_os("NO_COLOR").as_deref())
}

pub fn init(no_color_flag: bool) {
    let _ = NO_COLOR.set(no_color_flag || no_color_env() || !std::io::stderr().is_terminal());
}

pub fn is_disabled() -> bool {
    *NO_COLOR.get().unwrap_or(&false)
}

pub struct Colors;

impl Colors {
    pub fn error(text: &str) -> String {
        if is_disabled() {
            text.to_string()
        } else {
            wrap_with_ansi(text, &[Hue::Red.fg_code()])
        }
    }

    pub fn warning(text: &str) -> String {
        if is_disabled() {
            text.to_string()
        } else {
            wrap_with_ansi(text, &[Hue::Yellow.fg_code()])
        }
    }

    pub fn dim(text: &str) -> String {
        if is_disabled() {
            text.to_string()
        } else {
            wrap_with_ansi(text, &[Hue::Gray.fg_code()])
        }
    }
}
