//! Common utilities shared across scryunix crates.
//!
//! Provides ANSI style codes, CLI message colors, string width helpers and
//! the error categories used to pick process exit codes.

#![deny(clippy::all)]

mod color;
pub mod error_codes;
mod string_utils;
pub mod style;

pub use color::Colors;
pub use color::init as color_init;
pub use color::is_disabled as color_is_disabled;
pub use color::no_color_env;
pub use color::no_color_requested;
pub use error_codes::ErrorCategory;
pub use string_utils::strip_ansi_codes;
pub use string_utils::truncate_chars;
pub use string_utils::visible_width;
pub use style::Hue;
pub use style::Style;
