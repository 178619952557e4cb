//! SGR styling for rendered cards.
//!
//! A [`Style`] is never stored alongside text. It is applied once, at the
//! point a span is emitted, and closed with a full reset.

pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

/// Terminal hues used by the card palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Black,
    White,
    Gray,
    Blue,
    Red,
    Green,
    Yellow,
    Magenta,
}

impl Hue {
    pub fn fg_code(self) -> &'static str {
        match self {
            Hue::Black => "\x1b[30m",
            Hue::White => "\x1b[37m",
            Hue::Gray => "\x1b[90m",
            Hue::Blue => "\x1b[34m",
            Hue::Red => "\x1b[31m",
            Hue::Green => "\x1b[32m",
            Hue::Yellow => "\x1b[33m",
            Hue::Magenta => "\x1b[35m",
        }
    }

    pub fn bg_code(self) -> &'static str {
        match self {
            Hue::Black => "\x1b[40m",
            Hue::White => "\x1b[47m",
            Hue::Gray => "\x1b[100m",
            Hue::Blue => "\x1b[44m",
            Hue::Red => "\x1b[41m",
            Hue::Green => "\x1b[42m",
            Hue::Yellow => "\x1b[43m",
            Hue::Magenta => "\x1b[45m",
        }
    }
}

/// Foreground, background and attributes applied to one span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Hue>,
    pub bg: Option<Hue>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub const fn plain() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            dim: false,
        }
    }

    pub const fn fg(hue: Hue) -> Self {
        Self {
            fg: Some(hue),
            bg: None,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: true,
            dim: false,
        }
    }

    pub const fn on(mut self, hue: Hue) -> Self {
        self.bg = Some(hue);
        self
    }

    pub const fn dimmed(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::plain()
    }

    /// Wraps `text` in this style's SGR sequences followed by a reset.
    ///
    /// A plain style returns the text untouched.
    pub fn paint(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }

        let mut prefixes: Vec<&str> = Vec::with_capacity(4);
        if self.bold {
            prefixes.push(codes::BOLD);
        }
        if self.dim {
            prefixes.push(codes::DIM);
        }
        if let Some(fg) = self.fg {
            prefixes.push(fg.fg_code());
        }
        if let Some(bg) = self.bg {
            prefixes.push(bg.bg_code());
        }
        wrap_with_ansi(text, &prefixes)
    }
}

pub(crate) fn wrap_with_ansi(text: &str, prefixes: &[&str]) -> String {
    let prefix_len: usize = prefixes.iter().map(|prefix| prefix.len()).sum();
    let mut out = String::with_capacity(prefix_len + text.len() + codes::RESET.len());
    for prefix in prefixes {
        out.push_str(prefix);
    }
    out.push_str(text);
    out.push_str(codes::RESET);
    out
}
