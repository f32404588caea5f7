//! Prompt colors and their validation.

use std::fmt;

use crate::{Error, Result};

/// Named colors offered in the menu, with their SGR foreground code.
pub const PRESETS: &[(&str, u8)] = &[
    ("Red", 31),
    ("Green", 32),
    ("Yellow", 33),
    ("Blue", 34),
    ("Magenta", 35),
    ("Cyan", 36),
    ("White", 37),
];

/// A terminal foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCode {
    /// Bold basic color, `1;<code>`
    Ansi(u8),
    /// 256-color palette index, `38;5;<n>`
    Palette(u8),
    /// True color, `38;2;<r>;<g>;<b>`
    Rgb(u8, u8, u8),
}

impl ColorCode {
    /// The SGR parameter string, without the `\e[` and `m` around it.
    pub fn sgr(&self) -> String {
        match self {
            Self::Ansi(code) => format!("1;{code}"),
            Self::Palette(index) => format!("38;5;{index}"),
            Self::Rgb(r, g, b) => format!("38;2;{r};{g};{b}"),
        }
    }

    /// Look up a preset by case-insensitive name.
    pub fn preset(name: &str) -> Option<Self> {
        PRESETS
            .iter()
            .find(|(preset, _)| preset.eq_ignore_ascii_case(name.trim()))
            .map(|(_, code)| Self::Ansi(*code))
    }

    /// Parse a command-line color: a preset name, a palette index or `R,G,B`.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidColor {
            input: input.to_string(),
            reason,
        };

        if let Some(preset) = Self::preset(input) {
            return Ok(preset);
        }

        let parts: Vec<&str> = input.split(',').collect();
        match parts.as_slice() {
            [index] => parse_channel(index)
                .map(Self::Palette)
                .map_err(|e| invalid(e.to_string())),
            [r, g, b] => {
                let r = parse_channel(r).map_err(|e| invalid(format!("red: {e}")))?;
                let g = parse_channel(g).map_err(|e| invalid(format!("green: {e}")))?;
                let b = parse_channel(b).map_err(|e| invalid(format!("blue: {e}")))?;
                Ok(Self::Rgb(r, g, b))
            }
            _ => Err(invalid(format!(
                "expected a color name ({}), a palette index 0-255, or R,G,B",
                preset_names().join(", ")
            ))),
        }
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ansi(code) => match PRESETS.iter().find(|(_, c)| c == code) {
                Some((name, _)) => f.write_str(name),
                None => write!(f, "ansi {code}"),
            },
            Self::Palette(index) => write!(f, "palette {index}"),
            Self::Rgb(r, g, b) => write!(f, "rgb({r}, {g}, {b})"),
        }
    }
}

/// Why a channel value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    #[error("please enter a value")]
    Empty,
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
    #[error("{0} is outside 0-255")]
    OutOfRange(i64),
}

/// Parse one color channel (or palette index) in `0..=255`.
pub fn parse_channel(input: &str) -> std::result::Result<u8, ChannelError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ChannelError::Empty);
    }
    let value: i64 = input
        .parse()
        .map_err(|_| ChannelError::NotANumber(input.to_string()))?;
    u8::try_from(value).map_err(|_| ChannelError::OutOfRange(value))
}

/// Preset names in menu order.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _)| *name).collect()
}
