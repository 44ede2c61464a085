use derive_more::{AsRef, Deref, Display, From, Into};
use palette::Srgba;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Use for full circles, round or square caps overlap at north.
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct LabelText(String);

crate::impl_string_newtype!(LabelText);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelFont {
    pub family: String,
    pub size: f64,
}

impl Default for LabelFont {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            size: 10.0,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected #rrggbb or #rrggbbaa, got {0:?}")]
    Format(String),
    #[error("invalid hex digits in {0:?}")]
    Hex(String),
}

/// Straight-alpha sRGB colour, written as `#rrggbb`, `#rrggbbaa` or a few
/// plain names in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Deref, From, Into, SerializeDisplay, DeserializeFromStr)]
pub struct Color(Srgba<f64>);

impl Color {
    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self(Srgba::new(red, green, blue, alpha))
    }

    pub fn white(alpha: f64) -> Self {
        Self::rgba(1.0, 1.0, 1.0, alpha)
    }

    pub fn black(alpha: f64) -> Self {
        Self::rgba(0.0, 0.0, 0.0, alpha)
    }

    pub fn red() -> Self {
        Self::rgba(1.0, 0.0, 0.0, 1.0)
    }

    pub fn components(&self) -> (f64, f64, f64, f64) {
        self.0.into_components()
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => return Ok(Self::red()),
            "black" => return Ok(Self::black(1.0)),
            "white" => return Ok(Self::white(1.0)),
            "clear" | "transparent" => return Ok(Self::black(0.0)),
            _ => {}
        }

        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(ColorParseError::Format(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| ColorParseError::Hex(s.to_string()))
        };

        let alpha = if hex.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.components();
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b), byte(a))
    }
}
