use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{ScrollfxError, ScrollfxResult};

pub use kurbo::{Point, Rect, Vec2};

/// Normalized scroll completion fraction, always within `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
pub struct Progress(f64);

impl Progress {
    /// Progress at the very start of the span.
    pub const START: Self = Self(0.0);
    /// Progress at the very end of the span.
    pub const END: Self = Self(1.0);

    /// Clamp `v` into `[0, 1]`. NaN maps to the start.
    pub fn new(v: f64) -> Self {
        if v.is_nan() {
            return Self::START;
        }
        Self(v.clamp(0.0, 1.0))
    }

    /// Raw scalar value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(v: f64) -> Self {
        Self::new(v)
    }
}

impl<'de> serde::Deserialize<'de> for Progress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Self::new)
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> ScrollfxResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> ScrollfxResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| ScrollfxError::parse(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(ScrollfxError::parse(format!("invalid hex color \"{s}\"")));
        }

        match s.len() {
            3 => {
                let nib = |i: usize| hex_byte(&s[i..i + 1]).map(|v| v * 17);
                Ok(Self::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Ok(Self::rgb(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            8 => Ok(Self::rgba(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                hex_byte(&s[6..8])?,
            )),
            _ => Err(ScrollfxError::parse(
                "hex color must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)",
            )),
        }
    }

    /// Lowercase `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba8 {
    type Err = ScrollfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl serde::Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// CSS-style unit attached to a [`Length`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Px,
    Percent,
    Deg,
    Vh,
    Vw,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
            Self::Deg => "deg",
            Self::Vh => "vh",
            Self::Vw => "vw",
        }
    }
}

/// A number with a unit, e.g. `30%` or `-180deg`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    pub const fn percent(value: f64) -> Self {
        Self::new(value, Unit::Percent)
    }

    pub const fn deg(value: f64) -> Self {
        Self::new(value, Unit::Deg)
    }

    /// Parse a number followed by one of `px`, `%`, `deg`, `vh`, `vw`.
    pub fn parse(s: &str) -> ScrollfxResult<Self> {
        let s = s.trim();
        const SUFFIXES: [(&str, Unit); 5] = [
            ("deg", Unit::Deg),
            ("px", Unit::Px),
            ("vh", Unit::Vh),
            ("vw", Unit::Vw),
            ("%", Unit::Percent),
        ];
        for (suffix, unit) in SUFFIXES {
            if let Some(num) = s.strip_suffix(suffix) {
                let value = num.trim().parse::<f64>().map_err(|e| {
                    ScrollfxError::parse(format!("invalid length \"{s}\": {e}"))
                })?;
                if !value.is_finite() {
                    return Err(ScrollfxError::parse(format!("length \"{s}\" is not finite")));
                }
                return Ok(Self::new(value, unit));
            }
        }
        Err(ScrollfxError::parse(format!(
            "length \"{s}\" must end in px, %, deg, vh or vw"
        )))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", fmt_number(self.value), self.unit.suffix())
    }
}

impl FromStr for Length {
    type Err = ScrollfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Point-in-rect test that includes all four edges, unlike `Rect::contains`.
pub(crate) fn contains_inclusive(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}

/// Format a float for style output: at most four decimals, no trailing zeros, no `-0`.
pub fn fmt_number(v: f64) -> String {
    let rounded = (v * 10_000.0).round() / 10_000.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let s = format!("{rounded:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_owned()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
