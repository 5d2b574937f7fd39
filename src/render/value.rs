use std::fmt;

use crate::{
    animation::interp::Lerp,
    foundation::core::{Length, Rgba8, Unit, fmt_number},
    foundation::error::{ScrollfxError, ScrollfxResult},
};

/// A value a breakpoint track can produce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleValue {
    Number(f64),
    Length(Length),
    Color(Rgba8),
}

/// Shape of a [`StyleValue`]; all outputs of one track must share it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Length(Unit),
    Color,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => f.write_str("number"),
            Self::Length(unit) => write!(f, "length ({})", unit.suffix()),
            Self::Color => f.write_str("color"),
        }
    }
}

impl StyleValue {
    /// `#rrggbb` -> color, `30%`/`12px`/`90deg` -> length, plain numbers -> number.
    pub fn parse(s: &str) -> ScrollfxResult<Self> {
        let t = s.trim();
        if t.starts_with('#') {
            return Rgba8::from_hex(t).map(Self::Color);
        }
        if let Ok(n) = t.parse::<f64>() {
            if n.is_finite() {
                return Ok(Self::Number(n));
            }
        }
        Length::parse(t)
            .map(Self::Length)
            .map_err(|_| ScrollfxError::parse(format!("unrecognised style value \"{s}\"")))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::Length(l) => ValueKind::Length(l.unit),
            Self::Color(_) => ValueKind::Color,
        }
    }

    /// Numeric magnitude; colors have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Length(l) => Some(l.value),
            Self::Color(_) => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&fmt_number(*n)),
            Self::Length(l) => fmt::Display::fmt(l, f),
            Self::Color(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl Lerp for StyleValue {
    /// Values of different kinds cannot be blended; the result jumps to `b` as soon
    /// as `t > 0`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Self::Number(x), Self::Number(y)) => Self::Number(f64::lerp(x, y, t)),
            (Self::Length(x), Self::Length(y)) => Self::Length(Length::lerp(x, y, t)),
            (Self::Color(x), Self::Color(y)) => Self::Color(Rgba8::lerp(x, y, t)),
            _ => {
                if t > 0.0 {
                    *b
                } else {
                    *a
                }
            }
        }
    }
}

impl serde::Serialize for StyleValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Full precision: `Display` rounds for CSS output.
        match self {
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Length(l) => {
                serializer.collect_str(&format_args!("{}{}", l.value, l.unit.suffix()))
            }
            Self::Color(c) => serializer.serialize_str(&c.to_hex()),
        }
    }
}

impl<'de> serde::Deserialize<'de> for StyleValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Str(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(n) => Ok(Self::Number(n)),
            Repr::Str(s) => Self::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}

/// Visual property a track writes to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum StyleProperty {
    #[serde(alias = "x")]
    TranslateX,
    #[serde(alias = "y")]
    TranslateY,
    Scale,
    ScaleX,
    ScaleY,
    Rotate,
    Opacity,
    Blur,
    Color,
    BackgroundColor,
    StrokeDashoffset,
}

impl StyleProperty {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::TranslateX => "translateX",
            Self::TranslateY => "translateY",
            Self::Scale => "scale",
            Self::ScaleX => "scaleX",
            Self::ScaleY => "scaleY",
            Self::Rotate => "rotate",
            Self::Opacity => "opacity",
            Self::Blur => "blur",
            Self::Color => "color",
            Self::BackgroundColor => "background-color",
            Self::StrokeDashoffset => "stroke-dashoffset",
        }
    }

    pub fn is_transform(self) -> bool {
        matches!(
            self,
            Self::TranslateX
                | Self::TranslateY
                | Self::Scale
                | Self::ScaleX
                | Self::ScaleY
                | Self::Rotate
        )
    }

    /// Whether values of `kind` make sense for this property.
    pub fn accepts(self, kind: ValueKind) -> bool {
        use ValueKind as K;
        match self {
            Self::TranslateX | Self::TranslateY => matches!(
                kind,
                K::Number | K::Length(Unit::Px | Unit::Percent | Unit::Vh | Unit::Vw)
            ),
            Self::Scale | Self::ScaleX | Self::ScaleY | Self::Opacity => kind == K::Number,
            Self::Rotate => matches!(kind, K::Number | K::Length(Unit::Deg)),
            Self::Blur | Self::StrokeDashoffset => {
                matches!(kind, K::Number | K::Length(Unit::Px))
            }
            Self::Color | Self::BackgroundColor => kind == K::Color,
        }
    }

    /// Unit assumed for bare numbers when rendering CSS.
    pub fn default_unit(self) -> Option<Unit> {
        match self {
            Self::TranslateX | Self::TranslateY | Self::Blur | Self::StrokeDashoffset => {
                Some(Unit::Px)
            }
            Self::Rotate => Some(Unit::Deg),
            _ => None,
        }
    }

    /// Render `value` as this property would appear in CSS.
    pub fn css_value(self, value: &StyleValue) -> String {
        match (value, self.default_unit()) {
            (StyleValue::Number(n), Some(unit)) => Length::new(*n, unit).to_string(),
            (StyleValue::Number(n), None) if self == Self::Opacity => {
                fmt_number(n.clamp(0.0, 1.0))
            }
            _ => value.to_string(),
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/value.rs"]
mod tests;
