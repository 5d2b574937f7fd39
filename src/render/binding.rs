use std::collections::BTreeMap;

use crate::{
    animation::interp::Breakpoints,
    foundation::core::Progress,
    foundation::error::{ScrollfxError, ScrollfxResult},
    render::value::{StyleProperty, StyleValue},
};

/// Which scalar a track reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressSource {
    #[default]
    Raw,
    /// The spring-filtered progress; falls back to raw when the driver has no spring.
    Smoothed,
}

/// One property of one layer, driven by a breakpoint mapping.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub property: StyleProperty,
    pub source: ProgressSource,
    breakpoints: Breakpoints<StyleValue>,
}

impl Track {
    /// Validates the breakpoints and checks that every output has the same kind and
    /// that the kind suits `property`.
    pub fn new(
        property: StyleProperty,
        source: ProgressSource,
        breakpoints: Breakpoints<StyleValue>,
    ) -> ScrollfxResult<Self> {
        breakpoints.validate()?;
        let first = breakpoints.outputs()[0].kind();
        if let Some(other) = breakpoints.outputs().iter().find(|v| v.kind() != first) {
            return Err(ScrollfxError::validation(format!(
                "{property} track mixes {first} and {} outputs",
                other.kind()
            )));
        }
        if !property.accepts(first) {
            return Err(ScrollfxError::validation(format!(
                "{property} does not accept {first} values"
            )));
        }
        Ok(Self {
            property,
            source,
            breakpoints,
        })
    }

    /// Shorthand for a raw-progress track over plain breakpoints.
    pub fn raw(
        property: StyleProperty,
        inputs: Vec<f64>,
        outputs: Vec<StyleValue>,
    ) -> ScrollfxResult<Self> {
        Self::new(
            property,
            ProgressSource::Raw,
            Breakpoints::new(inputs, outputs)?,
        )
    }

    pub fn breakpoints(&self) -> &Breakpoints<StyleValue> {
        &self.breakpoints
    }

    pub fn sample(&self, raw: Progress, smoothed: Progress) -> StyleValue {
        let p = match self.source {
            ProgressSource::Raw => raw,
            ProgressSource::Smoothed => smoothed,
        };
        self.breakpoints.map_progress(p)
    }
}

/// Style values of one layer for one frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct StyleFrame {
    values: BTreeMap<StyleProperty, StyleValue>,
}

impl StyleFrame {
    pub fn get(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.values.get(&property)
    }

    pub fn insert(&mut self, property: StyleProperty, value: StyleValue) {
        self.values.insert(property, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &StyleValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `transform` string in translate, scale, rotate order; `None` if no transform
    /// property is set.
    pub fn transform(&self) -> Option<String> {
        let parts: Vec<String> = self
            .iter()
            .filter(|(p, _)| p.is_transform())
            .map(|(p, v)| format!("{}({})", p.css_name(), p.css_value(v)))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Inline-style declarations, e.g.
    /// `transform: translateY(30%) scale(1.5); opacity: 0.8; filter: blur(5px)`.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(t) = self.transform() {
            decls.push(format!("transform: {t}"));
        }
        for (p, v) in self.iter().filter(|(p, _)| !p.is_transform()) {
            let decl = match p {
                StyleProperty::Blur => format!("filter: blur({})", p.css_value(v)),
                _ => format!("{}: {}", p.css_name(), p.css_value(v)),
            };
            decls.push(decl);
        }
        decls.join("; ")
    }
}

/// A visual element whose style is bound to scroll progress.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    name: String,
    tracks: Vec<Track>,
}

impl Layer {
    /// A property may be driven by at most one track.
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> ScrollfxResult<Self> {
        let name = name.into();
        let mut seen = std::collections::BTreeSet::new();
        for t in &tracks {
            if !seen.insert(t.property) {
                return Err(ScrollfxError::validation(format!(
                    "layer \"{name}\" binds {} more than once",
                    t.property
                )));
            }
        }
        Ok(Self { name, tracks })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn uses_smoothed(&self) -> bool {
        self.tracks
            .iter()
            .any(|t| t.source == ProgressSource::Smoothed)
    }

    pub fn evaluate(&self, raw: Progress, smoothed: Progress) -> StyleFrame {
        let mut frame = StyleFrame::default();
        for t in &self.tracks {
            frame.insert(t.property, t.sample(raw, smoothed));
        }
        frame
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/binding.rs"]
mod tests;
