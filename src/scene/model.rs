use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    animation::ease::Ease,
    animation::interp::Breakpoints,
    animation::spring::SpringConfig,
    foundation::error::{ScrollfxError, ScrollfxResult},
    render::binding::{Layer, ProgressSource, Track},
    render::driver::ScrollDriver,
    render::value::{StyleProperty, StyleValue},
    scroll::progress::{ScrollGeometry, ScrollOffset, ScrollProgressSource},
};

/// JSON form of a scene: one scroll target and the layers bound to it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneDef {
    pub name: String,
    #[serde(default = "default_geometry")]
    pub geometry: ScrollGeometry,
    #[serde(default)]
    pub offset: ScrollOffset,
    /// Smoothing applied to the progress read by `"smoothed"` tracks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spring: Option<SpringConfig>,
    pub layers: Vec<LayerDef>,
}

fn default_geometry() -> ScrollGeometry {
    ScrollGeometry {
        target_top: 0.0,
        target_height: 4000.0,
        viewport_height: 1000.0,
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerDef {
    pub name: String,
    pub tracks: Vec<TrackDef>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackDef {
    pub property: StyleProperty,
    #[serde(default)]
    pub source: ProgressSource,
    pub inputs: Vec<f64>,
    pub outputs: Vec<StyleValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ease: Vec<Ease>,
    #[serde(default = "default_clamp")]
    pub clamp: bool,
}

fn default_clamp() -> bool {
    true
}

impl TrackDef {
    fn build(&self) -> ScrollfxResult<Track> {
        let bp = Breakpoints::new(self.inputs.clone(), self.outputs.clone())?
            .with_ease(self.ease.clone())?
            .with_clamp(self.clamp);
        Track::new(self.property, self.source, bp)
    }
}

impl LayerDef {
    fn build(&self) -> ScrollfxResult<Layer> {
        let tracks = self
            .tracks
            .iter()
            .enumerate()
            .map(|(i, t)| {
                t.build().map_err(|e| {
                    ScrollfxError::validation(format!("layer \"{}\" track {i}: {e}", self.name))
                })
            })
            .collect::<ScrollfxResult<Vec<_>>>()?;
        Layer::new(self.name.clone(), tracks)
    }
}

/// A validated-on-demand scene, loaded from JSON or taken from the presets.
#[derive(Clone, Debug)]
pub struct Scene {
    def: SceneDef,
}

impl Scene {
    pub fn from_def(def: SceneDef) -> Self {
        Self { def }
    }

    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrollfxResult<Self> {
        let def: SceneDef = serde_json::from_reader(r)
            .map_err(|e| ScrollfxError::serde(format!("parse scene JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a scene from a JSON file on disk.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> ScrollfxResult<Self> {
        let f = File::open(path).map_err(|e| {
            ScrollfxError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn def(&self) -> &SceneDef {
        &self.def
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn to_json_pretty(&self) -> ScrollfxResult<String> {
        serde_json::to_string_pretty(&self.def)
            .map_err(|e| ScrollfxError::serde(format!("serialize scene: {e}")))
    }

    /// Check geometry, spring constants, every track's breakpoints and units.
    pub fn validate(&self) -> ScrollfxResult<()> {
        self.build_parts().map(|_| ())
    }

    /// Build a fresh runtime driver for this scene.
    #[tracing::instrument(skip(self), fields(scene = %self.def.name))]
    pub fn driver(&self) -> ScrollfxResult<ScrollDriver> {
        let (source, layers) = self.build_parts()?;
        tracing::debug!(layers = layers.len(), "scene driver built");
        ScrollDriver::new(source, self.def.spring, layers)
    }

    fn build_parts(&self) -> ScrollfxResult<(ScrollProgressSource, Vec<Layer>)> {
        let def = &self.def;
        if def.name.trim().is_empty() {
            return Err(ScrollfxError::validation("scene name must not be empty"));
        }
        if let Some(spring) = &def.spring {
            spring.validate()?;
        }
        let source = ScrollProgressSource::new(def.geometry, def.offset)?;
        let layers = def
            .layers
            .iter()
            .map(LayerDef::build)
            .collect::<ScrollfxResult<Vec<_>>>()?;

        let mut names = std::collections::BTreeSet::new();
        for l in &layers {
            if !names.insert(l.name()) {
                return Err(ScrollfxError::validation(format!(
                    "duplicate layer name \"{}\"",
                    l.name()
                )));
            }
        }
        if def.spring.is_none() && layers.iter().any(Layer::uses_smoothed) {
            tracing::warn!(
                scene = %def.name,
                "smoothed tracks without a spring read raw progress"
            );
        }
        Ok((source, layers))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
