use crate::{
    animation::spring::{Spring, SpringConfig},
    foundation::core::Progress,
    foundation::error::ScrollfxResult,
    render::binding::{Layer, StyleFrame},
    scroll::progress::ScrollProgressSource,
};

/// Everything a renderer needs for one animation frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameOutput {
    /// Ticks since mount (or the last unmount).
    pub frame: u64,
    pub raw: Progress,
    pub smoothed: Progress,
    pub layers: Vec<LayerFrame>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayerFrame {
    pub name: String,
    pub style: StyleFrame,
}

impl FrameOutput {
    pub fn layer(&self, name: &str) -> Option<&StyleFrame> {
        self.layers
            .iter()
            .find(|l| l.name == name)
            .map(|l| &l.style)
    }
}

/// Glues scroll events, the optional smoothing spring and the layer bindings
/// together. Scroll events only record state; [`ScrollDriver::tick`] is the
/// per-frame step that advances the spring and produces styles.
#[derive(Clone, Debug)]
pub struct ScrollDriver {
    source: ScrollProgressSource,
    spring: Option<Spring>,
    layers: Vec<Layer>,
    frame: u64,
}

impl ScrollDriver {
    pub fn new(
        source: ScrollProgressSource,
        spring: Option<SpringConfig>,
        layers: Vec<Layer>,
    ) -> ScrollfxResult<Self> {
        let initial = source.current().get();
        let spring = spring.map(|cfg| Spring::new(cfg, initial)).transpose()?;
        Ok(Self {
            source,
            spring,
            layers,
            frame: 0,
        })
    }

    pub fn source(&self) -> &ScrollProgressSource {
        &self.source
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn has_spring(&self) -> bool {
        self.spring.is_some()
    }

    /// Record a scroll position and retarget the spring.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Progress {
        let raw = self.source.on_scroll(scroll_y);
        if let Some(spring) = &mut self.spring {
            spring.set_target(raw.get());
        }
        raw
    }

    pub fn raw(&self) -> Progress {
        self.source.current()
    }

    pub fn smoothed(&self) -> Progress {
        match &self.spring {
            Some(s) => Progress::new(s.value()),
            None => self.raw(),
        }
    }

    /// True once the spring (if any) has come to rest.
    pub fn is_settled(&self) -> bool {
        self.spring.as_ref().is_none_or(Spring::is_at_rest)
    }

    /// Advance by `dt` seconds and evaluate every layer.
    pub fn tick(&mut self, dt: f64) -> FrameOutput {
        if let Some(spring) = &mut self.spring {
            spring.step(dt);
        }
        self.frame += 1;
        self.evaluate()
    }

    /// Evaluate the current state without advancing time.
    pub fn evaluate(&self) -> FrameOutput {
        let raw = self.raw();
        let smoothed = self.smoothed();
        FrameOutput {
            frame: self.frame,
            raw,
            smoothed,
            layers: self
                .layers
                .iter()
                .map(|l| LayerFrame {
                    name: l.name().to_owned(),
                    style: l.evaluate(raw, smoothed),
                })
                .collect(),
        }
    }

    /// Remount semantics: forget the scroll position and put the spring back at rest
    /// at its initial value.
    #[tracing::instrument(skip(self))]
    pub fn unmount(&mut self) {
        self.source.clear();
        if let Some(spring) = &mut self.spring {
            spring.reset();
        }
        self.frame = 0;
        tracing::debug!("scroll driver unmounted");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/driver.rs"]
mod tests;
