use crate::{
    foundation::core::Point,
    foundation::error::{ScrollfxError, ScrollfxResult},
};

/// Tuning for [`ImageTrail`]. Durations are in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Number of images cycled through.
    pub image_count: usize,
    /// Pointer travel (px) between two spawned images.
    pub mouse_threshold: f64,
    /// Time an image stays before it starts fading out.
    pub lifespan_ms: u64,
    pub in_duration_ms: u64,
    pub out_duration_ms: u64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            image_count: 5,
            mouse_threshold: 30.0,
            lifespan_ms: 1000,
            in_duration_ms: 750,
            out_duration_ms: 1000,
        }
    }
}

impl TrailConfig {
    pub fn validate(&self) -> ScrollfxResult<()> {
        if self.image_count == 0 {
            return Err(ScrollfxError::validation("trail image_count must be > 0"));
        }
        if !self.mouse_threshold.is_finite() || self.mouse_threshold <= 0.0 {
            return Err(ScrollfxError::validation(
                "trail mouse_threshold must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// One spawned trail image.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TrailItem {
    /// Index into the image set, `0..image_count`.
    pub slot: usize,
    pub position: Point,
    pub born_ms: u64,
}

impl TrailItem {
    fn age(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.born_ms)
    }

    /// Fade-in over `in_duration_ms`, full until `lifespan_ms`, then fade-out.
    pub fn opacity(&self, cfg: &TrailConfig, now_ms: u64) -> f64 {
        let age = self.age(now_ms);
        if age < cfg.in_duration_ms {
            return age as f64 / cfg.in_duration_ms as f64;
        }
        if age < cfg.lifespan_ms {
            return 1.0;
        }
        if cfg.out_duration_ms == 0 {
            return 0.0;
        }
        let out = (age - cfg.lifespan_ms) as f64 / cfg.out_duration_ms as f64;
        (1.0 - out).max(0.0)
    }
}

/// Drops an image behind the pointer every `mouse_threshold` pixels of travel.
#[derive(Clone, Debug)]
pub struct ImageTrail {
    config: TrailConfig,
    items: Vec<TrailItem>,
    next_slot: usize,
    last: Option<Point>,
    travelled: f64,
    active: bool,
}

impl ImageTrail {
    pub fn new(config: TrailConfig) -> ScrollfxResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            items: Vec::new(),
            next_slot: 0,
            last: None,
            travelled: 0.0,
            active: true,
        })
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    /// Stop spawning and drop every live image.
    pub fn stop(&mut self) {
        self.active = false;
        self.items.clear();
        self.last = None;
        self.travelled = 0.0;
    }

    /// Feed a pointer sample; returns the item spawned by it, if any.
    pub fn on_move(&mut self, point: Point, now_ms: u64) -> Option<TrailItem> {
        if !self.active {
            return None;
        }
        let last = self.last.replace(point)?;
        self.travelled += (point - last).hypot();
        if self.travelled < self.config.mouse_threshold {
            return None;
        }

        self.travelled = 0.0;
        let item = TrailItem {
            slot: self.next_slot,
            position: point,
            born_ms: now_ms,
        };
        self.next_slot = (self.next_slot + 1) % self.config.image_count;
        self.items.push(item);
        Some(item)
    }

    /// Expire images whose fade-out has finished.
    pub fn tick(&mut self, now_ms: u64) {
        let ttl = self.config.lifespan_ms.saturating_add(self.config.out_duration_ms);
        self.items.retain(|it| it.age(now_ms) < ttl);
    }

    pub fn items(&self) -> &[TrailItem] {
        &self.items
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/trail.rs"]
mod tests;
