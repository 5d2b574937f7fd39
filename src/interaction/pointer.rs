use crate::{
    foundation::core::{Point, Rect, Vec2, contains_inclusive},
    foundation::error::{ScrollfxError, ScrollfxResult},
};

/// Tuning for [`PointerTracker`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Only samples inside this rectangle are accepted; positions are then reported
    /// relative to its top-left corner. `None` tracks everywhere in absolute coordinates.
    pub bounds: Option<Rect>,
    /// Factor applied to the per-sample delta to get the reported velocity.
    pub velocity_scale: f64,
    /// A sample only counts as movement if it travelled further than this (px).
    pub move_threshold: f64,
    /// Without samples for this long, the pointer is considered still.
    pub idle_timeout_ms: u64,
    /// Fraction of the remaining distance the smoothed position covers per tick.
    pub smooth_factor: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            bounds: None,
            velocity_scale: 0.1,
            move_threshold: 0.5,
            idle_timeout_ms: 100,
            smooth_factor: 0.1,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> ScrollfxResult<()> {
        if !self.velocity_scale.is_finite() || !self.move_threshold.is_finite() {
            return Err(ScrollfxError::validation(
                "tracker velocity_scale and move_threshold must be finite",
            ));
        }
        if self.move_threshold < 0.0 {
            return Err(ScrollfxError::validation(
                "tracker move_threshold must be >= 0",
            ));
        }
        if let Some(b) = self.bounds
            && (!b.is_finite() || b.x0 > b.x1 || b.y0 > b.y1)
        {
            return Err(ScrollfxError::validation(
                "tracker bounds must be finite with x0 <= x1 and y0 <= y1",
            ));
        }
        if !(0.0..=1.0).contains(&self.smooth_factor) {
            return Err(ScrollfxError::validation(
                "tracker smooth_factor must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Follows pointer samples and derives velocity, travelled distance and a
/// moving/idle flag.
///
/// Time is supplied by the caller in milliseconds. Call [`PointerTracker::on_move`]
/// for every pointer event and [`PointerTracker::tick`] once per frame.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    config: TrackerConfig,
    position: Point,
    smoothed: Point,
    velocity: Vec2,
    distance: f64,
    moving: bool,
    last_move_ms: Option<u64>,
}

impl PointerTracker {
    pub fn new(config: TrackerConfig) -> ScrollfxResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            position: Point::ZERO,
            smoothed: Point::ZERO,
            velocity: Vec2::ZERO,
            distance: 0.0,
            moving: false,
            last_move_ms: None,
        })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Feed one pointer sample. Returns `false` if it was non-finite or fell outside
    /// the bounds, in which case it is ignored.
    pub fn on_move(&mut self, point: Point, now_ms: u64) -> bool {
        if !point.is_finite() {
            return false;
        }
        let local = match self.config.bounds {
            Some(bounds) => {
                if !contains_inclusive(bounds, point) {
                    return false;
                }
                Point::new(point.x - bounds.x0, point.y - bounds.y0)
            }
            None => point,
        };

        let delta = match self.last_move_ms {
            Some(_) => local - self.position,
            None => {
                self.smoothed = local;
                Vec2::ZERO
            }
        };
        let dist = delta.hypot();

        self.velocity = delta * self.config.velocity_scale;
        self.distance += dist;
        self.position = local;
        self.moving = dist > self.config.move_threshold;
        self.last_move_ms = Some(now_ms);
        true
    }

    /// Per-frame update: eases the smoothed position and applies the idle timeout.
    pub fn tick(&mut self, now_ms: u64) {
        let k = self.config.smooth_factor;
        self.smoothed = self.smoothed + (self.position - self.smoothed) * k;

        if let Some(last) = self.last_move_ms {
            let idle = now_ms.saturating_sub(last) >= self.config.idle_timeout_ms;
            if idle && (self.moving || self.velocity != Vec2::ZERO) {
                self.moving = false;
                self.velocity = Vec2::ZERO;
                tracing::debug!(idle_ms = now_ms.saturating_sub(last), "pointer idle");
            }
        }
    }

    /// Latest accepted position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Position eased toward [`PointerTracker::position`] by `smooth_factor` per tick.
    pub fn smoothed(&self) -> Point {
        self.smoothed
    }

    /// Scaled delta of the latest sample; zero once idle.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Total distance travelled across accepted samples (px).
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Drop all history, as when the tracked element unmounts.
    pub fn reset(&mut self) {
        self.position = Point::ZERO;
        self.smoothed = Point::ZERO;
        self.velocity = Vec2::ZERO;
        self.distance = 0.0;
        self.moving = false;
        self.last_move_ms = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/pointer.rs"]
mod tests;
