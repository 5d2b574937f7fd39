use crate::{
    foundation::core::Vec2,
    foundation::error::{ScrollfxError, ScrollfxResult},
};

/// Physical constants of a damped spring.
///
/// The spring behaves like a mass on a damped harmonic oscillator pulled toward
/// its target. `rest_delta`/`rest_speed` decide when motion is considered finished;
/// at that point the value snaps onto the target so repeated steps are idempotent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

impl SpringConfig {
    /// Stiffness and damping with default mass and rest thresholds.
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            ..Self::default()
        }
    }

    pub fn with_rest_delta(mut self, rest_delta: f64) -> Self {
        self.rest_delta = rest_delta;
        self
    }

    pub fn validate(&self) -> ScrollfxResult<()> {
        let fields = [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
            ("rest_delta", self.rest_delta),
            ("rest_speed", self.rest_speed),
        ];
        for (name, v) in fields {
            if !v.is_finite() {
                return Err(ScrollfxError::validation(format!(
                    "spring {name} must be finite"
                )));
            }
        }
        if self.stiffness <= 0.0 {
            return Err(ScrollfxError::validation("spring stiffness must be > 0"));
        }
        if self.mass <= 0.0 {
            return Err(ScrollfxError::validation("spring mass must be > 0"));
        }
        if self.damping < 0.0 {
            return Err(ScrollfxError::validation("spring damping must be >= 0"));
        }
        if self.rest_delta < 0.0 || self.rest_speed < 0.0 {
            return Err(ScrollfxError::validation(
                "spring rest thresholds must be >= 0",
            ));
        }
        Ok(())
    }

    /// Undamped angular frequency `sqrt(k / m)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// `c / (2 sqrt(k m))`: below 1 overshoots, 1 is critical, above 1 creeps.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Scalar spring smoother.
///
/// Time is passed in explicitly; each [`Spring::step`] advances the exact
/// closed-form solution of the oscillator, so large or uneven frame deltas do not
/// destabilise it.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    initial: f64,
    position: f64,
    velocity: f64, // units per second
    target: f64,
    resting: bool,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> ScrollfxResult<Self> {
        config.validate()?;
        if !initial.is_finite() {
            return Err(ScrollfxError::validation(
                "spring initial value must be finite",
            ));
        }
        Ok(Self {
            config,
            initial,
            position: initial,
            velocity: 0.0,
            target: initial,
            resting: true,
        })
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn value(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.resting
    }

    /// Retarget the spring. Current position and velocity are kept, so motion
    /// stays continuous. Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f64) {
        if !target.is_finite() || target == self.target {
            return;
        }
        self.target = target;
        self.resting = false;
    }

    /// Teleport to `value` with zero velocity.
    pub fn jump(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
        self.resting = true;
    }

    /// Back to the value the spring was created with, as on remount.
    pub fn reset(&mut self) {
        self.jump(self.initial);
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.resting || !dt.is_finite() || dt <= 0.0 {
            return self.position;
        }

        let (x, v) = oscillate(&self.config, self.position - self.target, self.velocity, dt);
        self.position = self.target + x;
        self.velocity = v;

        if x.abs() <= self.config.rest_delta && v.abs() <= self.config.rest_speed {
            self.position = self.target;
            self.velocity = 0.0;
            self.resting = true;
            tracing::debug!(target = self.target, "spring settled");
        }
        self.position
    }

    /// Step with a fixed `dt` until the spring rests or `max_steps` is reached.
    /// Returns the number of steps taken.
    pub fn settle(&mut self, dt: f64, max_steps: usize) -> usize {
        let mut steps = 0;
        while !self.resting && steps < max_steps {
            self.step(dt);
            steps += 1;
        }
        steps
    }
}

/// Displacement `x0` and velocity `v0` after `t` seconds of free damped motion.
fn oscillate(cfg: &SpringConfig, x0: f64, v0: f64, t: f64) -> (f64, f64) {
    let w0 = cfg.natural_frequency();
    let zeta = cfg.damping_ratio();

    if (zeta - 1.0).abs() < 1e-9 {
        let b = v0 + w0 * x0;
        let e = (-w0 * t).exp();
        return (e * (x0 + b * t), e * (v0 - w0 * b * t));
    }

    if zeta < 1.0 {
        let a = zeta * w0;
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let (sin, cos) = (wd * t).sin_cos();
        let e = (-a * t).exp();
        let b = (v0 + a * x0) / wd;
        let x = e * (x0 * cos + b * sin);
        let v = e * (v0 * cos - ((a * v0 + w0 * w0 * x0) / wd) * sin);
        return (x, v);
    }

    let root = (zeta * zeta - 1.0).sqrt();
    let r1 = -w0 * (zeta - root);
    let r2 = -w0 * (zeta + root);
    let c1 = (v0 - r2 * x0) / (r1 - r2);
    let c2 = x0 - c1;
    let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
    (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
}

/// Two independent springs driving a 2D value (cursor follow, magnetic offset).
#[derive(Clone, Debug)]
pub struct Spring2 {
    x: Spring,
    y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig, initial: Vec2) -> ScrollfxResult<Self> {
        Ok(Self {
            x: Spring::new(config, initial.x)?,
            y: Spring::new(config, initial.y)?,
        })
    }

    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn jump(&mut self, value: Vec2) {
        self.x.jump(value.x);
        self.y.jump(value.y);
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }

    pub fn step(&mut self, dt: f64) -> Vec2 {
        Vec2::new(self.x.step(dt), self.y.step(dt))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
