use crate::{
    animation::spring::{Spring2, SpringConfig},
    foundation::core::{Point, Rect, Vec2, contains_inclusive},
    foundation::error::{ScrollfxError, ScrollfxResult},
};

/// Offset that pulls an element toward the pointer: the pointer's distance from
/// the element centre scaled by `strength`. Zero when the pointer is outside `rect`
/// (edges count as inside).
pub fn magnetic_offset(pointer: Point, rect: Rect, strength: f64) -> Vec2 {
    if !contains_inclusive(rect, pointer) {
        return Vec2::ZERO;
    }
    (pointer - rect.center()) * strength
}

/// An element that leans toward the pointer while hovered and springs back when
/// the pointer leaves.
#[derive(Clone, Debug)]
pub struct MagneticElement {
    rect: Rect,
    strength: f64,
    spring: Spring2,
}

impl MagneticElement {
    pub const DEFAULT_STRENGTH: f64 = 0.3;

    pub fn default_spring() -> SpringConfig {
        SpringConfig::new(300.0, 20.0)
    }

    pub fn new(rect: Rect, strength: f64, spring: SpringConfig) -> ScrollfxResult<Self> {
        if !strength.is_finite() {
            return Err(ScrollfxError::validation("magnetic strength must be finite"));
        }
        Ok(Self {
            rect,
            strength,
            spring: Spring2::new(spring, Vec2::ZERO)?,
        })
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Move the element's resting rectangle, e.g. after layout.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn on_pointer_move(&mut self, pointer: Point) {
        self.spring
            .set_target(magnetic_offset(pointer, self.rect, self.strength));
    }

    pub fn on_pointer_leave(&mut self) {
        self.spring.set_target(Vec2::ZERO);
    }

    /// Advance by `dt` seconds and return the current offset.
    pub fn tick(&mut self, dt: f64) -> Vec2 {
        self.spring.step(dt)
    }

    pub fn offset(&self) -> Vec2 {
        self.spring.value()
    }

    pub fn reset(&mut self) {
        self.spring.reset();
    }
}

/// Snapshot of a [`CursorFollower`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CursorState {
    pub position: Point,
    pub size: f64,
    pub hovering: bool,
}

/// A custom cursor that chases the pointer through a spring and grows while
/// hovering interactive elements.
#[derive(Clone, Debug)]
pub struct CursorFollower {
    spring: Spring2,
    idle_size: f64,
    hover_size: f64,
    hovering: bool,
}

impl CursorFollower {
    pub fn default_spring() -> SpringConfig {
        SpringConfig::new(400.0, 30.0)
    }

    /// `hover_size` defaults to one and a half times `idle_size` when `None`.
    pub fn new(
        spring: SpringConfig,
        idle_size: f64,
        hover_size: Option<f64>,
    ) -> ScrollfxResult<Self> {
        let hover_size = hover_size.unwrap_or(idle_size * 1.5);
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(idle_size) || !valid(hover_size) {
            return Err(ScrollfxError::validation(
                "cursor sizes must be finite and >= 0",
            ));
        }
        Ok(Self {
            spring: Spring2::new(spring, Vec2::ZERO)?,
            idle_size,
            hover_size,
            hovering: false,
        })
    }

    pub fn on_pointer_move(&mut self, pointer: Point) {
        self.spring.set_target(pointer.to_vec2());
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn tick(&mut self, dt: f64) -> CursorState {
        self.spring.step(dt);
        self.state()
    }

    pub fn state(&self) -> CursorState {
        CursorState {
            position: self.spring.value().to_point(),
            size: if self.hovering {
                self.hover_size
            } else {
                self.idle_size
            },
            hovering: self.hovering,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/magnetic.rs"]
mod tests;
