//! scrollfx is a headless scroll-animation pipeline.
//!
//! It turns scroll geometry and pointer samples into per-frame style values:
//!
//! 1. **Progress**: `scroll position -> Progress` in `[0, 1]` ([`ScrollProgressSource`])
//! 2. **Smoothing** (optional): a damped [`Spring`] filters the progress
//! 3. **Mapping**: piecewise-linear [`Breakpoints`] map progress to numbers, lengths and colors
//! 4. **Binding**: [`Layer`]s collect mapped values into a [`StyleFrame`] every tick
//!    ([`ScrollDriver`])
//!
//! Pointer helpers ([`PointerTracker`], [`MagneticElement`], [`CursorFollower`],
//! [`ImageTrail`]) cover the interaction effects that sit next to scroll effects.
//!
//! Nothing here touches a DOM or a clock: callers pass scroll offsets, pointer
//! positions, timestamps and frame deltas explicitly, which keeps every step
//! deterministic.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod interaction;
mod render;
mod scene;
mod scroll;

pub use animation::ease::Ease;
pub use animation::interp::{Breakpoints, Lerp, interpolate};
pub use animation::spring::{Spring, Spring2, SpringConfig};
pub use foundation::core::{Length, Point, Progress, Rect, Rgba8, Unit, Vec2, fmt_number};
pub use foundation::error::{ScrollfxError, ScrollfxResult};
pub use interaction::magnetic::{CursorFollower, CursorState, MagneticElement, magnetic_offset};
pub use interaction::pointer::{PointerTracker, TrackerConfig};
pub use interaction::trail::{ImageTrail, TrailConfig, TrailItem};
pub use render::binding::{Layer, ProgressSource, StyleFrame, Track};
pub use render::driver::{FrameOutput, LayerFrame, ScrollDriver};
pub use render::value::{StyleProperty, StyleValue, ValueKind};
pub use scene::model::{LayerDef, Scene, SceneDef, TrackDef};
pub use scene::presets::{PRESET_NAMES, preset, presets};
pub use scroll::progress::{
    Edge, Intersection, ScrollGeometry, ScrollOffset, ScrollProgressSource,
};
