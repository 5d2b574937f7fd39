use std::fmt;

use crate::{
    foundation::core::Progress,
    foundation::error::{ScrollfxError, ScrollfxResult},
};

/// A point along an element's extent: a fraction of its size or a pixel offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    /// `start` = 0, `center` = 0.5, `end` = 1; `50%` parses to 0.5.
    Fraction(f64),
    Px(f64),
}

impl Edge {
    pub const START: Self = Self::Fraction(0.0);
    pub const CENTER: Self = Self::Fraction(0.5);
    pub const END: Self = Self::Fraction(1.0);

    pub fn parse(s: &str) -> ScrollfxResult<Self> {
        let s = s.trim();
        let edge = match s {
            "start" => Self::START,
            "center" => Self::CENTER,
            "end" => Self::END,
            _ => {
                let num = |t: &str| {
                    t.trim()
                        .parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .ok_or_else(|| ScrollfxError::parse(format!("invalid scroll edge \"{s}\"")))
                };
                if let Some(px) = s.strip_suffix("px") {
                    Self::Px(num(px)?)
                } else if let Some(pct) = s.strip_suffix('%') {
                    Self::Fraction(num(pct)? / 100.0)
                } else {
                    Self::Fraction(num(s)?)
                }
            }
        };
        Ok(edge)
    }

    /// Offset in pixels from the leading edge of something `extent` pixels long.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Fraction(f) => f * extent,
            Self::Px(px) => px,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Fraction(v) if v == 0.0 => f.write_str("start"),
            Self::Fraction(v) if v == 0.5 => f.write_str("center"),
            Self::Fraction(v) if v == 1.0 => f.write_str("end"),
            Self::Fraction(v) => write!(f, "{v}"),
            Self::Px(px) => write!(f, "{px}px"),
        }
    }
}

/// Where an edge of the target meets an edge of the viewport, e.g. `"start end"`:
/// the target's start touches the viewport's end.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Intersection {
    pub target: Edge,
    pub viewport: Edge,
}

impl Intersection {
    pub const fn new(target: Edge, viewport: Edge) -> Self {
        Self { target, viewport }
    }

    pub fn parse(s: &str) -> ScrollfxResult<Self> {
        let mut parts = s.split_whitespace();
        let (Some(t), Some(v), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ScrollfxError::parse(format!(
                "scroll offset \"{s}\" must be two edges, e.g. \"start end\""
            )));
        };
        Ok(Self::new(Edge::parse(t)?, Edge::parse(v)?))
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.viewport)
    }
}

impl TryFrom<String> for Intersection {
    type Error = ScrollfxError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Intersection> for String {
    fn from(i: Intersection) -> Self {
        i.to_string()
    }
}

/// The pair of intersections that bound a scroll span: progress 0 at `start`,
/// progress 1 at `end`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "[Intersection; 2]", into = "[Intersection; 2]")]
pub struct ScrollOffset {
    pub start: Intersection,
    pub end: Intersection,
}

impl ScrollOffset {
    /// `["start start", "end end"]`: 0 when the target's top reaches the top of the
    /// viewport, 1 when its bottom reaches the bottom. Used by sticky parallax sections.
    pub const CONTAIN: Self = Self {
        start: Intersection::new(Edge::START, Edge::START),
        end: Intersection::new(Edge::END, Edge::END),
    };

    /// `["start end", "end start"]`: the whole time any part of the target is visible.
    pub const ENTER_EXIT: Self = Self {
        start: Intersection::new(Edge::START, Edge::END),
        end: Intersection::new(Edge::END, Edge::START),
    };

    pub fn parse(start: &str, end: &str) -> ScrollfxResult<Self> {
        Ok(Self {
            start: Intersection::parse(start)?,
            end: Intersection::parse(end)?,
        })
    }
}

impl Default for ScrollOffset {
    fn default() -> Self {
        Self::ENTER_EXIT
    }
}

impl From<[Intersection; 2]> for ScrollOffset {
    fn from([start, end]: [Intersection; 2]) -> Self {
        Self { start, end }
    }
}

impl From<ScrollOffset> for [Intersection; 2] {
    fn from(o: ScrollOffset) -> Self {
        [o.start, o.end]
    }
}

/// Vertical layout of a scroll target, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollGeometry {
    /// Distance from the document top to the target's top.
    pub target_top: f64,
    pub target_height: f64,
    pub viewport_height: f64,
}

impl ScrollGeometry {
    pub fn validate(&self) -> ScrollfxResult<()> {
        if !(self.target_top.is_finite()
            && self.target_height.is_finite()
            && self.viewport_height.is_finite())
        {
            return Err(ScrollfxError::validation("scroll geometry must be finite"));
        }
        if self.target_height < 0.0 || self.viewport_height < 0.0 {
            return Err(ScrollfxError::validation(
                "scroll target and viewport heights must be >= 0",
            ));
        }
        Ok(())
    }

    /// Scroll position at which `at` holds.
    pub fn scroll_for(&self, at: Intersection) -> f64 {
        self.target_top + at.target.resolve(self.target_height)
            - at.viewport.resolve(self.viewport_height)
    }
}

/// Turns a scroll position into the normalized [`Progress`] of one target.
#[derive(Clone, Debug)]
pub struct ScrollProgressSource {
    geometry: ScrollGeometry,
    offset: ScrollOffset,
    last_scroll: Option<f64>,
}

impl ScrollProgressSource {
    pub fn new(geometry: ScrollGeometry, offset: ScrollOffset) -> ScrollfxResult<Self> {
        geometry.validate()?;
        Ok(Self {
            geometry,
            offset,
            last_scroll: None,
        })
    }

    pub fn geometry(&self) -> &ScrollGeometry {
        &self.geometry
    }

    pub fn offset(&self) -> &ScrollOffset {
        &self.offset
    }

    /// Replace the layout, e.g. after a resize. The last scroll position is kept.
    pub fn set_geometry(&mut self, geometry: ScrollGeometry) -> ScrollfxResult<()> {
        geometry.validate()?;
        self.geometry = geometry;
        Ok(())
    }

    /// Scroll positions mapped to progress 0 and 1.
    pub fn span(&self) -> (f64, f64) {
        (
            self.geometry.scroll_for(self.offset.start),
            self.geometry.scroll_for(self.offset.end),
        )
    }

    /// Progress at `scroll_y`, without recording it.
    pub fn progress(&self, scroll_y: f64) -> Progress {
        let (start, end) = self.span();
        let len = end - start;
        if len.abs() < f64::EPSILON {
            return if scroll_y > start {
                Progress::END
            } else {
                Progress::START
            };
        }
        Progress::new((scroll_y - start) / len)
    }

    /// Record a scroll event and return the resulting progress.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Progress {
        if scroll_y.is_finite() {
            self.last_scroll = Some(scroll_y);
        }
        self.current()
    }

    pub fn last_scroll(&self) -> Option<f64> {
        self.last_scroll
    }

    /// Progress at the last recorded scroll position; the start before any event.
    pub fn current(&self) -> Progress {
        self.last_scroll
            .map_or(Progress::START, |y| self.progress(y))
    }

    /// Forget the last scroll event.
    pub fn clear(&mut self) {
        self.last_scroll = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/progress.rs"]
mod tests;
