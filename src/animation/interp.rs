use crate::{
    animation::ease::Ease,
    foundation::core::{Length, Point, Progress, Rgba8, Vec2},
    foundation::error::{ScrollfxError, ScrollfxResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

impl Lerp for Length {
    /// Mixed units cannot be blended; the value jumps to `b` as soon as `t > 0`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if a.unit != b.unit {
            return if t > 0.0 { *b } else { *a };
        }
        Length::new(f64::lerp(&a.value, &b.value, t), a.unit)
    }
}

/// A piecewise-linear mapping from an input scalar to `T`.
///
/// `inputs[i]` maps to `outputs[i]`; values between two inputs are linearly
/// interpolated (optionally eased per segment). Outside `[inputs[0], inputs[n-1]]`
/// the boundary output is returned unless clamping is disabled, in which case the
/// first/last segment is extrapolated.
///
/// Inputs are expected to be non-decreasing. [`Breakpoints::map`] does not check
/// this; call [`Breakpoints::validate`] when the data comes from outside.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakpoints<T> {
    inputs: Vec<f64>,
    outputs: Vec<T>,
    ease: Vec<Ease>, // empty, one for all segments, or one per segment
    clamp: bool,
}

impl<T> Breakpoints<T> {
    /// Pair `inputs` with `outputs`. Fails if either is empty or the lengths differ.
    pub fn new(inputs: Vec<f64>, outputs: Vec<T>) -> ScrollfxResult<Self> {
        if inputs.is_empty() {
            return Err(ScrollfxError::animation(
                "breakpoints need at least one input/output pair",
            ));
        }
        if inputs.len() != outputs.len() {
            return Err(ScrollfxError::animation(format!(
                "breakpoints have {} inputs but {} outputs",
                inputs.len(),
                outputs.len()
            )));
        }
        Ok(Self {
            inputs,
            outputs,
            ease: Vec::new(),
            clamp: true,
        })
    }

    /// Per-segment easing: a single curve for every segment, or exactly one per segment.
    pub fn with_ease(mut self, ease: Vec<Ease>) -> ScrollfxResult<Self> {
        let segments = self.inputs.len().saturating_sub(1);
        if ease.len() > 1 && ease.len() != segments {
            return Err(ScrollfxError::animation(format!(
                "expected 1 or {segments} ease curves, got {}",
                ease.len()
            )));
        }
        self.ease = ease;
        Ok(self)
    }

    /// Disable boundary clamping so the outer segments extrapolate.
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[T] {
        &self.outputs
    }

    pub fn clamps(&self) -> bool {
        self.clamp
    }

    /// Full structural check: finite, non-decreasing inputs.
    pub fn validate(&self) -> ScrollfxResult<()> {
        if let Some(bad) = self.inputs.iter().find(|v| !v.is_finite()) {
            return Err(ScrollfxError::validation(format!(
                "breakpoint input {bad} is not finite"
            )));
        }
        if let Some(i) = self.inputs.windows(2).position(|w| w[0] > w[1]) {
            return Err(ScrollfxError::validation(format!(
                "breakpoint inputs must be non-decreasing ({} > {} at index {})",
                self.inputs[i],
                self.inputs[i + 1],
                i + 1
            )));
        }
        Ok(())
    }

    fn segment_ease(&self, segment: usize) -> Ease {
        match self.ease.as_slice() {
            [] => Ease::Linear,
            [only] => *only,
            many => many.get(segment).copied().unwrap_or_default(),
        }
    }
}

impl<T> Breakpoints<T>
where
    T: Lerp + Clone,
{
    /// Map `s` through the breakpoints.
    pub fn map(&self, s: f64) -> T {
        let n = self.inputs.len();
        let last = n - 1;
        if n == 1 || s.is_nan() {
            return self.outputs[0].clone();
        }
        if self.clamp {
            if s <= self.inputs[0] {
                return self.outputs[0].clone();
            }
            if s >= self.inputs[last] {
                return self.outputs[last].clone();
            }
        }

        let hi = self.inputs.partition_point(|&x| x <= s).clamp(1, last);
        let lo = hi - 1;
        let span = self.inputs[hi] - self.inputs[lo];
        if span == 0.0 {
            return self.outputs[hi].clone();
        }

        let t = (s - self.inputs[lo]) / span;
        let t = if (0.0..=1.0).contains(&t) {
            self.segment_ease(lo).apply(t)
        } else {
            t
        };
        T::lerp(&self.outputs[lo], &self.outputs[hi], t)
    }

    pub fn map_progress(&self, p: Progress) -> T {
        self.map(p.get())
    }
}

/// One-shot mapping of `s` through `inputs -> outputs` with boundary clamping.
pub fn interpolate<T>(inputs: &[f64], outputs: &[T], s: f64) -> ScrollfxResult<T>
where
    T: Lerp + Clone,
{
    let bp = Breakpoints::new(inputs.to_vec(), outputs.to_vec())?;
    Ok(bp.map(s))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
