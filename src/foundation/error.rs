/// Convenience result type used across scrollfx.
pub type ScrollfxResult<T> = Result<T, ScrollfxError>;

/// Top-level error taxonomy used by construction and loading APIs.
///
/// Sampling a validated breakpoint set, stepping a spring or feeding pointer samples
/// never fails; errors only surface when configuration is built or parsed.
#[derive(thiserror::Error, Debug)]
pub enum ScrollfxError {
    /// Invalid user-provided configuration (breakpoints, spring constants, scenes).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or sampling animation primitives.
    #[error("animation error: {0}")]
    Animation(String),

    /// Malformed textual values such as `"30%"`, `"#06b6d4"` or `"start end"`.
    #[error("parse error: {0}")]
    Parse(String),

    /// Errors when serializing or deserializing scene data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollfxError {
    /// Build a [`ScrollfxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollfxError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ScrollfxError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`ScrollfxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
