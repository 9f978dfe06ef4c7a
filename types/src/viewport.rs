use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport width must be finite (got {0})")]
    NonFinite(f64),
    #[error("viewport width must be positive (got {0})")]
    NonPositive(f64),
}

/// Width of the area the card stack is laid out in, in pixel-equivalent units.
///
/// Invariant: the width is finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
}

impl Viewport {
    /// Width used when the host does not report one.
    pub const REFERENCE_WIDTH: f64 = 400.0;

    pub fn new(width: f64) -> Result<Self, ViewportError> {
        if !width.is_finite() {
            return Err(ViewportError::NonFinite(width));
        }
        if width <= 0.0 {
            return Err(ViewportError::NonPositive(width));
        }
        Ok(Self { width })
    }

    #[must_use]
    pub const fn width(self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn half_width(self) -> f64 {
        self.width / 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: Self::REFERENCE_WIDTH,
        }
    }
}

impl TryFrom<f64> for Viewport {
    type Error = ViewportError;

    fn try_from(width: f64) -> Result<Self, Self::Error> {
        Self::new(width)
    }
}
