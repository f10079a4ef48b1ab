use crate::foundation::error::{PhaseError, PhaseResult};

pub use kurbo::{Point, Vec2};

/// Normalized scroll progress, always inside `[0, 1]`.
#[derive(
    Clone, Copy, Debug, PartialEq, PartialOrd, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(into = "f64", from = "f64")]
pub struct Progress(f64);

impl Progress {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    /// Clamp any raw value into `[0, 1]`. Overscroll is expected input, so this never fails.
    pub fn clamped(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::START;
        }
        Self(raw.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(raw: f64) -> Self {
        Self::clamped(raw)
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// Scroll offsets at which progress reads 0 and 1.
///
/// Mirrors a `start start` / `end end` tracking window: `start` is where the
/// container's top meets the viewport top, `end` is where its bottom meets the
/// viewport bottom.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    pub fn new(start: f64, end: f64) -> PhaseResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(PhaseError::validation("ScrollRange bounds must be finite"));
        }
        if start > end {
            return Err(PhaseError::validation("ScrollRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Range for a container of `content_height` shown through a viewport of
    /// `viewport_height`, starting at scroll offset `top`.
    pub fn for_container(top: f64, content_height: f64, viewport_height: f64) -> PhaseResult<Self> {
        let scrollable = (content_height - viewport_height).max(0.0);
        Self::new(top, top + scrollable)
    }

    pub fn len(self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0.0
    }

    pub fn progress_at(self, position: f64) -> Progress {
        if self.is_empty() {
            // Step at `start`: nothing to scroll means the section is either
            // not reached yet or fully passed.
            return if position >= self.start {
                Progress::END
            } else {
                Progress::START
            };
        }
        Progress::clamped((position - self.start) / self.len())
    }
}

/// User motion preference, the `prefers-reduced-motion` media query as a value.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced_flag(reduced: bool) -> Self {
        if reduced { Self::Reduced } else { Self::Full }
    }

    pub fn is_reduced(self) -> bool {
        matches!(self, Self::Reduced)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
