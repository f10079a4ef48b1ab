use crate::{
    animation::ease::Ease,
    foundation::core::{MotionPreference, Progress},
    foundation::error::{PhaseError, PhaseResult},
};

/// One `(breakpoint, value)` pair. Serialized as a two-element array.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Stop {
    pub at: f64,
    pub value: f64,
}

impl Stop {
    pub fn new(at: f64, value: f64) -> Self {
        Self { at, value }
    }
}

impl From<(f64, f64)> for Stop {
    fn from((at, value): (f64, f64)) -> Self {
        Self { at, value }
    }
}

impl From<Stop> for (f64, f64) {
    fn from(s: Stop) -> Self {
        (s.at, s.value)
    }
}

/// Visual property a channel drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Opacity,
    OffsetX,
    OffsetY,
    Scale,
    Rotation,
}

impl ChannelKind {
    /// Everything except opacity moves something on screen.
    pub fn is_motion(self) -> bool {
        !matches!(self, Self::Opacity)
    }

    /// Value a motion channel holds when motion is reduced and no explicit rest is set.
    pub fn neutral(self) -> Option<f64> {
        match self {
            Self::Opacity => None,
            Self::OffsetX | Self::OffsetY | Self::Rotation => Some(0.0),
            Self::Scale => Some(1.0),
        }
    }
}

/// Named piecewise interpolation curve over progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Channel {
    pub name: String,
    pub kind: ChannelKind,
    pub stops: Vec<Stop>, // strictly increasing by `at`
    #[serde(default, skip_serializing_if = "is_linear")]
    pub ease: Ease, // applied within every segment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<f64>,
}

fn is_linear(ease: &Ease) -> bool {
    matches!(ease, Ease::Linear)
}

impl Channel {
    pub fn new(
        name: impl Into<String>,
        kind: ChannelKind,
        stops: impl IntoIterator<Item = (f64, f64)>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            stops: stops.into_iter().map(Stop::from).collect(),
            ease: Ease::Linear,
            rest: None,
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_rest(mut self, rest: f64) -> Self {
        self.rest = Some(rest);
        self
    }

    pub fn validate(&self) -> PhaseResult<()> {
        let name = &self.name;
        if name.trim().is_empty() {
            return Err(PhaseError::config("channel name must be non-empty"));
        }
        if self.stops.len() < 2 {
            return Err(PhaseError::config(format!(
                "channel '{name}' needs at least two stops, got {}",
                self.stops.len()
            )));
        }
        for (i, s) in self.stops.iter().enumerate() {
            if !s.at.is_finite() || !s.value.is_finite() {
                return Err(PhaseError::config(format!(
                    "channel '{name}' stop {i} is not finite"
                )));
            }
            if !(0.0..=1.0).contains(&s.at) {
                return Err(PhaseError::config(format!(
                    "channel '{name}' stop {i} breakpoint {} is outside [0, 1]",
                    s.at
                )));
            }
        }
        if let Some(i) = self.stops.windows(2).position(|w| w[0].at >= w[1].at) {
            return Err(PhaseError::config(format!(
                "channel '{name}' breakpoints must be strictly increasing ({} then {})",
                self.stops[i].at,
                self.stops[i + 1].at
            )));
        }
        if let Some(rest) = self.rest {
            if !self.kind.is_motion() {
                return Err(PhaseError::config(format!(
                    "channel '{name}' is an opacity channel and cannot declare a rest value"
                )));
            }
            if !rest.is_finite() {
                return Err(PhaseError::config(format!(
                    "channel '{name}' rest value is not finite"
                )));
            }
        }
        self.ease
            .validate()
            .map_err(|e| PhaseError::config(format!("channel '{name}': {e}")))
    }

    /// Value held under reduced motion; `None` for opacity channels.
    pub fn resting_value(&self) -> Option<f64> {
        if !self.kind.is_motion() {
            return None;
        }
        self.rest.or_else(|| self.kind.neutral())
    }

    /// Piecewise interpolation with flat clamping outside the first/last breakpoint.
    pub fn sample(&self, progress: Progress) -> PhaseResult<f64> {
        self.sample_with(progress, MotionPreference::Full)
    }

    pub fn sample_with(&self, progress: Progress, motion: MotionPreference) -> PhaseResult<f64> {
        if self.stops.is_empty() {
            return Err(PhaseError::config(format!(
                "channel '{}' has no stops",
                self.name
            )));
        }
        Ok(self.sample_validated(progress, motion))
    }

    /// Sampling for channels already checked by [`ChannelTable`](crate::ChannelTable).
    pub(crate) fn sample_validated(&self, progress: Progress, motion: MotionPreference) -> f64 {
        if motion.is_reduced() {
            if let Some(rest) = self.resting_value() {
                return rest;
            }
        }

        let p = progress.get();
        let first = &self.stops[0];
        let last = &self.stops[self.stops.len() - 1];
        if p <= first.at {
            return first.value;
        }
        if p >= last.at {
            return last.value;
        }

        // First stop strictly past `p`; never 0 or len here.
        let idx = self.stops.partition_point(|s| s.at <= p);
        let a = &self.stops[idx - 1];
        let b = &self.stops[idx];
        let t = (p - a.at) / (b.at - a.at);
        a.value + self.ease.apply(t) * (b.value - a.value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/channel.rs"]
mod tests;
