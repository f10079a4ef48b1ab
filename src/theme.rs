//! Theme context: color scheme preference crossed with time of day.
//!
//! Computed from inputs whenever one of them changes and handed to the
//! rendering layer as a value. Nothing here touches global state.

use chrono::Timelike as _;

use crate::foundation::error::{PhaseError, PhaseResult};

/// First hour (inclusive) counted as day.
pub const DAY_START_HOUR: u32 = 7;
/// First hour (inclusive) counted as night again.
pub const NIGHT_START_HOUR: u32 = 19;

/// Every class [`ThemeContext::css_classes`] can produce; consumers clear these before applying.
pub const ALL_CSS_CLASSES: [&str; 4] = ["heat-dark", "heat-light", "heat-day", "heat-night"];

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    pub fn from_prefers_light(prefers_light: bool) -> Self {
        if prefers_light { Self::Light } else { Self::Dark }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Daylight {
    Day,
    Night,
}

impl Daylight {
    pub fn from_hour(hour: u32) -> PhaseResult<Self> {
        if hour > 23 {
            return Err(PhaseError::validation(format!(
                "hour must be in 0..=23, got {hour}"
            )));
        }
        Ok(if (DAY_START_HOUR..NIGHT_START_HOUR).contains(&hour) {
            Self::Day
        } else {
            Self::Night
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ThemeContext {
    pub scheme: ColorScheme,
    pub daylight: Daylight,
}

impl ThemeContext {
    pub fn resolve(prefers_light: bool, hour: u32) -> PhaseResult<Self> {
        Ok(Self {
            scheme: ColorScheme::from_prefers_light(prefers_light),
            daylight: Daylight::from_hour(hour)?,
        })
    }

    /// Resolve against the local wall clock.
    pub fn now(prefers_light: bool) -> Self {
        let hour = chrono::Local::now().hour();
        let daylight = Daylight::from_hour(hour).unwrap_or(Daylight::Night);
        Self {
            scheme: ColorScheme::from_prefers_light(prefers_light),
            daylight,
        }
    }

    /// Same context with a new scheme, for media-query change events.
    pub fn with_scheme(self, scheme: ColorScheme) -> Self {
        Self { scheme, ..self }
    }

    pub fn css_classes(self) -> [&'static str; 2] {
        let scheme = match self.scheme {
            ColorScheme::Light => "heat-light",
            ColorScheme::Dark => "heat-dark",
        };
        let daylight = match self.daylight {
            Daylight::Day => "heat-day",
            Daylight::Night => "heat-night",
        };
        [scheme, daylight]
    }
}

#[cfg(test)]
#[path = "../tests/unit/theme.rs"]
mod tests;
