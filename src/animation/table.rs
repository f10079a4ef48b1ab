use std::collections::HashMap;

use crate::{
    animation::channel::{Channel, ChannelKind},
    foundation::error::{PhaseError, PhaseResult},
};

/// Channel table format version accepted by this crate.
pub const TABLE_VERSION: &str = "1";

/// Opacity above which a section counts as active when the table does not say otherwise.
pub const DEFAULT_ACTIVE_THRESHOLD: f64 = 0.5;

/// Page section whose activity derives from one opacity channel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    pub name: String,
    pub opacity: String, // name of an opacity channel
}

impl Section {
    pub fn new(name: impl Into<String>, opacity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            opacity: opacity.into(),
        }
    }
}

/// Boundary (serde) shape of a channel table, before validation.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ChannelTableDef {
    version: String,
    #[serde(default = "default_threshold")]
    active_threshold: f64,
    channels: Vec<Channel>,
    #[serde(default)]
    sections: Vec<Section>,
}

fn default_threshold() -> f64 {
    DEFAULT_ACTIVE_THRESHOLD
}

/// Validated, immutable set of channels evaluated together.
///
/// Every way of obtaining a table (constructor, builder, JSON) validates it, so
/// evaluation never has to.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ChannelTableDef", into = "ChannelTableDef")]
pub struct ChannelTable {
    active_threshold: f64,
    channels: Vec<Channel>,
    sections: Vec<Section>,
    channel_index: HashMap<String, usize>,
    section_index: HashMap<String, usize>,
}

impl TryFrom<ChannelTableDef> for ChannelTable {
    type Error = PhaseError;

    fn try_from(def: ChannelTableDef) -> PhaseResult<Self> {
        if def.version != TABLE_VERSION {
            return Err(PhaseError::config(format!(
                "unsupported channel table version '{}' (expected '{TABLE_VERSION}')",
                def.version
            )));
        }
        Self::with_threshold(def.channels, def.sections, def.active_threshold)
    }
}

impl From<ChannelTable> for ChannelTableDef {
    fn from(t: ChannelTable) -> Self {
        Self {
            version: TABLE_VERSION.to_string(),
            active_threshold: t.active_threshold,
            channels: t.channels,
            sections: t.sections,
        }
    }
}

impl PartialEq for ChannelTable {
    fn eq(&self, other: &Self) -> bool {
        self.active_threshold == other.active_threshold
            && self.channels == other.channels
            && self.sections == other.sections
    }
}

impl ChannelTable {
    pub fn new(channels: Vec<Channel>) -> PhaseResult<Self> {
        Self::with_threshold(channels, Vec::new(), DEFAULT_ACTIVE_THRESHOLD)
    }

    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(channels = channels.len(), sections = sections.len())
    )]
    pub fn with_threshold(
        channels: Vec<Channel>,
        sections: Vec<Section>,
        active_threshold: f64,
    ) -> PhaseResult<Self> {
        if !active_threshold.is_finite() || !(0.0..=1.0).contains(&active_threshold) {
            return Err(PhaseError::config(format!(
                "active_threshold must be in [0, 1], got {active_threshold}"
            )));
        }

        let mut channel_index = HashMap::with_capacity(channels.len());
        for (i, ch) in channels.iter().enumerate() {
            ch.validate()?;
            if channel_index.insert(ch.name.clone(), i).is_some() {
                return Err(PhaseError::config(format!(
                    "duplicate channel name '{}'",
                    ch.name
                )));
            }
        }

        let mut section_index = HashMap::with_capacity(sections.len());
        for (i, s) in sections.iter().enumerate() {
            if section_index.insert(s.name.clone(), i).is_some() {
                return Err(PhaseError::config(format!(
                    "duplicate section name '{}'",
                    s.name
                )));
            }
            let Some(&ci) = channel_index.get(&s.opacity) else {
                return Err(PhaseError::config(format!(
                    "section '{}' references unknown channel '{}'",
                    s.name, s.opacity
                )));
            };
            if channels[ci].kind != ChannelKind::Opacity {
                return Err(PhaseError::config(format!(
                    "section '{}' must reference an opacity channel, '{}' is {:?}",
                    s.name, s.opacity, channels[ci].kind
                )));
            }
        }

        tracing::debug!("channel table validated");
        Ok(Self {
            active_threshold,
            channels,
            sections,
            channel_index,
            section_index,
        })
    }

    pub fn from_json_str(s: &str) -> PhaseResult<Self> {
        // Two steps so table errors stay `Config` instead of `Serde`.
        let def: ChannelTableDef = serde_json::from_str(s)?;
        Self::try_from(def)
    }

    pub fn from_reader(r: impl std::io::Read) -> PhaseResult<Self> {
        let def: ChannelTableDef = serde_json::from_reader(r)?;
        Self::try_from(def)
    }

    pub fn to_json_pretty(&self) -> PhaseResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn builder() -> ChannelTableBuilder {
        ChannelTableBuilder::new()
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn active_threshold(&self) -> f64 {
        self.active_threshold
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn channel(&self, name: &str) -> PhaseResult<&Channel> {
        self.index_of(name).map(|i| &self.channels[i])
    }

    pub(crate) fn index_of(&self, name: &str) -> PhaseResult<usize> {
        self.channel_index
            .get(name)
            .copied()
            .ok_or_else(|| PhaseError::UnknownChannel(name.to_string()))
    }

    pub(crate) fn section(&self, name: &str) -> PhaseResult<&Section> {
        self.section_index
            .get(name)
            .map(|&i| &self.sections[i])
            .ok_or_else(|| PhaseError::UnknownSection(name.to_string()))
    }
}

/// Incremental construction of a [`ChannelTable`]; validation happens in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct ChannelTableBuilder {
    active_threshold: Option<f64>,
    channels: Vec<Channel>,
    sections: Vec<Section>,
}

impl ChannelTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_threshold(mut self, threshold: f64) -> Self {
        self.active_threshold = Some(threshold);
        self
    }

    pub fn channel(mut self, channel: Channel) -> Self {
        self.channels.push(channel);
        self
    }

    pub fn section(mut self, name: impl Into<String>, opacity: impl Into<String>) -> Self {
        self.sections.push(Section::new(name, opacity));
        self
    }

    pub fn build(self) -> PhaseResult<ChannelTable> {
        ChannelTable::with_threshold(
            self.channels,
            self.sections,
            self.active_threshold.unwrap_or(DEFAULT_ACTIVE_THRESHOLD),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/table.rs"]
mod tests;
