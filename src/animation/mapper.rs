use std::sync::Arc;

use rayon::prelude::*;
use serde::ser::SerializeMap as _;

use crate::{
    animation::table::ChannelTable,
    foundation::core::{MotionPreference, Progress},
    foundation::error::{PhaseError, PhaseResult},
};

/// Snapshot of every channel of a table at one progress value.
#[derive(Clone, Debug)]
pub struct PhaseSet {
    table: Arc<ChannelTable>,
    progress: Progress,
    motion: MotionPreference,
    values: Vec<f64>, // parallel to table.channels()
}

impl PhaseSet {
    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of a named channel. Unknown names are an integration mistake and fail.
    pub fn get(&self, name: &str) -> PhaseResult<f64> {
        self.table.index_of(name).map(|i| self.values[i])
    }

    /// `(name, value)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.table
            .channels()
            .iter()
            .zip(self.values.iter())
            .map(|(ch, &v)| (ch.name.as_str(), v))
    }

    /// A section is active once its opacity is strictly above the table threshold.
    pub fn is_active(&self, section: &str) -> PhaseResult<bool> {
        let s = self.table.section(section)?;
        Ok(self.get(&s.opacity)? > self.table.active_threshold())
    }

    pub fn active_sections(&self) -> Vec<&str> {
        let threshold = self.table.active_threshold();
        self.table
            .sections()
            .iter()
            .filter(|s| {
                self.table
                    .index_of(&s.opacity)
                    .is_ok_and(|i| self.values[i] > threshold)
            })
            .map(|s| s.name.as_str())
            .collect()
    }
}

impl PartialEq for PhaseSet {
    fn eq(&self, other: &Self) -> bool {
        self.progress == other.progress
            && self.motion == other.motion
            && self.values == other.values
            && (Arc::ptr_eq(&self.table, &other.table) || self.table == other.table)
    }
}

impl serde::Serialize for PhaseSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Channels<'a>(&'a PhaseSet);

        impl serde::Serialize for Channels<'_> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (name, value) in self.0.iter() {
                    map.serialize_entry(name, &value)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("progress", &self.progress)?;
        map.serialize_entry("motion", &self.motion)?;
        map.serialize_entry("channels", &Channels(self))?;
        map.serialize_entry("active", &self.active_sections())?;
        map.end()
    }
}

/// Evaluate every channel of `table` at `progress`.
///
/// Out-of-range progress (overscroll, flings) is clamped. Under
/// [`MotionPreference::Reduced`] motion channels hold their resting value while
/// opacity channels still interpolate.
pub fn evaluate(progress: f64, table: &Arc<ChannelTable>, motion: MotionPreference) -> PhaseSet {
    let p = Progress::clamped(progress);
    let values = table
        .channels()
        .iter()
        .map(|ch| ch.sample_validated(p, motion))
        .collect();
    tracing::trace!(progress = p.get(), ?motion, "phase set evaluated");
    PhaseSet {
        table: Arc::clone(table),
        progress: p,
        motion,
        values,
    }
}

/// Stateless evaluator bound to one channel table.
#[derive(Clone, Debug)]
pub struct PhaseMapper {
    table: Arc<ChannelTable>,
}

impl PhaseMapper {
    pub fn new(table: ChannelTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn from_shared(table: Arc<ChannelTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ChannelTable {
        &self.table
    }

    pub fn evaluate(&self, progress: f64, motion: MotionPreference) -> PhaseSet {
        evaluate(progress, &self.table, motion)
    }

    /// Evaluate many progress samples in parallel; output order follows input order.
    #[tracing::instrument(level = "debug", skip(self, progress), fields(samples = progress.len()))]
    pub fn evaluate_many(&self, progress: &[f64], motion: MotionPreference) -> Vec<PhaseSet> {
        progress
            .par_iter()
            .map(|&p| self.evaluate(p, motion))
            .collect()
    }

    /// `steps + 1` evenly spaced samples covering `[0, 1]` inclusive.
    pub fn sweep(&self, steps: u32, motion: MotionPreference) -> PhaseResult<Vec<PhaseSet>> {
        if steps == 0 {
            return Err(PhaseError::validation("sweep needs at least one step"));
        }
        let n = f64::from(steps);
        let samples: Vec<f64> = (0..=steps).map(|i| f64::from(i) / n).collect();
        Ok(self.evaluate_many(&samples, motion))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/mapper.rs"]
mod tests;
