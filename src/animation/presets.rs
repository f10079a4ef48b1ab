//! Channel tables shipped with the crate.

use crate::{animation::table::ChannelTable, foundation::error::PhaseResult};

/// Source of the landing page choreography: hero fade-out, the two product
/// sections, the mid-page scale dip, footer fade-in, scroll bar and edge glow.
pub const LANDING_TABLE_JSON: &str = include_str!("../../tables/landing.json");

pub const HERO: &str = "hero";
pub const MATERIAL: &str = "material";
pub const TIMESHEET: &str = "timesheet";
pub const FOOTER: &str = "footer";

pub fn landing_table() -> PhaseResult<ChannelTable> {
    ChannelTable::from_json_str(LANDING_TABLE_JSON)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/presets.rs"]
mod tests;
