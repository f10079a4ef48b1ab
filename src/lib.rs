//! scrollphase maps a single scroll-progress value onto the animation channels
//! of a landing page.
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: raw scroll position + [`ScrollRange`] -> [`Progress`] in `[0, 1]`
//! 2. **Evaluate**: [`Progress`] + [`MotionPreference`] + [`ChannelTable`] -> [`PhaseSet`]
//! 3. **Publish**: [`ScrollDriver`] pushes each phase set through a [`Signal`] to subscribers
//!
//! Channel tables are plain data (JSON, see [`presets`]) validated once when
//! built; evaluation is pure and cannot fail. Theme and decorative geometry
//! helpers live alongside as standalone value producers.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod layout;
pub mod signal;
pub mod theme;

pub use animation::channel::{Channel, ChannelKind, Stop};
pub use animation::ease::Ease;
pub use animation::mapper::{PhaseMapper, PhaseSet, evaluate};
pub use animation::presets;
pub use animation::table::{
    ChannelTable, ChannelTableBuilder, DEFAULT_ACTIVE_THRESHOLD, Section, TABLE_VERSION,
};
pub use foundation::core::{MotionPreference, Point, Progress, ScrollRange, Vec2};
pub use foundation::error::{PhaseError, PhaseResult};
pub use layout::points::{Rng64, Tick, clock_ticks, produce_layout_points, ring_points};
pub use signal::{ScrollDriver, Signal, Subscription};
pub use theme::{ColorScheme, Daylight, ThemeContext};
