//! # Energyweek Core Library
//!
//! This library provides the core logic for Energyweek, a weekly energy
//! pattern tracker. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary over this
//! library; the CLI is a thin presentational layer.
//!
//! ## Architecture
//!
//! - **Week vocabulary**: ordinal enums for weekdays (Mon-Fri), time
//!   blocks (morning/afternoon/evening), and energy levels (1=Rest ..
//!   4=High)
//! - **Grid**: a fixed 5x3 mapping of optional energy levels with an
//!   immutable-update edit operation
//! - **Pattern analysis**: a pure recompute pass deriving best times,
//!   challenge times, and consistent periods from the grid
//! - **Config**: TOML-based display preferences
//!
//! ## Key Components
//!
//! - [`WeekGrid`]: the single piece of state in the system
//! - [`PatternAnalyzer`]: derives a [`PatternSummary`] from a grid
//! - [`Config`]: display preferences

pub mod config;
pub mod error;
pub mod grid;
pub mod pattern;
pub mod week;

pub use config::{Config, DisplayConfig};
pub use error::{ConfigError, CoreError, ParseError, Result};
pub use grid::{GridEdit, WeekGrid};
pub use pattern::{BlockAverage, PatternAnalyzer, PatternSummary};
pub use week::{EnergyLevel, TimeBlock, Weekday};
