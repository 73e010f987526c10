//! CLI commands for toque.
//!
//! Each command wraps the library API behind a serializable output struct:
//! `seed` records initial ratings, `rate` runs the submission flow, and
//! `tiers` recomputes the current assignment.

pub mod rate;
pub mod seed;
pub mod tiers_cmd;

pub use rate::{RateCommand, RateOutput};
pub use seed::{SeedCommand, SeedOutput};
pub use tiers_cmd::{render, TiersCommand, TiersOutput};
