//! Query helpers for battle decision making
//!
//! Type-level matchup questions asked by switch scoring.

mod matchup;

pub use matchup::{Resistance, is_super_effective, is_weak_to_any, resistance, weaknesses};
