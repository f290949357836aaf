//! Turn order

use crate::data::Ability;
use crate::types::{Battler, Stat, Status, Weather};

/// Speed after stages, paralysis and weather abilities
pub fn effective_speed(battler: &Battler, weather: Option<Weather>) -> f32 {
    let mut speed = battler.staged_stat(Stat::Spe) as f32;
    if battler.status == Some(Status::Paralysis) {
        speed *= 0.25;
    }
    match (weather, battler.ability) {
        (Some(Weather::Rain), Some(Ability::SwiftSwim))
        | (Some(Weather::Sun), Some(Ability::Chlorophyll)) => speed *= 2.0,
        _ => {}
    }
    speed
}

/// Strictly faster; ties go to neither
pub fn outspeeds(a: &Battler, b: &Battler, weather: Option<Weather>) -> bool {
    effective_speed(a, weather) > effective_speed(b, weather)
}
