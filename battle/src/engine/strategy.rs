//! Strategies and the scoring rules they share

use std::fmt;

use super::damage::{self, DamageEstimate};
use super::speed::effective_speed;
use super::tuning::Tuning;
use crate::data::{GameData, MoveData, MoveFlags};
use crate::query::{is_super_effective, resistance};
use crate::types::{Battler, Type, Weather};

/// Coarse stage of the current battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Phase {
    /// First decision of the battle
    Opening,
    Midgame,
    /// Own HP is low
    Endgame,
    /// Opponent HP is low
    Cleanup,
    /// Catch strategy with the opponent weakened enough to throw
    Catching,
}

impl Phase {
    pub fn assess(
        strategy: Strategy,
        player: &Battler,
        opponent: &Battler,
        wild: bool,
        turn: u32,
        tuning: &Tuning,
    ) -> Self {
        if turn == 0 {
            Phase::Opening
        } else if strategy == Strategy::Catch && wild && opponent.hp_percent() <= tuning.catch_hp_percent {
            Phase::Catching
        } else if opponent.hp_percent() <= tuning.cleanup_hp_percent {
            Phase::Cleanup
        } else if player.hp_percent() <= tuning.endgame_hp_percent {
            Phase::Endgame
        } else {
            Phase::Midgame
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Opening => "opening",
            Phase::Midgame => "midgame",
            Phase::Endgame => "endgame",
            Phase::Cleanup => "cleanup",
            Phase::Catching => "catching",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the engine weighs its options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Maximize damage, prefer KOs
    #[default]
    Aggressive,
    /// Preserve HP, switch out of bad matchups
    Safe,
    /// Fastest kills, never switch, run from wild battles
    Speedrun,
    /// Fight everything for experience
    Grind,
    /// Weaken and status wild Pokemon, then throw
    Catch,
}

/// The opponent's best hit against the player's active battler
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Threat {
    pub max_damage: u32,
    /// Type of the move behind `max_damage`
    pub move_type: Option<Type>,
}

impl Threat {
    pub fn assess(data: &GameData, attacker: &Battler, defender: &Battler, weather: Option<Weather>) -> Self {
        let mut threat = Threat::default();
        for (_, slot) in attacker.usable_moves() {
            let mv = data.move_or_placeholder(slot.id);
            let est = damage::estimate(&mv, attacker, defender, weather);
            if est.max > threat.max_damage {
                threat = Threat {
                    max_damage: est.max,
                    move_type: Some(mv.move_type),
                };
            }
        }
        threat
    }
}

/// Per-decision facts every scoring rule reads
#[derive(Debug, Clone)]
pub struct Matchup<'a> {
    pub player: &'a Battler,
    pub opponent: &'a Battler,
    /// After Cloud Nine/Air Lock
    pub weather: Option<Weather>,
    pub phase: Phase,
    pub turn: u32,
    pub wild: bool,
    /// Running is available this turn
    pub can_flee: bool,
    pub player_speed: f32,
    pub opponent_speed: f32,
    pub threat: Threat,
}

impl Matchup<'_> {
    pub fn outspeeds(&self) -> bool {
        self.player_speed > self.opponent_speed
    }

    /// The opponent can KO the player's active battler this turn
    pub fn threatened(&self) -> bool {
        self.threat.max_damage > 0 && self.threat.max_damage >= u32::from(self.player.hp)
    }
}

/// One move's score with the estimate behind it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveScore {
    pub score: f32,
    pub lethal: bool,
    pub estimate: DamageEstimate,
}

fn status_move_score(m: &Matchup<'_>) -> f32 {
    if m.phase == Phase::Cleanup {
        return 0.0;
    }
    if m.opponent.has_status() {
        return 2.0;
    }
    let level_diff = i16::from(m.opponent.level) - i16::from(m.player.level);
    if level_diff < -5 {
        return 3.0;
    }
    let mut score = 5.0;
    if m.turn <= 2 && level_diff >= -2 {
        score += 15.0;
    }
    if m.opponent.hp_percent() > 80.0 && f32::from(m.opponent.max_hp()) > f32::from(m.player.max_hp()) * 0.5 {
        score += 10.0;
    }
    score
}

/// Score shared by every strategy before its own adjustments
fn base_move_score(mv: &MoveData, pp: u8, est: &DamageEstimate, m: &Matchup<'_>) -> f32 {
    let mut score = if mv.is_status() {
        status_move_score(m)
    } else {
        let hp = m.opponent.hp.max(1);
        let hit = est.hit_chance;
        let mut score = (est.expected / f32::from(hp) * 100.0).min(100.0);
        if est.guaranteed_ko(hp) {
            score += 200.0 * hit;
        } else if est.possible_ko(hp) {
            score += 100.0 * hit;
        } else if est.min.saturating_mul(2) >= u32::from(hp) && m.outspeeds() {
            score += 50.0 * hit;
        }
        if !m.outspeeds() && m.threatened() {
            if mv.priority > 0 {
                score += 150.0;
            }
            if est.guaranteed_ko(hp) {
                score += 100.0 * hit;
            } else if est.possible_ko(hp) {
                score += 50.0 * hit;
            }
        }
        if !m.outspeeds() && m.phase == Phase::Endgame && mv.priority > 0 {
            score += 80.0;
        }
        if m.phase == Phase::Cleanup && est.max > 0 && (mv.never_misses() || mv.accuracy >= 100) {
            score += 30.0;
        }
        score
    };
    if pp <= 2 {
        score -= 20.0;
    }
    if m.phase == Phase::Opening && mv.is_status() {
        score += 15.0;
    }
    score.max(0.0)
}

/// Lethal moves land in a tier above every non-lethal one
fn tiered(score: f32, lethal: bool) -> f32 {
    if lethal { 1000.0 + score } else { score.min(999.0) }
}

fn switch_score_base(candidate: &Battler, m: &Matchup<'_>, data: &GameData, tuning: &Tuning, defensive_weight: f32) -> f32 {
    let mut score = 0.0;
    for (_, slot) in candidate.usable_moves() {
        let mv = data.move_or_placeholder(slot.id);
        if mv.power == 0 {
            continue;
        }
        if is_super_effective(mv.move_type, &m.opponent.types) {
            score += 30.0;
            if candidate.has_type(mv.move_type) {
                score += 15.0;
            }
        }
    }
    score += candidate.hp_percent() * 0.5;
    if effective_speed(candidate, m.weather) > m.opponent_speed {
        score += 10.0;
    }

    let defensive: f32 = match m.threat.move_type {
        Some(t) => resistance(candidate, t).switch_bonus(),
        None => m
            .opponent
            .types
            .iter()
            .map(|&t| resistance(candidate, t).switch_bonus())
            .sum(),
    };
    score += defensive * defensive_weight;

    let mut threshold = tuning.switch_threshold_for(m.player.hp_percent());
    if m.threatened() && m.opponent_speed > m.player_speed {
        threshold = tuning.switch_threshold_threatened;
        score += tuning.threatened_switch_bonus;
    }
    if score > threshold { score } else { 0.0 }
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Aggressive,
        Strategy::Safe,
        Strategy::Speedrun,
        Strategy::Grind,
        Strategy::Catch,
    ];

    /// Case-insensitive name lookup
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Aggressive => "aggressive",
            Strategy::Safe => "safe",
            Strategy::Speedrun => "speedrun",
            Strategy::Grind => "grind",
            Strategy::Catch => "catch",
        }
    }

    pub fn score_move(&self, mv: &MoveData, pp: u8, m: &Matchup<'_>, tuning: &Tuning) -> MoveScore {
        let estimate = damage::estimate(mv, m.player, m.opponent, m.weather);
        let lethal = estimate.is_lethal_against(m.opponent.hp);
        let base = base_move_score(mv, pp, &estimate, m);

        let score = match self {
            Strategy::Aggressive | Strategy::Grind => tiered(base, lethal),
            Strategy::Speedrun if m.wild && m.can_flee => base.min(tuning.speedrun_flee_score - 1.0),
            Strategy::Speedrun => tiered(base, lethal),
            Strategy::Safe => {
                if m.threatened() && !m.outspeeds() && mv.priority <= 0 {
                    base * tuning.safe_threat_discount
                } else {
                    base
                }
            }
            Strategy::Catch if !m.wild => tiered(base, lethal),
            Strategy::Catch => {
                let hp = m.opponent.hp.max(1);
                if mv.is_status() {
                    if mv.flags.contains(MoveFlags::STATUS) && !m.opponent.has_status() {
                        320.0
                    } else {
                        status_move_score(m)
                    }
                } else if estimate.max == 0 || estimate.possible_ko(hp) {
                    0.0
                } else {
                    let max_percent = (estimate.max as f32 / f32::from(hp) * 100.0).min(100.0);
                    200.0 - max_percent
                }
            }
        };

        MoveScore {
            score,
            lethal,
            estimate,
        }
    }

    /// Score for sending in `candidate`; 0 when it does not beat the switch threshold
    pub fn score_switch(&self, candidate: &Battler, m: &Matchup<'_>, data: &GameData, tuning: &Tuning) -> f32 {
        match self {
            Strategy::Speedrun => 0.0,
            Strategy::Safe => switch_score_base(candidate, m, data, tuning, 2.0),
            _ => switch_score_base(candidate, m, data, tuning, 1.0),
        }
    }

    pub fn score_flee(&self, m: &Matchup<'_>, tuning: &Tuning) -> f32 {
        match self {
            Strategy::Speedrun if m.wild => tuning.speedrun_flee_score,
            Strategy::Grind | Strategy::Catch => 0.0,
            _ if m.player.hp_percent() < tuning.flee_low_hp_percent => tuning.flee_low_hp_score,
            _ => 0.0,
        }
    }

    pub fn score_catch(&self, m: &Matchup<'_>, tuning: &Tuning) -> f32 {
        match self {
            Strategy::Catch if m.opponent.hp_percent() <= tuning.catch_hp_percent => 300.0,
            Strategy::Catch => 50.0,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
