//! Generation 3 damage estimation.
//!
//! `((2L/5 + 2) * P * A / D) / 50 + 2`, then weather, type effectiveness,
//! STAB and burn, with a random roll of 85-100%. Expected damage is the
//! middle of the roll times expected hits, critical hits and hit chance.

use crate::data::{Ability, MoveData, MoveFlags};
use crate::types::{Battler, Stat, StatStages, Status, Type, Volatile, Weather};

const SONIC_BOOM: u16 = 49;
const DRAGON_RAGE: u16 = 82;
const PSYWAVE: u16 = 149;
const SUPER_FANG: u16 = 162;

/// Critical-hit odds by crit stage
const CRIT_CHANCES: [f32; 5] = [1.0 / 16.0, 1.0 / 8.0, 1.0 / 4.0, 1.0 / 3.0, 1.0 / 2.0];

/// Damage range and odds for one move against one target
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageEstimate {
    /// Lowest roll over all hits, no critical
    pub min: u32,
    /// Highest roll over all hits, no critical
    pub max: u32,
    /// 0.0-1.0
    pub hit_chance: f32,
    pub crit_chance: f32,
    /// Type chart multiplier; 0 when an ability grants immunity
    pub effectiveness: f32,
    pub expected: f32,
}

impl DamageEstimate {
    /// A move that cannot do damage
    pub const NONE: DamageEstimate = DamageEstimate {
        min: 0,
        max: 0,
        hit_chance: 0.0,
        crit_chance: 0.0,
        effectiveness: 0.0,
        expected: 0.0,
    };

    pub fn is_lethal_against(&self, hp: u16) -> bool {
        self.max > 0 && self.expected >= f32::from(hp)
    }

    pub fn guaranteed_ko(&self, hp: u16) -> bool {
        self.max > 0 && self.min >= u32::from(hp)
    }

    pub fn possible_ko(&self, hp: u16) -> bool {
        self.max > 0 && self.max >= u32::from(hp)
    }
}

fn scale(value: u32, factor: f32) -> u32 {
    (value as f32 * factor) as u32
}

/// Computed wide; garbage stats read mid-transition saturate instead of wrapping
fn base_damage(level: u8, power: u32, attack: u32, defense: u32) -> u32 {
    let defense = u64::from(defense.max(1));
    let scaled = (2 * u64::from(level) / 5 + 2) * u64::from(power) * u64::from(attack) / defense;
    u32::try_from(scaled / 50 + 2).unwrap_or(u32::MAX)
}

/// Chance that `mv` connects, 0.0-1.0
pub fn hit_chance(mv: &MoveData, attacker: &Battler, defender: &Battler, weather: Option<Weather>) -> f32 {
    if mv.never_misses() {
        return 1.0;
    }
    if mv.flags.contains(MoveFlags::OHKO) {
        let odds = i32::from(mv.accuracy) + i32::from(attacker.level) - i32::from(defender.level);
        return (odds as f32 / 100.0).clamp(0.0, 1.0);
    }
    let mut chance = f32::from(mv.accuracy) / 100.0
        * StatStages::accuracy_multiplier(attacker.boosts.accuracy, defender.boosts.evasion);
    if attacker.has_ability(Ability::CompoundEyes) {
        chance *= 1.3;
    }
    if attacker.has_ability(Ability::Hustle) && mv.is_physical() {
        chance *= 0.8;
    }
    if defender.has_ability(Ability::SandVeil) && weather == Some(Weather::Sand) {
        chance *= 0.8;
    }
    chance.clamp(0.0, 1.0)
}

/// Chance of a critical hit
pub fn crit_chance(mv: &MoveData, attacker: &Battler, defender: &Battler) -> f32 {
    if defender.has_ability(Ability::BattleArmor) || defender.has_ability(Ability::ShellArmor) {
        return 0.0;
    }
    let mut stage = 0usize;
    if mv.flags.contains(MoveFlags::HIGH_CRIT) {
        stage += 1;
    }
    if attacker.volatiles.contains(Volatile::FOCUS_ENERGY) {
        stage += 2;
    }
    CRIT_CHANCES[stage.min(CRIT_CHANCES.len() - 1)]
}

/// Type multiplier including ability immunities and Wonder Guard
pub fn effectiveness(mv: &MoveData, defender: &Battler) -> f32 {
    let chart = mv.move_type.effectiveness_multi(&defender.types);
    let Some(ability) = defender.ability else {
        return chart;
    };
    if ability.immune_type() == Some(mv.move_type)
        || (ability == Ability::Soundproof && mv.flags.contains(MoveFlags::SOUND))
        || (ability == Ability::WonderGuard && chart <= 1.0)
    {
        0.0
    } else {
        chart
    }
}

/// Damage that ignores the formula: fixed amounts, level-based and OHKO moves
fn rule_damage(mv: &MoveData, attacker: &Battler, defender: &Battler) -> Option<(u32, u32)> {
    let level = u32::from(attacker.level);
    if mv.flags.contains(MoveFlags::OHKO) {
        if attacker.level < defender.level || defender.has_ability(Ability::Sturdy) {
            return Some((0, 0));
        }
        let hp = u32::from(defender.hp);
        return Some((hp, hp));
    }
    if mv.flags.contains(MoveFlags::LEVEL_DAMAGE) {
        return Some(if mv.id == PSYWAVE {
            ((level / 2).max(1), level * 3 / 2)
        } else {
            (level, level)
        });
    }
    if mv.flags.contains(MoveFlags::FIXED_DAMAGE) {
        let amount = match mv.id {
            SONIC_BOOM => 20,
            DRAGON_RAGE => 40,
            SUPER_FANG => (u32::from(defender.hp) / 2).max(1),
            _ => return None,
        };
        return Some((amount, amount));
    }
    None
}

/// Estimate the damage `mv` does from `attacker` to `defender`.
///
/// `weather` should already account for Cloud Nine/Air Lock.
pub fn estimate(mv: &MoveData, attacker: &Battler, defender: &Battler, weather: Option<Weather>) -> DamageEstimate {
    if mv.is_status() {
        return DamageEstimate::NONE;
    }
    let effectiveness = effectiveness(mv, defender);
    if effectiveness == 0.0 {
        return DamageEstimate::NONE;
    }
    let hit_chance = hit_chance(mv, attacker, defender, weather);

    if let Some((min, max)) = rule_damage(mv, attacker, defender) {
        let expected = (min + max) as f32 / 2.0 * hit_chance;
        return DamageEstimate {
            min,
            max,
            hit_chance,
            crit_chance: 0.0,
            effectiveness,
            expected,
        };
    }

    let physical = mv.is_physical();
    let mut power = u32::from(mv.power);
    if let Some(pinch) = attacker.ability.and_then(|a| a.pinch_type()) {
        if pinch == mv.move_type && u32::from(attacker.hp) * 3 <= u32::from(attacker.max_hp()) {
            power = scale(power, 1.5);
        }
    }

    let (mut attack, mut defense) = if physical {
        (attacker.staged_stat(Stat::Atk), defender.staged_stat(Stat::Def))
    } else {
        (attacker.staged_stat(Stat::Spa), defender.staged_stat(Stat::Spd))
    };
    if physical {
        match attacker.ability {
            Some(Ability::HugePower | Ability::PurePower) => attack = attack.saturating_mul(2),
            Some(Ability::Hustle) => attack = scale(attack, 1.5),
            Some(Ability::Guts) if attacker.has_status() => attack = scale(attack, 1.5),
            _ => {}
        }
        if defender.has_ability(Ability::MarvelScale) && defender.has_status() {
            defense = scale(defense, 1.5);
        }
    }
    if defender.has_ability(Ability::ThickFat) && matches!(mv.move_type, Type::Fire | Type::Ice) {
        attack /= 2;
    }

    let mut damage = base_damage(attacker.level, power, attack, defense);

    match (weather, mv.move_type) {
        (Some(Weather::Rain), Type::Water) | (Some(Weather::Sun), Type::Fire) => {
            damage = scale(damage, 1.5)
        }
        (Some(Weather::Rain), Type::Fire) | (Some(Weather::Sun), Type::Water) => damage /= 2,
        _ => {}
    }
    damage = scale(damage, effectiveness);
    if attacker.has_type(mv.move_type) {
        damage = scale(damage, 1.5);
    }
    if physical && attacker.status == Some(Status::Burn) && !attacker.has_ability(Ability::Guts) {
        damage /= 2;
    }

    let per_hit_max = damage.max(1);
    let per_hit_min = (damage.saturating_mul(85) / 100).max(1);
    let (min_hits, max_hits) = mv.hit_range();
    let crit_chance = crit_chance(mv, attacker, defender);
    let middle = (per_hit_min as f32 + per_hit_max as f32) / 2.0;

    DamageEstimate {
        min: per_hit_min.saturating_mul(u32::from(min_hits)),
        max: per_hit_max.saturating_mul(u32::from(max_hits)),
        hit_chance,
        crit_chance,
        effectiveness,
        expected: middle * mv.expected_hits() * (1.0 + crit_chance) * hit_chance,
    }
}
