//! Type matchup questions asked when choosing a switch-in

use crate::types::{Battler, Type};

/// How well a battler takes hits of one type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Resistance {
    Weak,
    Neutral,
    Resists,
    /// By type or by ability (Levitate, Volt Absorb, ...)
    Immune,
}

impl Resistance {
    /// Switch-score adjustment for taking this hit
    pub fn switch_bonus(&self) -> f32 {
        match self {
            Resistance::Immune => 25.0,
            Resistance::Resists => 15.0,
            Resistance::Neutral => 0.0,
            Resistance::Weak => -25.0,
        }
    }
}

/// How `defender` takes a hit of `attacking` type
pub fn resistance(defender: &Battler, attacking: Type) -> Resistance {
    if defender.ability.and_then(|a| a.immune_type()) == Some(attacking) {
        return Resistance::Immune;
    }
    let eff = attacking.effectiveness_multi(&defender.types);
    if eff == 0.0 {
        Resistance::Immune
    } else if eff < 1.0 {
        Resistance::Resists
    } else if eff > 1.0 {
        Resistance::Weak
    } else {
        Resistance::Neutral
    }
}

/// Whether a move of `attacking` type is super effective against `defender_types`
pub fn is_super_effective(attacking: Type, defender_types: &[Type]) -> bool {
    attacking.effectiveness_multi(defender_types) > 1.0
}

/// Check if defender is weak to any of the attacking types
pub fn is_weak_to_any(defender_types: &[Type], attacking_types: &[Type]) -> bool {
    attacking_types.iter().any(|&t| is_super_effective(t, defender_types))
}

/// Types that hit `defender_types` super effectively
pub fn weaknesses(defender_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|&t| is_super_effective(t, defender_types))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Ability;
    use hoenn_codec::Stats;

    fn battler(types: &[Type]) -> Battler {
        Battler::new(1, "A", 30, types, Stats::default())
    }

    #[test]
    fn test_resistance_by_type() {
        let swellow = battler(&[Type::Normal, Type::Flying]);
        assert_eq!(resistance(&swellow, Type::Ground), Resistance::Immune);
        assert_eq!(resistance(&swellow, Type::Electric), Resistance::Weak);
        assert_eq!(resistance(&swellow, Type::Grass), Resistance::Resists);
        assert_eq!(resistance(&swellow, Type::Water), Resistance::Neutral);

        // Gen 3 Steel resists Ghost and Dark
        let steel = battler(&[Type::Steel]);
        assert_eq!(resistance(&steel, Type::Ghost), Resistance::Resists);
        assert_eq!(resistance(&steel, Type::Dark), Resistance::Resists);
    }

    #[test]
    fn test_resistance_by_ability() {
        let flygon = battler(&[Type::Ground, Type::Dragon]);
        assert_eq!(resistance(&flygon, Type::Ground), Resistance::Neutral);
        let flygon = flygon.with_ability(Ability::Levitate);
        assert_eq!(resistance(&flygon, Type::Ground), Resistance::Immune);

        let lanturn = battler(&[Type::Water, Type::Electric]).with_ability(Ability::VoltAbsorb);
        assert_eq!(resistance(&lanturn, Type::Electric), Resistance::Immune);
    }

    #[test]
    fn test_switch_bonus_order() {
        assert!(Resistance::Immune > Resistance::Resists);
        assert!(Resistance::Weak < Resistance::Neutral);
        assert_eq!(Resistance::Weak.switch_bonus(), -25.0);
    }

    #[test]
    fn test_is_weak_to_any() {
        let water = [Type::Water];
        assert!(is_weak_to_any(&water, &[Type::Electric, Type::Grass]));
        assert!(!is_weak_to_any(&water, &[Type::Fire, Type::Ice]));
        assert!(!is_weak_to_any(&water, &[]));
    }

    #[test]
    fn test_weaknesses_dual_type() {
        // Grass is 4x, Electric cancels against Ground
        assert_eq!(weaknesses(&[Type::Water, Type::Ground]), vec![Type::Grass]);
        let blaziken = weaknesses(&[Type::Fire, Type::Fighting]);
        assert!(blaziken.contains(&Type::Ground));
        assert!(blaziken.contains(&Type::Psychic));
        assert!(!blaziken.contains(&Type::Rock));
    }
}
