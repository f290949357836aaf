//! Generation 3 abilities

use crate::Type;

/// Abilities by stored ID (1-77)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Ability {
    Stench = 1,
    Drizzle = 2,
    SpeedBoost = 3,
    BattleArmor = 4,
    Sturdy = 5,
    Damp = 6,
    Limber = 7,
    SandVeil = 8,
    Static = 9,
    VoltAbsorb = 10,
    WaterAbsorb = 11,
    Oblivious = 12,
    CloudNine = 13,
    CompoundEyes = 14,
    Insomnia = 15,
    ColorChange = 16,
    Immunity = 17,
    FlashFire = 18,
    ShieldDust = 19,
    OwnTempo = 20,
    SuctionCups = 21,
    Intimidate = 22,
    ShadowTag = 23,
    RoughSkin = 24,
    WonderGuard = 25,
    Levitate = 26,
    EffectSpore = 27,
    Synchronize = 28,
    ClearBody = 29,
    NaturalCure = 30,
    LightningRod = 31,
    SereneGrace = 32,
    SwiftSwim = 33,
    Chlorophyll = 34,
    Illuminate = 35,
    Trace = 36,
    HugePower = 37,
    PoisonPoint = 38,
    InnerFocus = 39,
    MagmaArmor = 40,
    WaterVeil = 41,
    MagnetPull = 42,
    Soundproof = 43,
    RainDish = 44,
    SandStream = 45,
    Pressure = 46,
    ThickFat = 47,
    EarlyBird = 48,
    FlameBody = 49,
    RunAway = 50,
    KeenEye = 51,
    HyperCutter = 52,
    Pickup = 53,
    Truant = 54,
    Hustle = 55,
    CuteCharm = 56,
    Plus = 57,
    Minus = 58,
    Forecast = 59,
    StickyHold = 60,
    ShedSkin = 61,
    Guts = 62,
    MarvelScale = 63,
    LiquidOoze = 64,
    Overgrow = 65,
    Blaze = 66,
    Torrent = 67,
    Swarm = 68,
    RockHead = 69,
    Drought = 70,
    ArenaTrap = 71,
    VitalSpirit = 72,
    WhiteSmoke = 73,
    PurePower = 74,
    ShellArmor = 75,
    Cacophony = 76,
    AirLock = 77,
}

impl Ability {
    const ALL: [Ability; 77] = [
        Ability::Stench,
        Ability::Drizzle,
        Ability::SpeedBoost,
        Ability::BattleArmor,
        Ability::Sturdy,
        Ability::Damp,
        Ability::Limber,
        Ability::SandVeil,
        Ability::Static,
        Ability::VoltAbsorb,
        Ability::WaterAbsorb,
        Ability::Oblivious,
        Ability::CloudNine,
        Ability::CompoundEyes,
        Ability::Insomnia,
        Ability::ColorChange,
        Ability::Immunity,
        Ability::FlashFire,
        Ability::ShieldDust,
        Ability::OwnTempo,
        Ability::SuctionCups,
        Ability::Intimidate,
        Ability::ShadowTag,
        Ability::RoughSkin,
        Ability::WonderGuard,
        Ability::Levitate,
        Ability::EffectSpore,
        Ability::Synchronize,
        Ability::ClearBody,
        Ability::NaturalCure,
        Ability::LightningRod,
        Ability::SereneGrace,
        Ability::SwiftSwim,
        Ability::Chlorophyll,
        Ability::Illuminate,
        Ability::Trace,
        Ability::HugePower,
        Ability::PoisonPoint,
        Ability::InnerFocus,
        Ability::MagmaArmor,
        Ability::WaterVeil,
        Ability::MagnetPull,
        Ability::Soundproof,
        Ability::RainDish,
        Ability::SandStream,
        Ability::Pressure,
        Ability::ThickFat,
        Ability::EarlyBird,
        Ability::FlameBody,
        Ability::RunAway,
        Ability::KeenEye,
        Ability::HyperCutter,
        Ability::Pickup,
        Ability::Truant,
        Ability::Hustle,
        Ability::CuteCharm,
        Ability::Plus,
        Ability::Minus,
        Ability::Forecast,
        Ability::StickyHold,
        Ability::ShedSkin,
        Ability::Guts,
        Ability::MarvelScale,
        Ability::LiquidOoze,
        Ability::Overgrow,
        Ability::Blaze,
        Ability::Torrent,
        Ability::Swarm,
        Ability::RockHead,
        Ability::Drought,
        Ability::ArenaTrap,
        Ability::VitalSpirit,
        Ability::WhiteSmoke,
        Ability::PurePower,
        Ability::ShellArmor,
        Ability::Cacophony,
        Ability::AirLock,
    ];

    /// Look up a stored ability byte; 0 means none
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id).checked_sub(1)?).copied()
    }

    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Ability::Stench => "Stench",
            Ability::Drizzle => "Drizzle",
            Ability::SpeedBoost => "Speed Boost",
            Ability::BattleArmor => "Battle Armor",
            Ability::Sturdy => "Sturdy",
            Ability::Damp => "Damp",
            Ability::Limber => "Limber",
            Ability::SandVeil => "Sand Veil",
            Ability::Static => "Static",
            Ability::VoltAbsorb => "Volt Absorb",
            Ability::WaterAbsorb => "Water Absorb",
            Ability::Oblivious => "Oblivious",
            Ability::CloudNine => "Cloud Nine",
            Ability::CompoundEyes => "Compound Eyes",
            Ability::Insomnia => "Insomnia",
            Ability::ColorChange => "Color Change",
            Ability::Immunity => "Immunity",
            Ability::FlashFire => "Flash Fire",
            Ability::ShieldDust => "Shield Dust",
            Ability::OwnTempo => "Own Tempo",
            Ability::SuctionCups => "Suction Cups",
            Ability::Intimidate => "Intimidate",
            Ability::ShadowTag => "Shadow Tag",
            Ability::RoughSkin => "Rough Skin",
            Ability::WonderGuard => "Wonder Guard",
            Ability::Levitate => "Levitate",
            Ability::EffectSpore => "Effect Spore",
            Ability::Synchronize => "Synchronize",
            Ability::ClearBody => "Clear Body",
            Ability::NaturalCure => "Natural Cure",
            Ability::LightningRod => "Lightning Rod",
            Ability::SereneGrace => "Serene Grace",
            Ability::SwiftSwim => "Swift Swim",
            Ability::Chlorophyll => "Chlorophyll",
            Ability::Illuminate => "Illuminate",
            Ability::Trace => "Trace",
            Ability::HugePower => "Huge Power",
            Ability::PoisonPoint => "Poison Point",
            Ability::InnerFocus => "Inner Focus",
            Ability::MagmaArmor => "Magma Armor",
            Ability::WaterVeil => "Water Veil",
            Ability::MagnetPull => "Magnet Pull",
            Ability::Soundproof => "Soundproof",
            Ability::RainDish => "Rain Dish",
            Ability::SandStream => "Sand Stream",
            Ability::Pressure => "Pressure",
            Ability::ThickFat => "Thick Fat",
            Ability::EarlyBird => "Early Bird",
            Ability::FlameBody => "Flame Body",
            Ability::RunAway => "Run Away",
            Ability::KeenEye => "Keen Eye",
            Ability::HyperCutter => "Hyper Cutter",
            Ability::Pickup => "Pickup",
            Ability::Truant => "Truant",
            Ability::Hustle => "Hustle",
            Ability::CuteCharm => "Cute Charm",
            Ability::Plus => "Plus",
            Ability::Minus => "Minus",
            Ability::Forecast => "Forecast",
            Ability::StickyHold => "Sticky Hold",
            Ability::ShedSkin => "Shed Skin",
            Ability::Guts => "Guts",
            Ability::MarvelScale => "Marvel Scale",
            Ability::LiquidOoze => "Liquid Ooze",
            Ability::Overgrow => "Overgrow",
            Ability::Blaze => "Blaze",
            Ability::Torrent => "Torrent",
            Ability::Swarm => "Swarm",
            Ability::RockHead => "Rock Head",
            Ability::Drought => "Drought",
            Ability::ArenaTrap => "Arena Trap",
            Ability::VitalSpirit => "Vital Spirit",
            Ability::WhiteSmoke => "White Smoke",
            Ability::PurePower => "Pure Power",
            Ability::ShellArmor => "Shell Armor",
            Ability::Cacophony => "Cacophony",
            Ability::AirLock => "Air Lock",
        }
    }

    /// Move type this ability absorbs or ignores
    pub fn immune_type(&self) -> Option<Type> {
        match self {
            Ability::Levitate => Some(Type::Ground),
            Ability::VoltAbsorb => Some(Type::Electric),
            Ability::WaterAbsorb => Some(Type::Water),
            Ability::FlashFire => Some(Type::Fire),
            _ => None,
        }
    }

    /// Type boosted by 1.5x at or below a third of max HP
    pub fn pinch_type(&self) -> Option<Type> {
        match self {
            Ability::Overgrow => Some(Type::Grass),
            Ability::Blaze => Some(Type::Fire),
            Ability::Torrent => Some(Type::Water),
            Ability::Swarm => Some(Type::Bug),
            _ => None,
        }
    }

    /// Cloud Nine and Air Lock cancel weather effects for everyone
    pub fn suppresses_weather(&self) -> bool {
        matches!(self, Ability::CloudNine | Ability::AirLock)
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(Ability::from_id(0), None);
        assert_eq!(Ability::from_id(1), Some(Ability::Stench));
        assert_eq!(Ability::from_id(26), Some(Ability::Levitate));
        assert_eq!(Ability::from_id(67), Some(Ability::Torrent));
        assert_eq!(Ability::from_id(77), Some(Ability::AirLock));
        assert_eq!(Ability::from_id(78), None);
    }

    #[test]
    fn test_ids_match_storage_order() {
        for id in 1..=77u8 {
            assert_eq!(Ability::from_id(id).map(|a| a.id()), Some(id));
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(Ability::Levitate.immune_type(), Some(Type::Ground));
        assert_eq!(Ability::Intimidate.immune_type(), None);
        assert_eq!(Ability::Blaze.pinch_type(), Some(Type::Fire));
        assert!(Ability::AirLock.suppresses_weather());
        assert_eq!(Ability::WonderGuard.to_string(), "Wonder Guard");
    }
}
