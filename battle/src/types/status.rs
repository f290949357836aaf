//! Status conditions (volatile and non-volatile)

use bitflags::bitflags;

const STATUS1_SLEEP: u32 = 0x07;
const STATUS1_POISON: u32 = 0x08;
const STATUS1_BURN: u32 = 0x10;
const STATUS1_FREEZE: u32 = 0x20;
const STATUS1_PARALYSIS: u32 = 0x40;
const STATUS1_TOXIC: u32 = 0x80;

/// Non-volatile status conditions (persist through switching)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    BadPoison, // Toxic
    Sleep,
}

impl Status {
    /// Decode the `status1` word of a party or battle struct.
    /// The low three bits hold remaining sleep turns.
    pub fn from_bits(status1: u32) -> Option<Self> {
        if status1 & STATUS1_SLEEP != 0 {
            Some(Status::Sleep)
        } else if status1 & STATUS1_TOXIC != 0 {
            Some(Status::BadPoison)
        } else if status1 & STATUS1_POISON != 0 {
            Some(Status::Poison)
        } else if status1 & STATUS1_BURN != 0 {
            Some(Status::Burn)
        } else if status1 & STATUS1_FREEZE != 0 {
            Some(Status::Freeze)
        } else if status1 & STATUS1_PARALYSIS != 0 {
            Some(Status::Paralysis)
        } else {
            None
        }
    }

    /// Whether the target skips its turn while afflicted
    pub fn is_incapacitating(&self) -> bool {
        matches!(self, Status::Sleep | Status::Freeze)
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Burn => "Burn",
            Status::Freeze => "Freeze",
            Status::Paralysis => "Paralysis",
            Status::Poison => "Poison",
            Status::BadPoison => "Toxic",
            Status::Sleep => "Sleep",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

bitflags! {
    /// Volatile conditions from the battler's `status2` word (cleared on switching)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Volatile: u32 {
        const CONFUSION = 0x0000_0007;
        const FLINCHED = 0x0000_0008;
        const UPROAR = 0x0000_0070;
        const BIDE = 0x0000_0300;
        const LOCK_CONFUSE = 0x0000_0C00;
        const MULTIPLE_TURNS = 0x0000_1000;
        const WRAPPED = 0x0000_E000;
        const INFATUATION = 0x000F_0000;
        const FOCUS_ENERGY = 0x0010_0000;
        const TRANSFORMED = 0x0020_0000;
        const RECHARGE = 0x0040_0000;
        const RAGE = 0x0080_0000;
        const SUBSTITUTE = 0x0100_0000;
        const DESTINY_BOND = 0x0200_0000;
        const ESCAPE_PREVENTION = 0x0400_0000;
        const NIGHTMARE = 0x0800_0000;
        const CURSED = 0x1000_0000;
        const FORESIGHT = 0x2000_0000;
        const DEFENSE_CURL = 0x4000_0000;
        const TORMENT = 0x8000_0000;
    }
}

impl Volatile {
    /// Build from a raw `status2` word; every bit is named so nothing is dropped
    pub fn from_status2(status2: u32) -> Self {
        Self::from_bits_retain(status2)
    }

    /// Bound by Wrap-style moves or Mean Look/Spider Web/Block
    pub fn prevents_escape(&self) -> bool {
        self.intersects(Volatile::WRAPPED | Volatile::ESCAPE_PREVENTION)
    }

    /// Must spend this turn recharging or locked into a move
    pub fn is_locked(&self) -> bool {
        self.intersects(Volatile::RECHARGE | Volatile::MULTIPLE_TURNS | Volatile::BIDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_bits() {
        assert_eq!(Status::from_bits(0), None);
        assert_eq!(Status::from_bits(3), Some(Status::Sleep));
        assert_eq!(Status::from_bits(0x08), Some(Status::Poison));
        assert_eq!(Status::from_bits(0x10), Some(Status::Burn));
        assert_eq!(Status::from_bits(0x20), Some(Status::Freeze));
        assert_eq!(Status::from_bits(0x40), Some(Status::Paralysis));
        assert_eq!(Status::from_bits(0x88), Some(Status::BadPoison));
        // Toxic counter bits above the status byte are ignored
        assert_eq!(Status::from_bits(0x0300), None);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::BadPoison.to_string(), "Toxic");
        assert!(Status::Sleep.is_incapacitating());
        assert!(!Status::Burn.is_incapacitating());
    }

    #[test]
    fn test_volatile_from_status2() {
        let v = Volatile::from_status2(0x0000_2001);
        assert!(v.intersects(Volatile::CONFUSION));
        assert!(v.intersects(Volatile::WRAPPED));
        assert!(v.prevents_escape());
        assert!(!v.contains(Volatile::SUBSTITUTE));
    }

    #[test]
    fn test_volatile_escape_prevention() {
        assert!(Volatile::ESCAPE_PREVENTION.prevents_escape());
        assert!(!Volatile::CURSED.prevents_escape());
        assert!(!Volatile::empty().prevents_escape());
    }

    #[test]
    fn test_volatile_locked() {
        assert!(Volatile::RECHARGE.is_locked());
        assert!(!Volatile::FOCUS_ENERGY.is_locked());
    }
}
