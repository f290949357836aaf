//! Types and the Generation 3 effectiveness chart

/// Pokemon types, numbered as the games store them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fighting = 1,
    Flying = 2,
    Poison = 3,
    Ground = 4,
    Rock = 5,
    Bug = 6,
    Ghost = 7,
    Steel = 8,
    /// The `???` type (Curse)
    Mystery = 9,
    Fire = 10,
    Water = 11,
    Grass = 12,
    Electric = 13,
    Psychic = 14,
    Ice = 15,
    Dragon = 16,
    Dark = 17,
}

const TYPE_COUNT: usize = 18;

const NAMES: [&str; TYPE_COUNT] = [
    "Normal", "Fighting", "Flying", "Poison", "Ground", "Rock", "Bug", "Ghost", "Steel", "???", "Fire",
    "Water", "Grass", "Electric", "Psychic", "Ice", "Dragon", "Dark",
];

impl Type {
    /// Storage order
    pub const ALL: [Type; TYPE_COUNT] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Mystery,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
    ];

    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Look up a stored type byte
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Physical/special split is by type in Generation 3
    pub fn is_physical(&self) -> bool {
        (*self as u8) < Type::Mystery as u8
    }

    pub fn effectiveness(&self, defender: Type) -> f32 {
        TYPE_CHART[*self as usize][defender as usize]
    }

    /// Product over the defender's types. Mono-typed battlers store their
    /// type twice; a repeat only counts once.
    pub fn effectiveness_multi(&self, defenders: &[Type]) -> f32 {
        defenders
            .iter()
            .enumerate()
            .filter(|(i, t)| !defenders[..*i].contains(t))
            .map(|(_, t)| self.effectiveness(*t))
            .product()
    }

    /// Case-insensitive; `???` and `mystery` both name [`Type::Mystery`]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("mystery") {
            return Some(Type::Mystery);
        }
        NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn as_str(&self) -> &'static str {
        NAMES[*self as usize]
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

use Type::*;

/// Non-neutral matchups as (attacker, defender, multiplier x10), the way
/// `gTypeEffectiveness` lists them
#[rustfmt::skip]
const MATCHUPS: &[(Type, Type, u8)] = &[
    (Normal, Rock, 5), (Normal, Steel, 5), (Normal, Ghost, 0),
    (Fire, Fire, 5), (Fire, Water, 5), (Fire, Grass, 20), (Fire, Ice, 20),
    (Fire, Bug, 20), (Fire, Rock, 5), (Fire, Dragon, 5), (Fire, Steel, 20),
    (Water, Fire, 20), (Water, Water, 5), (Water, Grass, 5), (Water, Ground, 20),
    (Water, Rock, 20), (Water, Dragon, 5),
    (Electric, Water, 20), (Electric, Electric, 5), (Electric, Grass, 5),
    (Electric, Ground, 0), (Electric, Flying, 20), (Electric, Dragon, 5),
    (Grass, Fire, 5), (Grass, Water, 20), (Grass, Grass, 5), (Grass, Poison, 5),
    (Grass, Ground, 20), (Grass, Flying, 5), (Grass, Bug, 5), (Grass, Rock, 20),
    (Grass, Dragon, 5), (Grass, Steel, 5),
    (Ice, Water, 5), (Ice, Grass, 20), (Ice, Ice, 5), (Ice, Ground, 20),
    (Ice, Flying, 20), (Ice, Dragon, 20), (Ice, Steel, 5), (Ice, Fire, 5),
    (Fighting, Normal, 20), (Fighting, Ice, 20), (Fighting, Poison, 5),
    (Fighting, Flying, 5), (Fighting, Psychic, 5), (Fighting, Bug, 5),
    (Fighting, Rock, 20), (Fighting, Dark, 20), (Fighting, Steel, 20), (Fighting, Ghost, 0),
    (Poison, Grass, 20), (Poison, Poison, 5), (Poison, Ground, 5), (Poison, Rock, 5),
    (Poison, Ghost, 5), (Poison, Steel, 0),
    (Ground, Fire, 20), (Ground, Electric, 20), (Ground, Grass, 5), (Ground, Poison, 20),
    (Ground, Flying, 0), (Ground, Bug, 5), (Ground, Rock, 20), (Ground, Steel, 20),
    (Flying, Electric, 5), (Flying, Grass, 20), (Flying, Fighting, 20), (Flying, Bug, 20),
    (Flying, Rock, 5), (Flying, Steel, 5),
    (Psychic, Fighting, 20), (Psychic, Poison, 20), (Psychic, Psychic, 5),
    (Psychic, Dark, 0), (Psychic, Steel, 5),
    (Bug, Fire, 5), (Bug, Grass, 20), (Bug, Fighting, 5), (Bug, Poison, 5),
    (Bug, Flying, 5), (Bug, Psychic, 20), (Bug, Ghost, 5), (Bug, Dark, 20), (Bug, Steel, 5),
    (Rock, Fire, 20), (Rock, Ice, 20), (Rock, Fighting, 5), (Rock, Ground, 5),
    (Rock, Flying, 20), (Rock, Bug, 20), (Rock, Steel, 5),
    (Ghost, Normal, 0), (Ghost, Psychic, 20), (Ghost, Dark, 5), (Ghost, Steel, 5),
    (Ghost, Ghost, 20),
    (Dragon, Dragon, 20), (Dragon, Steel, 5),
    (Dark, Fighting, 5), (Dark, Psychic, 20), (Dark, Ghost, 20), (Dark, Dark, 5),
    (Dark, Steel, 5),
    (Steel, Fire, 5), (Steel, Water, 5), (Steel, Electric, 5), (Steel, Ice, 20),
    (Steel, Rock, 20), (Steel, Steel, 5),
];

const fn build_chart() -> [[f32; TYPE_COUNT]; TYPE_COUNT] {
    let mut chart = [[1.0; TYPE_COUNT]; TYPE_COUNT];
    let mut i = 0;
    while i < MATCHUPS.len() {
        let (atk, def, tenths) = MATCHUPS[i];
        chart[atk as usize][def as usize] = match tenths {
            0 => 0.0,
            5 => 0.5,
            _ => 2.0,
        };
        i += 1;
    }
    chart
}

/// Dense chart, row = attacking type, column = defending type, in storage order
pub static TYPE_CHART: [[f32; TYPE_COUNT]; TYPE_COUNT] = build_chart();
