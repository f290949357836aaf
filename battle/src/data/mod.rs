//! Static game knowledge: moves, species typings and abilities.
//!
//! [`GameData`] is built once and passed by reference into the engine.
//! Tests can build one from a synthetic move list with [`GameData::with_moves`].

mod abilities;
mod moves;
mod species;

use std::borrow::Cow;
use std::collections::HashMap;

use bitflags::bitflags;

use crate::types::Type;

pub use abilities::Ability;

bitflags! {
    /// Move properties; the first four come from the move table, the rest
    /// from fixed move ID lists
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MoveFlags: u16 {
        const CONTACT = 1 << 0;
        const SOUND = 1 << 1;
        const PUNCH = 1 << 2;
        const BITE = 1 << 3;
        const HIGH_CRIT = 1 << 4;
        /// Hits 2-5 times
        const MULTI_HIT = 1 << 5;
        /// Always hits twice
        const DOUBLE_HIT = 1 << 6;
        const FIXED_DAMAGE = 1 << 7;
        /// Damage equals the user's level
        const LEVEL_DAMAGE = 1 << 8;
        const OHKO = 1 << 9;
        const RECOIL = 1 << 10;
        /// Inflicts a status condition or confusion
        const STATUS = 1 << 11;
        /// Spends a turn charging first
        const CHARGE = 1 << 12;
        /// Must recharge afterwards
        const RECHARGE = 1 << 13;
    }
}

const HIGH_CRIT_MOVES: [u16; 12] = [2, 13, 75, 143, 152, 163, 177, 238, 299, 314, 342, 348];
const MULTI_HIT_MOVES: [u16; 12] = [3, 4, 31, 42, 131, 140, 154, 198, 292, 331, 333, 350];
const DOUBLE_HIT_MOVES: [u16; 3] = [24, 41, 155];
const FIXED_DAMAGE_MOVES: [u16; 3] = [49, 82, 162];
const LEVEL_DAMAGE_MOVES: [u16; 3] = [69, 101, 149];
const OHKO_MOVES: [u16; 4] = [12, 32, 90, 329];
const RECOIL_MOVES: [u16; 4] = [36, 38, 66, 344];
const STATUS_MOVES: [u16; 18] = [
    47, 48, 77, 78, 79, 86, 92, 95, 109, 137, 139, 142, 147, 186, 207, 260, 261, 281,
];
const CHARGE_MOVES: [u16; 8] = [13, 19, 76, 91, 130, 143, 291, 340];
const RECHARGE_MOVES: [u16; 4] = [63, 307, 308, 338];

/// Flags implied by a move's ID
pub fn derived_flags(id: u16) -> MoveFlags {
    let lists: [(&[u16], MoveFlags); 10] = [
        (&HIGH_CRIT_MOVES[..], MoveFlags::HIGH_CRIT),
        (&MULTI_HIT_MOVES[..], MoveFlags::MULTI_HIT),
        (&DOUBLE_HIT_MOVES[..], MoveFlags::DOUBLE_HIT),
        (&FIXED_DAMAGE_MOVES[..], MoveFlags::FIXED_DAMAGE),
        (&LEVEL_DAMAGE_MOVES[..], MoveFlags::LEVEL_DAMAGE),
        (&OHKO_MOVES[..], MoveFlags::OHKO),
        (&RECOIL_MOVES[..], MoveFlags::RECOIL),
        (&STATUS_MOVES[..], MoveFlags::STATUS),
        (&CHARGE_MOVES[..], MoveFlags::CHARGE),
        (&RECHARGE_MOVES[..], MoveFlags::RECHARGE),
    ];
    lists
        .iter()
        .filter(|(ids, _)| ids.contains(&id))
        .fold(MoveFlags::empty(), |acc, (_, flag)| acc | *flag)
}

/// One move table entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveData {
    pub id: u16,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub move_type: Type,
    /// 0 for status moves and moves whose damage is computed another way
    pub power: u16,
    /// Percent; 0 never misses
    pub accuracy: u8,
    pub pp: u8,
    pub priority: i8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: MoveFlags,
}

impl MoveData {
    /// Stand-in for an ID missing from the table
    pub fn placeholder(id: u16) -> Self {
        Self {
            id,
            name: format!("Move#{id}"),
            move_type: Type::Normal,
            power: 0,
            accuracy: 100,
            pp: 5,
            priority: 0,
            flags: MoveFlags::empty(),
        }
    }

    /// Deals damage through the formula or a fixed rule
    pub fn is_damaging(&self) -> bool {
        self.power > 0
            || self
                .flags
                .intersects(MoveFlags::FIXED_DAMAGE | MoveFlags::LEVEL_DAMAGE | MoveFlags::OHKO)
    }

    pub fn is_status(&self) -> bool {
        !self.is_damaging()
    }

    /// Physical/special follows the move's type
    pub fn is_physical(&self) -> bool {
        self.move_type.is_physical()
    }

    pub fn never_misses(&self) -> bool {
        self.accuracy == 0
    }

    /// Average number of hits (2-5 hitters land 2,3 at 3/8 each and 4,5 at 1/8 each)
    pub fn expected_hits(&self) -> f32 {
        if self.flags.contains(MoveFlags::MULTI_HIT) {
            3.0
        } else if self.flags.contains(MoveFlags::DOUBLE_HIT) {
            2.0
        } else {
            1.0
        }
    }

    /// Fewest and most hits
    pub fn hit_range(&self) -> (u8, u8) {
        if self.flags.contains(MoveFlags::MULTI_HIT) {
            (2, 5)
        } else if self.flags.contains(MoveFlags::DOUBLE_HIT) {
            (2, 2)
        } else {
            (1, 1)
        }
    }
}

/// Name and typing of one species
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesData {
    pub national: u16,
    pub name: String,
    pub types: Vec<Type>,
}

/// Read-only game knowledge injected into the engine
#[derive(Debug, Clone)]
pub struct GameData {
    moves: HashMap<u16, MoveData>,
    species: Vec<SpeciesData>,
}

fn builtin_species() -> Vec<SpeciesData> {
    species::SPECIES_TABLE
        .iter()
        .zip(1u16..)
        .map(|(&(name, primary, secondary), national)| SpeciesData {
            national,
            name: name.to_string(),
            types: if primary == secondary {
                vec![primary]
            } else {
                vec![primary, secondary]
            },
        })
        .collect()
}

impl GameData {
    /// The built-in Generation 3 tables
    pub fn gen3() -> Self {
        let moves = moves::MOVE_TABLE.iter().map(
            |&(id, name, move_type, power, accuracy, pp, priority, flags)| MoveData {
                id,
                name: name.to_string(),
                move_type,
                power,
                accuracy,
                pp,
                priority,
                flags: flags | derived_flags(id),
            },
        );
        Self::with_moves(moves)
    }

    /// Built-in species with a replacement move table
    pub fn with_moves(moves: impl IntoIterator<Item = MoveData>) -> Self {
        Self {
            moves: moves.into_iter().map(|m| (m.id, m)).collect(),
            species: builtin_species(),
        }
    }

    /// Load a replacement move table from a JSON array of moves.
    /// Entries without `flags` get the ID-derived ones.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let moves: Vec<MoveData> = serde_json::from_str(json)?;
        Ok(Self::with_moves(moves.into_iter().map(|mut m| {
            m.flags |= derived_flags(m.id);
            m
        })))
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn move_data(&self, id: u16) -> Option<&MoveData> {
        self.moves.get(&id)
    }

    /// Table entry, or a placeholder named `Move#<id>`
    pub fn move_or_placeholder(&self, id: u16) -> Cow<'_, MoveData> {
        match self.moves.get(&id) {
            Some(data) => Cow::Borrowed(data),
            None => {
                tracing::trace!(move_id = id, "unknown move, using placeholder");
                Cow::Owned(MoveData::placeholder(id))
            }
        }
    }

    /// Look up by national dex number
    pub fn species(&self, national: u16) -> Option<&SpeciesData> {
        let index = usize::from(national).checked_sub(1)?;
        self.species.get(index)
    }

    /// Look up by the internal index stored in save data
    pub fn species_by_internal(&self, internal: u16) -> Option<&SpeciesData> {
        self.species(hoenn_codec::national_dex(internal)?)
    }

    /// Species name, or `Species#<id>` for an unknown internal index
    pub fn species_name(&self, internal: u16) -> Cow<'_, str> {
        match self.species_by_internal(internal) {
            Some(s) => Cow::Borrowed(s.name.as_str()),
            None => Cow::Owned(format!("Species#{internal}")),
        }
    }

    /// Typing by internal index; unknown species are treated as Normal
    pub fn species_types(&self, internal: u16) -> Vec<Type> {
        self.species_by_internal(internal)
            .map(|s| s.types.clone())
            .unwrap_or_else(|| vec![Type::Normal])
    }
}

impl Default for GameData {
    fn default() -> Self {
        Self::gen3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen3_move_table() {
        let data = GameData::gen3();
        assert_eq!(data.move_count(), 354);
        let tackle = data.move_data(33).unwrap();
        assert_eq!(tackle.name, "Tackle");
        assert_eq!(tackle.move_type, Type::Normal);
        assert_eq!(tackle.power, 35);
        assert_eq!(tackle.accuracy, 95);
        assert!(tackle.flags.contains(MoveFlags::CONTACT));
        assert!(tackle.is_physical());
    }

    #[test]
    fn test_move_ids_are_contiguous() {
        let data = GameData::gen3();
        for id in 1..=354 {
            assert_eq!(data.move_data(id).map(|m| m.id), Some(id));
        }
        assert!(data.move_data(0).is_none());
        assert!(data.move_data(355).is_none());
    }

    #[test]
    fn test_derived_flags() {
        let data = GameData::gen3();
        let flag = |id: u16| data.move_data(id).unwrap().flags;
        assert!(flag(2).contains(MoveFlags::HIGH_CRIT)); // Karate Chop
        assert!(flag(348).contains(MoveFlags::HIGH_CRIT)); // Leaf Blade
        assert!(flag(350).contains(MoveFlags::MULTI_HIT)); // Rock Blast
        assert!(flag(24).contains(MoveFlags::DOUBLE_HIT)); // Double Kick
        assert!(flag(49).contains(MoveFlags::FIXED_DAMAGE)); // Sonic Boom
        assert!(flag(101).contains(MoveFlags::LEVEL_DAMAGE)); // Night Shade
        assert!(flag(90).contains(MoveFlags::OHKO)); // Fissure
        assert!(flag(38).contains(MoveFlags::RECOIL)); // Double-Edge
        assert!(flag(79).contains(MoveFlags::STATUS)); // Sleep Powder
        assert!(flag(76).contains(MoveFlags::CHARGE)); // Solar Beam
        assert!(flag(63).contains(MoveFlags::RECHARGE)); // Hyper Beam
        assert!(flag(7).contains(MoveFlags::PUNCH | MoveFlags::CONTACT)); // Fire Punch
        assert_eq!(derived_flags(33), MoveFlags::empty());
    }

    #[test]
    fn test_damaging_and_status() {
        let data = GameData::gen3();
        assert!(data.move_data(45).unwrap().is_status()); // Growl
        assert!(data.move_data(69).unwrap().is_damaging()); // Seismic Toss
        assert!(data.move_data(12).unwrap().is_damaging()); // Guillotine
        assert!(data.move_data(345).unwrap().never_misses()); // Magical Leaf
    }

    #[test]
    fn test_hits() {
        let data = GameData::gen3();
        assert_eq!(data.move_data(350).unwrap().hit_range(), (2, 5));
        assert_eq!(data.move_data(350).unwrap().expected_hits(), 3.0);
        assert_eq!(data.move_data(24).unwrap().expected_hits(), 2.0);
        assert_eq!(data.move_data(33).unwrap().hit_range(), (1, 1));
    }

    #[test]
    fn test_unknown_move_placeholder() {
        let data = GameData::gen3();
        let unknown = data.move_or_placeholder(999);
        assert_eq!(unknown.name, "Move#999");
        assert!(unknown.is_status());
        assert!(matches!(data.move_or_placeholder(33), Cow::Borrowed(_)));
    }

    #[test]
    fn test_species_lookup() {
        let data = GameData::gen3();
        assert_eq!(data.species(260).unwrap().name, "Swampert");
        assert_eq!(data.species(260).unwrap().types, vec![Type::Water, Type::Ground]);
        assert_eq!(data.species(252).unwrap().types, vec![Type::Grass]);
        assert_eq!(data.species(384).unwrap().types, vec![Type::Dragon, Type::Flying]);
        assert!(data.species(0).is_none());
        assert!(data.species(387).is_none());
    }

    #[test]
    fn test_species_by_internal_index() {
        let data = GameData::gen3();
        assert_eq!(data.species_name(283), "Mudkip");
        assert_eq!(data.species_name(286), "Poochyena");
        assert_eq!(data.species_name(334), "Flygon");
        assert_eq!(data.species_name(282), "Blaziken");
        assert_eq!(data.species_name(25), "Pikachu");
        assert_eq!(data.species_name(260), "Species#260");
        assert_eq!(data.species_types(334), vec![Type::Ground, Type::Dragon]);
        assert_eq!(data.species_types(0), vec![Type::Normal]);
    }

    #[test]
    fn test_synthetic_table() {
        let mut strike = MoveData::placeholder(1);
        strike.name = "Strike".to_string();
        strike.power = 50;
        let data = GameData::with_moves([strike]);
        assert_eq!(data.move_count(), 1);
        assert!(data.move_data(1).unwrap().is_damaging());
        assert_eq!(data.species_name(1), "Bulbasaur");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 33, "name": "Tackle", "type": "Normal", "power": 40,
             "accuracy": 100, "pp": 35, "priority": 0},
            {"id": 350, "name": "Rock Blast", "type": "Rock", "power": 25,
             "accuracy": 90, "pp": 10, "priority": 0}
        ]"#;
        let data = GameData::from_json(json).unwrap();
        assert_eq!(data.move_count(), 2);
        assert_eq!(data.move_data(33).unwrap().power, 40);
        assert!(data.move_data(350).unwrap().flags.contains(MoveFlags::MULTI_HIT));
        assert!(GameData::from_json("{").is_err());
    }
}
