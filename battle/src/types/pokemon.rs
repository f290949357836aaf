//! Battler state types

use hoenn_codec::{BattleMon, PokemonRecord, Stats};

use super::pokemon_type::Type;
use super::stats::{Stat, StatStages};
use super::status::{Status, Volatile};
use crate::data::Ability;

/// A known move and its remaining PP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveSlot {
    pub id: u16,
    pub pp: u8,
}

/// One Pokemon as the decision engine sees it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Battler {
    /// Internal species index
    pub species: u16,

    /// Nickname, or the species name when unknown
    pub name: String,

    /// Level (1-100)
    pub level: u8,

    /// One or two types; a repeated type is stored once
    pub types: Vec<Type>,

    /// Ability, when the source records the ID (party records only store a slot)
    pub ability: Option<Ability>,

    /// `hp` holds max HP
    pub stats: Stats,

    /// Current HP
    pub hp: u16,

    /// Move slots in order; empty slots are dropped
    pub moves: Vec<MoveSlot>,

    /// Non-volatile status condition
    pub status: Option<Status>,

    // === Combat state (cleared on switch) ===
    pub volatiles: Volatile,
    pub boosts: StatStages,

    pub held_item: u16,

    /// Matches the battle struct to its party record
    pub personality: u32,
}

fn dedup_types(types: impl IntoIterator<Item = Type>) -> Vec<Type> {
    let mut out = Vec::with_capacity(2);
    for t in types {
        if !out.contains(&t) {
            out.push(t);
        }
    }
    out
}

fn move_slots(moves: [u16; 4], pp: [u8; 4]) -> Vec<MoveSlot> {
    moves
        .iter()
        .zip(pp)
        .filter(|(id, _)| **id != 0)
        .map(|(&id, pp)| MoveSlot { id, pp })
        .collect()
}

impl Battler {
    /// Create a battler at full HP with no moves
    pub fn new(species: u16, name: impl Into<String>, level: u8, types: &[Type], stats: Stats) -> Self {
        Self {
            species,
            name: name.into(),
            level,
            types: dedup_types(types.iter().copied()),
            ability: None,
            stats,
            hp: stats.hp,
            moves: Vec::new(),
            status: None,
            volatiles: Volatile::empty(),
            boosts: StatStages::new(),
            held_item: 0,
            personality: 0,
        }
    }

    /// Build from the in-battle struct; types and ability come from memory
    pub fn from_battle_mon(mon: &BattleMon) -> Self {
        Self {
            species: mon.species,
            name: mon.nickname.clone(),
            level: mon.level,
            types: dedup_types(mon.types.iter().filter_map(|&id| Type::from_id(id))),
            ability: Ability::from_id(mon.ability),
            stats: mon.stats,
            hp: mon.hp,
            moves: move_slots(mon.moves, mon.pp),
            status: Status::from_bits(mon.status1),
            volatiles: Volatile::from_status2(mon.status2),
            boosts: StatStages::from_raw(mon.stat_stages),
            held_item: mon.held_item,
            personality: mon.personality,
        }
    }

    /// Build from a party record. Returns `None` for boxed records, which
    /// carry no level or stats.
    pub fn from_record(record: &PokemonRecord, types: &[Type]) -> Option<Self> {
        let battle = record.battle?;
        Some(Self {
            species: record.species(),
            name: record.nickname.clone(),
            level: battle.level,
            types: dedup_types(types.iter().copied()),
            ability: None,
            stats: battle.stats,
            hp: battle.current_hp,
            moves: move_slots(record.moves(), record.pp()),
            status: Status::from_bits(battle.status),
            volatiles: Volatile::empty(),
            boosts: StatStages::new(),
            held_item: record.held_item(),
            personality: record.personality,
        })
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.ability = Some(ability);
        self
    }

    pub fn with_moves(mut self, moves: &[(u16, u8)]) -> Self {
        self.moves = moves.iter().map(|&(id, pp)| MoveSlot { id, pp }).collect();
        self
    }

    pub fn with_hp(mut self, hp: u16) -> Self {
        self.hp = hp.min(self.stats.hp);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    /// HP as a percentage of max (0-100)
    pub fn hp_percent(&self) -> f32 {
        if self.stats.hp == 0 {
            return 0.0;
        }
        f32::from(self.hp) * 100.0 / f32::from(self.stats.hp)
    }

    /// Check if Pokemon is alive (not fainted)
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_fainted(&self) -> bool {
        !self.is_alive()
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    pub fn has_ability(&self, ability: Ability) -> bool {
        self.ability == Some(ability)
    }

    pub fn has_status(&self) -> bool {
        self.status.is_some()
    }

    /// Touches the ground for Arena Trap and Ground-type moves
    pub fn is_grounded(&self) -> bool {
        !self.has_type(Type::Flying) && !self.has_ability(Ability::Levitate)
    }

    /// Raw stat with its stage applied
    pub fn staged_stat(&self, stat: Stat) -> u32 {
        let base = match stat {
            Stat::Atk => self.stats.atk,
            Stat::Def => self.stats.def,
            Stat::Spa => self.stats.spa,
            Stat::Spd => self.stats.spd,
            Stat::Spe => self.stats.spe,
            Stat::Accuracy | Stat::Evasion => return 0,
        };
        let scaled = f32::from(base) * StatStages::multiplier(self.boosts.get(stat));
        (scaled as u32).max(1)
    }

    /// Moves that still have PP, with their slot index
    pub fn usable_moves(&self) -> impl Iterator<Item = (usize, &MoveSlot)> {
        self.moves.iter().enumerate().filter(|(_, m)| m.pp > 0)
    }

    /// Called when this Pokemon switches out
    pub fn on_switch_out(&mut self) {
        self.boosts.clear();
        self.volatiles = Volatile::empty();
    }
}
