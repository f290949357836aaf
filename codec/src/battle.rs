//! In-battle memory: battle type flags, weather, and the battler structs

use bitflags::bitflags;

use crate::Result;
use crate::bytes;
use crate::pokemon::{Ivs, Stats};
use crate::species;
use crate::text::decode_text;

/// Size of one battler struct
pub const BATTLE_MON_SIZE: usize = 88;

/// Battler slots (player, opponent, player partner, opponent partner)
pub const MAX_BATTLERS: usize = 4;

/// Neutral raw stat stage
pub const NEUTRAL_STAGE: u8 = 6;

bitflags! {
    /// `gBattleTypeFlags`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BattleTypeFlags: u32 {
        const DOUBLE = 1 << 0;
        const LINK = 1 << 1;
        const IS_MASTER = 1 << 2;
        const TRAINER = 1 << 3;
        const FIRST_BATTLE = 1 << 4;
        const SAFARI = 1 << 7;
        const BATTLE_TOWER = 1 << 8;
        const ROAMER = 1 << 10;
        const LEGENDARY = 1 << 13;
    }
}

/// Coarse classification of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleKind {
    Wild,
    Trainer,
    DoubleWild,
    DoubleTrainer,
    Safari,
    BattleTower,
    Legendary,
}

impl BattleTypeFlags {
    /// Wild means no trainer flag
    pub fn is_wild(&self) -> bool {
        !self.contains(BattleTypeFlags::TRAINER)
    }

    pub fn is_trainer(&self) -> bool {
        self.contains(BattleTypeFlags::TRAINER)
    }

    pub fn is_safari(&self) -> bool {
        self.contains(BattleTypeFlags::SAFARI)
    }

    pub fn is_double(&self) -> bool {
        self.contains(BattleTypeFlags::DOUBLE)
    }

    /// Most specific kind first
    pub fn kind(&self) -> BattleKind {
        if self.is_safari() {
            BattleKind::Safari
        } else if self.contains(BattleTypeFlags::BATTLE_TOWER) {
            BattleKind::BattleTower
        } else if self.contains(BattleTypeFlags::LEGENDARY) {
            BattleKind::Legendary
        } else {
            match (self.is_double(), self.is_trainer()) {
                (true, true) => BattleKind::DoubleTrainer,
                (true, false) => BattleKind::DoubleWild,
                (false, true) => BattleKind::Trainer,
                (false, false) => BattleKind::Wild,
            }
        }
    }
}

bitflags! {
    /// `gBattleWeather`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BattleWeatherFlags: u16 {
        const RAIN_TEMPORARY = 1 << 0;
        const RAIN_DOWNPOUR = 1 << 1;
        const RAIN_PERMANENT = 1 << 2;
        const SANDSTORM_TEMPORARY = 1 << 3;
        const SANDSTORM_PERMANENT = 1 << 4;
        const SUN_TEMPORARY = 1 << 5;
        const SUN_PERMANENT = 1 << 6;
        const HAIL = 1 << 7;

        const RAIN = 0x07;
        const SANDSTORM = 0x18;
        const SUN = 0x60;
    }
}

impl BattleWeatherFlags {
    pub fn is_rain(&self) -> bool {
        self.intersects(BattleWeatherFlags::RAIN)
    }

    pub fn is_sandstorm(&self) -> bool {
        self.intersects(BattleWeatherFlags::SANDSTORM)
    }

    pub fn is_sun(&self) -> bool {
        self.intersects(BattleWeatherFlags::SUN)
    }

    pub fn is_hail(&self) -> bool {
        self.contains(BattleWeatherFlags::HAIL)
    }
}

mod offset {
    pub const SPECIES: usize = 0x00;
    pub const STATS: usize = 0x02;
    pub const MOVES: usize = 0x0C;
    pub const IVS: usize = 0x14;
    pub const STAT_STAGES: usize = 0x18;
    pub const ABILITY: usize = 0x20;
    pub const TYPE1: usize = 0x21;
    pub const TYPE2: usize = 0x22;
    pub const PP: usize = 0x24;
    pub const HP: usize = 0x28;
    pub const LEVEL: usize = 0x2A;
    pub const FRIENDSHIP: usize = 0x2B;
    pub const MAX_HP: usize = 0x2C;
    pub const ITEM: usize = 0x2E;
    pub const NICKNAME: usize = 0x30;
    pub const PP_BONUSES: usize = 0x3B;
    pub const OT_NAME: usize = 0x3C;
    pub const EXPERIENCE: usize = 0x44;
    pub const PERSONALITY: usize = 0x48;
    pub const STATUS1: usize = 0x4C;
    pub const STATUS2: usize = 0x50;
    pub const OT_ID: usize = 0x54;
}

const NICKNAME_LEN: usize = 11;
const OT_NAME_LEN: usize = 8;

/// One battler as laid out in `gBattleMons`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleMon {
    /// Internal species index
    pub species: u16,
    /// `hp` holds max HP
    pub stats: Stats,
    pub moves: [u16; 4],
    pub ivs: Ivs,
    pub is_egg: bool,
    pub ability_slot: u8,
    /// Raw stages for hp/atk/def/spe/spa/spd/acc/eva, 6 is neutral
    pub stat_stages: [u8; 8],
    /// Ability ID, not the slot
    pub ability: u8,
    pub types: [u8; 2],
    pub pp: [u8; 4],
    pub hp: u16,
    pub level: u8,
    pub friendship: u8,
    pub held_item: u16,
    pub nickname: String,
    pub pp_bonuses: u8,
    pub ot_name: String,
    pub experience: u32,
    pub personality: u32,
    pub status1: u32,
    pub status2: u32,
    pub ot_id: u32,
}

impl BattleMon {
    pub fn parse(data: &[u8]) -> Result<Self> {
        let what = "battle mon";
        let raw = bytes::slice(data, 0, BATTLE_MON_SIZE, what)?;
        let u16_at = |o: usize| bytes::u16_at(raw, o, what);
        let u32_at = |o: usize| bytes::u32_at(raw, o, what);
        let iv_word = u32_at(offset::IVS)?;
        let max_hp = u16_at(offset::MAX_HP)?;

        Ok(Self {
            species: u16_at(offset::SPECIES)?,
            stats: Stats {
                hp: max_hp,
                atk: u16_at(offset::STATS)?,
                def: u16_at(offset::STATS + 2)?,
                spe: u16_at(offset::STATS + 4)?,
                spa: u16_at(offset::STATS + 6)?,
                spd: u16_at(offset::STATS + 8)?,
            },
            moves: [
                u16_at(offset::MOVES)?,
                u16_at(offset::MOVES + 2)?,
                u16_at(offset::MOVES + 4)?,
                u16_at(offset::MOVES + 6)?,
            ],
            ivs: Ivs::from_packed(iv_word),
            is_egg: iv_word & (1 << 30) != 0,
            ability_slot: u8::from(iv_word & (1 << 31) != 0),
            stat_stages: bytes::array(raw, offset::STAT_STAGES, what)?,
            ability: raw[offset::ABILITY],
            types: [raw[offset::TYPE1], raw[offset::TYPE2]],
            pp: bytes::array(raw, offset::PP, what)?,
            hp: u16_at(offset::HP)?,
            level: raw[offset::LEVEL],
            friendship: raw[offset::FRIENDSHIP],
            held_item: u16_at(offset::ITEM)?,
            nickname: decode_text(&raw[offset::NICKNAME..offset::NICKNAME + NICKNAME_LEN], NICKNAME_LEN),
            pp_bonuses: raw[offset::PP_BONUSES],
            ot_name: decode_text(&raw[offset::OT_NAME..offset::OT_NAME + OT_NAME_LEN], OT_NAME_LEN),
            experience: u32_at(offset::EXPERIENCE)?,
            personality: u32_at(offset::PERSONALITY)?,
            status1: u32_at(offset::STATUS1)?,
            status2: u32_at(offset::STATUS2)?,
            ot_id: u32_at(offset::OT_ID)?,
        })
    }

    /// Stage for index 0..8 in -6..=6
    pub fn stage(&self, index: usize) -> i8 {
        self.stat_stages
            .get(index)
            .map(|&raw| (raw.min(12) as i8) - NEUTRAL_STAGE as i8)
            .unwrap_or(0)
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn national_dex(&self) -> Option<u16> {
        species::national_dex(self.species)
    }
}

/// Battle globals read in one pass
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSnapshot {
    pub flags: BattleTypeFlags,
    pub weather: BattleWeatherFlags,
    /// Empty or unrecognized slots are `None`
    pub battlers: Vec<Option<BattleMon>>,
}

impl BattleSnapshot {
    /// Parse the raw battle globals. `mons` holds up to four battler structs.
    pub fn parse(type_flags: u32, weather: u16, mons: &[u8]) -> Result<Self> {
        let battlers = mons
            .chunks_exact(BATTLE_MON_SIZE)
            .take(MAX_BATTLERS)
            .map(|chunk| {
                BattleMon::parse(chunk).map(|mon| species::is_valid_species(mon.species).then_some(mon))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            flags: BattleTypeFlags::from_bits_retain(type_flags),
            weather: BattleWeatherFlags::from_bits_retain(weather),
            battlers,
        })
    }

    /// A battle is running when any type flag is set
    pub fn in_battle(&self) -> bool {
        !self.flags.is_empty()
    }

    pub fn battler(&self, index: usize) -> Option<&BattleMon> {
        self.battlers.get(index).and_then(Option::as_ref)
    }

    pub fn player(&self) -> Option<&BattleMon> {
        self.battler(0)
    }

    pub fn opponent(&self) -> Option<&BattleMon> {
        self.battler(1)
    }
}
