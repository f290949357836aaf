//! Party and boxed Pokemon records

use crate::bytes;
use crate::species;
use crate::substructure::{
    self, DATA_SIZE, Substructure, Substructures, decrypt_pokemon_substructures,
    encrypt_pokemon_substructures,
};
use crate::text::{decode_text, encode_text};
use crate::{CodecError, Result};

/// Size of a boxed record
pub const BOX_SIZE: usize = 80;

/// Size of a party record (boxed record + battle block)
pub const PARTY_SIZE: usize = 100;

/// Maximum number of party members
pub const MAX_PARTY: usize = 6;

pub const NICKNAME_LEN: usize = 10;
pub const OT_NAME_LEN: usize = 7;

mod offset {
    pub const PERSONALITY: usize = 0x00;
    pub const OT_ID: usize = 0x04;
    pub const NICKNAME: usize = 0x08;
    pub const LANGUAGE: usize = 0x12;
    pub const OT_NAME: usize = 0x14;
    pub const MARKINGS: usize = 0x1B;
    pub const CHECKSUM: usize = 0x1C;
    pub const DATA: usize = 0x20;
    pub const STATUS: usize = 0x50;
    pub const LEVEL: usize = 0x54;
    pub const POKERUS: usize = 0x55;
    pub const HP: usize = 0x56;
    pub const STATS: usize = 0x58;
}

/// A six-stat spread in Gen 3 memory order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spe: u16,
    pub spa: u16,
    pub spd: u16,
}

impl Stats {
    fn from_bytes(b: &[u8; 6]) -> Self {
        Self {
            hp: b[0].into(),
            atk: b[1].into(),
            def: b[2].into(),
            spe: b[3].into(),
            spa: b[4].into(),
            spd: b[5].into(),
        }
    }

    pub fn total(&self) -> u32 {
        [self.hp, self.atk, self.def, self.spe, self.spa, self.spd]
            .iter()
            .map(|&v| u32::from(v))
            .sum()
    }
}

/// Individual values, 5 bits each
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ivs {
    pub hp: u8,
    pub atk: u8,
    pub def: u8,
    pub spe: u8,
    pub spa: u8,
    pub spd: u8,
}

impl Ivs {
    /// Unpack the low 30 bits of the IV word
    pub fn from_packed(word: u32) -> Self {
        let iv = |shift: u32| ((word >> shift) & 0x1F) as u8;
        Self {
            hp: iv(0),
            atk: iv(5),
            def: iv(10),
            spe: iv(15),
            spa: iv(20),
            spd: iv(25),
        }
    }

    pub fn packed(&self) -> u32 {
        [self.hp, self.atk, self.def, self.spe, self.spa, self.spd]
            .iter()
            .enumerate()
            .fold(0, |acc, (i, &v)| acc | (u32::from(v & 0x1F) << (i * 5)))
    }
}

/// Growth substructure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Growth {
    pub species: u16,
    pub held_item: u16,
    pub experience: u32,
    pub pp_bonuses: u8,
    pub friendship: u8,
}

impl Growth {
    pub fn from_block(block: &[u8; 12]) -> Self {
        Self {
            species: bytes::le_u16(block, 0),
            held_item: bytes::le_u16(block, 2),
            experience: bytes::le_u32(block, 4),
            pp_bonuses: block[8],
            friendship: block[9],
        }
    }

    pub fn to_block(&self) -> [u8; 12] {
        let mut block = [0u8; 12];
        block[0..2].copy_from_slice(&self.species.to_le_bytes());
        block[2..4].copy_from_slice(&self.held_item.to_le_bytes());
        block[4..8].copy_from_slice(&self.experience.to_le_bytes());
        block[8] = self.pp_bonuses;
        block[9] = self.friendship;
        block
    }
}

/// Attacks substructure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attacks {
    pub moves: [u16; 4],
    pub pp: [u8; 4],
}

impl Attacks {
    pub fn from_block(block: &[u8; 12]) -> Self {
        Self {
            moves: [0, 2, 4, 6].map(|o| bytes::le_u16(block, o)),
            pp: [block[8], block[9], block[10], block[11]],
        }
    }

    pub fn to_block(&self) -> [u8; 12] {
        let mut block = [0u8; 12];
        for (i, mv) in self.moves.iter().enumerate() {
            block[i * 2..i * 2 + 2].copy_from_slice(&mv.to_le_bytes());
        }
        block[8..12].copy_from_slice(&self.pp);
        block
    }

    /// Filled move slots as (slot, move ID, PP)
    pub fn known(&self) -> impl Iterator<Item = (usize, u16, u8)> + '_ {
        self.moves
            .iter()
            .zip(self.pp.iter())
            .enumerate()
            .filter(|(_, (mv, _))| **mv != 0)
            .map(|(slot, (&mv, &pp))| (slot, mv, pp))
    }
}

/// EVs and contest condition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effort {
    pub evs: Stats,
    /// Cool, beauty, cute, smart, tough, feel
    pub condition: [u8; 6],
}

impl Effort {
    pub fn from_block(block: &[u8; 12]) -> Self {
        Self {
            evs: Stats::from_bytes(&[block[0], block[1], block[2], block[3], block[4], block[5]]),
            condition: [block[6], block[7], block[8], block[9], block[10], block[11]],
        }
    }
}

/// Misc substructure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Misc {
    pub pokerus: u8,
    pub met_location: u8,
    pub origins: u16,
    pub ivs: Ivs,
    pub is_egg: bool,
    /// 0 or 1, selects between the species' two abilities
    pub ability_slot: u8,
    pub ribbons: u32,
}

const EGG_BIT: u32 = 1 << 30;
const ABILITY_BIT: u32 = 1 << 31;

impl Misc {
    pub fn from_block(block: &[u8; 12]) -> Self {
        let iv_word = bytes::le_u32(block, 4);
        Self {
            pokerus: block[0],
            met_location: block[1],
            origins: bytes::le_u16(block, 2),
            ivs: Ivs::from_packed(iv_word),
            is_egg: iv_word & EGG_BIT != 0,
            ability_slot: u8::from(iv_word & ABILITY_BIT != 0),
            ribbons: bytes::le_u32(block, 8),
        }
    }

    pub fn to_block(&self) -> [u8; 12] {
        let mut iv_word = self.ivs.packed();
        if self.is_egg {
            iv_word |= EGG_BIT;
        }
        if self.ability_slot != 0 {
            iv_word |= ABILITY_BIT;
        }
        let mut block = [0u8; 12];
        block[0] = self.pokerus;
        block[1] = self.met_location;
        block[2..4].copy_from_slice(&self.origins.to_le_bytes());
        block[4..8].copy_from_slice(&iv_word.to_le_bytes());
        block[8..12].copy_from_slice(&self.ribbons.to_le_bytes());
        block
    }
}

/// Unencrypted battle block of a party record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleStats {
    /// Raw non-volatile status bits
    pub status: u32,
    pub level: u8,
    pub pokerus_remaining: u8,
    pub current_hp: u16,
    /// `hp` holds max HP
    pub stats: Stats,
}

impl BattleStats {
    fn parse(record: &[u8]) -> Result<Self> {
        let what = "party battle block";
        let stat = |i: usize| bytes::u16_at(record, offset::STATS + i * 2, what);
        Ok(Self {
            status: bytes::u32_at(record, offset::STATUS, what)?,
            level: bytes::u8_at(record, offset::LEVEL, what)?,
            pokerus_remaining: bytes::u8_at(record, offset::POKERUS, what)?,
            current_hp: bytes::u16_at(record, offset::HP, what)?,
            stats: Stats {
                hp: stat(0)?,
                atk: stat(1)?,
                def: stat(2)?,
                spe: stat(3)?,
                spa: stat(4)?,
                spd: stat(5)?,
            },
        })
    }

    fn write(&self, out: &mut [u8; PARTY_SIZE]) {
        out[offset::STATUS..offset::STATUS + 4].copy_from_slice(&self.status.to_le_bytes());
        out[offset::LEVEL] = self.level;
        out[offset::POKERUS] = self.pokerus_remaining;
        out[offset::HP..offset::HP + 2].copy_from_slice(&self.current_hp.to_le_bytes());
        let s = &self.stats;
        for (i, v) in [s.hp, s.atk, s.def, s.spe, s.spa, s.spd].iter().enumerate() {
            let at = offset::STATS + i * 2;
            out[at..at + 2].copy_from_slice(&v.to_le_bytes());
        }
    }
}

/// Nature, `personality % 25`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Brave,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Bold,
        Nature::Docile,
        Nature::Relaxed,
        Nature::Impish,
        Nature::Lax,
        Nature::Timid,
        Nature::Hasty,
        Nature::Serious,
        Nature::Jolly,
        Nature::Naive,
        Nature::Modest,
        Nature::Mild,
        Nature::Quiet,
        Nature::Bashful,
        Nature::Rash,
        Nature::Calm,
        Nature::Gentle,
        Nature::Sassy,
        Nature::Careful,
        Nature::Quirky,
    ];

    pub fn from_personality(personality: u32) -> Self {
        Self::ALL[(personality % 25) as usize]
    }

    /// Raised and lowered stat as indices into atk/def/spe/spa/spd.
    /// Neutral natures return `None`.
    pub fn modifiers(&self) -> Option<(usize, usize)> {
        let index = *self as usize;
        let (up, down) = (index / 5, index % 5);
        (up != down).then_some((up, down))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Nature::Hardy => "Hardy",
            Nature::Lonely => "Lonely",
            Nature::Brave => "Brave",
            Nature::Adamant => "Adamant",
            Nature::Naughty => "Naughty",
            Nature::Bold => "Bold",
            Nature::Docile => "Docile",
            Nature::Relaxed => "Relaxed",
            Nature::Impish => "Impish",
            Nature::Lax => "Lax",
            Nature::Timid => "Timid",
            Nature::Hasty => "Hasty",
            Nature::Serious => "Serious",
            Nature::Jolly => "Jolly",
            Nature::Naive => "Naive",
            Nature::Modest => "Modest",
            Nature::Mild => "Mild",
            Nature::Quiet => "Quiet",
            Nature::Bashful => "Bashful",
            Nature::Rash => "Rash",
            Nature::Calm => "Calm",
            Nature::Gentle => "Gentle",
            Nature::Sassy => "Sassy",
            Nature::Careful => "Careful",
            Nature::Quirky => "Quirky",
        }
    }
}

impl std::fmt::Display for Nature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gender of an individual Pokemon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PokemonGender {
    Male,
    Female,
    Genderless,
}

/// A decoded Pokemon record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonRecord {
    pub personality: u32,
    pub ot_id: u32,
    pub nickname: String,
    pub language: u8,
    pub ot_name: String,
    pub markings: u8,
    pub checksum: u16,
    pub substructures: Substructures,
    /// Present for party records only
    pub battle: Option<BattleStats>,
}

impl PokemonRecord {
    /// Parse a 100-byte party record
    pub fn parse_party(record: &[u8]) -> Result<Self> {
        let battle = BattleStats::parse(record)?;
        let mut mon = Self::parse_boxed(record)?;
        mon.battle = Some(battle);
        Ok(mon)
    }

    /// Parse an 80-byte boxed record.
    ///
    /// Species 0 is [`CodecError::EmptySlot`]; an unmapped species is
    /// [`CodecError::UnknownSpecies`].
    pub fn parse_boxed(record: &[u8]) -> Result<Self> {
        let what = "pokemon record";
        bytes::slice(record, 0, BOX_SIZE, what)?;

        let personality = bytes::u32_at(record, offset::PERSONALITY, what)?;
        let ot_id = bytes::u32_at(record, offset::OT_ID, what)?;
        let data = bytes::slice(record, offset::DATA, DATA_SIZE, what)?;
        let substructures = decrypt_pokemon_substructures(data, personality, ot_id)?;
        species::check_species(substructures.species())?;

        Ok(Self {
            personality,
            ot_id,
            nickname: decode_text(bytes::slice(record, offset::NICKNAME, NICKNAME_LEN, what)?, NICKNAME_LEN),
            language: bytes::u8_at(record, offset::LANGUAGE, what)?,
            ot_name: decode_text(bytes::slice(record, offset::OT_NAME, OT_NAME_LEN, what)?, OT_NAME_LEN),
            markings: bytes::u8_at(record, offset::MARKINGS, what)?,
            checksum: bytes::u16_at(record, offset::CHECKSUM, what)?,
            substructures,
            battle: None,
        })
    }

    /// Re-encode as a record: 100 bytes with a battle block, else 80.
    ///
    /// The checksum is recomputed from the substructures.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = [0u8; PARTY_SIZE];
        out[offset::PERSONALITY..offset::PERSONALITY + 4].copy_from_slice(&self.personality.to_le_bytes());
        out[offset::OT_ID..offset::OT_ID + 4].copy_from_slice(&self.ot_id.to_le_bytes());
        out[offset::NICKNAME..offset::NICKNAME + NICKNAME_LEN]
            .copy_from_slice(&encode_text(&self.nickname, NICKNAME_LEN));
        out[offset::LANGUAGE] = self.language;
        out[offset::OT_NAME..offset::OT_NAME + OT_NAME_LEN]
            .copy_from_slice(&encode_text(&self.ot_name, OT_NAME_LEN));
        out[offset::MARKINGS] = self.markings;
        let checksum = substructure::substructure_checksum(&self.substructures);
        out[offset::CHECKSUM..offset::CHECKSUM + 2].copy_from_slice(&checksum.to_le_bytes());
        out[offset::DATA..offset::DATA + DATA_SIZE].copy_from_slice(&encrypt_pokemon_substructures(
            &self.substructures,
            self.personality,
            self.ot_id,
        ));

        match &self.battle {
            Some(battle) => {
                battle.write(&mut out);
                out.to_vec()
            }
            None => out[..BOX_SIZE].to_vec(),
        }
    }

    pub fn growth(&self) -> Growth {
        Growth::from_block(self.substructures.get(Substructure::Growth))
    }

    pub fn attacks(&self) -> Attacks {
        Attacks::from_block(self.substructures.get(Substructure::Attacks))
    }

    pub fn effort(&self) -> Effort {
        Effort::from_block(self.substructures.get(Substructure::Effort))
    }

    pub fn misc(&self) -> Misc {
        Misc::from_block(self.substructures.get(Substructure::Misc))
    }

    /// Internal species index
    pub fn species(&self) -> u16 {
        self.substructures.species()
    }

    pub fn national_dex(&self) -> Option<u16> {
        species::national_dex(self.species())
    }

    pub fn held_item(&self) -> u16 {
        self.substructures.held_item()
    }

    pub fn experience(&self) -> u32 {
        self.growth().experience
    }

    pub fn moves(&self) -> [u16; 4] {
        self.attacks().moves
    }

    pub fn pp(&self) -> [u8; 4] {
        self.attacks().pp
    }

    pub fn evs(&self) -> Stats {
        self.effort().evs
    }

    pub fn ivs(&self) -> Ivs {
        self.misc().ivs
    }

    pub fn is_egg(&self) -> bool {
        self.misc().is_egg
    }

    pub fn ability_slot(&self) -> u8 {
        self.misc().ability_slot
    }

    pub fn level(&self) -> Option<u8> {
        self.battle.map(|b| b.level)
    }

    pub fn current_hp(&self) -> Option<u16> {
        self.battle.map(|b| b.current_hp)
    }

    pub fn max_hp(&self) -> Option<u16> {
        self.battle.map(|b| b.stats.hp)
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp() == Some(0)
    }

    pub fn is_checksum_valid(&self) -> bool {
        substructure::substructure_checksum(&self.substructures) == self.checksum
    }

    pub fn nature(&self) -> Nature {
        Nature::from_personality(self.personality)
    }

    pub fn trainer_id(&self) -> u16 {
        (self.ot_id & 0xFFFF) as u16
    }

    pub fn secret_id(&self) -> u16 {
        (self.ot_id >> 16) as u16
    }

    pub fn is_shiny(&self) -> bool {
        let pid_hi = self.personality >> 16;
        let pid_lo = self.personality & 0xFFFF;
        (u32::from(self.trainer_id()) ^ u32::from(self.secret_id()) ^ pid_hi ^ pid_lo) < 8
    }

    /// Gender from the species' ratio threshold
    /// (0 always male, 254 always female, 255 genderless)
    pub fn gender(&self, threshold: u8) -> PokemonGender {
        match threshold {
            0 => PokemonGender::Male,
            254 => PokemonGender::Female,
            255 => PokemonGender::Genderless,
            t if ((self.personality & 0xFF) as u8) < t => PokemonGender::Female,
            _ => PokemonGender::Male,
        }
    }
}

/// Decoded party slots, in order.
///
/// Each slot keeps its own result so a corrupted member does not hide the
/// others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Party {
    slots: Vec<Result<PokemonRecord>>,
}

impl Party {
    /// Number of slots the game reported
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&PokemonRecord> {
        self.slots.get(slot).and_then(|r| r.as_ref().ok())
    }

    pub fn slot(&self, slot: usize) -> Option<&Result<PokemonRecord>> {
        self.slots.get(slot)
    }

    /// Decoded members with their slot index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PokemonRecord)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_ref().ok().map(|mon| (i, mon)))
    }

    /// Slots that failed to decode
    pub fn errors(&self) -> impl Iterator<Item = (usize, &CodecError)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_ref().err().map(|e| (i, e)))
    }

    /// Find a member by personality value
    pub fn find_by_personality(&self, personality: u32) -> Option<(usize, &PokemonRecord)> {
        self.iter().find(|(_, mon)| mon.personality == personality)
    }
}

/// Decode `count` consecutive party records from `data`.
///
/// A count above 6 is [`CodecError::PartyCount`].
pub fn decode_party(count: u32, data: &[u8]) -> Result<Party> {
    if count as usize > MAX_PARTY {
        return Err(CodecError::PartyCount(count));
    }
    let slots = (0..count as usize)
        .map(|i| {
            bytes::slice(data, i * PARTY_SIZE, PARTY_SIZE, "party slot").and_then(PokemonRecord::parse_party)
        })
        .collect();
    Ok(Party { slots })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn mudkip() -> PokemonRecord {
        let growth = Growth {
            species: 283,
            held_item: 0,
            experience: 135,
            pp_bonuses: 0,
            friendship: 70,
        };
        let attacks = Attacks {
            moves: [33, 45, 0, 0],
            pp: [35, 40, 0, 0],
        };
        let mut effort = [0u8; 12];
        effort[0] = 4;
        effort[1] = 8;
        let misc = Misc {
            pokerus: 0,
            met_location: 16,
            origins: 0x8C05,
            ivs: Ivs {
                hp: 31,
                atk: 20,
                def: 15,
                spe: 10,
                spa: 5,
                spd: 0,
            },
            is_egg: false,
            ability_slot: 0,
            ribbons: 0,
        };
        PokemonRecord {
            personality: 0x1234_5678,
            ot_id: 0x0000_D431,
            nickname: "MUDKIP".to_string(),
            language: 2,
            ot_name: "MAY".to_string(),
            markings: 0,
            checksum: 0,
            substructures: Substructures::from_blocks(
                growth.to_block(),
                attacks.to_block(),
                effort,
                misc.to_block(),
            ),
            battle: Some(BattleStats {
                status: 0,
                level: 5,
                pokerus_remaining: 0,
                current_hp: 20,
                stats: Stats {
                    hp: 21,
                    atk: 13,
                    def: 11,
                    spe: 9,
                    spa: 11,
                    spd: 10,
                },
            }),
        }
    }

    #[test]
    fn test_party_record_round_trip() {
        let mon = mudkip();
        let bytes = mon.encode();
        assert_eq!(bytes.len(), PARTY_SIZE);

        let parsed = PokemonRecord::parse_party(&bytes).unwrap();
        assert_eq!(parsed.species(), 283);
        assert_eq!(parsed.national_dex(), Some(258));
        assert_eq!(parsed.nickname, "MUDKIP");
        assert_eq!(parsed.ot_name, "MAY");
        assert_eq!(parsed.moves(), [33, 45, 0, 0]);
        assert_eq!(parsed.pp(), [35, 40, 0, 0]);
        assert_eq!(parsed.level(), Some(5));
        assert_eq!(parsed.current_hp(), Some(20));
        assert_eq!(parsed.max_hp(), Some(21));
        assert_eq!(parsed.ivs().hp, 31);
        assert_eq!(parsed.ivs().spa, 5);
        assert_eq!(parsed.evs().atk, 8);
        assert!(parsed.is_checksum_valid());
    }

    #[test]
    fn test_boxed_record_has_no_battle_block() {
        let mut mon = mudkip();
        mon.battle = None;
        let bytes = mon.encode();
        assert_eq!(bytes.len(), BOX_SIZE);

        let parsed = PokemonRecord::parse_boxed(&bytes).unwrap();
        assert_eq!(parsed.level(), None);
        assert_eq!(parsed.current_hp(), None);
        assert_eq!(parsed.species(), 283);
    }

    #[test]
    fn test_empty_slot() {
        let bytes = [0u8; PARTY_SIZE];
        let err = PokemonRecord::parse_party(&bytes).unwrap_err();
        assert!(err.is_empty_slot());
    }

    #[test]
    fn test_unknown_species() {
        let mut mon = mudkip();
        mon.substructures.get_mut(Substructure::Growth)[0..2].copy_from_slice(&260u16.to_le_bytes());
        let err = PokemonRecord::parse_party(&mon.encode()).unwrap_err();
        assert_eq!(err, CodecError::UnknownSpecies(260));
    }

    #[test]
    fn test_truncated_record() {
        let bytes = mudkip().encode();
        assert!(matches!(
            PokemonRecord::parse_party(&bytes[..90]),
            Err(CodecError::Truncated { .. })
        ));
    }

    #[test]
    fn test_tampered_checksum_detected() {
        let mut bytes = mudkip().encode();
        bytes[offset::CHECKSUM] ^= 0xFF;
        let parsed = PokemonRecord::parse_party(&bytes).unwrap();
        assert!(!parsed.is_checksum_valid());
    }

    #[test]
    fn test_ivs_pack_round_trip() {
        let word = 0b01_11111_00000_10101_01010_11111_00001;
        let ivs = Ivs::from_packed(word);
        assert_eq!(ivs.hp, 1);
        assert_eq!(ivs.atk, 31);
        assert_eq!(ivs.def, 10);
        assert_eq!(ivs.spe, 21);
        assert_eq!(ivs.spa, 0);
        assert_eq!(ivs.spd, 31);
        assert_eq!(ivs.packed(), word & 0x3FFF_FFFF);
    }

    #[test]
    fn test_egg_and_ability_bits() {
        let mut block = [0u8; 12];
        block[4..8].copy_from_slice(&(EGG_BIT | ABILITY_BIT).to_le_bytes());
        let misc = Misc::from_block(&block);
        assert!(misc.is_egg);
        assert_eq!(misc.ability_slot, 1);
        assert_eq!(misc.to_block(), block);
    }

    #[test]
    fn test_nature() {
        assert_eq!(Nature::from_personality(0), Nature::Hardy);
        assert_eq!(Nature::from_personality(3), Nature::Adamant);
        assert_eq!(Nature::from_personality(25 + 15), Nature::Modest);
        assert_eq!(Nature::Adamant.modifiers(), Some((0, 3)));
        assert_eq!(Nature::Serious.modifiers(), None);
    }

    #[test]
    fn test_shiny() {
        let mut mon = mudkip();
        mon.ot_id = 0;
        mon.personality = 0x0001_0006;
        assert!(mon.is_shiny());
        mon.personality = 0x0001_0009;
        assert!(!mon.is_shiny());
    }

    #[test]
    fn test_gender_threshold() {
        let mut mon = mudkip();
        mon.personality = 0x0000_0010;
        assert_eq!(mon.gender(31), PokemonGender::Female);
        assert_eq!(mon.gender(0), PokemonGender::Male);
        assert_eq!(mon.gender(255), PokemonGender::Genderless);
        mon.personality = 0x0000_00F0;
        assert_eq!(mon.gender(127), PokemonGender::Male);
        assert_eq!(mon.gender(254), PokemonGender::Female);
    }

    #[test]
    fn test_known_moves() {
        let attacks = mudkip().attacks();
        let known: Vec<_> = attacks.known().collect();
        assert_eq!(known, vec![(0, 33, 35), (1, 45, 40)]);
    }

    #[test]
    fn test_decode_party_keeps_siblings() {
        let good = mudkip().encode();
        let mut data = good.clone();
        data.extend_from_slice(&[0u8; PARTY_SIZE]);
        data.extend_from_slice(&good);

        let party = decode_party(3, &data).unwrap();
        assert_eq!(party.len(), 3);
        assert!(party.get(0).is_some());
        assert!(party.get(1).is_none());
        assert!(party.get(2).is_some());
        let errors: Vec<_> = party.errors().collect();
        assert_eq!(errors, vec![(1, &CodecError::EmptySlot)]);
        assert_eq!(party.iter().count(), 2);
    }

    #[test]
    fn test_decode_party_count_above_six() {
        let data = vec![0u8; PARTY_SIZE * 7];
        assert_eq!(decode_party(7, &data), Err(CodecError::PartyCount(7)));
        assert_eq!(decode_party(0xFFFF_FFFF, &data), Err(CodecError::PartyCount(0xFFFF_FFFF)));
    }

    #[test]
    fn test_decode_party_short_buffer() {
        let data = mudkip().encode();
        let party = decode_party(2, &data).unwrap();
        assert!(party.get(0).is_some());
        assert!(matches!(party.slot(1), Some(Err(CodecError::Truncated { .. }))));
    }

    #[test]
    fn test_find_by_personality() {
        let data = mudkip().encode();
        let party = decode_party(1, &data).unwrap();
        let (slot, mon) = party.find_by_personality(0x1234_5678).unwrap();
        assert_eq!(slot, 0);
        assert_eq!(mon.species(), 283);
        assert!(party.find_by_personality(1).is_none());
    }
}
