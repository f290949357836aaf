//! 128 KiB flash saves
//!
//! A save holds two slots of 14 sections each. Sections are written in a
//! rotating physical order, so each one carries its ID in a footer. The slot
//! with the newer save index is the live one.

use crate::bag::Bag;
use crate::bytes;
use crate::flags::BadgeFlags;
use crate::layout::{EVENT_FLAGS_LEN, GameVersion, MemoryLayout};
use crate::options::{GameOptions, OptionsLayout, read_options_with};
use crate::pokedex::Pokedex;
use crate::pokemon::{Party, PokemonRecord, decode_party};
use crate::trainer::{TrainerInfo, security_key};
use crate::{CodecError, Result};

pub const SECTION_SIZE: usize = 0x1000;
pub const SECTION_COUNT: usize = 14;
pub const SLOT_SIZE: usize = SECTION_SIZE * SECTION_COUNT;
pub const SLOT_OFFSETS: [usize; 2] = [0x0000, 0xE000];

/// Footer marker written by the game
pub const SECTION_SIGNATURE: u32 = 0x0801_2025;

/// Money above this is not a real value
const MAX_MONEY: u32 = 999_999;

mod footer {
    pub const ID: usize = 0xFF4;
    pub const CHECKSUM: usize = 0xFF6;
    pub const SIGNATURE: usize = 0xFF8;
    pub const SAVE_INDEX: usize = 0xFFC;
}

/// Bytes of payload in each section, by section ID
pub fn section_data_size(id: u16) -> usize {
    match id {
        0 => 3884,
        4 => 3848,
        13 => 2000,
        _ => 3968,
    }
}

/// Word sum folded to 16 bits
pub fn section_checksum(data: &[u8]) -> u16 {
    let sum = data
        .chunks_exact(4)
        .fold(0u32, |acc, w| acc.wrapping_add(u32::from_le_bytes([w[0], w[1], w[2], w[3]])));
    ((sum >> 16).wrapping_add(sum & 0xFFFF) & 0xFFFF) as u16
}

/// Whether save index `a` is newer than `b`, allowing for wraparound
pub fn is_newer(a: u32, b: u32) -> bool {
    (a.wrapping_sub(b) as i32) > 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    pub id: u16,
    pub checksum: u16,
    pub signature: u32,
    pub save_index: u32,
    /// Byte offset of the section in the file
    pub offset: usize,
}

impl SectionHeader {
    fn parse(save: &[u8], offset: usize) -> Result<Self> {
        let what = "section footer";
        Ok(Self {
            id: bytes::u16_at(save, offset + footer::ID, what)?,
            checksum: bytes::u16_at(save, offset + footer::CHECKSUM, what)?,
            signature: bytes::u32_at(save, offset + footer::SIGNATURE, what)?,
            save_index: bytes::u32_at(save, offset + footer::SAVE_INDEX, what)?,
            offset,
        })
    }
}

#[derive(Debug, Clone)]
struct Slot {
    index: usize,
    save_index: u32,
    /// Indexed by section ID
    sections: Vec<SectionHeader>,
}

fn read_slot(save: &[u8], index: usize, base: usize) -> Result<Slot> {
    let mut by_id: [Option<SectionHeader>; SECTION_COUNT] = [None; SECTION_COUNT];
    for n in 0..SECTION_COUNT {
        let header = SectionHeader::parse(save, base + n * SECTION_SIZE)?;
        if header.signature != SECTION_SIGNATURE {
            continue;
        }
        if let Some(entry) = by_id.get_mut(usize::from(header.id)) {
            *entry = Some(header);
        }
    }

    let sections = by_id
        .iter()
        .enumerate()
        .map(|(id, h)| h.ok_or(CodecError::MissingSection(id as u16)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Slot {
        index,
        save_index: sections[0].save_index,
        sections,
    })
}

/// The live slot of a flash save with its save blocks stitched together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    /// 0 for slot A, 1 for slot B
    pub active_slot: usize,
    pub save_index: u32,
    /// Indexed by section ID
    pub sections: Vec<SectionHeader>,
    pub save_block1: Vec<u8>,
    pub save_block2: Vec<u8>,
    data: Vec<u8>,
}

impl SaveFile {
    pub fn parse(save: &[u8]) -> Result<Self> {
        let slots: Vec<Slot> = SLOT_OFFSETS
            .iter()
            .enumerate()
            .filter_map(|(i, &base)| read_slot(save, i, base).ok())
            .collect();

        let active = match slots.as_slice() {
            [] => return Err(CodecError::NoValidSlot),
            [only] => only,
            [a, b, ..] => {
                if is_newer(a.save_index, b.save_index) {
                    a
                } else {
                    b
                }
            }
        };

        let section_data = |id: u16| -> Result<&[u8]> {
            let header = active.sections[usize::from(id)];
            bytes::slice(save, header.offset, section_data_size(id), "section data")
        };

        let save_block2 = section_data(0)?.to_vec();
        let mut save_block1 = Vec::with_capacity(4 * 3968);
        for id in 1..=4 {
            save_block1.extend_from_slice(section_data(id)?);
        }

        Ok(Self {
            active_slot: active.index,
            save_index: active.save_index,
            sections: active.sections.clone(),
            save_block1,
            save_block2,
            data: save.to_vec(),
        })
    }

    /// Check every section checksum of the live slot
    pub fn verify(&self) -> Result<()> {
        for header in &self.sections {
            let data = bytes::slice(&self.data, header.offset, section_data_size(header.id), "section data")?;
            let computed = section_checksum(data);
            if computed != header.checksum {
                return Err(CodecError::SectionChecksum {
                    id: header.id,
                    stored: header.checksum,
                    computed,
                });
            }
        }
        Ok(())
    }

    pub fn security_key(&self, layout: &MemoryLayout) -> Result<u32> {
        security_key(&self.save_block2, layout)
    }

    pub fn trainer(&self, layout: &MemoryLayout) -> Result<TrainerInfo> {
        TrainerInfo::decode(&self.save_block2, &self.save_block1, layout)
    }

    pub fn party(&self, layout: &MemoryLayout) -> Result<Party> {
        let count = bytes::u32_at(&self.save_block1, layout.party_count_offset, "party count")?;
        let data = self
            .save_block1
            .get(layout.party_offset..)
            .ok_or(CodecError::Truncated {
                what: "party data",
                needed: layout.party_offset,
                actual: self.save_block1.len(),
            })?;
        decode_party(count, data)
    }

    pub fn bag(&self, layout: &MemoryLayout) -> Result<Bag> {
        Bag::decode(&self.save_block1, &layout.bag, self.security_key(layout)?)
    }

    pub fn badges(&self, layout: &MemoryLayout) -> Result<BadgeFlags> {
        let flags = bytes::slice(&self.save_block1, layout.event_flags_offset, EVENT_FLAGS_LEN, "event flags")?;
        Ok(BadgeFlags::from_flags(flags, layout.badge_flag_base))
    }

    pub fn options(&self, layout: &MemoryLayout, bits: &OptionsLayout) -> Result<GameOptions> {
        let byte = bytes::u8_at(&self.save_block2, layout.options_offset, "options")?;
        Ok(read_options_with(byte, bits))
    }

    pub fn pokedex(&self, layout: &MemoryLayout) -> Result<Pokedex> {
        Pokedex::decode(&self.save_block2, layout)
    }

    /// Guess the game family from the save contents alone.
    ///
    /// Party counts, a decodable first party member and a plausible money
    /// value each count towards FireRed/LeafGreen or the Hoenn layout. A key
    /// at the Emerald offset that yields valid money separates Emerald from
    /// Ruby/Sapphire. Ties fall back to Ruby/Sapphire, whose items are not
    /// masked.
    pub fn guess_version(&self) -> GameVersion {
        let frlg = MemoryLayout::fire_red_leaf_green();
        let emerald = MemoryLayout::emerald();

        let score = |layout: &MemoryLayout, key: u32| -> u32 {
            let sb1 = &self.save_block1;
            let mut score = 0;
            let count = bytes::u32_at(sb1, layout.party_count_offset, "party count").unwrap_or(0);
            if (1..=6).contains(&count) {
                score += 2;
                let first = sb1.get(layout.party_offset..).map(PokemonRecord::parse_party);
                if matches!(first, Some(Ok(_))) {
                    score += 3;
                }
            }
            let money = bytes::u32_at(sb1, layout.money_offset, "money").map(|raw| raw ^ key);
            if matches!(money, Ok(m) if m <= MAX_MONEY) {
                score += 2;
            }
            score
        };

        let frlg_key = security_key(&self.save_block2, &frlg).unwrap_or(0);
        let hoenn_key = security_key(&self.save_block2, &emerald).unwrap_or(0);
        let frlg_score = score(&frlg, frlg_key);
        let hoenn_score = score(&emerald, hoenn_key);

        if frlg_score > hoenn_score {
            return GameVersion::FireRedLeafGreen;
        }
        if hoenn_score > frlg_score && hoenn_key != 0 {
            let money = bytes::u32_at(&self.save_block1, emerald.money_offset, "money").map(|raw| raw ^ hoenn_key);
            if matches!(money, Ok(m) if m <= MAX_MONEY) {
                return GameVersion::Emerald;
            }
        }
        GameVersion::RubySapphire
    }
}
