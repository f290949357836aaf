//! Live game-state reads for Generation 3 Pokemon.
//!
//! `hoenn-reader` pulls bytes out of a [`MemorySource`] (an emulator
//! connection, a RAM dump, a test image) and hands them to `hoenn-codec`.
//!
//! ```text
//! emulator / dump ──> MemorySource ──> GameReader ──> hoenn-codec types
//! ```
//!
//! Save-block data is reached through pointers in IWRAM that stay null until
//! the game has loaded a save. Every save-block read goes through
//! [`GameReader::save_blocks`], which rejects pointers outside EWRAM with
//! [`CodecError::InvalidPointer`]; callers treat that as "not ready" and
//! retry later.
//!
//! # Example Usage
//!
//! ```ignore
//! use hoenn_reader::{GameReader, ReaderConfig};
//!
//! let config = ReaderConfig::from_path("hoenn.json")?;
//! let reader = GameReader::from_config(emulator, &config);
//!
//! let snapshot = reader.snapshot();
//! if let Some(trainer) = &snapshot.trainer {
//!     println!("{} has {} money", trainer.name, trainer.money);
//! }
//! ```

mod config;
mod save;
mod source;

use hoenn_codec::layout::{EVENT_FLAGS_LEN, POKEDEX_LEN};
use hoenn_codec::pointer::EWRAM_SIZE;
use hoenn_codec::pokemon::{MAX_PARTY, PARTY_SIZE};
use hoenn_codec::{
    Bag, BadgeFlags, BattleSnapshot, CodecError, GameOptions, GameVersion, MemoryLayout,
    OptionsLayout, Party, Pokedex, ROM_GAME_CODE_ADDR, TrainerInfo, check_pointer, decode_party,
    read_options_with,
};
use thiserror::Error;

pub use config::ReaderConfig;
pub use save::load_save;
pub use source::{MemoryImage, MemoryRegion, MemorySource, SourceError};

use hoenn_codec::battle::{BATTLE_MON_SIZE, MAX_BATTLERS};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("layout field {field} at offset {offset:#x} reaches past the end of EWRAM")]
    LayoutOutOfRange { field: &'static str, offset: usize },
}

impl ReadError {
    /// The game has not loaded a save yet
    pub fn is_not_ready(&self) -> bool {
        matches!(self, ReadError::Codec(e) if e.is_not_ready())
    }
}

pub type Result<T> = std::result::Result<T, ReadError>;

/// Validated save block addresses for one read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveBlocks {
    pub block1: u32,
    pub block2: u32,
}

/// Everything readable at one moment; each field is independent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameSnapshot {
    pub version: Option<GameVersion>,
    pub trainer: Option<TrainerInfo>,
    pub party: Option<Party>,
    pub bag: Option<Bag>,
    pub badges: Option<BadgeFlags>,
    pub options: Option<GameOptions>,
    pub pokedex: Option<Pokedex>,
    /// `None` both outside battle and when the battle globals are unreadable
    pub battle: Option<BattleSnapshot>,
}

/// Identify the running game from the ROM header
pub fn detect_version<S: MemorySource>(source: &S) -> Result<Option<GameVersion>> {
    let code = source.read_range(ROM_GAME_CODE_ADDR, 4)?;
    let version = GameVersion::from_game_code(&code);
    if version.is_none() {
        tracing::warn!(code = %String::from_utf8_lossy(&code), "unrecognized game code");
    }
    Ok(version)
}

/// `(name, offset, len)` of a field inside a save block
type Field = (&'static str, usize, usize);

fn block1_fields(l: &MemoryLayout) -> [Field; 10] {
    [
        ("party_count_offset", l.party_count_offset, 4),
        ("party_offset", l.party_offset, MAX_PARTY * PARTY_SIZE),
        ("money_offset", l.money_offset, 4),
        ("coins_offset", l.coins_offset, 2),
        ("event_flags_offset", l.event_flags_offset, EVENT_FLAGS_LEN),
        ("bag.items", l.bag.items.offset, l.bag.items.byte_len()),
        ("bag.key_items", l.bag.key_items.offset, l.bag.key_items.byte_len()),
        ("bag.poke_balls", l.bag.poke_balls.offset, l.bag.poke_balls.byte_len()),
        ("bag.tms_hms", l.bag.tms_hms.offset, l.bag.tms_hms.byte_len()),
        ("bag.berries", l.bag.berries.offset, l.bag.berries.byte_len()),
    ]
}

fn block2_fields(l: &MemoryLayout) -> Vec<Field> {
    let mut fields = vec![
        ("trainer card", 0, 0x14),
        ("options_offset", l.options_offset, 1),
        ("pokedex_owned_offset", l.pokedex_owned_offset, POKEDEX_LEN),
        ("pokedex_seen_offset", l.pokedex_seen_offset, POKEDEX_LEN),
    ];
    if let Some(offset) = l.security_key_offset {
        fields.push(("security_key_offset", offset, 4));
    }
    fields
}

/// End of `field` inside a block; nothing may reach past EWRAM
fn field_end((field, offset, len): Field) -> Result<usize> {
    offset
        .checked_add(len)
        .filter(|&end| end <= EWRAM_SIZE as usize)
        .ok_or(ReadError::LayoutOutOfRange { field, offset })
}

fn block_len(fields: &[Field]) -> Result<usize> {
    fields.iter().try_fold(0, |len, &f| Ok(len.max(field_end(f)?)))
}

/// Reject layouts whose save-block fields cannot fit in EWRAM
pub fn check_layout(layout: &MemoryLayout) -> Result<()> {
    block_len(&block1_fields(layout))?;
    block_len(&block2_fields(layout))?;
    Ok(())
}

/// Reads game state from a memory source using one game's layout
#[derive(Debug, Clone)]
pub struct GameReader<S> {
    source: S,
    layout: MemoryLayout,
    options: OptionsLayout,
}

impl<S: MemorySource> GameReader<S> {
    pub fn new(source: S, layout: MemoryLayout) -> Self {
        Self {
            source,
            layout,
            options: OptionsLayout::default(),
        }
    }

    pub fn from_config(source: S, config: &ReaderConfig) -> Self {
        Self::new(source, config.layout.clone()).with_options(config.options)
    }

    /// Pick the layout from the ROM header; `None` for an unknown game
    pub fn detect(source: S) -> Result<Option<Self>> {
        Ok(detect_version(&source)?.map(|version| Self::new(source, version.layout())))
    }

    pub fn with_options(mut self, options: OptionsLayout) -> Self {
        self.options = options;
        self
    }

    pub fn layout(&self) -> &MemoryLayout {
        &self.layout
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    fn pointer(&self, address: u32, what: &'static str) -> Result<u32> {
        let raw = self.source.read_u32(address)?;
        check_pointer(raw).map_err(|e| {
            tracing::debug!(block = what, pointer = %format!("{raw:#010x}"), "save block pointer not ready");
            ReadError::from(e)
        })
    }

    /// Follow the IWRAM save-block pointers, rejecting anything outside EWRAM
    pub fn save_blocks(&self) -> Result<SaveBlocks> {
        Ok(SaveBlocks {
            block1: self.pointer(self.layout.save_block1_ptr, "save block 1")?,
            block2: self.pointer(self.layout.save_block2_ptr, "save block 2")?,
        })
    }

    /// Bus address of a save-block field
    fn address_of(&self, base: u32, field: Field) -> Result<u32> {
        field_end(field)?;
        // offset < EWRAM_SIZE after the check above
        Ok(base.wrapping_add(field.1 as u32))
    }

    /// Read one field of a save block at `base`
    fn read_at(&self, base: u32, field: Field) -> Result<Vec<u8>> {
        let address = self.address_of(base, field)?;
        Ok(self.source.read_range(address, field.2)?)
    }

    /// Save Block 1 from its start through the furthest field the layout names
    fn block1(&self, blocks: SaveBlocks) -> Result<Vec<u8>> {
        let len = block_len(&block1_fields(&self.layout))?;
        self.read_at(blocks.block1, ("save block 1", 0, len))
    }

    /// Save Block 2 from its start through the furthest field the layout names
    fn block2(&self, blocks: SaveBlocks) -> Result<Vec<u8>> {
        let len = block_len(&block2_fields(&self.layout))?;
        self.read_at(blocks.block2, ("save block 2", 0, len))
    }

    /// Trainer card data. Money and coins are unmasked with the key from
    /// this same read.
    pub fn trainer(&self) -> Result<TrainerInfo> {
        let blocks = self.save_blocks()?;
        let sb2 = self.block2(blocks)?;
        let sb1 = self.block1(blocks)?;
        Ok(TrainerInfo::decode(&sb2, &sb1, &self.layout)?)
    }

    /// Party members by slot. A slot that fails to decode is logged and kept
    /// as an error so the others stay usable.
    pub fn party(&self) -> Result<Party> {
        let blocks = self.save_blocks()?;
        let l = &self.layout;
        let count_at = self.address_of(blocks.block1, ("party_count_offset", l.party_count_offset, 4))?;
        let count = self.source.read_u32(count_at)?;
        let data = self.read_at(blocks.block1, ("party_offset", l.party_offset, MAX_PARTY * PARTY_SIZE))?;
        let party = decode_party(count, &data)?;
        for (slot, error) in party.errors() {
            if !error.is_empty_slot() {
                tracing::warn!(slot, error = %error, "rejected party slot");
            }
        }
        Ok(party)
    }

    pub fn bag(&self) -> Result<Bag> {
        let blocks = self.save_blocks()?;
        let sb2 = self.block2(blocks)?;
        let key = hoenn_codec::security_key(&sb2, &self.layout)?;
        let sb1 = self.block1(blocks)?;
        Ok(Bag::decode(&sb1, &self.layout.bag, key)?)
    }

    pub fn badges(&self) -> Result<BadgeFlags> {
        let blocks = self.save_blocks()?;
        let flags = self.read_at(
            blocks.block1,
            ("event_flags_offset", self.layout.event_flags_offset, EVENT_FLAGS_LEN),
        )?;
        Ok(BadgeFlags::from_flags(&flags, self.layout.badge_flag_base))
    }

    pub fn options(&self) -> Result<GameOptions> {
        let blocks = self.save_blocks()?;
        let address = self.address_of(blocks.block2, ("options_offset", self.layout.options_offset, 1))?;
        Ok(read_options_with(self.source.read_u8(address)?, &self.options))
    }

    pub fn pokedex(&self) -> Result<Pokedex> {
        let blocks = self.save_blocks()?;
        let l = &self.layout;
        let owned = self.read_at(blocks.block2, ("pokedex_owned_offset", l.pokedex_owned_offset, POKEDEX_LEN))?;
        let seen = self.read_at(blocks.block2, ("pokedex_seen_offset", l.pokedex_seen_offset, POKEDEX_LEN))?;
        Ok(Pokedex::from_bitfields(&owned, &seen))
    }

    /// Battle globals; `None` outside battle
    pub fn battle(&self) -> Result<Option<BattleSnapshot>> {
        let flags = self.source.read_u32(self.layout.battle_type_flags_addr)?;
        if flags == 0 {
            return Ok(None);
        }
        let weather = match self.layout.battle_weather_addr {
            Some(address) => self.source.read_u16(address)?,
            None => 0,
        };
        let mons = self
            .source
            .read_range(self.layout.battle_mons_addr, MAX_BATTLERS * BATTLE_MON_SIZE)?;
        Ok(Some(BattleSnapshot::parse(flags, weather, &mons)?))
    }

    /// Read every field; a failure leaves only that field `None`
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            version: Some(self.layout.version),
            trainer: field("trainer", self.trainer()),
            party: field("party", self.party()),
            bag: field("bag", self.bag()),
            badges: field("badges", self.badges()),
            options: field("options", self.options()),
            pokedex: field("pokedex", self.pokedex()),
            battle: field("battle", self.battle()).flatten(),
        }
    }
}

fn field<T>(name: &'static str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) if e.is_not_ready() => {
            tracing::debug!(field = name, error = %e, "field not ready");
            None
        }
        Err(e) => {
            tracing::warn!(field = name, error = %e, "failed to read field");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoenn_codec::{
        Attacks, BattleStats, Growth, Ivs, Misc, PokemonRecord, Stats, Substructures,
        encode_text,
    };

    const SB1: u32 = 0x0202_5A00;
    const SB2: u32 = 0x0202_4EA4;

    fn record(species: u16, personality: u32) -> PokemonRecord {
        let growth = Growth {
            species,
            held_item: 0,
            experience: 135,
            pp_bonuses: 0,
            friendship: 70,
        };
        let attacks = Attacks {
            moves: [33, 45, 0, 0],
            pp: [35, 40, 0, 0],
        };
        let misc = Misc {
            pokerus: 0,
            met_location: 16,
            origins: 0,
            ivs: Ivs::default(),
            is_egg: false,
            ability_slot: 0,
            ribbons: 0,
        };
        PokemonRecord {
            personality,
            ot_id: 0x0000_3039,
            nickname: "MUDKIP".to_string(),
            language: 2,
            ot_name: "MAY".to_string(),
            markings: 0,
            checksum: 0,
            substructures: Substructures::from_blocks(
                growth.to_block(),
                attacks.to_block(),
                [0u8; 12],
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

    /// Emerald image with a loaded save
    fn loaded_image() -> MemoryImage {
        let layout = MemoryLayout::emerald();
        let key = 0xA1B2_C3D4u32;
        let mut image = MemoryImage::new();
        image.write(ROM_GAME_CODE_ADDR, b"BPEE").unwrap();
        image.write_u32(layout.save_block1_ptr, SB1).unwrap();
        image.write_u32(layout.save_block2_ptr, SB2).unwrap();

        image.write(SB2, &encode_text("MAY", 8)).unwrap();
        image.write_u16(SB2 + 0x0A, 12345).unwrap();
        image.write_u32(SB2 + layout.security_key_offset.unwrap() as u32, key).unwrap();
        image.write(SB2 + layout.options_offset as u32, &[0x02]).unwrap();
        image.write(SB2 + layout.pokedex_owned_offset as u32, &[0b1000_0000, 0, 0, 0]).unwrap();

        image.write_u32(SB1 + layout.money_offset as u32, 3000 ^ key).unwrap();
        image.write_u32(SB1 + layout.party_count_offset as u32, 1).unwrap();
        image.write(SB1 + layout.party_offset as u32, &record(283, 0x1234_5678).encode()).unwrap();
        // Poke Ball x5 in the first ball slot
        let balls = SB1 + layout.bag.poke_balls.offset as u32;
        image.write_u16(balls, 4).unwrap();
        image.write_u16(balls + 2, 5 ^ (key & 0xFFFF) as u16).unwrap();
        image
    }

    #[test]
    fn test_detect_version() {
        let image = loaded_image();
        assert_eq!(detect_version(&image).unwrap(), Some(GameVersion::Emerald));
        let reader = GameReader::detect(&image).unwrap().unwrap();
        assert_eq!(reader.layout().version, GameVersion::Emerald);

        let mut unknown = MemoryImage::new();
        unknown.write(ROM_GAME_CODE_ADDR, b"AGBJ").unwrap();
        assert_eq!(detect_version(&unknown).unwrap(), None);
        assert!(matches!(detect_version(&MemoryImage::new()), Err(ReadError::Source(_))));
    }

    #[test]
    fn test_null_pointers_are_not_ready() {
        let reader = GameReader::new(MemoryImage::new(), MemoryLayout::emerald());
        let err = reader.trainer().unwrap_err();
        assert!(err.is_not_ready());
        assert_eq!(err, ReadError::Codec(CodecError::InvalidPointer { address: 0 }));
    }

    #[test]
    fn test_iwram_pointer_rejected() {
        let mut image = MemoryImage::new();
        let layout = MemoryLayout::emerald();
        image.write_u32(layout.save_block1_ptr, 0x0300_1000).unwrap();
        image.write_u32(layout.save_block2_ptr, SB2).unwrap();
        let reader = GameReader::new(image, layout);
        assert!(reader.save_blocks().unwrap_err().is_not_ready());
    }

    #[test]
    fn test_trainer_money_uses_current_key() {
        let mut image = loaded_image();
        let reader = GameReader::new(image.clone(), MemoryLayout::emerald());
        let trainer = reader.trainer().unwrap();
        assert_eq!(trainer.name, "MAY");
        assert_eq!(trainer.trainer_id, 12345);
        assert_eq!(trainer.money, 3000);

        // re-keyed save: a fresh read must use the new key
        let layout = MemoryLayout::emerald();
        let key = 0x0F0F_0F0Fu32;
        image.write_u32(SB2 + layout.security_key_offset.unwrap() as u32, key).unwrap();
        image.write_u32(SB1 + layout.money_offset as u32, 3000 ^ key).unwrap();
        let reader = GameReader::new(image, layout);
        assert_eq!(reader.trainer().unwrap().money, 3000);
    }

    #[test]
    fn test_party_and_bag() {
        let reader = GameReader::new(loaded_image(), MemoryLayout::emerald());
        let party = reader.party().unwrap();
        assert_eq!(party.len(), 1);
        let mudkip = party.get(0).unwrap();
        assert_eq!(mudkip.species(), 283);
        assert_eq!(mudkip.level(), Some(5));

        let bag = reader.bag().unwrap();
        assert_eq!(bag.poke_ball_count(), 5);
    }

    #[test]
    fn test_badges_options_pokedex() {
        let reader = GameReader::new(loaded_image(), MemoryLayout::emerald());
        assert_eq!(reader.badges().unwrap().count(), 0);
        let options = reader.options().unwrap();
        assert_eq!(options.raw, 0x02);
        let dex = reader.pokedex().unwrap();
        assert!(dex.is_owned(8));
        assert_eq!(dex.owned_count(), 1);
    }

    #[test]
    fn test_battle_outside_battle() {
        let reader = GameReader::new(loaded_image(), MemoryLayout::emerald());
        assert_eq!(reader.battle().unwrap(), None);
    }

    #[test]
    fn test_battle_globals() {
        let layout = MemoryLayout::emerald();
        let mut image = loaded_image();
        image.write_u32(layout.battle_type_flags_addr, 0x08).unwrap();
        let mut mon = [0u8; BATTLE_MON_SIZE];
        mon[0..2].copy_from_slice(&283u16.to_le_bytes());
        mon[0x2A] = 5;
        image.write(layout.battle_mons_addr, &mon).unwrap();
        mon[0..2].copy_from_slice(&286u16.to_le_bytes());
        image.write(layout.battle_mons_addr + BATTLE_MON_SIZE as u32, &mon).unwrap();

        let reader = GameReader::new(image, layout);
        let battle = reader.battle().unwrap().unwrap();
        assert!(battle.flags.is_trainer());
        assert_eq!(battle.player().map(|m| m.species), Some(283));
        assert_eq!(battle.opponent().map(|m| m.species), Some(286));
    }

    #[test]
    fn test_snapshot_fields_are_independent() {
        let layout = MemoryLayout::emerald();
        let mut image = loaded_image();
        // corrupt the party count; everything else must still read
        image.write_u32(SB1 + layout.party_count_offset as u32, 9).unwrap();
        let reader = GameReader::new(image, layout);
        let snapshot = reader.snapshot();
        assert!(snapshot.party.is_none());
        assert_eq!(snapshot.trainer.map(|t| t.money), Some(3000));
        assert!(snapshot.bag.is_some());
        assert!(snapshot.badges.is_some());
        assert!(snapshot.pokedex.is_some());
        assert_eq!(snapshot.version, Some(GameVersion::Emerald));
        assert_eq!(snapshot.battle, None);
    }

    #[test]
    fn test_layout_past_ewram_is_rejected() {
        let mut layout = MemoryLayout::emerald();
        layout.party_offset = usize::MAX - 10;
        assert_eq!(
            check_layout(&layout),
            Err(ReadError::LayoutOutOfRange {
                field: "party_offset",
                offset: usize::MAX - 10
            })
        );
        let reader = GameReader::new(loaded_image(), layout);
        assert!(matches!(reader.party(), Err(ReadError::LayoutOutOfRange { .. })));
        assert!(matches!(reader.trainer(), Err(ReadError::LayoutOutOfRange { .. })));
        // fields that do not touch the bad offset still read
        assert!(reader.pokedex().is_ok());

        let mut layout = MemoryLayout::emerald();
        layout.bag.berries.capacity = usize::MAX / 2;
        assert!(check_layout(&layout).is_err());
        assert!(check_layout(&MemoryLayout::fire_red_leaf_green()).is_ok());
    }

    #[test]
    fn test_snapshot_before_save_load() {
        let snapshot = GameReader::new(MemoryImage::new(), MemoryLayout::emerald()).snapshot();
        assert!(snapshot.trainer.is_none());
        assert!(snapshot.party.is_none());
        assert!(snapshot.options.is_none());
        assert_eq!(snapshot.battle, None);
    }
}
