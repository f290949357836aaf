//! Decoders for Generation 3 Pokemon save data and battle memory.
//!
//! Everything in this crate is a pure function over byte buffers that the
//! caller has already fetched, either from a live emulator or from a `.sav`
//! file. Nothing here performs I/O.
//!
//! # Overview
//!
//! ```text
//! emulator memory / .sav file
//!        │
//!        ▼
//! hoenn-codec (decrypt + decode) ← THIS CRATE
//!        │
//!        ├─> hoenn-reader (pointer-gated live reads)
//!        └─> hoenn-battle (decision engine)
//! ```
//!
//! # Main Types
//!
//! - [`PokemonRecord`] - Party or boxed Pokemon with decrypted substructures
//! - [`Substructures`] - The four 12-byte Growth/Attacks/Effort/Misc blocks
//! - [`TrainerInfo`] - Name, IDs, play time, money and coins
//! - [`GameOptions`] - The options byte split into named fields
//! - [`BadgeFlags`] - Gym badges derived from the event flag bitmap
//! - [`Bag`] - Item pockets with decrypted quantities
//! - [`BattleMon`] - The in-battle struct for a single battler
//! - [`SaveFile`] - Section map and save blocks of a flash save
//! - [`MemoryLayout`] - Per-game addresses and offsets
//!
//! # Example Usage
//!
//! ```ignore
//! use hoenn_codec::{MemoryLayout, PokemonRecord, SaveFile};
//!
//! let save = SaveFile::parse(&bytes)?;
//! let layout = MemoryLayout::emerald();
//!
//! let trainer = save.trainer(&layout)?;
//! println!("{} ({:05})", trainer.name, trainer.trainer_id);
//!
//! for (slot, mon) in save.party(&layout)?.iter() {
//!     println!("{slot}: species {} Lv{:?}", mon.species(), mon.level());
//! }
//! ```

mod bytes;

pub mod bag;
pub mod battle;
pub mod flags;
pub mod items;
pub mod layout;
pub mod options;
pub mod pokedex;
pub mod pokemon;
pub mod pointer;
pub mod save;
pub mod species;
pub mod substructure;
pub mod text;
pub mod trainer;

use thiserror::Error;

pub use bag::{Bag, ItemSlot, Pocket, decode_pocket, is_poke_ball};
pub use battle::{BattleKind, BattleMon, BattleSnapshot, BattleTypeFlags, BattleWeatherFlags};
pub use flags::{Badge, BadgeFlags, is_flag_set, read_badge_flags};
pub use items::{ItemCategory, categorize, item_name};
pub use layout::{BagLayout, GameVersion, MemoryLayout, PocketLayout, ROM_GAME_CODE_ADDR};
pub use options::{
    BattleStyle, GameOptions, OptionsLayout, Sound, TextSpeed, read_options, read_options_with,
};
pub use pokedex::{Pokedex, hoenn_to_national, national_to_hoenn};
pub use pokemon::{
    Attacks, BattleStats, Effort, Growth, Ivs, Misc, Nature, Party, PokemonGender, PokemonRecord,
    Stats, decode_party,
};
pub use pointer::{RawSection, check_pointer, is_ewram};
pub use save::{SaveFile, SectionHeader, section_checksum};
pub use species::{check_species, internal_index, is_valid_species, national_dex};
pub use substructure::{
    SUBSTRUCTURE_ORDERS, Substructure, Substructures, decrypt_pokemon_substructures,
    decrypt_substructures_with_order, encrypt_pokemon_substructures, substructure_checksum,
};
pub use text::{decode_text, encode_text};
pub use trainer::{Gender, PlayTime, TrainerInfo, decrypt_coins, decrypt_money, security_key};

/// Errors produced while decoding game data
///
/// Every variant is recoverable: callers treat the affected field as unknown
/// and keep decoding its siblings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("pointer {address:#010x} is outside EWRAM (game not initialized)")]
    InvalidPointer { address: u32 },

    #[error("{what}: need {needed} bytes, got {actual}")]
    Truncated {
        what: &'static str,
        needed: usize,
        actual: usize,
    },

    #[error("substructure order index {0} is out of range")]
    InvalidOrder(usize),

    #[error("party count {0} exceeds 6")]
    PartyCount(u32),

    #[error("empty slot")]
    EmptySlot,

    #[error("unknown species id {0}")]
    UnknownSpecies(u16),

    #[error("section {id} checksum mismatch: stored {stored:#06x}, computed {computed:#06x}")]
    SectionChecksum { id: u16, stored: u16, computed: u16 },

    #[error("save slot is missing section {0}")]
    MissingSection(u16),

    #[error("no valid save slot")]
    NoValidSlot,
}

impl CodecError {
    /// Whether the caller should treat this as "no data yet" and retry later
    pub fn is_not_ready(&self) -> bool {
        matches!(self, CodecError::InvalidPointer { .. })
    }

    /// Whether this marks an unused slot rather than corruption
    pub fn is_empty_slot(&self) -> bool {
        matches!(self, CodecError::EmptySlot)
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
