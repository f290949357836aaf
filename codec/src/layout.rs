//! Per-game addresses and offsets
//!
//! Offsets into Save Block 1 and Save Block 2 are relative to the start of
//! the block, which is also how they appear in a flash save once the
//! sections are stitched together. Absolute addresses are GBA bus addresses.

/// Game family. Paired versions share a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameVersion {
    #[cfg_attr(feature = "serde", serde(alias = "ruby", alias = "sapphire"))]
    RubySapphire,
    Emerald,
    #[cfg_attr(feature = "serde", serde(alias = "frlg", alias = "firered", alias = "leafgreen"))]
    FireRedLeafGreen,
}

/// Address of the 4-byte game code in the ROM header
pub const ROM_GAME_CODE_ADDR: u32 = 0x0800_00AC;

impl GameVersion {
    /// Identify the game from the ROM header's game code
    pub fn from_game_code(code: &[u8]) -> Option<Self> {
        match code.get(..4)? {
            b"BPEE" => Some(GameVersion::Emerald),
            b"AXVE" | b"AXPE" => Some(GameVersion::RubySapphire),
            b"BPRE" | b"BPGE" => Some(GameVersion::FireRedLeafGreen),
            _ => None,
        }
    }

    pub fn layout(&self) -> MemoryLayout {
        match self {
            GameVersion::RubySapphire => MemoryLayout::ruby_sapphire(),
            GameVersion::Emerald => MemoryLayout::emerald(),
            GameVersion::FireRedLeafGreen => MemoryLayout::fire_red_leaf_green(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameVersion::RubySapphire => "Ruby/Sapphire",
            GameVersion::Emerald => "Emerald",
            GameVersion::FireRedLeafGreen => "FireRed/LeafGreen",
        }
    }
}

impl std::fmt::Display for GameVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One bag pocket: offset in Save Block 1 and slot count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PocketLayout {
    pub offset: usize,
    pub capacity: usize,
}

impl PocketLayout {
    pub const fn new(offset: usize, capacity: usize) -> Self {
        Self { offset, capacity }
    }

    /// Size in bytes (4 per slot)
    pub fn byte_len(&self) -> usize {
        self.capacity.saturating_mul(4)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BagLayout {
    pub items: PocketLayout,
    pub key_items: PocketLayout,
    pub poke_balls: PocketLayout,
    pub tms_hms: PocketLayout,
    pub berries: PocketLayout,
}

/// Where everything lives for one game family
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryLayout {
    pub version: GameVersion,

    // IWRAM pointers to the save blocks
    pub save_block1_ptr: u32,
    pub save_block2_ptr: u32,
    pub pokemon_storage_ptr: u32,

    // Save Block 2
    /// `None` for games without money/item encryption
    pub security_key_offset: Option<usize>,
    pub options_offset: usize,
    pub pokedex_owned_offset: usize,
    pub pokedex_seen_offset: usize,

    // Save Block 1
    pub party_count_offset: usize,
    pub party_offset: usize,
    pub money_offset: usize,
    pub coins_offset: usize,
    pub bag: BagLayout,
    pub event_flags_offset: usize,
    /// Flag ID of the first gym badge; the other seven follow
    pub badge_flag_base: u16,

    // Battle globals (EWRAM)
    pub battle_type_flags_addr: u32,
    pub battle_mons_addr: u32,
    pub battle_weather_addr: Option<u32>,
}

/// Size of the event flag bitmap in bytes
pub const EVENT_FLAGS_LEN: usize = 300;

/// Bytes per Pokedex bitfield
pub const POKEDEX_LEN: usize = 49;

/// Offset of the options byte in Save Block 2
const OPTIONS_OFFSET: usize = 0x13;

impl MemoryLayout {
    pub fn emerald() -> Self {
        Self {
            version: GameVersion::Emerald,
            save_block1_ptr: 0x0300_5D8C,
            save_block2_ptr: 0x0300_5D90,
            pokemon_storage_ptr: 0x0300_5D94,
            security_key_offset: Some(0xAC),
            options_offset: OPTIONS_OFFSET,
            pokedex_owned_offset: 0x28,
            pokedex_seen_offset: 0x5C,
            party_count_offset: 0x234,
            party_offset: 0x238,
            money_offset: 0x490,
            coins_offset: 0x494,
            bag: BagLayout {
                items: PocketLayout::new(0x560, 30),
                key_items: PocketLayout::new(0x5D8, 30),
                poke_balls: PocketLayout::new(0x650, 16),
                tms_hms: PocketLayout::new(0x690, 64),
                berries: PocketLayout::new(0x790, 46),
            },
            event_flags_offset: 0x1270,
            badge_flag_base: 0x867,
            battle_type_flags_addr: 0x0202_2FEC,
            battle_mons_addr: 0x0202_4084,
            battle_weather_addr: Some(0x0202_4DB8),
        }
    }

    pub fn ruby_sapphire() -> Self {
        Self {
            version: GameVersion::RubySapphire,
            save_block1_ptr: 0x0300_5D90,
            save_block2_ptr: 0x0300_5D94,
            pokemon_storage_ptr: 0x0300_5D98,
            security_key_offset: None,
            options_offset: OPTIONS_OFFSET,
            pokedex_owned_offset: 0x28,
            pokedex_seen_offset: 0x5C,
            party_count_offset: 0x234,
            party_offset: 0x238,
            money_offset: 0x490,
            coins_offset: 0x494,
            bag: BagLayout {
                items: PocketLayout::new(0x560, 20),
                key_items: PocketLayout::new(0x5B0, 20),
                poke_balls: PocketLayout::new(0x600, 16),
                tms_hms: PocketLayout::new(0x640, 64),
                berries: PocketLayout::new(0x740, 46),
            },
            event_flags_offset: 0x1220,
            badge_flag_base: 0x807,
            battle_type_flags_addr: 0x0202_39FC,
            battle_mons_addr: 0x0202_4BE0,
            battle_weather_addr: None,
        }
    }

    pub fn fire_red_leaf_green() -> Self {
        Self {
            version: GameVersion::FireRedLeafGreen,
            save_block1_ptr: 0x0300_5008,
            save_block2_ptr: 0x0300_500C,
            pokemon_storage_ptr: 0x0300_5010,
            security_key_offset: Some(0xF20),
            options_offset: OPTIONS_OFFSET,
            pokedex_owned_offset: 0x28,
            pokedex_seen_offset: 0x5C,
            party_count_offset: 0x34,
            party_offset: 0x38,
            money_offset: 0x290,
            coins_offset: 0x294,
            bag: BagLayout {
                items: PocketLayout::new(0x310, 42),
                key_items: PocketLayout::new(0x3B8, 30),
                poke_balls: PocketLayout::new(0x430, 13),
                tms_hms: PocketLayout::new(0x464, 58),
                berries: PocketLayout::new(0x54C, 43),
            },
            event_flags_offset: 0xEE0,
            badge_flag_base: 0x820,
            battle_type_flags_addr: 0x0202_2B4C,
            battle_mons_addr: 0x0202_3BE4,
            battle_weather_addr: None,
        }
    }

    pub fn for_version(version: GameVersion) -> Self {
        version.layout()
    }
}

impl Default for MemoryLayout {
    fn default() -> Self {
        Self::emerald()
    }
}
