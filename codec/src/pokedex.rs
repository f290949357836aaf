//! Owned/seen bitfields, indexed by national dex number

use crate::Result;
use crate::bytes;
use crate::layout::{MemoryLayout, POKEDEX_LEN};

/// Highest national dex number in Generation 3
pub const NATIONAL_DEX_MAX: u16 = 386;

/// Size of the Hoenn regional dex in Ruby, Sapphire and Emerald
pub const HOENN_DEX_MAX: u16 = 202;

/// National number for each regional entry, index = regional number - 1
#[rustfmt::skip]
const HOENN_TO_NATIONAL: [u16; HOENN_DEX_MAX as usize] = [
    252, 253, 254, 255, 256, 257, 258, 259, 260, 261,
    262, 263, 264, 265, 266, 267, 268, 269, 270, 271,
    272, 273, 274, 275, 276, 277, 278, 279, 280, 281,
    282, 283, 284, 285, 286, 287, 288, 289, 63, 64,
    65, 290, 291, 292, 293, 294, 295, 296, 297, 118,
    119, 129, 130, 298, 183, 184, 74, 75, 76, 299,
    300, 301, 41, 42, 169, 72, 73, 302, 303, 304,
    305, 306, 66, 67, 68, 307, 308, 309, 310, 311,
    312, 81, 82, 100, 101, 313, 314, 43, 44, 45,
    182, 84, 85, 315, 316, 317, 318, 319, 320, 321,
    322, 323, 218, 219, 324, 88, 89, 109, 110, 325,
    326, 27, 28, 327, 227, 328, 329, 330, 331, 332,
    333, 334, 335, 336, 337, 338, 339, 340, 341, 342,
    343, 344, 345, 346, 347, 348, 174, 39, 40, 349,
    350, 351, 120, 121, 352, 353, 354, 355, 356, 357,
    358, 359, 37, 38, 172, 25, 26, 54, 55, 360,
    202, 177, 178, 203, 231, 232, 127, 214, 111, 112,
    361, 362, 363, 364, 365, 366, 367, 368, 369, 222,
    170, 171, 370, 116, 117, 230, 371, 372, 373, 374,
    375, 376, 377, 378, 379, 380, 381, 382, 383, 384,
    385, 386,
];

/// Regional number (1-based) to national number
pub fn hoenn_to_national(hoenn: u16) -> Option<u16> {
    let index = usize::from(hoenn).checked_sub(1)?;
    HOENN_TO_NATIONAL.get(index).copied()
}

/// National number to regional number, `None` outside the Hoenn dex
pub fn national_to_hoenn(national: u16) -> Option<u16> {
    HOENN_TO_NATIONAL
        .iter()
        .position(|&n| n == national)
        .and_then(|i| u16::try_from(i + 1).ok())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pokedex {
    owned: Vec<u8>,
    seen: Vec<u8>,
}

fn bit(field: &[u8], national: u16) -> bool {
    if national == 0 {
        return false;
    }
    let index = usize::from(national - 1);
    field
        .get(index / 8)
        .is_some_and(|byte| byte & (1 << (index % 8)) != 0)
}

impl Pokedex {
    pub fn decode(sb2: &[u8], layout: &MemoryLayout) -> Result<Self> {
        Ok(Self::from_bitfields(
            bytes::slice(sb2, layout.pokedex_owned_offset, POKEDEX_LEN, "pokedex owned")?,
            bytes::slice(sb2, layout.pokedex_seen_offset, POKEDEX_LEN, "pokedex seen")?,
        ))
    }

    pub fn from_bitfields(owned: &[u8], seen: &[u8]) -> Self {
        Self {
            owned: owned.to_vec(),
            seen: seen.to_vec(),
        }
    }

    pub fn is_owned(&self, national: u16) -> bool {
        bit(&self.owned, national)
    }

    pub fn is_seen(&self, national: u16) -> bool {
        bit(&self.seen, national)
    }

    pub fn owned(&self) -> impl Iterator<Item = u16> + '_ {
        (1..=NATIONAL_DEX_MAX).filter(|&n| self.is_owned(n))
    }

    pub fn owned_count(&self) -> usize {
        self.owned().count()
    }

    pub fn seen_count(&self) -> usize {
        (1..=NATIONAL_DEX_MAX).filter(|&n| self.is_seen(n)).count()
    }

    /// Owned entries of the regional dex, as national numbers in regional order
    pub fn hoenn_owned(&self) -> impl Iterator<Item = u16> + '_ {
        HOENN_TO_NATIONAL.iter().copied().filter(|&n| self.is_owned(n))
    }

    pub fn hoenn_owned_count(&self) -> usize {
        self.hoenn_owned().count()
    }

    pub fn hoenn_seen_count(&self) -> usize {
        HOENN_TO_NATIONAL.iter().filter(|&&n| self.is_seen(n)).count()
    }
}
