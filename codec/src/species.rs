//! Internal species indices
//!
//! Generation 3 stores species by an internal index. Kanto and Johto species
//! (1..=251) use their national number directly. Hoenn species sit at
//! 277..=411 in an order that differs from the national dex, and 252..=276
//! are unused placeholders.

use crate::{CodecError, Result};

/// First internal index of the Hoenn block
pub const HOENN_START: u16 = 277;

/// Last valid internal index
pub const LAST_INTERNAL: u16 = 411;

/// National numbers for internal indices `277..=411`
static HOENN_NATIONAL: [u16; 135] = [
    252, 253, 254, 255, 256, 257, 258, 259, 260, 261, 262, 263,
    264, 265, 266, 267, 268, 269, 270, 271, 272, 273, 274, 275,
    290, 291, 292, 276, 277, 285, 286, 327, 278, 279, 283, 284,
    320, 321, 300, 301, 352, 343, 344, 299, 324, 302, 339, 340,
    370, 341, 342, 349, 350, 318, 319, 328, 329, 330, 296, 297,
    309, 310, 322, 323, 363, 364, 365, 331, 332, 361, 362, 337,
    338, 298, 325, 326, 311, 312, 303, 307, 308, 333, 334, 360,
    355, 356, 315, 287, 288, 289, 316, 317, 357, 293, 294, 295,
    366, 367, 368, 359, 353, 354, 336, 335, 369, 304, 305, 306,
    351, 313, 314, 345, 346, 347, 348, 280, 281, 282, 371, 372,
    373, 374, 375, 376, 377, 378, 379, 382, 383, 384, 380, 381,
    385, 386, 358,
];

/// Whether an internal index names a real species
pub fn is_valid_species(internal: u16) -> bool {
    matches!(internal, 1..=251 | HOENN_START..=LAST_INTERNAL)
}

/// Convert an internal index to its national dex number
pub fn national_dex(internal: u16) -> Option<u16> {
    match internal {
        1..=251 => Some(internal),
        HOENN_START..=LAST_INTERNAL => HOENN_NATIONAL.get(usize::from(internal - HOENN_START)).copied(),
        _ => None,
    }
}

/// Convert a national dex number back to the internal index
pub fn internal_index(national: u16) -> Option<u16> {
    match national {
        1..=251 => Some(national),
        252..=386 => HOENN_NATIONAL
            .iter()
            .position(|&n| n == national)
            .map(|pos| HOENN_START + pos as u16),
        _ => None,
    }
}

/// Validate a decrypted species ID
///
/// 0 is an empty slot; anything else outside the known ranges is corruption.
pub fn check_species(internal: u16) -> Result<u16> {
    match internal {
        0 => Err(CodecError::EmptySlot),
        id if is_valid_species(id) => Ok(id),
        id => Err(CodecError::UnknownSpecies(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kanto_johto_are_identity() {
        assert_eq!(national_dex(1), Some(1));
        assert_eq!(national_dex(151), Some(151));
        assert_eq!(national_dex(251), Some(251));
    }

    #[test]
    fn test_hoenn_mapping() {
        assert_eq!(national_dex(277), Some(252)); // Treecko
        assert_eq!(national_dex(283), Some(258)); // Mudkip
        assert_eq!(national_dex(286), Some(261)); // Poochyena
        assert_eq!(national_dex(334), Some(330)); // Flygon
        assert_eq!(national_dex(411), Some(358)); // Chimecho
    }

    #[test]
    fn test_placeholders_are_invalid() {
        for id in 252..277 {
            assert!(!is_valid_species(id));
            assert_eq!(national_dex(id), None);
        }
        assert!(!is_valid_species(0));
        assert!(!is_valid_species(412));
    }

    #[test]
    fn test_hoenn_table_is_a_bijection() {
        let mut seen = [false; 387];
        for internal in HOENN_START..=LAST_INTERNAL {
            let national = national_dex(internal).unwrap();
            assert!((252..=386).contains(&national));
            assert!(!seen[national as usize], "duplicate {national}");
            seen[national as usize] = true;
            assert_eq!(internal_index(national), Some(internal));
        }
    }

    #[test]
    fn test_check_species() {
        assert_eq!(check_species(0), Err(CodecError::EmptySlot));
        assert_eq!(check_species(260), Err(CodecError::UnknownSpecies(260)));
        assert_eq!(check_species(0xFFFF), Err(CodecError::UnknownSpecies(0xFFFF)));
        assert_eq!(check_species(25), Ok(25));
    }
}
