//! The encrypted 48-byte data block of a Pokemon record
//!
//! The block holds four 12-byte substructures whose physical order is one of
//! 24 permutations chosen by `personality % 24`. Every little-endian word is
//! XORed with `personality ^ ot_id`.

use crate::bytes;
use crate::{CodecError, Result};

/// Size of one substructure in bytes
pub const SUBSTRUCTURE_SIZE: usize = 12;

/// Size of the whole encrypted block
pub const DATA_SIZE: usize = SUBSTRUCTURE_SIZE * 4;

/// Role of a substructure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Substructure {
    /// Species, item, experience, PP bonuses, friendship
    Growth,
    /// Moves and PP
    Attacks,
    /// EVs and contest condition
    Effort,
    /// Pokerus, origins, IVs, ribbons
    Misc,
}

impl Substructure {
    pub const ALL: [Substructure; 4] = [
        Substructure::Growth,
        Substructure::Attacks,
        Substructure::Effort,
        Substructure::Misc,
    ];

    /// Single-letter label (G/A/E/M)
    pub fn letter(&self) -> char {
        match self {
            Substructure::Growth => 'G',
            Substructure::Attacks => 'A',
            Substructure::Effort => 'E',
            Substructure::Misc => 'M',
        }
    }

    fn index(&self) -> usize {
        match self {
            Substructure::Growth => 0,
            Substructure::Attacks => 1,
            Substructure::Effort => 2,
            Substructure::Misc => 3,
        }
    }
}

use Substructure::{Attacks as A, Effort as E, Growth as G, Misc as M};

/// Physical order of the substructures, indexed by `personality % 24`
pub static SUBSTRUCTURE_ORDERS: [[Substructure; 4]; 24] = [
    [G, A, E, M],
    [G, A, M, E],
    [G, E, A, M],
    [G, E, M, A],
    [G, M, A, E],
    [G, M, E, A],
    [A, G, E, M],
    [A, G, M, E],
    [A, E, G, M],
    [A, E, M, G],
    [A, M, G, E],
    [A, M, E, G],
    [E, G, A, M],
    [E, G, M, A],
    [E, A, G, M],
    [E, A, M, G],
    [E, M, G, A],
    [E, M, A, G],
    [M, G, A, E],
    [M, G, E, A],
    [M, A, G, E],
    [M, A, E, G],
    [M, E, G, A],
    [M, E, A, G],
];

/// Decrypted substructures keyed by role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Substructures {
    blocks: [[u8; SUBSTRUCTURE_SIZE]; 4],
}

impl Substructures {
    /// Build from plaintext blocks in G/A/E/M order
    pub fn from_blocks(
        growth: [u8; SUBSTRUCTURE_SIZE],
        attacks: [u8; SUBSTRUCTURE_SIZE],
        effort: [u8; SUBSTRUCTURE_SIZE],
        misc: [u8; SUBSTRUCTURE_SIZE],
    ) -> Self {
        Self {
            blocks: [growth, attacks, effort, misc],
        }
    }

    pub fn get(&self, role: Substructure) -> &[u8; SUBSTRUCTURE_SIZE] {
        &self.blocks[role.index()]
    }

    pub fn get_mut(&mut self, role: Substructure) -> &mut [u8; SUBSTRUCTURE_SIZE] {
        &mut self.blocks[role.index()]
    }

    /// Species ID (internal index), the low half of Growth word 0
    pub fn species(&self) -> u16 {
        bytes::le_u16(self.get(Substructure::Growth), 0)
    }

    /// Held item ID, the high half of Growth word 0
    pub fn held_item(&self) -> u16 {
        bytes::le_u16(self.get(Substructure::Growth), 2)
    }
}

fn xor_words(block: &mut [u8], key: u32) {
    for word in block.chunks_exact_mut(4) {
        let value = u32::from_le_bytes([word[0], word[1], word[2], word[3]]) ^ key;
        word.copy_from_slice(&value.to_le_bytes());
    }
}

/// Decrypt the 48-byte block of a record.
///
/// `data` must start at the encrypted block (record offset `0x20`).
pub fn decrypt_pokemon_substructures(data: &[u8], personality: u32, ot_id: u32) -> Result<Substructures> {
    decrypt_substructures_with_order(data, personality ^ ot_id, (personality % 24) as usize)
}

/// Decrypt with an explicit key and order index.
///
/// An index outside `0..24` returns [`CodecError::InvalidOrder`].
pub fn decrypt_substructures_with_order(data: &[u8], key: u32, order_index: usize) -> Result<Substructures> {
    let order = SUBSTRUCTURE_ORDERS
        .get(order_index)
        .ok_or(CodecError::InvalidOrder(order_index))?;
    let mut plain: [u8; DATA_SIZE] = bytes::array(data, 0, "substructure data")?;
    xor_words(&mut plain, key);

    let mut out = Substructures::default();
    for (slot, role) in order.iter().enumerate() {
        let start = slot * SUBSTRUCTURE_SIZE;
        out.get_mut(*role)
            .copy_from_slice(&plain[start..start + SUBSTRUCTURE_SIZE]);
    }
    Ok(out)
}

/// Lay the substructures out in physical order and encrypt them
pub fn encrypt_pokemon_substructures(subs: &Substructures, personality: u32, ot_id: u32) -> [u8; DATA_SIZE] {
    let order = &SUBSTRUCTURE_ORDERS[(personality % 24) as usize];
    let mut out = [0u8; DATA_SIZE];
    for (slot, role) in order.iter().enumerate() {
        let start = slot * SUBSTRUCTURE_SIZE;
        out[start..start + SUBSTRUCTURE_SIZE].copy_from_slice(subs.get(*role));
    }
    xor_words(&mut out, personality ^ ot_id);
    out
}

/// Checksum over the decrypted data: sum of the 24 u16 words, wrapping
pub fn substructure_checksum(subs: &Substructures) -> u16 {
    subs.blocks
        .iter()
        .flat_map(|block| block.chunks_exact(2))
        .fold(0u16, |acc, pair| acc.wrapping_add(u16::from_le_bytes([pair[0], pair[1]])))
}
