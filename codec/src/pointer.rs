//! Pointer validation and tagged raw buffers

use crate::{CodecError, Result};

pub const EWRAM_START: u32 = 0x0200_0000;
pub const EWRAM_SIZE: u32 = 0x0004_0000;
pub const EWRAM_END: u32 = EWRAM_START + EWRAM_SIZE - 1;

pub const IWRAM_START: u32 = 0x0300_0000;
pub const IWRAM_SIZE: u32 = 0x0000_8000;

pub fn is_ewram(address: u32) -> bool {
    (EWRAM_START..=EWRAM_END).contains(&address)
}

/// Accept only pointers into EWRAM.
///
/// Save block pointers read as 0 or garbage until the game has loaded a
/// save, so anything else means "not ready".
pub fn check_pointer(address: u32) -> Result<u32> {
    if is_ewram(address) {
        Ok(address)
    } else {
        Err(CodecError::InvalidPointer { address })
    }
}

/// Bytes read from a known address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSection<'a> {
    pub address: u32,
    pub bytes: &'a [u8],
}

impl<'a> RawSection<'a> {
    pub fn new(address: u32, bytes: &'a [u8]) -> Self {
        Self { address, bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Sub-slice by absolute address
    pub fn at(&self, address: u32, len: usize) -> Option<&'a [u8]> {
        let start = usize::try_from(address.checked_sub(self.address)?).ok()?;
        self.bytes.get(start..start.checked_add(len)?)
    }
}
