//! Byte sources: anything that can answer "give me N bytes at address A"

use std::collections::BTreeMap;

use hoenn_codec::pointer::{EWRAM_SIZE, EWRAM_START, IWRAM_SIZE, IWRAM_START};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("{len} bytes at {address:#010x} are not mapped")]
    Unmapped { address: u32, len: usize },

    #[error("read of {len} bytes at {address:#010x} failed: {reason}")]
    Failed {
        address: u32,
        len: usize,
        reason: String,
    },
}

/// Random-access view of GBA memory.
///
/// Implementations wrap an emulator connection, a dump or a test fixture.
/// Reads are little-endian.
pub trait MemorySource {
    /// Read exactly `len` bytes starting at `address`
    fn read_range(&self, address: u32, len: usize) -> Result<Vec<u8>, SourceError>;

    fn read_u8(&self, address: u32) -> Result<u8, SourceError> {
        let [b] = read_array::<Self, 1>(self, address)?;
        Ok(b)
    }

    fn read_u16(&self, address: u32) -> Result<u16, SourceError> {
        read_array(self, address).map(u16::from_le_bytes)
    }

    fn read_u32(&self, address: u32) -> Result<u32, SourceError> {
        read_array(self, address).map(u32::from_le_bytes)
    }
}

fn read_array<S: MemorySource + ?Sized, const N: usize>(source: &S, address: u32) -> Result<[u8; N], SourceError> {
    let bytes = source.read_range(address, N)?;
    bytes.try_into().map_err(|short: Vec<u8>| SourceError::Failed {
        address,
        len: N,
        reason: format!("source returned {} bytes", short.len()),
    })
}

impl<S: MemorySource + ?Sized> MemorySource for &S {
    fn read_range(&self, address: u32, len: usize) -> Result<Vec<u8>, SourceError> {
        (**self).read_range(address, len)
    }
}

/// Which part of the bus an address falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryRegion {
    /// On-chip work RAM, 32 KiB at `0x0300_0000`
    Iwram,
    /// On-board work RAM, 256 KiB at `0x0200_0000`
    Ewram,
    /// ROM, I/O and everything else
    Bus,
}

impl MemoryRegion {
    pub fn of(address: u32) -> Self {
        if (IWRAM_START..IWRAM_START + IWRAM_SIZE).contains(&address) {
            MemoryRegion::Iwram
        } else if (EWRAM_START..EWRAM_START + EWRAM_SIZE).contains(&address) {
            MemoryRegion::Ewram
        } else {
            MemoryRegion::Bus
        }
    }

    /// Start address and size; `None` for the bus
    pub fn bounds(&self) -> Option<(u32, u32)> {
        match self {
            MemoryRegion::Iwram => Some((IWRAM_START, IWRAM_SIZE)),
            MemoryRegion::Ewram => Some((EWRAM_START, EWRAM_SIZE)),
            MemoryRegion::Bus => None,
        }
    }
}

fn bus_address(base: u32, index: usize) -> Option<u32> {
    base.checked_add(u32::try_from(index).ok()?)
}

/// Owned copy of work RAM plus sparse bus bytes (ROM header and the like).
///
/// Reads may not straddle a region boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryImage {
    iwram: Vec<u8>,
    ewram: Vec<u8>,
    bus: BTreeMap<u32, u8>,
}

impl Default for MemoryImage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryImage {
    /// Zeroed work RAM, nothing on the bus
    pub fn new() -> Self {
        Self::from_dumps(Vec::new(), Vec::new())
    }

    /// Build from raw dumps; short dumps are zero-padded, long ones truncated
    pub fn from_dumps(mut iwram: Vec<u8>, mut ewram: Vec<u8>) -> Self {
        iwram.resize(IWRAM_SIZE as usize, 0);
        ewram.resize(EWRAM_SIZE as usize, 0);
        Self {
            iwram,
            ewram,
            bus: BTreeMap::new(),
        }
    }

    fn ram(&self, region: MemoryRegion) -> Option<&[u8]> {
        match region {
            MemoryRegion::Iwram => Some(&self.iwram),
            MemoryRegion::Ewram => Some(&self.ewram),
            MemoryRegion::Bus => None,
        }
    }

    pub fn write(&mut self, address: u32, bytes: &[u8]) -> Result<(), SourceError> {
        let region = MemoryRegion::of(address);
        let unmapped = SourceError::Unmapped {
            address,
            len: bytes.len(),
        };
        if let Some((start, _)) = region.bounds() {
            let ram = match region {
                MemoryRegion::Iwram => &mut self.iwram,
                _ => &mut self.ewram,
            };
            let offset = (address - start) as usize;
            let dest = ram
                .get_mut(offset..offset.saturating_add(bytes.len()))
                .ok_or(unmapped)?;
            dest.copy_from_slice(bytes);
            return Ok(());
        }
        for (i, &b) in bytes.iter().enumerate() {
            let addr = bus_address(address, i).ok_or_else(|| unmapped.clone())?;
            self.bus.insert(addr, b);
        }
        Ok(())
    }

    pub fn write_u16(&mut self, address: u32, value: u16) -> Result<(), SourceError> {
        self.write(address, &value.to_le_bytes())
    }

    pub fn write_u32(&mut self, address: u32, value: u32) -> Result<(), SourceError> {
        self.write(address, &value.to_le_bytes())
    }
}

impl MemorySource for MemoryImage {
    fn read_range(&self, address: u32, len: usize) -> Result<Vec<u8>, SourceError> {
        let region = MemoryRegion::of(address);
        let unmapped = SourceError::Unmapped { address, len };
        match (region.bounds(), self.ram(region)) {
            (Some((start, _)), Some(ram)) => {
                let offset = (address - start) as usize;
                ram.get(offset..offset.saturating_add(len))
                    .map(<[u8]>::to_vec)
                    .ok_or(unmapped)
            }
            _ => (0..len)
                .map(|i| bus_address(address, i).and_then(|addr| self.bus.get(&addr).copied()))
                .collect::<Option<Vec<u8>>>()
                .ok_or(unmapped),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_regions() {
        assert_eq!(MemoryRegion::of(0x0300_5D8C), MemoryRegion::Iwram);
        assert_eq!(MemoryRegion::of(0x0300_8000), MemoryRegion::Bus);
        assert_eq!(MemoryRegion::of(0x0202_4084), MemoryRegion::Ewram);
        assert_eq!(MemoryRegion::of(0x0204_0000), MemoryRegion::Bus);
        assert_eq!(MemoryRegion::of(0x0800_00AC), MemoryRegion::Bus);
    }

    #[test]
    fn test_little_endian_reads() {
        let mut image = MemoryImage::new();
        image.write(0x0200_0010, &[0x78, 0x56, 0x34, 0x12]).unwrap();
        assert_eq!(image.read_u8(0x0200_0010).unwrap(), 0x78);
        assert_eq!(image.read_u16(0x0200_0010).unwrap(), 0x5678);
        assert_eq!(image.read_u32(0x0200_0010).unwrap(), 0x1234_5678);
    }

    #[test]
    fn test_reads_past_region_end_fail() {
        let image = MemoryImage::new();
        assert!(image.read_range(0x0300_7FFE, 2).is_ok());
        assert_eq!(
            image.read_range(0x0300_7FFE, 4),
            Err(SourceError::Unmapped {
                address: 0x0300_7FFE,
                len: 4
            })
        );
    }

    #[test]
    fn test_sparse_bus() {
        let mut image = MemoryImage::new();
        image.write(0x0800_00AC, b"BPEE").unwrap();
        assert_eq!(image.read_range(0x0800_00AC, 4).unwrap(), b"BPEE".to_vec());
        assert!(image.read_range(0x0800_00AC, 5).is_err());
        assert!(image.read_u8(0x0800_0000).is_err());
    }

    #[test]
    fn test_dump_padding() {
        let image = MemoryImage::from_dumps(vec![1, 2, 3], vec![9; 0x5_0000]);
        assert_eq!(image.read_range(0x0300_0000, 4).unwrap(), vec![1, 2, 3, 0]);
        assert!(image.read_u8(0x0203_FFFF).is_ok());
    }

    #[test]
    fn test_write_read_random_offsets() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let mut image = MemoryImage::new();
        for _ in 0..200 {
            let address = EWRAM_START + rng.gen_range(0..EWRAM_SIZE - 4);
            let value: u32 = rng.r#gen();
            image.write_u32(address, value).unwrap();
            assert_eq!(image.read_u32(address).unwrap(), value);
        }
    }

    fn first_word<S: MemorySource>(source: S) -> u16 {
        source.read_u16(0x0300_0000).unwrap()
    }

    #[test]
    fn test_reference_source() {
        let mut image = MemoryImage::new();
        image.write_u16(0x0300_0000, 0xBEEF).unwrap();
        assert_eq!(first_word(&image), 0xBEEF);
        let dynamic: &dyn MemorySource = &image;
        assert_eq!(first_word(dynamic), 0xBEEF);
    }
}
