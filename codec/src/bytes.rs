//! Little-endian field access with length checks

use crate::{CodecError, Result};

pub(crate) fn slice<'a>(buf: &'a [u8], offset: usize, len: usize, what: &'static str) -> Result<&'a [u8]> {
    let end = offset.checked_add(len).unwrap_or(usize::MAX);
    buf.get(offset..end).ok_or(CodecError::Truncated {
        what,
        needed: end,
        actual: buf.len(),
    })
}

pub(crate) fn array<const N: usize>(buf: &[u8], offset: usize, what: &'static str) -> Result<[u8; N]> {
    let bytes = slice(buf, offset, N, what)?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}

pub(crate) fn u8_at(buf: &[u8], offset: usize, what: &'static str) -> Result<u8> {
    Ok(array::<1>(buf, offset, what)?[0])
}

pub(crate) fn u16_at(buf: &[u8], offset: usize, what: &'static str) -> Result<u16> {
    Ok(u16::from_le_bytes(array(buf, offset, what)?))
}

pub(crate) fn u32_at(buf: &[u8], offset: usize, what: &'static str) -> Result<u32> {
    Ok(u32::from_le_bytes(array(buf, offset, what)?))
}

/// Infallible reads for buffers whose length is fixed by the type
pub(crate) fn le_u16(buf: &[u8; 12], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

pub(crate) fn le_u32(buf: &[u8; 12], offset: usize) -> u32 {
    u32::from_le_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]])
}
