//! Bounded-width interop encodings.
//!
//! Legacy consumers exchange hole lists as a packed `u16` array of the
//! form `[count, offset0, length0, offset1, length1, ...]`, and the
//! occupancy bitmap as its bytes prefixed with a two-byte little-endian
//! byte count. Both widths are narrower than the pool's native `u32`
//! words, so every encode validates and fails loudly on overflow
//! instead of wrapping.

use lacuna_core::Hole;
use lacuna_pool::OccupancyBitmap;

use crate::error::WireError;

const U16_MAX: u64 = u16::MAX as u64;

/// Encode a hole list in the packed `u16` interop format.
///
/// Returns `[count, offset0, length0, ...]`. Any count, offset, or
/// length above `u16::MAX` yields [`WireError::ValueOutOfRange`].
pub fn pack_holes(holes: &[Hole]) -> Result<Vec<u16>, WireError> {
    let count = holes.len();
    if count as u64 > U16_MAX {
        return Err(WireError::ValueOutOfRange {
            field: "count",
            value: count as u64,
        });
    }

    let mut packed = Vec::with_capacity(1 + 2 * count);
    packed.push(count as u16);
    for hole in holes {
        packed.push(narrow(hole.offset, "offset")?);
        packed.push(narrow(hole.length, "length")?);
    }
    Ok(packed)
}

/// Decode a packed `u16` hole list, validating its shape.
pub fn unpack_holes(packed: &[u16]) -> Result<Vec<Hole>, WireError> {
    let Some(&count) = packed.first() else {
        return Err(WireError::MissingCount);
    };
    let expected = 1 + 2 * usize::from(count);
    if packed.len() != expected {
        return Err(WireError::LengthMismatch {
            expected,
            actual: packed.len(),
        });
    }

    Ok(packed[1..]
        .chunks_exact(2)
        .map(|pair| Hole::new(u32::from(pair[0]), u32::from(pair[1])))
        .collect())
}

/// Encode an occupancy bitmap as `[byte_count_lo, byte_count_hi, bits...]`.
///
/// The two-byte little-endian prefix carries the bitmap's byte count;
/// bitmaps larger than `u16::MAX` bytes fail loudly.
pub fn pack_bitmap(bitmap: &OccupancyBitmap) -> Result<Vec<u8>, WireError> {
    let bytes = bitmap.as_bytes();
    if bytes.len() as u64 > U16_MAX {
        return Err(WireError::ValueOutOfRange {
            field: "bitmap byte count",
            value: bytes.len() as u64,
        });
    }

    let mut packed = Vec::with_capacity(2 + bytes.len());
    packed.extend_from_slice(&(bytes.len() as u16).to_le_bytes());
    packed.extend_from_slice(bytes);
    Ok(packed)
}

fn narrow(value: u32, field: &'static str) -> Result<u16, WireError> {
    u16::try_from(value).map_err(|_| WireError::ValueOutOfRange {
        field,
        value: u64::from(value),
    })
}
