//! Fixed-layout binary encoding of coordinates, outcomes and grids.
//!
//! Every message has a fixed size, so there is no length prefix: coordinates are
//! 2 bytes, outcomes 1 byte, grids `2 + width * height` bytes. A decoder handed
//! the wrong number of bytes reports [`CodecError::Framing`]; the stream has no
//! way to resynchronise, so callers treat that as fatal.

use alloc::vec::Vec;
use core::{fmt, mem};
use num_traits::{NumCast, PrimInt, Unsigned};

use crate::cell::Cell;
use crate::common::Outcome;
use crate::grid::Grid;

/// Size of an encoded coordinate message.
pub const COORD_MESSAGE_SIZE: usize = 2;
/// Size of an encoded outcome message.
pub const OUTCOME_MESSAGE_SIZE: usize = 1;

/// Size of an encoded grid message for the given dimensions.
pub const fn grid_message_size(width: usize, height: usize) -> usize {
    2 + width * height
}

/// Errors returned by decoders, and by encoders given unencodable input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Message length does not match the fixed size of its type.
    Framing { expected: usize, actual: usize },
    /// Number needs more bytes than the target integer holds.
    NumberOverflow { width: usize, capacity: usize },
    /// Coordinate does not fit the 1-based single-byte encoding.
    CoordinateOutOfRange { x: usize, y: usize },
    /// Grid dimension is zero or wider than one byte.
    DimensionOutOfRange { width: usize, height: usize },
    /// Byte is not a known outcome value.
    UnknownOutcome(u8),
    /// Byte is not a valid cell state.
    InvalidCell(u8),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Framing { expected, actual } => write!(
                f,
                "Framing error: expected {} bytes, got {}",
                expected, actual
            ),
            CodecError::NumberOverflow { width, capacity } => write!(
                f,
                "Number of {} bytes does not fit in {} bytes",
                width, capacity
            ),
            CodecError::CoordinateOutOfRange { x, y } => {
                write!(f, "Coordinate ({}, {}) cannot be encoded", x, y)
            }
            CodecError::DimensionOutOfRange { width, height } => {
                write!(f, "Grid of {}x{} cannot be encoded", width, height)
            }
            CodecError::UnknownOutcome(b) => write!(f, "Unknown outcome byte {:#04x}", b),
            CodecError::InvalidCell(b) => write!(f, "Invalid cell byte {:#04x}", b),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}

#[inline]
fn expect_len(bytes: &[u8], expected: usize) -> Result<(), CodecError> {
    if bytes.len() == expected {
        Ok(())
    } else {
        Err(CodecError::Framing {
            expected,
            actual: bytes.len(),
        })
    }
}

/// Big-endian, minimal-width encoding. Zero encodes as no bytes at all.
pub fn encode_number<T>(n: T) -> Vec<u8>
where
    T: PrimInt + Unsigned,
{
    let bits = mem::size_of::<T>() * 8;
    let width = (bits - n.leading_zeros() as usize).div_ceil(8);
    let low_byte = !T::zero() >> (bits - 8);
    (0..width)
        .rev()
        .filter_map(|i| ((n >> (i * 8)) & low_byte).to_u8())
        .collect()
}

/// Inverse of [`encode_number`]; the byte count is taken from `bytes.len()`.
pub fn decode_number<T>(bytes: &[u8]) -> Result<T, CodecError>
where
    T: PrimInt + Unsigned,
{
    let capacity = mem::size_of::<T>();
    let significant = &bytes[bytes.iter().take_while(|&&b| b == 0).count()..];
    if significant.len() > capacity {
        return Err(CodecError::NumberOverflow {
            width: significant.len(),
            capacity,
        });
    }
    significant.iter().try_fold(T::zero(), |acc, &b| {
        let byte =
            <T as NumCast>::from(b).ok_or(CodecError::NumberOverflow { width: 1, capacity })?;
        // acc is zero until the first significant byte, so the shift stays below T's width
        Ok(if acc.is_zero() { byte } else { (acc << 8) | byte })
    })
}

/// Encode a one-byte value through [`encode_number`], which must yield exactly one byte.
fn single_byte(value: usize) -> Option<u8> {
    match encode_number(value).as_slice() {
        [b] => Some(*b),
        _ => None,
    }
}

/// Encode `(x, y)` as two 1-based bytes, so coordinate 0 still has a byte.
pub fn encode_coord(x: usize, y: usize) -> Result<[u8; COORD_MESSAGE_SIZE], CodecError> {
    let out_of_range = CodecError::CoordinateOutOfRange { x, y };
    let bx = x
        .checked_add(1)
        .and_then(single_byte)
        .ok_or(out_of_range.clone())?;
    let by = y.checked_add(1).and_then(single_byte).ok_or(out_of_range)?;
    Ok([bx, by])
}

pub fn decode_coord(bytes: &[u8]) -> Result<(usize, usize), CodecError> {
    expect_len(bytes, COORD_MESSAGE_SIZE)?;
    let x: usize = decode_number(&bytes[..1])?;
    let y: usize = decode_number(&bytes[1..])?;
    match (x.checked_sub(1), y.checked_sub(1)) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(CodecError::CoordinateOutOfRange { x, y }),
    }
}

pub fn encode_outcome(outcome: Outcome) -> Vec<u8> {
    encode_number(outcome.to_wire())
}

pub fn decode_outcome(bytes: &[u8]) -> Result<Outcome, CodecError> {
    expect_len(bytes, OUTCOME_MESSAGE_SIZE)?;
    let raw: u8 = decode_number(bytes)?;
    Outcome::try_from(raw).map_err(CodecError::UnknownOutcome)
}

/// Encode as `[width][height][cells...]`, cells row-major, one raw byte each.
pub fn encode_grid(grid: &Grid) -> Result<Vec<u8>, CodecError> {
    let (width, height) = (grid.width(), grid.height());
    let dims = single_byte(width).zip(single_byte(height));
    let (bw, bh) = dims.ok_or(CodecError::DimensionOutOfRange { width, height })?;

    let mut out = Vec::with_capacity(grid_message_size(width, height));
    out.push(bw);
    out.push(bh);
    out.extend(grid.as_slice().iter().map(|c| c.to_wire()));
    Ok(out)
}

pub fn decode_grid(bytes: &[u8]) -> Result<Grid, CodecError> {
    if bytes.len() < 2 {
        return Err(CodecError::Framing {
            expected: 2,
            actual: bytes.len(),
        });
    }
    let width: usize = decode_number(&bytes[..1])?;
    let height: usize = decode_number(&bytes[1..2])?;
    if width == 0 || height == 0 {
        return Err(CodecError::DimensionOutOfRange { width, height });
    }
    expect_len(bytes, grid_message_size(width, height))?;

    let cells = bytes[2..]
        .iter()
        .map(|&b| Cell::try_from(b).map_err(CodecError::InvalidCell))
        .collect::<Result<Vec<_>, _>>()?;
    Grid::from_cells(width, height, cells).ok_or(CodecError::Framing {
        expected: grid_message_size(width, height),
        actual: bytes.len(),
    })
}
