//! Decoding through an arbitrary-precision integer.
//!
//! The bytes are read into a [`BigInt`] as a big-endian two's-complement
//! number of whatever length they have, and the result is then narrowed to
//! 64 bits. A [`ByteWord`] always fits, so narrowing only matters for
//! [`decode_wide`] and [`narrow`].

use alloc::vec::Vec;
use num::{BigInt, Signed, ToPrimitive};

use crate::error::{Error, ErrorKind};
use crate::word::{ByteWord, WORD_LEN};

/// How to handle values that do not fit into 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Narrowing {
    /// Keep the lowest 64 bits, wrapping around like two's-complement
    /// arithmetic does.
    Truncate,
    /// Fail with [`ErrorKind::Overflow`].
    Exact,
}

impl From<bool> for Narrowing {
    /// `true` selects [`Narrowing::Exact`].
    fn from(exact: bool) -> Self {
        if exact { Narrowing::Exact } else { Narrowing::Truncate }
    }
}

/// Narrow an arbitrary-precision integer into an [`i64`].
pub fn narrow(value: &BigInt, narrowing: Narrowing) -> Result<i64, Error> {
    match narrowing {
        Narrowing::Exact => value.to_i64().ok_or_else(|| ErrorKind::Overflow.into()),
        Narrowing::Truncate => Ok(low_64_bits(value)),
    }
}

/// Decode a word by way of a [`BigInt`].
///
/// Gives the same result as [`crate::codec::decode`] with big endian byte
/// order, for both narrowing policies.
pub fn decode_via_arbitrary_precision(word: ByteWord, narrowing: Narrowing) -> Result<i64, Error> {
    decode_wide(word.as_array(), narrowing)
}

/// Decode a big-endian two's-complement number of any non-zero length.
///
/// An empty slice has no value and is rejected with
/// [`ErrorKind::InvalidLength`], `expected` being the minimum of one byte.
pub fn decode_wide(bytes: &[u8], narrowing: Narrowing) -> Result<i64, Error> {
    if bytes.is_empty() {
        return Err(ErrorKind::invalid_length(1, 0).into());
    }
    narrow(&BigInt::from_signed_bytes_be(bytes), narrowing)
}

fn low_64_bits(value: &BigInt) -> i64 {
    let sign_extension = if value.is_negative() { 0xFF } else { 0x00 };
    let le_bytes: Vec<u8> = value.to_signed_bytes_le();
    let mut low = [sign_extension; WORD_LEN];
    let len = le_bytes.len().min(WORD_LEN);
    low[..len].copy_from_slice(&le_bytes[..len]);
    i64::from_le_bytes(low)
}
