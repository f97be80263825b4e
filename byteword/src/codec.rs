//! Conversion between [`ByteWord`]s and 64-bit signed integers.
//!
//! There is a single implementation for both byte orders: each byte is
//! treated as an unsigned 8-bit unit and shifted to the bit position
//! [`ByteOrder::bit_offset`] assigns to it.

use crate::byte_order::ByteOrder;
use crate::error::{Error, ErrorKind};
use crate::word::{ByteWord, WORD_LEN};

/// Combine the bytes of `word` into a signed 64-bit integer.
///
/// ```
/// # use byteword::{ByteWord, decode};
/// # use byteword::byte_order::ByteOrder;
/// let word = ByteWord::new([0xCA, 0xFE, 0xBA, 0xBE, 0xDE, 0xAD, 0xBE, 0xEF]);
/// assert_eq!(decode(word, ByteOrder::BigEndian), 0xCAFEBABEDEADBEEFu64 as i64);
/// ```
pub fn decode(word: ByteWord, byte_order: ByteOrder) -> i64 {
    word.as_array()
        .iter()
        .enumerate()
        .fold(0u64, |bits, (index, byte)| bits | (u64::from(*byte) << byte_order.bit_offset(index, WORD_LEN)))
        as i64
}

/// Split a signed 64-bit integer into its bytes. The inverse of [`decode`].
pub fn encode(value: i64, byte_order: ByteOrder) -> ByteWord {
    let bits = value as u64;
    ByteWord::new(core::array::from_fn(|index| (bits >> byte_order.bit_offset(index, WORD_LEN)) as u8))
}

/// Decode a slice that must be exactly [`WORD_LEN`] bytes long.
pub fn decode_slice(bytes: &[u8], byte_order: ByteOrder) -> Result<i64, Error> {
    ByteWord::from_slice(bytes).map(|word| decode(word, byte_order))
}

/// Decode the word that starts at `offset` within a larger buffer.
///
/// Fails with [`ErrorKind::InvalidLength`] if fewer than [`WORD_LEN`] bytes
/// are left after `offset`.
pub fn decode_at(bytes: &[u8], offset: usize, byte_order: ByteOrder) -> Result<i64, Error> {
    let tail = bytes.get(offset..).unwrap_or_default();
    match tail.get(..WORD_LEN) {
        Some(word) => decode_slice(word, byte_order),
        None => Err(Error::from(ErrorKind::invalid_length(WORD_LEN, tail.len())).at(offset)),
    }
}

/// Encode `value` into `out`, which must be exactly [`WORD_LEN`] bytes long.
pub fn encode_into(value: i64, byte_order: ByteOrder, out: &mut [u8]) -> Result<(), Error> {
    if out.len() != WORD_LEN {
        return Err(ErrorKind::invalid_length(WORD_LEN, out.len()).into());
    }
    out.copy_from_slice(encode(value, byte_order).as_array());
    Ok(())
}
