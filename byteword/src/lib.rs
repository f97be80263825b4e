#![warn(missing_docs)]

//! # Byteword
//!
//! Byteword converts 8-byte words into 64-bit signed integers and back, in
//! either byte order.
//!
//! ## Decoding and encoding
//!
//! A [`ByteWord`] is exactly eight bytes. [`decode`] combines them into an
//! [`i64`], placing each byte according to the chosen
//! [`byte_order::ByteOrder`], and [`encode`] splits an [`i64`] back into a
//! word. The two are exact inverses for both byte orders:
//!
//! ```
//! use byteword::{ByteWord, decode, encode};
//! use byteword::byte_order::ByteOrder;
//!
//! let word = ByteWord::new([0xCA, 0xFE, 0xBA, 0xBE, 0xDE, 0xAD, 0xBE, 0xEF]);
//! let value = decode(word, ByteOrder::BigEndian);
//! assert_eq!(value, -3819410105021120785);
//! assert_eq!(encode(value, ByteOrder::BigEndian), word);
//! ```
//!
//! When the bytes come from a slice, use [`codec::decode_slice`] or
//! [`codec::decode_at`]. These refuse to pad or truncate: anything other than
//! exactly eight bytes is an [`error::ErrorKind::InvalidLength`] error.
//!
//! ## Arbitrary precision
//!
//! With the `alloc` feature, the [`narrow`] module decodes big-endian
//! two's-complement numbers of any length through a [`BigInt`], then
//! narrows them to 64 bits, either truncating to the low 64 bits or failing
//! with [`error::ErrorKind::Overflow`]:
//!
//! ```
//! use byteword::narrow::{Narrowing, decode_wide};
//!
//! let two_to_63 = [0x00, 0x80, 0, 0, 0, 0, 0, 0, 0];
//! assert_eq!(decode_wide(&two_to_63, Narrowing::Truncate), Ok(i64::MIN));
//! assert!(decode_wide(&two_to_63, Narrowing::Exact).is_err());
//! ```
//!
//! ## Buffers
//!
//! [`io::WordBuffer`] reads and writes words through a reusable, fixed-size
//! byte buffer with a position and a limit. It converts with the standard
//! `from_*_bytes` functions rather than [`decode`], which makes it useful to
//! cross-check the codec.
//!
//! ## `no_std`
//!
//! Everything except the [`narrow`] module works without `std` and `alloc`.

// Disable the [`std`] standard crate when the "std" feature is not enabled.
#![cfg_attr(not(feature = "std"), no_std)]

// Enable the [`alloc`] standard crate when the "alloc" feature is enabled.
#[cfg(feature = "alloc")]
extern crate alloc;

pub mod byte_order;
pub mod codec;
pub mod error;
pub mod io;
#[cfg(feature = "alloc")]
pub mod narrow;

mod word;

pub use codec::{decode, encode};
#[cfg(feature = "alloc")]
pub use num::BigInt;
pub use word::{ByteWord, WORD_LEN};
