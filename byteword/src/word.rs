use crate::error::{Error, ErrorKind};

/// Number of bytes in a [`ByteWord`].
pub const WORD_LEN: usize = size_of::<i64>();

/// Exactly eight bytes, the serialized form of a 64-bit integer.
///
/// A `ByteWord` does not know its byte order; the order is chosen when the
/// word is decoded (see [`crate::codec::decode`]).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteWord([u8; WORD_LEN]);

impl ByteWord {
    /// Create a word from its bytes.
    pub const fn new(bytes: [u8; WORD_LEN]) -> Self {
        Self(bytes)
    }

    /// Copy a word out of a slice that is exactly [`WORD_LEN`] bytes long.
    ///
    /// Shorter or longer slices are rejected with
    /// [`ErrorKind::InvalidLength`] instead of being padded or truncated.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        <[u8; WORD_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| ErrorKind::invalid_length(WORD_LEN, bytes.len()).into())
    }

    /// The bytes of the word.
    pub const fn as_array(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Consume the word and return its bytes.
    pub const fn into_array(self) -> [u8; WORD_LEN] {
        self.0
    }

    /// The same bytes in reverse order.
    pub fn reversed(self) -> Self {
        let mut bytes = self.0;
        bytes.reverse();
        Self(bytes)
    }
}

impl From<[u8; WORD_LEN]> for ByteWord {
    fn from(value: [u8; WORD_LEN]) -> Self {
        Self(value)
    }
}

impl From<ByteWord> for [u8; WORD_LEN] {
    fn from(value: ByteWord) -> Self {
        value.0
    }
}

impl TryFrom<&[u8]> for ByteWord {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(value)
    }
}

impl AsRef<[u8]> for ByteWord {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<[u8; WORD_LEN]> for ByteWord {
    fn eq(&self, other: &[u8; WORD_LEN]) -> bool {
        &self.0 == other
    }
}

/// Space separated hex bytes, such as `CA FE BA BE DE AD BE EF`.
impl core::fmt::Display for ByteWord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (index, byte) in self.0.iter().enumerate() {
            if index != 0 {
                write!(f, " ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl core::fmt::UpperHex for ByteWord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        self.0.iter().try_for_each(|byte| write!(f, "{byte:02X}"))
    }
}

impl core::fmt::LowerHex for ByteWord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        self.0.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
    }
}
