//! The order in which the bytes of a multi-byte integer are laid out.

/// Byte order of a multi-byte integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ByteOrder {
    /// The first byte is the least significant.
    LittleEndian,
    /// The first byte is the most significant.
    BigEndian,
}

impl ByteOrder {
    /// The byte order of the target platform.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") { ByteOrder::BigEndian } else { ByteOrder::LittleEndian }
    }

    /// Return the bit position of the byte at `index` within an integer
    /// that is `width` bytes wide.
    ///
    /// The result is one of `0, 8, ..., 8 * (width - 1)`. `index` must be
    /// less than `width`.
    ///
    /// ```
    /// # use byteword::byte_order::ByteOrder;
    /// assert_eq!(ByteOrder::BigEndian.bit_offset(0, 8), 56);
    /// assert_eq!(ByteOrder::LittleEndian.bit_offset(0, 8), 0);
    /// ```
    pub const fn bit_offset(self, index: usize, width: usize) -> u32 {
        debug_assert!(index < width);
        let significance = match self {
            ByteOrder::BigEndian => width - 1 - index,
            ByteOrder::LittleEndian => index,
        };
        8 * significance as u32
    }

    /// The opposite byte order.
    pub const fn reversed(self) -> Self {
        match self {
            ByteOrder::BigEndian => ByteOrder::LittleEndian,
            ByteOrder::LittleEndian => ByteOrder::BigEndian,
        }
    }
}

impl core::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteOrder::BigEndian => write!(f, "big endian"),
            ByteOrder::LittleEndian => write!(f, "little endian"),
        }
    }
}
