use super::stream::{Read, Write};
use crate::byte_order::ByteOrder;
use crate::error::{Error, ErrorKind};
use crate::word::{ByteWord, WORD_LEN};

/// A fixed-size byte buffer with a cursor, for reading and writing words.
///
/// The buffer tracks a `position` (where the next read or write happens)
/// and a `limit` (how far reads and writes may go). Initially the limit is
/// the whole buffer. A buffer can be reused by writing into it, calling
/// [`Self::flip`] to read back what was written, and [`Self::clear`] to
/// start over:
///
/// ```
/// # use byteword::io::WordBuffer;
/// let mut buffer = WordBuffer::new([0u8; 8]);
/// buffer.put_i64(-42)?;
/// buffer.flip();
/// assert_eq!(buffer.get_i64()?, -42);
/// buffer.clear();
/// # Ok::<(), byteword::error::Error>(())
/// ```
///
/// Integers use the buffer's byte order, which is **big endian** unless set
/// otherwise.
#[derive(Debug)]
pub struct WordBuffer<Buffer> {
    buffer: Buffer,
    position: usize,
    limit: usize,
    byte_order: ByteOrder,
}

macro_rules! from_xe_bytes {
    ($type:ty, $bytes:expr, $byte_order:expr) => {
        match $byte_order {
            ByteOrder::BigEndian => <$type>::from_be_bytes($bytes),
            ByteOrder::LittleEndian => <$type>::from_le_bytes($bytes),
        }
    };
}

macro_rules! to_xe_bytes {
    ($value:expr, $byte_order:expr) => {
        match $byte_order {
            ByteOrder::BigEndian => $value.to_be_bytes(),
            ByteOrder::LittleEndian => $value.to_le_bytes(),
        }
    };
}

impl<Buffer: AsRef<[u8]>> WordBuffer<Buffer> {
    /// Create a buffer over `buffer`, with the limit at its end.
    pub fn new(buffer: Buffer) -> Self {
        let limit = buffer.as_ref().len();
        Self { buffer, position: 0, limit, byte_order: ByteOrder::BigEndian }
    }

    /// The total number of bytes in the buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.as_ref().len()
    }

    /// Reset the position to zero and the limit to the capacity.
    pub fn clear(&mut self) {
        self.position = 0;
        self.limit = self.capacity();
    }

    /// Read the next word.
    pub fn get_word(&mut self) -> Result<ByteWord, Error> {
        let mut bytes = [0u8; WORD_LEN];
        self.read(&mut bytes)?;
        Ok(ByteWord::new(bytes))
    }

    /// Read the next word as an [`i64`] in the buffer's byte order.
    pub fn get_i64(&mut self) -> Result<i64, Error> {
        let word = self.get_word()?;
        Ok(from_xe_bytes!(i64, word.into_array(), self.byte_order))
    }
}

impl<Buffer> WordBuffer<Buffer> {
    /// Use the **big endian** byte order.
    pub fn big_endian(self) -> Self {
        Self { byte_order: ByteOrder::BigEndian, ..self }
    }

    /// Use the **little endian** byte order.
    pub fn little_endian(self) -> Self {
        Self { byte_order: ByteOrder::LittleEndian, ..self }
    }

    /// Use the specified byte order.
    pub fn set_byte_order(self, byte_order: ByteOrder) -> Self {
        Self { byte_order, ..self }
    }

    /// The byte order words and integers are read and written in.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// The index of the next byte to read or write.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The index of the first byte that must not be read or written.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The number of bytes between the position and the limit.
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Set the limit to the current position and the position to zero,
    /// so that the bytes written so far can be read back.
    pub fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
    }

    /// Set the position to zero, keeping the limit.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Take the underlying buffer.
    pub fn take(self) -> Buffer {
        self.buffer
    }

    fn claim(&mut self, len: usize) -> Result<core::ops::Range<usize>, Error> {
        if len <= self.remaining() {
            let range = self.position..(self.position + len);
            self.position += len;
            Ok(range)
        } else {
            Err(Error::from(ErrorKind::UnexpectedEof).at(self.position))
        }
    }
}

impl<Buffer: AsMut<[u8]>> WordBuffer<Buffer> {
    /// Write a word.
    pub fn put_word(&mut self, word: ByteWord) -> Result<(), Error> {
        self.write(word.as_array())
    }

    /// Write an [`i64`] in the buffer's byte order.
    pub fn put_i64(&mut self, value: i64) -> Result<(), Error> {
        self.put_word(ByteWord::new(to_xe_bytes!(value, self.byte_order)))
    }
}

impl<Buffer: AsRef<[u8]>> Read for WordBuffer<Buffer> {
    fn read(&mut self, bytes: &mut [u8]) -> Result<(), Error> {
        let range = self.claim(bytes.len())?;
        bytes.copy_from_slice(&self.buffer.as_ref()[range]);
        Ok(())
    }
}

impl<Buffer: AsMut<[u8]>> Write for WordBuffer<Buffer> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let range = self.claim(bytes.len())?;
        self.buffer.as_mut()[range].copy_from_slice(bytes);
        Ok(())
    }
}
