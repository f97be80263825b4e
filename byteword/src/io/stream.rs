use crate::error::Error;

/// This trait allows for reading bytes from a source.
///
/// Mimics the exact-read part of [`std::io::Read`], which isn't available
/// in `core`.
pub trait Read {
    /// Read exactly as many bytes as fits in `bytes`.
    ///
    /// If not enough bytes are available, nothing is read and an error is
    /// returned.
    fn read(&mut self, bytes: &mut [u8]) -> Result<(), Error>;
}

/// This trait allows for writing bytes into a sink.
///
/// Mimics the exact-write part of [`std::io::Write`], which isn't available
/// in `core`.
pub trait Write {
    /// Write exactly as many bytes as there are in `bytes`.
    ///
    /// If there is not enough room, nothing is written and an error is
    /// returned.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error>;
}
