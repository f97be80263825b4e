//! Error types.

/// The kinds of errors that can happen when converting words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// The byte sequence does not have the length the operation requires.
    InvalidLength {
        /// The number of bytes the operation needs.
        expected: usize,
        /// The number of bytes it got.
        actual: usize,
    },
    /// The value does not fit into a 64-bit signed integer.
    Overflow,
    /// A buffer has no more room to read or write.
    UnexpectedEof,
}

/// An [`ErrorKind`] and, for buffers and offsets, where it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Error {
    kind: ErrorKind,
    position: Option<usize>,
}

//------------------------------------------------------------------------------
// Error implementations
//------------------------------------------------------------------------------

impl Error {
    /// What went wrong.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The byte offset where the error occurred, if known.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Attach the byte offset where the error occurred.
    pub fn at(self, position: usize) -> Self {
        Self { kind: self.kind, position: Some(position) }
    }
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.position {
            Some(position) => write!(f, "at byte {position}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(value: ErrorKind) -> Self {
        Self { kind: value, position: None }
    }
}

//------------------------------------------------------------------------------
// ErrorKind implementations
//------------------------------------------------------------------------------

impl ErrorKind {
    pub(crate) fn invalid_length(expected: usize, actual: usize) -> Self {
        ErrorKind::InvalidLength { expected, actual }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ErrorKind::*;
        match self {
            InvalidLength { expected, actual } => write!(f, "expected {expected} bytes, got {actual}"),
            Overflow => write!(f, "the value does not fit into a 64-bit signed integer"),
            UnexpectedEof => write!(f, "end of buffer reached, cannot read/write more data"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_position() {
        let error = Error::from(ErrorKind::invalid_length(8, 7));
        assert_eq!(error.to_string(), "expected 8 bytes, got 7");
    }

    #[test]
    fn display_with_position() {
        let error = Error::from(ErrorKind::UnexpectedEof).at(12);
        assert_eq!(error.position(), Some(12));
        assert_eq!(error.to_string(), "at byte 12: end of buffer reached, cannot read/write more data");
    }
}
