use byteword::ByteWord;
use byteword::byte_order::ByteOrder;
use clap::{Parser, ValueEnum};

/// The word decoded when `--bytes` is not given.
pub const SAMPLE_HEX: &str = "CAFEBABEDEADBEEF";

/// [`SAMPLE_HEX`] as a word.
pub const SAMPLE_WORD: ByteWord = ByteWord::new([0xCA, 0xFE, 0xBA, 0xBE, 0xDE, 0xAD, 0xBE, 0xEF]);

/// The big-endian value of [`SAMPLE_WORD`].
pub const SAMPLE_BIG_ENDIAN: i64 = -3819410105021120785;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderChoice {
    BigEndian,
    LittleEndian,
    Both,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Decode an 8-byte word every way byteword can and check that the results agree")]
pub struct DemoCli {
    /// The word to decode, as 16 hex digits
    #[arg(long, default_value = SAMPLE_HEX)]
    pub bytes: String,

    /// Which byte orders to decode with
    #[arg(long, value_enum, default_value_t = OrderChoice::Both)]
    pub order: OrderChoice,

    /// The expected big-endian value, checked whichever orders are selected.
    /// Defaults to the sample's value when the sample word is decoded.
    #[arg(long, allow_negative_numbers = true)]
    pub expected: Option<i64>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    Hex(hex::FromHexError),
    Word(byteword::error::Error),
}

impl OrderChoice {
    pub fn byte_orders(self) -> &'static [ByteOrder] {
        match self {
            OrderChoice::BigEndian => &[ByteOrder::BigEndian],
            OrderChoice::LittleEndian => &[ByteOrder::LittleEndian],
            OrderChoice::Both => &[ByteOrder::BigEndian, ByteOrder::LittleEndian],
        }
    }
}

impl DemoCli {
    /// Parse `--bytes` into a word. Anything but exactly eight bytes is an error.
    pub fn word(&self) -> Result<ByteWord, InputError> {
        let bytes = hex::decode(self.bytes.trim()).map_err(InputError::Hex)?;
        ByteWord::from_slice(&bytes).map_err(InputError::Word)
    }

    /// The expected big-endian value for `word`, if there is one.
    pub fn expected_for(&self, word: ByteWord) -> Option<i64> {
        self.expected.or((word == SAMPLE_WORD).then_some(SAMPLE_BIG_ENDIAN))
    }
}

impl std::error::Error for InputError {}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Hex(err) => write!(f, "--bytes is not valid hex: {err}"),
            InputError::Word(err) => write!(f, "--bytes must be one word: {err}"),
        }
    }
}
