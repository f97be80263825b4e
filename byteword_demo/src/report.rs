use byteword::byte_order::ByteOrder;
use byteword::error::Error;
use byteword::io::{WordBuffer, Write};
use byteword::narrow::{Narrowing, decode_via_arbitrary_precision, narrow};
use byteword::{BigInt, ByteWord, decode, encode};

/// The result of one way of decoding a word.
#[derive(Debug)]
pub struct Variant {
    pub name: &'static str,
    pub value: Result<i64, Error>,
}

/// Every decoding of one word in one byte order.
#[derive(Debug)]
pub struct OrderReport {
    pub byte_order: ByteOrder,
    pub variants: Vec<Variant>,
}

/// What happens to a value just above [`i64::MAX`] under both narrowing policies.
#[derive(Debug)]
pub struct OverflowReport {
    pub value: BigInt,
    pub truncated: Result<i64, Error>,
    pub exact: Result<i64, Error>,
}

/// A check the demo performed that did not pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The decoding methods of one byte order produced different results or failed.
    Disagreement(ByteOrder),
    /// The big-endian value of the word is not the one given with `--expected`.
    Unexpected { expected: i64, actual: i64 },
    /// Narrowing past [`i64::MAX`] neither wrapped nor overflowed as it should.
    Overflow,
    /// Encoding the decoded value did not give back the word.
    RoundTrip(ByteOrder),
}

/// Whether a decoded value encodes back to the word it came from.
#[derive(Debug)]
pub struct RoundTripReport {
    pub value: i64,
    pub via_codec: ByteWord,
    pub via_buffer: Result<ByteWord, Error>,
}

impl OrderReport {
    pub fn new(word: ByteWord, byte_order: ByteOrder) -> Self {
        let mut reusable = WordBuffer::new([0u8; 8]).set_byte_order(byte_order);
        let mut variants = vec![
            Variant { name: "shift", value: Ok(decode(word, byte_order)) },
            Variant {
                name: "word buffer",
                value: WordBuffer::new(word.into_array()).set_byte_order(byte_order).get_i64(),
            },
            Variant { name: "word buffer (reused)", value: decode_reused(&mut reusable, word) },
        ];
        if byte_order == ByteOrder::BigEndian {
            variants.push(Variant {
                name: "bigint (truncate)",
                value: decode_via_arbitrary_precision(word, Narrowing::Truncate),
            });
            variants.push(Variant {
                name: "bigint (exact)",
                value: decode_via_arbitrary_precision(word, Narrowing::Exact),
            });
        }
        Self { byte_order, variants }
    }

    /// The common value of all variants, or `None` if any failed or they differ.
    pub fn agreed_value(&self) -> Option<i64> {
        let mut values = self.variants.iter().map(|variant| variant.value.ok());
        let first = values.next()??;
        values.all(|value| value == Some(first)).then_some(first)
    }
}

impl OverflowReport {
    pub fn new() -> Self {
        let value = BigInt::from(i64::MAX) + BigInt::from(1000);
        let truncated = narrow(&value, Narrowing::Truncate);
        let exact = narrow(&value, Narrowing::Exact);
        Self { value, truncated, exact }
    }

    /// Truncation wrapped around and the exact policy refused.
    pub fn is_expected(&self) -> bool {
        self.truncated == Ok(i64::MIN + 999) && self.exact.is_err()
    }
}

impl RoundTripReport {
    pub fn new(word: ByteWord, byte_order: ByteOrder) -> Self {
        let value = decode(word, byte_order);
        let via_codec = encode(value, byte_order);
        let mut buffer = WordBuffer::new([0u8; 8]).set_byte_order(byte_order);
        let via_buffer = buffer.put_i64(value).map(|_| ByteWord::new(buffer.take()));
        Self { value, via_codec, via_buffer }
    }

    pub fn matches(&self, word: ByteWord) -> bool {
        self.via_codec == word && self.via_buffer == Ok(word)
    }
}

/// Compare `expected`, if any, with the big-endian value of `word`.
///
/// The expectation is always about big endian, whichever orders are reported.
pub fn check_expected(word: ByteWord, expected: Option<i64>) -> Result<(), Failure> {
    let Some(expected) = expected else {
        return Ok(());
    };
    let actual = decode(word, ByteOrder::BigEndian);
    if actual == expected { Ok(()) } else { Err(Failure::Unexpected { expected, actual }) }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Failure::Disagreement(byte_order) => write!(f, "{byte_order} methods produce different results"),
            Failure::Unexpected { expected, actual } => {
                write!(f, "expected {expected} in big endian, but got {actual}")
            }
            Failure::Overflow => write!(f, "narrowing beyond i64::MAX did not behave as expected"),
            Failure::RoundTrip(byte_order) => write!(f, "{byte_order} round trip does not reproduce the word"),
        }
    }
}

fn decode_reused(buffer: &mut WordBuffer<[u8; 8]>, word: ByteWord) -> Result<i64, Error> {
    buffer.clear();
    buffer.write(word.as_array())?;
    buffer.flip();
    buffer.get_i64()
}
