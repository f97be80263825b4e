use byteword::byte_order::ByteOrder;
use byteword::codec::{decode_at, decode_slice};
use byteword::error::{Error, ErrorKind};
use byteword::io::{WordBuffer, Write};
use byteword::narrow::{Narrowing, decode_via_arbitrary_precision, decode_wide};
use byteword::{ByteWord, decode, encode};
use rstest::{fixture, rstest};

#[fixture]
fn cafebabe() -> ByteWord {
    ByteWord::new([0xCA, 0xFE, 0xBA, 0xBE, 0xDE, 0xAD, 0xBE, 0xEF])
}

#[fixture]
fn cafebabe_big_endian() -> i64 {
    -3819410105021120785
}

#[fixture]
fn cafebabe_little_endian() -> i64 {
    0xEFBEADDEBEBAFECAu64 as i64
}

fn split_halves(word: ByteWord) -> i64 {
    let bytes = word.into_array();
    let high = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let low = u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    ((u64::from(high) << 32) | u64::from(low)) as i64
}

fn shift_accumulate(word: ByteWord) -> i64 {
    word.as_array().iter().fold(0i64, |value, byte| (value << 8) | i64::from(*byte))
}

fn reused_buffer(buffer: &mut WordBuffer<[u8; 8]>, word: ByteWord) -> Result<i64, Error> {
    buffer.clear();
    buffer.write(word.as_array())?;
    buffer.flip();
    buffer.get_i64()
}

#[rstest]
fn big_endian_variants_agree(cafebabe: ByteWord, cafebabe_big_endian: i64) -> Result<(), Error> {
    let mut reusable = WordBuffer::new([0u8; 8]);
    let results = [
        decode(cafebabe, ByteOrder::BigEndian),
        split_halves(cafebabe),
        shift_accumulate(cafebabe),
        i64::from_be_bytes(cafebabe.into_array()),
        WordBuffer::new(cafebabe.into_array()).get_i64()?,
        reused_buffer(&mut reusable, cafebabe)?,
        reused_buffer(&mut reusable, cafebabe)?,
        decode_via_arbitrary_precision(cafebabe, Narrowing::Truncate)?,
        decode_via_arbitrary_precision(cafebabe, Narrowing::Exact)?,
    ];
    assert!(results.iter().all(|result| *result == cafebabe_big_endian), "{results:?}");
    Ok(())
}

#[rstest]
fn little_endian_variants_agree(cafebabe: ByteWord, cafebabe_little_endian: i64) -> Result<(), Error> {
    assert_eq!(cafebabe_little_endian, -1171307680875479350);
    assert_eq!(decode(cafebabe, ByteOrder::LittleEndian), cafebabe_little_endian);
    assert_eq!(i64::from_le_bytes(cafebabe.into_array()), cafebabe_little_endian);
    assert_eq!(WordBuffer::new(cafebabe.into_array()).little_endian().get_i64()?, cafebabe_little_endian);
    assert_eq!(decode(cafebabe.reversed(), ByteOrder::BigEndian), cafebabe_little_endian);
    Ok(())
}

#[rstest]
fn big_endian_hex(cafebabe: ByteWord) {
    let value = decode(cafebabe, ByteOrder::BigEndian);
    assert_eq!(format!("0x{value:016X}"), "0xCAFEBABEDEADBEEF");
}

#[rstest]
#[case(ByteOrder::BigEndian)]
#[case(ByteOrder::LittleEndian)]
fn sample_round_trip(cafebabe: ByteWord, #[case] byte_order: ByteOrder) {
    assert_eq!(encode(decode(cafebabe, byte_order), byte_order), cafebabe);
}

#[rstest]
fn buffer_round_trip(cafebabe: ByteWord, cafebabe_big_endian: i64) -> Result<(), Error> {
    let mut buffer = WordBuffer::new([0u8; 8]);
    buffer.put_i64(cafebabe_big_endian)?;
    buffer.flip();
    assert_eq!(buffer.get_i64()?, cafebabe_big_endian);
    assert_eq!(cafebabe, buffer.take());
    Ok(())
}

#[rstest]
fn one_byte_too_many_overflows() {
    // 0x00 followed by 0x80 and seven zeros: 2^63 as a 9-byte big-endian number.
    let bytes = [0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    assert_eq!(decode_wide(&bytes, Narrowing::Exact), Err(ErrorKind::Overflow.into()));
    assert_eq!(decode_wide(&bytes, Narrowing::Truncate), Ok(i64::MIN));
}

#[rstest]
fn one_byte_too_many_truncates_to_low_bits(cafebabe: ByteWord, cafebabe_big_endian: i64) {
    let mut bytes = [0x01u8; 9];
    bytes[1..].copy_from_slice(cafebabe.as_array());
    assert_eq!(decode_wide(&bytes, Narrowing::Truncate), Ok(cafebabe_big_endian));
    assert_eq!(decode_wide(&bytes, Narrowing::Exact), Err(ErrorKind::Overflow.into()));
}

#[rstest]
#[case(0)]
#[case(7)]
#[case(9)]
fn invalid_lengths_are_rejected(#[case] len: usize) {
    let bytes = vec![0xAB; len];
    let expected = Err(ErrorKind::InvalidLength { expected: 8, actual: len }.into());
    assert_eq!(decode_slice(&bytes, ByteOrder::BigEndian), expected);
    assert_eq!(decode_slice(&bytes, ByteOrder::LittleEndian), expected);
    assert_eq!(ByteWord::try_from(bytes.as_slice()).map(|word| decode(word, ByteOrder::BigEndian)), expected);
}

#[rstest]
fn decode_at_walks_buffer(cafebabe: ByteWord, cafebabe_big_endian: i64) -> Result<(), Error> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(encode(1, ByteOrder::BigEndian).as_array());
    bytes.extend_from_slice(cafebabe.as_array());
    assert_eq!(decode_at(&bytes, 0, ByteOrder::BigEndian)?, 1);
    assert_eq!(decode_at(&bytes, 8, ByteOrder::BigEndian)?, cafebabe_big_endian);
    let past_end = decode_at(&bytes, 16, ByteOrder::BigEndian).map_err(|error| error.kind());
    assert_eq!(past_end, Err(ErrorKind::InvalidLength { expected: 8, actual: 0 }));
    Ok(())
}
