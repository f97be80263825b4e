//! Throughput of the ways to turn eight bytes into an `i64`.
//!
//! Run with: cargo bench -p byteword

use byteword::byte_order::ByteOrder;
use byteword::io::{WordBuffer, Write};
use byteword::narrow::{Narrowing, decode_via_arbitrary_precision};
use byteword::{ByteWord, decode};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

fn cafebabe() -> ByteWord {
    ByteWord::new([0xCA, 0xFE, 0xBA, 0xBE, 0xDE, 0xAD, 0xBE, 0xEF])
}

fn split_halves(bytes: [u8; 8]) -> i64 {
    let high = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let low = u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    ((u64::from(high) << 32) | u64::from(low)) as i64
}

fn bench_decode(c: &mut Criterion) {
    let word = cafebabe();
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(1));

    group.bench_function("shift_big_endian", |b| b.iter(|| decode(black_box(word), ByteOrder::BigEndian)));
    group.bench_function("shift_little_endian", |b| b.iter(|| decode(black_box(word), ByteOrder::LittleEndian)));
    group.bench_function("std_from_be_bytes", |b| b.iter(|| i64::from_be_bytes(black_box(word).into_array())));
    group.bench_function("split_halves", |b| b.iter(|| split_halves(black_box(word).into_array())));

    group.bench_function("buffer_fresh", |b| {
        b.iter(|| WordBuffer::new(black_box(word).into_array()).get_i64());
    });

    group.bench_function("buffer_reused", |b| {
        let mut buffer = WordBuffer::new([0u8; 8]);
        b.iter(|| {
            buffer.clear();
            buffer.write(black_box(word).as_array())?;
            buffer.flip();
            buffer.get_i64()
        });
    });

    group.bench_function("bigint_truncate", |b| {
        b.iter(|| decode_via_arbitrary_precision(black_box(word), Narrowing::Truncate));
    });
    group.bench_function("bigint_exact", |b| {
        b.iter(|| decode_via_arbitrary_precision(black_box(word), Narrowing::Exact));
    });

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
