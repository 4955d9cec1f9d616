//! Benchmarks for the hot codec paths: varints and fixed-width fields

use bstream::{BinaryStream, Endianness, ReadOnlyStream};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const VALUES: usize = 1000;

fn varint_payload() -> Vec<u8> {
    let mut writer = BinaryStream::new();
    for i in 0..VALUES as u32 {
        writer.write_var_u32(i.wrapping_mul(2654435761));
    }
    writer.take_data()
}

fn bench_varint_encode(c: &mut Criterion) {
    c.bench_function("varint_encode_u32", |b| {
        b.iter(|| {
            let mut writer = BinaryStream::new();
            for i in 0..VALUES as u32 {
                writer.write_var_u32(black_box(i.wrapping_mul(2654435761)));
            }
            writer.take_data()
        })
    });
}

fn bench_varint_decode(c: &mut Criterion) {
    let data = varint_payload();
    c.bench_function("varint_decode_u32", |b| {
        b.iter(|| {
            let mut reader = ReadOnlyStream::new(&data[..]);
            let mut sum = 0u64;
            while reader.has_data_left() {
                sum = sum.wrapping_add(u64::from(reader.get_var_u32().unwrap()));
            }
            sum
        })
    });
}

fn bench_fixed_width(c: &mut Criterion) {
    for endian in [Endianness::Little, Endianness::Big] {
        let mut writer = BinaryStream::with_endianness(endian);
        for i in 0..VALUES as u64 {
            writer.write_u64(i);
        }
        let data = writer.take_data();

        c.bench_function(&format!("fixed_decode_u64_{endian}"), |b| {
            b.iter(|| {
                let mut reader = ReadOnlyStream::with_endianness(&data[..], endian);
                let mut sum = 0u64;
                while reader.has_data_left() {
                    sum = sum.wrapping_add(reader.get_u64().unwrap());
                }
                sum
            })
        });
    }
}

criterion_group!(
    benches,
    bench_varint_encode,
    bench_varint_decode,
    bench_fixed_width
);
criterion_main!(benches);
