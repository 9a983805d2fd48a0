//! Throughput benchmarks for the block-sorting transforms.
//!
//! Groups:
//! - `suffix_sort`: prefix doubling vs. the naive comparator
//! - `bwt_forward` / `bwt_inverse`
//! - `mtf_encode` / `mtf_decode`
//! - `pipeline`: BWT + MTF round trip

use burrows_codec::config::SuffixSortConfig;
use burrows_codec::suffix::CircularSuffixIndex;
use burrows_codec::{bwt, mtf, pipeline};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

type Generator = fn(usize) -> Vec<u8>;

const SIZES: [(&str, usize); 3] = [("4KB", 4 * 1024), ("64KB", 64 * 1024), ("256KB", 256 * 1024)];

const PATTERNS: [(&str, Generator); 3] = [
    ("words", words),
    ("noise", noise),
    ("periodic", periodic),
];

/// Space-separated words drawn from a small vocabulary.
fn words(size: usize) -> Vec<u8> {
    let vocabulary: [&[u8]; 8] = [
        b"block", b"sorting", b"rotation", b"suffix", b"front", b"move", b"index", b"rank",
    ];
    let mut state = 0x9E37_79B9u32;
    let mut data = Vec::with_capacity(size + 16);
    while data.len() < size {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        data.extend_from_slice(vocabulary[(state % 8) as usize]);
        data.push(b' ');
    }
    data.truncate(size);
    data
}

/// Uniformly spread bytes from an xorshift generator.
fn noise(size: usize) -> Vec<u8> {
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    (0..size)
        .map(|_| {
            state ^= state >> 12;
            state ^= state << 25;
            state ^= state >> 27;
            (state.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 56) as u8
        })
        .collect()
}

/// A short period repeated; every rotation has many identical twins.
fn periodic(size: usize) -> Vec<u8> {
    b"abcab".iter().copied().cycle().take(size).collect()
}

fn bench_suffix_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_sort");
    let data = words(16 * 1024);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for (name, config) in [
        ("doubling", SuffixSortConfig::DOUBLING),
        ("naive", SuffixSortConfig::NAIVE),
    ] {
        group.bench_with_input(BenchmarkId::new(name, "16KB"), &data, |b, data| {
            b.iter(|| black_box(CircularSuffixIndex::with_config(black_box(data), &config)));
        });
    }

    for (size_name, size) in SIZES {
        let data = periodic(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("doubling_periodic", size_name), &data, |b, data| {
            b.iter(|| {
                black_box(CircularSuffixIndex::with_config(
                    black_box(data),
                    &SuffixSortConfig::DOUBLING,
                ))
            });
        });
    }

    group.finish();
}

fn bench_bwt_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("bwt_forward");

    for (pattern, generate) in PATTERNS {
        for (size_name, size) in SIZES {
            let data = generate(size);
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(pattern, size_name), &data, |b, data| {
                b.iter(|| black_box(bwt::transform(black_box(data))));
            });
        }
    }

    group.finish();
}

fn bench_bwt_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("bwt_inverse");

    for (pattern, generate) in PATTERNS {
        for (size_name, size) in SIZES {
            let block = bwt::transform(&generate(size));
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(pattern, size_name), &block, |b, block| {
                b.iter(|| black_box(bwt::inverse_block(black_box(block))));
            });
        }
    }

    group.finish();
}

fn bench_mtf(c: &mut Criterion) {
    let mut encode = c.benchmark_group("mtf_encode");
    for (pattern, generate) in PATTERNS {
        // MTF runs on a last column in practice.
        let last = bwt::transform(&generate(64 * 1024)).last;
        encode.throughput(Throughput::Bytes(last.len() as u64));
        encode.bench_with_input(BenchmarkId::from_parameter(pattern), &last, |b, last| {
            b.iter(|| black_box(mtf::transform(black_box(last))));
        });
    }
    encode.finish();

    let mut decode = c.benchmark_group("mtf_decode");
    for (pattern, generate) in PATTERNS {
        let indices = mtf::transform(&bwt::transform(&generate(64 * 1024)).last);
        decode.throughput(Throughput::Bytes(indices.len() as u64));
        decode.bench_with_input(BenchmarkId::from_parameter(pattern), &indices, |b, indices| {
            b.iter(|| black_box(mtf::inverse_transform(black_box(indices))));
        });
    }
    decode.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for (pattern, generate) in PATTERNS {
        let data = generate(64 * 1024);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("roundtrip", pattern), &data, |b, data| {
            b.iter(|| {
                let packed = pipeline::compress(black_box(data)).expect("compress failed");
                black_box(pipeline::decompress(&packed).expect("decompress failed"))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_suffix_sort,
    bench_bwt_forward,
    bench_bwt_inverse,
    bench_mtf,
    bench_pipeline,
);
criterion_main!(benches);
