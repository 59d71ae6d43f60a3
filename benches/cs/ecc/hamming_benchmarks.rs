use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming_sim::cs::ecc::{decode, encode, hamming_decode, hamming_encode, DataWord};
use hamming_sim::sim::{PixelBuffer, Rgb, Selection, SimulationConfig, Simulator};

fn bench_codec(c: &mut Criterion) {
    let words: Vec<DataWord> = (0u8..16).map(DataWord::from_nibble).collect();
    let received: Vec<_> = words
        .iter()
        .enumerate()
        .map(|(i, &d)| encode(d).flip(i % 7).unwrap())
        .collect();

    c.bench_function("encode_all_nibbles", |b| {
        b.iter(|| {
            for &d in &words {
                black_box(encode(black_box(d)));
            }
        })
    });

    c.bench_function("decode_single_errors", |b| {
        b.iter(|| {
            for &r in &received {
                black_box(decode(black_box(r)));
            }
        })
    });

    let data: Vec<u8> = (0..4096).map(|i| (i * 31 % 256) as u8).collect();
    let encoded = hamming_encode(&data).unwrap();
    c.bench_function("byte_stream_round_trip_4k", |b| {
        b.iter(|| {
            let encoded = hamming_encode(black_box(&data)).unwrap();
            black_box(hamming_decode(&encoded).unwrap())
        })
    });
    c.bench_function("byte_stream_decode_4k", |b| {
        b.iter(|| black_box(hamming_decode(black_box(&encoded)).unwrap()))
    });
}

fn bench_region(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_on_region");

    for size in [16usize, 64, 256] {
        let image = PixelBuffer::from_fn(size, size, |x, y| {
            Rgb::new((x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8)
        });
        let selection = Selection::whole(&image);

        group.bench_with_input(BenchmarkId::from_parameter(size), &image, |b, image| {
            let mut simulator = Simulator::from_config(&SimulationConfig::default().with_seed(42));
            b.iter(|| black_box(simulator.run_on_region(image, &selection).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec, bench_region);
criterion_main!(benches);
