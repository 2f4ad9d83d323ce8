use base45_qr::{decode, encode, Scheme};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let data: Vec<u8> = (0..4096_u32).map(|i| (i * 31 % 251) as u8).collect();
    for scheme in [Scheme::Standard, Scheme::Qr] {
        let encoded = encode(&data, scheme).unwrap();
        c.bench_function(&format!("encode {scheme}"), |b| {
            b.iter(|| encode(black_box(&data), scheme))
        });
        c.bench_function(&format!("decode {scheme}"), |b| {
            b.iter(|| decode(black_box(&encoded), scheme))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
