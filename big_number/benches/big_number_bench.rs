extern crate criterion;

use big_number::BigNumber;
use criterion::*;

fn digits(n: usize, seed: u8) -> BigNumber {
    let s: String = (0..n)
        .map(|i| char::from(b'1' + ((i as u8).wrapping_mul(7).wrapping_add(seed)) % 9))
        .collect();
    BigNumber::parse(&s).unwrap()
}

fn bench(c: &mut Criterion) {
    let a = digits(400, 3);
    let b = digits(200, 5);

    let mut group = c.benchmark_group("schoolbook");
    group.sample_size(20);
    group.bench_function("mul 400x200", |bench| {
        bench.iter(|| black_box(&a) * black_box(&b))
    });
    group.bench_function("div_rem 400/200", |bench| {
        bench.iter(|| black_box(&a).div_rem(black_box(&b)))
    });
    group.bench_function("pow 7^1000", |bench| {
        let seven = BigNumber::from(7_u32);
        bench.iter(|| black_box(&seven).pow_u32(1000))
    });
    group.bench_function("factorial 300", |bench| {
        bench.iter(|| (1_u32..=300).map(BigNumber::from).product::<BigNumber>())
    });
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
