use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use ark_bls12_381::Bls12_381 as E;
use she::{Context, CurveId, DlpConfig, Encrypt};

criterion_group! {
    name = encrypt;
    config = Criterion::default().sample_size(10).measurement_time(Duration::from_secs(2));
    targets = bench_encrypt_g1, bench_encrypt_gt, bench_precompute
}

criterion_group! {
    name = decrypt;
    config = Criterion::default().sample_size(10).measurement_time(Duration::from_secs(4));
    targets = bench_decrypt_g1, bench_decrypt_gt, bench_pairing_mul
}

criterion_main!(encrypt, decrypt);

fn bench_encrypt_g1(c: &mut Criterion) {
    let rng = &mut StdRng::seed_from_u64(0);
    let (_sk, pk) = she::key_gen::<E, _>(rng);
    let ppk = pk.precompute().unwrap();

    c.bench_function("encrypt_g1", |b| b.iter(|| pk.encrypt_g1(rng, 12)));
    c.bench_function("encrypt_g1_precomputed", |b| {
        b.iter(|| ppk.encrypt_g1(rng, 12))
    });
}

fn bench_encrypt_gt(c: &mut Criterion) {
    let rng = &mut StdRng::seed_from_u64(0);
    let (_sk, pk) = she::key_gen::<E, _>(rng);
    let ppk = pk.precompute().unwrap();

    c.bench_function("encrypt_gt", |b| b.iter(|| pk.encrypt_gt(rng, 12)));
    c.bench_function("encrypt_gt_precomputed", |b| {
        b.iter(|| ppk.encrypt_gt(rng, 12))
    });
}

fn bench_precompute(c: &mut Criterion) {
    let rng = &mut StdRng::seed_from_u64(0);
    let (_sk, pk) = she::key_gen::<E, _>(rng);

    c.bench_function("precompute", |b| b.iter(|| pk.precompute()));
}

fn bench_decrypt_g1(c: &mut Criterion) {
    let rng = &mut StdRng::seed_from_u64(0);
    let ctx = Context::<E>::init(CurveId::Bls12_381).unwrap();
    let (sk, pk) = she::key_gen::<E, _>(rng);

    let small = pk.encrypt_g1(rng, 100).unwrap();
    let far = pk.encrypt_g1(rng, 1_000_000).unwrap();

    c.bench_function("decrypt_g1_in_table", |b| {
        b.iter(|| sk.decrypt_g1(&ctx, &small))
    });
    c.bench_function("decrypt_g1_giant_steps", |b| {
        b.iter(|| sk.decrypt_g1(&ctx, &far))
    });
}

fn bench_decrypt_gt(c: &mut Criterion) {
    let rng = &mut StdRng::seed_from_u64(0);
    let config = DlpConfig {
        hash_size: 1024,
        try_num: 64,
    };
    let ctx = Context::<E>::with_config(CurveId::Bls12_381, config).unwrap();
    let (sk, pk) = she::key_gen::<E, _>(rng);

    let ct = pk.encrypt_gt(rng, 50_000).unwrap();

    c.bench_function("decrypt_gt", |b| b.iter(|| sk.decrypt_gt(&ctx, &ct)));
}

fn bench_pairing_mul(c: &mut Criterion) {
    let rng = &mut StdRng::seed_from_u64(0);
    let (_sk, pk) = she::key_gen::<E, _>(rng);

    let c1 = pk.encrypt_g1(rng, 3).unwrap();
    let c2 = pk.encrypt_g2(rng, 4).unwrap();

    c.bench_function("mul_g1_g2", |b| b.iter(|| c1.mul(&c2)));
}
