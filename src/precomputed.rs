//! Fixed-base tables for repeated encryption under one public key.

use ark_ec::{
    pairing::{Pairing, PairingOutput},
    PrimeGroup,
};
use ark_ff::{BigInteger, PrimeField};
use ndarray::Array2;
use tracing::{debug, instrument};

use crate::{CipherTextG1, CipherTextG2, CipherTextGT, Encrypt, PublicKey, Result, SheError};

const WINDOW_BITS: usize = 4;
const TABLE_WIDTH: usize = 1 << WINDOW_BITS;
const WINDOWS_PER_WORD: usize = 64 / WINDOW_BITS;

/// Multiples `d * 16^i * B` of a base `B` for every window `i` and digit `d`.
#[derive(Clone, Debug)]
pub(crate) struct FixedBaseTable<G: PrimeGroup> {
    base: G,
    // dim = (windows, TABLE_WIDTH)
    table: Array2<G>,
}

impl<G: PrimeGroup> FixedBaseTable<G> {
    /// Table covering exponents of up to `num_words` 64-bit words.
    pub(crate) fn new(base: G, num_words: usize) -> Result<Self> {
        let windows = num_words * WINDOWS_PER_WORD;

        let mut entries = Vec::new();
        entries
            .try_reserve_exact(windows * TABLE_WIDTH)
            .map_err(|_| SheError::ResourceExhausted)?;

        let mut b = base;
        for _ in 0..windows {
            let mut cur = G::zero();
            for _ in 0..TABLE_WIDTH {
                entries.push(cur);
                cur += b;
            }
            // cur = 16 b
            b = cur;
        }

        let table = Array2::from_shape_vec((windows, TABLE_WIDTH), entries)
            .map_err(|e| SheError::PrimitiveFailure(e.to_string()))?;
        Ok(Self { base, table })
    }

    /// `words * B`, with `words` little-endian.
    pub(crate) fn mul(&self, words: &[u64]) -> G {
        if words.len() * WINDOWS_PER_WORD > self.table.dim().0 {
            // reduce modulo the group order before the generic multiplication
            let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
            return self.base * G::ScalarField::from_le_bytes_mod_order(&bytes);
        }

        let mut acc = G::zero();
        for (i, word) in words.iter().enumerate() {
            for j in 0..WINDOWS_PER_WORD {
                let digit = (word >> (WINDOW_BITS * j)) as usize & (TABLE_WIDTH - 1);
                if digit != 0 {
                    acc += self.table[[i * WINDOWS_PER_WORD + j, digit]];
                }
            }
        }
        acc
    }
}

/// A public key expanded into fixed-base tables.
///
/// Building it costs a few thousand group operations and a few megabytes for
/// GT on BLS12-381; every encryption afterwards needs no scalar multiplication
/// or pairing. The tables are released when the value is dropped.
///
/// # Example
///
/// ```rust
/// use ark_bls12_381::Bls12_381 as E;
/// use rand::{rngs::StdRng, SeedableRng};
/// use she::{Context, CurveId, DlpConfig, Encrypt, SecretKey};
///
/// let rng = &mut StdRng::seed_from_u64(7);
/// let config = DlpConfig { hash_size: 16, try_num: 4 };
/// let ctx = Context::<E>::with_config(CurveId::Bls12_381, config).unwrap();
///
/// let sk = SecretKey::<E>::generate(rng);
/// let ppk = sk.public_key().precompute().unwrap();
///
/// let c = ppk.encrypt_g1(rng, -42).unwrap();
/// assert_eq!(sk.decrypt_g1(&ctx, &c).unwrap(), -42);
/// ```
#[derive(Clone, Debug)]
pub struct PrecomputedPublicKey<E: Pairing> {
    pk: PublicKey<E>,
    p: FixedBaseTable<E::G1>,
    x_p: FixedBaseTable<E::G1>,
    q: FixedBaseTable<E::G2>,
    y_q: FixedBaseTable<E::G2>,
    // e(P, Q), e(xP, Q), e(P, yQ), e(xP, yQ)
    g: FixedBaseTable<PairingOutput<E>>,
    g_x: FixedBaseTable<PairingOutput<E>>,
    g_y: FixedBaseTable<PairingOutput<E>>,
    g_xy: FixedBaseTable<PairingOutput<E>>,
}

impl<E: Pairing> PublicKey<E> {
    /// Fails with [`SheError::ResourceExhausted`] if the tables cannot be allocated.
    #[instrument(level = "trace", skip_all)]
    pub fn precompute(&self) -> Result<PrecomputedPublicKey<E>> {
        let num_words = <<E::ScalarField as PrimeField>::BigInt as BigInteger>::NUM_LIMBS;
        let p = E::G1::generator();
        let q = E::G2::generator();

        let ppk = PrecomputedPublicKey {
            pk: *self,
            p: FixedBaseTable::new(p, num_words)?,
            x_p: FixedBaseTable::new(self.x_p, num_words)?,
            q: FixedBaseTable::new(q, num_words)?,
            y_q: FixedBaseTable::new(self.y_q, num_words)?,
            g: FixedBaseTable::new(E::pairing(p, q), num_words)?,
            g_x: FixedBaseTable::new(E::pairing(self.x_p, q), num_words)?,
            g_y: FixedBaseTable::new(E::pairing(p, self.y_q), num_words)?,
            g_xy: FixedBaseTable::new(E::pairing(self.x_p, self.y_q), num_words)?,
        };
        debug!(
            windows = num_words * WINDOWS_PER_WORD,
            "built precomputed public key"
        );
        Ok(ppk)
    }
}

impl<E: Pairing> PrecomputedPublicKey<E> {
    /// The public key the tables were built from.
    pub fn public_key(&self) -> &PublicKey<E> {
        &self.pk
    }
}

impl<E: Pairing> Encrypt<E> for PrecomputedPublicKey<E> {
    fn enc_g1_raw(&self, m: &[u64], r: &E::ScalarField) -> CipherTextG1<E> {
        let r = r.into_bigint();
        CipherTextG1::from_parts(
            self.p.mul(m) + self.x_p.mul(r.as_ref()),
            self.p.mul(r.as_ref()),
        )
    }

    fn enc_g2_raw(&self, m: &[u64], r: &E::ScalarField) -> CipherTextG2<E> {
        let r = r.into_bigint();
        CipherTextG2::from_parts(
            self.q.mul(m) + self.y_q.mul(r.as_ref()),
            self.q.mul(r.as_ref()),
        )
    }

    fn enc_gt_raw(&self, m: &[u64], r: &[E::ScalarField; 3]) -> CipherTextGT<E> {
        let [r0, r1, r2] = (*r).map(|r| r.into_bigint());

        let a = self.g.mul(m) + self.g_y.mul(r0.as_ref()) + self.g_x.mul(r1.as_ref())
            - self.g_xy.mul(r2.as_ref());

        CipherTextGT::from_tensor(Array2::from_shape_fn((2, 2), |(i, j)| match (i, j) {
            (0, 0) => a,
            (0, 1) => self.g.mul(r0.as_ref()),
            (1, 0) => self.g.mul(r1.as_ref()),
            _ => self.g.mul(r2.as_ref()),
        }))
    }
}
