//! Public key and the encryption algorithms shared by [`PublicKey`] and
//! [`crate::PrecomputedPublicKey`].

use ark_ec::{
    pairing::{Pairing, PairingOutput},
    PrimeGroup,
};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{rand::Rng, UniformRand};
use ndarray::Array2;
use num_bigint::BigInt;
use rand_core::CryptoRng;

use crate::{
    codec::{limb_capacity, signed_exp},
    CipherTextG1, CipherTextG2, CipherTextGT,
};

/// Public key `(xP, yQ)` for the fixed generators `P` of G1 and `Q` of G2.
#[derive(Clone, Copy, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct PublicKey<E: Pairing> {
    pub(crate) x_p: E::G1,
    pub(crate) y_q: E::G2,
}

/// Encryption into G1, G2 and GT.
///
/// Implementors supply the three raw encryptions of a non-negative magnitude
/// under a given mask. The provided methods pick a fresh mask per call and
/// take care of the sign.
pub trait Encrypt<E: Pairing> {
    /// `(m P + r xP, r P)`
    fn enc_g1_raw(&self, m: &[u64], r: &E::ScalarField) -> CipherTextG1<E>;

    /// `(m Q + r yQ, r Q)`
    fn enc_g2_raw(&self, m: &[u64], r: &E::ScalarField) -> CipherTextG2<E>;

    /// With `g = e(P, Q)`:
    /// `((m + r0 y + r1 x - r2 x y) g, r0 g, r1 g, r2 g)` laid out as a 2x2 tensor.
    fn enc_gt_raw(&self, m: &[u64], r: &[E::ScalarField; 3]) -> CipherTextGT<E>;

    fn encrypt_g1<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        m: impl Into<BigInt>,
    ) -> crate::Result<CipherTextG1<E>> {
        let r = E::ScalarField::rand(rng);
        signed_exp(&m.into(), limb_capacity::<E::ScalarField>(), |m| {
            self.enc_g1_raw(m, &r)
        })
    }

    fn encrypt_g2<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        m: impl Into<BigInt>,
    ) -> crate::Result<CipherTextG2<E>> {
        let r = E::ScalarField::rand(rng);
        signed_exp(&m.into(), limb_capacity::<E::ScalarField>(), |m| {
            self.enc_g2_raw(m, &r)
        })
    }

    fn encrypt_gt<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        m: impl Into<BigInt>,
    ) -> crate::Result<CipherTextGT<E>> {
        let r = [
            E::ScalarField::rand(rng),
            E::ScalarField::rand(rng),
            E::ScalarField::rand(rng),
        ];
        signed_exp(&m.into(), limb_capacity::<E::ScalarField>(), |m| {
            self.enc_gt_raw(m, &r)
        })
    }

    /// Adds a fresh encryption of zero, unlinking `c` from its origin.
    fn rerandomize_g1<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        c: &CipherTextG1<E>,
    ) -> CipherTextG1<E> {
        c + &self.enc_g1_raw(&[], &E::ScalarField::rand(rng))
    }

    fn rerandomize_g2<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        c: &CipherTextG2<E>,
    ) -> CipherTextG2<E> {
        c + &self.enc_g2_raw(&[], &E::ScalarField::rand(rng))
    }

    fn rerandomize_gt<R: Rng + CryptoRng>(
        &self,
        rng: &mut R,
        c: &CipherTextGT<E>,
    ) -> CipherTextGT<E> {
        let r = [
            E::ScalarField::rand(rng),
            E::ScalarField::rand(rng),
            E::ScalarField::rand(rng),
        ];
        c + &self.enc_gt_raw(&[], &r)
    }
}

impl<E: Pairing> PublicKey<E> {
    pub fn x_p(&self) -> &E::G1 {
        &self.x_p
    }

    pub fn y_q(&self) -> &E::G2 {
        &self.y_q
    }
}

impl<E: Pairing> Encrypt<E> for PublicKey<E> {
    fn enc_g1_raw(&self, m: &[u64], r: &E::ScalarField) -> CipherTextG1<E> {
        let p = E::G1::generator();
        let r = r.into_bigint();
        CipherTextG1::from_parts(p.mul_bigint(m) + self.x_p.mul_bigint(r), p.mul_bigint(r))
    }

    fn enc_g2_raw(&self, m: &[u64], r: &E::ScalarField) -> CipherTextG2<E> {
        let q = E::G2::generator();
        let r = r.into_bigint();
        CipherTextG2::from_parts(q.mul_bigint(m) + self.y_q.mul_bigint(r), q.mul_bigint(r))
    }

    fn enc_gt_raw(&self, m: &[u64], r: &[E::ScalarField; 3]) -> CipherTextGT<E> {
        let p = E::G1::generator();
        let q = E::G2::generator();
        let [r0, r1, r2] = *r;

        // e(m P + r1 xP, Q) + e(P, r0 yQ) - e(r2 xP, yQ)
        let a = E::multi_pairing(
            [p.mul_bigint(m) + self.x_p * r1, p, -(self.x_p * r2)],
            [q, self.y_q * r0, self.y_q],
        );
        let g = PairingOutput::<E>::generator();

        CipherTextGT::from_tensor(Array2::from_shape_fn((2, 2), |(i, j)| match (i, j) {
            (0, 0) => a,
            (0, 1) => g * r0,
            (1, 0) => g * r1,
            _ => g * r2,
        }))
    }
}
