use std::fmt;

use ark_ec::{pairing::Pairing, PrimeGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{rand::Rng, UniformRand, Zero};
use rand_core::CryptoRng;

use crate::{
    arith::{dot_es, dot_s1, dot_s2, unmask_row},
    CipherText, CipherTextG1, CipherTextG2, CipherTextGT, Context, PublicKey,
};

/// Secret key `(x, y)`: `x` unmasks G1 ciphertexts, `y` unmasks G2
/// ciphertexts and both together unmask GT ciphertexts.
#[derive(Clone, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct SecretKey<E: Pairing> {
    pub(crate) x: E::ScalarField,
    pub(crate) y: E::ScalarField,
}

// exponents stay out of logs and panic messages
impl<E: Pairing> fmt::Debug for SecretKey<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

impl<E: Pairing> SecretKey<E> {
    pub fn generate<R: Rng + CryptoRng>(rng: &mut R) -> Self {
        Self {
            x: E::ScalarField::rand(rng),
            y: E::ScalarField::rand(rng),
        }
    }

    pub fn public_key(&self) -> PublicKey<E> {
        PublicKey {
            x_p: E::G1::generator() * self.x,
            y_q: E::G2::generator() * self.y,
        }
    }

    /// `m P` for the G1 ciphertext `(m P + r xP, r P)`.
    fn unmask_g1(&self, c: &CipherTextG1<E>) -> E::G1 {
        // (1, -x) * [c]_1
        dot_s1::<E>(&unmask_row::<E>(self.x), &c.c)[(0, 0)]
    }

    fn unmask_g2(&self, c: &CipherTextG2<E>) -> E::G2 {
        // (1, -y) * [c]_2
        dot_s2::<E>(&unmask_row::<E>(self.y), &c.c)[(0, 0)]
    }

    fn unmask_gt(&self, c: &CipherTextGT<E>) -> ark_ec::pairing::PairingOutput<E> {
        // (1, -x) * [c]_T * (1, -y)^T
        let right = dot_es::<E>(&c.c, &unmask_row::<E>(self.y).reversed_axes()); // (2, 1)
        dot_es::<E>(
            &right.reversed_axes(),
            &unmask_row::<E>(self.x).reversed_axes(),
        )[(0, 0)]
    }

    pub fn decrypt_g1(&self, ctx: &Context<E>, c: &CipherTextG1<E>) -> crate::Result<i64> {
        ctx.dlp_g1().solve(&self.unmask_g1(c))
    }

    pub fn decrypt_g2(&self, ctx: &Context<E>, c: &CipherTextG2<E>) -> crate::Result<i64> {
        ctx.dlp_g2().solve(&self.unmask_g2(c))
    }

    pub fn decrypt_gt(&self, ctx: &Context<E>, c: &CipherTextGT<E>) -> crate::Result<i64> {
        ctx.dlp_gt().solve(&self.unmask_gt(c))
    }

    pub fn decrypt(&self, ctx: &Context<E>, c: &CipherText<E>) -> crate::Result<i64> {
        match c {
            CipherText::G1(c) => self.decrypt_g1(ctx, c),
            CipherText::G2(c) => self.decrypt_g2(ctx, c),
            CipherText::GT(c) => self.decrypt_gt(ctx, c),
        }
    }

    /// Whether `c` encrypts zero. Needs no discrete log search.
    pub fn is_zero(&self, c: &CipherText<E>) -> bool {
        match c {
            CipherText::G1(c) => self.unmask_g1(c).is_zero(),
            CipherText::G2(c) => self.unmask_g2(c).is_zero(),
            CipherText::GT(c) => self.unmask_gt(c).is_zero(),
        }
    }
}

#[cfg(test)]
mod test {

    use ark_bls12_381::Bls12_381 as E;
    use ark_bn254::Bn254;
    use num_bigint::BigInt;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{CurveId, DlpConfig, Encrypt, SheError};

    use super::*;

    fn context() -> Context<E> {
        let config = DlpConfig {
            hash_size: 16,
            try_num: 4,
        };
        Context::with_config(CurveId::Bls12_381, config).unwrap()
    }

    #[test]
    fn test_public_key_is_deterministic() {
        let rng = &mut StdRng::seed_from_u64(0);
        let sk = SecretKey::<E>::generate(rng);
        assert_eq!(sk.public_key(), sk.public_key());
        assert_ne!(sk, SecretKey::<E>::generate(rng));
    }

    #[test]
    fn test_debug_hides_exponents() {
        let rng = &mut StdRng::seed_from_u64(0);
        let sk = SecretKey::<E>::generate(rng);

        let printed = format!("{:?}", sk);
        assert_eq!(printed, "SecretKey { .. }");
        assert!(!printed.contains(&sk.x.to_string()));
        assert!(!printed.contains(&sk.y.to_string()));
    }

    #[test]
    fn test_window_boundary() {
        let rng = &mut StdRng::seed_from_u64(0);
        let ctx = context();
        let sk = SecretKey::<E>::generate(rng);
        let pk = sk.public_key();
        let max = ctx.max_plaintext();

        let c = pk.encrypt_g1(rng, max).unwrap();
        assert_eq!(sk.decrypt_g1(&ctx, &c).unwrap(), max);
        let c = pk.encrypt_g1(rng, max + 1).unwrap();
        assert!(matches!(
            sk.decrypt_g1(&ctx, &c),
            Err(SheError::DecryptionRangeExceeded { .. })
        ));

        let c = pk.encrypt_g2(rng, -max).unwrap();
        assert_eq!(sk.decrypt_g2(&ctx, &c).unwrap(), -max);
        let c = pk.encrypt_g2(rng, -max - 1).unwrap();
        assert!(matches!(
            sk.decrypt_g2(&ctx, &c),
            Err(SheError::DecryptionRangeExceeded { .. })
        ));

        let c = pk.encrypt_gt(rng, max).unwrap();
        assert_eq!(sk.decrypt_gt(&ctx, &c).unwrap(), max);
        let c = pk.encrypt_gt(rng, max + 1).unwrap();
        assert!(matches!(
            sk.decrypt_gt(&ctx, &c),
            Err(SheError::DecryptionRangeExceeded { .. })
        ));
    }

    #[test]
    fn test_extend_window() {
        let rng = &mut StdRng::seed_from_u64(0);
        let mut ctx = context();
        let sk = SecretKey::<E>::generate(rng);
        let pk = sk.public_key();

        let c = pk.encrypt_g1(rng, 1000).unwrap();
        assert!(sk.decrypt_g1(&ctx, &c).is_err());

        ctx.set_try_num(40).unwrap();
        assert_eq!(sk.decrypt_g1(&ctx, &c).unwrap(), 1000);

        ctx.set_try_num(0).unwrap();
        ctx.set_range_for_dlp(1000).unwrap();
        assert_eq!(sk.decrypt_g1(&ctx, &c).unwrap(), 1000);
    }

    #[test]
    fn test_wrong_key() {
        let rng = &mut StdRng::seed_from_u64(0);
        let ctx = context();
        let sk = SecretKey::<E>::generate(rng);
        let other = SecretKey::<E>::generate(rng);

        let c = sk.public_key().encrypt_g1(rng, 3).unwrap();
        assert!(other.decrypt_g1(&ctx, &c).is_err());
    }

    #[test]
    fn test_is_zero() {
        let rng = &mut StdRng::seed_from_u64(0);
        let sk = SecretKey::<E>::generate(rng);
        let pk = sk.public_key();

        let c1 = pk.encrypt_g1(rng, 0).unwrap();
        assert!(sk.is_zero(&c1.clone().into()));
        assert!(!sk.is_zero(&pk.encrypt_g1(rng, 1).unwrap().into()));

        let c2 = pk.encrypt_g2(rng, 8).unwrap();
        assert!(!sk.is_zero(&c2.clone().into()));
        assert!(sk.is_zero(&(&c2 - &c2).into()));

        assert!(sk.is_zero(&c1.mul(&c2).into()));
        assert!(!sk.is_zero(&pk.encrypt_gt(rng, -1).unwrap().into()));
    }

    #[test]
    fn test_decrypt_large_integer() {
        let rng = &mut StdRng::seed_from_u64(0);
        let ctx = context();
        let sk = SecretKey::<E>::generate(rng);
        let pk = sk.public_key();

        let m1 = BigInt::parse_bytes(b"140712384712047127412964192876419276341", 16).unwrap();
        let m2 = -m1.clone() + BigInt::from(123);

        let c1 = pk.encrypt_g1(rng, m1.clone()).unwrap();
        let c2 = pk.encrypt_g1(rng, m2.clone()).unwrap();
        assert_eq!(sk.decrypt_g1(&ctx, &(&c1 + &c2)).unwrap(), 123);
        let c1 = pk.encrypt_g1(rng, 1).unwrap().mul_int(m1.clone()).unwrap();
        assert_eq!(sk.decrypt_g1(&ctx, &(&c1 + &c2)).unwrap(), 123);

        let c1 = pk.encrypt_g2(rng, m1.clone()).unwrap();
        let c2 = pk.encrypt_g2(rng, m2.clone()).unwrap();
        assert_eq!(sk.decrypt_g2(&ctx, &(&c1 + &c2)).unwrap(), 123);
        let c1 = pk.encrypt_g2(rng, 1).unwrap().mul_int(m1.clone()).unwrap();
        assert_eq!(sk.decrypt_g2(&ctx, &(&c1 + &c2)).unwrap(), 123);

        let c1 = pk.encrypt_gt(rng, m1.clone()).unwrap();
        let c2 = pk.encrypt_gt(rng, m2).unwrap();
        assert_eq!(sk.decrypt_gt(&ctx, &(&c1 + &c2)).unwrap(), 123);
        let c1 = pk.encrypt_gt(rng, 1).unwrap().mul_int(m1).unwrap();
        assert_eq!(sk.decrypt_gt(&ctx, &(&c1 + &c2)).unwrap(), 123);
    }

    #[test]
    fn test_bn254() {
        let rng = &mut StdRng::seed_from_u64(0);
        let config = DlpConfig {
            hash_size: 16,
            try_num: 4,
        };
        let ctx = Context::<Bn254>::with_config(CurveId::Bn254, config).unwrap();
        let sk = SecretKey::<Bn254>::generate(rng);
        let pk = sk.public_key();

        let c1 = pk.encrypt_g1(rng, 6).unwrap();
        let c2 = pk.encrypt_g2(rng, -7).unwrap();
        assert_eq!(sk.decrypt_g1(&ctx, &c1).unwrap(), 6);
        assert_eq!(sk.decrypt_g2(&ctx, &c2).unwrap(), -7);
        assert_eq!(sk.decrypt_gt(&ctx, &c1.mul(&c2)).unwrap(), -42);
    }
}
