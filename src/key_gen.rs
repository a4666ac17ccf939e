use ark_ec::pairing::Pairing;
use ark_std::rand::Rng;
use rand_core::CryptoRng;

use crate::{PublicKey, SecretKey};

/// Key generation: a fresh secret key and the public key derived from it.
///
/// # Example
///
/// ```rust
/// use ark_bls12_381::Bls12_381 as E;
/// use rand::thread_rng;
/// use she::{Context, CurveId, DlpConfig, Encrypt};
///
/// let rng = &mut thread_rng();
/// let config = DlpConfig { hash_size: 64, try_num: 16 };
/// let ctx = Context::<E>::with_config(CurveId::Bls12_381, config).unwrap();
///
/// let (sk, pk) = she::key_gen::<E, _>(rng);
///
/// let c1 = pk.encrypt_g1(rng, 1).unwrap();
/// let c2 = pk.encrypt_g1(rng, 5).unwrap();
/// assert_eq!(sk.decrypt_g1(&ctx, &c1).unwrap(), 1);
/// assert_eq!(sk.decrypt_g1(&ctx, &c2).unwrap(), 5);
/// assert_eq!(sk.decrypt_g1(&ctx, &(&c1 + &c2)).unwrap(), 6);
/// assert_eq!(sk.decrypt_g1(&ctx, &(&c1 - &c2)).unwrap(), -4);
///
/// // G1 x G2 -> GT
/// let c3 = pk.encrypt_g2(rng, -4).unwrap();
/// assert_eq!(sk.decrypt_gt(&ctx, &c1.mul(&c3)).unwrap(), -4);
/// ```
pub fn key_gen<E: Pairing, R: Rng + CryptoRng>(rng: &mut R) -> (SecretKey<E>, PublicKey<E>) {
    let sk = SecretKey::generate(rng);
    let pk = sk.public_key();
    (sk, pk)
}
