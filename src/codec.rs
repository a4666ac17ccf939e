//! Signed arbitrary-precision integers as group exponents.
//!
//! A message or scalar is handed to the group as the little-endian words of its
//! magnitude, and the sign is applied afterwards by negating the result. Values
//! that fit in an `i32` skip the big integer codec entirely.

use ark_ff::{BigInteger, PrimeField};
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;
use std::ops::Neg;

use crate::{Result, SheError};

/// Sign and magnitude of an integer, the magnitude as little-endian 32-bit limbs.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SignedLimbs {
    pub negative: bool,
    pub limbs: Vec<u32>,
}

impl SignedLimbs {
    /// The magnitude packed into 64-bit words, as taken by `mul_bigint`.
    pub fn to_words(&self) -> Vec<u64> {
        self.limbs
            .chunks(2)
            .map(|pair| pair[0] as u64 | (pair.get(1).copied().unwrap_or(0) as u64) << 32)
            .collect()
    }
}

/// Number of 32-bit limbs a magnitude may occupy for the scalar field `F`.
pub fn limb_capacity<F: PrimeField>() -> usize {
    <F::BigInt as BigInteger>::NUM_LIMBS * 2
}

/// Splits `m` into sign and limbs. Fails if the magnitude needs more than
/// `limb_count * 32` bits.
pub fn encode(m: &BigInt, limb_count: usize) -> Result<SignedLimbs> {
    let bits = m.bits();
    let max_bits = limb_count as u64 * 32;
    if bits > max_bits {
        return Err(SheError::EncodingOverflow { bits, max_bits });
    }

    let (sign, limbs) = m.to_u32_digits();
    Ok(SignedLimbs {
        negative: sign == Sign::Minus,
        limbs,
    })
}

pub fn decode(encoded: &SignedLimbs) -> BigInt {
    let sign = if encoded.limbs.iter().all(|&l| l == 0) {
        Sign::NoSign
    } else if encoded.negative {
        Sign::Minus
    } else {
        Sign::Plus
    };
    BigInt::from_slice(sign, &encoded.limbs)
}

/// Runs `exp` on the magnitude words of `m` and negates the output when `m` is
/// negative. `exp` must be a group homomorphism in the exponent.
pub(crate) fn signed_exp<C, F>(m: &BigInt, limb_count: usize, exp: F) -> Result<C>
where
    C: Neg<Output = C>,
    F: FnOnce(&[u64]) -> C,
{
    if let Some(small) = m.to_i32() {
        let c = exp(&[small.unsigned_abs() as u64]);
        return Ok(if small < 0 { -c } else { c });
    }

    let encoded = encode(m, limb_count)?;
    let c = exp(&encoded.to_words());
    Ok(if encoded.negative { -c } else { c })
}

#[cfg(test)]
mod test {
    use ark_bls12_381::Fr;
    use num_bigint::BigInt;

    use super::*;

    fn large() -> BigInt {
        BigInt::parse_bytes(b"140712384712047127412964192876419276341", 16).unwrap()
    }

    #[test]
    fn test_encode() {
        let m = large();
        let encoded = encode(&m, limb_capacity::<Fr>()).unwrap();
        assert!(!encoded.negative);
        assert_eq!(encoded.limbs.len(), 5);
        assert_eq!(encoded.limbs[0], 0x19276341);
        assert_eq!(decode(&encoded), m);

        let encoded = encode(&-m.clone(), limb_capacity::<Fr>()).unwrap();
        assert!(encoded.negative);
        assert_eq!(decode(&encoded), -m);
    }

    #[test]
    fn test_encode_zero() {
        let encoded = encode(&BigInt::from(0), limb_capacity::<Fr>()).unwrap();
        assert!(!encoded.negative);
        assert!(encoded.limbs.is_empty());
        assert_eq!(decode(&encoded), BigInt::from(0));
    }

    #[test]
    fn test_encode_overflow() {
        assert_eq!(limb_capacity::<Fr>(), 8);

        // 2^256 - 1 fits, 2^256 does not
        let max = (BigInt::from(1) << 256) - 1;
        assert!(encode(&max, 8).is_ok());
        assert!(encode(&-max, 8).is_ok());

        let too_large = BigInt::from(1) << 256;
        match encode(&too_large, 8) {
            Err(SheError::EncodingOverflow { bits, max_bits }) => {
                assert_eq!(bits, 257);
                assert_eq!(max_bits, 256);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_to_words() {
        let encoded = SignedLimbs {
            negative: false,
            limbs: vec![0x89abcdef, 0x01234567, 0x5],
        };
        assert_eq!(encoded.to_words(), vec![0x0123456789abcdef, 0x5]);
    }

    #[test]
    fn test_signed_exp() {
        let exp = |words: &[u64]| words.iter().map(|&w| w as i128).sum::<i128>();

        assert_eq!(signed_exp(&BigInt::from(-7), 8, exp).unwrap(), -7);
        assert_eq!(signed_exp(&BigInt::from(i32::MIN), 8, exp).unwrap(), i32::MIN as i128);

        // beyond i32 goes through the limb codec
        let m = BigInt::from(-(1i64 << 40));
        assert_eq!(signed_exp(&m, 8, exp).unwrap(), -(1i128 << 40));

        assert!(signed_exp(&(BigInt::from(1) << 300), 8, exp).is_err());
    }
}
