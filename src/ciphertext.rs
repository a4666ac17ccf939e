//! Ciphertexts and their homomorphic operations.
//!
//! A G1 or G2 ciphertext is the column `(m B + r sB, r B)` for the group
//! generator `B` and the secret exponent `s`. A GT ciphertext is a 2x2 tensor
//! that the secret key contracts from both sides, which is what a pairing of a
//! G1 column with a G2 row produces.

use ark_ec::{
    pairing::{Pairing, PairingOutput},
    PrimeGroup,
};
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, Read, SerializationError, Valid, Validate,
    Write,
};
use ark_std::Zero;
use ndarray::Array2;
use num_bigint::BigInt;
use std::{
    fmt,
    ops::{Add, Neg, Sub},
};

use crate::{
    arith::dot_e,
    codec::{limb_capacity, signed_exp},
    Result, SheError,
};

/// The group a ciphertext lives in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Group {
    G1,
    G2,
    GT,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::G1 => write!(f, "G1"),
            Group::G2 => write!(f, "G2"),
            Group::GT => write!(f, "GT"),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CipherTextG1<E: Pairing> {
    // dim = (2, 1)
    pub(crate) c: Array2<E::G1>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CipherTextG2<E: Pairing> {
    // dim = (2, 1)
    pub(crate) c: Array2<E::G2>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CipherTextGT<E: Pairing> {
    // dim = (2, 2)
    pub(crate) c: Array2<PairingOutput<E>>,
}

impl<E: Pairing> CipherTextG1<E> {
    pub(crate) fn from_parts(s: E::G1, t: E::G1) -> Self {
        Self {
            c: Array2::from_shape_fn((2, 1), |(i, _)| if i == 0 { s } else { t }),
        }
    }

    /// `(P, 0)`, an encryption of 1 under any key.
    pub(crate) fn trivial_one() -> Self {
        Self::from_parts(E::G1::generator(), E::G1::zero())
    }

    /// Multiplies the plaintext by the integer `k`.
    pub fn mul_int(&self, k: impl Into<BigInt>) -> Result<Self> {
        signed_exp(&k.into(), limb_capacity::<E::ScalarField>(), |k| Self {
            c: self.c.mapv(|g| g.mul_bigint(k)),
        })
    }

    /// Multiplies the plaintexts of `self` and `rhs` through the pairing.
    pub fn mul(&self, rhs: &CipherTextG2<E>) -> CipherTextGT<E> {
        CipherTextGT {
            c: dot_e::<E>(&self.c, &rhs.c.clone().reversed_axes()),
        }
    }

    /// The same plaintext as a GT ciphertext.
    pub fn convert(&self) -> CipherTextGT<E> {
        self.mul(&CipherTextG2::trivial_one())
    }
}

impl<E: Pairing> CipherTextG2<E> {
    pub(crate) fn from_parts(s: E::G2, t: E::G2) -> Self {
        Self {
            c: Array2::from_shape_fn((2, 1), |(i, _)| if i == 0 { s } else { t }),
        }
    }

    /// `(Q, 0)`, an encryption of 1 under any key.
    pub(crate) fn trivial_one() -> Self {
        Self::from_parts(E::G2::generator(), E::G2::zero())
    }

    /// Multiplies the plaintext by the integer `k`.
    pub fn mul_int(&self, k: impl Into<BigInt>) -> Result<Self> {
        signed_exp(&k.into(), limb_capacity::<E::ScalarField>(), |k| Self {
            c: self.c.mapv(|g| g.mul_bigint(k)),
        })
    }

    /// The same plaintext as a GT ciphertext.
    pub fn convert(&self) -> CipherTextGT<E> {
        CipherTextG1::trivial_one().mul(self)
    }
}

impl<E: Pairing> CipherTextGT<E> {
    pub(crate) fn from_tensor(c: Array2<PairingOutput<E>>) -> Self {
        debug_assert_eq!(c.dim(), (2, 2));
        Self { c }
    }

    /// Multiplies the plaintext by the integer `k`.
    pub fn mul_int(&self, k: impl Into<BigInt>) -> Result<Self> {
        signed_exp(&k.into(), limb_capacity::<E::ScalarField>(), |k| Self {
            c: self.c.mapv(|g| g.mul_bigint(k)),
        })
    }
}

macro_rules! impl_additive_ops {
    ($ct:ident) => {
        impl<E: Pairing> Neg for $ct<E> {
            type Output = $ct<E>;

            fn neg(self) -> Self::Output {
                $ct { c: -self.c }
            }
        }

        impl<E: Pairing> Neg for &$ct<E> {
            type Output = $ct<E>;

            fn neg(self) -> Self::Output {
                $ct { c: -self.c.clone() }
            }
        }

        impl<E: Pairing> Add for $ct<E> {
            type Output = $ct<E>;

            fn add(self, rhs: Self) -> Self::Output {
                $ct { c: self.c + rhs.c }
            }
        }

        impl<'a, 'b, E: Pairing> Add<&'b $ct<E>> for &'a $ct<E> {
            type Output = $ct<E>;

            fn add(self, rhs: &'b $ct<E>) -> Self::Output {
                $ct { c: &self.c + &rhs.c }
            }
        }

        impl<E: Pairing> Sub for $ct<E> {
            type Output = $ct<E>;

            fn sub(self, rhs: Self) -> Self::Output {
                $ct { c: self.c - rhs.c }
            }
        }

        impl<'a, 'b, E: Pairing> Sub<&'b $ct<E>> for &'a $ct<E> {
            type Output = $ct<E>;

            fn sub(self, rhs: &'b $ct<E>) -> Self::Output {
                $ct { c: &self.c - &rhs.c }
            }
        }
    };
}

impl_additive_ops!(CipherTextG1);
impl_additive_ops!(CipherTextG2);
impl_additive_ops!(CipherTextGT);

// Ciphertexts serialize as their group elements in row-major order, without
// a length prefix since the shape is fixed by the type.
macro_rules! impl_serialization {
    ($ct:ident, $elem:ty, $shape:expr) => {
        impl<E: Pairing> CanonicalSerialize for $ct<E> {
            fn serialize_with_mode<W: Write>(
                &self,
                mut writer: W,
                compress: Compress,
            ) -> std::result::Result<(), SerializationError> {
                for g in self.c.iter() {
                    g.serialize_with_mode(&mut writer, compress)?;
                }
                Ok(())
            }

            fn serialized_size(&self, compress: Compress) -> usize {
                self.c.iter().map(|g| g.serialized_size(compress)).sum()
            }
        }

        impl<E: Pairing> Valid for $ct<E> {
            fn check(&self) -> std::result::Result<(), SerializationError> {
                for g in self.c.iter() {
                    g.check()?;
                }
                Ok(())
            }
        }

        impl<E: Pairing> CanonicalDeserialize for $ct<E> {
            fn deserialize_with_mode<R: Read>(
                mut reader: R,
                compress: Compress,
                validate: Validate,
            ) -> std::result::Result<Self, SerializationError> {
                let shape: (usize, usize) = $shape;
                let elems = (0..shape.0 * shape.1)
                    .map(|_| <$elem>::deserialize_with_mode(&mut reader, compress, validate))
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                let c = Array2::from_shape_vec(shape, elems)
                    .map_err(|_| SerializationError::InvalidData)?;
                Ok($ct { c })
            }
        }
    };
}

impl_serialization!(CipherTextG1, E::G1, (2, 1));
impl_serialization!(CipherTextG2, E::G2, (2, 1));
impl_serialization!(CipherTextGT, PairingOutput<E>, (2, 2));

/// A ciphertext of any of the three groups, for callers that only know the
/// group at runtime. Operations that are not defined for the given
/// combination fail with [`SheError::TypeMismatch`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CipherText<E: Pairing> {
    G1(CipherTextG1<E>),
    G2(CipherTextG2<E>),
    GT(CipherTextGT<E>),
}

impl<E: Pairing> CipherText<E> {
    pub fn group(&self) -> Group {
        match self {
            CipherText::G1(_) => Group::G1,
            CipherText::G2(_) => Group::G2,
            CipherText::GT(_) => Group::GT,
        }
    }

    pub fn neg(&self) -> Self {
        match self {
            CipherText::G1(c) => CipherText::G1(-c),
            CipherText::G2(c) => CipherText::G2(-c),
            CipherText::GT(c) => CipherText::GT(-c),
        }
    }

    pub fn add(&self, rhs: &Self) -> Result<Self> {
        match (self, rhs) {
            (CipherText::G1(x), CipherText::G1(y)) => Ok(CipherText::G1(x + y)),
            (CipherText::G2(x), CipherText::G2(y)) => Ok(CipherText::G2(x + y)),
            (CipherText::GT(x), CipherText::GT(y)) => Ok(CipherText::GT(x + y)),
            _ => Err(self.mismatch(rhs)),
        }
    }

    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        match (self, rhs) {
            (CipherText::G1(x), CipherText::G1(y)) => Ok(CipherText::G1(x - y)),
            (CipherText::G2(x), CipherText::G2(y)) => Ok(CipherText::G2(x - y)),
            (CipherText::GT(x), CipherText::GT(y)) => Ok(CipherText::GT(x - y)),
            _ => Err(self.mismatch(rhs)),
        }
    }

    /// Multiplies the plaintext by the integer `k`, staying in the same group.
    pub fn mul_int(&self, k: impl Into<BigInt>) -> Result<Self> {
        match self {
            CipherText::G1(c) => c.mul_int(k).map(CipherText::G1),
            CipherText::G2(c) => c.mul_int(k).map(CipherText::G2),
            CipherText::GT(c) => c.mul_int(k).map(CipherText::GT),
        }
    }

    /// Multiplies a G1 ciphertext by a G2 ciphertext into GT.
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        match (self, rhs) {
            (CipherText::G1(x), CipherText::G2(y)) => Ok(CipherText::GT(x.mul(y))),
            _ => Err(self.mismatch(rhs)),
        }
    }

    fn mismatch(&self, rhs: &Self) -> SheError {
        SheError::TypeMismatch {
            left: self.group(),
            right: rhs.group(),
        }
    }
}

impl<E: Pairing> From<CipherTextG1<E>> for CipherText<E> {
    fn from(c: CipherTextG1<E>) -> Self {
        CipherText::G1(c)
    }
}

impl<E: Pairing> From<CipherTextG2<E>> for CipherText<E> {
    fn from(c: CipherTextG2<E>) -> Self {
        CipherText::G2(c)
    }
}

impl<E: Pairing> From<CipherTextGT<E>> for CipherText<E> {
    fn from(c: CipherTextGT<E>) -> Self {
        CipherText::GT(c)
    }
}
