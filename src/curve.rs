//! Supported pairing curves and the build tag checked at initialization.

use ark_ec::pairing::Pairing;
use std::fmt;

/// Identifier of a supported pairing curve.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CurveId {
    /// The 254-bit Barreto-Naehrig curve.
    Bn254 = 0,
    /// The 381-bit BLS12 curve.
    Bls12_381 = 5,
}

impl CurveId {
    pub fn from_u32(id: u32) -> Option<Self> {
        match id {
            0 => Some(CurveId::Bn254),
            5 => Some(CurveId::Bls12_381),
            _ => None,
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveId::Bn254 => write!(f, "BN254"),
            CurveId::Bls12_381 => write!(f, "BLS12-381"),
        }
    }
}

/// A pairing engine usable by the scheme.
///
/// `FR_UNIT_SIZE` and `FP_UNIT_SIZE` are the 64-bit word counts of the scalar
/// and base fields. They make up the tag that a caller built against a given
/// curve must present at [`crate::Context::init_checked`].
pub trait SheCurve: Pairing {
    const CURVE_ID: CurveId;
    const FR_UNIT_SIZE: usize;
    const FP_UNIT_SIZE: usize;
    const COMPILED_TIME_VAR: usize = Self::FR_UNIT_SIZE * 10 + Self::FP_UNIT_SIZE;
}

impl SheCurve for ark_bn254::Bn254 {
    const CURVE_ID: CurveId = CurveId::Bn254;
    const FR_UNIT_SIZE: usize = 4;
    const FP_UNIT_SIZE: usize = 4;
}

impl SheCurve for ark_bls12_381::Bls12_381 {
    const CURVE_ID: CurveId = CurveId::Bls12_381;
    const FR_UNIT_SIZE: usize = 4;
    const FP_UNIT_SIZE: usize = 6;
}
