use ark_ec::pairing::{Pairing, PairingOutput};
use ark_std::Zero;
use ndarray::Array2;
use std::ops::Mul;

/// Pairing product of a G1 matrix and a G2 matrix. Multiplying a (2, 1)
/// ciphertext column by a (1, 2) ciphertext row gives the (2, 2) tensor that
/// makes up a GT ciphertext.
pub(crate) fn dot_e<E: Pairing>(a: &Array2<E::G1>, b: &Array2<E::G2>) -> Array2<PairingOutput<E>> {
    let (m, n_prime) = a.dim();
    let (m_prime, n) = b.dim();
    assert!(n_prime == m_prime);

    let mut res = Array2::from_elem((m, n), PairingOutput::zero());
    for i in 0..m {
        for j in 0..n {
            let mut sum = PairingOutput::zero();
            for k in 0..n_prime {
                sum += E::pairing(a[[i, k]], b[[k, j]]);
            }
            res[[i, j]] = sum;
        }
    }

    res
}

pub(crate) fn dot_es<E: Pairing>(
    a: &Array2<PairingOutput<E>>,
    b: &Array2<E::ScalarField>,
) -> Array2<PairingOutput<E>> {
    let (m, n_prime) = a.dim();
    let (m_prime, n) = b.dim();
    assert!(n_prime == m_prime);

    let mut res = Array2::from_elem((m, n), PairingOutput::zero());
    for i in 0..m {
        for j in 0..n {
            let mut sum = PairingOutput::zero();
            for k in 0..n_prime {
                sum += a[[i, k]].mul(b[[k, j]]);
            }
            res[[i, j]] = sum;
        }
    }

    res
}

pub(crate) fn dot_s1<E: Pairing>(a: &Array2<E::ScalarField>, b: &Array2<E::G1>) -> Array2<E::G1> {
    let (m, n_prime) = a.dim();
    let (m_prime, n) = b.dim();
    assert!(n_prime == m_prime);

    let mut res = Array2::from_elem((m, n), E::G1::zero());
    for i in 0..m {
        for j in 0..n {
            let mut sum = E::G1::zero();
            for k in 0..n_prime {
                sum += b[[k, j]].mul(a[[i, k]]);
            }
            res[[i, j]] = sum;
        }
    }

    res
}

pub(crate) fn dot_s2<E: Pairing>(a: &Array2<E::ScalarField>, b: &Array2<E::G2>) -> Array2<E::G2> {
    let (m, n_prime) = a.dim();
    let (m_prime, n) = b.dim();
    assert!(n_prime == m_prime);

    let mut res = Array2::from_elem((m, n), E::G2::zero());
    for i in 0..m {
        for j in 0..n {
            let mut sum = E::G2::zero();
            for k in 0..n_prime {
                sum += b[[k, j]].mul(a[[i, k]]);
            }
            res[[i, j]] = sum;
        }
    }

    res
}

/// Row vector `(1, -s)` that strips the mask `s` from a `(S, T)` column.
pub(crate) fn unmask_row<E: Pairing>(s: E::ScalarField) -> Array2<E::ScalarField> {
    Array2::from_shape_fn((1, 2), |(_, j)| if j == 0 { E::ScalarField::from(1u64) } else { -s })
}
