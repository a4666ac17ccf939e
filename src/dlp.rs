//! Bounded discrete logarithm by baby-step giant-step.
//!
//! The baby-step table holds `i * B` for `|i| <= hash_size`. Each giant step
//! moves the target by `(2 * hash_size + 1) * B` in both directions, so after
//! `try_num` steps every `m` with `|m| <= hash_size + try_num * (2 * hash_size + 1)`
//! has been covered.
//!
//! Table keys are SHA-256 digests of the compressed encodings, so an entry has
//! the same size in every group.

use ark_ec::PrimeGroup;
use ark_serialize::CanonicalSerialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::{debug, instrument, trace};

use crate::{Result, SheError};

#[derive(Clone, Debug)]
pub struct DlpTable<G: PrimeGroup> {
    base: G,
    // (2 * hash_size + 1) * base
    giant: G,
    hash_size: usize,
    try_num: usize,
    table: HashMap<[u8; 32], i64>,
}

impl<G: PrimeGroup> DlpTable<G> {
    #[instrument(level = "trace", skip_all, fields(hash_size = hash_size, try_num = try_num))]
    pub fn new(base: G, hash_size: usize, try_num: usize) -> Result<Self> {
        max_abs(hash_size, try_num)?;

        let mut table = HashMap::new();
        table
            .try_reserve(2 * hash_size + 1)
            .map_err(|_| SheError::ResourceExhausted)?;

        table.insert(key(&G::zero())?, 0);
        let mut cur = G::zero();
        for i in 1..=hash_size as i64 {
            cur += base;
            table.insert(key(&cur)?, i);
            table.insert(key(&-cur)?, -i);
        }
        let giant = cur + cur + base;

        debug!(entries = table.len(), "built discrete log table");

        Ok(Self {
            base,
            giant,
            hash_size,
            try_num,
            table,
        })
    }

    pub fn base(&self) -> &G {
        &self.base
    }

    pub fn hash_size(&self) -> usize {
        self.hash_size
    }

    pub fn try_num(&self) -> usize {
        self.try_num
    }

    pub fn set_try_num(&mut self, try_num: usize) -> Result<()> {
        max_abs(self.hash_size, try_num)?;
        self.try_num = try_num;
        Ok(())
    }

    /// Largest `|m|` that [`DlpTable::solve`] recovers.
    pub fn max_abs(&self) -> i64 {
        // checked on construction and in set_try_num
        (self.hash_size + self.try_num * (2 * self.hash_size + 1)) as i64
    }

    /// Finds `m` such that `m * base == target`.
    pub fn solve(&self, target: &G) -> Result<i64> {
        let step = 2 * self.hash_size as i64 + 1;

        let mut below = *target;
        let mut above = *target;
        for t in 0..=self.try_num as i64 {
            // below = target - t * giant
            if let Some(&i) = self.table.get(&key(&below)?) {
                return offset(t, step, i);
            }
            // above = target + t * giant
            if t > 0 {
                if let Some(&i) = self.table.get(&key(&above)?) {
                    return offset(-t, step, i);
                }
            }
            below -= self.giant;
            above += self.giant;
        }

        trace!(
            hash_size = self.hash_size,
            try_num = self.try_num,
            "discrete log not found in window"
        );
        Err(SheError::DecryptionRangeExceeded {
            max: self.max_abs(),
        })
    }
}

/// Window covered by `hash_size` and `try_num`, rejected when it does not fit an `i64`.
pub(crate) fn max_abs(hash_size: usize, try_num: usize) -> Result<i64> {
    if hash_size == 0 {
        return Err(SheError::InvalidParameter(
            "hash size of discrete log table must be positive".to_string(),
        ));
    }

    hash_size
        .checked_mul(2)
        .and_then(|h| h.checked_add(1))
        .and_then(|step| step.checked_mul(try_num))
        .and_then(|giant| giant.checked_add(hash_size))
        .and_then(|max| i64::try_from(max).ok())
        .ok_or_else(|| {
            SheError::InvalidParameter(format!(
                "discrete log window for hash size {} and try num {} overflows",
                hash_size, try_num
            ))
        })
}

fn offset(t: i64, step: i64, i: i64) -> Result<i64> {
    t.checked_mul(step)
        .and_then(|giant| giant.checked_add(i))
        .ok_or_else(|| SheError::DecryptionFailed("discrete log overflows i64".to_string()))
}

fn key<G: CanonicalSerialize>(g: &G) -> Result<[u8; 32]> {
    let mut buf = Vec::with_capacity(g.compressed_size());
    g.serialize_compressed(&mut buf)
        .map_err(|e| SheError::PrimitiveFailure(e.to_string()))?;
    Ok(Sha256::digest(&buf).into())
}
