//! Curve selection and discrete log configuration.

use ark_ec::{
    pairing::{Pairing, PairingOutput},
    PrimeGroup,
};
use tracing::{debug, instrument};

use crate::{curve::SheCurve, dlp::DlpTable, CurveId, Result, SheError};

/// Size of the discrete log search used by decryption.
///
/// Decryption recovers every plaintext `m` with
/// `|m| <= hash_size + try_num * (2 * hash_size + 1)`. The table costs
/// `2 * hash_size + 1` entries per group, each extra try costs two group
/// operations per decryption that lands outside the table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DlpConfig {
    pub hash_size: usize,
    pub try_num: usize,
}

impl Default for DlpConfig {
    fn default() -> Self {
        Self {
            hash_size: 1024,
            try_num: 2048,
        }
    }
}

/// Decryption context: the selected curve and one discrete log table per group.
///
/// Build it once and share it by reference. Changing the window requires
/// `&mut self`, so it cannot happen while decryptions borrow the context.
#[derive(Clone, Debug)]
pub struct Context<E: Pairing> {
    curve: CurveId,
    config: DlpConfig,
    g1: DlpTable<E::G1>,
    g2: DlpTable<E::G2>,
    gt: DlpTable<PairingOutput<E>>,
}

impl<E: SheCurve> Context<E> {
    /// Initializes the context for `curve` with the default window.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ark_bls12_381::Bls12_381 as E;
    /// use she::{Context, CurveId};
    ///
    /// let ctx = Context::<E>::init(CurveId::Bls12_381).unwrap();
    /// assert_eq!(ctx.max_plaintext(), 1024 + 2048 * 2049);
    ///
    /// assert!(Context::<E>::init(CurveId::Bn254).is_err());
    /// ```
    pub fn init(curve: CurveId) -> Result<Self> {
        Self::init_checked(curve, E::COMPILED_TIME_VAR)
    }

    /// Like [`Context::init`], additionally checking the build tag
    /// `FR_UNIT_SIZE * 10 + FP_UNIT_SIZE` the caller was built against.
    pub fn init_checked(curve: CurveId, compiled_time_var: usize) -> Result<Self> {
        if compiled_time_var != E::COMPILED_TIME_VAR {
            return Err(SheError::Initialization(format!(
                "compiled time variable {} does not match {} for {}",
                compiled_time_var,
                E::COMPILED_TIME_VAR,
                E::CURVE_ID
            )));
        }
        Self::with_config(curve, DlpConfig::default())
    }

    #[instrument(
        level = "trace",
        skip_all,
        fields(curve = %curve, hash_size = config.hash_size, try_num = config.try_num)
    )]
    pub fn with_config(curve: CurveId, config: DlpConfig) -> Result<Self> {
        if curve != E::CURVE_ID {
            return Err(SheError::Initialization(format!(
                "curve {} requested but the pairing engine is {}",
                curve,
                E::CURVE_ID
            )));
        }

        let ctx = Self {
            curve,
            config,
            g1: DlpTable::new(E::G1::generator(), config.hash_size, config.try_num)?,
            g2: DlpTable::new(E::G2::generator(), config.hash_size, config.try_num)?,
            gt: DlpTable::new(
                PairingOutput::<E>::generator(),
                config.hash_size,
                config.try_num,
            )?,
        };
        debug!(max_plaintext = ctx.max_plaintext(), "initialized context");
        Ok(ctx)
    }
}

impl<E: Pairing> Context<E> {
    pub fn curve(&self) -> CurveId {
        self.curve
    }

    pub fn config(&self) -> &DlpConfig {
        &self.config
    }

    /// Largest plaintext magnitude decryption recovers.
    pub fn max_plaintext(&self) -> i64 {
        self.g1.max_abs()
    }

    /// Rebuilds the discrete log tables with `2 * hash_size + 1` entries each.
    /// On failure the context keeps its previous tables.
    #[instrument(level = "trace", skip(self))]
    pub fn set_range_for_dlp(&mut self, hash_size: usize) -> Result<()> {
        let try_num = self.config.try_num;
        let g1 = DlpTable::new(*self.g1.base(), hash_size, try_num)?;
        let g2 = DlpTable::new(*self.g2.base(), hash_size, try_num)?;
        let gt = DlpTable::new(*self.gt.base(), hash_size, try_num)?;

        self.g1 = g1;
        self.g2 = g2;
        self.gt = gt;
        self.config.hash_size = hash_size;
        Ok(())
    }

    /// Sets how many giant steps decryption takes in each direction.
    pub fn set_try_num(&mut self, try_num: usize) -> Result<()> {
        crate::dlp::max_abs(self.config.hash_size, try_num)?;
        self.g1.set_try_num(try_num)?;
        self.g2.set_try_num(try_num)?;
        self.gt.set_try_num(try_num)?;
        self.config.try_num = try_num;
        Ok(())
    }

    pub(crate) fn dlp_g1(&self) -> &DlpTable<E::G1> {
        &self.g1
    }

    pub(crate) fn dlp_g2(&self) -> &DlpTable<E::G2> {
        &self.g2
    }

    pub(crate) fn dlp_gt(&self) -> &DlpTable<PairingOutput<E>> {
        &self.gt
    }
}
