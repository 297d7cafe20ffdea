//! Closed-form sigmoid supply curve.
//!
//! S(t) = cap / (1 + e^(−k·(t − midpoint)))
//!
//! Slow start, maximal growth at the midpoint, saturating tail. The curve
//! itself is continuous; quantization into per-era integer rewards lives in
//! [`crate::schedule`].

use crate::params::ScheduleParams;
use crate::types::BlockNumber;

/// Exponent magnitude beyond which `exp` would over/underflow an f64.
/// Symmetric around 0 so the midpoint stays unbiased.
const EXP_CLAMP: f64 = 700.0;

/// Evaluates cumulative supply at a block height.
#[derive(Clone, Copy, Debug)]
pub struct SupplyCurve {
    cap: f64,
    midpoint: f64,
    growth_rate: f64,
}

impl SupplyCurve {
    /// Curve for a parameter set.
    pub fn new(params: &ScheduleParams) -> Self {
        Self::with_shape(
            params.max_supply_plancks as f64,
            params.midpoint(),
            params.growth_rate(),
        )
    }

    /// Curve with an explicit shape, bypassing parameter derivation.
    pub fn with_shape(cap: f64, midpoint: f64, growth_rate: f64) -> Self {
        Self {
            cap,
            midpoint,
            growth_rate,
        }
    }

    /// Cumulative supply at block height `t`, in planck.
    ///
    /// Monotonic non-decreasing in `t` and bounded in `[0, cap]`. At the
    /// midpoint the exponent is exactly 0, so the result is exactly
    /// `cap / 2`.
    pub fn evaluate(&self, t: BlockNumber) -> f64 {
        let exponent = -self.growth_rate * (t as f64 - self.midpoint);
        if exponent > EXP_CLAMP {
            0.0
        } else if exponent < -EXP_CLAMP {
            self.cap
        } else {
            self.cap / (1.0 + exponent.exp())
        }
    }
}
