use crate::constants;
use crate::errors::ScheduleError;
use crate::types::{BlockNumber, Planck};
use serde::{Deserialize, Serialize};

/// Fixed generation-time parameters for the emission schedule.
///
/// Constructed once at process start; the derived schedule is a pure
/// function of these values, so identical parameters always reproduce an
/// identical table on every node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleParams {
    /// Hard supply cap in planck.
    pub max_supply_plancks: Planck,
    /// Blocks produced per year (365.25 days at the target block time).
    pub blocks_per_year: u64,
    /// Target block time in seconds.
    pub block_time_seconds: u32,
    /// Emission duration in years.
    pub total_years: u64,
    /// Era length in blocks (24 hours at the target block time).
    pub blocks_per_era: u32,
}

impl Default for ScheduleParams {
    fn default() -> Self {
        Self {
            max_supply_plancks: constants::max_supply_plancks(),
            // 365.25 * 24 * 60 * 60 / 6
            blocks_per_year: 5_256_000,
            block_time_seconds: 6,
            total_years: 20,
            blocks_per_era: 14_400,
        }
    }
}

impl ScheduleParams {
    /// Total number of blocks over the emission duration.
    pub fn total_blocks(&self) -> BlockNumber {
        self.total_years * self.blocks_per_year
    }

    /// Inflection point of the curve; half the cap is emitted by here.
    pub fn midpoint(&self) -> f64 {
        self.total_blocks() as f64 / 2.0
    }

    /// Curve steepness k = 10 / midpoint, spanning ~0.01%..99.99% of the
    /// cap over the emission window (exponent ±10 at the endpoints).
    pub fn growth_rate(&self) -> f64 {
        10.0 / self.midpoint()
    }

    /// Number of eras in the schedule.
    ///
    /// Exact by construction once [`validate`](Self::validate) has passed.
    pub fn total_eras(&self) -> usize {
        (self.total_blocks() / self.blocks_per_era as u64) as usize
    }

    /// Reject configurations the schedule cannot honor exactly.
    ///
    /// An uneven era partition is a hard error: flooring it away would
    /// silently shorten the schedule.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.max_supply_plancks == 0 {
            return Err(ScheduleError::InvalidParameter("max_supply_plancks"));
        }
        if self.blocks_per_year == 0 {
            return Err(ScheduleError::InvalidParameter("blocks_per_year"));
        }
        if self.block_time_seconds == 0 {
            return Err(ScheduleError::InvalidParameter("block_time_seconds"));
        }
        if self.total_years == 0 {
            return Err(ScheduleError::InvalidParameter("total_years"));
        }
        if self.blocks_per_era == 0 {
            return Err(ScheduleError::InvalidParameter("blocks_per_era"));
        }

        let total_blocks = self
            .total_years
            .checked_mul(self.blocks_per_year)
            .ok_or(ScheduleError::ArithmeticOverflow("computing total blocks"))?;

        if total_blocks % self.blocks_per_era as u64 != 0 {
            return Err(ScheduleError::UnevenEraPartition {
                total_blocks,
                blocks_per_era: self.blocks_per_era,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_validate() {
        let params = ScheduleParams::default();
        assert!(params.validate().is_ok());

        assert_eq!(params.total_blocks(), 105_120_000);
        assert_eq!(params.total_eras(), 7_300);
        assert_eq!(params.midpoint(), 52_560_000.0);
    }

    #[test]
    fn growth_rate_spans_ten_at_genesis() {
        let params = ScheduleParams::default();
        // k * midpoint = 10 by definition
        assert!((params.growth_rate() * params.midpoint() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn uneven_partition_is_rejected() {
        let params = ScheduleParams {
            blocks_per_era: 14_399,
            ..Default::default()
        };

        match params.validate() {
            Err(ScheduleError::UnevenEraPartition {
                total_blocks,
                blocks_per_era,
            }) => {
                assert_eq!(total_blocks, 105_120_000);
                assert_eq!(blocks_per_era, 14_399);
            }
            other => panic!("expected UnevenEraPartition, got {other:?}"),
        }
    }

    #[test]
    fn zero_parameters_are_rejected() {
        let params = ScheduleParams {
            blocks_per_era: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ScheduleError::InvalidParameter("blocks_per_era"))
        ));

        let params = ScheduleParams {
            total_years: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ScheduleError::InvalidParameter("total_years"))
        ));
    }
}
