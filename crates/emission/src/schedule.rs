//! Quantization of the continuous curve into per-era integer rewards.
//!
//! One pass over the eras, threading the previous cumulative sample through
//! the loop. The fractional remainder of each era's floor division is
//! discarded dust, not carried forward.

use crate::curve::SupplyCurve;
use crate::errors::ScheduleError;
use crate::params::ScheduleParams;
use crate::types::{EraIndex, Planck};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Discrete per-era reward schedule with peak statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardSchedule {
    /// Per-block reward for each era; index 0 is era 1.
    pub rewards: Vec<Planck>,
    /// Largest per-block reward in the schedule.
    pub peak_reward: Planck,
    /// 1-based era holding the peak; ties resolve to the first occurrence.
    pub peak_era: EraIndex,
    /// Σ reward × blocks_per_era over the whole schedule.
    pub total_emitted: Planck,
}

/// Build the full reward schedule for `params`.
///
/// Fails before computing anything if the configuration cannot be honored
/// exactly, and after computing if the quantized total would exceed the
/// hard cap. No partial schedule is ever returned.
pub fn build_schedule(params: &ScheduleParams) -> Result<RewardSchedule, ScheduleError> {
    params.validate()?;

    let curve = SupplyCurve::new(params);
    let blocks_per_era = params.blocks_per_era as u64;
    let total_eras = params.total_eras() as EraIndex;

    let mut rewards = Vec::with_capacity(params.total_eras());
    let mut previous_supply = 0.0_f64;
    let mut peak_reward: Planck = 0;
    let mut peak_era: EraIndex = 0;
    let mut total_emitted: Planck = 0;

    for era in 1..=total_eras {
        let t = era * blocks_per_era;
        let current_supply = curve.evaluate(t);

        let mut minted = current_supply - previous_supply;
        if minted < 0.0 {
            warn!(era, minted, "curve sample decreased; clamping era mint to zero");
            minted = 0.0;
        }

        let reward_per_block = (minted / blocks_per_era as f64) as Planck;

        if reward_per_block > peak_reward {
            peak_reward = reward_per_block;
            peak_era = era;
        }

        let era_emission = reward_per_block
            .checked_mul(blocks_per_era as Planck)
            .ok_or(ScheduleError::ArithmeticOverflow(
                "scaling per-block reward to era emission",
            ))?;
        total_emitted = total_emitted
            .checked_add(era_emission)
            .ok_or(ScheduleError::ArithmeticOverflow(
                "summing scheduled emission",
            ))?;

        rewards.push(reward_per_block);
        previous_supply = current_supply;
    }

    if total_emitted > params.max_supply_plancks {
        return Err(ScheduleError::SupplyCapExceeded {
            cap: params.max_supply_plancks,
            emitted: total_emitted,
        });
    }

    Ok(RewardSchedule {
        rewards,
        peak_reward,
        peak_era,
        total_emitted,
    })
}
