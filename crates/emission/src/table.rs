//! Artifact assembly: the constant table a ledger runtime embeds.
//!
//! The runtime compiles the rendered module in and indexes
//! `REWARD_SCHEDULE` by era, so the shape here is a hard contract: exact
//! length, exact order, `u128` entries, index 0 = era 1.

use crate::params::ScheduleParams;
use crate::schedule::RewardSchedule;
use crate::types::{EraIndex, Planck};
use serde::{Deserialize, Serialize};

/// Values per row in the rendered constant array.
const RENDER_ROW_WIDTH: usize = 5;

/// The generated artifact: everything the consuming runtime embeds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmissionTable {
    /// Hard supply cap in planck.
    pub max_supply: Planck,
    /// Era length in blocks.
    pub blocks_per_era: u32,
    /// Per-block reward for each era; index 0 is era 1.
    pub rewards: Vec<Planck>,
}

impl EmissionTable {
    /// Assemble the artifact from a finished schedule.
    pub fn new(params: &ScheduleParams, schedule: &RewardSchedule) -> Self {
        Self {
            max_supply: params.max_supply_plancks,
            blocks_per_era: params.blocks_per_era,
            rewards: schedule.rewards.clone(),
        }
    }

    /// Number of eras covered by the table.
    pub fn total_eras(&self) -> usize {
        self.rewards.len()
    }

    /// Per-block reward for a 0-based era; zero once the schedule is over.
    pub fn reward_for_era(&self, era: EraIndex) -> Planck {
        self.rewards.get(era as usize).copied().unwrap_or(0)
    }

    /// Total emission the table authorizes over its lifetime.
    pub fn total_emitted(&self) -> Planck {
        self.rewards.iter().fold(0, |acc, r| {
            acc.saturating_add(r.saturating_mul(self.blocks_per_era as Planck))
        })
    }

    /// Render the table as an embeddable Rust constant module.
    pub fn render_rust_source(&self) -> String {
        let mut out = String::new();

        out.push_str("// AUTO-GENERATED by schedule-gen. DO NOT EDIT.\n");
        out.push_str("//\n");
        out.push_str(&format!(
            "// Pre-computed sigmoid emission table: {} eras of {} blocks each.\n\n",
            self.total_eras(),
            self.blocks_per_era
        ));

        out.push_str("/// Hard supply cap in planck (10^-18 of one token).\n");
        out.push_str(&format!("pub const MAX_SUPPLY: u128 = {};\n\n", self.max_supply));

        out.push_str("/// Number of eras in the emission schedule.\n");
        out.push_str(&format!(
            "pub const TOTAL_ERAS: usize = {};\n\n",
            self.total_eras()
        ));

        out.push_str("/// Era length in blocks.\n");
        out.push_str(&format!(
            "pub const BLOCKS_PER_ERA: u32 = {};\n\n",
            self.blocks_per_era
        ));

        out.push_str("/// Per-block reward for each era; index 0 is era 1.\n");
        out.push_str(&format!(
            "pub const REWARD_SCHEDULE: [u128; {}] = [\n",
            self.total_eras()
        ));
        for row in self.rewards.chunks(RENDER_ROW_WIDTH) {
            let cells: Vec<String> = row.iter().map(|r| format!("{r}_u128")).collect();
            out.push_str(&format!("    {},\n", cells.join(", ")));
        }
        out.push_str("];\n");

        out
    }

    /// BLAKE3 hash of the rendered artifact, hex-encoded.
    ///
    /// Identical parameters must reproduce an identical hash on every
    /// machine; the generator records it in the manifest.
    pub fn content_hash(&self) -> String {
        hex::encode(blake3::hash(self.render_rust_source().as_bytes()).as_bytes())
    }
}

/// Human-facing statistics for the generation report and manifest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_eras: usize,
    /// 1-based era holding the peak reward.
    pub peak_era: EraIndex,
    pub peak_reward: Planck,
    pub first_era_reward: Planck,
    pub final_era_reward: Planck,
    pub total_emitted: Planck,
    /// Share of the hard cap the schedule actually emits.
    pub coverage_percent: f64,
}

impl ScheduleSummary {
    pub fn new(params: &ScheduleParams, schedule: &RewardSchedule) -> Self {
        let coverage_percent = if params.max_supply_plancks > 0 {
            schedule.total_emitted as f64 / params.max_supply_plancks as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_eras: schedule.rewards.len(),
            peak_era: schedule.peak_era,
            peak_reward: schedule.peak_reward,
            first_era_reward: schedule.rewards.first().copied().unwrap_or(0),
            final_era_reward: schedule.rewards.last().copied().unwrap_or(0),
            total_emitted: schedule.total_emitted,
            coverage_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::build_schedule;

    fn default_table() -> (ScheduleParams, RewardSchedule, EmissionTable) {
        let params = ScheduleParams::default();
        let schedule = build_schedule(&params).unwrap();
        let table = EmissionTable::new(&params, &schedule);
        (params, schedule, table)
    }

    #[test]
    fn table_matches_the_schedule() {
        let (params, schedule, table) = default_table();

        assert_eq!(table.total_eras(), 7_300);
        assert_eq!(table.max_supply, params.max_supply_plancks);
        assert_eq!(table.blocks_per_era, 14_400);
        assert_eq!(table.rewards, schedule.rewards);
        assert_eq!(table.total_emitted(), schedule.total_emitted);
    }

    #[test]
    fn era_lookup_returns_zero_past_the_schedule() {
        let (_, schedule, table) = default_table();

        assert_eq!(table.reward_for_era(0), schedule.rewards[0]);
        assert_eq!(table.reward_for_era(7_299), *schedule.rewards.last().unwrap());
        assert_eq!(table.reward_for_era(7_300), 0);
        assert_eq!(table.reward_for_era(u64::MAX), 0);
    }

    #[test]
    fn rendered_source_carries_the_full_contract() {
        let (_, _, table) = default_table();
        let source = table.render_rust_source();

        assert!(source.contains(&format!("pub const MAX_SUPPLY: u128 = {};", table.max_supply)));
        assert!(source.contains("pub const TOTAL_ERAS: usize = 7300;"));
        assert!(source.contains("pub const BLOCKS_PER_ERA: u32 = 14400;"));
        assert!(source.contains("pub const REWARD_SCHEDULE: [u128; 7300] = ["));

        // 7300 entries, 5 per row
        let rows = source.lines().filter(|l| l.contains("_u128")).count();
        assert_eq!(rows, 7_300 / 5);
    }

    #[test]
    fn content_hash_is_stable_across_runs() {
        let (params, _, table) = default_table();

        let schedule = build_schedule(&params).unwrap();
        let second = EmissionTable::new(&params, &schedule);
        assert_eq!(table.content_hash(), second.content_hash());
    }

    #[test]
    fn summary_reports_the_curve_shape() {
        let (params, schedule, _) = default_table();
        let summary = ScheduleSummary::new(&params, &schedule);

        assert_eq!(summary.total_eras, 7_300);
        assert_eq!(summary.peak_reward, schedule.peak_reward);
        assert!(summary.first_era_reward < summary.peak_reward);
        assert!(summary.final_era_reward < summary.peak_reward);
        assert!(summary.coverage_percent > 99.9);
        assert!(summary.coverage_percent < 100.0);
    }
}
