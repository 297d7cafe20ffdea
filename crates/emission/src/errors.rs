use crate::types::Planck;
use thiserror::Error;

/// Errors that can occur while deriving the emission schedule.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid schedule parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("total blocks {total_blocks} do not partition evenly into eras of {blocks_per_era} blocks")]
    UnevenEraPartition {
        total_blocks: u64,
        blocks_per_era: u32,
    },

    #[error("scheduled emission {emitted} exceeds hard cap {cap}")]
    SupplyCapExceeded { cap: Planck, emitted: Planck },

    #[error("arithmetic overflow while {0}")]
    ArithmeticOverflow(&'static str),
}
