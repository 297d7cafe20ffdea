//! Base types for the emission schedule.

/// Monetary amount in planck.
/// 1 LUM = 10^18 planck.
pub type Planck = u128;

/// Block height within the emission window.
pub type BlockNumber = u64;

/// Era index (1-based in the schedule derivation).
pub type EraIndex = u64;

/// Helper constant — 1 LUM = 10^18 planck.
pub const PLANCKS_PER_TOKEN: Planck = 1_000_000_000_000_000_000;

/// Convert a planck amount to whole tokens for display.
pub fn as_tokens(amount: Planck) -> f64 {
    amount as f64 / PLANCKS_PER_TOKEN as f64
}
