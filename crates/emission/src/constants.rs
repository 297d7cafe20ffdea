//! Universal constants and the derived hard cap.
//!
//! The supply cap is floor(π · e · φ · 10^6) whole tokens, fixed at
//! generation time.

use crate::types::{Planck, PLANCKS_PER_TOKEN};

/// Archimedes' constant.
pub const PI: f64 = std::f64::consts::PI;

/// Euler's number.
pub const E: f64 = std::f64::consts::E;

/// Golden ratio, (1 + √5) / 2.
pub fn golden_ratio() -> f64 {
    (1.0 + 5.0_f64.sqrt()) / 2.0
}

/// Hard cap in whole tokens: floor(π · e · φ · 10^6).
pub fn max_supply_tokens() -> u64 {
    (PI * E * golden_ratio() * 1_000_000.0).floor() as u64
}

/// Hard cap in planck.
pub fn max_supply_plancks() -> Planck {
    max_supply_tokens() as Planck * PLANCKS_PER_TOKEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_derivation_is_exact() {
        assert_eq!(max_supply_tokens(), 13_817_580);
        assert_eq!(max_supply_plancks(), 13_817_580_000_000_000_000_000_000);
    }

    #[test]
    fn golden_ratio_satisfies_defining_identity() {
        let phi = golden_ratio();
        // φ² = φ + 1
        assert!((phi * phi - (phi + 1.0)).abs() < 1e-12);
    }
}
