//! Oil and MoC fractions from the crushed seed.

use plant_core::{PlantInputs, YieldBlend};
use rust_decimal::Decimal;

use crate::pct;

/// Split the seed input into kachi ghani oil, expeller oil and MoC base.
///
/// The MoC base fraction is not clamped: yields above 100% make it negative.
pub fn yield_blend(inputs: &PlantInputs) -> YieldBlend {
    let kachi_ghani_yield = pct(inputs.kachi_ghani_yield_pct);
    let expeller_yield = pct(inputs.expeller_yield_pct);
    let kachi_ghani_oil_mt = inputs.seed_input_mt * kachi_ghani_yield;
    let expeller_oil_mt = inputs.seed_input_mt * expeller_yield;
    let total_produced_oil_mt = kachi_ghani_oil_mt + expeller_oil_mt;
    let initial_blend_pungency = if total_produced_oil_mt > Decimal::ZERO {
        (kachi_ghani_oil_mt * inputs.kachi_ghani_pungency
            + expeller_oil_mt * inputs.expeller_oil_pungency)
            / total_produced_oil_mt
    } else {
        Decimal::ZERO
    };
    YieldBlend {
        kachi_ghani_oil_mt,
        expeller_oil_mt,
        moc_base_yield_fraction: Decimal::ONE - (kachi_ghani_yield + expeller_yield),
        total_produced_oil_mt,
        initial_blend_pungency,
    }
}
