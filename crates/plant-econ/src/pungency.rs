//! Pungency optimizer.
//!
//! Decides how the two oil streams enter the blend so that the blend meets the
//! pungency floor:
//!
//! - **deficit**: keep only as much expeller oil in the blend as the kachi
//!   ghani oil can carry; the rest is sold separately at the expeller price.
//! - **surplus**: dilute with zero-pungency market oil down to the floor.
//! - **compliant**: leave the blend as produced.
//!
//! The branch is a closed-form decision, not a search.

use plant_core::{PlantInputs, PungencyAdjustment, Recommendation, YieldBlend};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::trace;

/// Blends within this distance of the floor count as compliant.
pub const PUNGENCY_TOLERANCE: Decimal = dec!(0.000001);

pub fn optimize_blend(inputs: &PlantInputs, yields: &YieldBlend) -> PungencyAdjustment {
    let floor = inputs.min_pungency_requirement;
    let blend = yields.initial_blend_pungency;
    let kachi_ghani = yields.kachi_ghani_oil_mt;
    let expeller = yields.expeller_oil_mt;

    let mut exp_used = expeller;
    let mut exp_sold = Decimal::ZERO;
    let mut market_oil = Decimal::ZERO;

    let recommendation = if yields.total_produced_oil_mt <= Decimal::ZERO
        || (blend - floor).abs() <= PUNGENCY_TOLERANCE
    {
        Recommendation::Compliant {
            blend_pungency: blend,
        }
    } else if blend < floor {
        exp_used = max_expeller_in_blend(inputs, kachi_ghani, expeller);
        exp_sold = expeller - exp_used;
        let opportunity_loss =
            exp_sold * (inputs.oil_blend_sell_price - inputs.expeller_oil_sell_price);
        Recommendation::Deficit {
            blend_pungency: blend,
            expeller_used_mt: exp_used,
            expeller_sold_separately_mt: exp_sold,
            opportunity_loss,
        }
    } else {
        market_oil = market_oil_to_dilute(inputs, yields);
        let opportunity_profit =
            market_oil * (inputs.oil_blend_sell_price - inputs.market_bought_oil_price);
        Recommendation::Surplus {
            blend_pungency: blend,
            market_oil_mt: market_oil,
            opportunity_profit,
        }
    };
    trace!(branch = ?recommendation.branch(), %blend, %floor, "pungency branch");

    PungencyAdjustment {
        exp_oil_used_in_blend_mt: exp_used,
        exp_oil_sold_separately_mt: exp_sold,
        market_oil_to_add_mt: market_oil,
        final_oil_blend_mt: kachi_ghani + exp_used + market_oil,
        recommendation,
    }
}

/// Largest expeller mass the blend can take without dropping below the floor,
/// never more than was produced. Zero when the expeller stream sits exactly on
/// the floor, since no mixing ratio then moves the blend.
fn max_expeller_in_blend(inputs: &PlantInputs, kachi_ghani: Decimal, expeller: Decimal) -> Decimal {
    let floor = inputs.min_pungency_requirement;
    let denominator = floor - inputs.expeller_oil_pungency;
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    let numerator = kachi_ghani * (inputs.kachi_ghani_pungency - floor);
    let usable = match numerator.checked_div(denominator) {
        Some(ratio) => ratio,
        // Quotient past the Decimal range: only its sign survives the clamp.
        None if numerator.is_sign_negative() != denominator.is_sign_negative() => Decimal::ZERO,
        None => expeller,
    };
    usable.max(Decimal::ZERO).min(expeller)
}

/// Market oil (0% pungency) needed to bring the blend down to the floor.
fn market_oil_to_dilute(inputs: &PlantInputs, yields: &YieldBlend) -> Decimal {
    let floor = inputs.min_pungency_requirement;
    if floor <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let pungency_mass = yields.kachi_ghani_oil_mt * inputs.kachi_ghani_pungency
        + yields.expeller_oil_mt * inputs.expeller_oil_pungency;
    (pungency_mass / floor - yields.total_produced_oil_mt).max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yields::yield_blend;
    use plant_core::PungencyBranch;
    use proptest::prelude::*;

    fn run(inputs: &PlantInputs) -> PungencyAdjustment {
        optimize_blend(inputs, &yield_blend(inputs))
    }

    #[test]
    fn reference_case_fires_surplus() {
        let adj = run(&PlantInputs::default());
        assert_eq!(adj.recommendation.branch(), PungencyBranch::Surplus);
        // 17.28 pungency-MT / 0.27 = 64 MT blend, 63.36 MT produced.
        assert_eq!(adj.market_oil_to_add_mt, dec!(0.64));
        assert_eq!(adj.exp_oil_sold_separately_mt, Decimal::ZERO);
        assert_eq!(adj.final_oil_blend_mt, dec!(64));
        match adj.recommendation {
            Recommendation::Surplus {
                opportunity_profit, ..
            } => assert_eq!(opportunity_profit, dec!(5760)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn low_kachi_pungency_fires_deficit() {
        let inputs = PlantInputs {
            kachi_ghani_pungency: dec!(0.35),
            ..PlantInputs::default()
        };
        let adj = run(&inputs);
        assert_eq!(adj.recommendation.branch(), PungencyBranch::Deficit);
        // 34.56 * (0.35 - 0.27) / (0.27 - 0.12) = 18.432 MT usable.
        assert_eq!(adj.exp_oil_used_in_blend_mt, dec!(18.432));
        assert_eq!(adj.exp_oil_sold_separately_mt, dec!(10.368));
        assert_eq!(adj.market_oil_to_add_mt, Decimal::ZERO);
        assert_eq!(adj.final_oil_blend_mt, dec!(52.992));
        match adj.recommendation {
            Recommendation::Deficit {
                opportunity_loss, ..
            } => assert_eq!(opportunity_loss, dec!(51840)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn deficit_with_expeller_on_floor_blends_nothing() {
        let inputs = PlantInputs {
            kachi_ghani_pungency: dec!(0.20),
            expeller_oil_pungency: dec!(0.27),
            ..PlantInputs::default()
        };
        let adj = run(&inputs);
        assert_eq!(adj.recommendation.branch(), PungencyBranch::Deficit);
        assert_eq!(adj.exp_oil_used_in_blend_mt, Decimal::ZERO);
        assert_eq!(adj.exp_oil_sold_separately_mt, dec!(28.8));
    }

    #[test]
    fn deficit_usable_amount_clamped_to_production() {
        // Expeller above the floor but kachi far below: the raw ratio exceeds
        // the produced expeller oil.
        let inputs = PlantInputs {
            kachi_ghani_pungency: dec!(0.10),
            expeller_oil_pungency: dec!(0.30),
            kachi_ghani_yield_pct: dec!(30),
            expeller_yield_pct: dec!(5),
            ..PlantInputs::default()
        };
        let adj = run(&inputs);
        assert_eq!(adj.recommendation.branch(), PungencyBranch::Deficit);
        assert_eq!(adj.exp_oil_used_in_blend_mt, dec!(9.6));
        assert_eq!(adj.exp_oil_sold_separately_mt, Decimal::ZERO);
    }

    #[test]
    fn expeller_a_hair_above_floor_does_not_overflow() {
        let inputs = PlantInputs {
            kachi_ghani_pungency: Decimal::ZERO,
            expeller_oil_pungency: dec!(0.27) + Decimal::new(1, 28),
            ..PlantInputs::default()
        };
        let adj = run(&inputs);
        assert_eq!(adj.recommendation.branch(), PungencyBranch::Deficit);
        assert_eq!(adj.exp_oil_used_in_blend_mt, dec!(28.8));
        assert_eq!(adj.exp_oil_sold_separately_mt, Decimal::ZERO);
    }

    #[test]
    fn blend_on_floor_is_compliant() {
        let inputs = PlantInputs {
            kachi_ghani_pungency: dec!(0.27),
            expeller_oil_pungency: dec!(0.27),
            ..PlantInputs::default()
        };
        let adj = run(&inputs);
        assert_eq!(adj.recommendation.branch(), PungencyBranch::Compliant);
        assert_eq!(adj.exp_oil_used_in_blend_mt, dec!(28.8));
        assert_eq!(adj.market_oil_to_add_mt, Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn branches_are_exclusive(
            seed in 1u32..1_000,
            kg in 1u32..40,
            exp in 1u32..40,
            kp in 0u32..=100,
            ep in 0u32..=100,
        ) {
            let inputs = PlantInputs {
                seed_input_mt: Decimal::from(seed),
                kachi_ghani_yield_pct: Decimal::from(kg),
                expeller_yield_pct: Decimal::from(exp),
                kachi_ghani_pungency: Decimal::new(kp as i64, 2),
                expeller_oil_pungency: Decimal::new(ep as i64, 2),
                ..PlantInputs::default()
            };
            let adj = run(&inputs);
            let sold = adj.exp_oil_sold_separately_mt;
            let market = adj.market_oil_to_add_mt;
            prop_assert!(sold.is_zero() || market.is_zero());
            prop_assert!(sold >= Decimal::ZERO);
            prop_assert!(market >= Decimal::ZERO);
            match adj.recommendation.branch() {
                PungencyBranch::Deficit => prop_assert!(market.is_zero()),
                PungencyBranch::Surplus => prop_assert!(sold.is_zero()),
                PungencyBranch::Compliant => {
                    prop_assert!(sold.is_zero());
                    prop_assert!(market.is_zero());
                }
            }
        }
    }
}
