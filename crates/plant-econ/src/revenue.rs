//! Daily revenue and cost of goods sold.

use plant_core::{PlantInputs, PungencyAdjustment, RevenueCogs, YieldBlend};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::pct;

/// Kilograms per metric tonne; enhancement costs are quoted per kg.
pub const KG_PER_MT: Decimal = dec!(1000);

pub fn revenue_and_cogs(
    inputs: &PlantInputs,
    yields: &YieldBlend,
    blend: &PungencyAdjustment,
) -> RevenueCogs {
    let seed = inputs.seed_input_mt;
    let water_added_mt = seed * pct(inputs.water_added_pct);
    let salt_added_mt = seed * pct(inputs.salt_added_pct);
    let enhanced_moc_mt = seed * yields.moc_base_yield_fraction + water_added_mt + salt_added_mt;

    let daily_revenue_oil_blend = blend.final_oil_blend_mt * inputs.oil_blend_sell_price;
    let daily_revenue_expeller_separate =
        blend.exp_oil_sold_separately_mt * inputs.expeller_oil_sell_price;
    let daily_revenue_moc = enhanced_moc_mt * inputs.moc_sell_price;

    let cost_seed = seed * inputs.seed_purchase_price;
    let cost_market_oil = blend.market_oil_to_add_mt * inputs.market_bought_oil_price;
    let cost_moc_enhancement = water_added_mt * KG_PER_MT * inputs.water_cost_per_kg
        + salt_added_mt * KG_PER_MT * inputs.salt_cost_per_kg;

    RevenueCogs {
        water_added_mt,
        salt_added_mt,
        enhanced_moc_mt,
        daily_revenue_oil_blend,
        daily_revenue_expeller_separate,
        daily_revenue_moc,
        daily_total_revenue: daily_revenue_oil_blend
            + daily_revenue_expeller_separate
            + daily_revenue_moc,
        cost_seed,
        cost_market_oil,
        cost_moc_enhancement,
        daily_cogs: cost_seed + cost_market_oil + cost_moc_enhancement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pungency::optimize_blend;
    use crate::yields::yield_blend;

    fn run(inputs: &PlantInputs) -> RevenueCogs {
        let yields = yield_blend(inputs);
        let blend = optimize_blend(inputs, &yields);
        revenue_and_cogs(inputs, &yields, &blend)
    }

    #[test]
    fn enhanced_moc_includes_water_and_salt() {
        let r = run(&PlantInputs::default());
        assert_eq!(r.water_added_mt, dec!(3.84));
        assert_eq!(r.salt_added_mt, dec!(5.76));
        assert_eq!(r.enhanced_moc_mt, dec!(138.24));
        assert_eq!(r.daily_revenue_moc, dec!(3041280));
    }

    #[test]
    fn enhancement_cost_converts_tonnes_to_kg() {
        let r = run(&PlantInputs::default());
        // 3.84 t * 1000 * ₹1 + 5.76 t * 1000 * ₹5
        assert_eq!(r.cost_moc_enhancement, dec!(32640));
        assert_eq!(KG_PER_MT, dec!(1000));
    }

    #[test]
    fn deficit_revenue_uses_split_quantities() {
        let r = run(&PlantInputs {
            kachi_ghani_pungency: dec!(0.35),
            ..PlantInputs::default()
        });
        assert_eq!(r.daily_revenue_oil_blend, dec!(52.992) * dec!(141000));
        assert_eq!(r.daily_revenue_expeller_separate, dec!(10.368) * dec!(136000));
        assert_eq!(r.cost_market_oil, Decimal::ZERO);
    }
}
