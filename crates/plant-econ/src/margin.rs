//! Margin waterfall.
//!
//! Each step removes one cost layer from the previous result:
//! revenue -> GM -> CM -> EBITDA -> (annualised) EBIT -> PBT -> tax -> PAT.
//! PBT needs the annual interest, which depends on working capital, so the
//! waterfall is closed by [`net_profit`] once financing is known.

use plant_core::{Financing, NetProfit, OperatingMargins, PlantInputs, RevenueCogs};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::pct;

/// Months per year used to annualise production days.
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

pub fn operating_margins(inputs: &PlantInputs, revenue: &RevenueCogs) -> OperatingMargins {
    let seed = inputs.seed_input_mt;
    let daily_gm = revenue.daily_total_revenue - revenue.daily_cogs;
    let daily_processing_cost = seed * inputs.processing_cost_per_mt;
    let daily_cm = daily_gm - daily_processing_cost;
    let daily_variable_cost = seed * inputs.other_variable_costs_per_mt;
    let daily_ebitda = daily_cm - daily_variable_cost - inputs.other_expenses_daily;

    let annual_production_days = inputs.production_days_per_month * MONTHS_PER_YEAR;
    let annual_ebitda = daily_ebitda * annual_production_days;
    let annual_depreciation = annual_depreciation(inputs.capex, inputs.depreciation_years);

    OperatingMargins {
        daily_gm,
        daily_processing_cost,
        daily_cm,
        daily_variable_cost,
        daily_other_expenses: inputs.other_expenses_daily,
        daily_ebitda,
        production_days_per_month: inputs.production_days_per_month,
        annual_production_days,
        annual_ebitda,
        annual_depreciation,
        annual_ebit: annual_ebitda - annual_depreciation,
    }
}

/// Straight-line depreciation; a non-positive period contributes nothing.
pub fn annual_depreciation(capex: Decimal, depreciation_years: Decimal) -> Decimal {
    if depreciation_years > Decimal::ZERO {
        capex / depreciation_years
    } else {
        Decimal::ZERO
    }
}

/// Tax on a profit figure, floored at zero (losses earn no credit).
pub fn tax_on(pbt: Decimal, tax_rate_pct: Decimal) -> Decimal {
    (pbt * pct(tax_rate_pct)).max(Decimal::ZERO)
}

pub fn net_profit(margins: &OperatingMargins, financing: &Financing, tax_rate_pct: Decimal) -> NetProfit {
    let annual_pbt = margins.annual_ebit - financing.annual_interest;
    let annual_tax = tax_on(annual_pbt, tax_rate_pct);
    NetProfit {
        tax_rate_pct,
        annual_pbt,
        annual_tax,
        annual_pat: annual_pbt - annual_tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn financing_with_interest(annual_interest: Decimal) -> Financing {
        Financing {
            debt_funded_capex: Decimal::ZERO,
            interest_on_capex_debt: Decimal::ZERO,
            interest_on_hoard: Decimal::ZERO,
            interest_on_net_wc: annual_interest,
            annual_interest,
        }
    }

    fn revenue(total: Decimal, cogs: Decimal) -> RevenueCogs {
        RevenueCogs {
            water_added_mt: Decimal::ZERO,
            salt_added_mt: Decimal::ZERO,
            enhanced_moc_mt: Decimal::ZERO,
            daily_revenue_oil_blend: total,
            daily_revenue_expeller_separate: Decimal::ZERO,
            daily_revenue_moc: Decimal::ZERO,
            daily_total_revenue: total,
            cost_seed: cogs,
            cost_market_oil: Decimal::ZERO,
            cost_moc_enhancement: Decimal::ZERO,
            daily_cogs: cogs,
        }
    }

    #[test]
    fn waterfall_steps() {
        let inputs = PlantInputs {
            seed_input_mt: dec!(100),
            processing_cost_per_mt: dec!(2000),
            other_variable_costs_per_mt: dec!(500),
            other_expenses_daily: dec!(10000),
            production_days_per_month: dec!(25),
            capex: dec!(30000000),
            depreciation_years: dec!(10),
            ..PlantInputs::default()
        };
        let m = operating_margins(&inputs, &revenue(dec!(1000000), dec!(600000)));
        assert_eq!(m.daily_gm, dec!(400000));
        assert_eq!(m.daily_cm, dec!(200000));
        assert_eq!(m.daily_ebitda, dec!(140000));
        assert_eq!(m.annual_production_days, dec!(300));
        assert_eq!(m.annual_ebitda, dec!(42000000));
        assert_eq!(m.annual_depreciation, dec!(3000000));
        assert_eq!(m.annual_ebit, dec!(39000000));

        let p = net_profit(&m, &financing_with_interest(dec!(9000000)), dec!(25));
        assert_eq!(p.annual_pbt, dec!(30000000));
        assert_eq!(p.annual_tax, dec!(7500000));
        assert_eq!(p.annual_pat, dec!(22500000));
    }

    #[test]
    fn zero_depreciation_period_is_guarded() {
        assert_eq!(annual_depreciation(dec!(1000), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(annual_depreciation(dec!(1000), dec!(-2)), Decimal::ZERO);
    }

    #[test]
    fn losses_are_not_taxed() {
        assert_eq!(tax_on(dec!(-5000), dec!(25)), Decimal::ZERO);
        assert_eq!(tax_on(dec!(5000), dec!(25)), dec!(1250));
    }
}
