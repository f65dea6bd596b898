//! Daily, monthly and annual statements derived from one evaluation.
//!
//! Every view is the daily base scaled by a period multiplier. Depreciation and
//! interest are annual by nature: they are brought to a per-production-day
//! figure first and then scaled, so all three views share one derivation.

use std::fmt;
use std::str::FromStr;

use plant_core::PlantOutputs;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::margin::tax_on;

/// Reporting period for a [`PeriodStatement`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodView {
    Daily,
    Monthly,
    Annual,
}

impl PeriodView {
    pub const ALL: [PeriodView; 3] = [PeriodView::Daily, PeriodView::Monthly, PeriodView::Annual];

    /// Production days covered by the period.
    pub fn multiplier(self, outputs: &PlantOutputs) -> Decimal {
        match self {
            PeriodView::Daily => Decimal::ONE,
            PeriodView::Monthly => outputs.margins.production_days_per_month,
            PeriodView::Annual => outputs.margins.annual_production_days,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PeriodView::Daily => "Daily",
            PeriodView::Monthly => "Monthly",
            PeriodView::Annual => "Annual",
        }
    }
}

impl fmt::Display for PeriodView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown period view '{0}' (expected daily, monthly or annual)")]
pub struct ParsePeriodViewError(String);

impl FromStr for PeriodView {
    type Err = ParsePeriodViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "day" | "d" => Ok(PeriodView::Daily),
            "monthly" | "month" | "m" => Ok(PeriodView::Monthly),
            "annual" | "yearly" | "year" | "y" => Ok(PeriodView::Annual),
            _ => Err(ParsePeriodViewError(s.to_string())),
        }
    }
}

/// Profit and loss for one period, with quantities and the interest split.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStatement {
    pub view: PeriodView,
    pub multiplier: Decimal,

    // Quantities (MT)
    pub seed_input_mt: Decimal,
    pub oil_blend_mt: Decimal,
    pub enhanced_moc_mt: Decimal,
    pub market_oil_mt: Decimal,
    pub water_added_mt: Decimal,
    pub salt_added_mt: Decimal,

    pub revenue: Decimal,
    pub cost_seed: Decimal,
    pub cost_market_oil: Decimal,
    pub cost_moc_enhancement: Decimal,
    pub cogs: Decimal,

    pub gross_margin: Decimal,
    pub gross_margin_pct: Decimal,
    pub processing_cost: Decimal,
    pub contribution_margin: Decimal,
    pub contribution_margin_pct: Decimal,
    pub variable_cost: Decimal,
    pub other_expenses: Decimal,
    pub ebitda: Decimal,
    pub ebitda_pct: Decimal,

    pub depreciation: Decimal,
    pub ebit: Decimal,
    pub interest_on_capex_debt: Decimal,
    pub interest_on_hoard: Decimal,
    pub interest_on_net_wc: Decimal,
    pub interest: Decimal,
    pub pbt: Decimal,
    pub tax: Decimal,
    pub pat: Decimal,

    pub solvex_saving: Decimal,
}

/// Re-derive the period figures from a computed output record.
pub fn period_statement(outputs: &PlantOutputs, view: PeriodView) -> PeriodStatement {
    let k = view.multiplier(outputs);
    let annual_days = outputs.margins.annual_production_days;
    let pro_rata = |annual: Decimal| -> Decimal {
        if annual_days > Decimal::ZERO {
            annual / annual_days * k
        } else {
            Decimal::ZERO
        }
    };

    let rev = &outputs.revenue;
    let m = &outputs.margins;
    let fin = &outputs.financing;

    let revenue = rev.daily_total_revenue * k;
    let share = |value: Decimal| -> Decimal {
        if revenue > Decimal::ZERO {
            value / revenue * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    };

    let gross_margin = m.daily_gm * k;
    let contribution_margin = m.daily_cm * k;
    let ebitda = m.daily_ebitda * k;
    let depreciation = pro_rata(m.annual_depreciation);
    let ebit = ebitda - depreciation;
    let interest = pro_rata(fin.annual_interest);
    let pbt = ebit - interest;
    let tax = tax_on(pbt, outputs.profit.tax_rate_pct);

    PeriodStatement {
        view,
        multiplier: k,
        seed_input_mt: outputs.seed_input_mt * k,
        oil_blend_mt: outputs.pungency.final_oil_blend_mt * k,
        enhanced_moc_mt: rev.enhanced_moc_mt * k,
        market_oil_mt: outputs.pungency.market_oil_to_add_mt * k,
        water_added_mt: rev.water_added_mt * k,
        salt_added_mt: rev.salt_added_mt * k,
        revenue,
        cost_seed: rev.cost_seed * k,
        cost_market_oil: rev.cost_market_oil * k,
        cost_moc_enhancement: rev.cost_moc_enhancement * k,
        cogs: rev.daily_cogs * k,
        gross_margin,
        gross_margin_pct: share(gross_margin),
        processing_cost: m.daily_processing_cost * k,
        contribution_margin,
        contribution_margin_pct: share(contribution_margin),
        variable_cost: m.daily_variable_cost * k,
        other_expenses: m.daily_other_expenses * k,
        ebitda,
        ebitda_pct: share(ebitda),
        depreciation,
        ebit,
        interest_on_capex_debt: pro_rata(fin.interest_on_capex_debt),
        interest_on_hoard: pro_rata(fin.interest_on_hoard),
        interest_on_net_wc: pro_rata(fin.interest_on_net_wc),
        interest,
        pbt,
        tax,
        pat: pbt - tax,
        solvex_saving: outputs.synergy.daily_solvex_saving * k,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute;
    use plant_core::PlantInputs;
    use rust_decimal_macros::dec;

    fn close(a: Decimal, b: Decimal) -> bool {
        (a - b).abs() <= dec!(0.0001)
    }

    #[test]
    fn annual_equals_twelve_months() {
        let out = compute(&PlantInputs::default());
        assert_eq!(out.margins.production_days_per_month, dec!(24));
        let monthly = period_statement(&out, PeriodView::Monthly);
        let annual = period_statement(&out, PeriodView::Annual);
        let twelve = dec!(12);
        assert_eq!(annual.revenue, monthly.revenue * twelve);
        assert_eq!(annual.cogs, monthly.cogs * twelve);
        assert_eq!(annual.gross_margin, monthly.gross_margin * twelve);
        assert!(close(annual.depreciation, monthly.depreciation * twelve));
        assert!(close(annual.interest, monthly.interest * twelve));
    }

    #[test]
    fn annual_view_matches_annual_waterfall() {
        let out = compute(&PlantInputs {
            equity_in_capex_pct: dec!(50),
            rm_hoard_months: dec!(3),
            rm_hoard_financed_pct: dec!(70),
            ..PlantInputs::default()
        });
        let annual = period_statement(&out, PeriodView::Annual);
        assert_eq!(annual.ebitda, out.margins.annual_ebitda);
        assert!(close(annual.depreciation, out.margins.annual_depreciation));
        assert!(close(annual.ebit, out.margins.annual_ebit));
        assert!(close(annual.interest, out.financing.annual_interest));
        assert!(close(annual.pbt, out.profit.annual_pbt));
        assert!(close(annual.pat, out.profit.annual_pat));
        assert_eq!(annual.solvex_saving, out.synergy.annual_solvex_saving);
    }

    #[test]
    fn daily_view_pro_rates_annual_charges() {
        let out = compute(&PlantInputs::default());
        let daily = period_statement(&out, PeriodView::Daily);
        assert_eq!(daily.multiplier, Decimal::ONE);
        assert_eq!(daily.revenue, out.revenue.daily_total_revenue);
        // 62,065,152 / 288 production days
        assert_eq!(daily.interest, dec!(215504));
        assert!(close(
            daily.interest,
            daily.interest_on_capex_debt + daily.interest_on_hoard + daily.interest_on_net_wc
        ));
        assert!(daily.tax >= Decimal::ZERO);
    }

    #[test]
    fn margin_shares_are_zero_without_revenue() {
        let out = compute(&PlantInputs {
            seed_input_mt: Decimal::ZERO,
            ..PlantInputs::default()
        });
        let monthly = period_statement(&out, PeriodView::Monthly);
        assert_eq!(monthly.revenue, Decimal::ZERO);
        assert_eq!(monthly.gross_margin_pct, Decimal::ZERO);
        assert_eq!(monthly.ebitda_pct, Decimal::ZERO);
        assert_eq!(monthly.tax, Decimal::ZERO);
    }

    #[test]
    fn zero_production_days_drop_annual_charges() {
        let out = compute(&PlantInputs {
            production_days_per_month: Decimal::ZERO,
            ..PlantInputs::default()
        });
        let daily = period_statement(&out, PeriodView::Daily);
        assert_eq!(daily.depreciation, Decimal::ZERO);
        assert_eq!(daily.interest, Decimal::ZERO);
    }

    #[test]
    fn parses_views() {
        assert_eq!("Monthly".parse::<PeriodView>(), Ok(PeriodView::Monthly));
        assert_eq!(" y ".parse::<PeriodView>(), Ok(PeriodView::Annual));
        assert!("weekly".parse::<PeriodView>().is_err());
        assert_eq!(PeriodView::Daily.to_string(), "Daily");
    }
}
