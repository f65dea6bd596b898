//! Interest, return on capital employed and the solvent-plant synergy.

use plant_core::{
    Financing, NetProfit, OperatingMargins, PlantInputs, Returns, RevenueCogs, Synergy,
    WorkingCapital,
};
use rust_decimal::Decimal;

use crate::{pct, ratio_or_zero};

/// Annual interest on capex debt, the financed hoard and the net WC requirement.
///
/// The net requirement is charged at the main rate whatever its sign, so a
/// negative requirement yields interest income.
pub fn interest(inputs: &PlantInputs, wc: &WorkingCapital) -> Financing {
    let debt_funded_capex = inputs.capex * (Decimal::ONE - pct(inputs.equity_in_capex_pct));
    let interest_on_capex_debt = debt_funded_capex * pct(inputs.main_financing_rate_pa);
    let interest_on_hoard = wc.financed_rm_hoard_value * pct(inputs.warehouse_finance_rate_pa);
    let interest_on_net_wc = wc.net_wc_requirement * pct(inputs.main_financing_rate_pa);
    Financing {
        debt_funded_capex,
        interest_on_capex_debt,
        interest_on_hoard,
        interest_on_net_wc,
        annual_interest: interest_on_capex_debt + interest_on_hoard + interest_on_net_wc,
    }
}

/// ROCE as a percentage; zero when no capital is employed.
pub fn roce(annual_return: Decimal, capital_employed: Decimal) -> Decimal {
    ratio_or_zero(annual_return, capital_employed) * Decimal::ONE_HUNDRED
}

pub fn returns(
    inputs: &PlantInputs,
    margins: &OperatingMargins,
    wc: &WorkingCapital,
    profit: &NetProfit,
) -> Returns {
    let capital_employed = inputs.capex + wc.net_wc_requirement + inputs.other_assets;
    Returns {
        capex: inputs.capex,
        other_assets: inputs.other_assets,
        capital_employed,
        roce_ebit: roce(margins.annual_ebit, capital_employed),
        roce_pat: roce(profit.annual_pat, capital_employed),
    }
}

/// Savings from feeding MoC to the co-located solvent plant, added on top of
/// EBIT and PAT. The capital-employed denominator is unchanged.
pub fn synergy(
    inputs: &PlantInputs,
    revenue: &RevenueCogs,
    margins: &OperatingMargins,
    profit: &NetProfit,
    returns: &Returns,
) -> Synergy {
    let moc_consumed_inhouse_mt = revenue.enhanced_moc_mt * pct(inputs.moc_consumed_perc);
    let daily_solvex_saving = moc_consumed_inhouse_mt
        * (inputs.logistics_saved_per_ton + inputs.brokerage_saved_per_ton)
        + inputs.labor_saved_nos * inputs.labor_cost_per_head_daily;
    let annual_solvex_saving = daily_solvex_saving * margins.annual_production_days;
    let annual_ebit_with_synergy = margins.annual_ebit + annual_solvex_saving;
    let annual_pat_with_synergy = profit.annual_pat + annual_solvex_saving;
    Synergy {
        moc_consumed_inhouse_mt,
        daily_solvex_saving,
        annual_solvex_saving,
        annual_ebit_with_synergy,
        annual_pat_with_synergy,
        roce_ebit_with_synergy: roce(annual_ebit_with_synergy, returns.capital_employed),
        roce_pat_with_synergy: roce(annual_pat_with_synergy, returns.capital_employed),
    }
}
