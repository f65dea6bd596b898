//! Working capital from cycle-day assumptions.
//!
//! Stocks and receivables are valued per production day and multiplied by the
//! number of days held. The financed part of the raw-material hoard is treated
//! as a credit against the requirement, not capital the business funds itself.

use plant_core::{PlantInputs, PungencyAdjustment, RevenueCogs, WorkingCapital};
use rust_decimal::Decimal;

use crate::pct;

pub fn working_capital(
    inputs: &PlantInputs,
    blend: &PungencyAdjustment,
    revenue: &RevenueCogs,
) -> WorkingCapital {
    let seed = inputs.seed_input_mt;

    let monthly_seed_consumption = seed * inputs.production_days_per_month;
    let rm_hoarded_value = monthly_seed_consumption * inputs.rm_hoard_months * inputs.hoarded_rm_rate;
    let rm_safety_stock_value = seed * inputs.rm_safety_stock_days * inputs.seed_purchase_price;
    let inventory_rm = rm_hoarded_value + rm_safety_stock_value;

    let total_daily_oil_revenue =
        revenue.daily_revenue_oil_blend + revenue.daily_revenue_expeller_separate;
    let total_daily_oil_qty = blend.final_oil_blend_mt + blend.exp_oil_sold_separately_mt;
    let avg_oil_price =
        average_price(total_daily_oil_revenue, total_daily_oil_qty).unwrap_or(Decimal::ZERO);
    let fg_oil_inventory_value = total_daily_oil_qty * avg_oil_price * inputs.fg_oil_safety_days;
    let fg_moc_inventory_value =
        revenue.enhanced_moc_mt * inputs.moc_sell_price * inputs.fg_moc_safety_days;
    let inventory_fg = fg_oil_inventory_value + fg_moc_inventory_value;
    let total_inventory = inventory_rm + inventory_fg;

    let debtors_oil = total_daily_oil_revenue * inputs.oil_debtor_days;
    let debtors_moc = revenue.daily_revenue_moc * inputs.moc_debtor_days;
    let total_debtors = debtors_oil + debtors_moc;
    let trade_creditors = seed * inputs.seed_purchase_price * inputs.creditor_days;

    let financed_rm_hoard_value = rm_hoarded_value * pct(inputs.rm_hoard_financed_pct);
    let gross_wc = total_inventory + total_debtors - trade_creditors;

    WorkingCapital {
        monthly_seed_consumption,
        rm_hoarded_value,
        rm_safety_stock_value,
        inventory_rm,
        total_daily_oil_qty,
        total_daily_oil_revenue,
        avg_oil_price,
        fg_oil_inventory_value,
        fg_moc_inventory_value,
        inventory_fg,
        total_inventory,
        debtors_oil,
        debtors_moc,
        total_debtors,
        trade_creditors,
        financed_rm_hoard_value,
        gross_wc,
        net_wc_requirement: gross_wc - financed_rm_hoard_value,
    }
}

/// Realised price per MT across all oil sold. `None` when nothing is sold.
pub fn average_price(revenue: Decimal, quantity: Decimal) -> Option<Decimal> {
    if quantity > Decimal::ZERO {
        Some(revenue / quantity)
    } else {
        None
    }
}
