#![deny(warnings)]

//! Core records for the mustard-oil plant model.
//!
//! This crate defines the flat input record fed into the calculation engine,
//! the output record it produces, caller-side validation helpers, and scenario
//! file loading. Every quantity is a [`Decimal`]: money in ₹, masses in MT per
//! production day, percentages on a 0–100 scale and pungency on a 0–1 scale.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod display;
pub mod outputs;
pub mod scenario;

pub use outputs::*;

/// Pungency floor the oil blend must meet, on the model's 0–1 scale.
pub const MIN_PUNGENCY_REQUIREMENT: Decimal = dec!(0.27);

/// Largest seed throughput accepted by [`validate_inputs`] (MT/day).
pub const MAX_SEED_INPUT_MT: Decimal = dec!(100000);
/// Largest price, cost, capital amount or headcount accepted by [`validate_inputs`].
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);
/// Longest stock, debtor or creditor cycle accepted by [`validate_inputs`] (days).
pub const MAX_CYCLE_DAYS: Decimal = dec!(3650);
/// Smallest non-zero pungency floor accepted by [`validate_inputs`]; the
/// pungency widgets step in hundredths.
pub const MIN_NONZERO_PUNGENCY_FLOOR: Decimal = dec!(0.01);

/// Flat set of business parameters for one plant evaluation.
///
/// Missing fields in a scenario file fall back to [`PlantInputs::default`],
/// which mirrors the dashboard's default widget values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantInputs {
    // Production
    /// Seed crushed per production day (MT).
    pub seed_input_mt: Decimal,
    /// Kachi ghani (cold press) oil yield, % of seed.
    pub kachi_ghani_yield_pct: Decimal,
    /// Expeller oil yield, % of seed.
    pub expeller_yield_pct: Decimal,
    /// Production days per month.
    pub production_days_per_month: Decimal,

    // Prices (₹/MT)
    pub seed_purchase_price: Decimal,
    pub oil_blend_sell_price: Decimal,
    pub moc_sell_price: Decimal,
    pub expeller_oil_sell_price: Decimal,
    pub market_bought_oil_price: Decimal,

    // Costs
    /// Processing cost per MT of seed.
    pub processing_cost_per_mt: Decimal,
    /// Other variable costs per MT of seed.
    pub other_variable_costs_per_mt: Decimal,
    /// Fixed expenses per production day.
    pub other_expenses_daily: Decimal,

    // Pungency (0–1 scale)
    pub kachi_ghani_pungency: Decimal,
    pub expeller_oil_pungency: Decimal,
    pub min_pungency_requirement: Decimal,

    // MoC enhancement
    /// Water added to MoC, % of seed input.
    pub water_added_pct: Decimal,
    /// Water cost (₹/kg).
    pub water_cost_per_kg: Decimal,
    /// Salt added to MoC, % of seed input.
    pub salt_added_pct: Decimal,
    /// Salt cost (₹/kg).
    pub salt_cost_per_kg: Decimal,

    // Capital
    pub capex: Decimal,
    /// Share of capex funded by equity (%); the rest is debt.
    pub equity_in_capex_pct: Decimal,
    pub depreciation_years: Decimal,
    pub tax_rate_pct: Decimal,
    pub other_assets: Decimal,

    // Financing rates (% p.a.)
    /// Rate charged on the financed part of the raw-material hoard.
    pub warehouse_finance_rate_pa: Decimal,
    /// Rate charged on capex debt and the net working-capital requirement.
    pub main_financing_rate_pa: Decimal,
    /// Share of the hoarded raw material that is financed (%).
    pub rm_hoard_financed_pct: Decimal,

    // Working-capital cycles
    pub rm_hoard_months: Decimal,
    /// Valuation rate for hoarded raw material (₹/MT).
    pub hoarded_rm_rate: Decimal,
    pub rm_safety_stock_days: Decimal,
    pub fg_oil_safety_days: Decimal,
    pub fg_moc_safety_days: Decimal,
    pub oil_debtor_days: Decimal,
    pub moc_debtor_days: Decimal,
    pub creditor_days: Decimal,

    // Solvent-extraction plant synergy
    /// Share of enhanced MoC consumed by the co-located plant (%).
    pub moc_consumed_perc: Decimal,
    pub logistics_saved_per_ton: Decimal,
    /// Labour headcount saved per day.
    pub labor_saved_nos: Decimal,
    pub labor_cost_per_head_daily: Decimal,
    pub brokerage_saved_per_ton: Decimal,
}

impl Default for PlantInputs {
    fn default() -> Self {
        Self {
            seed_input_mt: dec!(192),
            kachi_ghani_yield_pct: dec!(18),
            expeller_yield_pct: dec!(15),
            production_days_per_month: dec!(24),
            seed_purchase_price: dec!(50000),
            oil_blend_sell_price: dec!(141000),
            moc_sell_price: dec!(22000),
            expeller_oil_sell_price: dec!(136000),
            market_bought_oil_price: dec!(132000),
            processing_cost_per_mt: dec!(2500),
            other_variable_costs_per_mt: Decimal::ZERO,
            other_expenses_daily: dec!(45000),
            kachi_ghani_pungency: dec!(0.40),
            expeller_oil_pungency: dec!(0.12),
            min_pungency_requirement: MIN_PUNGENCY_REQUIREMENT,
            water_added_pct: dec!(2),
            water_cost_per_kg: dec!(1),
            salt_added_pct: dec!(3),
            salt_cost_per_kg: dec!(5),
            capex: dec!(200000000),
            equity_in_capex_pct: dec!(100),
            depreciation_years: dec!(15),
            tax_rate_pct: dec!(25),
            other_assets: Decimal::ZERO,
            warehouse_finance_rate_pa: dec!(10),
            main_financing_rate_pa: dec!(10),
            rm_hoard_financed_pct: Decimal::ZERO,
            rm_hoard_months: Decimal::ZERO,
            hoarded_rm_rate: dec!(50000),
            rm_safety_stock_days: dec!(48),
            fg_oil_safety_days: dec!(15),
            fg_moc_safety_days: dec!(4),
            oil_debtor_days: dec!(5),
            moc_debtor_days: dec!(5),
            creditor_days: dec!(5),
            moc_consumed_perc: dec!(100),
            logistics_saved_per_ton: dec!(400),
            labor_saved_nos: dec!(4),
            labor_cost_per_head_daily: dec!(550),
            brokerage_saved_per_ton: dec!(150),
        }
    }
}

impl PlantInputs {
    /// Every field paired with its name, in declaration order.
    pub fn named_fields(&self) -> [(&'static str, Decimal); 40] {
        [
            ("seed_input_mt", self.seed_input_mt),
            ("kachi_ghani_yield_pct", self.kachi_ghani_yield_pct),
            ("expeller_yield_pct", self.expeller_yield_pct),
            ("production_days_per_month", self.production_days_per_month),
            ("seed_purchase_price", self.seed_purchase_price),
            ("oil_blend_sell_price", self.oil_blend_sell_price),
            ("moc_sell_price", self.moc_sell_price),
            ("expeller_oil_sell_price", self.expeller_oil_sell_price),
            ("market_bought_oil_price", self.market_bought_oil_price),
            ("processing_cost_per_mt", self.processing_cost_per_mt),
            ("other_variable_costs_per_mt", self.other_variable_costs_per_mt),
            ("other_expenses_daily", self.other_expenses_daily),
            ("kachi_ghani_pungency", self.kachi_ghani_pungency),
            ("expeller_oil_pungency", self.expeller_oil_pungency),
            ("min_pungency_requirement", self.min_pungency_requirement),
            ("water_added_pct", self.water_added_pct),
            ("water_cost_per_kg", self.water_cost_per_kg),
            ("salt_added_pct", self.salt_added_pct),
            ("salt_cost_per_kg", self.salt_cost_per_kg),
            ("capex", self.capex),
            ("equity_in_capex_pct", self.equity_in_capex_pct),
            ("depreciation_years", self.depreciation_years),
            ("tax_rate_pct", self.tax_rate_pct),
            ("other_assets", self.other_assets),
            ("warehouse_finance_rate_pa", self.warehouse_finance_rate_pa),
            ("main_financing_rate_pa", self.main_financing_rate_pa),
            ("rm_hoard_financed_pct", self.rm_hoard_financed_pct),
            ("rm_hoard_months", self.rm_hoard_months),
            ("hoarded_rm_rate", self.hoarded_rm_rate),
            ("rm_safety_stock_days", self.rm_safety_stock_days),
            ("fg_oil_safety_days", self.fg_oil_safety_days),
            ("fg_moc_safety_days", self.fg_moc_safety_days),
            ("oil_debtor_days", self.oil_debtor_days),
            ("moc_debtor_days", self.moc_debtor_days),
            ("creditor_days", self.creditor_days),
            ("moc_consumed_perc", self.moc_consumed_perc),
            ("logistics_saved_per_ton", self.logistics_saved_per_ton),
            ("labor_saved_nos", self.labor_saved_nos),
            ("labor_cost_per_head_daily", self.labor_cost_per_head_daily),
            ("brokerage_saved_per_ton", self.brokerage_saved_per_ton),
        ]
    }

    fn percentage_fields(&self) -> [(&'static str, Decimal); 10] {
        [
            ("kachi_ghani_yield_pct", self.kachi_ghani_yield_pct),
            ("expeller_yield_pct", self.expeller_yield_pct),
            ("water_added_pct", self.water_added_pct),
            ("salt_added_pct", self.salt_added_pct),
            ("equity_in_capex_pct", self.equity_in_capex_pct),
            ("tax_rate_pct", self.tax_rate_pct),
            ("warehouse_finance_rate_pa", self.warehouse_finance_rate_pa),
            ("main_financing_rate_pa", self.main_financing_rate_pa),
            ("rm_hoard_financed_pct", self.rm_hoard_financed_pct),
            ("moc_consumed_perc", self.moc_consumed_perc),
        ]
    }

    /// Upper bound for each field that is not a percentage or a pungency.
    fn magnitude_limits(&self) -> [(&'static str, Decimal, Decimal); 27] {
        [
            ("seed_input_mt", self.seed_input_mt, MAX_SEED_INPUT_MT),
            ("production_days_per_month", self.production_days_per_month, dec!(31)),
            ("seed_purchase_price", self.seed_purchase_price, MAX_AMOUNT),
            ("oil_blend_sell_price", self.oil_blend_sell_price, MAX_AMOUNT),
            ("moc_sell_price", self.moc_sell_price, MAX_AMOUNT),
            ("expeller_oil_sell_price", self.expeller_oil_sell_price, MAX_AMOUNT),
            ("market_bought_oil_price", self.market_bought_oil_price, MAX_AMOUNT),
            ("processing_cost_per_mt", self.processing_cost_per_mt, MAX_AMOUNT),
            ("other_variable_costs_per_mt", self.other_variable_costs_per_mt, MAX_AMOUNT),
            ("other_expenses_daily", self.other_expenses_daily, MAX_AMOUNT),
            ("water_cost_per_kg", self.water_cost_per_kg, MAX_AMOUNT),
            ("salt_cost_per_kg", self.salt_cost_per_kg, MAX_AMOUNT),
            ("capex", self.capex, MAX_AMOUNT),
            ("depreciation_years", self.depreciation_years, dec!(100)),
            ("other_assets", self.other_assets, MAX_AMOUNT),
            ("rm_hoard_months", self.rm_hoard_months, dec!(120)),
            ("hoarded_rm_rate", self.hoarded_rm_rate, MAX_AMOUNT),
            ("rm_safety_stock_days", self.rm_safety_stock_days, MAX_CYCLE_DAYS),
            ("fg_oil_safety_days", self.fg_oil_safety_days, MAX_CYCLE_DAYS),
            ("fg_moc_safety_days", self.fg_moc_safety_days, MAX_CYCLE_DAYS),
            ("oil_debtor_days", self.oil_debtor_days, MAX_CYCLE_DAYS),
            ("moc_debtor_days", self.moc_debtor_days, MAX_CYCLE_DAYS),
            ("creditor_days", self.creditor_days, MAX_CYCLE_DAYS),
            ("logistics_saved_per_ton", self.logistics_saved_per_ton, MAX_AMOUNT),
            ("labor_saved_nos", self.labor_saved_nos, MAX_AMOUNT),
            ("labor_cost_per_head_daily", self.labor_cost_per_head_daily, MAX_AMOUNT),
            ("brokerage_saved_per_ton", self.brokerage_saved_per_ton, MAX_AMOUNT),
        ]
    }

    fn pungency_fields(&self) -> [(&'static str, Decimal); 3] {
        [
            ("kachi_ghani_pungency", self.kachi_ghani_pungency),
            ("expeller_oil_pungency", self.expeller_oil_pungency),
            ("min_pungency_requirement", self.min_pungency_requirement),
        ]
    }
}

/// Reasons an input record falls outside the ranges the input widgets allow.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Quantities, prices, costs and cycle days must be >= 0.
    #[error("{0} must be non-negative")]
    Negative(&'static str),
    /// Percentages and rates live on a 0–100 scale.
    #[error("{0} must be within [0, 100]")]
    PercentOutOfRange(&'static str),
    /// Pungency values live on a 0–1 scale.
    #[error("{0} must be within [0, 1]")]
    PungencyOutOfRange(&'static str),
    /// Magnitudes past these bounds can overflow the engine's arithmetic.
    #[error("{field} must be at most {max}")]
    TooLarge { field: &'static str, max: Decimal },
    #[error("a non-zero pungency floor must be at least 0.01")]
    PungencyFloorTooLow,
    #[error("production days per month must be > 0")]
    NonPositiveProductionDays,
    #[error("depreciation period must be at least one year")]
    DepreciationPeriodTooShort,
}

/// Validate an input record against the dashboard's widget constraints.
///
/// Records that pass also keep every intermediate of the engine inside the
/// `Decimal` range.
///
/// The engine itself never calls this: it accepts any record and degrades to
/// zero or negative values. Yields summing above 100% are deliberately not an
/// error (they yield a negative MoC base fraction).
pub fn validate_inputs(inputs: &PlantInputs) -> Result<(), ValidationError> {
    for (name, value) in inputs.named_fields() {
        if value < Decimal::ZERO {
            return Err(ValidationError::Negative(name));
        }
    }
    for (name, value) in inputs.percentage_fields() {
        if value > Decimal::ONE_HUNDRED {
            return Err(ValidationError::PercentOutOfRange(name));
        }
    }
    for (name, value) in inputs.pungency_fields() {
        if value > Decimal::ONE {
            return Err(ValidationError::PungencyOutOfRange(name));
        }
    }
    for (field, value, max) in inputs.magnitude_limits() {
        if value > max {
            return Err(ValidationError::TooLarge { field, max });
        }
    }
    let floor = inputs.min_pungency_requirement;
    if floor > Decimal::ZERO && floor < MIN_NONZERO_PUNGENCY_FLOOR {
        return Err(ValidationError::PungencyFloorTooLow);
    }
    if inputs.production_days_per_month <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveProductionDays);
    }
    if inputs.depreciation_years < Decimal::ONE {
        return Err(ValidationError::DepreciationPeriodTooShort);
    }
    Ok(())
}
