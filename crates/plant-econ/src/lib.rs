#![deny(warnings)]

//! Calculation engine for the mustard-oil plant model.
//!
//! [`compute`] is a pure function from a [`PlantInputs`] record to a
//! [`PlantOutputs`] record. The stages run in a fixed order, each reading only
//! the inputs and the results of earlier stages:
//!
//! 1. yields and initial blend pungency
//! 2. pungency optimizer (deficit / surplus / compliant)
//! 3. revenue and COGS
//! 4. margin waterfall down to annual EBIT
//! 5. working capital
//! 6. interest, then PBT / tax / PAT
//! 7. ROCE with and without the solvent-plant synergy
//!
//! Nothing here fails: every ratio with a zero denominator evaluates to zero
//! and out-of-range inputs flow through arithmetically.

use plant_core::{PlantInputs, PlantOutputs};
use rust_decimal::Decimal;
use tracing::debug;

pub mod financing;
pub mod margin;
pub mod period;
pub mod pungency;
pub mod revenue;
pub mod working_capital;
pub mod yields;

pub use period::{period_statement, PeriodStatement, PeriodView};

/// Evaluate the whole model for one input record.
///
/// Arithmetic is exact `Decimal`, which panics past roughly 7.9e28. Records
/// accepted by [`plant_core::validate_inputs`] stay inside that range.
pub fn compute(inputs: &PlantInputs) -> PlantOutputs {
    let yields = yields::yield_blend(inputs);
    let pungency = pungency::optimize_blend(inputs, &yields);
    let revenue = revenue::revenue_and_cogs(inputs, &yields, &pungency);
    let margins = margin::operating_margins(inputs, &revenue);
    let working_capital = working_capital::working_capital(inputs, &pungency, &revenue);
    let financing = financing::interest(inputs, &working_capital);
    let profit = margin::net_profit(&margins, &financing, inputs.tax_rate_pct);
    let returns = financing::returns(inputs, &margins, &working_capital, &profit);
    let synergy = financing::synergy(inputs, &revenue, &margins, &profit, &returns);

    debug!(
        branch = ?pungency.recommendation.branch(),
        revenue = %revenue.daily_total_revenue,
        ebitda = %margins.daily_ebitda,
        roce_ebit = %returns.roce_ebit,
        "plant model evaluated"
    );

    PlantOutputs {
        seed_input_mt: inputs.seed_input_mt,
        yields,
        pungency,
        revenue,
        margins,
        working_capital,
        financing,
        profit,
        returns,
        synergy,
    }
}

/// Percentage on the 0–100 scale as a fraction.
pub(crate) fn pct(value: Decimal) -> Decimal {
    value / Decimal::ONE_HUNDRED
}

/// `numerator / denominator`, or zero when the denominator is zero.
pub(crate) fn ratio_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}
