//! Output record produced by one engine evaluation.
//!
//! The record is assembled from one part per pipeline stage. Each part is
//! flattened on serialization so consumers see a single flat bag of named
//! values.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::display;

/// Which branch of the pungency optimizer fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PungencyBranch {
    Deficit,
    Surplus,
    Compliant,
}

/// Blending recommendation with the numeric adjustment behind it.
///
/// Opportunity values are per production day and informational only; revenue
/// is always derived from the split quantities.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "branch", rename_all = "snake_case")]
pub enum Recommendation {
    /// Blend falls below the floor: part of the expeller oil is sold separately.
    Deficit {
        blend_pungency: Decimal,
        expeller_used_mt: Decimal,
        expeller_sold_separately_mt: Decimal,
        opportunity_loss: Decimal,
    },
    /// Blend exceeds the floor: zero-pungency market oil can be blended in.
    Surplus {
        blend_pungency: Decimal,
        market_oil_mt: Decimal,
        opportunity_profit: Decimal,
    },
    /// Blend sits on the floor, or there is no oil to blend.
    Compliant { blend_pungency: Decimal },
}

impl Recommendation {
    pub fn branch(&self) -> PungencyBranch {
        match self {
            Recommendation::Deficit { .. } => PungencyBranch::Deficit,
            Recommendation::Surplus { .. } => PungencyBranch::Surplus,
            Recommendation::Compliant { .. } => PungencyBranch::Compliant,
        }
    }

    pub fn blend_pungency(&self) -> Decimal {
        match self {
            Recommendation::Deficit { blend_pungency, .. }
            | Recommendation::Surplus { blend_pungency, .. }
            | Recommendation::Compliant { blend_pungency } => *blend_pungency,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Deficit {
                blend_pungency,
                expeller_sold_separately_mt,
                opportunity_loss,
                ..
            } => write!(
                f,
                "Pungency low ({:.2}): sell {:.2} MT of expeller oil separately. Est. daily opportunity loss: ₹ {}.",
                blend_pungency.round_dp(2),
                expeller_sold_separately_mt.round_dp(2),
                display::indian(opportunity_loss.abs())
            ),
            Recommendation::Surplus {
                blend_pungency,
                market_oil_mt,
                opportunity_profit,
            } => write!(
                f,
                "Pungency high ({:.2}): add {:.2} MT of market oil to optimize. Est. daily profit opportunity: ₹ {}.",
                blend_pungency.round_dp(2),
                market_oil_mt.round_dp(2),
                display::indian(*opportunity_profit)
            ),
            Recommendation::Compliant { blend_pungency } => write!(
                f,
                "Pungency compliant ({:.2}): no action needed.",
                blend_pungency.round_dp(2)
            ),
        }
    }
}

/// Physical oil and MoC fractions derived from the seed input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YieldBlend {
    pub kachi_ghani_oil_mt: Decimal,
    pub expeller_oil_mt: Decimal,
    /// `1 - (kachi ghani + expeller)` yield fraction; negative when yields exceed 100%.
    pub moc_base_yield_fraction: Decimal,
    pub total_produced_oil_mt: Decimal,
    /// Mass-weighted pungency before any adjustment; 0 when no oil is produced.
    pub initial_blend_pungency: Decimal,
}

/// Outcome of the pungency optimizer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PungencyAdjustment {
    pub exp_oil_used_in_blend_mt: Decimal,
    pub exp_oil_sold_separately_mt: Decimal,
    pub market_oil_to_add_mt: Decimal,
    pub final_oil_blend_mt: Decimal,
    pub recommendation: Recommendation,
}

/// Daily revenue and cost of goods sold.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevenueCogs {
    pub water_added_mt: Decimal,
    pub salt_added_mt: Decimal,
    pub enhanced_moc_mt: Decimal,
    pub daily_revenue_oil_blend: Decimal,
    pub daily_revenue_expeller_separate: Decimal,
    pub daily_revenue_moc: Decimal,
    pub daily_total_revenue: Decimal,
    pub cost_seed: Decimal,
    pub cost_market_oil: Decimal,
    pub cost_moc_enhancement: Decimal,
    pub daily_cogs: Decimal,
}

/// Margin waterfall from gross margin down to annual EBIT.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperatingMargins {
    pub daily_gm: Decimal,
    pub daily_processing_cost: Decimal,
    pub daily_cm: Decimal,
    pub daily_variable_cost: Decimal,
    pub daily_other_expenses: Decimal,
    pub daily_ebitda: Decimal,
    pub production_days_per_month: Decimal,
    pub annual_production_days: Decimal,
    pub annual_ebitda: Decimal,
    pub annual_depreciation: Decimal,
    pub annual_ebit: Decimal,
}

/// Inventory, debtor and creditor positions and the resulting requirement.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkingCapital {
    pub monthly_seed_consumption: Decimal,
    pub rm_hoarded_value: Decimal,
    pub rm_safety_stock_value: Decimal,
    pub inventory_rm: Decimal,
    pub total_daily_oil_qty: Decimal,
    pub total_daily_oil_revenue: Decimal,
    pub avg_oil_price: Decimal,
    pub fg_oil_inventory_value: Decimal,
    pub fg_moc_inventory_value: Decimal,
    pub inventory_fg: Decimal,
    pub total_inventory: Decimal,
    pub debtors_oil: Decimal,
    pub debtors_moc: Decimal,
    pub total_debtors: Decimal,
    pub trade_creditors: Decimal,
    pub financed_rm_hoard_value: Decimal,
    pub gross_wc: Decimal,
    pub net_wc_requirement: Decimal,
}

/// Annual interest split by what it finances.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Financing {
    pub debt_funded_capex: Decimal,
    pub interest_on_capex_debt: Decimal,
    pub interest_on_hoard: Decimal,
    pub interest_on_net_wc: Decimal,
    pub annual_interest: Decimal,
}

/// Bottom of the annual waterfall.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetProfit {
    pub tax_rate_pct: Decimal,
    pub annual_pbt: Decimal,
    pub annual_tax: Decimal,
    pub annual_pat: Decimal,
}

/// Return on capital employed without synergy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Returns {
    pub capex: Decimal,
    pub other_assets: Decimal,
    pub capital_employed: Decimal,
    pub roce_ebit: Decimal,
    pub roce_pat: Decimal,
}

/// Savings from in-house MoC consumption and the adjusted returns.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Synergy {
    pub moc_consumed_inhouse_mt: Decimal,
    pub daily_solvex_saving: Decimal,
    pub annual_solvex_saving: Decimal,
    pub annual_ebit_with_synergy: Decimal,
    pub annual_pat_with_synergy: Decimal,
    pub roce_ebit_with_synergy: Decimal,
    pub roce_pat_with_synergy: Decimal,
}

/// Every derived value of one evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlantOutputs {
    pub seed_input_mt: Decimal,
    #[serde(flatten)]
    pub yields: YieldBlend,
    #[serde(flatten)]
    pub pungency: PungencyAdjustment,
    #[serde(flatten)]
    pub revenue: RevenueCogs,
    #[serde(flatten)]
    pub margins: OperatingMargins,
    #[serde(flatten)]
    pub working_capital: WorkingCapital,
    #[serde(flatten)]
    pub financing: Financing,
    #[serde(flatten)]
    pub profit: NetProfit,
    #[serde(flatten)]
    pub returns: Returns,
    #[serde(flatten)]
    pub synergy: Synergy,
}
