//! Plain-text report for one evaluated scenario.

use std::fmt;

use plant_core::display::{crore, indian};
use plant_core::PlantOutputs;
use plant_econ::{period_statement, PeriodStatement, PeriodView};
use rust_decimal::Decimal;

pub struct Report<'a> {
    name: &'a str,
    outputs: &'a PlantOutputs,
    statement: PeriodStatement,
}

impl<'a> Report<'a> {
    pub fn new(name: &'a str, outputs: &'a PlantOutputs, view: PeriodView) -> Self {
        Self {
            name,
            outputs,
            statement: period_statement(outputs, view),
        }
    }
}

fn pct(value: Decimal) -> String {
    format!("{:.2}%", value.round_dp(2))
}

fn mt(value: Decimal) -> String {
    format!("{:.2} MT", value.round_dp(2))
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "  {label:<34} {value:>20}")
}

fn money(f: &mut fmt::Formatter<'_>, label: &str, value: Decimal) -> fmt::Result {
    row(f, label, format!("₹ {}", indian(value)))
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let out = self.outputs;
        let s = &self.statement;

        writeln!(f, "== {} ({} view) ==", self.name, s.view)?;
        writeln!(f, "{}", out.pungency.recommendation)?;

        writeln!(f, "Production")?;
        row(f, "Seed input", mt(s.seed_input_mt))?;
        row(f, "Oil blend sold", mt(s.oil_blend_mt))?;
        row(f, "Market oil added", mt(s.market_oil_mt))?;
        row(f, "Enhanced MoC", mt(s.enhanced_moc_mt))?;
        row(
            f,
            "Initial blend pungency",
            format!("{:.4}", out.pungency.recommendation.blend_pungency().round_dp(4)),
        )?;

        writeln!(f, "Profit and loss")?;
        money(f, "Revenue", s.revenue)?;
        money(f, "  Seed", s.cost_seed)?;
        money(f, "  Market oil", s.cost_market_oil)?;
        money(f, "  MoC enhancement", s.cost_moc_enhancement)?;
        money(f, "COGS", s.cogs)?;
        money(f, "Gross margin", s.gross_margin)?;
        row(f, "  of revenue", pct(s.gross_margin_pct))?;
        money(f, "Processing cost", s.processing_cost)?;
        money(f, "Contribution margin", s.contribution_margin)?;
        row(f, "  of revenue", pct(s.contribution_margin_pct))?;
        money(f, "Other variable costs", s.variable_cost)?;
        money(f, "Other expenses", s.other_expenses)?;
        money(f, "EBITDA", s.ebitda)?;
        row(f, "  of revenue", pct(s.ebitda_pct))?;
        money(f, "Depreciation", s.depreciation)?;
        money(f, "EBIT", s.ebit)?;
        money(f, "Interest", s.interest)?;
        money(f, "  on capex debt", s.interest_on_capex_debt)?;
        money(f, "  on hoarded seed", s.interest_on_hoard)?;
        money(f, "  on net working capital", s.interest_on_net_wc)?;
        money(f, "PBT", s.pbt)?;
        money(f, "Tax", s.tax)?;
        money(f, "PAT", s.pat)?;

        writeln!(f, "Capital (annual basis)")?;
        let wc = &out.working_capital;
        money(f, "Inventory", wc.total_inventory)?;
        money(f, "Debtors", wc.total_debtors)?;
        money(f, "Trade creditors", wc.trade_creditors)?;
        money(f, "Net working capital", wc.net_wc_requirement)?;
        row(f, "Capex", crore(out.returns.capex))?;
        row(f, "Capital employed", crore(out.returns.capital_employed))?;
        row(f, "ROCE (EBIT)", pct(out.returns.roce_ebit))?;
        row(f, "ROCE (PAT)", pct(out.returns.roce_pat))?;
        row(f, "ROCE with synergy (EBIT)", pct(out.synergy.roce_ebit_with_synergy))?;
        row(f, "ROCE with synergy (PAT)", pct(out.synergy.roce_pat_with_synergy))?;

        writeln!(f, "Solvent-extraction synergy")?;
        row(f, "MoC consumed in-house", mt(out.synergy.moc_consumed_inhouse_mt))?;
        money(f, "Saving this period", s.solvex_saving)?;
        money(f, "Annual saving", out.synergy.annual_solvex_saving)
    }
}
