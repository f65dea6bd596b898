#![deny(warnings)]

//! Headless CLI: load plant scenarios, evaluate them and print a report.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use plant_core::{scenario, validate_inputs, PlantInputs};
use plant_econ::PeriodView;
use plant_runtime::{CacheStats, MemoCache};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod report;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PLANT_REVISION"),
    ", ",
    env!("PLANT_BUILD_PROFILE"),
    ")"
);

/// Mustard-oil plant financial and operational model.
#[derive(Debug, Parser)]
#[command(name = "plant", version, long_version = LONG_VERSION)]
struct Args {
    /// Scenario file (.yaml, .yml or .json). Repeat to evaluate several;
    /// the default scenario is used when none is given.
    #[arg(long = "scenario", value_name = "PATH")]
    scenarios: Vec<PathBuf>,

    /// Reporting period: daily, monthly or annual.
    #[arg(long, default_value = "daily")]
    view: PeriodView,

    /// Print the flat output record as JSON instead of a text report.
    #[arg(long)]
    json: bool,

    /// Refuse scenarios outside the input constraints instead of warning.
    #[arg(long)]
    strict: bool,

    /// Print the default scenario as YAML and exit.
    #[arg(long)]
    dump_defaults: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: Option<&PathBuf>) -> Result<(String, PlantInputs)> {
    match path {
        Some(path) => {
            let inputs = scenario::load_scenario(path)
                .with_context(|| format!("failed to load scenario {}", path.display()))?;
            Ok((path.display().to_string(), inputs))
        }
        None => Ok(("defaults".to_string(), PlantInputs::default())),
    }
}

/// Evaluate every requested scenario and write the reports to `out`.
fn run(args: &Args, out: &mut impl Write) -> Result<CacheStats> {
    if args.dump_defaults {
        write!(out, "{}", scenario::default_scenario_yaml()?)?;
        return Ok(CacheStats::default());
    }

    let paths: Vec<Option<&PathBuf>> = if args.scenarios.is_empty() {
        vec![None]
    } else {
        args.scenarios.iter().map(Some).collect()
    };

    let mut cache = MemoCache::new(paths.len());
    for path in paths {
        let (name, inputs) = load(path)?;
        if let Err(err) = validate_inputs(&inputs) {
            if args.strict {
                return Err(err).with_context(|| format!("scenario {name} failed validation"));
            }
            warn!(scenario = %name, %err, "input outside constraints, evaluating anyway");
        }
        let outputs = cache.evaluate(&inputs);
        if args.json {
            serde_json::to_writer_pretty(&mut *out, &*outputs)?;
            writeln!(out)?;
        } else {
            write!(out, "{}", report::Report::new(&name, &outputs, args.view))?;
        }
    }
    Ok(cache.stats())
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    info!(
        revision = env!("PLANT_REVISION"),
        scenarios = args.scenarios.len(),
        view = %args.view,
        "starting plant model"
    );

    let stdout = io::stdout();
    let stats = run(&args, &mut stdout.lock())?;
    info!(evaluated = stats.misses, reused = stats.hits, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_file(name: &str, text: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("plant-cli-{}-{name}", std::process::id()));
        std::fs::write(&path, text).unwrap();
        path
    }

    fn args(scenarios: Vec<PathBuf>) -> Args {
        Args {
            scenarios,
            view: PeriodView::Daily,
            json: false,
            strict: false,
            dump_defaults: false,
        }
    }

    #[test]
    fn strict_rejects_invalid_scenario() {
        let path = scenario_file("negative.yaml", "seed_input_mt: \"-5\"\n");
        let mut a = args(vec![path.clone()]);
        a.strict = true;
        let mut out = Vec::new();
        let err = run(&a, &mut out).unwrap_err();
        assert!(err
            .chain()
            .any(|cause| cause.to_string().contains("must be non-negative")));
        assert!(out.is_empty());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn invalid_scenario_still_evaluates_without_strict() {
        let path = scenario_file("lenient.yaml", "seed_input_mt: \"-5\"\n");
        let mut out = Vec::new();
        let stats = run(&args(vec![path.clone()]), &mut out).unwrap();
        assert_eq!(stats.misses, 1);
        assert!(String::from_utf8(out).unwrap().contains("Profit and loss"));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn repeated_scenario_is_served_from_cache() {
        let path = scenario_file("twice.json", r#"{ "seed_input_mt": "240" }"#);
        let mut a = args(vec![path.clone(), path.clone()]);
        a.json = true;
        let mut out = Vec::new();
        let stats = run(&a, &mut out).unwrap();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\"daily_total_revenue\"").count(), 2);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn defaults_are_used_without_scenarios() {
        let mut out = Vec::new();
        let stats = run(&args(Vec::new()), &mut out).unwrap();
        assert_eq!(stats.entries, 1);
        assert!(String::from_utf8(out).unwrap().starts_with("== defaults (Daily view) =="));
    }
}
