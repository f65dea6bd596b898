//! Scenario files: a full or partial [`PlantInputs`] in YAML or JSON.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::PlantInputs;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid yaml scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid json scenario: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported scenario extension: {0}")]
    UnsupportedExtension(String),
}

/// Scenario text encodings understood by [`parse_scenario`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioFormat {
    Yaml,
    Json,
}

impl ScenarioFormat {
    /// Pick the format from a file extension (`yaml`, `yml` or `json`).
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(ScenarioFormat::Yaml),
            "json" => Ok(ScenarioFormat::Json),
            _ => Err(ScenarioError::UnsupportedExtension(ext)),
        }
    }
}

/// Parse scenario text; fields left out keep their default values.
pub fn parse_scenario(text: &str, format: ScenarioFormat) -> Result<PlantInputs, ScenarioError> {
    let inputs = match format {
        ScenarioFormat::Yaml => serde_yaml::from_str(text)?,
        ScenarioFormat::Json => serde_json::from_str(text)?,
    };
    Ok(inputs)
}

/// Load a scenario file from disk.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<PlantInputs, ScenarioError> {
    let path = path.as_ref();
    let format = ScenarioFormat::from_path(path)?;
    let text = fs::read_to_string(path)?;
    let inputs = parse_scenario(&text, format)?;
    info!(path = %path.display(), ?format, "scenario loaded");
    Ok(inputs)
}

/// Render the default scenario as YAML, a starting point for custom files.
pub fn default_scenario_yaml() -> Result<String, ScenarioError> {
    Ok(serde_yaml::to_string(&PlantInputs::default())?)
}
