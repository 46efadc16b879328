use crate::finder::FinderParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct HoughDemoConfig {
    /// JSON array of hit records.
    pub input: PathBuf,
    pub finder: FinderParams,
    pub output: HoughDemoOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct HoughDemoOutputConfig {
    pub result_json: PathBuf,
    /// Optional dump of the active leaf cells with their label codes.
    #[serde(default)]
    pub cells_json: Option<PathBuf>,
    /// Also print one line per candidate to stdout.
    #[serde(default)]
    pub print_candidates: bool,
}

pub fn load_config(path: &Path) -> Result<HoughDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<HoughDemoConfig, serde_json::Error> {
    serde_json::from_str(data)
}
