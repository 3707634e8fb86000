use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current version of vigil (read from Cargo.toml at compile time)
pub const VIGIL_VERSION: &str = env!("CARGO_PKG_VERSION");

const CONFIG_FILE: &str = ".vigilrc.toml";

/// Project-level configuration, stored as `.vigilrc.toml` next to the
/// scanned project.
///
/// Only the CLI surface is configurable. Rule thresholds and messages are
/// fixed by contract and deliberately have no knobs here.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VigilConfig {
    pub version: String,
    /// File extensions to pick up when scanning a directory.
    pub file_extensions: Vec<String>,
    /// Output format when --format is not given: "text", "json" or "report".
    pub default_format: String,
}

impl Default for VigilConfig {
    fn default() -> Self {
        Self {
            version: VIGIL_VERSION.to_string(),
            file_extensions: vec![
                "swift".to_string(),
                "js".to_string(),
                "mjs".to_string(),
                "jsx".to_string(),
            ],
            default_format: "text".to_string(),
        }
    }
}

impl VigilConfig {
    /// Loads the config from `path`, falling back to defaults when the file
    /// is absent or malformed.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path.join(CONFIG_FILE)) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let toml = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), toml)?;
        Ok(())
    }
}
