//! Application configuration for LayoutPilot.
//!
//! User config lives at `~/.layoutpilot/layoutpilot.toml`.
//! CLI flags override config file values, which override defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LayoutPilotError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "layoutpilot.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".layoutpilot";

// ---------------------------------------------------------------------------
// Config structs (matching layoutpilot.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Planner behaviour.
    #[serde(default)]
    pub engine: EngineConfig,

    /// CLI defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Layouts for section types outside the built-in catalog, keyed by
    /// section type name.
    #[serde(default)]
    pub fallbacks: BTreeMap<String, String>,
}

/// `[engine]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Feed each section's realized layout into the next section's flow context.
    #[serde(default = "default_true")]
    pub thread_previous_layout: bool,

    /// Break near-ties between strong hero candidates at random.
    #[serde(default = "default_true")]
    pub randomize_hero_ties: bool,

    /// Maximum score gap between leader and runner-up that counts as a tie.
    #[serde(default = "default_tie_margin")]
    pub tie_margin: i32,

    /// Both tied candidates must score strictly above this.
    #[serde(default = "default_tie_viability_threshold")]
    pub tie_viability_threshold: i32,

    /// Replace sections whose assets are missing before planning.
    #[serde(default)]
    pub substitute_missing_assets: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thread_previous_layout: true,
            randomize_hero_ties: true,
            tie_margin: default_tie_margin(),
            tie_viability_threshold: default_tie_viability_threshold(),
            substitute_missing_assets: false,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tie_margin() -> i32 {
    2
}
fn default_tie_viability_threshold() -> i32 {
    8
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Output format of the CLI: `text` or `json`.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

fn default_output() -> String {
    "text".into()
}

impl AppConfig {
    /// Reject values the planner cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.engine.tie_margin < 0 {
            return Err(LayoutPilotError::config("engine.tie_margin must not be negative"));
        }
        if !matches!(self.defaults.output.as_str(), "text" | "json") {
            return Err(LayoutPilotError::config(format!(
                "defaults.output must be \"text\" or \"json\", got \"{}\"",
                self.defaults.output
            )));
        }
        if let Some((section, _)) = self.fallbacks.iter().find(|(_, layout)| layout.is_empty()) {
            return Err(LayoutPilotError::config(format!(
                "fallback layout for \"{section}\" is empty"
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Plan settings (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime planner configuration, merged from config file + CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSettings {
    pub thread_previous_layout: bool,
    pub randomize_hero_ties: bool,
    pub tie_margin: i32,
    pub tie_viability_threshold: i32,
    pub substitute_missing_assets: bool,
    /// Section type name → layout, for types no picker covers.
    pub fallbacks: BTreeMap<String, String>,
}

impl From<&AppConfig> for PlanSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            thread_previous_layout: config.engine.thread_previous_layout,
            randomize_hero_ties: config.engine.randomize_hero_ties,
            tie_margin: config.engine.tie_margin,
            tie_viability_threshold: config.engine.tie_viability_threshold,
            substitute_missing_assets: config.engine.substitute_missing_assets,
            fallbacks: config.fallbacks.clone(),
        }
    }
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.layoutpilot/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| LayoutPilotError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.layoutpilot/layoutpilot.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| LayoutPilotError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        LayoutPilotError::config(format!("failed to parse {}: {e}", path.display()))
    })?;
    config.validate()?;
    Ok(config)
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| LayoutPilotError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| LayoutPilotError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| LayoutPilotError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
