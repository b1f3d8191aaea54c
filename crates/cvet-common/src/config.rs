use std::path::{Path, PathBuf};

use serde::Deserialize;

/// The parsed Cvet.toml configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub rules: RulesSection,
    /// The directory containing the Cvet.toml file.
    pub root_dir: PathBuf,
}

impl Config {
    /// Whether the given rule id has been disabled in `[rules]`.
    pub fn is_disabled(&self, rule_id: &str) -> bool {
        self.rules.disabled.iter().any(|id| id == rule_id)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulesSection {
    /// Rule ids to skip during analysis.
    #[serde(default)]
    pub disabled: Vec<String>,
}

/// Raw TOML structure for deserialization.
#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    rules: RulesSection,
}

/// Errors that can occur when loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no Cvet.toml found (searched from {0})")]
    NotFound(String),
    #[error("failed to read Cvet.toml: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid Cvet.toml: {0}")]
    Parse(String),
    #[error("invalid Cvet.toml: unknown rule id '{0}' in [rules] disabled")]
    UnknownRule(String),
}

/// Walk up from `start_dir` looking for `Cvet.toml`.
/// Returns the path to the configuration file if found.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        let candidate = current.join("Cvet.toml");
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load and validate a Cvet.toml from a file path.
///
/// `known_rules` is the set of rule ids that may legally appear in
/// `[rules] disabled`; anything else is rejected.
pub fn load_config(path: &Path, known_rules: &[&str]) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let root_dir = path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    parse_config(&content, root_dir, known_rules)
}

/// Parse and validate a Cvet.toml from a string.
pub fn parse_config(
    content: &str,
    root_dir: PathBuf,
    known_rules: &[&str],
) -> Result<Config, ConfigError> {
    let raw: RawConfig = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    for id in &raw.rules.disabled {
        if !known_rules.contains(&id.as_str()) {
            return Err(ConfigError::UnknownRule(id.clone()));
        }
    }

    Ok(Config {
        rules: raw.rules,
        root_dir,
    })
}

/// Find and load the nearest Cvet.toml, walking up from the directory of
/// `source_path`. Returns `ConfigError::NotFound` when no file exists
/// anywhere up the tree; callers typically treat that case as "all rules
/// enabled".
pub fn find_and_load_config(source_path: &Path, known_rules: &[&str]) -> Result<Config, ConfigError> {
    let start_dir = source_path.parent().unwrap_or_else(|| Path::new("."));
    match find_config(start_dir) {
        Some(path) => load_config(&path, known_rules),
        None => Err(ConfigError::NotFound(start_dir.display().to_string())),
    }
}
