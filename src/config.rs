use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::classify::DEFAULT_FUNCTION;

pub const CONFIG_FILE_NAME: &str = ".xliffrc.json";

/// Options of one extraction, as stored in `.xliffrc.json`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_dir")]
    pub project_dir: String,
    #[serde(default = "default_dir")]
    pub output_dir: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default)]
    pub ignore: Vec<String>,
    #[serde(default = "default_functions")]
    pub functions: Vec<String>,
}

fn default_dir() -> String {
    ".".to_string()
}

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_functions() -> Vec<String> {
    vec![DEFAULT_FUNCTION.to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_dir: default_dir(),
            output_dir: default_dir(),
            source_lang: default_source_lang(),
            ignore: Vec::new(),
            functions: default_functions(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if an `ignore` glob is invalid, or if `sourceLang`
    /// or `functions` is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignore {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignore': \"{}\"", pattern))?;
            }
        }

        if self.source_lang.trim().is_empty() {
            bail!("'sourceLang' must not be empty");
        }

        if self.functions.iter().all(|f| f.trim().is_empty()) {
            bail!("'functions' must name at least one i18n function");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative config paths resolve against: the config file's
    /// directory, or the search start when using defaults.
    pub base_dir: PathBuf,
}

impl ConfigLoadResult {
    pub fn resolve(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.base_dir.join(p)
        }
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
