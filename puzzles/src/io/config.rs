//! Puzzle configuration stored in `puzzles.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "puzzles.toml";

/// Puzzle configuration (TOML).
///
/// Missing fields take their defaults, so an empty file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PuzzlesConfig {
    /// Directory holding `day1.txt`, `day3.txt` and `day4.txt`.
    pub data_dir: PathBuf,

    /// Address the page server binds to.
    pub bind: String,

    /// Port the page server listens on.
    pub port: u16,

    /// Directory of stylesheet files served under `/static`.
    pub static_dir: PathBuf,
}

impl Default for PuzzlesConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            bind: "127.0.0.1".to_string(),
            port: 3001,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl PuzzlesConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(anyhow!("data_dir must be non-empty"));
        }
        if self.bind.trim().is_empty() {
            return Err(anyhow!("bind must be non-empty"));
        }
        if self.port == 0 {
            return Err(anyhow!("port must be > 0"));
        }
        Ok(())
    }

    /// Render as pretty TOML with a trailing newline.
    pub fn to_toml(&self) -> Result<String> {
        let mut buf = toml::to_string_pretty(self).context("serialize config toml")?;
        if !buf.ends_with('\n') {
            buf.push('\n');
        }
        Ok(buf)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PuzzlesConfig::default()`.
pub fn load_config(path: &Path) -> Result<PuzzlesConfig> {
    if !path.exists() {
        let cfg = PuzzlesConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PuzzlesConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
