//! User configuration at ~/.config/cupom/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{CupomError, CupomResult};
use crate::receipt::DEFAULT_PAPER_WIDTH;
use crate::store::FileStore;

static DEFAULT_STATE_FILE: &str = "~/.local/share/cupom/storage.json";
static DEFAULT_BRAND: &str = "RI HAPPY";

fn default_state_file() -> PathBuf {
    PathBuf::from(DEFAULT_STATE_FILE)
}

fn is_default_state_file(p: &PathBuf) -> bool {
    *p == default_state_file()
}

fn default_paper_width() -> usize {
    DEFAULT_PAPER_WIDTH
}

fn default_brand() -> String {
    DEFAULT_BRAND.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CupomConfig {
    /// Where store details and events are kept
    #[serde(default = "default_state_file", skip_serializing_if = "is_default_state_file")]
    pub state_file: PathBuf,

    /// Characters per printed line
    #[serde(default = "default_paper_width")]
    pub paper_width: usize,

    /// Chain name printed in receipt headers
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Default for `--unify` on preview and print
    #[serde(default)]
    pub unify_themed_saturdays: bool,
}

impl Default for CupomConfig {
    fn default() -> Self {
        CupomConfig {
            state_file: default_state_file(),
            paper_width: DEFAULT_PAPER_WIDTH,
            brand: default_brand(),
            unify_themed_saturdays: false,
        }
    }
}

impl CupomConfig {
    pub fn config_path() -> CupomResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CupomError::Config("Could not determine config directory".into()))?
            .join("cupom");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config, creating a commented default on first run.
    pub fn load() -> CupomResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> CupomResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| CupomError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CupomError::Config(e.to_string()))
    }

    /// The state file with `~` expanded.
    pub fn state_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.state_file.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.state_path())
    }

    /// Save the current config to ~/.config/cupom/config.toml
    pub fn save(&self) -> CupomResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> CupomResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CupomError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CupomError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| CupomError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CupomResult<()> {
        let contents = format!(
            "\
# cupom configuration

# Where store details and events are saved:
# state_file = \"{}\"

# Characters per printed line (40 fits 80mm paper):
# paper_width = {}

# Chain name printed in receipt headers:
# brand = \"{}\"

# Merge all themed Saturdays into one block by default:
# unify_themed_saturdays = false
",
            DEFAULT_STATE_FILE, DEFAULT_PAPER_WIDTH, DEFAULT_BRAND
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CupomError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CupomError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
