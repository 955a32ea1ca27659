use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info};
use serde::Deserialize;
use crate::common::LedgerResult;

const DEFAULT_LEDGER_FILE: &str = "financial_data.csv";
const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";
const CONFIG_DIR_NAME: &str = "finledger";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Header names of the four ledger columns
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct Columns {
    pub(crate) date: String,
    pub(crate) category: String,
    pub(crate) description: String,
    pub(crate) amount: String,
}

impl Default for Columns {
    fn default() -> Self {
        Columns {
            date: "Date".to_string(),
            category: "Category".to_string(),
            description: "Description".to_string(),
            amount: "Amount".to_string(),
        }
    }
}

impl Columns {
    /// Header row in file order
    pub(crate) fn header(&self) -> [&str; 4] {
        [&self.date, &self.category, &self.description, &self.amount]
    }
}

/// Everything the record store needs to know about the ledger file
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct LedgerConfig {
    pub(crate) file_path: PathBuf,
    pub(crate) date_format: String,
    pub(crate) columns: Columns,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            file_path: PathBuf::from(DEFAULT_LEDGER_FILE),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            columns: Columns::default(),
        }
    }
}

impl LedgerConfig {
    /// Human readable form of the date format, e.g. `dd-mm-yyyy`
    pub(crate) fn date_format_hint(&self) -> String {
        self.date_format
            .replace("%d", "dd")
            .replace("%m", "mm")
            .replace("%Y", "yyyy")
            .replace("%y", "yy")
    }

    pub(crate) fn load_from_file(path: &Path) -> LedgerResult<LedgerConfig> {
        if path.exists() && path.is_file() {
            info!("Loading config from {}", path.display());
            let config: LedgerConfig = toml::from_str(&fs::read_to_string(path)?)?;
            Ok(config)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(LedgerConfig::default())
        }
    }

    /// Load from the given file, or from the user's config directory when none is given.
    pub(crate) fn load(path: Option<&Path>) -> LedgerResult<LedgerConfig> {
        match path {
            Some(path) => LedgerConfig::load_from_file(path),
            None => match default_config_path() {
                Some(path) => LedgerConfig::load_from_file(&path),
                None => Ok(LedgerConfig::default()),
            },
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
