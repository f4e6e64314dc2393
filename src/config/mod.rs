use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::currency::{CurrencyCode, LocaleConfig};
use crate::errors::BudgetError;
use crate::ledger::{SampleGenerator, DEFAULT_SAMPLE_MONTHS, MAX_SAMPLE_MONTHS};

const DEFAULT_DIR_NAME: &str = ".budget_tracker";
const HOME_ENV: &str = "BUDGET_TRACKER_HOME";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// What a freshly constructed store starts with.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InitialData {
    #[default]
    Sample,
    Empty,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub initial_data: InitialData,
    #[serde(default = "Config::default_sample_months")]
    pub sample_months: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "fr-FR".into(),
            currency: "EUR".into(),
            initial_data: InitialData::default(),
            sample_months: DEFAULT_SAMPLE_MONTHS,
            sample_seed: None,
        }
    }
}

impl Config {
    fn default_sample_months() -> u32 {
        DEFAULT_SAMPLE_MONTHS
    }

    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig::for_tag(&self.locale)
    }

    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(self.currency.as_str())
    }

    pub fn sample_generator(&self) -> SampleGenerator {
        SampleGenerator {
            months: self.sample_months.min(MAX_SAMPLE_MONTHS),
            reference_date: None,
            seed: self.sample_seed,
        }
    }
}

/// Returns the application data directory, defaulting to `~/.budget_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BudgetError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BudgetError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config, BudgetError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let mut config: Config = serde_json::from_str(&data)?;
            if config.sample_months > MAX_SAMPLE_MONTHS {
                warn!(
                    requested = config.sample_months,
                    max = MAX_SAMPLE_MONTHS,
                    "sample_months out of range, clamping"
                );
                config.sample_months = MAX_SAMPLE_MONTHS;
            }
            Ok(config)
        } else {
            debug!(path = %self.path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), BudgetError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), BudgetError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().join("nested")).unwrap();
        let config = Config {
            locale: "en-US".into(),
            currency: "usd".into(),
            initial_data: InitialData::Empty,
            sample_months: 6,
            sample_seed: Some(99),
        };
        manager.save(&config).unwrap();
        assert!(!tmp_path(manager.path()).exists());
        let loaded = manager.load().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.currency_code().as_str(), "USD");
        assert_eq!(loaded.locale_config(), LocaleConfig::english());
        assert_eq!(loaded.sample_generator().months, 6);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{"locale":"fr-FR","currency":"EUR"}"#).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.initial_data, InitialData::Sample);
        assert_eq!(loaded.sample_months, DEFAULT_SAMPLE_MONTHS);
        assert_eq!(loaded.sample_seed, None);
    }

    #[test]
    fn oversized_sample_months_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(
            manager.path(),
            r#"{"locale":"fr-FR","currency":"EUR","sample_months":4000000000}"#,
        )
        .unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.sample_months, MAX_SAMPLE_MONTHS);

        let in_memory = Config {
            sample_months: u32::MAX,
            ..Config::default()
        };
        assert_eq!(in_memory.sample_generator().months, MAX_SAMPLE_MONTHS);
    }

    #[test]
    fn malformed_file_is_a_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.path(), "{ not json").unwrap();
        assert!(matches!(manager.load(), Err(BudgetError::Serde(_))));
    }
}
