use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use knack_core::{CoinSet, CoreError, PhoneFormat};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "knack";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_COINS: [i64; 6] = [1, 5, 10, 25, 50, 100];
pub const DEFAULT_MAX_AMOUNT: i64 = 1_000_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub change: ChangeConfig,
    pub phone: PhoneConfig,
}

#[derive(Debug, Clone)]
pub struct ChangeConfig {
    pub default_coins: CoinSet,
    pub max_amount: i64,
}

#[derive(Debug, Clone)]
pub struct PhoneConfig {
    pub format: PhoneFormat,
}

impl Default for ChangeConfig {
    fn default() -> Self {
        Self {
            default_coins: CoinSet::new(&DEFAULT_COINS).unwrap_or_default(),
            max_amount: DEFAULT_MAX_AMOUNT,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            change: ChangeConfig::default(),
            phone: PhoneConfig {
                format: PhoneFormat::Digits,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid change.default_coins value: {0}")]
    InvalidDefaultCoins(#[source] CoreError),
    #[error("change.default_coins cannot be empty")]
    EmptyDefaultCoins,
    #[error("invalid change.max_amount value: {0}")]
    InvalidMaxAmount(i64),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    change: Option<ChangeFile>,
    phone: Option<PhoneFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChangeFile {
    default_coins: Option<Vec<i64>>,
    max_amount: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PhoneFile {
    format: Option<PhoneFormat>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(change) = parsed.change {
        if let Some(coins) = change.default_coins {
            let coins = CoinSet::new(&coins).map_err(ConfigError::InvalidDefaultCoins)?;
            if coins.is_empty() {
                return Err(ConfigError::EmptyDefaultCoins);
            }
            config.change.default_coins = coins;
        }
        if let Some(max_amount) = change.max_amount {
            if max_amount <= 0 {
                return Err(ConfigError::InvalidMaxAmount(max_amount));
            }
            config.change.max_amount = max_amount;
        }
    }

    if let Some(phone) = parsed.phone {
        if let Some(format) = phone.format {
            config.phone.format = format;
        }
    }

    Ok(config)
}
