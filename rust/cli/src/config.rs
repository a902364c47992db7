use serde::{Deserialize, Serialize};
use std::fs;

use twentyone_engine::rules::{GameRules, DEFAULT_RULES};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub number_of_decks: u8,
    pub seed: Option<u64>,
    pub hands_per_session: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub number_of_decks: ValueSource,
    pub seed: ValueSource,
    pub hands_per_session: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            number_of_decks: ValueSource::Default,
            seed: ValueSource::Default,
            hands_per_session: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            number_of_decks: DEFAULT_RULES.number_of_decks,
            seed: None,
            hands_per_session: 10,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Optional-field mirror of [`Config`] for the TOML file, so a file may set
/// any subset of keys.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    number_of_decks: Option<u8>,
    seed: Option<u64>,
    hands_per_session: Option<u32>,
}

const CONFIG_PATH_ENV: &str = "TWENTYONE_CONFIG";
const DECKS_ENV: &str = "TWENTYONE_DECKS";
const SEED_ENV: &str = "TWENTYONE_SEED";
const HANDS_ENV: &str = "TWENTYONE_HANDS";
const DEFAULT_CONFIG_PATH: &str = "twentyone.toml";

/// Resolve configuration with default → file → env precedence, tracking
/// where each value came from.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut config = Config::default();
    let mut sources = ConfigSources::default();

    let path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    if fs::metadata(&path).is_ok() {
        let text = fs::read_to_string(&path)?;
        let file: FileConfig = toml::from_str(&text)?;
        if let Some(decks) = file.number_of_decks {
            config.number_of_decks = decks;
            sources.number_of_decks = ValueSource::File;
        }
        if let Some(seed) = file.seed {
            config.seed = Some(seed);
            sources.seed = ValueSource::File;
        }
        if let Some(hands) = file.hands_per_session {
            config.hands_per_session = hands;
            sources.hands_per_session = ValueSource::File;
        }
    }

    if let Ok(raw) = std::env::var(DECKS_ENV) {
        config.number_of_decks = raw
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{} must be a number: '{}'", DECKS_ENV, raw)))?;
        sources.number_of_decks = ValueSource::Env;
    }
    if let Ok(raw) = std::env::var(SEED_ENV) {
        config.seed = Some(raw.parse().map_err(|_| {
            ConfigError::Invalid(format!("{} must be a number: '{}'", SEED_ENV, raw))
        })?);
        sources.seed = ValueSource::Env;
    }
    if let Ok(raw) = std::env::var(HANDS_ENV) {
        config.hands_per_session = raw.parse().map_err(|_| {
            ConfigError::Invalid(format!("{} must be a number: '{}'", HANDS_ENV, raw))
        })?;
        sources.hands_per_session = ValueSource::Env;
    }

    validate(&config)?;
    Ok(ConfigResolved { config, sources })
}

/// Resolve configuration without source tracking.
pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let rules = GameRules {
        number_of_decks: config.number_of_decks,
        ..DEFAULT_RULES
    };
    rules
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    if config.hands_per_session == 0 {
        return Err(ConfigError::Invalid(
            "hands_per_session must be at least 1".to_string(),
        ));
    }
    Ok(())
}
