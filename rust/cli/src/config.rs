//! Configuration layering: built-in defaults, then an optional TOML file
//! named by `FELT_CONFIG`, then `FELT_*` environment variables. Each value
//! remembers where it came from so `felt cfg` can display its source.

use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub bots: u8,
    pub seed: Option<u64>,
    pub decision_timeout_ms: u64,
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
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub bots: ValueSource,
    pub seed: ValueSource,
    pub decision_timeout_ms: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            bots: ValueSource::Default,
            seed: ValueSource::Default,
            decision_timeout_ms: ValueSource::Default,
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
            starting_stack: 1_000,
            small_blind: 10,
            big_blind: 20,
            bots: 2,
            seed: None,
            decision_timeout_ms: 5_000,
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
            ConfigError::Io(e) => write!(f, "failed to read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FELT_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.bots {
            cfg.bots = v;
            sources.bots = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.decision_timeout_ms {
            cfg.decision_timeout_ms = v;
            sources.decision_timeout_ms = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("FELT_SEED") {
        if !seed.is_empty() {
            cfg.seed = Some(
                seed.parse()
                    .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
            );
            sources.seed = ValueSource::Env;
        }
    }
    if let Ok(stack) = std::env::var("FELT_STACK") {
        if !stack.is_empty() {
            cfg.starting_stack = stack
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid stack".into()))?;
            sources.starting_stack = ValueSource::Env;
        }
    }
    if let Ok(bots) = std::env::var("FELT_BOTS") {
        if !bots.is_empty() {
            cfg.bots = bots
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid bots".into()))?;
            sources.bots = ValueSource::Env;
        }
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    bots: Option<u8>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    decision_timeout_ms: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.big_blind == 0 || cfg.small_blind == 0 {
        return Err(ConfigError::Invalid("blinds must be >0".into()));
    }
    if cfg.small_blind >= cfg.big_blind {
        return Err(ConfigError::Invalid(
            "small_blind must be < big_blind".into(),
        ));
    }
    if cfg.starting_stack < cfg.big_blind {
        return Err(ConfigError::Invalid(
            "starting_stack must cover the big blind".into(),
        ));
    }
    if cfg.bots == 0 || cfg.bots > 8 {
        return Err(ConfigError::Invalid("bots must be 1-8".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write as _;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert!(validate(&cfg).is_ok());
        assert_eq!(cfg.starting_stack, 1_000);
        assert_eq!(cfg.big_blind, 20);
    }

    #[test]
    fn rejects_inverted_blinds() {
        let cfg = Config {
            small_blind: 40,
            ..Config::default()
        };
        let err = validate(&cfg).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: small_blind must be < big_blind"
        );
    }

    #[test]
    fn rejects_too_many_bots() {
        let cfg = Config {
            bots: 9,
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());
    }

    #[test]
    #[serial]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("felt.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "starting_stack = 5000\nbots = 4").unwrap();
        drop(f);

        std::env::set_var("FELT_CONFIG", &path);
        std::env::remove_var("FELT_SEED");
        std::env::remove_var("FELT_STACK");
        std::env::remove_var("FELT_BOTS");
        let resolved = load_with_sources().unwrap();
        std::env::remove_var("FELT_CONFIG");

        assert_eq!(resolved.config.starting_stack, 5000);
        assert_eq!(resolved.config.bots, 4);
        assert!(matches!(resolved.sources.starting_stack, ValueSource::File));
        assert!(matches!(resolved.sources.big_blind, ValueSource::Default));
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        std::env::remove_var("FELT_CONFIG");
        std::env::remove_var("FELT_STACK");
        std::env::remove_var("FELT_BOTS");
        std::env::set_var("FELT_SEED", "99");
        let resolved = load_with_sources().unwrap();
        std::env::remove_var("FELT_SEED");

        assert_eq!(resolved.config.seed, Some(99));
        assert!(matches!(resolved.sources.seed, ValueSource::Env));
    }
}
