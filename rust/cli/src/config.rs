//! Session configuration: built-in defaults, then an optional TOML file named by
//! `HEADSUP_CONFIG`, then `HEADSUP_*` environment variables. Command-line flags are
//! applied on top by the individual commands.

use headsup_engine::player::{MAX_STACK, STARTING_STACK};
use headsup_engine::rules::{RoundRules, BIG_BLIND, SMALL_BLIND};
use serde::{Deserialize, Serialize};
use std::fs;

pub const ENV_CONFIG: &str = "HEADSUP_CONFIG";
pub const ENV_SEED: &str = "HEADSUP_SEED";
pub const ENV_STACK: &str = "HEADSUP_STACK";
pub const ENV_THINK_MS: &str = "HEADSUP_THINK_MS";
pub const ENV_CHECKED_STREETS: &str = "HEADSUP_CHECKED_STREETS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub seed: Option<u64>,
    /// Pause before the opponent answers, in milliseconds.
    pub think_ms: u64,
    pub small_blind: u32,
    pub big_blind: u32,
    pub advance_on_checked_street: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            seed: None,
            think_ms: 1_000,
            small_blind: SMALL_BLIND,
            big_blind: BIG_BLIND,
            advance_on_checked_street: true,
        }
    }
}

impl Config {
    pub fn rules(&self) -> RoundRules {
        RoundRules {
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            advance_on_checked_street: self.advance_on_checked_street,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub seed: ValueSource,
    pub think_ms: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub advance_on_checked_street: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            seed: ValueSource::Default,
            think_ms: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            advance_on_checked_street: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
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
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.think_ms {
            cfg.think_ms = v;
            sources.think_ms = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.advance_on_checked_street {
            cfg.advance_on_checked_street = v;
            sources.advance_on_checked_street = ValueSource::File;
        }
    }

    if let Some(seed) = env_value(ENV_SEED) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(stack) = env_value(ENV_STACK) {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid starting stack: {}", stack)))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(ms) = env_value(ENV_THINK_MS) {
        cfg.think_ms = ms
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid think time: {}", ms)))?;
        sources.think_ms = ValueSource::Env;
    }
    if let Some(flag) = env_value(ENV_CHECKED_STREETS) {
        cfg.advance_on_checked_street = parse_bool(&flag).ok_or_else(|| {
            ConfigError::Invalid(format!("Invalid {}: {}", ENV_CHECKED_STREETS, flag))
        })?;
        sources.advance_on_checked_street = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    think_ms: Option<u64>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    advance_on_checked_street: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    if cfg.starting_stack > MAX_STACK {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: starting_stack must be <= {}",
            MAX_STACK
        )));
    }
    if cfg.small_blind == 0 || cfg.small_blind >= cfg.big_blind {
        return Err(ConfigError::Invalid(
            "Invalid configuration: blinds must satisfy 0 < small_blind < big_blind".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_table() {
        let cfg = Config::default();
        assert_eq!(cfg.starting_stack, 1_000);
        assert_eq!(cfg.rules().small_blind, 10);
        assert_eq!(cfg.rules().big_blind, 20);
        assert!(cfg.rules().advance_on_checked_street);
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn inverted_blinds_are_invalid() {
        let cfg = Config {
            small_blind: 20,
            big_blind: 20,
            ..Config::default()
        };
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn stack_limit_is_inclusive() {
        let at_limit = Config {
            starting_stack: MAX_STACK,
            ..Config::default()
        };
        assert!(validate(&at_limit).is_ok());
        let over = Config {
            starting_stack: MAX_STACK + 1,
            ..Config::default()
        };
        assert!(matches!(validate(&over), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn bool_spellings() {
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
