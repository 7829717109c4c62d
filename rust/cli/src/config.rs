use koikoi_ai::AI_TYPES;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "KOIKOI_CONFIG";
pub const SEED_ENV: &str = "KOIKOI_SEED";
pub const ROUNDS_ENV: &str = "KOIKOI_ROUNDS";
pub const AI_ENV: &str = "KOIKOI_AI";
pub const PLAYER_NAME_ENV: &str = "KOIKOI_PLAYER_NAME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u32>,
    pub rounds: u32,
    pub ai: String,
    pub player_name: String,
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
    pub seed: ValueSource,
    pub rounds: ValueSource,
    pub ai: ValueSource,
    pub player_name: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            rounds: ValueSource::Default,
            ai: ValueSource::Default,
            player_name: ValueSource::Default,
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
            seed: None,
            rounds: koikoi_engine::game::DEFAULT_TOTAL_ROUNDS,
            ai: "baseline".into(),
            player_name: "You".into(),
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
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `KOIKOI_CONFIG`, then `KOIKOI_*`
/// environment variables. Later layers win.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.rounds {
            cfg.rounds = v;
            sources.rounds = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
        if let Some(v) = f.player_name {
            cfg.player_name = v;
            sources.player_name = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(rounds) = std::env::var(ROUNDS_ENV)
        && !rounds.is_empty()
    {
        cfg.rounds = rounds
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid rounds: {}", rounds)))?;
        sources.rounds = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var(AI_ENV)
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }
    if let Ok(name) = std::env::var(PLAYER_NAME_ENV)
        && !name.trim().is_empty()
    {
        cfg.player_name = name.trim().to_string();
        sources.player_name = ValueSource::Env;
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
    seed: Option<u32>,
    #[serde(default)]
    rounds: Option<u32>,
    #[serde(default)]
    ai: Option<String>,
    #[serde(default)]
    player_name: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.rounds == 0 {
        return Err(ConfigError::Invalid("rounds must be >=1".into()));
    }
    if !AI_TYPES.contains(&cfg.ai.to_ascii_lowercase().as_str()) {
        return Err(ConfigError::Invalid(format!(
            "unknown ai '{}' (available: {})",
            cfg.ai,
            AI_TYPES.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert!(validate(&cfg).is_ok());
        assert_eq!(cfg.rounds, 12);
        assert_eq!(cfg.ai, "baseline");
    }

    #[test]
    fn zero_rounds_rejected() {
        let cfg = Config {
            rounds: 0,
            ..Config::default()
        };
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn unknown_ai_rejected() {
        let cfg = Config {
            ai: "oracle".into(),
            ..Config::default()
        };
        let err = validate(&cfg).unwrap_err();
        assert!(err.to_string().contains("oracle"));
    }
}
