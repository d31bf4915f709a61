//! Configuration loading
//!
//! Sources, later ones winning:
//! 1. Built-in defaults
//! 2. `looplens.toml` in the working directory, or the file named by
//!    `--config` / `LOOPLENS_CONFIG_PATH` (which must exist)
//! 3. `LOOPLENS_*` environment variables, `__` between sections
//!    (`LOOPLENS_EXECUTION__SPEED_MS=500`, `LOOPLENS_DISPLAY__LANGUAGE=ko`)
//! 4. Explicit overrides from the builder (CLI flags)
//!
//! A `.env` file is loaded into the environment first if present.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::error::Result;
use crate::i18n::Language;
use crate::speed::Speed;

const ENV_PREFIX: &str = "LOOPLENS";
const CONFIG_PATH_VAR: &str = "LOOPLENS_CONFIG_PATH";
const DEFAULT_FILE: &str = "looplens";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub execution: ExecutionConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Delay between auto-run ticks
    pub speed_ms: Speed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub language: Language,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load with no explicit overrides
    pub fn load() -> Result<Self> {
        Self::builder().build()
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_path: Option<PathBuf>,
    speed_ms: Option<u64>,
    language: Option<Language>,
    skip_environment: bool,
}

impl ConfigBuilder {
    pub fn config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn speed_ms(mut self, speed_ms: Option<u64>) -> Self {
        self.speed_ms = speed_ms;
        self
    }

    pub fn language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }

    /// Ignore `.env` and process environment variables
    pub fn skip_environment(mut self, skip: bool) -> Self {
        self.skip_environment = skip;
        self
    }

    pub fn build(self) -> Result<Config> {
        if !self.skip_environment {
            let _ = dotenvy::dotenv();
        }

        let config_path = self.config_path.or_else(|| {
            if self.skip_environment {
                None
            } else {
                std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from)
            }
        });

        let mut builder = config::Config::builder()
            .set_default("execution.speed_ms", Speed::DEFAULT_MS)?
            .set_default("display.language", Language::default().code())?;

        builder = match &config_path {
            Some(path) => {
                debug!(path = %path.display(), "loading config file");
                builder.add_source(config::File::from(path.as_path()).required(true))
            }
            None => builder.add_source(config::File::with_name(DEFAULT_FILE).required(false)),
        };

        if !self.skip_environment {
            builder = builder.add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        let config: Config = builder
            .set_override_option("execution.speed_ms", self.speed_ms)?
            .set_override_option("display.language", self.language.map(|l| l.code()))?
            .build()?
            .try_deserialize()?;

        debug!(
            speed_ms = config.execution.speed_ms.millis(),
            language = %config.display.language,
            "configuration loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    fn write_config(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("looplens-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::builder().skip_environment(true).build().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.execution.speed_ms.millis(), 1000);
        assert_eq!(config.display.language, Language::En);
    }

    #[test]
    fn test_file_then_overrides() {
        let path = write_config("[execution]\nspeed_ms = 400\n\n[display]\nlanguage = \"ko\"\n");

        let from_file = Config::builder()
            .skip_environment(true)
            .config_path(Some(path.clone()))
            .build()
            .unwrap();
        assert_eq!(from_file.execution.speed_ms.millis(), 400);
        assert_eq!(from_file.display.language, Language::Ko);

        let overridden = Config::builder()
            .skip_environment(true)
            .config_path(Some(path.clone()))
            .speed_ms(Some(150))
            .language(Some(Language::En))
            .build()
            .unwrap();
        assert_eq!(overridden.execution.speed_ms.millis(), 150);
        assert_eq!(overridden.display.language, Language::En);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_out_of_range_speed_rejected() {
        let result = Config::builder()
            .skip_environment(true)
            .speed_ms(Some(50))
            .build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Config::builder()
            .skip_environment(true)
            .config_path(Some(PathBuf::from("/nonexistent/looplens.toml")))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config {
            execution: ExecutionConfig {
                speed_ms: Speed::new(300).unwrap(),
            },
            display: DisplayConfig {
                language: Language::Ko,
            },
        };
        let text = config.to_toml().unwrap();
        assert!(text.contains("speed_ms = 300"));
        assert!(text.contains("language = \"ko\""));
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }
}
