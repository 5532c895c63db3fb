use config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tracing::info;
use url::Url;

use crate::error::{Error, Result};
use crate::platform::AppPaths;

/// Environment variables starting with this prefix override file settings,
/// e.g. `AIML_COURSE_ENDPOINT__BASE_URL`.
pub const ENV_PREFIX: &str = "AIML_COURSE";

const THEMES: &[&str] = &["dark", "light"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub endpoint: EndpointConfig,
    pub ui: UIConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub base_url: String,
    pub ask_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UIConfig {
    pub theme: String,
    pub tick_rate_ms: u64,
    pub reveal_delay_ms: u64,
    pub reveal_step_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig {
                base_url: "http://localhost:8000".to_string(),
                ask_path: "/ask-ollama/".to_string(),
            },
            ui: UIConfig {
                theme: "dark".to_string(),
                tick_rate_ms: 100,
                reveal_delay_ms: 200,
                reveal_step_ms: 180,
            },
        }
    }
}

impl UIConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn reveal_step(&self) -> Duration {
        Duration::from_millis(self.reveal_step_ms)
    }
}

impl AppConfig {
    /// Loads defaults, then the config file, then `AIML_COURSE_*` variables.
    ///
    /// A missing platform config file is created with the defaults. A config
    /// file given explicitly must exist.
    pub async fn load(paths: &AppPaths) -> Result<Self> {
        let config_file = paths.config_file();

        if paths.uses_default_config() && !config_file.exists() {
            info!("Config file not found, creating default configuration");
            Self::default().save(&config_file).await?;
        }

        info!("Loading configuration from: {:?}", config_file);
        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        let config = Self::layered(&config_file, !paths.uses_default_config(), environment)?;

        info!("Configuration loaded successfully");
        Ok(config)
    }

    fn layered(config_file: &Path, required: bool, environment: Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(
                File::from(config_file)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(environment)
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub async fn save(&self, config_file: &Path) -> Result<()> {
        info!("Saving configuration to: {:?}", config_file);

        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(config_file, self.to_toml()?).await?;

        info!("Configuration saved successfully");
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Points the client at `base_url`, keeping the configured ask path.
    pub fn override_endpoint(&mut self, base_url: &str) -> Result<()> {
        self.endpoint.base_url = base_url.to_string();
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.endpoint.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::validation(format!(
                "Endpoint base_url must be http or https, got {}",
                base.scheme()
            )));
        }

        if !self.endpoint.ask_path.starts_with('/') {
            return Err(Error::validation("Endpoint ask_path must start with '/'"));
        }

        if !THEMES.contains(&self.ui.theme.as_str()) {
            return Err(Error::validation(format!(
                "Unknown theme '{}', expected one of {:?}",
                self.ui.theme, THEMES
            )));
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(Error::validation("UI tick_rate_ms must be greater than 0"));
        }

        Ok(())
    }
}
