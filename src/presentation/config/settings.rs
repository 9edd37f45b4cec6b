use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub bot: BotSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotSettings {
    pub reply_delay_ms: u64,
    pub display_name: String,
}

impl BotSettings {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Resolves the environment from `APP_ENVIRONMENT` (default `local`) and loads settings for it.
    pub fn load() -> Result<(Environment, Self), ConfigError> {
        let environment: Environment = std::env::var(ENVIRONMENT_VAR)
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(ConfigError::Message)?;

        Ok((environment, Self::load_for(environment)?))
    }

    /// Layers, lowest priority first: defaults, `appsettings.{env}` file,
    /// `APP_*` variables (`__` separates sections), then the plain
    /// `PORT`, `BOT_RESPONSE_DELAY` and `BOT_NAME` variables.
    pub fn load_for(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option(
                "bot.reply_delay_ms",
                std::env::var("BOT_RESPONSE_DELAY").ok(),
            )?
            .set_override_option("bot.display_name", std::env::var("BOT_NAME").ok())?
            .build()?
            .try_deserialize()
    }

    /// Defaults plus the environment file only; ignores process variables.
    pub fn defaults_for(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?.build()?.try_deserialize()
    }

    fn builder(
        environment: Environment,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("bot.reply_delay_ms", 1000)?
            .set_default("bot.display_name", "Chat Assistant")?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_settings_file_when_loading_defaults_then_matches_documented_values() {
        let settings = Settings::defaults_for(Environment::Test).unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.bot.reply_delay_ms, 1000);
        assert_eq!(settings.bot.reply_delay(), Duration::from_secs(1));
        assert_eq!(settings.bot.display_name, "Chat Assistant");
        assert_eq!(settings.logging.level, "info");
        assert!(!settings.logging.json);
    }
}
