mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{BotSettings, ENVIRONMENT_VAR, LoggingSettings, ServerSettings, Settings};
