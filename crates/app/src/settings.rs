//! Handles settings for the application. Configuration is written in
//! `motolog.toml`; every field has a default so the file is optional.
use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Display {
    pub cost_mode: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: Option<App>,
    pub display: Option<Display>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("motolog").required(false))
            .build()?;

        settings.try_deserialize()
    }

    pub fn level(&self) -> &str {
        self.app
            .as_ref()
            .and_then(|app| app.level.as_deref())
            .unwrap_or("info")
    }

    pub fn cost_mode(&self) -> Option<&str> {
        self.display
            .as_ref()
            .and_then(|display| display.cost_mode.as_deref())
    }
}
