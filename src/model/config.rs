use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    pub players_file: String,
    pub events_file: String,
    pub rsvps_file: String,
    pub output_file: String,
}

impl AppConfig {
    /// Load configuration with layering: defaults → user config.
    pub fn load() -> Result<Self> {
        let defaults = include_str!("../../config/default.toml");
        let mut config: AppConfig = toml::from_str(defaults)?;

        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "rollcall") {
            let config_path = proj_dirs.config_dir().join("config.toml");
            if config_path.exists() {
                let user_str = fs::read_to_string(&config_path)?;
                let user_config: AppConfig = toml::from_str(&user_str)?;
                config = user_config;
            }
        }

        Ok(config)
    }

    pub fn players_path(&self) -> PathBuf {
        PathBuf::from(&self.report.players_file)
    }

    pub fn events_path(&self) -> PathBuf {
        PathBuf::from(&self.report.events_file)
    }

    pub fn rsvps_path(&self) -> PathBuf {
        PathBuf::from(&self.report.rsvps_file)
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.report.output_file)
    }
}
