use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use super::app_config::AppConfig;

pub const DEFAULT_LOG_FILTER: &str = "info";

pub struct Config {
    config_file: Option<PathBuf>,
    app_config: AppConfig,
}

impl Config {
    pub fn new_from_file(config_path: Option<String>) -> Result<Config> {
        if let Some(config_path) = config_path {
            Config::new(PathBuf::from(config_path))
        } else {
            Ok(Config::new_default())
        }
    }

    pub fn new_default() -> Config {
        Config {
            config_file: None,
            app_config: AppConfig::new_default(),
        }
    }

    fn new(config_file: PathBuf) -> Result<Config> {
        let file_content = std::fs::read_to_string(&config_file)
            .with_context(|| format!("Reading config file {}", config_file.display()))?;
        let app_config: AppConfig = toml::from_str(&file_content)
            .with_context(|| format!("Parsing config file {}", config_file.display()))?;

        let config = Config {
            config_file: Some(config_file),
            app_config,
        };

        config.validate().and(Ok(config))
    }

    pub fn is_dry_run(&self) -> bool {
        self.app_config.dry_run
    }

    pub fn get_log_filter(&self) -> &str {
        self.app_config
            .log_filter
            .as_deref()
            .unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(filter) = &self.app_config.log_filter {
            if filter.trim().is_empty() {
                return Err(anyhow!(
                    "Given log_filter is empty (config file path: \"{}\")",
                    self.config_file_display()
                ));
            }
        }

        Ok(())
    }

    fn config_file_display(&self) -> String {
        self.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<none>".to_string())
    }
}

#[cfg(test)]
mod validation {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::config::app_config::AppConfig;

    use super::{Config, DEFAULT_LOG_FILTER};

    fn make_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    fn load(contents: &str) -> anyhow::Result<Config> {
        let file = make_config(contents);
        Config::new_from_file(Some(file.path().display().to_string()))
    }

    #[test]
    fn it_should_use_defaults_without_file() {
        let config = Config::new_from_file(None).unwrap();

        assert!(!config.is_dry_run());
        assert_eq!(config.get_log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn it_should_read_values_from_file() {
        let config = load("dry_run = true\nlog_filter = \"debug\"\n").unwrap();

        assert!(config.is_dry_run());
        assert_eq!(config.get_log_filter(), "debug");
    }

    #[test]
    fn it_should_accept_empty_file() {
        let config = load("").unwrap();

        assert_eq!(config.app_config, AppConfig::new_default());
    }

    #[test]
    fn it_should_reject_empty_log_filter() {
        assert!(load("log_filter = \"  \"\n").is_err());
    }

    #[test]
    fn it_should_reject_invalid_toml() {
        assert!(load("dry_run = maybe\n").is_err());
    }

    #[test]
    fn it_should_reject_not_existing_file() {
        let result = Config::new_from_file(Some("/foobar/catalog-fixer.toml".to_string()));

        assert!(result.is_err());
    }
}
