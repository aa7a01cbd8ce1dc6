use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub(super) dry_run: bool,
    pub(super) log_filter: Option<String>,
}

impl AppConfig {
    pub fn new_default() -> AppConfig {
        AppConfig {
            dry_run: false,
            log_filter: None,
        }
    }
}
