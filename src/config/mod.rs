pub mod app_config;
#[allow(clippy::module_inception)]
pub mod config;
