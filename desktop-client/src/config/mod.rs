mod main_config;

pub use main_config::{DEFAULT_CONFIG_FILE, get_config_manager};
