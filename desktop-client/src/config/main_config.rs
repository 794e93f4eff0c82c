use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::puzzle2048::Puzzle2048Settings;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "puzzle2048_config.yaml";

pub fn get_config_manager(
    path: impl AsRef<Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: Puzzle2048Settings,
    pub input: InputConfig,
    pub window: WindowConfig,
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.window.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct InputConfig {
    /// Collapse key-repeat bursts into the most recent input.
    pub coalesce_bursts: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            coalesce_bursts: true,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        let usable = |dimension: f32| dimension.is_finite() && dimension >= 200.0;
        if !(usable(self.width) && usable(self.height)) {
            return Err(format!(
                "window dimensions must be at least 200x200, got {}x{}",
                self.width, self.height
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 460.0,
            height: 620.0,
        }
    }
}
