use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const DEFAULT_TARGET_VALUE: u32 = 2048;
pub const DEFAULT_FOUR_TILE_PROBABILITY: f64 = 0.1;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct Puzzle2048Settings {
    pub target_value: u32,
    pub four_tile_probability: f64,
}

impl Validate for Puzzle2048Settings {
    fn validate(&self) -> Result<(), String> {
        if self.target_value < 8 {
            return Err(format!(
                "Target value must be at least 8, got {}",
                self.target_value
            ));
        }
        if !self.target_value.is_power_of_two() {
            return Err(format!(
                "Target value must be a power of 2, got {}",
                self.target_value
            ));
        }
        if !(0.0..=1.0).contains(&self.four_tile_probability) {
            return Err(format!(
                "Four tile probability must be between 0 and 1, got {}",
                self.four_tile_probability
            ));
        }
        Ok(())
    }
}

impl Default for Puzzle2048Settings {
    fn default() -> Self {
        Self {
            target_value: DEFAULT_TARGET_VALUE,
            four_tile_probability: DEFAULT_FOUR_TILE_PROBABILITY,
        }
    }
}
