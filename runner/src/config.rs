use engine::config::Validate;
use serde::{Deserialize, Serialize};

use crate::controller::ControllerKind;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub board_width: usize,
    pub board_height: usize,
    pub tick_interval_ms: u64,
    pub controller: ControllerKind,
    pub max_ticks: Option<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            board_width: 20,
            board_height: 20,
            tick_interval_ms: 500,
            controller: ControllerKind::Greedy,
            max_ticks: None,
        }
    }
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.board_width < 2 || self.board_width > 100 {
            return Err("Board width must be between 2 and 100".to_string());
        }
        if self.board_height < 2 || self.board_height > 100 {
            return Err("Board height must be between 2 and 100".to_string());
        }
        if self.tick_interval_ms < 10 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 10ms and 5000ms".to_string());
        }
        if let Some(max_ticks) = self.max_ticks
            && max_ticks == 0
        {
            return Err("Max tick count must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RunnerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_tiny_board() {
        let config = RunnerConfig {
            board_width: 1,
            ..RunnerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_tick_interval() {
        let config = RunnerConfig {
            tick_interval_ms: 9,
            ..RunnerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_tick_limit() {
        let config = RunnerConfig {
            max_ticks: Some(0),
            ..RunnerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
