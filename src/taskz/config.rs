use crate::error::{Result, TaskzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LINE_WIDTH: usize = 80;
const MIN_LINE_WIDTH: usize = 20;

/// Configuration for taskz, stored as config.json next to the task data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskzConfig {
    /// Width budget for rendered task lines
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for TaskzConfig {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl TaskzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TaskzError::Io)?;
        let config: TaskzConfig =
            serde_json::from_str(&content).map_err(TaskzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TaskzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TaskzError::Serialization)?;
        fs::write(config_path, content).map_err(TaskzError::Io)?;
        Ok(())
    }

    /// Set the line width, clamped so the renderer always has room for the
    /// checkbox and id columns
    pub fn set_line_width(&mut self, width: usize) {
        self.line_width = width.max(MIN_LINE_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = TaskzConfig::default();
        assert_eq!(config.line_width, 80);
    }

    #[test]
    fn set_line_width_clamps_to_minimum() {
        let mut config = TaskzConfig::default();
        config.set_line_width(5);
        assert_eq!(config.line_width, MIN_LINE_WIDTH);

        config.set_line_width(120);
        assert_eq!(config.line_width, 120);
    }

    #[test]
    fn load_missing_config_is_default() {
        let temp = TempDir::new().unwrap();
        let config = TaskzConfig::load(temp.path().join("nowhere")).unwrap();
        assert_eq!(config, TaskzConfig::default());
    }

    #[test]
    fn save_and_load() {
        let temp = TempDir::new().unwrap();

        let mut config = TaskzConfig::default();
        config.set_line_width(100);
        config.save(temp.path()).unwrap();

        let loaded = TaskzConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.line_width, 100);
    }

    #[test]
    fn missing_field_falls_back_to_default() {
        let parsed: TaskzConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TaskzConfig::default());
    }
}
