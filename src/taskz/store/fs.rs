use super::TaskStore;
use crate::error::{Result, TaskzError};
use crate::model::Task;
use std::fs;
use std::path::{Path, PathBuf};

const TASKS_FILENAME: &str = "tasks.json";

/// File-based store: the collection is one JSON array in `tasks.json`
/// under the data directory.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.data_dir.join(TASKS_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(TaskzError::Io)?;
        }
        Ok(())
    }
}

impl TaskStore for FileStore {
    fn load(&self) -> Result<Vec<Task>> {
        let path = self.tasks_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(TaskzError::Io)?;
        // A document that doesn't parse as a task array counts as absent.
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;
        let content = serde_json::to_string_pretty(tasks).map_err(TaskzError::Serialization)?;
        fs::write(self.tasks_path(), content).map_err(TaskzError::Io)?;
        Ok(())
    }
}
