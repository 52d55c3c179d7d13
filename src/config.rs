//! Runtime configuration.
//!
//! Read from an optional `flowstate.json` in the working directory. The task
//! file path can be overridden from the command line or `FLOWSTATE_FILE`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::files::FileStorage;
use crate::store::tabs::TaskStore;
use crate::store::{DEFAULT_TABS, PROTECTED_TAB};

pub const CONFIG_FILE: &str = "flowstate.json";
pub const DEFAULT_TASKS_FILE: &str = "tasks.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Task file; relative paths are taken from the working directory.
    #[serde(default = "default_tasks_file")]
    pub tasks_file: PathBuf,

    /// Tabs that always exist, in display order.
    #[serde(default = "default_tabs")]
    pub default_tabs: Vec<String>,

    /// Tab that cannot be renamed or deleted. `null` disables the guard.
    #[serde(default = "default_protected_tab")]
    pub protected_tab: Option<String>,
}

fn default_tasks_file() -> PathBuf {
    PathBuf::from(DEFAULT_TASKS_FILE)
}

fn default_tabs() -> Vec<String> {
    DEFAULT_TABS.iter().map(|t| t.to_string()).collect()
}

fn default_protected_tab() -> Option<String> {
    Some(PROTECTED_TAB.to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: default_tasks_file(),
            default_tabs: default_tabs(),
            protected_tab: default_protected_tab(),
        }
    }
}

impl Config {
    /// Load `flowstate.json` from `dir`, falling back to defaults when absent.
    /// `file_override` replaces the configured task file.
    pub fn resolve(dir: &Path, file_override: Option<PathBuf>) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        let mut config = if path.exists() {
            let data = fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            Self::default()
        };
        if let Some(file) = file_override {
            config.tasks_file = file;
        }
        if config.tasks_file.is_relative() {
            config.tasks_file = dir.join(&config.tasks_file);
        }
        tracing::debug!(tasks_file = %config.tasks_file.display(), "configuration resolved");
        Ok(config)
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.tasks_file).with_default_tabs(self.default_tabs.clone())
    }

    pub fn open_store(&self) -> Result<TaskStore<FileStorage>> {
        TaskStore::open_with(
            self.storage(),
            self.default_tabs.as_slice(),
            self.protected_tab.as_deref(),
        )
    }
}
