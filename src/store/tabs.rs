use std::path::Path;

use tracing::{debug, info};

use crate::error::{FlowError, Result};
use crate::model::Task;
use crate::store::files;
use crate::store::{DEFAULT_TABS, LoadStatus, PROTECTED_TAB, Storage, TabMap};

/// In-memory tab map backed by a [`Storage`]. Loaded once on open, mutated
/// freely, written back in full by [`TaskStore::save`].
///
/// Task positions in the public API are 1-based, matching what users see.
pub struct TaskStore<S> {
    storage: S,
    tabs: TabMap,
    status: LoadStatus,
    defaults: Vec<String>,
    protected: Option<String>,
}

/// Trim a user-supplied tab name and reject names the line format cannot hold.
pub fn validate_tab_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FlowError::InvalidTabName(
            name.to_string(),
            "tab name cannot be empty".into(),
        ));
    }
    if trimmed.contains(['|', '\n', '\r']) {
        return Err(FlowError::InvalidTabName(
            name.to_string(),
            "tab name cannot contain '|' or line breaks".into(),
        ));
    }
    Ok(trimmed.to_string())
}

impl<S: Storage> TaskStore<S> {
    /// Load with the standard default tabs and `General` protected.
    pub fn open(storage: S) -> Result<Self> {
        Self::open_with(storage, &DEFAULT_TABS, Some(PROTECTED_TAB))
    }

    /// Load, then make sure every default tab exists. Defaults missing from
    /// the loaded data are appended empty, in the order given.
    pub fn open_with<T: AsRef<str>>(
        storage: S,
        defaults: &[T],
        protected: Option<&str>,
    ) -> Result<Self> {
        let loaded = storage.load_all()?;
        let mut tabs = loaded.tabs;
        for name in defaults {
            if !tabs.contains_key(name.as_ref()) {
                tabs.insert(name.as_ref().to_string(), Vec::new());
            }
        }
        debug!(tabs = tabs.len(), status = ?loaded.status, "task store opened");
        Ok(Self {
            storage,
            tabs,
            status: loaded.status,
            defaults: defaults.iter().map(|d| d.as_ref().to_string()).collect(),
            protected: protected.map(str::to_string),
        })
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn tabs(&self) -> &TabMap {
        &self.tabs
    }

    pub fn tab_names(&self) -> impl Iterator<Item = &str> {
        self.tabs.keys().map(String::as_str)
    }

    pub fn is_protected(&self, tab: &str) -> bool {
        self.protected.as_deref() == Some(tab)
    }

    /// Default tabs come back empty on the next open if they are removed.
    pub fn is_default(&self, tab: &str) -> bool {
        self.defaults.iter().any(|d| d == tab)
    }

    pub fn tasks(&self, tab: &str) -> Result<&[Task]> {
        self.tabs
            .get(tab)
            .map(Vec::as_slice)
            .ok_or_else(|| FlowError::TabNotFound(tab.to_string()))
    }

    pub fn task(&self, tab: &str, position: usize) -> Result<&Task> {
        position
            .checked_sub(1)
            .and_then(|i| self.tasks(tab).ok()?.get(i))
            .ok_or_else(|| self.missing_task(tab, position))
    }

    /// Incomplete tasks, then completed ones, each in stored order.
    pub fn partitioned(&self, tab: &str) -> Result<(Vec<&Task>, Vec<&Task>)> {
        Ok(self.tasks(tab)?.iter().partition(|t| !t.is_completed()))
    }

    pub fn add_tab(&mut self, name: &str) -> Result<String> {
        let name = validate_tab_name(name)?;
        if self.tabs.contains_key(&name) {
            return Err(FlowError::TabExists(name));
        }
        self.tabs.insert(name.clone(), Vec::new());
        info!(tab = %name, "tab created");
        Ok(name)
    }

    /// Return the tab's task list, creating an empty tab if absent.
    pub fn ensure_tab(&mut self, name: &str) -> Result<&mut Vec<Task>> {
        let name = validate_tab_name(name)?;
        Ok(self.tabs.entry(name).or_default())
    }

    /// Rename `old` to `new`, keeping its position. If `new` already exists,
    /// `old`'s tasks are appended to it and `old` is removed.
    pub fn rename_tab(&mut self, old: &str, new: &str) -> Result<()> {
        if self.is_protected(old) {
            return Err(FlowError::ProtectedTab(old.to_string()));
        }
        let new = validate_tab_name(new)?;
        let Some(index) = self.tabs.get_index_of(old) else {
            return Err(FlowError::TabNotFound(old.to_string()));
        };
        if old == new {
            return Ok(());
        }

        let tasks = self.tabs.shift_remove_index(index).map(|(_, t)| t).unwrap_or_default();
        match self.tabs.get_mut(&new) {
            Some(existing) => {
                info!(from = old, into = %new, moved = tasks.len(), "tab merged");
                existing.extend(tasks);
            }
            None => {
                info!(from = old, to = %new, "tab renamed");
                self.tabs.shift_insert(index, new, tasks);
            }
        }
        Ok(())
    }

    /// Remove a tab and hand back its tasks.
    pub fn delete_tab(&mut self, name: &str) -> Result<Vec<Task>> {
        if self.is_protected(name) {
            return Err(FlowError::ProtectedTab(name.to_string()));
        }
        let tasks = self
            .tabs
            .shift_remove(name)
            .ok_or_else(|| FlowError::TabNotFound(name.to_string()))?;
        info!(tab = name, tasks = tasks.len(), "tab deleted");
        Ok(tasks)
    }

    /// Append a task, creating the tab if needed. Returns its position.
    pub fn add_task(&mut self, tab: &str, task: Task) -> Result<usize> {
        let tasks = self.ensure_tab(tab)?;
        tasks.push(task);
        Ok(tasks.len())
    }

    pub fn update_task<F>(&mut self, tab: &str, position: usize, edit: F) -> Result<&Task>
    where
        F: FnOnce(&mut Task),
    {
        let task = self.task_mut(tab, position)?;
        edit(&mut *task);
        Ok(&*task)
    }

    pub fn set_completed(&mut self, tab: &str, position: usize, completed: bool) -> Result<&Task> {
        self.update_task(tab, position, |t| t.set_completed(completed))
    }

    pub fn remove_task(&mut self, tab: &str, position: usize) -> Result<Task> {
        let missing = self.missing_task(tab, position);
        let tasks = self
            .tabs
            .get_mut(tab)
            .ok_or_else(|| FlowError::TabNotFound(tab.to_string()))?;
        match position.checked_sub(1) {
            Some(i) if i < tasks.len() => Ok(tasks.remove(i)),
            _ => Err(missing),
        }
    }

    /// Append the well-formed rows of a legacy flat file to `tab`.
    pub fn import_legacy(&mut self, path: &Path, tab: &str) -> Result<usize> {
        let imported = files::read_legacy(path)?;
        let count = imported.len();
        self.ensure_tab(tab)?.extend(imported);
        info!(tab, count, path = %path.display(), "imported legacy tasks");
        Ok(count)
    }

    /// Write the full current state. On failure the in-memory state is left
    /// untouched.
    pub fn save(&self) -> Result<()> {
        self.storage.save_all(&self.tabs)
    }

    fn task_mut(&mut self, tab: &str, position: usize) -> Result<&mut Task> {
        let missing = self.missing_task(tab, position);
        let tasks = self
            .tabs
            .get_mut(tab)
            .ok_or_else(|| FlowError::TabNotFound(tab.to_string()))?;
        position
            .checked_sub(1)
            .and_then(|i| tasks.get_mut(i))
            .ok_or(missing)
    }

    fn missing_task(&self, tab: &str, position: usize) -> FlowError {
        if self.tabs.contains_key(tab) {
            FlowError::TaskNotFound(tab.to_string(), position)
        } else {
            FlowError::TabNotFound(tab.to_string())
        }
    }
}
