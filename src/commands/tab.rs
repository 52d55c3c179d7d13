use serde_json::json;

use crate::config::Config;
use crate::error::{FlowError, Result};
use crate::model::Task;
use crate::output::{self, Format};

pub fn list(config: &Config, format: Format) -> Result<()> {
    let store = config.open_store()?;
    output::print_tab_names(
        store
            .tabs()
            .iter()
            .map(|(name, tasks)| (name.as_str(), tasks.len(), store.is_protected(name))),
        format,
    )
}

// An empty tab writes no lines, so renaming or deleting one would leave the
// file unchanged.
fn require_tasks(tasks: &[Task], name: &str) -> Result<()> {
    if tasks.is_empty() {
        return Err(FlowError::EmptyTab(name.to_string()));
    }
    Ok(())
}

pub fn rename(config: &Config, old: &str, new: &str, format: Format) -> Result<()> {
    let mut store = config.open_store()?;
    if !store.is_protected(old) {
        require_tasks(store.tasks(old)?, old)?;
    }
    store.rename_tab(old, new)?;
    store.save()?;
    let new = new.trim();
    let restored = old != new && store.is_default(old);
    let message = if restored {
        format!("Tab renamed to: {new} (default tab {old} stays, empty)")
    } else {
        format!("Tab renamed to: {new}")
    };
    output::print_done(
        json!({"renamed": old, "to": new, "default_restored": restored}),
        &message,
        format,
    )
}

pub fn delete(config: &Config, name: &str, format: Format) -> Result<()> {
    let mut store = config.open_store()?;
    if !store.is_protected(name) {
        require_tasks(store.tasks(name)?, name)?;
    }
    let removed = store.delete_tab(name)?;
    store.save()?;
    let restored = store.is_default(name);
    let message = if restored {
        format!("Tab deleted (default tab {name} stays, empty)")
    } else {
        "Tab deleted".to_string()
    };
    output::print_done(
        json!({"deleted": name, "tasks": removed.len(), "default_restored": restored}),
        &message,
        format,
    )
}
