pub mod codec;
pub mod files;
pub mod tabs;

use indexmap::IndexMap;

use crate::error::Result;
use crate::model::Task;

/// Tab name to ordered task list. Iteration follows insertion order.
pub type TabMap = IndexMap<String, Vec<Task>>;

/// Tabs seeded when there is nothing persisted yet, in display order.
pub const DEFAULT_TABS: [&str; 3] = ["Personal", "Work", "General"];

/// Tab that cannot be renamed or deleted.
pub const PROTECTED_TAB: &str = "General";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Data was read from storage.
    Loaded,
    /// Nothing persisted yet (first run).
    Missing,
    /// Storage exists but could not be read; defaults were used.
    Unreadable(String),
}

#[derive(Debug)]
pub struct Loaded {
    pub tabs: TabMap,
    pub status: LoadStatus,
}

/// Backend that can read and write the whole tab map at once.
pub trait Storage {
    fn load_all(&self) -> Result<Loaded>;
    fn save_all(&self, tabs: &TabMap) -> Result<()>;
}

pub fn default_tabs<S: AsRef<str>>(names: &[S]) -> TabMap {
    names
        .iter()
        .map(|name| (name.as_ref().to_string(), Vec::new()))
        .collect()
}
