use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::model::Task;
use crate::store::codec;
use crate::store::{DEFAULT_TABS, LoadStatus, Loaded, Storage, TabMap, default_tabs};

/// Flat-file storage: the whole mapping lives in one text file, rewritten in
/// full on every save.
pub struct FileStorage {
    path: PathBuf,
    defaults: Vec<String>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            defaults: DEFAULT_TABS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Override the tabs returned when there is no file to load.
    pub fn with_default_tabs(mut self, defaults: Vec<String>) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse canonical lines into a tab map. Malformed lines and lines without a
/// tab prefix are dropped.
pub fn parse_tabs(contents: &str) -> TabMap {
    let mut tabs = TabMap::new();
    for (lineno, line) in contents.lines().enumerate() {
        match codec::decode_line(line) {
            Some((tab, task)) => tabs.entry(tab).or_default().push(task),
            None => debug!(line = lineno + 1, "skipping malformed task line"),
        }
    }
    tabs
}

pub fn render_tabs(tabs: &TabMap) -> String {
    let mut out = String::new();
    for (tab, tasks) in tabs {
        for task in tasks {
            if !codec::is_lossless(tab, task) {
                warn!(
                    tab = %tab,
                    title = task.title(),
                    "task contains a separator or line break and will not reload intact"
                );
            }
            out.push_str(&codec::encode_line(tab, task));
            out.push('\n');
        }
    }
    out
}

impl Storage for FileStorage {
    fn load_all(&self) -> Result<Loaded> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                let status = if e.kind() == ErrorKind::NotFound {
                    info!(path = %self.path.display(), "no task file yet, starting with default tabs");
                    LoadStatus::Missing
                } else {
                    warn!(path = %self.path.display(), error = %e, "task file unreadable, starting with default tabs");
                    LoadStatus::Unreadable(e.to_string())
                };
                return Ok(Loaded {
                    tabs: default_tabs(&self.defaults),
                    status,
                });
            }
        };

        let tabs = parse_tabs(&contents);
        debug!(path = %self.path.display(), tabs = tabs.len(), "loaded task file");
        Ok(Loaded {
            tabs,
            status: LoadStatus::Loaded,
        })
    }

    fn save_all(&self, tabs: &TabMap) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, render_tabs(tabs))?;
        debug!(path = %self.path.display(), tabs = tabs.len(), "saved task file");
        Ok(())
    }
}

/// Read a file in the legacy flat format (bare five-field records, no tab).
/// Rows with the wrong field count are dropped.
pub fn read_legacy(path: &Path) -> Result<Vec<Task>> {
    let contents = fs::read_to_string(path)?;
    let mut tasks = Vec::new();
    for (lineno, line) in contents.lines().enumerate() {
        match codec::decode_record(line) {
            Some(task) => tasks.push(task),
            None => debug!(line = lineno + 1, "skipping malformed legacy line"),
        }
    }
    Ok(tasks)
}
