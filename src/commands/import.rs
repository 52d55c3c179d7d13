use std::path::Path;

use serde_json::json;

use crate::config::Config;
use crate::error::Result;
use crate::output::{self, Format};

/// Pull tasks from a legacy flat file (no tab prefix) into `tab`.
pub fn run(config: &Config, source: &Path, tab: &str, dry_run: bool, format: Format) -> Result<()> {
    let mut store = config.open_store()?;
    let count = store.import_legacy(source, tab)?;
    if !dry_run {
        store.save()?;
    }
    output::print_done(
        json!({"imported": count, "tab": tab.trim(), "dry_run": dry_run}),
        &format!("Imported {count} task(s) into {}.", tab.trim()),
        format,
    )
}
