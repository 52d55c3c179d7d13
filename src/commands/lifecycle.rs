use crate::config::Config;
use crate::error::Result;
use crate::output::{self, Format};

fn set_completed(
    config: &Config,
    tab: &str,
    position: usize,
    completed: bool,
    format: Format,
) -> Result<()> {
    let mut store = config.open_store()?;
    store.set_completed(tab, position, completed)?;
    store.save()?;
    output::print_task(tab, position, store.task(tab, position)?, format)
}

pub fn finish(config: &Config, tab: &str, position: usize, format: Format) -> Result<()> {
    set_completed(config, tab, position, true, format)
}

pub fn reopen(config: &Config, tab: &str, position: usize, format: Format) -> Result<()> {
    set_completed(config, tab, position, false, format)
}
