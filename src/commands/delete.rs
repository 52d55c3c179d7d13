use crate::config::Config;
use crate::error::Result;
use crate::output::{self, Format};

pub fn run(config: &Config, tab: &str, position: usize, format: Format) -> Result<()> {
    let mut store = config.open_store()?;
    let task = store.remove_task(tab, position)?;
    store.save()?;
    output::print_task(tab, position, &task, format)
}
