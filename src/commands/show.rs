use crate::config::Config;
use crate::error::Result;
use crate::output::{self, Format};

pub fn run(config: &Config, tab: &str, position: usize, format: Format) -> Result<()> {
    let store = config.open_store()?;
    output::print_task(tab, position, store.task(tab, position)?, format)
}
