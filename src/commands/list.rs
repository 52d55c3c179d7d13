use chrono::Local;

use crate::config::Config;
use crate::error::Result;
use crate::output::{self, Format};

pub fn run(config: &Config, tab: Option<String>, format: Format) -> Result<()> {
    let store = config.open_store()?;
    let today = Local::now().date_naive();

    match tab {
        Some(name) => {
            let tasks = store.tasks(&name)?;
            output::print_tabs([(name.as_str(), tasks)], format, today)
        }
        None => output::print_tabs(
            store
                .tabs()
                .iter()
                .map(|(name, tasks)| (name.as_str(), tasks.as_slice())),
            format,
            today,
        ),
    }
}
