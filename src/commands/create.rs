use crate::config::Config;
use crate::error::Result;
use crate::model::Task;
use crate::output::{self, Format};

pub fn run(
    config: &Config,
    tab: &str,
    title: &str,
    description: Option<String>,
    due: Option<String>,
    priority: &str,
    format: Format,
) -> Result<()> {
    let mut store = config.open_store()?;
    let description = description.unwrap_or_default();
    let task = Task::new(title, &description, due.as_deref(), priority);
    let position = store.add_task(tab, task)?;
    store.save()?;
    output::print_task(tab.trim(), position, store.task(tab.trim(), position)?, format)
}
