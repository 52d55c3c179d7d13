use crate::config::Config;
use crate::error::Result;
use crate::output::{self, Format};

#[allow(clippy::too_many_arguments)]
pub fn run(
    config: &Config,
    tab: &str,
    position: usize,
    title: Option<String>,
    description: Option<String>,
    due: Option<String>,
    clear_due: bool,
    priority: Option<String>,
    format: Format,
) -> Result<()> {
    let mut store = config.open_store()?;
    store.update_task(tab, position, |task| {
        if let Some(t) = title {
            task.set_title(&t);
        }
        if let Some(d) = description {
            task.set_description(&d);
        }
        if clear_due {
            task.set_due_date(None);
        } else if let Some(d) = due {
            task.set_due_date(Some(&d));
        }
        if let Some(p) = priority {
            task.set_priority(&p);
        }
    })?;
    store.save()?;
    output::print_task(tab, position, store.task(tab, position)?, format)
}
