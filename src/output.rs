use chrono::NaiveDate;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use crate::error::Result;
use crate::model::{DueStatus, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Pretty,
    Minimal,
}

/// A task together with where it lives, as emitted in JSON output.
#[derive(Serialize)]
pub struct Entry<'a> {
    pub tab: &'a str,
    pub position: usize,
    #[serde(flatten)]
    pub task: &'a Task,
}

#[derive(Serialize)]
struct TabView<'a> {
    name: &'a str,
    tasks: Vec<Entry<'a>>,
}

fn entries<'a>(tab: &'a str, tasks: &'a [Task]) -> Vec<Entry<'a>> {
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| Entry {
            tab,
            position: i + 1,
            task,
        })
        .collect()
}

pub fn truncate_title(title: &str, max_len: usize) -> String {
    if title.chars().count() > max_len {
        let truncated: String = title.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        title.to_string()
    }
}

/// Due-date label in the list style: "Mar 9 [OVERDUE]", "Today [NOW]", "Dec 25".
pub fn due_label(task: &Task, today: NaiveDate) -> String {
    match task.due_status(today) {
        DueStatus::None | DueStatus::Unparseable => String::new(),
        DueStatus::Overdue(date) => format!("{} [OVERDUE]", date.format("%b %-d")),
        DueStatus::Today => "Today [NOW]".to_string(),
        DueStatus::Upcoming(date) => date.format("%b %-d").to_string(),
    }
}

fn colored_marker(task: &Task) -> String {
    let marker = task.priority().marker();
    match marker {
        "[H]" => marker.red().to_string(),
        "[M]" => marker.yellow().to_string(),
        _ => marker.green().to_string(),
    }
}

fn pretty_line(position: usize, task: &Task, today: NaiveDate) -> String {
    let label = due_label(task, today);
    let label = match task.due_status(today) {
        DueStatus::Overdue(_) => label.red().to_string(),
        DueStatus::Today => label.yellow().bold().to_string(),
        _ => label.dimmed().to_string(),
    };
    let title = if task.is_completed() {
        task.title().strikethrough().dimmed().to_string()
    } else {
        task.title().to_string()
    };
    format!("{:>3}. {} {}  {}", position, colored_marker(task), title, label)
        .trim_end()
        .to_string()
}

fn minimal_line(tab: &str, position: usize, task: &Task) -> String {
    format!(
        "{:12} {:>3} {:1} {:6} {}",
        truncate_title(tab, 12),
        position,
        if task.is_completed() { "x" } else { "-" },
        task.priority(),
        task.title()
    )
}

pub fn print_task(tab: &str, position: usize, task: &Task, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let entry = Entry {
                tab,
                position,
                task,
            };
            println!("{}", serde_json::to_string(&entry)?);
        }
        Format::Pretty => {
            println!("[{} #{}] {}", tab.cyan(), position, task.title().bold());
            if !task.description().is_empty() {
                println!("  {}", task.description());
            }
            println!(
                "  priority: {} | due: {} | completed: {}",
                task.priority(),
                task.due_date().unwrap_or("No date"),
                task.is_completed()
            );
            if let Some(project) = task.project() {
                println!("  project: {}", project);
            }
        }
        Format::Minimal => println!("{}", minimal_line(tab, position, task)),
    }
    Ok(())
}

/// Print tabs and their tasks. Pretty output lists incomplete tasks first and
/// completed tasks under a separate heading, keeping original positions.
pub fn print_tabs<'a, I>(tabs: I, format: Format, today: NaiveDate) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a [Task])>,
{
    match format {
        Format::Json => {
            let views: Vec<TabView> = tabs
                .into_iter()
                .map(|(name, tasks)| TabView {
                    name,
                    tasks: entries(name, tasks),
                })
                .collect();
            println!("{}", serde_json::to_string(&views)?);
        }
        Format::Pretty => {
            for (name, tasks) in tabs {
                println!("{} ({})", name.bold(), tasks.len());
                if tasks.is_empty() {
                    println!("  {}", "(empty) No tasks yet.".dimmed());
                }
                let (done, open): (Vec<_>, Vec<_>) = tasks
                    .iter()
                    .enumerate()
                    .partition(|(_, t)| t.is_completed());
                for (i, task) in open {
                    println!("{}", pretty_line(i + 1, task, today));
                }
                if !done.is_empty() {
                    println!("  {}", "> Completed".dimmed());
                    for (i, task) in done {
                        println!("{}", pretty_line(i + 1, task, today));
                    }
                }
                println!();
            }
        }
        Format::Minimal => {
            println!("{:12} {:>3} {:1} {:6} TITLE", "TAB", "#", "", "PRIO");
            println!("{}", "-".repeat(50));
            for (name, tasks) in tabs {
                for (i, task) in tasks.iter().enumerate() {
                    println!("{}", minimal_line(name, i + 1, task));
                }
            }
        }
    }
    Ok(())
}

pub fn print_tab_names<'a, I>(tabs: I, format: Format) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, usize, bool)>,
{
    #[derive(Serialize)]
    struct TabSummary<'a> {
        name: &'a str,
        tasks: usize,
        protected: bool,
    }

    let tabs: Vec<TabSummary> = tabs
        .into_iter()
        .map(|(name, tasks, protected)| TabSummary {
            name,
            tasks,
            protected,
        })
        .collect();
    match format {
        Format::Json => println!("{}", serde_json::to_string(&tabs)?),
        Format::Pretty => {
            for tab in &tabs {
                let lock = if tab.protected { " (protected)" } else { "" };
                println!("{} {}{}", tab.name.bold(), tab.tasks, lock.dimmed());
            }
        }
        Format::Minimal => {
            for tab in &tabs {
                println!("{}\t{}", tab.name, tab.tasks);
            }
        }
    }
    Ok(())
}

/// Acknowledge a change that has no task to show.
pub fn print_done(value: serde_json::Value, message: &str, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(&value)?),
        Format::Pretty => println!("{}", message.green()),
        Format::Minimal => println!("ok"),
    }
    Ok(())
}
