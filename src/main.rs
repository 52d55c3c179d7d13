use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flowstate::config::Config;
use flowstate::output::Format;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "flowstate",
    version,
    about = "Tabbed task manager backed by a plain text file"
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    format: Format,
    /// Shorthand for --format json
    #[arg(long, global = true, hide = true)]
    json: bool,
    /// Task file (defaults to tasks.txt or the value in flowstate.json)
    #[arg(long, global = true, env = "FLOWSTATE_FILE")]
    file: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tasks, grouped by tab
    List {
        /// Only this tab
        #[arg(long)]
        tab: Option<String>,
    },
    /// Add a task
    Add {
        /// Task title
        title: String,
        /// Tab to add to (created if missing)
        #[arg(long, default_value = "General")]
        tab: String,
        /// Task description
        #[arg(long, short)]
        description: Option<String>,
        /// Due date (MM/DD/YYYY)
        #[arg(long)]
        due: Option<String>,
        /// Priority: Low, Medium or High
        #[arg(long, default_value = "Medium")]
        priority: String,
    },
    /// Display a single task
    Show {
        /// Tab name
        tab: String,
        /// Task number within the tab (1-based)
        position: usize,
    },
    /// Edit task fields
    Edit {
        /// Tab name
        tab: String,
        /// Task number within the tab (1-based)
        position: usize,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long, short)]
        description: Option<String>,
        /// New due date (MM/DD/YYYY)
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,
        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
        /// New priority
        #[arg(long)]
        priority: Option<String>,
    },
    /// Mark a task as completed
    Done {
        tab: String,
        position: usize,
    },
    /// Mark a completed task as not completed
    Reopen {
        tab: String,
        position: usize,
    },
    /// Delete a task
    Delete {
        tab: String,
        position: usize,
    },
    /// Manage tabs
    Tab {
        #[command(subcommand)]
        action: TabAction,
    },
    /// Import a legacy flat task file (no tab prefix) into a tab
    Import {
        /// Legacy file to read
        source: PathBuf,
        /// Destination tab
        #[arg(long, default_value = "General")]
        tab: String,
        /// Parse and report without saving
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand)]
enum TabAction {
    /// List tabs with task counts
    List,
    /// Rename a tab; renaming onto an existing tab merges the two
    Rename { old: String, new: String },
    /// Delete a tab and its tasks
    Delete { name: String },
}

fn run(cli: Cli, format: Format) -> flowstate::error::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(&cwd, cli.file)?;

    match cli.command {
        Commands::List { tab } => flowstate::commands::list::run(&config, tab, format),
        Commands::Add {
            title,
            tab,
            description,
            due,
            priority,
        } => flowstate::commands::create::run(
            &config,
            &tab,
            &title,
            description,
            due,
            &priority,
            format,
        ),
        Commands::Show { tab, position } => {
            flowstate::commands::show::run(&config, &tab, position, format)
        }
        Commands::Edit {
            tab,
            position,
            title,
            description,
            due,
            clear_due,
            priority,
        } => flowstate::commands::edit::run(
            &config,
            &tab,
            position,
            title,
            description,
            due,
            clear_due,
            priority,
            format,
        ),
        Commands::Done { tab, position } => {
            flowstate::commands::lifecycle::finish(&config, &tab, position, format)
        }
        Commands::Reopen { tab, position } => {
            flowstate::commands::lifecycle::reopen(&config, &tab, position, format)
        }
        Commands::Delete { tab, position } => {
            flowstate::commands::delete::run(&config, &tab, position, format)
        }
        Commands::Tab { action } => match action {
            TabAction::List => flowstate::commands::tab::list(&config, format),
            TabAction::Rename { old, new } => {
                flowstate::commands::tab::rename(&config, &old, &new, format)
            }
            TabAction::Delete { name } => flowstate::commands::tab::delete(&config, &name, format),
        },
        Commands::Import {
            source,
            tab,
            dry_run,
        } => flowstate::commands::import::run(&config, &source, &tab, dry_run, format),
    }
}

fn init_tracing() {
    // Opt-in via RUST_LOG; logs go to stderr so stdout stays parseable.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let format = if cli.json { Format::Json } else { cli.format };
    if let Err(e) = run(cli, format) {
        match format {
            Format::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "error": e.code(),
                        "message": e.to_string()
                    })
                );
            }
            _ => eprintln!("error: {e}"),
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn json_flag_and_defaults_parse() {
        let cli = Cli::try_parse_from(["flowstate", "--json", "add", "Ship v1"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Add { tab, priority, .. } => {
                assert_eq!(tab, "General");
                assert_eq!(priority, "Medium");
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn tab_add_and_project_flags_are_not_offered() {
        assert!(Cli::try_parse_from(["flowstate", "tab", "add", "Ideas"]).is_err());
        assert!(Cli::try_parse_from(["flowstate", "add", "x", "--project", "Apollo"]).is_err());
    }

    #[test]
    fn due_conflicts_with_clear_due() {
        let parsed = Cli::try_parse_from([
            "flowstate",
            "edit",
            "Work",
            "1",
            "--due",
            "01/01/2026",
            "--clear-due",
        ]);
        assert!(parsed.is_err());
    }
}
