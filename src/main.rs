//! Lineage CLI - inspect and feed a change-lineage store from the shell

use clap::{Parser, Subcommand, ValueEnum};
use lineage::config::{self, LineageConfig};
use lineage::ui::{self, Icons};
use lineage::{ChangeType, NewChange};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "lineage")]
#[command(version)]
#[command(about = "Change-lineage recorder - ties code edits to the task that caused them")]
#[command(long_about = r#"
Lineage looks for a .spectrena/lineage.db (or .spectrena/lineage/) in the
current directory or any parent, and records which task caused each edit.

A missing store is never an error: commands report it and exit cleanly.

Example usage:
  lineage locate
  lineage active --format json
  lineage record --task CORE-001-T01 --file src/auth.py --change-type modify --tool replace_symbol_body
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true, default_value = "lineage.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which lineage store would be used
    Locate {
        /// Start the search here instead of the current directory
        #[arg(long)]
        from: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the currently active task
    Active {
        /// Start the search here instead of the current directory
        #[arg(long)]
        from: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Record a change against a task
    Record {
        /// Task ID, e.g. CORE-001-T01
        #[arg(short, long)]
        task: String,

        /// Path of the changed file
        #[arg(long)]
        file: String,

        /// Kind of change (modify, create, delete, rename)
        #[arg(long, default_value = "modify")]
        change_type: String,

        /// Name of the tool that made the change
        #[arg(long)]
        tool: String,

        /// Fully qualified symbol, e.g. src/auth.py:User.authenticate
        #[arg(short, long)]
        symbol: Option<String>,

        /// File holding the content before the change
        #[arg(long)]
        old_file: Option<PathBuf>,

        /// File holding the content after the change
        #[arg(long)]
        new_file: Option<PathBuf>,

        /// Start the search here instead of the current directory
        #[arg(long)]
        from: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn read_content(path: Option<&Path>) -> anyhow::Result<Option<String>> {
    path.map(|p| {
        std::fs::read_to_string(p)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", p.display(), e))
    })
    .transpose()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = config::load_config(Some(cli.config.as_path()))?.unwrap_or_else(LineageConfig::default);

    match cli.command {
        Commands::Locate { from, format } => {
            let handle = config.recorder(from.as_deref()).find_store();

            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&handle)?);
            } else {
                match handle {
                    Some(handle) => {
                        ui::section(Icons::DATABASE, "Lineage store");
                        ui::summary_row("Kind:", handle.kind.as_str());
                        ui::summary_row("Path:", &handle.location.display().to_string());
                    }
                    None => ui::warn("No lineage store found"),
                }
            }
        }

        Commands::Active { from, format } => {
            let task = config.recorder(from.as_deref()).active_task();

            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&task)?);
            } else {
                match task {
                    Some(task) => {
                        ui::section(Icons::PIN, &task.task_id);
                        ui::summary_row("Title:", task.title.as_deref().unwrap_or("-"));
                        ui::summary_row("Plan:", task.plan_id.as_deref().unwrap_or("-"));
                        ui::summary_row("Spec:", task.spec_id.as_deref().unwrap_or("-"));
                    }
                    None => ui::warn("No active task"),
                }
            }
        }

        Commands::Record {
            task,
            file,
            change_type,
            tool,
            symbol,
            old_file,
            new_file,
            from,
            format,
        } => {
            let change_type = ChangeType::from_str(&change_type)?;
            let mut change = NewChange::new(task, file, change_type, tool);
            change.symbol_fqn = symbol;
            change.old_content = read_content(old_file.as_deref())?;
            change.new_content = read_content(new_file.as_deref())?;

            let id = config.recorder(from.as_deref()).record(change);

            if format == OutputFormat::Json {
                println!("{}", serde_json::json!({ "id": id }));
            } else {
                match id {
                    Some(id) => ui::success(&format!("Recorded change #{}", id)),
                    None => ui::warn("Change not recorded (lineage unavailable)"),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_is_validated() {
        let cli = Cli::try_parse_from(["lineage", "locate", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Locate { format: OutputFormat::Json, .. }));

        let cli = Cli::try_parse_from(["lineage", "active"]).unwrap();
        assert!(matches!(cli.command, Commands::Active { format: OutputFormat::Text, .. }));

        assert!(Cli::try_parse_from(["lineage", "locate", "--format", "yaml"]).is_err());
    }
}
