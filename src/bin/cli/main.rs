mod app;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "miaaula-cli", about = "Miaaula attempt history CLI", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Attempt history for a lesson, newest first
    History {
        /// Lesson id
        lesson_id: String,
    },

    /// Show one attempt report with its wrong items
    Show {
        /// Report id
        report_id: String,
    },

    /// Write a report to disk as a JSON download
    Export {
        /// Report id
        report_id: String,
        /// Destination directory (default: current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List questions flagged as structurally broken
    Audit,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app = app::App::new(cli.data_dir)?;

    match cli.command {
        Command::History { lesson_id } => {
            commands::history::run(&app, &lesson_id, &cli.format)?;
        }
        Command::Show { report_id } => {
            commands::show::run(&app, &report_id, &cli.format)?;
        }
        Command::Export { report_id, out } => {
            commands::export::run(&app, &report_id, out)?;
        }
        Command::Audit => {
            commands::audit::run(&app, &cli.format)?;
        }
    }

    Ok(())
}
