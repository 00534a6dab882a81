//! Study Assistant MCP Server - Main Entry Point
//!
//! This is the main entry point for the study assistant server application.
//! The actual implementation is in the `study_assistant` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use study_assistant::{AppConfig, StudyAssistantHandler};
use tracing::info;

/// Log directive applied on top of `RUST_LOG`
const LOG_DIRECTIVE: &str = "study_assistant=info";

/// Study Assistant MCP Server - GPA, Pomodoro timer and reminders via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the JSON data files
    data_dir: PathBuf,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    initialize_logging()?;

    let config = AppConfig::load(args.config.as_deref())?;
    let handler = StudyAssistantHandler::new(&args.data_dir, config)?;
    let watcher = handler.spawn_reminder_watcher();

    info!("Study assistant server starting");
    let served = serve_stdio(handler).await;
    watcher.abort();
    served?;
    Ok(())
}

/// Initialize the logging system
///
/// Logs go to stderr; stdout carries the MCP stream.
fn initialize_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(LOG_DIRECTIVE.parse()?),
        )
        .init();
    Ok(())
}
