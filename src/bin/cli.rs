use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use todolist::application::commands::{self, Command};
use todolist::application::todo_service::ToDoEngineImpl;
use todolist::config::{DEFAULT_STORE_PATH, STORE_PATH_VAR};
use todolist::infrastructure::file_store::FileListStore;

/// Manage the todo list file.
///
/// With no arguments, prints every item. `-a Name Description` adds an item,
/// `-u Id Description` replaces an item's description, `-d Id` deletes it.
#[derive(Parser)]
#[command(name = "todolist", disable_help_flag = true)]
struct Cli {
    /// Path to the list file
    #[arg(long, env = STORE_PATH_VAR, default_value = DEFAULT_STORE_PATH)]
    file: PathBuf,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = ToDoEngineImpl::new(FileListStore::new(cli.file));
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = commands::execute(&engine, Command::parse(&cli.args), &mut stdout).await {
        tracing::error!(error = %e, "command failed");
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        let cli = Cli::try_parse_from(std::iter::once("todolist").chain(args.iter().copied())).unwrap();
        Command::parse(&cli.args)
    }

    #[test]
    fn flags_reach_the_dispatcher() {
        assert_eq!(parse(&["-a", "Buy milk", "2%"]), Command::Add { name: "Buy milk".into(), description: "2%".into() });
        assert_eq!(parse(&["-d", "3"]), Command::Delete { id: "3".into() });
        assert_eq!(parse(&[]), Command::List);
    }

    #[test]
    fn help_flags_are_not_valid_flags() {
        assert_eq!(parse(&["-h"]), Command::InvalidFlag);
        assert_eq!(parse(&["--help"]), Command::InvalidFlag);
    }
}
