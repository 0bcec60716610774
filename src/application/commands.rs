//! Command-line dispatch over a [`ToDoEngine`].
//!
//! Argument-count mistakes print a usage line and are not errors; store
//! failures are returned to the caller, which treats them as fatal.

use std::io::{self, Write};

use thiserror::Error;

use super::todo_service::ToDoEngine;
use crate::domain::error::StoreError;
use crate::domain::todo::ToDoId;

pub const ADD_USAGE: &str = "Incorrect number of arguments. The format to add an item is: -a Name Description";
pub const UPDATE_USAGE: &str = "Incorrect number of arguments. The format to update an item is: -u Id Description";
pub const DELETE_USAGE: &str = "Incorrect number of arguments. The format to delete an item is: -d Id";
pub const INVALID_FLAG: [&str; 4] = [
    "The flag entered is not valid.",
    "To add an item: -a Name Description",
    "To update an item: -u Id Description",
    "To delete an item: -d Id",
];

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("could not write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add { name: String, description: String },
    Update { id: String, description: String },
    Delete { id: String },
    Usage(&'static str),
    InvalidFlag,
}

impl Command {
    pub fn parse(args: &[String]) -> Self {
        let Some((flag, rest)) = args.split_first() else { return Command::List };
        match (flag.to_lowercase().as_str(), rest) {
            ("-a", [name, description]) => Command::Add { name: name.clone(), description: description.clone() },
            ("-a", _) => Command::Usage(ADD_USAGE),
            ("-u", [id, description]) => Command::Update { id: id.clone(), description: description.clone() },
            ("-u", _) => Command::Usage(UPDATE_USAGE),
            ("-d", [id]) => Command::Delete { id: id.clone() },
            ("-d", _) => Command::Usage(DELETE_USAGE),
            _ => Command::InvalidFlag,
        }
    }
}

pub async fn execute<E: ToDoEngine, W: Write>(engine: &E, command: Command, out: &mut W) -> Result<(), CommandError> {
    match command {
        Command::List => {
            for item in engine.get_items().await? {
                writeln!(out, "Id:{}, ToDo:{}, Description:{}", item.id, item.name, item.description)?;
            }
        }
        Command::Add { name, description } => {
            engine.create_item(&name, &description).await?;
        }
        Command::Update { id, description } => {
            let id: ToDoId = id.parse()?;
            engine.update_item(id, &description).await?;
        }
        Command::Delete { id } => {
            let id: ToDoId = id.parse()?;
            engine.delete_item(id).await?;
        }
        Command::Usage(usage) => writeln!(out, "{usage}")?,
        Command::InvalidFlag => {
            for line in INVALID_FLAG {
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}
