use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::todo::ToDoId;

/// Failures raised by the list store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file is expected to exist but does not.
    #[error("ToDo list file does not exist: {}", path.display())]
    StoreMissing { path: PathBuf },

    /// The backing file could not be opened, created, read or written.
    #[error("ToDo list file {} could not be {action}: {source}", path.display())]
    StoreUnavailable {
        path: PathBuf,
        action: &'static str,
        #[source]
        source: io::Error,
    },

    /// A record did not split into exactly three fields.
    #[error("line has incorrect format: {line}")]
    MalformedRecord { line: String },

    /// An id field was not an integer.
    #[error("id could not be converted to an integer: {value}")]
    InvalidIdentifier { value: String },

    #[error("item with id {id} could not be found")]
    IdentifierNotFound { id: ToDoId },

    /// No id is left after the largest one in the list.
    #[error("no id is available after {last}")]
    IdentifierExhausted { last: ToDoId },
}

pub type Result<T> = std::result::Result<T, StoreError>;
