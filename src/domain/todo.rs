use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{Result, StoreError};

/// Separator between the fields of a persisted record. Not escaped.
pub const FIELD_DELIMITER: char = ',';

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ToDoId(pub i64);

impl ToDoId {
    pub const FIRST: ToDoId = ToDoId(1);

    /// The id after this one, or `None` once the integer range is used up.
    pub fn next(self) -> Option<Self> { self.0.checked_add(1).map(Self) }
}

impl fmt::Display for ToDoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

impl FromStr for ToDoId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<i64>()
            .map(ToDoId)
            .map_err(|_| StoreError::InvalidIdentifier { value: s.to_string() })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToDoItem {
    pub id: ToDoId,
    pub name: String,
    pub description: String,
}

impl ToDoItem {
    /// Encodes the item as one line of the list file, newline included.
    pub fn to_record(&self) -> String {
        format!("{}{d}{}{d}{}\n", self.id, self.name, self.description, d = FIELD_DELIMITER)
    }

    /// Decodes one line of the list file.
    pub fn parse_record(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.trim().split(FIELD_DELIMITER).collect();
        let [id, name, description] = fields.as_slice() else {
            return Err(StoreError::MalformedRecord { line: line.to_string() });
        };
        Ok(Self { id: id.parse()?, name: name.to_string(), description: description.to_string() })
    }
}

/// Position of the item carrying `id`.
pub fn find_index_by_id(items: &[ToDoItem], id: ToDoId) -> Result<usize> {
    items
        .iter()
        .position(|item| item.id == id)
        .ok_or(StoreError::IdentifierNotFound { id })
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateItem {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateItem {
    pub id: ToDoId,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeleteItem {
    pub id: ToDoId,
}
