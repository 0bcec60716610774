use async_trait::async_trait;

use super::error::Result;
use super::todo::{ToDoId, ToDoItem};

#[async_trait]
pub trait ToDoRepository: Send + Sync + 'static {
    async fn get_items(&self) -> Result<Vec<ToDoItem>>;
    async fn create_item(&self, name: &str, description: &str) -> Result<ToDoId>;
    async fn update_item(&self, id: ToDoId, description: &str) -> Result<()>;
    async fn delete_item(&self, id: ToDoId) -> Result<()>;
}
