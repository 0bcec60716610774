use crate::domain::error::Result;
use crate::domain::repository::ToDoRepository;
use crate::domain::todo::{ToDoId, ToDoItem};
use async_trait::async_trait;
use tracing::info;

/// Capability set shared by the CLI and HTTP front ends.
#[async_trait]
pub trait ToDoEngine: Send + Sync + 'static {
    async fn get_items(&self) -> Result<Vec<ToDoItem>>;
    async fn create_item(&self, name: &str, description: &str) -> Result<ToDoId>;
    async fn update_item(&self, id: ToDoId, description: &str) -> Result<()>;
    async fn delete_item(&self, id: ToDoId) -> Result<()>;
}

#[derive(Clone)]
pub struct ToDoEngineImpl<R: ToDoRepository> {
    repo: R,
}

impl<R: ToDoRepository> ToDoEngineImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: ToDoRepository> ToDoEngine for ToDoEngineImpl<R> {
    async fn get_items(&self) -> Result<Vec<ToDoItem>> { self.repo.get_items().await }

    async fn create_item(&self, name: &str, description: &str) -> Result<ToDoId> {
        let id = self.repo.create_item(name, description).await?;
        info!(%id, item_name = name, "created item");
        Ok(id)
    }

    async fn update_item(&self, id: ToDoId, description: &str) -> Result<()> {
        self.repo.update_item(id, description).await?;
        info!(%id, "updated item");
        Ok(())
    }

    async fn delete_item(&self, id: ToDoId) -> Result<()> {
        self.repo.delete_item(id).await?;
        info!(%id, "deleted item");
        Ok(())
    }
}
