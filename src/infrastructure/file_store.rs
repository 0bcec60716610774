use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{
    error::{Result, StoreError},
    repository::ToDoRepository,
    todo::{find_index_by_id, ToDoId, ToDoItem},
};

/// List store backed by a line-per-item text file.
///
/// Every read re-parses the whole file. Appends add a single record; updates and
/// deletes rewrite the file in full, so an interrupted rewrite can leave it
/// truncated.
#[derive(Clone, Debug)]
pub struct FileListStore {
    path: PathBuf,
    writer: Arc<Mutex<()>>,
}

impl FileListStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), writer: Arc::new(Mutex::new(())) }
    }

    pub fn path(&self) -> &Path { &self.path }

    /// Creates an empty list file when none exists. Returns whether it did.
    pub fn ensure_store(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.unavailable("created", e))?;
            }
        }
        File::create(&self.path).map_err(|e| self.unavailable("created", e))?;
        debug!(path = %self.path.display(), "created list file");
        Ok(true)
    }

    /// Reads every record, sorted ascending by id.
    pub fn load_all(&self) -> Result<Vec<ToDoItem>> {
        let file = self.open_existing(OpenOptions::new().read(true))?;
        let mut items = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| self.unavailable("read", e))?;
            items.push(ToDoItem::parse_record(&line)?);
        }
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    pub fn next_id(&self, store_was_just_created: bool) -> Result<ToDoId> {
        if store_was_just_created {
            return Ok(ToDoId::FIRST);
        }
        let Some(last) = self.load_all()?.into_iter().map(|item| item.id).max() else {
            return Ok(ToDoId::FIRST);
        };
        let next = last.next().ok_or(StoreError::IdentifierExhausted { last })?;
        Ok(next.max(ToDoId::FIRST))
    }

    pub fn append_item(&self, item: &ToDoItem) -> Result<()> {
        let mut file = self.open_existing(OpenOptions::new().append(true))?;
        file.write_all(item.to_record().as_bytes())
            .map_err(|e| self.unavailable("written", e))
    }

    /// Truncates the file and writes `items` in the given order.
    pub fn rewrite_all(&self, items: &[ToDoItem]) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| self.unavailable("created", e))?;
        let mut out = BufWriter::new(file);
        for item in items {
            out.write_all(item.to_record().as_bytes())
                .map_err(|e| self.unavailable("written", e))?;
        }
        out.flush().map_err(|e| self.unavailable("written", e))?;
        debug!(path = %self.path.display(), count = items.len(), "rewrote list file");
        Ok(())
    }

    pub fn create(&self, name: &str, description: &str) -> Result<ToDoId> {
        let created = self.ensure_store()?;
        let id = self.next_id(created)?;
        self.append_item(&ToDoItem { id, name: name.to_string(), description: description.to_string() })?;
        Ok(id)
    }

    pub fn update(&self, id: ToDoId, description: &str) -> Result<()> {
        let mut items = self.load_all()?;
        let index = find_index_by_id(&items, id)?;
        items[index].description = description.to_string();
        self.rewrite_all(&items)
    }

    pub fn delete(&self, id: ToDoId) -> Result<()> {
        let mut items = self.load_all()?;
        let index = find_index_by_id(&items, id)?;
        items.remove(index);
        self.rewrite_all(&items)
    }

    fn open_existing(&self, options: &OpenOptions) -> Result<File> {
        if !self.path.exists() {
            return Err(StoreError::StoreMissing { path: self.path.clone() });
        }
        options.open(&self.path).map_err(|e| self.unavailable("opened", e))
    }

    fn unavailable(&self, action: &'static str, source: io::Error) -> StoreError {
        StoreError::StoreUnavailable { path: self.path.clone(), action, source }
    }

    /// Runs `op` on the blocking pool while holding the writer lock for the
    /// whole load-mutate-persist sequence.
    async fn locked<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&FileListStore) -> Result<T> + Send + 'static,
    {
        let guard = Arc::clone(&self.writer).lock_owned().await;
        let store = self.clone();
        tokio::task::spawn_blocking(move || {
            let _guard = guard;
            op(&store)
        })
        .await
        .map_err(|e| self.unavailable("accessed", io::Error::other(e)))?
    }
}

#[async_trait]
impl ToDoRepository for FileListStore {
    async fn get_items(&self) -> Result<Vec<ToDoItem>> {
        self.locked(|store| store.load_all()).await
    }

    async fn create_item(&self, name: &str, description: &str) -> Result<ToDoId> {
        let (name, description) = (name.to_string(), description.to_string());
        self.locked(move |store| store.create(&name, &description)).await
    }

    async fn update_item(&self, id: ToDoId, description: &str) -> Result<()> {
        let description = description.to_string();
        self.locked(move |store| store.update(id, &description)).await
    }

    async fn delete_item(&self, id: ToDoId) -> Result<()> {
        self.locked(move |store| store.delete(id)).await
    }
}
