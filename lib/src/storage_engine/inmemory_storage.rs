// lib/src/storage_engine/inmemory_storage.rs

use std::collections::HashMap;

use models::Identifier;
use tokio::sync::{RwLock, RwLockWriteGuard};
use tracing::debug;

#[derive(Debug)]
struct Table<T> {
    records: Vec<T>,
    index: HashMap<Identifier, usize>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table { records: Vec::new(), index: HashMap::new() }
    }
}

/// Append-only mapping from generated identifier to record.
///
/// Records keep their insertion order for listing. Nothing is ever updated or
/// removed, so an identifier that resolved once keeps resolving.
#[derive(Debug)]
pub struct InMemoryStorage<T> {
    name: &'static str,
    table: RwLock<Table<T>>,
}

impl<T: Clone> InMemoryStorage<T> {
    pub fn new(name: &'static str) -> Self {
        InMemoryStorage { name, table: RwLock::new(Table::default()) }
    }

    /// Assigns a fresh identifier, builds the record from it and stores it.
    pub async fn insert<F>(&self, build: F) -> T
    where
        F: FnOnce(Identifier) -> T,
    {
        self.write().await.insert(build)
    }

    /// Takes the exclusive write section of this store. Callers that must
    /// check a precondition before inserting hold this across the check.
    pub async fn write(&self) -> StorageWriter<'_, T> {
        StorageWriter { name: self.name, table: self.table.write().await }
    }

    pub async fn get(&self, id: &str) -> Option<T> {
        let table = self.table.read().await;
        table.index.get(id).map(|&pos| table.records[pos].clone())
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.table.read().await.index.contains_key(id)
    }

    pub async fn list_all(&self) -> Vec<T> {
        self.table.read().await.records.clone()
    }

    /// Linear scan in insertion order.
    pub async fn list_where<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.table
            .read()
            .await
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Exclusive insert access to one store, released on drop.
pub struct StorageWriter<'a, T> {
    name: &'static str,
    table: RwLockWriteGuard<'a, Table<T>>,
}

impl<T: Clone> StorageWriter<'_, T> {
    pub fn insert<F>(&mut self, build: F) -> T
    where
        F: FnOnce(Identifier) -> T,
    {
        let mut id = Identifier::generate();
        while self.table.index.contains_key(&id) {
            id = Identifier::generate();
        }
        let record = build(id.clone());
        let position = self.table.records.len();
        self.table.records.push(record.clone());
        self.table.index.insert(id.clone(), position);
        debug!(store = self.name, %id, "inserted record");
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: Identifier,
        owner: &'static str,
        body: String,
    }

    fn note(owner: &'static str, body: &str) -> impl FnOnce(Identifier) -> Note {
        let body = body.to_string();
        move |id| Note { id, owner, body }
    }

    #[tokio::test]
    async fn insert_then_get_returns_same_record() {
        let store = InMemoryStorage::new("notes");
        let stored = store.insert(note("a", "first")).await;

        assert!(!stored.id.is_empty());
        assert_eq!(store.get(&stored.id).await, Some(stored.clone()));
        assert!(store.contains(&stored.id).await);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn absent_key_is_none() {
        let store: InMemoryStorage<Note> = InMemoryStorage::new("notes");
        assert_eq!(store.get("missing").await, None);
        assert!(!store.contains("missing").await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn listing_preserves_insertion_order() {
        let store = InMemoryStorage::new("notes");
        for (owner, body) in [("a", "1"), ("b", "2"), ("a", "3"), ("c", "4"), ("a", "5")] {
            store.insert(note(owner, body)).await;
        }

        let bodies: Vec<String> = store.list_all().await.into_iter().map(|n| n.body).collect();
        assert_eq!(bodies, vec!["1", "2", "3", "4", "5"]);

        let owned_by_a: Vec<String> = store
            .list_where(|n| n.owner == "a")
            .await
            .into_iter()
            .map(|n| n.body)
            .collect();
        assert_eq!(owned_by_a, vec!["1", "3", "5"]);
        assert!(store.list_where(|n| n.owner == "z").await.is_empty());
    }

    #[tokio::test]
    async fn concurrent_inserts_get_distinct_ids() {
        let store = Arc::new(InMemoryStorage::new("notes"));
        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.insert(note("a", &i.to_string())).await.id })
            })
            .collect();

        let mut ids = Vec::new();
        for task in futures::future::join_all(tasks).await {
            ids.push(task.unwrap());
        }
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), 64);
        assert_eq!(store.len().await, 64);
    }
}
