// lib/src/storage_engine/mod.rs

pub mod inmemory_storage;

pub use inmemory_storage::{InMemoryStorage, StorageWriter};
