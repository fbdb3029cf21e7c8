// lib/src/lib.rs
// Store layer and handler operations for the hospital assistant. All state
// lives in process memory and is lost on restart.

pub mod database;
pub mod errors;
pub mod storage_engine;
pub mod summary;

pub use crate::database::ClinicDatabase;
pub use crate::errors::{ClinicError, Result};
pub use crate::storage_engine::{InMemoryStorage, StorageWriter};
