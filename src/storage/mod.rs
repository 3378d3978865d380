//! Durable key-value storage abstraction
//!
//! The workflow keeps its progress in a string-keyed store that survives
//! restarts, the same way a browser keeps values in local storage. This module
//! defines the port and ships two adapters:
//!
//! * [`MemoryStore`] keeps values in process memory (tests, ephemeral sessions)
//! * [`FileStore`] keeps a JSON object of key/value pairs on disk
//!
//! # Testing with Mocks
//!
//! ```rust,ignore
//! use crate::storage::{MockKeyValueStore, StorageError};
//! use mockall::predicate::eq;
//!
//! let mut store = MockKeyValueStore::new();
//! store
//!     .expect_get()
//!     .with(eq("workflowSteps"))
//!     .returning(|_| Ok(None));
//! store
//!     .expect_set()
//!     .returning(|_, _| Err(StorageError::Unavailable { reason: "quota exceeded".into() }));
//! ```

pub mod file;
pub mod memory;

use thiserror::Error;

#[cfg(any(test, feature = "testing"))]
use mockall::automock;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a durable store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store contents are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Synchronous string-keyed storage
#[cfg_attr(any(test, feature = "testing"), automock)]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
