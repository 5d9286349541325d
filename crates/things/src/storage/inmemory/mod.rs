//! In-memory storage backend.
//!
//! Stores items in nested `BTreeMap`s behind an `Arc<RwLock<_>>`. Used by the
//! tests and by the local server when no AWS account is at hand. Data is lost
//! when the repository is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use things::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
