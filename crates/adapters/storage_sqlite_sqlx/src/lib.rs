//! # viewr-adapter-storage-sqlite-sqlx
//!
//! `SQLite` key-value adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `KeyValueStore` port defined in `viewr-app::ports`
//! - Open the `SQLite` pool and apply the embedded migrations on connect
//! - Keep every namespace in one `kv_entries` table keyed by
//!   `(namespace, key)`
//!
//! ## Dependency rule
//! Depends on `viewr-app` (for the port trait) and `viewr-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod kv_store;

pub use error::StorageError;
pub use kv_store::SqliteKvStore;
