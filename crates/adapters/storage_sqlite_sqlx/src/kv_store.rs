//! `SQLite` implementation of [`KeyValueStore`].

use std::future::Future;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqliteConnectOptions;

use viewr_app::ports::KeyValueStore;
use viewr_domain::error::ViewrError;
use viewr_domain::namespace::Namespace;

use crate::error::StorageError;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const SELECT_VALUE: &str = "SELECT value FROM kv_entries WHERE namespace = ? AND key = ?";
const SELECT_KEYS: &str = "SELECT key FROM kv_entries WHERE namespace = ? ORDER BY key";
const UPSERT: &str = "INSERT INTO kv_entries (namespace, key, value) VALUES (?, ?, ?) \
     ON CONFLICT (namespace, key) DO UPDATE SET value = excluded.value";

/// `SQLite`-backed key-value store. Lists keys in byte order.
#[derive(Clone)]
pub struct SqliteKvStore {
    pool: SqlitePool,
}

impl SqliteKvStore {
    /// Open the database at `database_url`, creating the file if needed, and
    /// bring the `kv_entries` schema up to date.
    ///
    /// `sqlite::memory:` gives a private database shared by the pool's
    /// connections and dropped with the last of them.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] if the URL is invalid or the
    /// database cannot be opened, and [`StorageError::Migration`] if the
    /// schema cannot be applied.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;
        MIGRATOR.run(&pool).await?;
        Ok(Self::new(pool))
    }

    /// Wrap a pool whose schema is already migrated.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl KeyValueStore for SqliteKvStore {
    fn get(
        &self,
        namespace: Namespace,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, ViewrError>> + Send {
        let pool = self.pool.clone();
        async move {
            let value: Option<String> = sqlx::query_scalar(SELECT_VALUE)
                .bind(namespace.binding())
                .bind(key)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(value)
        }
    }

    fn list(
        &self,
        namespace: Namespace,
    ) -> impl Future<Output = Result<Vec<String>, ViewrError>> + Send {
        let pool = self.pool.clone();
        async move {
            let keys: Vec<String> = sqlx::query_scalar(SELECT_KEYS)
                .bind(namespace.binding())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(keys)
        }
    }

    fn put(
        &self,
        namespace: Namespace,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), ViewrError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPSERT)
                .bind(namespace.binding())
                .bind(key)
                .bind(value)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
