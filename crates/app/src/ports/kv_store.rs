//! Key-value store port — the only IO boundary of the application.

use std::future::Future;

use viewr_domain::error::ViewrError;
use viewr_domain::namespace::Namespace;

/// A flat, string-keyed store partitioned into [`Namespace`]s.
///
/// Implementations decide list ordering; callers pass it through untouched.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if there is none.
    fn get(
        &self,
        namespace: Namespace,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, ViewrError>> + Send;

    /// Enumerate every key in `namespace`.
    fn list(
        &self,
        namespace: Namespace,
    ) -> impl Future<Output = Result<Vec<String>, ViewrError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn put(
        &self,
        namespace: Namespace,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), ViewrError>> + Send;
}
