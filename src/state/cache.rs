use std::fmt;
use std::future::Future;
use std::sync::Arc;

use moka::future::Cache;
use serde_json::Value;

use super::http::types::HttpError;

const MAX_ENTRIES: u64 = 1024;

/// Identifies one cached read, e.g. `["projects", "<id>"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for QueryKey {
    fn from(segments: [S; N]) -> Self {
        Self::new(segments)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Results of read requests, shared by every command in the process.
#[derive(Clone)]
pub struct QueryCache {
    inner: Cache<QueryKey, Arc<Value>>,
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCache")
            .field("entries", &self.inner.entry_count())
            .finish()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            inner: Cache::builder().max_capacity(MAX_ENTRIES).build(),
        }
    }

    /// Returns the cached value for `key` or runs `fetcher` to fill it.
    /// Concurrent calls for one key await a single `fetcher`; errors are not cached.
    pub async fn fetch<F>(&self, key: QueryKey, fetcher: F) -> Result<Arc<Value>, HttpError>
    where
        F: Future<Output = Result<Value, HttpError>> + Send,
    {
        log::debug!("query {key}");

        self.inner
            .try_get_with(key, async move { fetcher.await.map(Arc::new) })
            .await
            .map_err(|error| (*error).clone())
    }

    pub async fn get(&self, key: &QueryKey) -> Option<Arc<Value>> {
        self.inner.get(key).await
    }

    /// Drops every entry whose key starts with `prefix`.
    pub async fn invalidate(&self, prefix: &QueryKey) {
        let stale = self
            .inner
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key)
            .collect::<Vec<_>>();

        for key in stale {
            log::debug!("invalidate {key}");

            self.inner.invalidate(key.as_ref()).await;
        }
    }

    pub fn clear(&self) {
        log::debug!("clearing query cache");

        self.inner.invalidate_all();
    }
}
