use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Key the dataset snapshot lives under. There is exactly one entry; both
/// the request path and the scheduled refresh overwrite it whole
/// (last-write-wins, the value is an idempotent snapshot).
pub const CACHE_KEY: &str = "stats";

/// Injected key-value store for the proxy. The server runs fine without one
/// (`Option<Arc<dyn CacheStore>>` is `None`), degrading to a live fetch on
/// every request.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn put(&self, key: &str, value: String, ttl: Option<Duration>);
}

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

/// In-process store with per-entry expiration, checked lazily on read.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().await;
        let expired = entries
            .get(key)
            .is_some_and(|entry| entry.expires_at.is_some_and(|at| at <= Instant::now()));
        if expired {
            entries.remove(key);
            return None;
        }
        entries.get(key).map(|entry| entry.value.clone())
    }

    async fn put(&self, key: &str, value: String, ttl: Option<Duration>) {
        let entry = Entry {
            value,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        self.entries.lock().await.insert(key.to_string(), entry);
    }
}
