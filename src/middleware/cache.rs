// src/middleware/cache.rs
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

/// Rendered HTML for pages whose output depends on nothing but the URL.
#[derive(Clone)]
pub struct PageCache {
    pages: Arc<Cache<String, Arc<str>>>,
}

impl PageCache {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            pages: Arc::new(
                Cache::builder()
                    .max_capacity(capacity)
                    .time_to_live(ttl)
                    .build(),
            ),
        }
    }

    /// Returns the cached page for `key`, rendering and storing it on a miss.
    pub async fn get_or_render<F>(&self, key: &str, render: F) -> Arc<str>
    where
        F: FnOnce() -> String,
    {
        if let Some(html) = self.pages.get(key).await {
            tracing::trace!(key, "page cache hit");
            return html;
        }

        let html: Arc<str> = Arc::from(render());
        self.pages.insert(key.to_string(), html.clone()).await;
        tracing::debug!(key, "page cache fill");
        html
    }

    pub async fn entry_count(&self) -> u64 {
        self.pages.run_pending_tasks().await;
        self.pages.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_second_lookup_does_not_render() {
        let cache = PageCache::new(10, Duration::from_secs(60));
        let renders = AtomicUsize::new(0);

        for _ in 0..3 {
            let html = cache
                .get_or_render("home", || {
                    renders.fetch_add(1, Ordering::SeqCst);
                    "<h1>home</h1>".to_string()
                })
                .await;
            assert_eq!(&*html, "<h1>home</h1>");
        }

        assert_eq!(renders.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_keys_are_cached_separately() {
        let cache = PageCache::new(10, Duration::from_secs(60));
        cache.get_or_render("a", || "one".to_string()).await;
        let html = cache.get_or_render("b", || "two".to_string()).await;

        assert_eq!(&*html, "two");
        assert_eq!(cache.entry_count().await, 2);
    }
}
