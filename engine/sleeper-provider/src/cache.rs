//! On-disk player catalog cache
//!
//! The full Sleeper catalog is several megabytes and changes slowly, so the
//! raw response body is kept in a file and reused until it is older than the
//! configured window. A refresh only writes the file after a successful
//! fetch of well-formed JSON, so a failed or truncated refresh never replaces
//! a good copy. A cached file that no longer parses counts as stale.

use crate::{ProviderError, Result};
use chrono::{DateTime, Duration, Utc};
use serde::de::IgnoredAny;
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Upper bound keeping the window inside chrono's range (~100 years)
const MAX_AGE_CAP_HOURS: u64 = 24 * 365 * 100;

#[derive(Debug)]
pub struct PlayerCatalogCache {
    path: PathBuf,
    max_age: Duration,
    // Serializes refreshes so concurrent stale reads fetch once
    refresh_lock: Mutex<()>,
}

impl PlayerCatalogCache {
    pub fn new(path: impl Into<PathBuf>, max_age_hours: u64) -> Self {
        let hours = i64::try_from(max_age_hours.min(MAX_AGE_CAP_HOURS)).unwrap_or(0);
        Self { path: path.into(), max_age: Duration::hours(hours), refresh_lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last write time of the cache file, if present
    pub async fn modified_at(&self) -> Option<DateTime<Utc>> {
        let metadata = tokio::fs::metadata(&self.path).await.ok()?;
        metadata.modified().ok().map(DateTime::<Utc>::from)
    }

    /// Whether the file exists and is younger than the window
    pub async fn is_fresh(&self) -> bool {
        match self.modified_at().await {
            Some(modified) => Utc::now() - modified < self.max_age,
            None => false,
        }
    }

    /// Serve the cached body if fresh, otherwise fetch, store and return it
    pub async fn load_or_fetch<F, Fut>(&self, fetch: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let _guard = self.refresh_lock.lock().await;

        if self.is_fresh().await {
            match tokio::fs::read_to_string(&self.path).await {
                Ok(body) if is_json(&body) => {
                    debug!("Player catalog cache hit: {}", self.path.display());
                    return Ok(body);
                }
                Ok(_) => {
                    warn!("Player cache {} is not valid JSON, refetching", self.path.display())
                }
                Err(e) => warn!("Failed to read player cache {}: {}", self.path.display(), e),
            }
        }

        info!("Player catalog cache stale or missing, fetching from upstream");
        let body = fetch().await?;
        serde_json::from_str::<IgnoredAny>(&body)?;
        self.store(&body).await?;
        info!("Stored player catalog ({} bytes) at {}", body.len(), self.path.display());
        Ok(body)
    }

    async fn store(&self, body: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ProviderError::Cache { path: parent.to_path_buf(), source })?;
        }
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|source| ProviderError::Cache { path: self.path.clone(), source })
    }
}

/// Well-formed JSON check without building a value
fn is_json(body: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(body).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const CATALOG: &str = r#"{"4984":{"full_name":"Josh Allen"}}"#;

    #[tokio::test]
    async fn test_missing_file_fetches_and_stores() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PlayerCatalogCache::new(dir.path().join("nested/players.json"), 20);

        let body = cache.load_or_fetch(|| async { Ok(CATALOG.to_string()) }).await.unwrap();
        assert_eq!(body, CATALOG);
        assert!(cache.is_fresh().await);
        let on_disk = tokio::fs::read_to_string(cache.path()).await.unwrap();
        assert_eq!(on_disk, body);
    }

    #[tokio::test]
    async fn test_fresh_file_skips_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.json");
        tokio::fs::write(&path, CATALOG).await.unwrap();
        let cache = PlayerCatalogCache::new(&path, 20);
        let calls = AtomicUsize::new(0);

        let body = cache
            .load_or_fetch(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("{}".to_string())
            })
            .await
            .unwrap();
        assert_eq!(body, CATALOG);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_stale_file_is_refetched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.json");
        tokio::fs::write(&path, "{}").await.unwrap();
        let cache = PlayerCatalogCache::new(&path, 0);

        assert!(!cache.is_fresh().await);
        let body = cache.load_or_fetch(|| async { Ok(CATALOG.to_string()) }).await.unwrap();
        assert_eq!(body, CATALOG);
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), CATALOG);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_old_copy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.json");
        tokio::fs::write(&path, "{}").await.unwrap();
        let cache = PlayerCatalogCache::new(&path, 0);

        let result = cache
            .load_or_fetch(|| async { Err(ProviderError::invalid_config("upstream down")) })
            .await;
        assert!(result.is_err());
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_truncated_body_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.json");
        let cache = PlayerCatalogCache::new(&path, 20);

        let truncated = r#"{"4984": {"full_na"#;
        let result = cache.load_or_fetch(|| async { Ok(truncated.to_string()) }).await;
        assert!(matches!(result, Err(ProviderError::Parse(_))));
        assert!(!path.exists());

        // The next load fetches again and stores the good body
        let body = cache.load_or_fetch(|| async { Ok(CATALOG.to_string()) }).await.unwrap();
        assert_eq!(body, CATALOG);
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), CATALOG);
    }

    #[tokio::test]
    async fn test_corrupt_fresh_file_is_refetched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.json");
        tokio::fs::write(&path, r#"{"4984": {"full_na"#).await.unwrap();
        let cache = PlayerCatalogCache::new(&path, 20);
        assert!(cache.is_fresh().await);

        let body = cache.load_or_fetch(|| async { Ok(CATALOG.to_string()) }).await.unwrap();
        assert_eq!(body, CATALOG);
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), CATALOG);
    }
}
