//! Process-wide menu cache with an explicit refresh policy.
//!
//! The menu file is read and parsed at most once per process; every
//! session shares the same `Arc<Menu>`. There is no implicit
//! invalidation: a changed menu file is only picked up through
//! [`MenuCache::refresh`] (or a restart). The cache is an injectable
//! value owned by the application state, not ambient global state.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

use comanda_types::error::MenuError;
use comanda_types::menu::Menu;

use super::loader::parse_menu;

/// Memoizing loader for the menu file.
pub struct MenuCache {
    path: PathBuf,
    slot: RwLock<Option<Arc<Menu>>>,
}

impl MenuCache {
    /// Create a cache for the given menu file path. The file is not read
    /// until the first [`get`](Self::get).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            slot: RwLock::new(None),
        }
    }

    /// Path of the underlying menu file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the cached menu, reading the file on first use.
    ///
    /// A missing file is `MenuError::NotFound`, which callers must treat
    /// as fatal for the session: no menu means no valid prompt.
    pub async fn get(&self) -> Result<Arc<Menu>, MenuError> {
        if let Some(menu) = self.slot.read().await.as_ref() {
            return Ok(Arc::clone(menu));
        }
        self.refresh().await
    }

    /// Re-read and re-parse the menu file, replacing the cached value.
    pub async fn refresh(&self) -> Result<Arc<Menu>, MenuError> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MenuError::NotFound {
                    path: self.path.display().to_string(),
                }
            } else {
                MenuError::Unreadable(e.to_string())
            }
        })?;

        let menu = Arc::new(parse_menu(&text));
        *self.slot.write().await = Some(Arc::clone(&menu));
        Ok(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_menu(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("menu.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_get_reads_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_menu(&dir, "Agua: $1 [imagenes/agua.png]\n");

        let cache = MenuCache::new(&path);
        let first = cache.get().await.unwrap();
        assert_eq!(first.entries.len(), 1);

        // A file change is invisible without an explicit refresh.
        std::fs::write(&path, "Te: $2 [imagenes/te.png]\n").unwrap();
        let second = cache.get().await.unwrap();
        assert_eq!(second.entries[0].name, "Agua");
    }

    #[tokio::test]
    async fn test_refresh_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_menu(&dir, "Agua: $1 [imagenes/agua.png]\n");

        let cache = MenuCache::new(&path);
        cache.get().await.unwrap();

        std::fs::write(&path, "Te: $2 [imagenes/te.png]\n").unwrap();
        let refreshed = cache.refresh().await.unwrap();
        assert_eq!(refreshed.entries[0].name, "Te");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let cache = MenuCache::new("/nonexistent/menu.txt");
        let err = cache.get().await.unwrap_err();
        assert!(matches!(err, MenuError::NotFound { .. }));
    }
}
