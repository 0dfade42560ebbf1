use std::path::{Path, PathBuf};

use async_trait::async_trait;
use models::Dataset;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::DatasetStore;

/// JSON file-backed dataset store.
///
/// Holds no state besides the path: every `load` reads the file again and
/// every `save` rewrites it, so concurrent writers can lose updates.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Sibling temp file, unique per save so concurrent writers never share one.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "dataset.json".into());
        name.push(format!(".{}.tmp", Uuid::new_v4()));
        self.file_path.with_file_name(name)
    }
}

#[async_trait]
impl DatasetStore for JsonFileStore {
    async fn load(&self) -> Dataset {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "data file unreadable; using empty dataset");
                return Dataset::default();
            }
        };
        match serde_json::from_slice::<Dataset>(&bytes) {
            Ok(mut ds) => {
                ds.rederive_tiers();
                debug!(services = ds.services.len(), cards = ds.loyalty_cards.len(), "dataset loaded");
                ds
            }
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "data file corrupt; using empty dataset");
                Dataset::default()
            }
        }
    }

    async fn save(&self, dataset: &Dataset) -> Result<(), ServiceError> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
            }
        }
        if let Some(field) = dataset.first_non_finite() {
            return Err(ServiceError::Storage(format!("{field} is not a finite number")));
        }
        let data = serde_json::to_vec_pretty(dataset).map_err(|e| ServiceError::Storage(e.to_string()))?;
        // write-then-rename so a reader never observes a half-written file
        let tmp = self.temp_path();
        fs::write(&tmp, data).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        if let Err(e) = fs::rename(&tmp, &self.file_path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(ServiceError::Storage(e.to_string()));
        }
        debug!(path = %self.file_path.display(), "dataset saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_dataset, temp_data_path};

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let store = JsonFileStore::new(temp_data_path("missing"));
        assert_eq!(store.load().await, Dataset::default());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() -> Result<(), anyhow::Error> {
        let path = temp_data_path("corrupt");
        tokio::fs::create_dir_all(path.parent().unwrap()).await?;
        tokio::fs::write(&path, b"{ not json").await?;
        let store = JsonFileStore::new(&path);
        assert_eq!(store.load().await, Dataset::default());
        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn save_then_load_round_trips() -> Result<(), anyhow::Error> {
        let path = temp_data_path("roundtrip");
        let store = JsonFileStore::new(&path);
        let ds = sample_dataset();
        store.save(&ds).await?;
        let first = tokio::fs::read(&path).await?;

        // a no-op cycle must not lose or reorder anything
        let loaded = store.load().await;
        assert_eq!(loaded, ds);
        store.save(&loaded).await?;
        let second = tokio::fs::read(&path).await?;
        assert_eq!(first, second);

        // pretty-printed, and no temp file left behind
        assert!(String::from_utf8(second)?.contains("\n  \"services\""));
        assert!(leftover_temp_files(&path).await?.is_empty());
        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    async fn leftover_temp_files(path: &Path) -> Result<Vec<PathBuf>, anyhow::Error> {
        let prefix = path.file_name().unwrap().to_string_lossy().into_owned();
        let mut found = Vec::new();
        let mut entries = tokio::fs::read_dir(path.parent().unwrap()).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with(&prefix) && name.ends_with(".tmp") {
                found.push(entry.path());
            }
        }
        Ok(found)
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_saves_all_succeed() -> Result<(), anyhow::Error> {
        let path = temp_data_path("concurrent");
        let store = std::sync::Arc::new(JsonFileStore::new(&path));
        for _ in 0..20 {
            let mut writers = Vec::new();
            for n in 0..8 {
                let store = store.clone();
                let mut ds = sample_dataset();
                ds.services.truncate(n % 6 + 1);
                writers.push(tokio::spawn(async move { store.save(&ds).await }));
            }
            for w in writers {
                w.await??;
            }
            // whichever writer won, the file is one complete dataset
            let bytes = tokio::fs::read(&path).await?;
            serde_json::from_slice::<Dataset>(&bytes)?;
        }
        assert!(leftover_temp_files(&path).await?.is_empty());
        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn non_finite_money_is_refused_and_file_kept() -> Result<(), anyhow::Error> {
        let path = temp_data_path("nonfinite");
        let store = JsonFileStore::new(&path);
        store.save(&sample_dataset()).await?;
        let before = tokio::fs::read(&path).await?;

        let mut ds = sample_dataset();
        ds.loyalty_cards[0].total_spent = f64::INFINITY;
        assert!(matches!(store.save(&ds).await, Err(ServiceError::Storage(_))));
        assert_eq!(tokio::fs::read(&path).await?, before);
        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn stale_tier_is_corrected_on_load() -> Result<(), anyhow::Error> {
        let path = temp_data_path("staletier");
        let mut ds = sample_dataset();
        ds.loyalty_cards[0].points = 1200;
        tokio::fs::create_dir_all(path.parent().unwrap()).await?;
        tokio::fs::write(&path, serde_json::to_vec_pretty(&ds)?).await?;

        let loaded = JsonFileStore::new(&path).load().await;
        assert_eq!(loaded.loyalty_cards[0].tier, models::Tier::Platinum);
        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn save_creates_parent_directory() -> Result<(), anyhow::Error> {
        let dir = temp_data_path("nested").with_extension("");
        let path = dir.join("deeper").join("services.json");
        let store = JsonFileStore::new(&path);
        store.save(&Dataset::default()).await?;
        assert!(path.exists());
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn save_into_unwritable_location_fails() {
        // a path whose parent is a regular file cannot be created
        let blocker = temp_data_path("blocker");
        tokio::fs::create_dir_all(blocker.parent().unwrap()).await.unwrap();
        tokio::fs::write(&blocker, b"x").await.unwrap();
        let store = JsonFileStore::new(blocker.join("services.json"));
        let res = store.save(&Dataset::default()).await;
        assert!(matches!(res, Err(ServiceError::Storage(_))));
        let _ = tokio::fs::remove_file(&blocker).await;
    }
}
