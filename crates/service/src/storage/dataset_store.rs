use async_trait::async_trait;
use models::Dataset;

use crate::errors::ServiceError;

/// Whole-document persistence for the salon dataset.
///
/// `load` never fails: an unreadable or corrupt backing store yields an
/// empty dataset. `save` replaces the stored document in full.
#[async_trait]
pub trait DatasetStore: Send + Sync {
    async fn load(&self) -> Dataset;
    async fn save(&self, dataset: &Dataset) -> Result<(), ServiceError>;
}
