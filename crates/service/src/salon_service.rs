use std::sync::Arc;

use chrono::Utc;
use models::{Dataset, LoyaltyCard, LoyaltyCardUpdate, NewLoyaltyCard, NewService, Service, ServiceFilter, ServicePatch};

use crate::errors::ServiceError;
use crate::loyalty::CardKey;
use crate::storage::DatasetStore;
use crate::{catalog, loyalty};

/// Per-request orchestration: load the dataset, run one manager operation,
/// save only when something changed.
///
/// There is no lock around load/save, so two concurrent writers can
/// overwrite each other (last save wins).
#[derive(Clone)]
pub struct SalonService {
    store: Arc<dyn DatasetStore>,
}

impl SalonService {
    pub fn new(store: Arc<dyn DatasetStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn DatasetStore> {
        &self.store
    }

    async fn mutate<T, F>(&self, op: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut Dataset) -> Result<T, ServiceError>,
    {
        let mut ds = self.store.load().await;
        let out = op(&mut ds)?;
        self.store.save(&ds).await?;
        Ok(out)
    }

    pub async fn list_services(&self, filter: &ServiceFilter) -> Vec<Service> {
        catalog::list(&self.store.load().await, filter)
    }

    pub async fn get_service(&self, id: u64) -> Result<Service, ServiceError> {
        catalog::get(&self.store.load().await, id)
    }

    pub async fn create_service(&self, input: NewService) -> Result<Service, ServiceError> {
        self.mutate(|ds| catalog::create(ds, input)).await
    }

    pub async fn update_service(&self, id: u64, patch: ServicePatch) -> Result<Service, ServiceError> {
        self.mutate(|ds| catalog::update(ds, id, patch)).await
    }

    pub async fn delete_service(&self, id: u64) -> Result<Service, ServiceError> {
        self.mutate(|ds| catalog::delete(ds, id)).await
    }

    pub async fn categories(&self, gender: Option<&str>) -> Vec<String> {
        catalog::categories(&self.store.load().await, gender)
    }

    pub async fn subcategories(&self, category: &str, gender: Option<&str>) -> Vec<String> {
        catalog::subcategories(&self.store.load().await, category, gender)
    }

    pub async fn list_cards(&self) -> Vec<LoyaltyCard> {
        loyalty::list(&self.store.load().await)
    }

    pub async fn get_card(&self, key: &CardKey) -> Result<LoyaltyCard, ServiceError> {
        loyalty::get(&self.store.load().await, key)
    }

    pub async fn create_card(&self, input: NewLoyaltyCard) -> Result<LoyaltyCard, ServiceError> {
        self.mutate(|ds| loyalty::create(ds, input, Utc::now())).await
    }

    pub async fn accrue_card(&self, key: &CardKey, update: LoyaltyCardUpdate) -> Result<LoyaltyCard, ServiceError> {
        self.mutate(|ds| loyalty::accrue(ds, key, update, Utc::now())).await
    }
}
