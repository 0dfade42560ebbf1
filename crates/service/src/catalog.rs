//! Service catalog manager.
//!
//! Pure functions over a loaded [`Dataset`]; persistence is the caller's job.

use models::{Dataset, NewService, Service, ServiceFilter, ServicePatch};
use tracing::info;

use crate::errors::ServiceError;

/// Services matching every provided filter, in dataset order.
pub fn list(ds: &Dataset, filter: &ServiceFilter) -> Vec<Service> {
    ds.services.iter().filter(|s| filter.matches(s)).cloned().collect()
}

pub fn get(ds: &Dataset, id: u64) -> Result<Service, ServiceError> {
    ds.services
        .iter()
        .find(|s| s.id == id)
        .cloned()
        .ok_or_else(|| ServiceError::not_found("Service"))
}

pub fn create(ds: &mut Dataset, input: NewService) -> Result<Service, ServiceError> {
    input.validate()?;
    let svc = input.into_service(ds.next_service_id());
    info!(id = svc.id, name = %svc.name, "service created");
    ds.services.push(svc.clone());
    Ok(svc)
}

pub fn update(ds: &mut Dataset, id: u64, patch: ServicePatch) -> Result<Service, ServiceError> {
    patch.validate()?;
    let existing = ds
        .services
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| ServiceError::not_found("Service"))?;
    patch.apply_to(existing, id);
    info!(id, "service updated");
    Ok(existing.clone())
}

/// Remove and return the service; the dataset is untouched when absent.
pub fn delete(ds: &mut Dataset, id: u64) -> Result<Service, ServiceError> {
    let idx = ds
        .services
        .iter()
        .position(|s| s.id == id)
        .ok_or_else(|| ServiceError::not_found("Service"))?;
    let removed = ds.services.remove(idx);
    info!(id, "service deleted");
    Ok(removed)
}

/// Distinct categories in first-seen order, optionally for one gender.
pub fn categories(ds: &Dataset, gender: Option<&str>) -> Vec<String> {
    distinct(
        ds.services
            .iter()
            .filter(|s| gender.map_or(true, |g| s.gender == g))
            .map(|s| s.category.as_str()),
    )
}

/// Distinct subcategories of `category` in first-seen order.
pub fn subcategories(ds: &Dataset, category: &str, gender: Option<&str>) -> Vec<String> {
    distinct(
        ds.services
            .iter()
            .filter(|s| s.category == category)
            .filter(|s| gender.map_or(true, |g| s.gender == g))
            .map(|s| s.subcategory.as_str()),
    )
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in values {
        if !out.iter().any(|seen| seen == v) {
            out.push(v.to_string());
        }
    }
    out
}
