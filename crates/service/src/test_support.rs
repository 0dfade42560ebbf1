#![cfg(test)]
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use models::{Dataset, NewLoyaltyCard, NewService};
use uuid::Uuid;

use crate::storage::{DatasetStore, JsonFileStore};
use crate::SalonService;

/// Unique data file path under the system temp dir; the file is not created.
pub fn temp_data_path(prefix: &str) -> PathBuf {
    std::env::temp_dir()
        .join("salon-catalog-tests")
        .join(format!("{}_{}.json", prefix, Uuid::new_v4()))
}

fn service(name: &str, gender: &str, category: &str, subcategory: &str, popular: bool) -> NewService {
    NewService {
        name: name.into(),
        category: category.into(),
        subcategory: subcategory.into(),
        gender: gender.into(),
        description: format!("{name} by our stylists"),
        price: 30.0,
        duration: "45 min".into(),
        image: None,
        popular: Some(popular),
    }
}

/// Small mixed catalog plus one Silver card.
pub fn sample_dataset() -> Dataset {
    let mut ds = Dataset::default();
    let items = [
        service("Blow Dry", "women", "hair", "styling", true),
        service("Classic Cut", "men", "hair", "cuts", false),
        service("Layered Cut", "women", "hair", "cuts", false),
        service("Gel Manicure", "women", "nails", "manicure", true),
        service("Beard Trim", "men", "beard", "trim", true),
        service("Root Color", "women", "hair", "color", false),
    ];
    for (i, s) in items.into_iter().enumerate() {
        ds.services.push(s.into_service(i as u64 + 1));
    }
    let created = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).single().unwrap_or_else(Utc::now);
    let mut card = NewLoyaltyCard { name: "Ana".into(), email: "ana@example.com".into(), phone: "555-0100".into() }
        .into_card(1_709_285_400_000, created);
    card.points = 250;
    card.visits = 4;
    card.total_spent = 180.0;
    card.tier = models::Tier::Silver;
    ds.loyalty_cards.push(card);
    ds
}

/// Service facade over a fresh temp file seeded with `sample_dataset`.
pub async fn seeded_service(prefix: &str) -> (SalonService, PathBuf) {
    let path = temp_data_path(prefix);
    let store = JsonFileStore::new(&path);
    let svc = SalonService::new(Arc::new(store));
    svc.store().save(&sample_dataset()).await.expect("seed dataset");
    (svc, path)
}
