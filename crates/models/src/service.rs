use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Image path stored when a service is created without one.
pub const DEFAULT_IMAGE: &str = "images/default.jpg";

fn default_image() -> String {
    DEFAULT_IMAGE.to_string()
}

/// A sellable salon offering.
///
/// `gender`, `category` and `subcategory` are free text; no enumeration is
/// enforced so the admin console can introduce new values at any time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub duration: String,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub popular: bool,
}

/// Create input: everything except `id`, which the store assigns.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct NewService {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub popular: Option<bool>,
}

impl NewService {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::Validation("name required".into()));
        }
        validate_price(self.price)
    }

    /// Build the stored record under `id`, filling in image/popular defaults.
    pub fn into_service(self, id: u64) -> Service {
        let image = match self.image {
            Some(img) if !img.trim().is_empty() => img,
            _ => default_image(),
        };
        Service {
            id,
            name: self.name,
            category: self.category,
            subcategory: self.subcategory,
            gender: self.gender,
            description: self.description,
            price: self.price,
            duration: self.duration,
            image,
            popular: self.popular.unwrap_or(false),
        }
    }
}

/// Partial update. `id` is accepted so clients may echo a full record back,
/// but it is never applied.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ServicePatch {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub popular: Option<bool>,
}

impl ServicePatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ModelError::Validation("name must not be blank".into()));
            }
        }
        match self.price {
            Some(p) => validate_price(p),
            None => Ok(()),
        }
    }

    /// Merge provided fields onto `target`, then pin `target.id` back to
    /// `id` so the record keeps its identity whatever the patch carried.
    pub fn apply_to(self, target: &mut Service, id: u64) {
        if let Some(v) = self.name { target.name = v; }
        if let Some(v) = self.category { target.category = v; }
        if let Some(v) = self.subcategory { target.subcategory = v; }
        if let Some(v) = self.gender { target.gender = v; }
        if let Some(v) = self.description { target.description = v; }
        if let Some(v) = self.price { target.price = v; }
        if let Some(v) = self.duration { target.duration = v; }
        if let Some(v) = self.image { target.image = v; }
        if let Some(v) = self.popular { target.popular = v; }
        target.id = id;
    }
}

/// Catalog query. Every field left `None` matches everything.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ServiceFilter {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub popular: Option<bool>,
}

impl ServiceFilter {
    pub fn matches(&self, s: &Service) -> bool {
        self.gender.as_deref().map_or(true, |g| s.gender == g)
            && self.category.as_deref().map_or(true, |c| s.category == c)
            && self.subcategory.as_deref().map_or(true, |sc| s.subcategory == sc)
            && self.popular.map_or(true, |p| s.popular == p)
    }
}

fn validate_price(price: f64) -> Result<(), ModelError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ModelError::Validation("price must be a non-negative number".into()));
    }
    Ok(())
}
