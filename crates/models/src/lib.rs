//! Domain records persisted in the salon data file.
//!
//! - `service`: catalog entries and their create/patch/filter inputs.
//! - `loyalty_card`: per-customer cards, accrual input and tier derivation.
//! - `dataset`: the aggregate written to disk as one JSON document.

pub mod errors;
pub mod service;
pub mod loyalty_card;
pub mod dataset;

pub use dataset::Dataset;
pub use loyalty_card::{LoyaltyCard, LoyaltyCardUpdate, NewLoyaltyCard, Tier};
pub use service::{NewService, Service, ServiceFilter, ServicePatch, DEFAULT_IMAGE};
