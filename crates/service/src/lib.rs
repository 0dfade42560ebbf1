//! Service layer: persistence and business rules for the salon catalog.
//! - `storage` owns the data file; nothing else touches disk.
//! - `catalog` and `loyalty` are pure managers over a loaded `Dataset`.
//! - `salon_service` wires them together per request (load, mutate, save).

pub mod errors;
pub mod runtime;
pub mod storage;
pub mod catalog;
pub mod loyalty;
pub mod salon_service;
#[cfg(test)]
pub mod test_support;

pub use salon_service::SalonService;
