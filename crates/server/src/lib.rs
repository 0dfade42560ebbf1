pub mod routes;
pub mod startup;
pub mod errors;
pub mod extractors;
pub mod openapi;

pub use startup::run;
