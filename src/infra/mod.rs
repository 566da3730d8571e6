//! Infrastructure layer - Storage
//!
//! Volatile, process-local storage for the domain records plus the sample
//! data every new store starts with. Nothing survives a restart.

pub mod seed;
pub mod store;

pub use store::EntityStore;
