//! Persistence adapters implementing the domain store ports.

pub mod json_store;

pub use self::json_store::JsonFileJobStore;
