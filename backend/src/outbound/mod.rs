//! Outbound adapters: everything the domain drives in the outside world.

pub mod persistence;
