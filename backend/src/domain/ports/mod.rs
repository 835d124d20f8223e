//! Domain ports for the hexagonal boundary.

mod id_generator;
mod job_store;

pub use id_generator::{PostingIdGenerator, SequentialIdGenerator};
pub use job_store::{InMemoryJobStore, JobStore};
