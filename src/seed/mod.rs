//! Bulk seeding of the ambient temperature table.

pub mod runner;

pub use runner::{READING_COUNT, SeedRunner, TEMP_MAX, TEMP_MIN};
