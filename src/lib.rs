//! Ambient seed - populates the ambient temperature table with random readings
//!
//! This library exposes the core modules for testing and reuse.

pub mod config;
pub mod entity;
pub mod error;
pub mod seed;
