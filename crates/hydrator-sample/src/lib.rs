//! # Hydrator Sample Library
//!
//! This library exposes the sample request inputs for integration testing.

pub mod model;
