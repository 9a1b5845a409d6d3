//! trendware-tools - tool server for agent runtimes
//!
//! This library provides two callable operations for external agent runtimes:
//! a product-search passthrough that normalizes upstream payloads, and a
//! deterministic discount-percentage derivation.

pub mod config;
pub mod discount;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod server;
pub mod tools;

pub use error::{Error, Result};
