//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - Company and invoice routes
//! - Health check routes
//! - A JSON 404 fallback

pub mod builder;
pub mod entity_registry;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use host::ServerHost;
