//! Core abstractions shared by the NRNHUB workloads.
//!
//! This crate provides the fundamental types:
//! - `RequestContext` - Typed request parameters
//! - `SiteConfig` - Runtime configuration (base URL, admin token)
//! - `StructuredLogger` - Request-scoped structured logging

mod config;
mod context;
mod logging;

pub use config::*;
pub use context::*;
pub use logging::*;
