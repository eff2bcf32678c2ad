#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod events;
mod http;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{CatsClient, DefaultCatsClient};

// Configuration
pub use config::CatsClientConfig;

// Errors
pub use error::{CatsError, CatsResult};

// Events
pub use events::FetchPhase;

// Transport
pub use http::{HttpBackend, ReqwestBackend};

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
// wiremock drives the integration tests, not the unit test build
#[cfg(test)]
use wiremock as _;
