//! Notifying client for the cats API.
//!
//! This module provides the client interface plus the chainable
//! listener registration methods.

mod fetch;

use crate::config::{CatsClientConfig, FetchConfig};
use crate::error::CatsError;
use crate::events::FetchListeners;
use crate::http::{HttpBackend, ReqwestBackend};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default cats client using the reqwest HTTP backend.
pub type DefaultCatsClient = CatsClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the cats API that broadcasts fetch lifecycle events.
///
/// Listeners are registered per instance with the chainable `on_*`
/// methods and invoked synchronously in registration order, on the
/// task that called [`get_cats`](CatsClient::get_cats). The client is
/// generic over an HTTP backend; use [`DefaultCatsClient`] for
/// production code and [`CatsClient::with_backend`] to inject a
/// custom transport.
///
/// # Example
///
/// ```no_run
/// use cats_client::{CatsClientConfig, DefaultCatsClient};
///
/// # async fn run() -> Result<(), cats_client::CatsError> {
/// let client = DefaultCatsClient::new(&CatsClientConfig::new())
///     .on_start(|| println!("fetching cats"))
///     .on_success(|cats| println!("got {} cats", cats.len()))
///     .on_error(|error| eprintln!("fetch failed: {error}"));
///
/// let cats = client.get_cats().await?;
/// # Ok(())
/// # }
/// ```
pub struct CatsClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: FetchConfig,
    pub(crate) listeners: FetchListeners,
}

impl DefaultCatsClient {
    /// Create a new client with the given configuration.
    #[must_use]
    pub fn new(config: &CatsClientConfig) -> Self {
        let internal = FetchConfig::from_public(config);
        let backend = ReqwestBackend::new(&internal);
        Self {
            backend,
            config: internal,
            listeners: FetchListeners::default(),
        }
    }

    /// Create a new client with default configuration.
    #[must_use]
    pub fn default_client() -> Self {
        Self::new(&CatsClientConfig::default())
    }
}

impl<B: HttpBackend> CatsClient<B> {
    /// Create a client with a custom transport backend.
    pub fn with_backend(config: &CatsClientConfig, backend: B) -> Self {
        Self {
            backend,
            config: FetchConfig::from_public(config),
            listeners: FetchListeners::default(),
        }
    }

    /// Register a handler that fires when a fetch begins.
    ///
    /// Handlers for a phase run synchronously in registration order; a
    /// handler that panics aborts the fetch with that panic.
    #[must_use]
    pub fn on_start(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.listeners.push_start(Box::new(handler));
        self
    }

    /// Register a handler that fires with the cat names after a
    /// successful fetch, before they are returned to the caller.
    #[must_use]
    pub fn on_success(mut self, handler: impl Fn(&[String]) + Send + Sync + 'static) -> Self {
        self.listeners.push_success(Box::new(handler));
        self
    }

    /// Register a handler that fires with the failure after a failed
    /// fetch, before the error is returned to the caller.
    #[must_use]
    pub fn on_error(mut self, handler: impl Fn(&CatsError) + Send + Sync + 'static) -> Self {
        self.listeners.push_error(Box::new(handler));
        self
    }
}
