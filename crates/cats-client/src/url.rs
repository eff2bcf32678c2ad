//! URL construction for the cats API.
//!
//! Pure helpers so every fetch builds the endpoint URL the same way.

use crate::config::FetchConfig;
use url::Url;

/// Endpoint path for the cat list, relative to the base URL.
const CATS_ENDPOINT: &str = "cats";

/// Build the URL for the cat list endpoint.
///
/// Appends the fixed endpoint path to the configured base URL,
/// preserving any path prefix the base carries.
pub(crate) fn cats_url(config: &FetchConfig) -> Url {
    let mut url = config.base_url.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/{CATS_ENDPOINT}"));

    url
}
