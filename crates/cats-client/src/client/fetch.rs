//! The cat list fetch and its lifecycle broadcast.

use crate::error::CatsResult;
use crate::http::HttpBackend;
use crate::url::cats_url;

use super::CatsClient;

impl<B: HttpBackend> CatsClient<B> {
    /// Fetch the list of cat names from the API.
    ///
    /// Broadcasts `start` before the request is issued and exactly one
    /// of `success` (with the decoded names) or `error` (with the
    /// failure) once it settles. The caller gets the same outcome the
    /// listeners saw.
    pub async fn get_cats(&self) -> CatsResult<Vec<String>> {
        self.listeners.notify_start();

        let url = cats_url(&self.config);
        let fetched: CatsResult<Vec<String>> = self.backend.get_json(&url).await;
        match fetched {
            Ok(cats) => {
                self.listeners.notify_success(&cats);
                Ok(cats)
            }
            Err(error) => {
                self.listeners.notify_error(&error);
                Err(error)
            }
        }
    }
}
