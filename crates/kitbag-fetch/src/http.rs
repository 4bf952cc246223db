use std::future::Future;

use bytes::Bytes;

/// Asynchronous HTTP client abstraction.
///
/// The minimal surface the download helpers need: fetch a URL, get the
/// body. Implementations handle their own redirects, timeouts, and error
/// mapping.
///
/// # Implementations
///
/// - [`ReqwestClient`]: production implementation using `reqwest`
/// - in-memory mocks for testing
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch `url` and return the full response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success HTTP status.
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = std::result::Result<Bytes, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;

    /// Production HTTP client backed by `reqwest`.
    #[derive(Default)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        pub fn new() -> Self {
            Self {
                client: reqwest::Client::new(),
            }
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(&self, url: &str) -> std::result::Result<Bytes, Self::Error> {
            let response = self.client.get(url).send().await?.error_for_status()?;
            response.bytes().await
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
