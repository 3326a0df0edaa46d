mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// One request the service API understands, plus how to build it against
/// a base URL. Implemented next to each handler; the CLI drives the
/// service exclusively through these.
pub trait ApiRequest: Serialize {
    type Response: DeserializeOwned;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder;
}
