use derive_more::{AsRef, Deref, Display, Into};

/// A REST API endpoint, with no leading `/`, including any query string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Display, Into, AsRef, Deref)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(endpoint: &str) -> Self {
        Self(endpoint.trim_start_matches('/').to_owned())
    }
}
