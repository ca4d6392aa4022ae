use std::fmt::Display;

use crate::change_number::ChangeNumber;
use crate::endpoint::Endpoint;

/// The root of a Gerrit server, e.g. `https://review.opendev.org`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GerritHost {
    base_uri: String,
}

impl GerritHost {
    pub fn new(base_uri: &str) -> Self {
        Self {
            base_uri: base_uri.trim_end_matches('/').to_owned(),
        }
    }

    /// Given an endpoint path, format an authenticated HTTP request URL.
    pub fn endpoint(&self, endpoint: &Endpoint) -> String {
        format!("{}/a/{endpoint}", self.base_uri)
    }

    /// A link to the change in the web UI.
    pub fn change_url(&self, change: ChangeNumber) -> String {
        format!("{}{}", self.base_uri, change.web_path())
    }
}

impl Display for GerritHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base_uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gerrit_host_endpoint() {
        let host = GerritHost::new("https://one.com");
        assert_eq!(
            host.endpoint(&Endpoint::new("/changes/")),
            "https://one.com/a/changes/"
        );
    }

    #[test]
    fn test_gerrit_host_change_url() {
        assert_eq!(
            GerritHost::new("https://one.com").change_url(ChangeNumber::from(1)),
            "https://one.com/#/c/1/"
        );
        assert_eq!(
            GerritHost::new("https://one.com/").change_url(ChangeNumber::from(1)),
            "https://one.com/#/c/1/"
        );
    }
}
