use std::fmt::Display;

use itertools::Itertools;

use crate::endpoint::Endpoint;

/// The default query: open changes where the authenticated user is a reviewer.
pub const REVIEWER_QUERY: [&str; 2] = ["is:open", "is:reviewer"];

/// An `o=` option for the `changes/` endpoint, asking Gerrit to fill in more of each
/// `ChangeInfo`.
///
/// Not modeled: the dozens of options we never read.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChangeOption {
    /// Include review messages.
    Messages,
    /// Include `name`, `email`, and `username` on every account.
    DetailedAccounts,
    /// Include the current revision.
    CurrentRevision,
    /// Include labels and votes.
    DetailedLabels,
}

impl Display for ChangeOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeOption::Messages => write!(f, "MESSAGES"),
            ChangeOption::DetailedAccounts => write!(f, "DETAILED_ACCOUNTS"),
            ChangeOption::CurrentRevision => write!(f, "CURRENT_REVISION"),
            ChangeOption::DetailedLabels => write!(f, "DETAILED_LABELS"),
        }
    }
}

/// Options for a `GET /changes/` query.
///
/// Review messages and detailed accounts are always requested, because annotations can't be
/// built without them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GerritQuery {
    /// Search operators, ANDed together.
    terms: Vec<String>,
    /// Detail options, in request order.
    options: Vec<ChangeOption>,
    /// Maximum number of changes to return (`n=`).
    limit: Option<usize>,
    /// Number of changes to skip (`S=`).
    start: usize,
}

impl Default for GerritQuery {
    fn default() -> Self {
        Self::new(REVIEWER_QUERY)
    }
}

impl GerritQuery {
    /// Construct a query from search operators like `is:open` or `project:nova`.
    pub fn new(terms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
            options: vec![ChangeOption::Messages, ChangeOption::DetailedAccounts],
            limit: None,
            start: 0,
        }
    }

    /// Request an additional detail option.
    #[allow(dead_code)]
    pub fn option(mut self, option: ChangeOption) -> Self {
        if !self.options.contains(&option) {
            self.options.push(option);
        }
        self
    }

    /// Maximum number of changes to return.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of changes to skip.
    pub fn start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// The `q=` value. Spaces are encoded as `+`, which is also the term separator.
    pub fn query_string(&self) -> String {
        self.terms
            .iter()
            .map(|term| term.trim().replace(' ', "+"))
            .filter(|term| !term.is_empty())
            .join("+")
    }

    /// Convert this query into a `changes/` endpoint.
    pub fn endpoint(&self) -> Endpoint {
        let mut params = vec![format!("q={}", self.query_string())];

        params.extend(self.options.iter().map(|option| format!("o={option}")));

        if let Some(limit) = self.limit {
            params.push(format!("n={limit}"));
        }
        if self.start > 0 {
            params.push(format!("S={}", self.start));
        }

        Endpoint::new(&format!("changes/?{}", params.join("&")))
    }
}
