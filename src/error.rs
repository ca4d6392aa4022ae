use crate::change_number::ChangeNumber;

/// A network or authentication failure talking to Gerrit.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TransportError {
    #[error("HTTP request failed")]
    #[diagnostic(code(gerrit_tasks::transport::request))]
    Request(#[from] reqwest::Error),

    #[error("Gerrit responded with HTTP {status}: {body}")]
    #[diagnostic(
        code(gerrit_tasks::transport::status),
        help("For 401 responses, check the username and HTTP password in your Gerrit settings")
    )]
    Status { status: u16, body: String },
}

/// A response body which isn't a JSON list of changes, even after stripping Gerrit's
/// `)]}'` prefix.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum MalformedResponseError {
    #[error("Gerrit response contains no JSON payload: {body:?}")]
    #[diagnostic(code(gerrit_tasks::response::empty))]
    NoPayload { body: String },

    #[error("Failed to decode Gerrit response as a list of changes")]
    #[diagnostic(code(gerrit_tasks::response::json))]
    Json(#[from] serde_json::Error),
}

/// A change missing a field every task needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
#[error("{} is missing required field `{field}`", display_change(.change))]
#[diagnostic(code(gerrit_tasks::invalid_record))]
pub struct InvalidRecordError {
    pub change: Option<ChangeNumber>,
    pub field: &'static str,
}

fn display_change(change: &Option<ChangeNumber>) -> String {
    match change {
        Some(change) => format!("Change {change}"),
        None => "A change".to_owned(),
    }
}

/// Anything that can abort a sync pass.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SyncError {
    #[error("Failed to fetch changes from {url}")]
    #[diagnostic(code(gerrit_tasks::fetch))]
    Transport {
        url: String,
        #[source]
        #[diagnostic_source]
        source: TransportError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    MalformedResponse(#[from] MalformedResponseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidRecord(#[from] InvalidRecordError),
}
