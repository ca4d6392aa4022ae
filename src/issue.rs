use crate::change::Change;
use crate::change_message::ChangeMessage;
use crate::change_number::ChangeNumber;
use crate::error::InvalidRecordError;
use crate::gerrit_host::GerritHost;

/// Service-level metadata attached to an [`Issue`] that isn't part of the change itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueExtra {
    /// Link to the change in the web UI.
    pub url: String,
}

/// A validated change, ready to be turned into a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub project: String,
    pub number: ChangeNumber,
    pub branch: String,
    pub topic: String,
    pub status: String,
    pub work_in_progress: bool,
    pub subject: String,
    pub messages: Vec<ChangeMessage>,
    pub extra: IssueExtra,
}

impl Issue {
    /// Validate a [`Change`] and attach its URL.
    ///
    /// `project`, `_number`, `status`, and `subject` are required. A missing `branch` or `topic`
    /// becomes an empty string.
    pub fn from_change(change: Change, host: &GerritHost) -> Result<Self, InvalidRecordError> {
        let number = change.number.ok_or(InvalidRecordError {
            change: None,
            field: "_number",
        })?;
        let required = |value: Option<String>, field: &'static str| {
            value.ok_or(InvalidRecordError {
                change: Some(number),
                field,
            })
        };

        Ok(Self {
            project: required(change.project, "project")?,
            number,
            branch: change.branch.unwrap_or_default(),
            topic: change.topic.unwrap_or_default(),
            status: required(change.status, "status")?,
            work_in_progress: change.work_in_progress,
            subject: required(change.subject, "subject")?,
            messages: change.messages,
            extra: IssueExtra {
                url: host.change_url(number),
            },
        })
    }

    pub fn url(&self) -> &str {
        &self.extra.url
    }
}
