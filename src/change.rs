use serde_with::serde_as;
use serde_with::DefaultOnNull;

use crate::change_message::ChangeMessage;
use crate::change_number::ChangeNumber;

/// A change as returned by the `changes/` REST endpoint (a `ChangeInfo`).
///
/// Only the fields we map into tasks are modeled. Everything is optional here so that a change
/// missing a field fails with a useful error in [`crate::issue::Issue::from_change`] rather than
/// failing the whole response.
#[serde_as]
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Change {
    pub project: Option<String>,
    #[serde(rename = "_number")]
    pub number: Option<ChangeNumber>,
    pub branch: Option<String>,
    pub topic: Option<String>,
    /// Passed through verbatim; Gerrit sends `NEW`, `MERGED`, or `ABANDONED`.
    pub status: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub work_in_progress: bool,
    pub subject: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub messages: Vec<ChangeMessage>,
    /// Set on the last change of a page when the server truncated the results.
    #[serde(rename = "_more_changes", default)]
    pub more_changes: bool,
}
