use crate::author::Author;

/// A message posted on a change: a review comment, a vote, or a bot notice.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeMessage {
    /// Missing for messages generated by Gerrit itself.
    pub author: Option<Author>,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "_revision_number")]
    pub revision_number: Option<u32>,
}

impl ChangeMessage {
    /// Format this message as a task annotation, e.g. `@rbt - Looks good to me`.
    ///
    /// Returns `None` for messages without a usable author username.
    pub fn annotation(&self) -> Option<String> {
        let username = self.author.as_ref()?.handle()?;
        Some(format!("@{username} - {}", self.message))
    }
}
