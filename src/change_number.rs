use derive_more::Display;
use derive_more::From;
use derive_more::Into;

/// A Gerrit change number, the `_number` field of a `ChangeInfo`.
///
/// Unlike a change ID, this is a number, and it's what shows up in change URLs.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Display,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    From,
    Into,
)]
#[serde(transparent)]
pub struct ChangeNumber(u64);

impl ChangeNumber {
    /// The web UI path for this change, relative to the server root.
    pub fn web_path(&self) -> String {
        format!("/#/c/{self}/")
    }
}
