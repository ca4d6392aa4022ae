/// The author of a change message.
///
/// With `DETAILED_ACCOUNTS`, Gerrit fills in everything it knows; any of these may still be
/// missing for service users or deleted accounts.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[allow(dead_code)]
pub struct Author {
    #[serde(rename = "_account_id")]
    pub account_id: Option<u64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
}

impl Author {
    /// The username to attribute annotations to, if it's usable.
    pub fn handle(&self) -> Option<&str> {
        self.username
            .as_deref()
            .filter(|username| !username.trim().is_empty())
    }
}
