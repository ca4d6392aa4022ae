use crate::change::Change;
use crate::error::MalformedResponseError;

/// The changes returned by one `GET /changes/` request, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub changes: Vec<Change>,
}

impl QueryResult {
    /// Parse a response body.
    ///
    /// Gerrit prefixes JSON responses with `)]}'` to stop them from being run as scripts, so
    /// anything before the first `[` or `{` is discarded.
    pub fn from_body(body: &str) -> Result<Self, MalformedResponseError> {
        let json = strip_xssi_prefix(body).ok_or_else(|| MalformedResponseError::NoPayload {
            body: body.to_owned(),
        })?;
        let changes = serde_json::from_str::<Vec<Change>>(json)?;
        Ok(Self { changes })
    }

    /// Whether the server had more changes than it returned.
    pub fn more_changes(&self) -> bool {
        self.changes
            .last()
            .map(|change| change.more_changes)
            .unwrap_or(false)
    }
}

fn strip_xssi_prefix(body: &str) -> Option<&str> {
    body.find(&['[', '{'][..]).map(|start| &body[start..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change_number::ChangeNumber;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const RECORD: &str = indoc! {r#"
        [
            {
                "project": "nova",
                "_number": 1,
                "branch": "master",
                "topic": "test-topic",
                "status": "new",
                "work_in_progress": false,
                "subject": "this is a title",
                "messages": [
                    {
                        "author": {"username": "Iam Author"},
                        "message": "this is a message",
                        "_revision_number": 1
                    }
                ]
            }
        ]
    "#};

    #[test]
    fn test_query_result_strips_prefix() {
        let prefixed = QueryResult::from_body(&format!(")]}}'\n{RECORD}")).unwrap();
        let bare = QueryResult::from_body(RECORD).unwrap();

        assert_eq!(prefixed, bare);
        assert_eq!(bare.changes.len(), 1);
        assert_eq!(bare.changes[0].number, Some(ChangeNumber::from(1)));
        assert_eq!(bare.changes[0].subject.as_deref(), Some("this is a title"));
    }

    #[test]
    fn test_query_result_prefix_without_newline() {
        let result = QueryResult::from_body(&format!(")]}}'{RECORD}")).unwrap();
        assert_eq!(result.changes.len(), 1);
    }

    #[test]
    fn test_query_result_preserves_order() {
        let result = QueryResult::from_body(indoc! {r#"
            )]}'
            [
                {"project": "b", "_number": 9, "status": "NEW", "subject": "nine"},
                {"project": "a", "_number": 3, "status": "NEW", "subject": "three"},
                {"project": "c", "_number": 5, "status": "NEW", "subject": "five", "_more_changes": true}
            ]
        "#})
        .unwrap();

        let numbers = result
            .changes
            .iter()
            .map(|change| change.number.map(u64::from))
            .collect::<Vec<_>>();
        assert_eq!(numbers, vec![Some(9), Some(3), Some(5)]);
        assert!(result.more_changes());
    }

    #[test]
    fn test_query_result_empty_list() {
        let result = QueryResult::from_body(")]}'\n[]\n").unwrap();
        assert_eq!(result.changes, vec![]);
        assert!(!result.more_changes());
    }

    #[test]
    fn test_query_result_no_payload() {
        let error = QueryResult::from_body("Not Found").unwrap_err();
        assert!(matches!(error, MalformedResponseError::NoPayload { .. }));

        let error = QueryResult::from_body("").unwrap_err();
        assert!(matches!(error, MalformedResponseError::NoPayload { .. }));
    }

    #[test]
    fn test_query_result_invalid_json() {
        let error = QueryResult::from_body(")]}'\n[{\"project\": ").unwrap_err();
        assert!(matches!(error, MalformedResponseError::Json(_)));
    }
}
