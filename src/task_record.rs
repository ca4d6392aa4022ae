use std::fmt::Display;

use crate::change_number::ChangeNumber;
use crate::issue::Issue;

/// A Taskwarrior priority.
///
/// Every review gets [`Priority::Medium`]; Gerrit has no equivalent to map from.
#[allow(dead_code)]
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    #[serde(rename = "H")]
    High,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Low,
}

/// A flat task, ready to be merged into the task database.
///
/// Gerrit-specific fields are prefixed with `gerrit` so records from different trackers can share
/// one database. The store identifies tasks by `gerritid` and `project`. Every field is always
/// present.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub project: String,
    #[serde(rename = "gerritid")]
    pub id: ChangeNumber,
    #[serde(rename = "gerritstatus")]
    pub status: String,
    #[serde(rename = "gerritsummary")]
    pub summary: String,
    #[serde(rename = "gerriturl")]
    pub url: String,
    #[serde(rename = "gerritbranch")]
    pub branch: String,
    #[serde(rename = "gerrittopic")]
    pub topic: String,
    /// `1` for work-in-progress changes, `0` otherwise.
    #[serde(rename = "gerritwip")]
    pub wip: u8,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub annotations: Vec<String>,
    pub description: String,
}

impl TaskRecord {
    pub fn from_issue(issue: &Issue) -> Self {
        let annotations = issue
            .messages
            .iter()
            .filter_map(|message| {
                let annotation = message.annotation();
                if annotation.is_none() {
                    tracing::trace!(
                        change = %issue.number,
                        revision = ?message.revision_number,
                        "Skipping message without an author username"
                    );
                }
                annotation
            })
            .collect();

        Self {
            project: issue.project.clone(),
            id: issue.number,
            status: issue.status.clone(),
            summary: issue.subject.clone(),
            url: issue.url().to_owned(),
            branch: issue.branch.clone(),
            topic: issue.topic.clone(),
            wip: u8::from(issue.work_in_progress),
            priority: Priority::Medium,
            tags: Vec::new(),
            annotations,
            description: format!(
                "(bw)PR#{} - {} .. {}",
                issue.number,
                issue.subject,
                issue.url()
            ),
        }
    }
}

impl From<&Issue> for TaskRecord {
    fn from(issue: &Issue) -> Self {
        Self::from_issue(issue)
    }
}

/// The type of a Taskwarrior user-defined attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UdaType {
    String,
    Numeric,
}

impl Display for UdaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UdaType::String => write!(f, "string"),
            UdaType::Numeric => write!(f, "numeric"),
        }
    }
}

/// A user-defined attribute the task database needs to store Gerrit fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uda {
    pub name: &'static str,
    pub uda_type: UdaType,
    pub label: &'static str,
}

impl Uda {
    /// The `taskrc` lines declaring this attribute.
    pub fn taskrc_lines(&self) -> [String; 2] {
        [
            format!("uda.{}.type={}", self.name, self.uda_type),
            format!("uda.{}.label={}", self.name, self.label),
        ]
    }
}

pub const UDAS: [Uda; 7] = [
    Uda {
        name: "gerritid",
        uda_type: UdaType::Numeric,
        label: "Gerrit Change ID",
    },
    Uda {
        name: "gerritstatus",
        uda_type: UdaType::String,
        label: "Gerrit Status",
    },
    Uda {
        name: "gerritsummary",
        uda_type: UdaType::String,
        label: "Gerrit Summary",
    },
    Uda {
        name: "gerriturl",
        uda_type: UdaType::String,
        label: "Gerrit URL",
    },
    Uda {
        name: "gerritbranch",
        uda_type: UdaType::String,
        label: "Gerrit Branch",
    },
    Uda {
        name: "gerrittopic",
        uda_type: UdaType::String,
        label: "Gerrit Topic",
    },
    Uda {
        name: "gerritwip",
        uda_type: UdaType::Numeric,
        label: "Gerrit Work in Progress",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::author::Author;
    use crate::change_message::ChangeMessage;
    use crate::issue::IssueExtra;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn issue() -> Issue {
        Issue {
            project: "nova".to_owned(),
            number: ChangeNumber::from(1),
            branch: "master".to_owned(),
            topic: "test-topic".to_owned(),
            status: "new".to_owned(),
            work_in_progress: false,
            subject: "this is a title".to_owned(),
            messages: vec![],
            extra: IssueExtra {
                url: "https://one.com/#/c/1/".to_owned(),
            },
        }
    }

    fn message(username: Option<&str>, text: &str) -> ChangeMessage {
        ChangeMessage {
            author: username.map(|username| Author {
                username: Some(username.to_owned()),
                ..Default::default()
            }),
            message: text.to_owned(),
            revision_number: Some(1),
        }
    }

    #[test]
    fn test_task_record_from_issue() {
        let record = TaskRecord::from_issue(&issue());
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "annotations": [],
                "description": "(bw)PR#1 - this is a title .. https://one.com/#/c/1/",
                "priority": "M",
                "project": "nova",
                "gerritid": 1,
                "gerritstatus": "new",
                "gerritsummary": "this is a title",
                "gerriturl": "https://one.com/#/c/1/",
                "gerritbranch": "master",
                "gerrittopic": "test-topic",
                "gerritwip": 0,
                "tags": [],
            })
        );
    }

    #[test]
    fn test_task_record_work_in_progress() {
        let record = TaskRecord::from_issue(&Issue {
            work_in_progress: true,
            ..issue()
        });
        assert_eq!(record.wip, 1);
        assert_eq!(
            record.description,
            "(bw)PR#1 - this is a title .. https://one.com/#/c/1/"
        );
        assert_eq!(record, TaskRecord { wip: 1, ..TaskRecord::from_issue(&issue()) });
    }

    #[test]
    fn test_task_record_id_matches_change_number() {
        for number in [0, 1, 42, 1_000_000] {
            let record = TaskRecord::from_issue(&Issue {
                number: ChangeNumber::from(number),
                ..issue()
            });
            assert_eq!(u64::from(record.id), number);
            assert_eq!(serde_json::to_value(&record).unwrap()["gerritid"], json!(number));
        }
    }

    #[test]
    fn test_task_record_annotations() {
        let record = TaskRecord::from_issue(&Issue {
            messages: vec![
                message(Some("Iam Author"), "this is a message"),
                message(None, "Change has been successfully rebased"),
                message(Some("rbt"), "Patch Set 1: Code-Review+1"),
            ],
            ..issue()
        });
        assert_eq!(
            record.annotations,
            vec![
                "@Iam Author - this is a message".to_owned(),
                "@rbt - Patch Set 1: Code-Review+1".to_owned(),
            ]
        );
    }

    #[test]
    fn test_task_record_is_idempotent() {
        let issue = Issue {
            messages: vec![message(Some("Iam Author"), "this is a message")],
            ..issue()
        };
        let first = TaskRecord::from(&issue);
        let second = TaskRecord::from(&issue);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_task_record_fields_have_udas() {
        let value = serde_json::to_value(TaskRecord::from_issue(&issue())).unwrap();
        let mut prefixed = value
            .as_object()
            .unwrap()
            .keys()
            .filter(|key| key.starts_with("gerrit"))
            .cloned()
            .collect::<Vec<_>>();
        let mut udas = UDAS.iter().map(|uda| uda.name.to_owned()).collect::<Vec<_>>();
        prefixed.sort();
        udas.sort();
        assert_eq!(prefixed, udas);
    }

    #[test]
    fn test_uda_taskrc_lines() {
        assert_eq!(
            UDAS[0].taskrc_lines(),
            [
                "uda.gerritid.type=numeric".to_owned(),
                "uda.gerritid.label=Gerrit Change ID".to_owned(),
            ]
        );
    }
}
