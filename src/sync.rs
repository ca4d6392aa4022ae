use crate::change::Change;
use crate::error::SyncError;
use crate::gerrit_host::GerritHost;
use crate::gerrit_query::GerritQuery;
use crate::issue::Issue;
use crate::query_result::QueryResult;
use crate::task_record::TaskRecord;
use crate::transport::Transport;

/// Turns the changes matching a query into tasks.
#[derive(Debug)]
pub struct GerritService<T> {
    host: GerritHost,
    query: GerritQuery,
    transport: T,
}

impl<T: Transport> GerritService<T> {
    pub fn new(host: GerritHost, query: GerritQuery, transport: T) -> Self {
        Self {
            host,
            query,
            transport,
        }
    }

    /// The URL [`Self::issues`] fetches.
    pub fn url(&self) -> String {
        self.host.endpoint(&self.query.endpoint())
    }

    /// Run the query and lazily map each change to a task.
    ///
    /// Every call fetches again. Fetch and parse failures are returned here; a change missing a
    /// required field is yielded as an error by the iterator, and callers should abort the whole
    /// pass on it rather than skipping the change.
    #[tracing::instrument(level = "debug", skip(self), fields(host = %self.host))]
    pub fn issues(&self) -> Result<Issues<'_>, SyncError> {
        let url = self.url();
        let body = self
            .transport
            .get(&url)
            .map_err(|source| SyncError::Transport {
                url: url.clone(),
                source,
            })?;
        let result = QueryResult::from_body(&body)?;

        tracing::info!(changes = result.changes.len(), "Fetched changes");
        if result.more_changes() {
            tracing::warn!(
                changes = result.changes.len(),
                "Gerrit has more matching changes than it returned; raise `--limit` to sync them all"
            );
        }

        Ok(Issues {
            host: &self.host,
            changes: result.changes.into_iter(),
        })
    }
}

/// The tasks from one [`GerritService::issues`] call.
#[derive(Debug)]
pub struct Issues<'a> {
    host: &'a GerritHost,
    changes: std::vec::IntoIter<Change>,
}

impl Iterator for Issues<'_> {
    type Item = Result<TaskRecord, SyncError>;

    fn next(&mut self) -> Option<Self::Item> {
        let change = self.changes.next()?;
        Some(
            Issue::from_change(change, self.host)
                .map(|issue| TaskRecord::from_issue(&issue))
                .map_err(SyncError::from),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.changes.size_hint()
    }
}
