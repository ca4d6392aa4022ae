use std::time::Duration;

use miette::miette;
use secrecy::SecretString;

use crate::cli::ConnectionArgs;
use crate::gerrit_host::GerritHost;
use crate::gerrit_query::GerritQuery;

/// Everything needed to query one Gerrit server, gathered from the command line and environment.
#[derive(Debug, Clone)]
pub struct GerritConfig {
    pub host: GerritHost,
    pub username: String,
    pub password: SecretString,
    /// Passed straight through to the HTTP client.
    pub timeout: Option<Duration>,
    pub query: GerritQuery,
}

impl GerritConfig {
    /// The query to run, which needs no credentials to build.
    pub fn query(args: &ConnectionArgs) -> GerritQuery {
        let query = GerritQuery::new(args.query.iter().cloned()).start(args.start);
        match args.limit {
            Some(limit) => query.limit(limit),
            None => query,
        }
    }

    pub fn host(args: &ConnectionArgs) -> miette::Result<GerritHost> {
        args.base_uri
            .as_deref()
            .map(GerritHost::new)
            .ok_or_else(|| {
                miette!("No Gerrit server given; pass `--base-uri` or set `GERRIT_TASKS_BASE_URI`")
            })
    }

    pub fn from_args(args: &ConnectionArgs) -> miette::Result<Self> {
        let host = Self::host(args)?;
        let username = args.username.clone().ok_or_else(|| {
            miette!("No Gerrit username given; pass `--username` or set `GERRIT_TASKS_USERNAME`")
        })?;
        let password = args.password.clone().ok_or_else(|| {
            miette!("No Gerrit HTTP password given; set `GERRIT_TASKS_PASSWORD`")
        })?;

        Ok(Self {
            host,
            username,
            password,
            timeout: args.timeout.map(Duration::from_secs),
            query: Self::query(args),
        })
    }
}
