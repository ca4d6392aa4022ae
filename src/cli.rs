use std::convert::Infallible;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use secrecy::SecretString;

use crate::gerrit_query::REVIEWER_QUERY;

/// Sync open Gerrit reviews into a task database.
#[derive(Debug, Clone, Parser)]
#[command(version, author, about)]
#[command(max_term_width = 100, disable_help_subcommand = true)]
pub struct Opts {
    /// Log filter directives, of the form `target[span{field=value}]=level`, where all components
    /// except the level are optional.
    ///
    /// Try `debug` or `trace`.
    #[arg(long, default_value = "info", env = "GERRIT_TASKS_LOG", global = true)]
    pub log: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Where and how to query Gerrit.
#[derive(Debug, Clone, Args)]
pub struct ConnectionArgs {
    /// The Gerrit server, e.g. `https://review.opendev.org`.
    #[arg(long, env = "GERRIT_TASKS_BASE_URI", global = true)]
    pub base_uri: Option<String>,

    /// Your Gerrit username.
    #[arg(long, env = "GERRIT_TASKS_USERNAME", global = true)]
    pub username: Option<String>,

    /// Your Gerrit HTTP password, from the "HTTP Credentials" settings page.
    #[arg(
        long,
        env = "GERRIT_TASKS_PASSWORD",
        hide_env_values = true,
        value_parser = parse_secret,
        global = true
    )]
    pub password: Option<SecretString>,

    /// HTTP request timeout, in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Search operators selecting the changes to sync; ANDed together.
    #[arg(
        long = "query",
        value_name = "TERM",
        default_values = REVIEWER_QUERY,
        global = true
    )]
    pub query: Vec<String>,

    /// Maximum number of changes to fetch.
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    /// Number of matching changes to skip, for paging through large result sets.
    #[arg(long, default_value_t = 0, global = true)]
    pub start: usize,
}

fn parse_secret(value: &str) -> Result<SecretString, Infallible> {
    Ok(SecretString::new(value.to_owned()))
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch reviews and print one JSON task per line, for the task store to merge.
    Pull,
    /// Fetch reviews and show them as a table.
    List,
    /// Print the `taskrc` user-defined attributes the tasks use.
    Udas,
    /// Print the URL `pull` would fetch, without fetching it.
    Url,
}
