mod author;
mod change;
mod change_message;
mod change_number;
mod cli;
mod config;
mod endpoint;
mod error;
mod gerrit_host;
mod gerrit_query;
mod install_tracing;
mod issue;
mod query_result;
mod sync;
mod task_record;
mod task_table;
mod transport;

use calm_io::stdoutln;
use clap::Parser;
use cli::Opts;
use config::GerritConfig;
use install_tracing::install_tracing;
use miette::IntoDiagnostic;
use sync::GerritService;
use task_record::TaskRecord;
use task_record::UDAS;
use task_table::task_table;
use transport::HttpTransport;

fn fetch_tasks(opts: &Opts) -> miette::Result<Vec<TaskRecord>> {
    let config = GerritConfig::from_args(&opts.connection)?;
    let transport = HttpTransport::new(&config)?;
    let service = GerritService::new(config.host, config.query, transport);
    // Nothing is emitted unless every change maps cleanly.
    let tasks = service.issues()?.collect::<Result<Vec<_>, _>>()?;
    Ok(tasks)
}

fn main() -> miette::Result<()> {
    let opts = Opts::parse();
    install_tracing(&opts.log)?;

    match opts.command {
        cli::Command::Pull => {
            for task in fetch_tasks(&opts)? {
                let line = serde_json::to_string(&task).into_diagnostic()?;
                let _ = stdoutln!("{line}");
            }
        }
        cli::Command::List => {
            let tasks = fetch_tasks(&opts)?;
            let _ = stdoutln!("{}", task_table(&tasks));
        }
        cli::Command::Udas => {
            for uda in UDAS {
                for line in uda.taskrc_lines() {
                    let _ = stdoutln!("{line}");
                }
            }
        }
        cli::Command::Url => {
            let host = GerritConfig::host(&opts.connection)?;
            let query = GerritConfig::query(&opts.connection);
            let _ = stdoutln!("{}", host.endpoint(&query.endpoint()));
        }
    }

    Ok(())
}
