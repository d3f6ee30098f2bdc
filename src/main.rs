//! Command-line access to the Astute web service.
//!
//! Run with: `astute --config astute.yaml users NURSE`

use std::path::PathBuf;

use anyhow::{Context, Result};
use astute_client::AstuteClient;
use astute_client::client::HttpTransport;
use astute_client::config::ConfigLoader;
use astute_client::models::{QueryTimesheetParams, QueryUserParams};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Query users and timesheets from Astute Payroll.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML)
    #[arg(short, long, default_value = "astute.yaml")]
    config: PathBuf,

    /// Log filter (e.g. "info", "astute_client=debug")
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List users whose job code contains the given text
    Users {
        /// Job code substring
        job_code: String,
    },
    /// List the timesheets of a user
    Timesheets {
        /// The user's UID
        uid: String,
    },
    /// Show a single timesheet
    Timesheet {
        /// The timesheet's TSID
        tsid: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = ConfigLoader::load(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?
        .into_config();
    info!(endpoint = %config.auth.api_url, "Configuration loaded");

    let transport =
        HttpTransport::from_settings(&config.transport).context("Failed to build HTTP client")?;
    let client = AstuteClient::new(config.auth, transport);

    let output = match args.command {
        Command::Users { job_code } => {
            let result = client.query_user(&QueryUserParams { job_code }).await?;
            serde_json::to_string_pretty(&result.users)?
        }
        Command::Timesheets { uid } => {
            let result = client
                .query_timesheet_by_job(&QueryTimesheetParams { uid })
                .await?;
            serde_json::to_string_pretty(&result.timesheets)?
        }
        Command::Timesheet { tsid } => {
            let result = client.query_timesheet_by_id(&tsid).await?;
            serde_json::to_string_pretty(&result.timesheets)?
        }
    };

    println!("{}", output);
    Ok(())
}
