use std::{future::Future, io::Write};

use clap::{ArgAction, Parser};
use dotenvy::dotenv;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    configs::{AwsEnvConfig, Configs, SsmStoreConfig, loaders::environment::env_or},
    domain::{OutputFormat, ParameterPageRequest},
    error::AwsEnvError,
    exporter::{ExportSummary, export_variables},
    storage::{adapters::ssm_storage::SsmStorage, repository::ParameterStore},
};

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Print AWS Parameter Store parameters under $AWS_ENV_PATH as environment variables",
    long_about = None
)]
pub struct Args {
    /// Include parameters nested below sub-paths of AWS_ENV_PATH
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub recursive: bool,

    /// Output format: exports, dotenv, dotenvnoquotes, ignorebreaklines or onlyvalue
    #[arg(long, default_value = "exports")]
    pub format: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// AWS_ENV_PATH was not set, nothing was requested.
    Skipped,
    Exported(ExportSummary),
}

/// Gate, validate, connect, export, in that order. `connect` is only invoked
/// once the path is set and the format is known to be valid.
pub async fn run<S, F, Fut, W>(
    config: AwsEnvConfig,
    args: &Args,
    connect: F,
    out: &mut W,
) -> Result<RunOutcome, AwsEnvError>
where
    S: ParameterStore,
    F: FnOnce(SsmStoreConfig) -> Fut,
    Fut: Future<Output = anyhow::Result<S>>,
    W: Write,
{
    let Some(path) = config.env_path else {
        log_skipped();
        return Ok(RunOutcome::Skipped);
    };

    let format: OutputFormat = args.format.parse().map_err(AwsEnvError::InvalidFormat)?;

    let store = connect(config.store_config)
        .await
        .map_err(AwsEnvError::Connect)?;

    debug!(path = path.as_str(), recursive = args.recursive, %format, "Exporting parameters");

    let summary = export_variables(
        &store,
        ParameterPageRequest::new(path, args.recursive),
        format,
        out,
    )
    .await?;

    Ok(RunOutcome::Exported(summary))
}

fn log_skipped() {
    info!("aws-env running locally, without AWS_ENV_PATH");
}

fn setup_logging() {
    // stdout carries the exported variables, so logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env_or("RUST_LOG", "info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();
}

pub async fn start() {
    dotenv().ok();

    setup_logging();

    let config = match AwsEnvConfig::load().await {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configs. Original error is: {}", e);
            std::process::exit(1);
        }
    };

    // without a path, arguments are never looked at
    if config.env_path.is_none() {
        log_skipped();
        return;
    }

    let args = Args::parse();

    let mut out = std::io::stdout();

    match run(config, &args, SsmStorage::new, &mut out).await {
        Ok(RunOutcome::Skipped) => {}
        Ok(RunOutcome::Exported(summary)) => {
            debug!(
                pages = summary.pages,
                parameters = summary.parameters,
                "Export finished"
            );
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
