mod cli;
mod config;
mod platform;
mod query;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::{Cli, LogLevel};
use config::Config;

fn init_logging(level: LogLevel) {
    // stdout carries the JSON record; everything else goes to stderr
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(level == LogLevel::Debug)
        .with_line_number(level == LogLevel::Debug);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.directive())),
        )
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let config = Config::load(cli.config.as_deref()).context("invalid configuration")?;
    let config = cli.apply(config);
    debug!(log_level = ?cli.log_level, dry_run = cli.dry_run, "logger loaded");

    let output = query::query(&config.cmus, cli.dry_run).await;
    let record = cmus_status::render(&output, &config.render_options());

    println!("{}", record.to_json()?);
    Ok(())
}
