//! Runs `cmus-remote -Q` and hands back whatever it printed.
//!
//! Any failure (binary missing, cmus not running, timeout) collapses into an
//! empty string; the parser turns that into the `unknown` status.

use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::CmusConfig;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("failed to spawn {0}: {1}")]
    Spawn(String, std::io::Error),
    #[error("failed to wait for {0}: {1}")]
    Wait(String, std::io::Error),
    #[error("{command} exited with {status}")]
    Exit {
        command: String,
        status: std::process::ExitStatus,
        output: String,
    },
    #[error("{0} did not finish within {1:?}")]
    Timeout(String, Duration),
}

/// Human-readable command line, used for logging only.
pub fn command_line(cfg: &CmusConfig) -> String {
    std::iter::once(cfg.remote_bin.as_str())
        .chain(cfg.query_args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Query the player. With `dry_run` the command is only logged.
pub async fn query(cfg: &CmusConfig, dry_run: bool) -> String {
    let cmd = command_line(cfg);
    if dry_run {
        info!(dry_run = %cmd, "running cmus query");
        return String::new();
    }

    match run_remote(cfg).await {
        Ok(output) => output,
        Err(QueryError::Exit { command, status, output }) => {
            debug!(err = %status, command = %command, output = %output, "command failed");
            String::new()
        }
        Err(e) => {
            debug!(err = %e, "command failed");
            String::new()
        }
    }
}

/// Spawn the remote client and collect stdout followed by stderr.
pub async fn run_remote(cfg: &CmusConfig) -> Result<String, QueryError> {
    let cmd = command_line(cfg);
    let timeout = Duration::from_secs(cfg.timeout_secs);

    let child = tokio::process::Command::new(&cfg.remote_bin)
        .args(&cfg.query_args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| QueryError::Spawn(cfg.remote_bin.clone(), e))?;

    let out = tokio::time::timeout(timeout, child.wait_with_output())
        .await
        .map_err(|_| QueryError::Timeout(cmd.clone(), timeout))?
        .map_err(|e| QueryError::Wait(cmd.clone(), e))?;

    let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
    output.push_str(&String::from_utf8_lossy(&out.stderr));

    if !out.status.success() {
        return Err(QueryError::Exit {
            command: cmd,
            status: out.status,
            output,
        });
    }
    debug!(command = %cmd, bytes = output.len(), "cmus query finished");
    Ok(output)
}
