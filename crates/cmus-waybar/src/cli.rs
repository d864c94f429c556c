use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    /// `EnvFilter` directive. tracing has no fatal level, so fatal keeps errors only.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error | Self::Fatal => "error",
        }
    }
}

/// Print cmus playback state as a waybar custom-module JSON object.
#[derive(Parser, Debug)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Append a progress bar to the output text
    #[arg(long)]
    pub progress_bar: bool,

    /// Width of the progress bar in characters [default: 20]
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub progress_bar_width: Option<u16>,

    /// Logging level (written to stderr)
    #[arg(long = "log", value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log the cmus query instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Config file [default: ~/.config/cmus-waybar/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Flags given on the command line take precedence over the config file.
    pub fn apply(&self, mut config: Config) -> Config {
        if self.progress_bar {
            config.display.progress_bar = true;
        }
        if let Some(width) = self.progress_bar_width {
            config.display.progress_bar_width = width;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cmus-waybar"]).unwrap();
        assert!(!cli.progress_bar);
        assert!(!cli.dry_run);
        assert_eq!(cli.progress_bar_width, None);
        assert_eq!(cli.log_level, LogLevel::Info);
        assert_eq!(cli.apply(Config::default()), Config::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "cmus-waybar",
            "--progress-bar",
            "--progress-bar-width",
            "8",
            "--log",
            "debug",
            "--dry-run",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.log_level, LogLevel::Debug);

        let opts = cli.apply(Config::default()).render_options();
        assert!(opts.progress_bar);
        assert_eq!(opts.bar_width, 8);
    }

    #[test]
    fn test_config_kept_when_flag_absent() {
        let mut config = Config::default();
        config.display.progress_bar = true;
        config.display.progress_bar_width = 30;

        let cli = Cli::try_parse_from(["cmus-waybar"]).unwrap();
        let opts = cli.apply(config).render_options();
        assert!(opts.progress_bar);
        assert_eq!(opts.bar_width, 30);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        assert!(Cli::try_parse_from(["cmus-waybar", "--log", "verbose"]).is_err());
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(Cli::try_parse_from(["cmus-waybar", "--progress-bar-width", "0"]).is_err());
    }

    #[test]
    fn test_fatal_maps_to_error() {
        assert_eq!(LogLevel::Fatal.directive(), "error");
    }
}
