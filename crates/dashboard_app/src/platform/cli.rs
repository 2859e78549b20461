use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dashboard_logging::LogDestination;

use super::config::Deployment;

#[derive(Debug, Parser)]
#[command(name = "dashboard")]
#[command(about = "Control panel for the offer-mining backend")]
pub struct Cli {
    /// RON config file (defaults to ./dashboard.ron when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Named backend deployment
    #[arg(long, value_enum)]
    pub deployment: Option<Deployment>,

    /// Explicit backend base URL; wins over --deployment
    #[arg(long)]
    pub base_url: Option<String>,

    /// Re-fetch status and favorites every N seconds
    #[arg(long)]
    pub refresh_secs: Option<u64>,

    /// Where log output goes
    #[arg(long, value_enum, default_value = "file")]
    pub log: LogTarget,

    /// Log file path (defaults to ./dashboard.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log debug-level messages
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_file_logging_without_overrides() {
        let cli = Cli::try_parse_from(["dashboard"]).unwrap();
        assert_eq!(cli.log, LogTarget::File);
        assert!(cli.deployment.is_none());
        assert!(cli.base_url.is_none());
        assert_eq!(cli.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn parses_deployment_and_base_url() {
        let cli = Cli::try_parse_from([
            "dashboard",
            "--deployment",
            "development",
            "--base-url",
            "http://localhost:5000",
            "--refresh-secs",
            "30",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.deployment, Some(Deployment::Development));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:5000"));
        assert_eq!(cli.refresh_secs, Some(30));
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
    }
}
