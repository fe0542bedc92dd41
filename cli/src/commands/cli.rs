use std::path::PathBuf;

use boom_core::api::{RunConfig, DEFAULT_CONFIG_PATH, DEFAULT_TAIL_LINES};
use clap::Parser;

/// Run a command, mirror its output, and post the last lines to Slack when it fails.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Args {
    /// Lines of stdout and of stderr kept for the failure report.
    #[arg(long = "lines", env = "BOOM_TAIL_LINES", default_value_t = DEFAULT_TAIL_LINES)]
    pub tail_lines: usize,

    /// Channel config file (JSON, channel name -> {"recipients": [...]}).
    #[arg(long, env = "BOOM_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Command to run, followed by its arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Args {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            tail_lines: self.tail_lines,
            config_path: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_command() {
        let args = Args::try_parse_from(["boom"]).unwrap();
        assert!(args.command.is_empty());
        assert_eq!(args.run_config(), RunConfig::default());
    }

    #[test]
    fn options_before_command_are_ours() {
        let args = Args::try_parse_from(["boom", "--lines", "5", "--config", "ci.json", "ls", "-la"]).unwrap();
        assert_eq!(args.tail_lines, 5);
        assert_eq!(args.config, PathBuf::from("ci.json"));
        assert_eq!(args.command, vec!["ls", "-la"]);
    }

    #[test]
    fn everything_after_command_is_passed_through() {
        let args = Args::try_parse_from(["boom", "make", "--lines", "3", "-k"]).unwrap();
        assert_eq!(args.tail_lines, DEFAULT_TAIL_LINES);
        assert_eq!(args.command, vec!["make", "--lines", "3", "-k"]);
    }
}
