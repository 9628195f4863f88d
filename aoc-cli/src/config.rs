//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory holding `day_NN.txt` inputs
    pub input_dir: PathBuf,
    /// Explicit input file for the selected day
    pub input_override: Option<PathBuf>,
    /// Quiet mode
    pub quiet: bool,
    /// Number of `-v` flags
    pub verbosity: u8,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if args.input.is_some() && args.day.is_none() {
            return Err(CliError::Config("--input requires --day".to_string()));
        }

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args
                .tags
                .into_iter()
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
            input_dir: expand_tilde(&args.input_dir),
            input_override: args.input.as_deref().map(expand_tilde),
            quiet: args.quiet,
            verbosity: args.verbose,
        })
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Config {
        let args = Args::try_parse_from(std::iter::once("aoc").chain(argv.iter().copied())).unwrap();
        Config::from_args(args).unwrap()
    }

    #[test]
    fn test_log_filter_follows_verbosity() {
        assert_eq!(config(&[]).log_filter(), "warn");
        assert_eq!(config(&["-v"]).log_filter(), "info");
        assert_eq!(config(&["-vv"]).log_filter(), "debug");
        assert_eq!(config(&["-vvvv"]).log_filter(), "trace");
    }

    #[test]
    fn test_blank_tags_dropped() {
        assert_eq!(config(&["--tags", "parsing, ,calibration"]).tags, vec!["parsing", "calibration"]);
    }

    #[test]
    fn test_input_without_day_rejected() {
        let args = Args::try_parse_from(["aoc", "--input", "x.txt"]).unwrap();
        match Config::from_args(args) {
            Err(e @ CliError::Config(_)) => {
                assert_eq!(e.to_string(), "Configuration error: --input requires --day")
            }
            other => panic!("expected a configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_relative_paths_untouched() {
        let config = config(&["--input-dir", "data/inputs", "-d", "1", "-i", "x.txt"]);
        assert_eq!(config.input_dir, PathBuf::from("data/inputs"));
        assert_eq!(config.input_override, Some(PathBuf::from("x.txt")));
    }

    #[test]
    fn test_tilde_expanded_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("a/~/b")), PathBuf::from("a/~/b"));
    }
}
