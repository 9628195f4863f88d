//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs both parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding puzzle inputs named day_NN.txt
    #[arg(long, value_name = "DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Read this file instead of the default input (requires --day)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.year, None);
        assert_eq!(args.day, None);
        assert_eq!(args.input_dir, PathBuf::from("inputs"));
        assert!(args.tags.is_empty());
        assert!(!args.quiet);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_full_selection() {
        let args = Args::try_parse_from([
            "aoc", "-y", "2023", "-d", "2", "-p", "1", "-t", "a,b", "-vv", "-q",
        ])
        .unwrap();
        assert_eq!(args.year, Some(2023));
        assert_eq!(args.day, Some(2));
        assert_eq!(args.part, Some(1));
        assert_eq!(args.tags, vec!["a", "b"]);
        assert_eq!(args.verbose, 2);
        assert!(args.quiet);
    }

    #[test]
    fn test_input_path_parsed() {
        let args = Args::try_parse_from(["aoc", "--input", "x.txt", "--day", "1"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("x.txt")));
        assert_eq!(args.day, Some(1));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
    }
}
