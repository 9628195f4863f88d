use crate::utils::text::{find_all_overlapping, map_lines};
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["calibration", "parsing"])]
pub struct Solver;

const SPELLED_DIGITS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.trim_end().lines().collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_calibration_values(shared, digit_tokens)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_calibration_values(shared, |line| {
            digit_tokens(line).chain(spelled_tokens(line))
        })
    }
}

/// `(byte position, value)` of every decimal digit in `line`
fn digit_tokens(line: &str) -> impl Iterator<Item = (usize, u32)> + '_ {
    line.char_indices()
        .filter_map(|(pos, ch)| ch.to_digit(10).map(|digit| (pos, digit)))
}

/// `(byte position, value)` of every spelled-out digit in `line`, overlaps included
fn spelled_tokens(line: &str) -> impl Iterator<Item = (usize, u32)> + '_ {
    SPELLED_DIGITS
        .iter()
        .zip(1..)
        .flat_map(move |(word, value)| find_all_overlapping(line, word).map(move |pos| (pos, value)))
}

/// First and last token by position combined as a two-digit number
fn calibration_value(tokens: impl Iterator<Item = (usize, u32)>) -> anyhow::Result<u32> {
    let ((_, first), (_, last)) = tokens
        .minmax_by_key(|&(pos, _)| pos)
        .into_option()
        .ok_or_else(|| anyhow!("no digit found"))?;
    Ok(first * 10 + last)
}

fn sum_calibration_values<'a, I>(
    lines: &[&'a str],
    tokens: impl Fn(&'a str) -> I,
) -> Result<String, SolveError>
where
    I: Iterator<Item = (usize, u32)>,
{
    map_lines(lines.iter().copied(), |line| calibration_value(tokens(line)))
        .map(|values| values.iter().sum::<u32>().to_string())
        .map_err(|e| SolveError::SolveFailed(e.into()))
}
