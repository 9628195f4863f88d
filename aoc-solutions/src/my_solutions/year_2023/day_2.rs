use crate::utils::text::map_lines;
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["bag-count", "parsing"])]
pub struct Solver;

/// Number of cubes per color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubeCounts {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl CubeCounts {
    /// What the bag holds in part 1
    pub const BAG: Self = Self {
        red: 12,
        green: 13,
        blue: 14,
    };

    fn max(self, other: Self) -> Self {
        Self {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    pub fn fits_within(&self, bag: &Self) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    /// `None` when the product does not fit in a `u64`
    pub fn power(&self) -> Option<u64> {
        u64::from(self.red)
            .checked_mul(u64::from(self.green))?
            .checked_mul(u64::from(self.blue))
    }
}

/// One record: the game id and the most cubes of each color seen in any round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub max: CubeCounts,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        map_lines(input.trim_end().lines(), parse_game)
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|game| game.max.fits_within(&CubeCounts::BAG))
            .map(|game| u64::from(game.id))
            .sum::<u64>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .enumerate()
            .try_fold(0u64, |total, (line_idx, game)| {
                game.max
                    .power()
                    .and_then(|power| total.checked_add(power))
                    .ok_or_else(|| anyhow!("(line {}) power of game {} overflows", line_idx + 1, game.id))
            })
            .map(|total| total.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

/// `Game <id>: <count> <color>, ...; ...`
fn parse_game(line: &str) -> anyhow::Result<Game> {
    let (header, rounds) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' after game id"))?;

    let id = match header.split_whitespace().collect_tuple() {
        Some(("Game", id)) => id
            .parse::<u32>()
            .map_err(|e| anyhow!("invalid game id {id:?}: {e}"))?,
        _ => bail!("expected \"Game <id>\", found {header:?}"),
    };

    let max = rounds
        .split(';')
        .flat_map(|round| round.split(','))
        .map(parse_cube_count)
        .fold_ok(CubeCounts::default(), CubeCounts::max)?;

    Ok(Game { id, max })
}

/// `<count> <color>`
fn parse_cube_count(entry: &str) -> anyhow::Result<CubeCounts> {
    let Some((count, color)) = entry.split_whitespace().collect_tuple() else {
        bail!("expected \"<count> <color>\", found {:?}", entry.trim());
    };
    let count = count
        .parse::<u32>()
        .map_err(|e| anyhow!("invalid count {count:?}: {e}"))?;

    Ok(match color {
        "red" => CubeCounts {
            red: count,
            ..Default::default()
        },
        "green" => CubeCounts {
            green: count,
            ..Default::default()
        },
        "blue" => CubeCounts {
            blue: count,
            ..Default::default()
        },
        other => bail!("unknown color {other:?}"),
    })
}
