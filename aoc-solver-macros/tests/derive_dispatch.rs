use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct ThreeParts;

impl AocParser for ThreeParts {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for ThreeParts {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

// Fails on empty input so error propagation through the dispatch can be checked
impl PartSolver<2> for ThreeParts {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.is_empty() {
            Err(SolveError::SolveFailed("Empty input".into()))
        } else {
            Ok(shared.iter().product::<i32>().to_string())
        }
    }
}

impl PartSolver<3> for ThreeParts {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().max().copied().unwrap_or_default().to_string())
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct Borrowing;

impl AocParser for Borrowing {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.split(',').collect())
    }
}

impl PartSolver<1> for Borrowing {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.concat())
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(ThreeParts::PARTS, 3);
    assert_eq!(Borrowing::PARTS, 1);
}

#[test]
fn test_each_part_dispatches_to_its_solver() {
    let shared = ThreeParts::parse("2\n3\n4").unwrap();
    assert_eq!(ThreeParts::solve_part(&shared, 1).unwrap(), "9");
    assert_eq!(ThreeParts::solve_part(&shared, 2).unwrap(), "24");
    assert_eq!(ThreeParts::solve_part(&shared, 3).unwrap(), "4");
}

#[test]
fn test_unknown_part_not_implemented() {
    let shared = ThreeParts::parse("1").unwrap();
    assert!(matches!(
        ThreeParts::solve_part(&shared, 4),
        Err(SolveError::PartNotImplemented(4))
    ));
    assert!(matches!(
        ThreeParts::solve_part_checked_range(&shared, 4),
        Err(SolveError::PartOutOfRange(4))
    ));
}

#[test]
fn test_part_error_propagates() {
    let shared = ThreeParts::parse("").unwrap();
    let result = ThreeParts::solve_part(&shared, 2);
    match result {
        Err(SolveError::SolveFailed(e)) => assert_eq!(e.to_string(), "Empty input"),
        other => panic!("expected SolveFailed, got {other:?}"),
    }
}

#[test]
fn test_borrowed_shared_data() {
    let input = String::from("ab,cd,ef");
    let shared = Borrowing::parse(&input).unwrap();
    assert_eq!(Borrowing::solve_part(&shared, 1).unwrap(), "abcdef");
}
