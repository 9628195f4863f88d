use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, RegistryBuilder, SolveError,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 24, tags = ["test", "combined"])]
struct Tagged;

impl AocParser for Tagged {
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

impl PartSolver<1> for Tagged {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for Tagged {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2016, day = 25)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Untagged {
    fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[test]
fn test_plugins_auto_register() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    let solver = registry
        .create_solver(2016, 24, "5\n6\n7")
        .expect("Failed to create solver - was it registered?");
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "18");
    assert_eq!(solver.solve(2).unwrap().answer, "210");

    let solver = registry.create_solver(2016, 25, "abc").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
}

#[test]
fn test_tag_filter_selects_plugins() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"combined"))
        .unwrap()
        .build();

    assert!(registry.contains(2016, 24));
    assert!(!registry.contains(2016, 25));
}

#[test]
fn test_parse_error_surfaces_from_registry() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2016 && plugin.day == 24)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2016, 24, "5\nsix"),
        Err(aoc_solver::SolverError::ParseError(ParseError::InvalidFormat(_)))
    ));
}
