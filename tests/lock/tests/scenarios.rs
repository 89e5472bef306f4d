//! Concrete scenarios with fixed expected answers.

use lock_tests::{detour, ladder, maze, room, three_open, two_by_two};
use sextant_harness::{run_search, GridSpace, RunError};
use sextant_search::{RunContext, SearchError, StrategyRegistry};

#[test]
fn a_star_crosses_two_by_two_grid_in_two_steps() {
    let registry = StrategyRegistry::standard();
    let report = run_search(&registry, "a*", &RunContext::new(), &two_by_two()).unwrap();
    assert_eq!(report.total_cost, 2);
    assert_eq!(report.steps, 2);
    let route: Vec<&str> = report.path.iter().map(String::as_str).collect();
    assert!(
        route == ["(0,0)", "(1,0)", "(1,1)"] || route == ["(0,0)", "(0,1)", "(1,1)"],
        "unexpected route {route:?}"
    );
}

#[test]
fn uniform_cost_takes_the_cheap_detour() {
    let registry = StrategyRegistry::standard();
    let report = run_search(&registry, "uniform_cost", &RunContext::new(), &detour()).unwrap();
    assert_eq!(report.path, ["A", "B", "C"]);
    assert_eq!(report.total_cost, 2);
}

#[test]
fn greedy_follows_the_heuristic_past_the_cheaper_route() {
    let registry = StrategyRegistry::standard();
    let report =
        run_search(&registry, "greedy_best_first", &RunContext::new(), &ladder()).unwrap();
    assert_eq!(report.path, ["S", "D", "G"]);
    assert_eq!(report.total_cost, 7);
}

#[test]
fn a_star_avoids_the_costly_centre_of_the_room() {
    let registry = StrategyRegistry::standard();
    let report = run_search(&registry, "a*", &RunContext::new(), &room()).unwrap();
    assert_eq!(report.total_cost, 4);
    assert!(!report.path.iter().any(|cell| cell == "(1,1)"));
}

#[test]
fn sma_star_with_two_slots_is_optimal_or_bounded() {
    let registry = StrategyRegistry::standard();
    let ctx = RunContext::new()
        .with("max_frontier_size", "2")
        .with("max_expansions", "10000");
    match run_search(&registry, "sma*", &ctx, &three_open()) {
        Ok(report) => {
            assert_eq!(report.total_cost, 2);
            assert_eq!(report.path, ["S", "C", "G"]);
            assert!(report.frontier_high_water <= 2);
        }
        Err(err) => assert!(
            matches!(
                err.search_error(),
                Some(
                    SearchError::BoundExhausted {
                        max_frontier_size: 2,
                        ..
                    } | SearchError::ExpansionBudgetExceeded { .. }
                )
            ),
            "{err}"
        ),
    }
}

#[test]
fn walled_off_goal_exhausts_every_complete_strategy() {
    let env = GridSpace::from_rows("walled", &["*.x", "..x", "xx!"]).unwrap();
    let registry = StrategyRegistry::standard();
    for strategy in ["a*", "breadth_first", "depth_first", "uniform_cost", "greedy_best_first"] {
        let err = run_search(&registry, strategy, &RunContext::new(), &env).unwrap_err();
        assert!(
            matches!(err.search_error(), Some(SearchError::Exhausted { .. })),
            "{strategy}: {err}"
        );
    }
}

#[test]
fn iterative_deepening_reports_its_ceiling() {
    let registry = StrategyRegistry::standard();
    let ctx = RunContext::new().with("max_depth", "3");
    let err = run_search(&registry, "iterative_deepening", &ctx, &maze()).unwrap_err();
    assert!(
        matches!(
            err.search_error(),
            Some(SearchError::MaxDepthExceeded { max_depth: 3, .. })
        ),
        "{err}"
    );
}

#[test]
fn expansion_budget_stops_a_long_search() {
    let registry = StrategyRegistry::standard();
    let ctx = RunContext::new().with("max_expansions", "3");
    let err = run_search(&registry, "breadth_first", &ctx, &maze()).unwrap_err();
    assert!(matches!(
        err,
        RunError::Search {
            source: SearchError::ExpansionBudgetExceeded { max_expansions: 3 },
            ..
        }
    ));
}
