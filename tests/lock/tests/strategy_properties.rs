//! Properties every strategy must hold on spaces with known answers.
//!
//! Reference figures come from brute-force enumeration of every simple path
//! through the same environment.

use lock_tests::{
    brute_force, context_for, detour, ladder, layered, maze, room, three_open,
    two_by_two, ALL_STRATEGIES,
};
use sextant_harness::run_search;
use sextant_kernel::Environment;
use sextant_search::strategy::{
    AStar, BreadthFirst, DepthLimited, IterativeDeepening, RecursiveBestFirst, SmaStar,
    UniformCost,
};
use sextant_search::{RunContext, SearchError, Strategy, StrategyRegistry};

fn acyclic_spaces() -> Vec<Box<dyn Environment>> {
    vec![
        Box::new(detour()),
        Box::new(ladder()),
        Box::new(three_open()),
        Box::new(layered(3, 3)),
        Box::new(layered(4, 2)),
        Box::new(layered(1, 5)),
    ]
}

// ---------------------------------------------------------------------------
// Termination
// ---------------------------------------------------------------------------

#[test]
fn every_strategy_reaches_the_goal_on_acyclic_spaces() {
    let registry = StrategyRegistry::standard();
    for env in acyclic_spaces() {
        let reference = brute_force(env.as_ref()).expect("goal reachable");
        let start = env.start();
        for strategy in ALL_STRATEGIES {
            let report = run_search(&registry, strategy, &context_for(strategy), env.as_ref())
                .unwrap_or_else(|e| panic!("{strategy} on {}: {e}", env.name()));
            assert_eq!(report.path.first().map(String::as_str), Some(start.name()));
            assert_eq!(report.steps + 1, report.path.len());
            assert!(report.total_cost >= reference.min_cost, "{strategy} on {}", env.name());
            assert!(report.steps >= reference.min_steps, "{strategy} on {}", env.name());
        }
    }
}

#[test]
fn reported_cost_is_the_sum_of_edge_costs_along_the_path() {
    for env in acyclic_spaces() {
        for strategy in [&AStar as &dyn Strategy, &BreadthFirst, &UniformCost] {
            let outcome = strategy.run(&RunContext::new(), env.as_ref()).unwrap();
            let tree = outcome.tree();
            let summed: i64 = tree
                .path_to(outcome.goal())
                .into_iter()
                .map(|id| tree.edge_cost(id))
                .sum();
            assert_eq!(outcome.total_cost(), summed);
            assert!(env.is_goal(outcome.goal_node()));
        }
    }
}

// ---------------------------------------------------------------------------
// Optimality
// ---------------------------------------------------------------------------

#[test]
fn a_star_and_uniform_cost_are_cost_optimal() {
    for env in acyclic_spaces() {
        let reference = brute_force(env.as_ref()).unwrap();
        let a_star = AStar.run(&RunContext::new(), env.as_ref()).unwrap();
        let uniform = UniformCost.run(&RunContext::new(), env.as_ref()).unwrap();
        assert_eq!(a_star.total_cost(), reference.min_cost, "a* on {}", env.name());
        assert_eq!(uniform.total_cost(), reference.min_cost, "ucs on {}", env.name());
    }
}

#[test]
fn breadth_first_takes_fewest_steps_regardless_of_cost() {
    for env in acyclic_spaces() {
        let reference = brute_force(env.as_ref()).unwrap();
        let outcome = BreadthFirst.run(&RunContext::new(), env.as_ref()).unwrap();
        assert_eq!(outcome.steps(), reference.min_steps, "bfs on {}", env.name());
    }
    let outcome = BreadthFirst.run(&RunContext::new(), &ladder()).unwrap();
    assert_eq!(outcome.path(), ["S", "D", "G"]);
    assert_eq!(outcome.total_cost(), 7);
}

#[test]
fn rbfs_matches_a_star_cost() {
    let mut spaces = acyclic_spaces();
    spaces.push(Box::new(two_by_two()));
    spaces.push(Box::new(room()));
    for env in spaces {
        let a_star = AStar.run(&RunContext::new(), env.as_ref()).unwrap();
        let rbfs = RecursiveBestFirst
            .run(&context_for("rbfs"), env.as_ref())
            .unwrap();
        assert_eq!(rbfs.total_cost(), a_star.total_cost(), "rbfs on {}", env.name());
    }
}

#[test]
fn a_star_matches_uniform_cost_on_the_maze() {
    let a_star = AStar.run(&RunContext::new(), &maze()).unwrap();
    let uniform = UniformCost.run(&RunContext::new(), &maze()).unwrap();
    assert_eq!(a_star.total_cost(), uniform.total_cost());
    assert!(a_star.iterations() <= uniform.iterations());
}

#[test]
fn sma_star_with_generous_bound_matches_a_star() {
    let mut spaces = acyclic_spaces();
    spaces.push(Box::new(maze()));
    for env in spaces {
        let a_star = AStar.run(&RunContext::new(), env.as_ref()).unwrap();
        let sma = SmaStar.run(&context_for("sma*"), env.as_ref()).unwrap();
        assert_eq!(sma.total_cost(), a_star.total_cost(), "sma* on {}", env.name());
    }
}

#[test]
fn sma_star_bound_equal_to_longest_solution_is_enough() {
    // The longest S-to-G path in the ladder has four edges.
    let ctx = RunContext::new().with("max_frontier_size", "4");
    let outcome = SmaStar.run(&ctx, &ladder()).unwrap();
    assert_eq!(outcome.path(), ["S", "A", "B", "C", "G"]);
    assert_eq!(outcome.total_cost(), 4);
    assert!(outcome.stats().frontier_high_water <= 4);
}

#[test]
fn sma_star_never_reports_a_costlier_goal_under_tight_bounds() {
    let spaces: Vec<Box<dyn Environment>> = vec![
        Box::new(ladder()),
        Box::new(three_open()),
        Box::new(layered(3, 3)),
    ];
    for env in spaces {
        let optimal = brute_force(env.as_ref()).unwrap().min_cost;
        for bound in 1..=6 {
            let ctx = RunContext::new()
                .with("max_frontier_size", bound.to_string())
                .with("max_expansions", "20000");
            match SmaStar.run(&ctx, env.as_ref()) {
                Ok(outcome) => assert_eq!(
                    outcome.total_cost(),
                    optimal,
                    "sma* bound {bound} on {}",
                    env.name()
                ),
                Err(err) => assert!(
                    matches!(
                        err,
                        SearchError::BoundExhausted { max_frontier_size, .. }
                            if max_frontier_size == bound
                    ) || matches!(err, SearchError::ExpansionBudgetExceeded { .. }),
                    "sma* bound {bound} on {}: {err}",
                    env.name()
                ),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Depth bounds
// ---------------------------------------------------------------------------

#[test]
fn depth_limited_never_expands_at_or_below_the_limit() {
    let env = layered(3, 3);
    // G sits at depth 4, so it can only be queued from limit 5 on.
    for limit in 0..=7_usize {
        let ctx = RunContext::new().with("depth_limit", limit.to_string());
        match DepthLimited.run(&ctx, &env) {
            Ok(outcome) => {
                assert!(limit >= 5, "goal found under limit {limit}");
                let tree = outcome.tree();
                for id in tree.ids() {
                    if let Some(parent) = tree.parent(id) {
                        assert!(tree.depth(parent) < limit, "expanded at depth >= {limit}");
                    }
                }
                assert!(outcome.steps() < limit);
            }
            Err(err) => {
                assert!(limit < 5, "limit {limit} failed: {err}");
                assert!(matches!(err, SearchError::Exhausted { .. }));
            }
        }
    }
}

#[test]
fn iterative_deepening_matches_depth_limited_at_the_first_sufficient_limit() {
    for env in acyclic_spaces() {
        let first_success = (0..=16_usize)
            .find_map(|limit| {
                let ctx = RunContext::new().with("depth_limit", limit.to_string());
                DepthLimited.run(&ctx, env.as_ref()).ok()
            })
            .expect("goal within depth 16");
        let deepening = IterativeDeepening
            .run(&RunContext::new(), env.as_ref())
            .unwrap();
        assert_eq!(deepening.path(), first_success.path(), "on {}", env.name());
        assert_eq!(deepening.total_cost(), first_success.total_cost());
        assert!(deepening.iterations() >= first_success.iterations());
    }
}
