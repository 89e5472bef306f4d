//! Configuration is validated before the first expansion.

use lock_tests::{detour, ALL_STRATEGIES};
use sextant_harness::{run_search, RunError};
use sextant_search::{ConfigError, RegistryError, RunContext, SearchError, StrategyRegistry};

fn config_error(strategy: &str, ctx: &RunContext) -> ConfigError {
    let registry = StrategyRegistry::standard();
    match run_search(&registry, strategy, ctx, &detour()) {
        Err(RunError::Search {
            source: SearchError::Config(err),
            ..
        }) => err,
        other => panic!("{strategy}: expected a configuration error, got {other:?}"),
    }
}

#[test]
fn depth_limited_requires_a_limit() {
    let err = config_error("depth_limited", &RunContext::new());
    assert!(matches!(err, ConfigError::Missing { key } if key == "depth_limit"));
}

#[test]
fn unparsable_depth_limit_is_rejected() {
    let err = config_error("depth_limited", &RunContext::new().with("depth_limit", "deep"));
    assert!(matches!(err, ConfigError::Invalid { key, value, .. }
        if key == "depth_limit" && value == "deep"));
}

#[test]
fn negative_numbers_are_not_unbounded() {
    let err = config_error("depth_limited", &RunContext::new().with("depth_limit", "-1"));
    assert!(matches!(err, ConfigError::Invalid { .. }));
    let err = config_error(
        "iterative_deepening",
        &RunContext::new().with("max_depth", "-1"),
    );
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn sma_star_rejects_an_empty_frontier_bound() {
    let err = config_error("sma*", &RunContext::new().with("max_frontier_size", "0"));
    assert!(matches!(err, ConfigError::Invalid { key, .. } if key == "max_frontier_size"));
}

#[test]
fn every_strategy_rejects_a_malformed_budget() {
    let ctx = RunContext::new()
        .with("max_expansions", "lots")
        .with("depth_limit", "4");
    for strategy in ALL_STRATEGIES {
        let err = config_error(strategy, &ctx);
        assert!(
            matches!(&err, ConfigError::Invalid { key, .. } if key == "max_expansions"),
            "{strategy}: {err}"
        );
    }
}

#[test]
fn unknown_strategy_lists_the_registered_names() {
    let registry = StrategyRegistry::standard();
    let err = run_search(&registry, "dijkstra", &RunContext::new(), &detour()).unwrap_err();
    let RunError::Registry(RegistryError::UnknownStrategy { name, known }) = err else {
        panic!("expected a registry error");
    };
    assert_eq!(name, "dijkstra");
    assert_eq!(known, lock_tests::ALL_STRATEGIES);
}
