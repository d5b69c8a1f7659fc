//! Cross-strategy tests.
//!
//! Every strategy must agree on every index, and the cached strategies must
//! keep and reuse what they computed.

use fibmemo::{EvalError, Evaluate, Evaluator, EvaluatorConfig, Strategy};

fn all_evaluators() -> Vec<Evaluator> {
    Strategy::ALL.into_iter().map(Evaluator::new).collect()
}

fn cached_evaluators() -> Vec<Evaluator> {
    vec![
        Evaluator::new(Strategy::Memoized),
        Evaluator::with_config(EvaluatorConfig::new(Strategy::Memoized).with_seed_base_cases(false)),
        Evaluator::new(Strategy::Iterative),
    ]
}

/// Every cached `(index, value)` pair, in index order.
fn snapshot(evaluator: &Evaluator) -> Vec<(usize, i64)> {
    match evaluator {
        Evaluator::Naive(_) => vec![],
        Evaluator::Memoized(e) => e.cache().entries(),
        Evaluator::Iterative(e) => e.cache().entries(),
    }
}

// ─── Known Values ──────────────────────────────────────────────────────────────

#[test]
fn base_cases() {
    for mut e in all_evaluators() {
        assert_eq!(e.evaluate(0), Ok(0), "{}", e.strategy());
        assert_eq!(e.evaluate(1), Ok(1), "{}", e.strategy());
    }
}

#[test]
fn known_values() {
    for mut e in all_evaluators() {
        assert_eq!(e.evaluate(10), Ok(55), "{}", e.strategy());
        assert_eq!(e.evaluate(20), Ok(6765), "{}", e.strategy());
    }
}

#[test]
fn index_42() {
    for mut e in all_evaluators() {
        assert_eq!(e.evaluate(42), Ok(267914296), "{}", e.strategy());
    }
}

#[test]
fn strategies_agree() {
    let mut evaluators = all_evaluators();
    for n in 0..=25 {
        let values: Vec<i64> = evaluators.iter_mut().map(|e| e.evaluate(n).unwrap()).collect();
        assert!(values.windows(2).all(|w| w[0] == w[1]), "n = {}: {:?}", n, values);
        assert_eq!(values[0], fibmemo::fibonacci(n as u64));
    }
}

#[test]
fn recurrence_law() {
    for mut e in cached_evaluators() {
        for n in 2..=150 {
            let a = e.evaluate(n - 1).unwrap();
            let b = e.evaluate(n - 2).unwrap();
            assert_eq!(e.evaluate(n).unwrap(), a.wrapping_add(b), "n = {}", n);
        }
    }
}

// ─── Overflow ──────────────────────────────────────────────────────────────────

#[test]
fn largest_exact_term() {
    for mut e in cached_evaluators() {
        assert_eq!(e.evaluate(92), Ok(7540113804746346429));
    }
}

#[test]
fn overflow_wraps_around() {
    for mut e in cached_evaluators() {
        let f91 = e.evaluate(91).unwrap();
        let f92 = e.evaluate(92).unwrap();
        let f93 = e.evaluate(93).unwrap();
        assert_eq!(f93, f92.wrapping_add(f91));
        assert!(f93 < 0);
    }
}

// ─── Invalid Index ─────────────────────────────────────────────────────────────

#[test]
fn negative_index_rejected() {
    for mut e in all_evaluators() {
        assert_eq!(e.evaluate(-1), Err(EvalError::InvalidIndex(-1)), "{}", e.strategy());
        assert_eq!(e.evaluate(i64::MIN), Err(EvalError::InvalidIndex(i64::MIN)));
    }
}

#[test]
fn negative_index_leaves_cache_untouched() {
    for mut e in cached_evaluators() {
        e.evaluate(12).unwrap();
        let before = snapshot(&e);
        let stats = e.stats();

        assert!(e.evaluate(-1).is_err());
        assert_eq!(snapshot(&e), before);
        assert_eq!(e.stats(), stats);
    }
}

// ─── Cache Ownership ───────────────────────────────────────────────────────────

#[test]
fn smaller_index_served_from_cache() {
    let mut e = Evaluator::new(Strategy::Memoized);
    assert_eq!(e.evaluate(10), Ok(55));
    assert_eq!(e.evaluate(5), Ok(5));

    let stats = e.stats();
    assert_eq!(stats.last_calls, 1);
    assert_eq!(stats.last_recursive_calls, 0);
}

#[test]
fn repeated_call_has_no_recursion() {
    let mut e = Evaluator::new(Strategy::Memoized);
    let first = e.evaluate(30).unwrap();
    assert_eq!(e.stats().last_recursive_calls, 2 * 30 - 2);

    let second = e.evaluate(30).unwrap();
    assert_eq!(first, second);
    assert_eq!(e.stats().last_recursive_calls, 0);
}

#[test]
fn idempotent_with_constant_work() {
    for mut e in cached_evaluators() {
        let first = e.evaluate(40).unwrap();
        let hits = e.stats().hits;

        let second = e.evaluate(40).unwrap();
        assert_eq!(first, second);
        assert!(e.stats().last_calls <= 1, "{}", e.strategy());
        assert_eq!(e.stats().hits, hits + 1);
    }
}

#[test]
fn independent_evaluators_have_independent_caches() {
    let mut a = Evaluator::new(Strategy::Memoized);
    let mut b = Evaluator::new(Strategy::Memoized);

    a.evaluate(30).unwrap();
    b.evaluate(30).unwrap();

    assert_eq!(a.stats().last_recursive_calls, b.stats().last_recursive_calls);
    assert!(b.stats().last_recursive_calls > 0);
}

#[test]
fn cache_covers_requested_prefix() {
    for mut e in cached_evaluators() {
        e.evaluate(25).unwrap();
        for i in 0..=25 {
            assert_eq!(e.cached(i), Some(fibmemo::fibonacci(i as u64)), "index {}", i);
        }
    }
}

#[test]
fn cache_grows_monotonically() {
    for mut e in cached_evaluators() {
        let mut previous = snapshot(&e);
        for n in [7, 3, 20, 20, 11, 35] {
            e.evaluate(n).unwrap();
            let current = snapshot(&e);
            assert!(current.len() >= previous.len());
            for entry in &previous {
                assert!(current.contains(entry), "lost or changed {:?}", entry);
            }
            previous = current;
        }
    }
}

#[test]
fn stats_cached_matches_cache_size() {
    for mut e in cached_evaluators() {
        e.evaluate(17).unwrap();
        assert_eq!(e.stats().cached, 18);
    }
}
