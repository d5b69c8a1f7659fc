//! Evaluate Fibonacci terms from the command line and time each call.
//!
//! Run with:
//! ```bash
//! cargo run --release --example fib -- 10 42 30 --strategy all
//! ```

use std::time::{Duration, Instant};

use clap::Parser;

use fibmemo::{EvalError, EvalStats, Evaluate, Evaluator, EvaluatorConfig, Strategy};

#[derive(Debug, Parser)]
#[command(author, version, about = "Evaluate Fibonacci terms")]
struct Cli {
    /// Indices to evaluate, in order, on one evaluator per strategy.
    #[arg(value_name = "INT", allow_negative_numbers = true, default_values_t = [10, 42])]
    indices: Vec<i64>,

    /// Strategy to use: naive, memoized, iterative or all.
    #[arg(long, default_value = "all")]
    strategy: String,

    /// Insert the base cases into the memoized cache lazily.
    #[arg(long)]
    lazy_base_cases: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

/// Wraps an evaluator and measures the wall-clock time of each call.
struct Timed<E> {
    inner: E,
    last: Duration,
}

impl<E: Evaluate> Timed<E> {
    fn new(inner: E) -> Self {
        Self {
            inner,
            last: Duration::ZERO,
        }
    }

    fn last_duration(&self) -> Duration {
        self.last
    }
}

impl<E: Evaluate> Evaluate for Timed<E> {
    fn evaluate(&mut self, n: i64) -> Result<i64, EvalError> {
        let start = Instant::now();
        let res = self.inner.evaluate(n);
        self.last = start.elapsed();
        res
    }

    fn stats(&self) -> EvalStats {
        self.inner.stats()
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = if args.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let strategies: Vec<Strategy> = if args.strategy.eq_ignore_ascii_case("all") {
        Strategy::ALL.to_vec()
    } else {
        vec![args.strategy.parse::<Strategy>()?]
    };

    for strategy in strategies {
        println!("=== {} ===", strategy);
        let config = EvaluatorConfig::default()
            .with_strategy(strategy)
            .with_seed_base_cases(!args.lazy_base_cases);
        let mut fib = Timed::new(Evaluator::with_config(config));

        for &n in &args.indices {
            if strategy == Strategy::Naive && n > 45 {
                log::warn!("Skipping naive evaluation of f({}): exponential time", n);
                continue;
            }
            match fib.evaluate(n) {
                Ok(value) if strategy.is_cached() => {
                    let stats = fib.stats();
                    println!(
                        "f({}) = {} in {:.3?} (calls: {}, hits: {}, misses: {}, cached: {})",
                        n,
                        value,
                        fib.last_duration(),
                        stats.last_calls,
                        stats.hits,
                        stats.misses,
                        stats.cached
                    );
                }
                Ok(value) => {
                    println!(
                        "f({}) = {} in {:.3?} (calls: {})",
                        n,
                        value,
                        fib.last_duration(),
                        fib.stats().last_calls
                    );
                }
                Err(e) => println!("f({}): {}", n, e),
            }
        }
    }

    Ok(())
}
