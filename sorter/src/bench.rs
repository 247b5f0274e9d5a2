//! Throughput scenarios for `sorter bench`.
//!
//! Each scenario classifies `iterations` packages drawn cyclically from a
//! fixed mix and checks every result against the expected stack.

use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::core::{Classification, classify};
use crate::io::config::BenchConfig;
use crate::report::group_thousands;

type Probe = ([f64; 4], Classification);

const STANDARD: Probe = ([50.0, 50.0, 50.0, 10.0], Classification::Standard);
const HEAVY: Probe = ([50.0, 50.0, 50.0, 25.0], Classification::Special);
const BULKY: Probe = ([150.0, 50.0, 50.0, 10.0], Classification::Special);
const REJECTED: Probe = ([150.0, 50.0, 50.0, 25.0], Classification::Rejected);

#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    mix: &'static [Probe],
}

pub const SCENARIOS: [Scenario; 5] = [
    Scenario {
        name: "Standard packages",
        mix: &[STANDARD],
    },
    Scenario {
        name: "Heavy packages",
        mix: &[HEAVY],
    },
    Scenario {
        name: "Bulky packages",
        mix: &[BULKY],
    },
    Scenario {
        name: "Rejected packages",
        mix: &[REJECTED],
    },
    Scenario {
        name: "Mixed packages",
        mix: &[STANDARD, BULKY, HEAVY, REJECTED],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    pub name: &'static str,
    pub packages: usize,
    pub elapsed: Duration,
}

impl ScenarioResult {
    pub fn packages_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.packages as f64 / secs
        } else {
            f64::INFINITY
        }
    }
}

pub fn run_scenario(scenario: &Scenario, iterations: usize) -> Result<ScenarioResult> {
    let start = Instant::now();
    for (idx, (dims, expected)) in scenario.mix.iter().cycle().take(iterations).enumerate() {
        let [width, height, length, mass] = *dims;
        let got = classify(width, height, length, mass)
            .with_context(|| format!("{} package {idx}", scenario.name))?;
        if got != *expected {
            bail!(
                "{} package {idx}: expected {expected}, got {got}",
                scenario.name
            );
        }
    }
    let elapsed = start.elapsed();
    debug!(scenario = scenario.name, iterations, ?elapsed, "scenario finished");
    Ok(ScenarioResult {
        name: scenario.name,
        packages: iterations,
        elapsed,
    })
}

/// Run every scenario, failing if any exceeds `max_elapsed_ms`.
pub fn run_all(cfg: &BenchConfig) -> Result<Vec<ScenarioResult>> {
    let mut results = Vec::with_capacity(SCENARIOS.len());
    for scenario in &SCENARIOS {
        results.push(run_scenario(scenario, cfg.iterations)?);
    }
    info!(
        scenarios = results.len(),
        iterations = cfg.iterations,
        "benchmark complete"
    );

    if let Some(limit_ms) = cfg.max_elapsed_ms {
        let limit = Duration::from_millis(limit_ms);
        if let Some(slow) = results.iter().find(|result| result.elapsed > limit) {
            bail!(
                "{} took {:.4}s, over the {}ms budget",
                slow.name,
                slow.elapsed.as_secs_f64(),
                limit_ms
            );
        }
    }
    Ok(results)
}

pub fn render(results: &[ScenarioResult]) -> String {
    let mut out = String::from("PERFORMANCE BENCHMARK\n");
    out.push_str(&"=".repeat(50));
    out.push('\n');
    for result in results {
        out.push_str(&format!(
            "{}:\n  Processed {} packages in {:.4} seconds\n  Rate: {} packages/second\n",
            result.name,
            group_thousands(result.packages as f64),
            result.elapsed.as_secs_f64(),
            group_thousands(result.packages_per_second().round()),
        ));
    }
    out
}
