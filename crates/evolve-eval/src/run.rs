//! Config-driven evaluation: the entry point a host binary calls.

use tracing::info;

use evolve_agent::build_agent;
use evolve_core::config::EvolveConfig;
use evolve_core::errors::{EvalResult, EvolveResult};

use crate::dataset::load_dataset;
use crate::harness::evaluate;
use crate::report::EvalReport;
use crate::sweep::{parse_thresholds, sweep, SweepReport};

/// Result of [`run`]: a single report, or one per swept threshold.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalOutcome {
    Single(EvalReport),
    Sweep(SweepReport),
}

impl EvalOutcome {
    pub fn to_json_pretty(&self) -> EvalResult<String> {
        match self {
            Self::Single(report) => report.to_json_pretty(),
            Self::Sweep(report) => report.to_json_pretty(),
        }
    }
}

/// Evaluate according to `config.eval`.
///
/// A sweep list is parsed before any agent is built, so a malformed list
/// fails without touching the corpus. Each agent's acceptance threshold is
/// set to the threshold it is evaluated at.
pub fn run(config: &EvolveConfig) -> EvolveResult<EvalOutcome> {
    let eval = &config.eval;
    let thresholds = eval.sweep.as_deref().map(parse_thresholds).transpose()?;
    let data = load_dataset(&eval.dataset)?;

    let agent_for = |threshold: f64| {
        let mut agent_config = config.clone();
        agent_config.agent.accept_threshold = threshold;
        build_agent(&eval.corpus, &agent_config)
    };

    let outcome = match thresholds {
        Some(thresholds) => EvalOutcome::Sweep(sweep(agent_for, &data, &thresholds)),
        None => {
            let mut agent = agent_for(eval.threshold);
            EvalOutcome::Single(evaluate(&mut agent, &data, eval.threshold))
        }
    };

    if let Some(out) = &eval.out {
        match &outcome {
            EvalOutcome::Single(report) => report.write_json(out)?,
            EvalOutcome::Sweep(report) => report.write_json(out)?,
        }
        info!(path = %out.display(), "Report written");
    }
    Ok(outcome)
}
