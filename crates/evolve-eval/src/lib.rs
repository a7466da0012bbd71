//! # evolve-eval
//!
//! Runs the agent over a labelled dataset and measures how often it accepts
//! answers it should have refused.
//!
//! ## Modules
//! - `dataset`: JSONL loading with a built-in fallback
//! - `harness`: `evaluate`, one sequential pass per dataset
//! - `confusion`: accept/refuse confusion counts
//! - `wilson`: Wilson score intervals
//! - `report`: serialisable `EvalReport`
//! - `sweep`: per-threshold runs over fresh agents
//! - `run`: config-driven single run or sweep, with optional JSON output

pub mod confusion;
pub mod dataset;
pub mod harness;
pub mod report;
pub mod run;
pub mod sweep;
pub mod wilson;

pub use confusion::ConfusionCounts;
pub use dataset::{builtin_dataset, load_dataset, parse_dataset, EvalRecord};
pub use harness::evaluate;
pub use report::{EvalExample, EvalReport};
pub use run::{run, EvalOutcome};
pub use sweep::{parse_thresholds, sweep, SweepEntry, SweepReport, TABLE_HEADER};
pub use wilson::{wilson_interval, WILSON_Z_95};
