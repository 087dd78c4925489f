//! Verdict Eval - Evaluation engine for Verdict condition trees
//!
//! This crate executes a condition tree against a set of test bindings and
//! produces a boolean result plus a per-leaf trace for diagnostics and live
//! preview.
//!
//! Evaluation is pure, synchronous and total: it never errors and never
//! panics. Anomalies (missing bindings, failed coercions, invalid regex
//! patterns, operators outside the active registry) degrade the affected
//! leaf to `passed = false` with an explanatory trace detail, without
//! aborting sibling evaluation.

pub mod coerce;
pub mod evaluator;
pub mod trace;

pub use evaluator::{Bindings, Evaluator};
pub use trace::{Evaluation, TraceEntry};
