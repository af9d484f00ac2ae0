//! Campaign health diagnostics — the rule evaluation and scoring engine.
//!
//! Derives the core performance metrics from raw delivery counters,
//! evaluates them against a fixed threshold table, and produces a
//! [`Diagnosis`]: a 0–100 health score, the detected issues with their
//! root causes and recommended actions, and a status summary.
//!
//! Everything in this crate is pure computation over in-memory values.
//! The threshold table and issue catalog are `'static` read-only data,
//! so concurrent evaluations need no coordination.

pub mod catalog;
pub mod engine;
pub mod metrics;
pub mod thresholds;

pub use catalog::{IssueDefinition, IssueKind, Severity};
pub use engine::{diagnose, Diagnosis, HealthStatus, Issue, MetricsSnapshot};
pub use metrics::{compute_metrics, DerivedMetrics};
pub use thresholds::THRESHOLDS;
