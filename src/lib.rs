//! Attempt scoring and study history for miaaula
//!
//! The session UI drives this crate at the end of a practice run: build the
//! attempt report, aggregate the session outcome, persist both the report
//! history and any broken questions seen along the way, and export reports
//! as JSON downloads.

pub mod audit;
pub mod content;
pub mod reports;
pub mod settings;
pub mod storage;
