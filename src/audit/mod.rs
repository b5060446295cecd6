//! Invalid-item auditing
//!
//! This module provides:
//! - Snapshot records for structurally broken questions
//! - A deduplicated, best-effort persistent log of them

mod log;
mod models;

pub use self::log::InvalidItemLog;
pub use models::InvalidItemReport;
