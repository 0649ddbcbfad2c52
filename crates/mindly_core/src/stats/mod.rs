//! Aggregation engine.
//!
//! # Responsibility
//! - Compute per-emotion statistics for month, week, day, and all-time
//!   windows.
//! - Derive a trend label from the ranked statistics.
//!
//! # Invariants
//! - Every function here is pure and total over well-typed input.

pub mod aggregate;
pub mod trend;
pub mod window;
