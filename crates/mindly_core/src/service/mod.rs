//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate slot reads/writes and pure computations into screen-level
//!   APIs.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod insights_service;
pub mod journal_service;
pub mod profile_service;
