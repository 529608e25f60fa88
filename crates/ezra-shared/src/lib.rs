//! # EZRA Shared
//!
//! Configuration, telemetry, constants, and app-level errors shared across
//! the EZRA workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;
