//! Core module - Shared types and utilities
//!
//! This module provides:
//! - Error types
//! - Per-file outcomes and the run summary
//! - Path normalization and eligibility rules
//! - Report rendering

pub mod error;
pub mod model;
pub mod paths;
pub mod render;
