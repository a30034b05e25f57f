//! # kam-core
//!
//! Core types, ID generation, and error types for KAM roster reconciliation.
//!
//! This crate provides the foundational types shared across all `kam` crates:
//! - Roster entities (`AccountManagerRecord`, `StagedRecord`)
//! - Append-only audit entries
//! - Source/status/action enums and the staging workflow state machine
//! - Prefixed ID generation
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
