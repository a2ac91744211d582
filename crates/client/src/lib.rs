//! # termtable-client
//!
//! The REST-consuming side of the timetable system. It provides the
//! configuration, the HTTP client for the slot-storage and academic-year
//! services, and the scheduling facade that drives edit sessions against
//! them.
//!
//! ## Architecture
//!
//! This crate follows a layered structure:
//!
//! - **Stores**: traits the remote collaborators are consumed through
//! - **Http**: reqwest implementation of the store traits
//! - **Service**: load / validate / save orchestration over a schedule draft
//! - **Config**: environment-driven client settings
//!
//! The domain logic itself (quarter math, the editable draft, the sync
//! planner) lives in `termtable-core`; this crate only moves its inputs and
//! outputs over the wire.

/// Configuration module for client settings
pub mod config;
/// HTTP implementation of the store traits
pub mod http;
/// Mock stores for tests
pub mod mock;
/// Scheduling facade driving edit sessions
pub mod service;
/// Traits for the remote storage collaborators
pub mod stores;
