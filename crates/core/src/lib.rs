//! # termtable-core
//!
//! Domain logic for the quarter calendar and the weekly schedule editor:
//! time-of-day values, academic-year quarter math, the editable schedule
//! draft, and the planner that diffs a draft against persisted state. Pure
//! and I/O-free; everything network-facing lives in `termtable-client`.

pub mod draft;
pub mod errors;
pub mod models;
pub mod sync;
