//! simplr-core
//!
//! Pure domain types for the lab browser: repository entries, the selection
//! set, report metadata, browse sessions, the lab catalog and path rules.
//! No network or filesystem access lives here.

pub mod catalog;
pub mod error;
pub mod models;
pub mod paths;
pub mod source;
