//! simplr-github
//!
//! Content Fetcher. Directory listings from the GitHub REST API and raw file
//! text from the raw-content host.

pub mod client;
pub mod contents;
pub mod error;
