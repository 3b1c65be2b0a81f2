//! simplr-gemini
//!
//! Explanation Client. Builds prompts about lab code and sends them to the
//! Gemini `generateContent` API.

pub mod client;
pub mod error;
pub mod prompt;
