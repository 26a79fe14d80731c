//! Integration test suite.
//!
//! 1. Paste-to-message pipeline
//! 2. Session workflow (manual entry, delete, clear, copy)

pub mod pipeline_tests;
pub mod session_tests;
