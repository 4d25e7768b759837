//! Integration tests for the Veridian Rust SDK.
//!
//! Every test in this suite runs against an in-process `wiremock` server,
//! so the suite is self-contained and needs no running deployment.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # Run with verbose output
//! cargo test --test integration -- --nocapture
//!
//! # Run a specific test
//! cargo test --test integration test_user_lifecycle -- --nocapture
//! ```

mod common;
mod envelope_tests;
mod lifecycle_tests;
