//! Integration test crate for track credit allocation.
//!
//! This crate has no library code — it only contains integration tests
//! that exercise credit flows across the workspace crates.
//!
//! ```sh
//! cargo test -p credits-integration-tests
//! ```
