//! # Ledger Channel Client Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Network builders, tracing setup
//! └── integration/      # End-to-end submission scenarios
//!     ├── pipeline.rs
//!     ├── failure_modes.rs
//!     ├── membership_churn.rs
//!     └── massive_broadcast.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p lc-tests
//!
//! # By scenario
//! cargo test -p lc-tests integration::pipeline
//! cargo test -p lc-tests integration::massive_broadcast
//!
//! # Benchmarks
//! cargo bench -p lc-tests
//! ```

#![allow(dead_code)]

pub mod integration;
