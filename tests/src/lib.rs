//! Integration test framework for the SNOW 3G workspace
#![allow(missing_docs)]
//!
//! This crate provides fixtures and helpers shared by the integration test
//! targets.
//!
//! # Components
//!
//! - [`test_fixtures`] - Published SNOW 3G conformance vectors
//! - [`test_utils`] - Logging setup and hex helpers
//!
//! # Test Categories
//!
//! 1. **Known-answer tests** - Published vectors, chunking, reset semantics
//! 2. **Multi-session tests** - Independent engines across threads


pub use test_fixtures::{all_vectors, KnownAnswer, TEST_SET_1, TEST_SET_2, TEST_SET_3, TEST_SET_4, ZERO_KEY_IV};
pub use test_utils::{init_test_logging, key_iv_bytes};
