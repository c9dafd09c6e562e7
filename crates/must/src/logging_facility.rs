//! Structured logging facility for check verdicts
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Verdict macros (`log_check_pass!`, `log_check_fail!`)
//! - Test capture mode for asserting on emitted events
//!
//! # Usage
//!
//! ```rust
//! use must::logging_facility::{init, Profile};
//!
//! // Initialize once, e.g. from a test harness setup function
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
