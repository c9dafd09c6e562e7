//! Core types shared across must facilities
//!
//! This crate provides the canonical vocabulary used by the assertion
//! facade and its logging facility:
//!
//! - **Schema constants**: Canonical field keys, event names and operation names

pub mod schema;
