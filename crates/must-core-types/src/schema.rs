//! Canonical schema constants for structured logging of assertion verdicts
//!
//! These constants ensure consistency across all logging and failure reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_FAILURE: &str = "failure";

// Canonical event names
pub const EVENT_PASS: &str = "pass";
pub const EVENT_FAIL: &str = "fail";

// Assertion operations
pub const OP_BE_EQUAL: &str = "be_equal";
pub const OP_BE_EQUAL_ERRORS: &str = "be_equal_errors";
pub const OP_BE_NO_ERROR: &str = "be_no_error";
pub const OP_BE_ERROR: &str = "be_error";
pub const OP_BE_SAME_LENGTH: &str = "be_same_length";
