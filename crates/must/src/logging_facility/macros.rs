//! Canonical verdict logging macros
//!
//! Every check emits exactly one of these events.

/// Log a passing check at debug level
///
/// # Example
///
/// ```
/// # use must::log_check_pass;
/// log_check_pass!("be_equal");
/// ```
#[macro_export]
macro_rules! log_check_pass {
    ($op:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::must_core_types::schema::EVENT_PASS,
        );
    };
}

/// Log a failing check at warn level, with its rendered failure message
///
/// # Example
///
/// ```
/// # use must::log_check_fail;
/// log_check_fail!("be_equal", "M: diff\n$:\n  - 1\n  + 2");
/// ```
#[macro_export]
macro_rules! log_check_fail {
    ($op:expr, $failure:expr) => {
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::must_core_types::schema::EVENT_FAIL,
            failure = %$failure,
        );
    };
}
