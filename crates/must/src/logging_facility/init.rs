//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, every verdict at debug level
    Development,
    /// JSON structured output, failures only
    Production,
    /// No output, every verdict enabled; events are collected through
    /// `init_test_capture()`
    Test,
}

impl Profile {
    fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "must=debug",
            Profile::Production => "must=info",
            Profile::Test => "must=trace",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Installs a global subscriber on the first call; later calls are no-ops.
/// `RUST_LOG` overrides the profile's default filter.
///
/// # Profiles
///
/// - **Development**: Human-readable logs, `must=debug`
/// - **Production**: JSON structured logs, `must=info`
/// - **Test**: No output, `must=trace`; use `init_test_capture()` to collect events
///
/// # Example
///
/// ```
/// use must::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()));
        // A subscriber installed elsewhere (e.g. test capture) wins.
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_test_writer()
                    .try_init()
                    .ok();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .try_init()
                    .ok();
            }
            Profile::Test => {
                tracing_subscriber::registry().with(filter).try_init().ok();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_filters() {
        assert_eq!(Profile::Development.default_filter(), "must=debug");
        assert_eq!(Profile::Production.default_filter(), "must=info");
        assert_eq!(Profile::Test.default_filter(), "must=trace");
        assert_ne!(Profile::Development, Profile::Production);
    }
}
