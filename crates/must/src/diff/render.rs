//! Human-readable diff renderer.

use crate::diff::engine::compare;
use crate::diff::model::{Change, Divergence, Node};

/// Placeholder for the side that does not exist at a path
pub const MISSING: &str = "<missing>";

/// Render divergences as text suitable for a failure message.
///
/// Each divergence is one path line followed by a `-` line for the expected
/// side and a `+` line for the got side:
///
/// ```text
/// $.items[1]:
///   - "b"
///   + <missing>
/// ```
///
/// An empty slice renders as an empty string.
pub fn render(divergences: &[Divergence]) -> String {
    let mut out = String::new();
    for divergence in divergences {
        let (expected, got) = match &divergence.change {
            Change::Changed { expected, got } => (show(expected), show(got)),
            Change::Missing { expected } => (show(expected), MISSING.to_string()),
            Change::Unexpected { got } => (MISSING.to_string(), show(got)),
        };
        out.push_str(&format!(
            "{}:\n  - {}\n  + {}\n",
            divergence.path, expected, got
        ));
    }
    out
}

/// Compare two snapshots and render the result.
pub fn diff(expected: &Node, got: &Node) -> String {
    render(&compare(expected, got))
}

fn show(value: &Node) -> String {
    value.to_string()
}
