//! Structural comparison of values.
//!
//! Values are captured as a structural snapshot (a [`Node`] tree built from
//! the serde data model) and compared node by node. The snapshot keeps unit,
//! nested options, wide integers and non-finite floats distinct, and accepts
//! any key type in a map.
//!
//! ## Entry point
//!
//! ```
//! use must::diff::{compare, render, snapshot};
//!
//! let expected = snapshot(&vec!["a", "b"]).unwrap();
//! let got = snapshot(&vec!["a", "c"]).unwrap();
//! let divergences = compare(&expected, &got);
//! assert_eq!(render(&divergences), "$[1]:\n  - \"b\"\n  + \"c\"\n");
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce byte-identical renderings.
//! - **Order-insensitive mappings**: map keys are compared as sets.
//! - **Ordered sequences**: sequences are compared index by index.
//! - **Empty when equal**: a rendering is empty iff no divergence was found.

pub mod engine;
pub mod model;
pub mod render;
pub mod snapshot;

pub use engine::{compare, equal};
pub use model::{Change, Divergence, Float, Node, PathSegment, ValuePath};
pub use render::{diff, render};
pub use snapshot::snapshot;
