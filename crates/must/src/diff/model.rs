//! Snapshot nodes and structural divergence types.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A floating point leaf with a total order.
///
/// Every NaN collapses to one canonical NaN and `-0.0` to `0.0`, so a value
/// always equals itself while the infinities stay distinct.
#[derive(Debug, Clone, Copy)]
pub struct Float(f64);

impl Float {
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(f64::NAN)
        } else if value == 0.0 {
            Self(0.0)
        } else {
            Self(value)
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Float {}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Float {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Structural snapshot of a value in the serde data model.
///
/// Unlike JSON, the model keeps unit apart from absence, `Some(None)` apart
/// from `None`, wide integers and non-finite floats intact, and allows any
/// node as a map key.
///
/// Integers are normalized by value: `1u8` and `1i64` are the same node.
/// Sequences, tuples and fixed-size arrays all become [`Node::Seq`]; structs
/// and maps both become [`Node::Map`] keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Node {
    Unit,
    Bool(bool),
    /// Any integer that fits in `i128`
    Int(i128),
    /// Unsigned integers above `i128::MAX`
    UInt(u128),
    Float(Float),
    Char(char),
    Str(String),
    None,
    Some(Box<Node>),
    Seq(Vec<Node>),
    Map(BTreeMap<Node, Node>),
    /// Enum variant with its payload (`Unit` for a unit variant)
    Variant { name: String, value: Box<Node> },
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Unit => f.write_str("()"),
            Node::Bool(b) => write!(f, "{}", b),
            Node::Int(i) => write!(f, "{}", i),
            Node::UInt(u) => write!(f, "{}", u),
            Node::Float(x) => write!(f, "{}", x),
            Node::Char(c) => write!(f, "{:?}", c),
            Node::Str(s) => write!(f, "{:?}", s),
            Node::None => f.write_str("None"),
            Node::Some(inner) => write!(f, "Some({})", inner),
            Node::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Node::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
            Node::Variant { name, value } => match value.as_ref() {
                Node::Unit => f.write_str(name),
                Node::Map(_) => write!(f, "{} {}", name, value),
                other => write!(f, "{}({})", name, other),
            },
        }
    }
}

/// One step from a parent node to a child node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Field or map key
    Key(Node),
    /// Sequence index
    Index(usize),
}

/// Location of a node inside a snapshot, rendered as `$`, `$.field`, `$[3]`.
///
/// Keys that are not plain identifiers render in brackets, so `$["a.b"]`
/// and `$.a.b` never collide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValuePath(Vec<PathSegment>);

impl ValuePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

fn is_plain_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_alphanumeric() || c == '_')
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(Node::Str(key)) if is_plain_key(key) => write!(f, ".{}", key)?,
                PathSegment::Key(key) => write!(f, "[{}]", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// What differs at a given path.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// Both sides exist with different values
    Changed { expected: Node, got: Node },
    /// Only the expected side exists
    Missing { expected: Node },
    /// Only the got side exists
    Unexpected { got: Node },
}

/// A single point of structural divergence.
#[derive(Debug, Clone, PartialEq)]
pub struct Divergence {
    pub path: ValuePath,
    pub change: Change,
}
