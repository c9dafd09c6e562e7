//! Runtime shape classification.
//!
//! Rust has no runtime reflection, so values that take part in length checks
//! describe themselves through [`Inspect`]. The result is a closed [`Shape`]
//! variant the length extractor can dispatch on.
//!
//! Implementations are provided for text, std collections, fixed-size arrays,
//! scalars, references and smart pointers, `Option` and `serde_json::Value`.
//! A record type opts in with an empty impl and is classified as `struct`:
//!
//! ```
//! use must::shape::{Inspect, Kind};
//!
//! struct Content {
//!     content: String,
//! }
//!
//! impl Inspect for Content {}
//!
//! let c = Content { content: "test".to_string() };
//! assert_eq!(c.shape().kind(), Kind::Struct);
//! # let _ = c.content;
//! ```

use serde_json::Value;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Coarse classification of a value, used in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bool,
    Int,
    Uint,
    Float,
    Char,
    String,
    Slice,
    Array,
    Map,
    Set,
    Unit,
    Null,
    Struct,
    Ptr,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Char => "char",
            Kind::String => "string",
            Kind::Slice => "slice",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Set => "set",
            Kind::Unit => "unit",
            Kind::Null => "null",
            Kind::Struct => "struct",
            Kind::Ptr => "ptr",
        };
        f.write_str(name)
    }
}

/// The shape of a value as seen by the length extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A sequence-like value with a known element or character count
    Counted { kind: Kind, len: usize },
    /// A reference to another value; `None` when the reference is absent
    Reference(Option<Box<Shape>>),
    /// A value with no meaningful length
    Opaque(Kind),
}

impl Shape {
    /// The kind of the outermost layer of this shape
    pub fn kind(&self) -> Kind {
        match self {
            Shape::Counted { kind, .. } => *kind,
            Shape::Reference(_) => Kind::Ptr,
            Shape::Opaque(kind) => *kind,
        }
    }

    fn reference_to<T: Inspect + ?Sized>(target: &T) -> Shape {
        Shape::Reference(Some(Box::new(target.shape())))
    }
}

/// Capability of describing one's own runtime shape
///
/// The default classifies the implementor as an opaque `struct`.
pub trait Inspect {
    fn shape(&self) -> Shape {
        Shape::Opaque(Kind::Struct)
    }
}

macro_rules! opaque {
    ($kind:ident => $($t:ty),+) => {
        $(
            impl Inspect for $t {
                fn shape(&self) -> Shape {
                    Shape::Opaque(Kind::$kind)
                }
            }
        )+
    };
}

opaque!(Bool => bool);
opaque!(Int => i8, i16, i32, i64, i128, isize);
opaque!(Uint => u8, u16, u32, u64, u128, usize);
opaque!(Float => f32, f64);
opaque!(Char => char);
opaque!(Unit => ());

// Text length is a character count, not a byte count.
impl Inspect for str {
    fn shape(&self) -> Shape {
        Shape::Counted {
            kind: Kind::String,
            len: self.chars().count(),
        }
    }
}

impl Inspect for String {
    fn shape(&self) -> Shape {
        self.as_str().shape()
    }
}

impl Inspect for Cow<'_, str> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T> Inspect for [T] {
    fn shape(&self) -> Shape {
        Shape::Counted {
            kind: Kind::Slice,
            len: self.len(),
        }
    }
}

impl<T> Inspect for Vec<T> {
    fn shape(&self) -> Shape {
        self.as_slice().shape()
    }
}

impl<T> Inspect for VecDeque<T> {
    fn shape(&self) -> Shape {
        Shape::Counted {
            kind: Kind::Slice,
            len: self.len(),
        }
    }
}

impl<T, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape {
        Shape::Counted {
            kind: Kind::Array,
            len: N,
        }
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn shape(&self) -> Shape {
        Shape::Counted {
            kind: Kind::Map,
            len: self.len(),
        }
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape {
        Shape::Counted {
            kind: Kind::Map,
            len: self.len(),
        }
    }
}

impl<T, S> Inspect for HashSet<T, S> {
    fn shape(&self) -> Shape {
        Shape::Counted {
            kind: Kind::Set,
            len: self.len(),
        }
    }
}

impl<T> Inspect for BTreeSet<T> {
    fn shape(&self) -> Shape {
        Shape::Counted {
            kind: Kind::Set,
            len: self.len(),
        }
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn shape(&self) -> Shape {
        Shape::reference_to(&**self)
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    fn shape(&self) -> Shape {
        Shape::reference_to(&**self)
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn shape(&self) -> Shape {
        Shape::reference_to(&**self)
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn shape(&self) -> Shape {
        Shape::reference_to(&**self)
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn shape(&self) -> Shape {
        Shape::reference_to(&**self)
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn shape(&self) -> Shape {
        match self {
            Some(target) => Shape::reference_to(target),
            None => Shape::Reference(None),
        }
    }
}

impl Inspect for Value {
    fn shape(&self) -> Shape {
        match self {
            Value::Null => Shape::Opaque(Kind::Null),
            Value::Bool(_) => Shape::Opaque(Kind::Bool),
            Value::Number(n) if n.is_f64() => Shape::Opaque(Kind::Float),
            Value::Number(n) if n.is_i64() && !n.is_u64() => Shape::Opaque(Kind::Int),
            Value::Number(_) => Shape::Opaque(Kind::Uint),
            Value::String(s) => s.shape(),
            Value::Array(items) => items.shape(),
            Value::Object(fields) => Shape::Counted {
                kind: Kind::Map,
                len: fields.len(),
            },
        }
    }
}
