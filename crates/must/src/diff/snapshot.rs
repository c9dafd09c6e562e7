//! Capturing values as [`Node`] snapshots through serde.

use crate::diff::model::{Float, Node};
use crate::errors::{MustError, Result};
use serde::ser::{self, Serialize};
use std::collections::BTreeMap;

/// Capture the structural snapshot of a value.
///
/// References and smart pointers serialize as their target, so they are
/// compared after transparent dereferencing.
///
/// # Errors
///
/// - `Snapshot`: the value's own `Serialize` impl returned an error
pub fn snapshot<T: Serialize + ?Sized>(value: &T) -> Result<Node> {
    value.serialize(NodeSerializer)
}

impl ser::Error for MustError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        MustError::Snapshot {
            message: msg.to_string(),
        }
    }
}

struct NodeSerializer;

fn int(value: impl Into<i128>) -> Node {
    Node::Int(value.into())
}

fn variant(name: &str, value: Node) -> Node {
    Node::Variant {
        name: name.to_string(),
        value: Box::new(value),
    }
}

impl ser::Serializer for NodeSerializer {
    type Ok = Node;
    type Error = MustError;

    type SerializeSeq = SeqBuilder;
    type SerializeTuple = SeqBuilder;
    type SerializeTupleStruct = SeqBuilder;
    type SerializeTupleVariant = SeqBuilder;
    type SerializeMap = MapBuilder;
    type SerializeStruct = MapBuilder;
    type SerializeStructVariant = MapBuilder;

    fn serialize_bool(self, v: bool) -> Result<Node> {
        Ok(Node::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Node> {
        Ok(int(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Node> {
        Ok(int(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Node> {
        Ok(int(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Node> {
        Ok(int(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Node> {
        Ok(int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Node> {
        Ok(int(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Node> {
        Ok(int(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Node> {
        Ok(int(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Node> {
        Ok(int(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Node> {
        Ok(match i128::try_from(v) {
            Ok(i) => Node::Int(i),
            Err(_) => Node::UInt(v),
        })
    }

    fn serialize_f32(self, v: f32) -> Result<Node> {
        Ok(Node::Float(Float::new(f64::from(v))))
    }

    fn serialize_f64(self, v: f64) -> Result<Node> {
        Ok(Node::Float(Float::new(v)))
    }

    fn serialize_char(self, v: char) -> Result<Node> {
        Ok(Node::Char(v))
    }

    fn serialize_str(self, v: &str) -> Result<Node> {
        Ok(Node::Str(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Node> {
        Ok(Node::Seq(v.iter().map(|b| int(*b)).collect()))
    }

    fn serialize_none(self) -> Result<Node> {
        Ok(Node::None)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Node> {
        Ok(Node::Some(Box::new(snapshot(value)?)))
    }

    fn serialize_unit(self) -> Result<Node> {
        Ok(Node::Unit)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Node> {
        Ok(Node::Unit)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant_name: &'static str,
    ) -> Result<Node> {
        Ok(variant(variant_name, Node::Unit))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Node> {
        snapshot(value)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        variant_name: &'static str,
        value: &T,
    ) -> Result<Node> {
        Ok(variant(variant_name, snapshot(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqBuilder> {
        Ok(SeqBuilder::new(None, len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqBuilder> {
        Ok(SeqBuilder::new(None, len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SeqBuilder> {
        Ok(SeqBuilder::new(None, len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant_name: &'static str,
        len: usize,
    ) -> Result<SeqBuilder> {
        Ok(SeqBuilder::new(Some(variant_name), len))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapBuilder> {
        Ok(MapBuilder::new(None))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<MapBuilder> {
        Ok(MapBuilder::new(None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant_name: &'static str,
        _len: usize,
    ) -> Result<MapBuilder> {
        Ok(MapBuilder::new(Some(variant_name)))
    }
}

/// Collects sequence, tuple and tuple-variant elements
struct SeqBuilder {
    variant: Option<&'static str>,
    items: Vec<Node>,
}

impl SeqBuilder {
    fn new(variant: Option<&'static str>, len: usize) -> Self {
        Self {
            variant,
            items: Vec::with_capacity(len),
        }
    }

    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.items.push(snapshot(value)?);
        Ok(())
    }

    fn finish(self) -> Result<Node> {
        let seq = Node::Seq(self.items);
        Ok(match self.variant {
            Some(name) => variant(name, seq),
            None => seq,
        })
    }
}

impl ser::SerializeSeq for SeqBuilder {
    type Ok = Node;
    type Error = MustError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Node> {
        self.finish()
    }
}

impl ser::SerializeTuple for SeqBuilder {
    type Ok = Node;
    type Error = MustError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Node> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for SeqBuilder {
    type Ok = Node;
    type Error = MustError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Node> {
        self.finish()
    }
}

impl ser::SerializeTupleVariant for SeqBuilder {
    type Ok = Node;
    type Error = MustError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Node> {
        self.finish()
    }
}

/// Collects map entries and struct fields
struct MapBuilder {
    variant: Option<&'static str>,
    entries: BTreeMap<Node, Node>,
    key: Option<Node>,
}

impl MapBuilder {
    fn new(variant: Option<&'static str>) -> Self {
        Self {
            variant,
            entries: BTreeMap::new(),
            key: None,
        }
    }

    fn field<T: Serialize + ?Sized>(&mut self, name: &'static str, value: &T) -> Result<()> {
        self.entries
            .insert(Node::Str(name.to_string()), snapshot(value)?);
        Ok(())
    }

    fn finish(self) -> Result<Node> {
        let map = Node::Map(self.entries);
        Ok(match self.variant {
            Some(name) => variant(name, map),
            None => map,
        })
    }
}

impl ser::SerializeMap for MapBuilder {
    type Ok = Node;
    type Error = MustError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
        self.key = Some(snapshot(key)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let key = self.key.take().ok_or_else(|| MustError::Snapshot {
            message: "map value serialized before its key".to_string(),
        })?;
        self.entries.insert(key, snapshot(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        self.finish()
    }
}

impl ser::SerializeStruct for MapBuilder {
    type Ok = Node;
    type Error = MustError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.field(key, value)
    }

    fn end(self) -> Result<Node> {
        self.finish()
    }
}

impl ser::SerializeStructVariant for MapBuilder {
    type Ok = Node;
    type Error = MustError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.field(key, value)
    }

    fn end(self) -> Result<Node> {
        self.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serializer;
    use std::collections::HashMap;

    #[derive(serde::Serialize)]
    enum Signal {
        Stop,
        Move(i32),
        Pair(i32, i32),
        Named { speed: u8 },
    }

    struct Broken;

    impl Serialize for Broken {
        fn serialize<S: Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
            Err(ser::Error::custom("refused"))
        }
    }

    #[test]
    fn test_scalars_keep_their_kind() {
        assert_eq!(snapshot(&()).unwrap(), Node::Unit);
        assert_eq!(snapshot(&None::<u8>).unwrap(), Node::None);
        assert_eq!(
            snapshot(&Some(())).unwrap(),
            Node::Some(Box::new(Node::Unit))
        );
        assert_eq!(snapshot(&'x').unwrap(), Node::Char('x'));
        assert_eq!(snapshot("x").unwrap(), Node::Str("x".to_string()));
    }

    #[test]
    fn test_integers_normalize_by_value() {
        assert_eq!(snapshot(&1u8).unwrap(), snapshot(&1i64).unwrap());
        assert_eq!(snapshot(&u128::MAX).unwrap(), Node::UInt(u128::MAX));
        assert_eq!(snapshot(&i128::MIN).unwrap(), Node::Int(i128::MIN));
    }

    #[test]
    fn test_non_finite_floats_are_kept() {
        let inf = snapshot(&f64::INFINITY).unwrap();
        let neg = snapshot(&f64::NEG_INFINITY).unwrap();
        let nan = snapshot(&f64::NAN).unwrap();
        assert_ne!(inf, neg);
        assert_ne!(nan, Node::None);
        assert_eq!(nan, snapshot(&f64::NAN).unwrap());
    }

    #[test]
    fn test_non_string_map_keys() {
        let mut map = HashMap::new();
        map.insert((1, 2), "a");
        let node = snapshot(&map).unwrap();

        let key = Node::Seq(vec![Node::Int(1), Node::Int(2)]);
        match node {
            Node::Map(entries) => assert_eq!(entries.get(&key), Some(&Node::Str("a".to_string()))),
            other => panic!("expected a map, got {}", other),
        }
    }

    #[test]
    fn test_enum_variants() {
        assert_eq!(snapshot(&Signal::Stop).unwrap().to_string(), "Stop");
        assert_eq!(snapshot(&Signal::Move(3)).unwrap().to_string(), "Move(3)");
        assert_eq!(
            snapshot(&Signal::Pair(1, 2)).unwrap().to_string(),
            "Pair([1, 2])"
        );
        assert_eq!(
            snapshot(&Signal::Named { speed: 4 }).unwrap().to_string(),
            "Named {\"speed\": 4}"
        );
    }

    #[test]
    fn test_serialize_error_is_a_snapshot_error() {
        let err = snapshot(&Broken).unwrap_err();
        assert_eq!(err.code(), "ERR_SNAPSHOT");
        assert_eq!(err.to_string(), "cannot capture a structural snapshot: refused");
    }
}
