//! Format-independent document shape.
//!
//! Every supported format deserializes into `RawNode` first so that shape
//! errors can be reported with an `EntryPath` instead of a serde message.
//! Mappings keep their source order.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

#[derive(Debug, Clone, PartialEq)]
pub enum RawNode {
    Str(String),
    Seq(Vec<RawNode>),
    Map(Vec<(RawNode, RawNode)>),
    /// Any other scalar; holds its kind for error messages.
    Other(&'static str),
}

impl RawNode {
    pub fn kind(&self) -> &'static str {
        match self {
            RawNode::Str(_) => "string",
            RawNode::Seq(_) => "list",
            RawNode::Map(_) => "mapping",
            RawNode::Other(kind) => kind,
        }
    }
}

impl<'de> Deserialize<'de> for RawNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawNodeVisitor)
    }
}

struct RawNodeVisitor;

impl<'de> Visitor<'de> for RawNodeVisitor {
    type Value = RawNode;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, list or mapping")
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(RawNode::Other("boolean"))
    }

    fn visit_i64<E: de::Error>(self, _v: i64) -> Result<Self::Value, E> {
        Ok(RawNode::Other("integer"))
    }

    fn visit_i128<E: de::Error>(self, _v: i128) -> Result<Self::Value, E> {
        Ok(RawNode::Other("integer"))
    }

    fn visit_u64<E: de::Error>(self, _v: u64) -> Result<Self::Value, E> {
        Ok(RawNode::Other("integer"))
    }

    fn visit_u128<E: de::Error>(self, _v: u128) -> Result<Self::Value, E> {
        Ok(RawNode::Other("integer"))
    }

    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Self::Value, E> {
        Ok(RawNode::Other("float"))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(RawNode::Str(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(RawNode::Str(v))
    }

    fn visit_bytes<E: de::Error>(self, _v: &[u8]) -> Result<Self::Value, E> {
        Ok(RawNode::Other("bytes"))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RawNode::Other("null"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RawNode::Other("null"))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawNode::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<RawNode>()? {
            items.push(item);
        }
        Ok(RawNode::Seq(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<RawNode, RawNode>()? {
            pairs.push((key, value));
        }
        // toml hands datetimes over as a single-key map
        if let [(RawNode::Str(key), RawNode::Str(_))] = pairs.as_slice() {
            if key == TOML_DATETIME_KEY {
                return Ok(RawNode::Other("datetime"));
            }
        }
        Ok(RawNode::Map(pairs))
    }
}
