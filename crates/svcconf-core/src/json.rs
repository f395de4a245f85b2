//! Generic JSON tree.
//!
//! `serde_json` does the tokenizing; the tree is built by a hand-written
//! visitor instead of `serde_json::Value` so that object members keep
//! document order and repeated keys are not collapsed. Schema checks
//! further up need to see both.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::Number;

use crate::error::{Result, SvcConfError};

/// One node of a parsed JSON document. Read-only after parse.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonNode {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<JsonNode>),
    /// Members in document order, duplicates included.
    Object(Vec<(String, JsonNode)>),
}

impl JsonNode {
    /// Parse JSON text into a tree.
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| SvcConfError::Parse(e.to_string()))
    }

    pub fn as_object(&self) -> Option<&[(String, JsonNode)]> {
        match self {
            JsonNode::Object(members) => Some(members),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonNode]> {
        match self {
            JsonNode::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonNode::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonNode::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            JsonNode::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Type name for diagnostics ("object", "array", ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonNode::Null => "null",
            JsonNode::Bool(_) => "bool",
            JsonNode::Number(_) => "number",
            JsonNode::String(_) => "string",
            JsonNode::Array(_) => "array",
            JsonNode::Object(_) => "object",
        }
    }

    /// Members of an object whose key equals `key`, in document order.
    /// Empty for non-objects.
    pub fn members<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a JsonNode> + 'a {
        self.as_object()
            .unwrap_or(&[])
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl<'de> Deserialize<'de> for JsonNode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = JsonNode;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_unit<E>(self) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Null)
    }

    fn visit_none<E>(self) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Null)
    }

    fn visit_bool<E>(self, v: bool) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Number(v.into()))
    }

    fn visit_u64<E>(self, v: u64) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Number(v.into()))
    }

    fn visit_f64<E>(self, v: f64) -> std::result::Result<JsonNode, E>
    where
        E: serde::de::Error,
    {
        Number::from_f64(v)
            .map(JsonNode::Number)
            .ok_or_else(|| E::custom("non-finite number"))
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::String(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::String(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<JsonNode, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(JsonNode::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<JsonNode, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, JsonNode>()? {
            members.push((key, value));
        }
        Ok(JsonNode::Object(members))
    }
}
