/*!
DynamoDB attribute values and their textual rendering
*/

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// A snapshot of an item's attributes at a point in time. `BTreeMap` keeps
/// iteration in key order so logged attribute lines are deterministic.
pub type Image = BTreeMap<String, AttributeValue>;

/// A single attribute value, tagged with its native DynamoDB type.
///
/// Matches the externally-tagged JSON the stream delivers, e.g.
/// `{"S": "Alice"}` or `{"NS": ["1", "2.5"]}`. Numbers stay as their literal
/// wire text so precision is never lost; binary values stay as the base64
/// text the wire carries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum AttributeValue {
    /// String
    #[serde(rename = "S")]
    String(String),
    /// Number, kept as literal text
    #[serde(rename = "N")]
    Number(String),
    /// Binary, kept as base64 text
    #[serde(rename = "B")]
    Binary(String),
    /// Boolean
    #[serde(rename = "BOOL")]
    Boolean(bool),
    /// Null marker (the wire carries `{"NULL": true}`)
    #[serde(rename = "NULL")]
    Null(bool),
    /// List of heterogeneous values
    #[serde(rename = "L")]
    List(Vec<AttributeValue>),
    /// Nested map of attributes
    #[serde(rename = "M")]
    Map(BTreeMap<String, AttributeValue>),
    /// Set of strings
    #[serde(rename = "SS")]
    StringSet(Vec<String>),
    /// Set of numbers, each kept as literal text
    #[serde(rename = "NS")]
    NumberSet(Vec<String>),
    /// Set of binaries, each kept as base64 text
    #[serde(rename = "BS")]
    BinarySet(Vec<String>),
}

impl fmt::Display for AttributeValue {
    /// Renders the value as JSON-shaped text: strings quoted and escaped,
    /// numbers as their literal text, binaries as quoted base64, lists and
    /// maps recursively, sets as lists.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(text) | Self::Binary(text) => write_quoted(f, text),
            Self::Number(literal) => f.write_str(literal),
            Self::Boolean(flag) => write!(f, "{flag}"),
            Self::Null(_) => f.write_str("null"),
            Self::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (index, (name, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(f, name)?;
                    write!(f, ": {value}")?;
                }
                f.write_str("}")
            }
            Self::StringSet(members) | Self::BinarySet(members) => {
                f.write_str("[")?;
                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(f, member)?;
                }
                f.write_str("]")
            }
            Self::NumberSet(members) => {
                f.write_str("[")?;
                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(member)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// JSON-quote a string, escaping control characters and quotes.
fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let quoted = serde_json::to_string(text).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}
