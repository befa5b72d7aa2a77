/*!
Stream batches, records, and the change-kind tag
*/

use std::fmt;

use serde::Deserialize;

use crate::attribute::Image;

/// One invocation's worth of change records, in delivery order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamBatch {
    #[serde(default)]
    pub records: Vec<StreamRecord>,
}

/// A single change record from the stream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamRecord {
    /// Unique identifier for this stream event
    #[serde(rename = "eventID")]
    pub event_id: String,
    /// What kind of change happened to the item
    pub event_name: EventKind,
    #[serde(default)]
    pub event_source: Option<String>,
    #[serde(default)]
    pub event_version: Option<String>,
    #[serde(default)]
    pub aws_region: Option<String>,
    /// The change payload carrying the item snapshots
    pub dynamodb: StreamPayload,
}

/// The stream payload: item snapshots plus stream-position metadata.
///
/// Which images are populated depends on the change kind (INSERT carries a
/// new image, REMOVE an old image, MODIFY both), but nothing here enforces
/// that; consumers must tolerate absent images.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamPayload {
    #[serde(default)]
    pub keys: Option<Image>,
    /// Item state after the change
    #[serde(default)]
    pub new_image: Option<Image>,
    /// Item state before the change
    #[serde(default)]
    pub old_image: Option<Image>,
    #[serde(default)]
    pub sequence_number: Option<String>,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    #[serde(default)]
    pub stream_view_type: Option<String>,
    /// Seconds since the epoch, as delivered by the stream
    #[serde(default)]
    pub approximate_creation_date_time: Option<f64>,
}

/// The change kind carried by a record's event-name tag.
///
/// Anything other than the three known tags is preserved verbatim in
/// `Unknown` so it can be reported without loss.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum EventKind {
    Insert,
    Modify,
    Remove,
    Unknown(String),
}

impl From<String> for EventKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "INSERT" => Self::Insert,
            "MODIFY" => Self::Modify,
            "REMOVE" => Self::Remove,
            _ => Self::Unknown(tag),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert => f.write_str("INSERT"),
            Self::Modify => f.write_str("MODIFY"),
            Self::Remove => f.write_str("REMOVE"),
            Self::Unknown(tag) => f.write_str(tag),
        }
    }
}
