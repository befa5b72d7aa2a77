/*!
Wire data model for DynamoDB stream change records

Deserializes the JSON shape DynamoDB Streams delivers to a trigger: a batch
of records, each carrying the change kind and before/after snapshots of the
affected item. Attribute values keep their native DynamoDB typing and render
to a lossless textual form for logging.
*/

pub mod attribute;
pub mod record;

pub use attribute::{AttributeValue, Image};
pub use record::{EventKind, StreamBatch, StreamPayload, StreamRecord};
