/*!
Dispatches stream records by change kind and logs their attribute values
*/

use chrono::DateTime;
use ddb_stream_events::{EventKind, Image, StreamBatch, StreamRecord};
use tracing::debug;

use crate::core::sink::LogSink;

/// Process one batch of change records in delivery order.
///
/// Never fails for well-formed input: records with missing or empty images
/// skip the affected section silently, and unrecognized change kinds are
/// reported through the sink rather than as errors.
pub fn handle_batch(batch: &StreamBatch, sink: &mut dyn LogSink) {
    sink.emit(&format!(
        "Beginning to process {} records...",
        batch.records.len()
    ));

    for record in &batch.records {
        handle_record(record, sink);
    }

    sink.emit("Stream processing complete.");
}

fn handle_record(record: &StreamRecord, sink: &mut dyn LogSink) {
    sink.emit(&format!("Event ID: {}", record.event_id));
    sink.emit(&format!("Event Name: {}", record.event_name));
    log_stream_metadata(record);

    let payload = &record.dynamodb;
    match &record.event_name {
        EventKind::Insert => {
            sink.emit("INSERT event detected");
            log_image(sink, "New Image Data:", payload.new_image.as_ref());
        }
        EventKind::Modify => {
            sink.emit("MODIFY event detected");
            log_image(sink, "New Image Data (MODIFY):", payload.new_image.as_ref());
            log_image(sink, "Old Image Data (MODIFY):", payload.old_image.as_ref());
        }
        EventKind::Remove => {
            sink.emit("REMOVE event detected");
            log_image(sink, "Old Image Data (REMOVE):", payload.old_image.as_ref());
        }
        EventKind::Unknown(tag) => {
            sink.emit(&format!("Event name: {tag} not processed"));
        }
    }
}

/// Log one line per attribute under a section header. Absent and empty
/// images are treated identically: the whole section is skipped.
fn log_image(sink: &mut dyn LogSink, header: &str, image: Option<&Image>) {
    let Some(image) = image else {
        return;
    };
    if image.is_empty() {
        return;
    }

    sink.emit(header);
    for (name, value) in image {
        sink.emit(&format!("Attribute Name: {name}, Value: {value}"));
    }
}

/// Stream-position metadata is not part of the record output contract, so
/// it goes straight to debug-level tracing instead of the sink.
fn log_stream_metadata(record: &StreamRecord) {
    let payload = &record.dynamodb;
    if let Some(source) = &record.event_source {
        debug!("Event source: {source}");
    }
    if let Some(sequence) = &payload.sequence_number {
        debug!("Sequence number: {sequence}");
    }
    if let Some(view) = &payload.stream_view_type {
        debug!("Stream view type: {view}");
    }
    if let Some(seconds) = payload.approximate_creation_date_time {
        if let Some(created) = DateTime::from_timestamp(seconds as i64, 0) {
            debug!("Approximate creation time: {}", created.format("%Y-%m-%d %H:%M:%S"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sink::MemorySink;
    use serde_json::json;

    fn batch(value: serde_json::Value) -> StreamBatch {
        serde_json::from_value(value).expect("test batch should deserialize")
    }

    fn dispatch(batch: &StreamBatch) -> Vec<String> {
        let mut sink = MemorySink::new();
        handle_batch(batch, &mut sink);
        sink.lines().to_vec()
    }

    #[test]
    fn test_count_line_matches_record_count() {
        let empty = batch(json!({"Records": []}));
        let lines = dispatch(&empty);
        assert_eq!(lines.first().map(String::as_str), Some("Beginning to process 0 records..."));
        assert_eq!(lines.last().map(String::as_str), Some("Stream processing complete."));

        let three = batch(json!({"Records": [
            {"eventID": "a", "eventName": "INSERT", "dynamodb": {}},
            {"eventID": "b", "eventName": "REMOVE", "dynamodb": {}},
            {"eventID": "c", "eventName": "GAMMA", "dynamodb": {}}
        ]}));
        let lines = dispatch(&three);
        assert_eq!(lines[0], "Beginning to process 3 records...");
    }

    #[test]
    fn test_insert_logs_each_new_attribute_once_and_no_old_section() {
        let input = batch(json!({"Records": [{
            "eventID": "i1",
            "eventName": "INSERT",
            "dynamodb": {
                "NewImage": {
                    "name": {"S": "Alice"},
                    "age": {"N": "30"}
                },
                "OldImage": {"name": {"S": "ignored"}}
            }
        }]}));

        let lines = dispatch(&input);
        let attribute_lines: Vec<_> = lines
            .iter()
            .filter(|line| line.starts_with("Attribute Name:"))
            .collect();
        assert_eq!(
            attribute_lines,
            [
                "Attribute Name: age, Value: 30",
                "Attribute Name: name, Value: \"Alice\"",
            ]
        );
        assert!(lines.iter().any(|line| line == "New Image Data:"));
        assert!(!lines.iter().any(|line| line.starts_with("Old Image Data")));
    }

    #[test]
    fn test_modify_logs_new_section_before_old_section() {
        let input = batch(json!({"Records": [{
            "eventID": "m1",
            "eventName": "MODIFY",
            "dynamodb": {
                "NewImage": {"state": {"S": "after"}},
                "OldImage": {"state": {"S": "before"}}
            }
        }]}));

        let lines = dispatch(&input);
        let new_at = lines
            .iter()
            .position(|line| line == "New Image Data (MODIFY):")
            .expect("new image section");
        let old_at = lines
            .iter()
            .position(|line| line == "Old Image Data (MODIFY):")
            .expect("old image section");
        assert!(new_at < old_at);
        assert_eq!(lines[new_at + 1], "Attribute Name: state, Value: \"after\"");
        assert_eq!(lines[old_at + 1], "Attribute Name: state, Value: \"before\"");
    }

    #[test]
    fn test_modify_with_only_old_image_logs_only_old_section() {
        let input = batch(json!({"Records": [{
            "eventID": "m2",
            "eventName": "MODIFY",
            "dynamodb": {"OldImage": {"state": {"S": "before"}}}
        }]}));

        let lines = dispatch(&input);
        assert!(!lines.iter().any(|line| line == "New Image Data (MODIFY):"));
        assert!(lines.iter().any(|line| line == "Old Image Data (MODIFY):"));
    }

    #[test]
    fn test_remove_logs_only_old_image_section() {
        let input = batch(json!({"Records": [{
            "eventID": "d1",
            "eventName": "REMOVE",
            "dynamodb": {
                "OldImage": {"name": {"S": "Alice"}},
                "NewImage": {"name": {"S": "ignored"}}
            }
        }]}));

        let lines = dispatch(&input);
        assert!(lines.iter().any(|line| line == "Old Image Data (REMOVE):"));
        assert!(!lines.iter().any(|line| line.starts_with("New Image Data")));
    }

    #[test]
    fn test_unknown_kind_logs_single_not_processed_line() {
        let input = batch(json!({"Records": [{
            "eventID": "u1",
            "eventName": "GAMMA",
            "dynamodb": {
                "NewImage": {"name": {"S": "never logged"}},
                "OldImage": {"name": {"S": "never logged"}}
            }
        }]}));

        let lines = dispatch(&input);
        let not_processed: Vec<_> = lines
            .iter()
            .filter(|line| line.ends_with("not processed"))
            .collect();
        assert_eq!(not_processed, ["Event name: GAMMA not processed"]);
        assert!(!lines.iter().any(|line| line.contains("Image Data")));
        assert!(!lines.iter().any(|line| line.starts_with("Attribute Name:")));
    }

    #[test]
    fn test_missing_and_empty_images_skip_sections_silently() {
        let input = batch(json!({"Records": [
            {"eventID": "s1", "eventName": "INSERT", "dynamodb": {}},
            {"eventID": "s2", "eventName": "INSERT", "dynamodb": {"NewImage": {}}},
            {"eventID": "s3", "eventName": "MODIFY", "dynamodb": {"NewImage": {}, "OldImage": {}}},
            {"eventID": "s4", "eventName": "REMOVE", "dynamodb": {"OldImage": {}}}
        ]}));

        let lines = dispatch(&input);
        assert!(!lines.iter().any(|line| line.contains("Image Data")));
        // Every record is still announced and the batch still completes.
        assert_eq!(lines.iter().filter(|line| line.starts_with("Event ID:")).count(), 4);
        assert_eq!(lines.last().map(String::as_str), Some("Stream processing complete."));
    }

    #[test]
    fn test_same_batch_twice_produces_identical_output() {
        let input = batch(json!({"Records": [
            {
                "eventID": "m1",
                "eventName": "MODIFY",
                "dynamodb": {
                    "NewImage": {"count": {"N": "2"}},
                    "OldImage": {"count": {"N": "1"}}
                }
            },
            {"eventID": "u1", "eventName": "DELTA", "dynamodb": {}}
        ]}));

        assert_eq!(dispatch(&input), dispatch(&input));
    }

    #[test]
    fn test_insert_worked_example_exact_output() {
        let input = batch(json!({"Records": [{
            "eventID": "r1",
            "eventName": "INSERT",
            "dynamodb": {"NewImage": {"name": {"S": "Alice"}}}
        }]}));

        assert_eq!(
            dispatch(&input),
            [
                "Beginning to process 1 records...",
                "Event ID: r1",
                "Event Name: INSERT",
                "INSERT event detected",
                "New Image Data:",
                "Attribute Name: name, Value: \"Alice\"",
                "Stream processing complete.",
            ]
        );
    }

    #[test]
    fn test_records_processed_in_delivery_order() {
        let input = batch(json!({"Records": [
            {"eventID": "z-last-alphabetically", "eventName": "INSERT", "dynamodb": {}},
            {"eventID": "a-first-alphabetically", "eventName": "REMOVE", "dynamodb": {}}
        ]}));

        let lines = dispatch(&input);
        let ids: Vec<_> = lines
            .iter()
            .filter(|line| line.starts_with("Event ID:"))
            .collect();
        assert_eq!(
            ids,
            [
                "Event ID: z-last-alphabetically",
                "Event ID: a-first-alphabetically",
            ]
        );
    }
}
