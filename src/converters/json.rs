// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::deadletter::DeadLetterDescription;
use crate::traits::DeadLetterConverter;
use chrono::SecondsFormat;
use serde_json::{json, Value};

/// Dead letters as JSON documents. Absent fields are `null`, the input
/// timestamp is RFC 3339 with millisecond precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDeadLetterConverter;

impl DeadLetterConverter for JsonDeadLetterConverter {
    type Output = Value;

    fn convert(&self, description: DeadLetterDescription) -> Value {
        let input_timestamp = description
            .input_timestamp
            .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true));

        json!({
            "description": description.description,
            "cause": {
                "message": description.cause.message,
                "stack_trace": description.cause.stack_trace,
                "error_class": description.cause.error_class,
            },
            "input_value": description.input_value,
            "topic": description.topic,
            "partition": description.partition,
            "offset": description.offset,
            "input_timestamp": input_timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::ProcessingFailure;
    use crate::record::RecordMetadata;
    use crate::Fault;

    #[test]
    fn test_document_reads_back_as_description() {
        let failure = ProcessingFailure::new("foo", Fault::msg("bad"));
        let description = DeadLetterDescription::describe(
            "Description",
            &failure,
            &RecordMetadata::new("input", 0, 12),
            1_700_000_000_123,
        );

        let document = JsonDeadLetterConverter.convert(description.clone());

        assert_eq!(document["input_value"], "foo");
        assert_eq!(document["cause"]["message"], "bad");
        assert_eq!(document["input_timestamp"], "2023-11-14T22:13:20.123Z");
        let read_back: DeadLetterDescription = serde_json::from_value(document).unwrap();
        assert_eq!(read_back, description);
    }

    #[test]
    fn test_absent_fields_are_null() {
        let failure = ProcessingFailure::new(None::<i32>, Fault::msg("bad"));
        let description = DeadLetterDescription::describe(
            "Description",
            &failure,
            &RecordMetadata::unavailable(),
            -1,
        );

        let document = JsonDeadLetterConverter.convert(description);

        assert!(document["input_value"].is_null());
        assert!(document["topic"].is_null());
        assert!(document["partition"].is_null());
        assert!(document["input_timestamp"].is_null());
    }
}
