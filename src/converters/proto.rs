// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::deadletter::DeadLetterDescription;
use crate::proto::deadletter_v1::{Cause, DeadLetter};
use crate::traits::DeadLetterConverter;

/// Dead letters as `deadletter.v1.DeadLetter` messages. Absent fields are
/// left unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtoDeadLetterConverter;

impl DeadLetterConverter for ProtoDeadLetterConverter {
    type Output = DeadLetter;

    fn convert(&self, description: DeadLetterDescription) -> DeadLetter {
        DeadLetter {
            description: description.description,
            cause: Some(Cause {
                message: description.cause.message,
                stack_trace: description.cause.stack_trace,
                error_class: description.cause.error_class,
            }),
            input_value: description.input_value,
            topic: description.topic,
            partition: description.partition,
            offset: description.offset,
            input_timestamp_ms: description.input_timestamp.map(|ts| ts.timestamp_millis()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::ProcessingFailure;
    use crate::record::RecordMetadata;
    use crate::Fault;
    use prost::Message;

    #[test]
    fn test_unset_fields_stay_unset_on_the_wire() {
        let failure = ProcessingFailure::new(None::<String>, Fault::msg("bad"));
        let description = DeadLetterDescription::describe(
            "Description",
            &failure,
            &RecordMetadata::unavailable(),
            -1,
        );

        let message = ProtoDeadLetterConverter.convert(description);
        let decoded = DeadLetter::decode(message.encode_to_vec().as_slice()).unwrap();

        assert_eq!(decoded.input_value, None);
        assert_eq!(decoded.topic, None);
        assert_eq!(decoded.partition, None);
        assert_eq!(decoded.input_timestamp_ms, None);
        assert_eq!(
            decoded.cause.and_then(|cause| cause.message).as_deref(),
            Some("bad")
        );
    }

    #[test]
    fn test_zero_position_is_distinct_from_unset() {
        let failure = ProcessingFailure::new("foo", Fault::msg("bad"));
        let description = DeadLetterDescription::describe(
            "Description",
            &failure,
            &RecordMetadata::new("input", 0, 0),
            0,
        );

        let message = ProtoDeadLetterConverter.convert(description);

        assert_eq!(message.partition, Some(0));
        assert_eq!(message.offset, Some(0));
        assert_eq!(message.input_timestamp_ms, Some(0));
        assert_eq!(message.input_value.as_deref(), Some("foo"));
    }
}
