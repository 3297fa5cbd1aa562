// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::deadletter::DeadLetterDescription;
use crate::fault::Fault;
use crate::observability::messages::deadletter::DeadLetterCreated;
use crate::observability::messages::StructuredLog;
use crate::outcome::ProcessingFailure;
use crate::record::{Record, RecordMetadata};
use crate::traits::{DeadLetterConverter, FixedKeyProcessor, ProcessorContext};
use serde::Serialize;
use std::fmt::Debug;

/// Turns error stream records into dead letters of the converter's format.
///
/// Every incoming `(key, ProcessingFailure)` record produces exactly one
/// output record with the same key and headers. The output timestamp is the
/// host's current system time; the input record time is kept inside the
/// dead letter as `input_timestamp`.
pub struct DeadLetterProcessor<C> {
    description: String,
    converter: C,
}

impl<C> DeadLetterProcessor<C>
where
    C: DeadLetterConverter,
{
    pub fn new(description: impl Into<String>, converter: C) -> Self {
        Self {
            description: description.into(),
            converter,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Describe and convert a single failure.
    pub fn dead_letter<V>(
        &self,
        failure: &ProcessingFailure<V>,
        metadata: &RecordMetadata,
        timestamp: i64,
    ) -> C::Output
    where
        V: Serialize + Debug,
    {
        let description =
            DeadLetterDescription::describe(&self.description, failure, metadata, timestamp);

        DeadLetterCreated {
            description: &description.description,
            fault_class: failure.fault.class(),
            topic: description.topic.as_deref(),
            partition: description.partition,
            offset: description.offset,
        }
        .log();

        self.converter.convert(description)
    }
}

impl<K, V, C> FixedKeyProcessor<K, ProcessingFailure<V>> for DeadLetterProcessor<C>
where
    K: Clone,
    V: Serialize + Debug,
    C: DeadLetterConverter,
{
    type ValueOut = C::Output;

    fn process(
        &mut self,
        record: &Record<K, ProcessingFailure<V>>,
        context: &mut dyn ProcessorContext<K, C::Output>,
    ) -> Result<(), Fault> {
        let metadata = context.record_metadata();
        let dead_letter = self.dead_letter(&record.value, &metadata, record.timestamp);
        let now = context.current_system_time_ms();

        context.forward(Record {
            key: record.key.clone(),
            value: dead_letter,
            timestamp: now,
            headers: record.headers.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::CollectingContext;
    use crate::record::Headers;

    fn identity(description: DeadLetterDescription) -> DeadLetterDescription {
        description
    }

    #[test]
    fn test_forwards_one_dead_letter_per_failure() {
        let mut processor = DeadLetterProcessor::new("Description", identity);
        let mut context: CollectingContext<i32, DeadLetterDescription> =
            CollectingContext::new(RecordMetadata::new("input", 0, 0)).with_system_time_ms(500);

        let mut headers = Headers::new();
        headers.add("trace", Some(b"abc".to_vec()));
        let record = Record::new(1, ProcessingFailure::new("foo", Fault::msg("bad")), 100)
            .with_headers(headers.clone());

        processor.process(&record, &mut context).unwrap();

        let forwarded = context.take_forwarded();
        assert_eq!(forwarded.len(), 1);
        let letter = &forwarded[0];
        assert_eq!(letter.key, 1);
        assert_eq!(letter.timestamp, 500);
        assert_eq!(letter.headers, headers);
        assert_eq!(letter.value.description, "Description");
        assert_eq!(letter.value.input_value.as_deref(), Some("foo"));
        assert_eq!(letter.value.cause.message.as_deref(), Some("bad"));
        assert_eq!(letter.value.topic.as_deref(), Some("input"));
        assert_eq!(letter.value.partition, Some(0));
        assert_eq!(letter.value.offset, Some(0));
        assert_eq!(
            letter.value.input_timestamp.map(|ts| ts.timestamp_millis()),
            Some(100)
        );
    }

    #[test]
    fn test_absent_key_and_value_survive() {
        let mut processor = DeadLetterProcessor::new("d", identity);
        let mut context: CollectingContext<Option<i32>, DeadLetterDescription> =
            CollectingContext::new(RecordMetadata::unavailable());

        let failure = ProcessingFailure::new(None::<String>, Fault::msg("bad"));
        processor
            .process(&Record::new(None, failure, 0), &mut context)
            .unwrap();

        let forwarded = context.take_forwarded();
        assert_eq!(forwarded[0].key, None);
        assert_eq!(forwarded[0].value.input_value, None);
        assert_eq!(forwarded[0].value.topic, None);
    }

    #[test]
    fn test_closure_converter() {
        let processor = DeadLetterProcessor::new("d", |description: DeadLetterDescription| {
            description.cause.message
        });
        let failure = ProcessingFailure::new(3, Fault::msg("boom"));

        let converted = processor.dead_letter(&failure, &RecordMetadata::unavailable(), 0);

        assert_eq!(converted.as_deref(), Some("boom"));
        assert_eq!(processor.description(), "d");
    }
}
