// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Inline failure routing through record headers.
//!
//! Instead of a separate dead letter stream, the original value is forwarded
//! on the primary stream and the failure is described in headers under
//! [`HEADER_PREFIX`].

use crate::deadletter::Cause;
use crate::fault::Fault;
use crate::outcome::ProcessingFailure;
use crate::record::{Headers, Record, RecordMetadata};
use crate::traits::{FixedKeyProcessor, ProcessorContext};

pub const HEADER_PREFIX: &str = "__streams.errors.";
pub const TOPIC: &str = "__streams.errors.topic";
pub const PARTITION: &str = "__streams.errors.partition";
pub const OFFSET: &str = "__streams.errors.offset";
pub const DESCRIPTION: &str = "__streams.errors.description";
pub const EXCEPTION_PREFIX: &str = "__streams.errors.exception.";
pub const EXCEPTION_CLASS_NAME: &str = "__streams.errors.exception.class.name";
pub const EXCEPTION_MESSAGE: &str = "__streams.errors.exception.message";
pub const EXCEPTION_STACK_TRACE: &str = "__streams.errors.exception.stack_trace";

/// Forwards the original value of each failure, tagged with failure headers.
///
/// Headers already present under one of the names above are replaced.
/// Position fields the host cannot provide produce headers without a value.
pub struct ErrorHeaderProcessor {
    description: String,
}

impl ErrorHeaderProcessor {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Write the failure headers for `fault` at `metadata` into `headers`.
    pub fn tag(&self, headers: &mut Headers, fault: &Fault, metadata: &RecordMetadata) {
        let cause = Cause::from_fault(fault);
        let partition = metadata.partition.map(|p| p.to_string());
        let offset = metadata.offset.map(|o| o.to_string());

        headers.set_str(TOPIC, metadata.topic.as_deref());
        headers.set_str(PARTITION, partition.as_deref());
        headers.set_str(OFFSET, offset.as_deref());
        headers.set_str(DESCRIPTION, Some(self.description.as_str()));
        headers.set_str(EXCEPTION_CLASS_NAME, cause.error_class.as_deref());
        headers.set_str(EXCEPTION_MESSAGE, cause.message.as_deref());
        headers.set_str(EXCEPTION_STACK_TRACE, cause.stack_trace.as_deref());
    }
}

impl<K, V> FixedKeyProcessor<K, ProcessingFailure<V>> for ErrorHeaderProcessor
where
    K: Clone,
    V: Clone,
{
    type ValueOut = V;

    fn process(
        &mut self,
        record: &Record<K, ProcessingFailure<V>>,
        context: &mut dyn ProcessorContext<K, V>,
    ) -> Result<(), Fault> {
        let mut headers = record.headers.clone();
        self.tag(&mut headers, &record.value.fault, &context.record_metadata());

        context.forward(Record {
            key: record.key.clone(),
            value: record.value.value.clone(),
            timestamp: record.timestamp,
            headers,
        });
        Ok(())
    }
}
