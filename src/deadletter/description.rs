// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::deadletter::render::render;
use crate::fault::Fault;
use crate::outcome::ProcessingFailure;
use crate::record::RecordMetadata;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Detail of the fault behind a dead letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    pub message: Option<String>,
    pub stack_trace: Option<String>,
    pub error_class: Option<String>,
}

impl Cause {
    pub fn from_fault(fault: &Fault) -> Self {
        Self {
            message: fault.message(),
            stack_trace: Some(fault.stack_trace()),
            error_class: Some(fault.class().to_string()),
        }
    }
}

/// Format-neutral description of one failed record.
///
/// Built once per captured fault and handed to a
/// [`DeadLetterConverter`](crate::traits::DeadLetterConverter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadLetterDescription {
    pub description: String,
    pub cause: Cause,
    pub input_value: Option<String>,
    pub topic: Option<String>,
    pub partition: Option<i32>,
    pub offset: Option<i64>,
    pub input_timestamp: Option<DateTime<Utc>>,
}

impl DeadLetterDescription {
    /// Describe `failure` as seen at `metadata`, for an input record stamped
    /// with `timestamp` (epoch millis; negative means unknown).
    ///
    /// # Example
    /// ```
    /// use streamguard::deadletter::DeadLetterDescription;
    /// use streamguard::record::RecordMetadata;
    /// use streamguard::{Fault, ProcessingFailure};
    ///
    /// let failure = ProcessingFailure::new("foo", Fault::msg("bad"));
    /// let metadata = RecordMetadata::new("input", 0, 0);
    /// let letter = DeadLetterDescription::describe("Description", &failure, &metadata, 0);
    ///
    /// assert_eq!(letter.input_value.as_deref(), Some("foo"));
    /// assert_eq!(letter.cause.message.as_deref(), Some("bad"));
    /// assert_eq!(letter.topic.as_deref(), Some("input"));
    /// ```
    pub fn describe<V>(
        description: &str,
        failure: &ProcessingFailure<V>,
        metadata: &RecordMetadata,
        timestamp: i64,
    ) -> Self
    where
        V: Serialize + Debug,
    {
        Self {
            description: description.to_string(),
            cause: Cause::from_fault(&failure.fault),
            input_value: render(&failure.value),
            topic: metadata.topic.clone(),
            partition: metadata.partition,
            offset: metadata.offset,
            input_timestamp: input_timestamp(timestamp),
        }
    }
}

fn input_timestamp(timestamp: i64) -> Option<DateTime<Utc>> {
    if timestamp < 0 {
        return None;
    }
    Utc.timestamp_millis_opt(timestamp).single()
}
