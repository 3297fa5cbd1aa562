// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by the broker client.
//!
//! This is the transport taxonomy the default classifier knows about. Stages
//! that talk to the broker (lookups, schema registry calls, producer sends)
//! surface these so the classifier can tell transient infrastructure trouble
//! from a bad record.

use std::error::Error as StdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    /// The serialized record exceeds what the broker accepts.
    #[error("record of {size} bytes exceeds the maximum request size of {max} bytes")]
    RecordTooLarge { size: usize, max: usize },

    /// Converting a record to or from bytes failed.
    #[error("serialization failed: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    },

    /// A broker request did not complete in time.
    #[error("timed out waiting for {operation}")]
    Timeout { operation: String },

    /// The connection to a broker was lost.
    #[error("broker {broker} disconnected")]
    Disconnected { broker: String },

    /// Partition leadership moved while a request was in flight.
    #[error("not leader or follower for {topic}-{partition}")]
    NotLeaderOrFollower { topic: String, partition: i32 },

    #[error("unknown topic or partition: {topic}")]
    UnknownTopicOrPartition { topic: String },
}

impl TransportError {
    /// Serialization failure caused by `source`.
    pub fn serialization<E>(message: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        TransportError::Serialization {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Serialization failure without an underlying cause.
    pub fn malformed(message: impl Into<String>) -> Self {
        TransportError::Serialization {
            message: message.into(),
            source: None,
        }
    }
}
