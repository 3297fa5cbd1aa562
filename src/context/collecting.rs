// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::record::{Record, RecordMetadata};
use crate::traits::ProcessorContext;

/// In-memory context that collects forwarded records.
///
/// Stands in for the host engine in tests and in the demo binary. The caller
/// sets the position of the record about to be processed and drains the
/// forwarded records afterwards.
#[derive(Debug)]
pub struct CollectingContext<K, V> {
    forwarded: Vec<Record<K, V>>,
    metadata: RecordMetadata,
    system_time_ms: i64,
}

impl<K, V> CollectingContext<K, V> {
    pub fn new(metadata: RecordMetadata) -> Self {
        Self {
            forwarded: Vec::new(),
            metadata,
            system_time_ms: 0,
        }
    }

    pub fn with_system_time_ms(mut self, system_time_ms: i64) -> Self {
        self.system_time_ms = system_time_ms;
        self
    }

    /// Move to the next input record.
    pub fn set_metadata(&mut self, metadata: RecordMetadata) {
        self.metadata = metadata;
    }

    pub fn set_system_time_ms(&mut self, system_time_ms: i64) {
        self.system_time_ms = system_time_ms;
    }

    pub fn forwarded(&self) -> &[Record<K, V>] {
        &self.forwarded
    }

    pub fn take_forwarded(&mut self) -> Vec<Record<K, V>> {
        std::mem::take(&mut self.forwarded)
    }
}

impl<K, V> ProcessorContext<K, V> for CollectingContext<K, V> {
    fn forward(&mut self, record: Record<K, V>) {
        self.forwarded.push(record);
    }

    fn record_metadata(&self) -> RecordMetadata {
        self.metadata.clone()
    }

    fn current_system_time_ms(&self) -> i64 {
        self.system_time_ms
    }
}
