// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::record::{Record, RecordMetadata};

/// The host engine's per-invocation output path and position provider.
///
/// Contexts are handed to processors for the duration of one `process` call.
/// Forwarded records go downstream synchronously, in call order.
pub trait ProcessorContext<K, V> {
    /// Send a record to the downstream stages.
    fn forward(&mut self, record: Record<K, V>);

    /// Position of the record currently being processed.
    fn record_metadata(&self) -> RecordMetadata;

    /// Wall clock time of the host engine, epoch millis.
    fn current_system_time_ms(&self) -> i64;
}
