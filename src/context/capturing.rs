// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Forward-aware context for capturing decorators.
//!
//! A processor wrapped by a capturing decorator believes it forwards plain
//! values. Downstream of the decorator every record carries an [`Outcome`], so
//! each eagerly forwarded record is re-tagged as a success on its way through.
//! Nothing is buffered: every `forward` reaches the host context immediately
//! and in the same order the processor issued it.

use crate::outcome::Outcome;
use crate::record::{Record, RecordMetadata};
use crate::traits::ProcessorContext;

/// Wraps the host context of a capturing decorator.
///
/// `KO` is the key type downstream of the decorator: `Option<KR>` for
/// processors that may rewrite keys (failures are forwarded without a key),
/// `KR` itself for fixed-key processors.
pub struct CapturingContext<'a, K, V, KR, VR, KO> {
    inner: &'a mut dyn ProcessorContext<KO, Outcome<K, V, VR>>,
    wrap_key: fn(KR) -> KO,
}

impl<'a, K, V, KR, VR> CapturingContext<'a, K, V, KR, VR, Option<KR>> {
    pub fn rekeying(inner: &'a mut dyn ProcessorContext<Option<KR>, Outcome<K, V, VR>>) -> Self {
        Self {
            inner,
            wrap_key: Some,
        }
    }
}

impl<'a, K, V, VR> CapturingContext<'a, K, V, K, VR, K> {
    pub fn fixed_key(inner: &'a mut dyn ProcessorContext<K, Outcome<K, V, VR>>) -> Self {
        Self {
            inner,
            wrap_key: std::convert::identity,
        }
    }
}

impl<K, V, KR, VR, KO> ProcessorContext<KR, VR> for CapturingContext<'_, K, V, KR, VR, KO> {
    fn forward(&mut self, record: Record<KR, VR>) {
        let Record {
            key,
            value,
            timestamp,
            headers,
        } = record;
        self.inner.forward(Record {
            key: (self.wrap_key)(key),
            value: Outcome::success(value),
            timestamp,
            headers,
        });
    }

    fn record_metadata(&self) -> RecordMetadata {
        self.inner.record_metadata()
    }

    fn current_system_time_ms(&self) -> i64 {
        self.inner.current_system_time_ms()
    }
}
