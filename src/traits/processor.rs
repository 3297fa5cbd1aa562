// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::fault::Fault;
use crate::record::Record;
use crate::traits::ProcessorContext;

/// A stage that emits output by forwarding records through its context,
/// possibly under new keys.
///
/// The input record is borrowed so that a decorator still owns it when the
/// stage faults.
pub trait Processor<K, V> {
    type KeyOut;
    type ValueOut;

    fn process(
        &mut self,
        record: &Record<K, V>,
        context: &mut dyn ProcessorContext<Self::KeyOut, Self::ValueOut>,
    ) -> Result<(), Fault>;

    fn close(&mut self) {}
}

/// A forwarding stage that keeps the input key on every record it emits.
pub trait FixedKeyProcessor<K, V> {
    type ValueOut;

    fn process(
        &mut self,
        record: &Record<K, V>,
        context: &mut dyn ProcessorContext<K, Self::ValueOut>,
    ) -> Result<(), Fault>;

    fn close(&mut self) {}
}
