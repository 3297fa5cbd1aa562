// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::deadletter::render_or_null;
use crate::errors::ProcessingError;
use crate::fault::Fault;
use crate::observability::messages::capture::FaultDescribed;
use crate::observability::messages::StructuredLog;
use crate::record::Record;
use crate::stage::Stage;
use crate::traits::{FixedKeyProcessor, Processor, ProcessorContext};
use serde::Serialize;
use std::fmt::Debug;

/// Annotates every fault of the wrapped stage with the input that raised it.
///
/// The propagated fault is a [`ProcessingError`] reading
/// `Cannot process ('<key>', '<value>')`, whose source is the original fault.
/// Nothing is captured; the host engine decides what happens next.
///
/// # Example
/// ```
/// use streamguard::decorators::ErrorDescribing;
/// use streamguard::errors::ProcessingError;
/// use streamguard::{stage, Fault};
///
/// let mut decorated = ErrorDescribing::new(stage::map_values(|_: &String| {
///     Err::<usize, _>(Fault::msg("bad"))
/// }));
///
/// let fault = decorated.apply(&1, &"foo".to_string()).unwrap_err();
/// assert_eq!(fault.to_string(), "Cannot process ('1', 'foo')");
/// assert!(fault.is::<ProcessingError>());
/// ```
pub struct ErrorDescribing<S> {
    inner: S,
}

impl<S> ErrorDescribing<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn apply<K, V, O>(&mut self, key: &K, value: &V) -> Result<O, Fault>
    where
        S: Stage<K, V, O>,
        K: Serialize + Debug,
        V: Serialize + Debug,
    {
        self.inner
            .call(key, value)
            .map_err(|fault| describe(key, value, fault))
    }
}

fn describe<K, V>(key: &K, value: &V, fault: Fault) -> Fault
where
    K: Serialize + Debug,
    V: Serialize + Debug,
{
    let key = render_or_null(key);
    let value = render_or_null(value);

    FaultDescribed {
        key: &key,
        value: &value,
        fault_class: fault.class(),
    }
    .log();

    Fault::new(ProcessingError::new(key, value, fault))
}

impl<K, V, P> Processor<K, V> for ErrorDescribing<P>
where
    P: Processor<K, V>,
    K: Serialize + Debug,
    V: Serialize + Debug,
{
    type KeyOut = P::KeyOut;
    type ValueOut = P::ValueOut;

    fn process(
        &mut self,
        record: &Record<K, V>,
        context: &mut dyn ProcessorContext<P::KeyOut, P::ValueOut>,
    ) -> Result<(), Fault> {
        self.inner
            .process(record, context)
            .map_err(|fault| describe(&record.key, &record.value, fault))
    }

    fn close(&mut self) {
        Processor::<K, V>::close(&mut self.inner);
    }
}

impl<K, V, P> FixedKeyProcessor<K, V> for ErrorDescribing<P>
where
    P: FixedKeyProcessor<K, V>,
    K: Serialize + Debug,
    V: Serialize + Debug,
{
    type ValueOut = P::ValueOut;

    fn process(
        &mut self,
        record: &Record<K, V>,
        context: &mut dyn ProcessorContext<K, P::ValueOut>,
    ) -> Result<(), Fault> {
        self.inner
            .process(record, context)
            .map_err(|fault| describe(&record.key, &record.value, fault))
    }

    fn close(&mut self) {
        FixedKeyProcessor::<K, V>::close(&mut self.inner);
    }
}
