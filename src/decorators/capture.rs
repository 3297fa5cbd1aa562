// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::classify::{Classifier, DefaultClassifier};
use crate::context::CapturingContext;
use crate::fault::Fault;
use crate::observability::messages::capture::{FaultCaptured, FaultRethrown};
use crate::observability::messages::StructuredLog;
use crate::outcome::Outcome;
use crate::record::Record;
use crate::stage::{Emission, Stage};
use crate::traits::{FixedKeyProcessor, Processor, ProcessorContext};

/// Captures unrecoverable faults of the wrapped stage as failure outcomes.
///
/// On success the produced values are emitted as [`Outcome::Success`] exactly
/// as the stage produced them. On an unrecoverable fault a single
/// [`Outcome::Failure`] carries the original key, value and fault. Faults the
/// classifier deems recoverable propagate unchanged.
///
/// # Example
/// ```
/// use streamguard::decorators::ErrorCapturing;
/// use streamguard::{stage, Fault};
///
/// let mut lengths = ErrorCapturing::new(stage::map_values(|value: &String| {
///     if value == "bad" {
///         return Err(Fault::msg("bad"));
///     }
///     Ok(value.len())
/// }));
///
/// let ok = lengths.apply(1, "foo".to_string()).unwrap();
/// assert_eq!(ok[0].values(), &[3]);
///
/// let failed = lengths.apply(2, "bad".to_string()).unwrap();
/// assert!(failed[0].is_failure());
/// ```
pub struct ErrorCapturing<S, C = DefaultClassifier> {
    inner: S,
    classifier: C,
}

impl<S> ErrorCapturing<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            classifier: DefaultClassifier,
        }
    }
}

impl<S, C> ErrorCapturing<S, C>
where
    C: Classifier,
{
    /// Replace the classifier deciding which faults propagate.
    pub fn with_classifier<C2>(self, classifier: C2) -> ErrorCapturing<S, C2>
    where
        C2: Classifier,
    {
        ErrorCapturing {
            inner: self.inner,
            classifier,
        }
    }

    /// Run the stage on one input and emit its outcomes.
    pub fn apply<K, V, O>(&mut self, key: K, value: V) -> Result<Vec<Outcome<K, V, O::Item>>, Fault>
    where
        S: Stage<K, V, O>,
        O: Emission,
    {
        match self.inner.call(&key, &value) {
            Ok(output) => Ok(output.emit()),
            Err(fault) => Ok(vec![capture(&self.classifier, key, value, fault)?]),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

/// Classify `fault`: propagate it when recoverable, otherwise turn it into a
/// failure outcome for the given input.
pub(crate) fn capture<K, V, T, C>(
    classifier: &C,
    key: K,
    value: V,
    fault: Fault,
) -> Result<Outcome<K, V, T>, Fault>
where
    C: Classifier + ?Sized,
{
    let message = fault.to_string();

    if classifier.is_recoverable(&fault) {
        FaultRethrown {
            fault_class: fault.class(),
            message: &message,
        }
        .log();
        return Err(fault);
    }

    FaultCaptured {
        fault_class: fault.class(),
        message: &message,
    }
    .log();
    Ok(Outcome::failure(key, value, fault))
}

/// Records forwarded by the wrapped processor arrive downstream as successes
/// under `Some(key)`. A captured failure is forwarded under `None`, since the
/// rewritten key it would have had is unknown.
impl<K, V, P, C> Processor<K, V> for ErrorCapturing<P, C>
where
    P: Processor<K, V>,
    C: Classifier,
    K: Clone,
    V: Clone,
{
    type KeyOut = Option<P::KeyOut>;
    type ValueOut = Outcome<K, V, P::ValueOut>;

    fn process(
        &mut self,
        record: &Record<K, V>,
        context: &mut dyn ProcessorContext<Self::KeyOut, Self::ValueOut>,
    ) -> Result<(), Fault> {
        let result = {
            let mut capturing = CapturingContext::rekeying(&mut *context);
            self.inner.process(record, &mut capturing)
        };

        if let Err(fault) = result {
            let failure = capture(
                &self.classifier,
                record.key.clone(),
                record.value.clone(),
                fault,
            )?;
            context.forward(Record {
                key: None,
                value: failure,
                timestamp: record.timestamp,
                headers: record.headers.clone(),
            });
        }
        Ok(())
    }

    fn close(&mut self) {
        Processor::<K, V>::close(&mut self.inner);
    }
}

impl<K, V, P, C> FixedKeyProcessor<K, V> for ErrorCapturing<P, C>
where
    P: FixedKeyProcessor<K, V>,
    C: Classifier,
    K: Clone,
    V: Clone,
{
    type ValueOut = Outcome<K, V, P::ValueOut>;

    fn process(
        &mut self,
        record: &Record<K, V>,
        context: &mut dyn ProcessorContext<K, Self::ValueOut>,
    ) -> Result<(), Fault> {
        let result = {
            let mut capturing = CapturingContext::fixed_key(&mut *context);
            self.inner.process(record, &mut capturing)
        };

        if let Err(fault) = result {
            let failure = capture(
                &self.classifier,
                record.key.clone(),
                record.value.clone(),
                fault,
            )?;
            context.forward(Record {
                key: record.key.clone(),
                value: failure,
                timestamp: record.timestamp,
                headers: record.headers.clone(),
            });
        }
        Ok(())
    }

    fn close(&mut self) {
        FixedKeyProcessor::<K, V>::close(&mut self.inner);
    }
}
