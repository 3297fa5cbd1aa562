// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::classify::{Classifier, DefaultClassifier};
use crate::deadletter::render_or_null;
use crate::fault::Fault;
use crate::observability::messages::capture::{FaultRethrown, RecordDropped};
use crate::observability::messages::StructuredLog;
use crate::record::Record;
use crate::stage::Stage;
use crate::traits::{FixedKeyProcessor, Processor, ProcessorContext};
use serde::Serialize;
use std::fmt::Debug;

/// Logs unrecoverable faults of the wrapped stage and drops the record.
///
/// A dropped record produces the empty output of the stage's convention:
/// `None` for single values, an empty `Vec` for sequences, and no forwarded
/// records for processors. Recoverable faults propagate unchanged.
pub struct ErrorLogging<S, C = DefaultClassifier> {
    inner: S,
    classifier: C,
}

impl<S> ErrorLogging<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            classifier: DefaultClassifier,
        }
    }
}

impl<S, C> ErrorLogging<S, C>
where
    C: Classifier,
{
    pub fn with_classifier<C2>(self, classifier: C2) -> ErrorLogging<S, C2>
    where
        C2: Classifier,
    {
        ErrorLogging {
            inner: self.inner,
            classifier,
        }
    }

    pub fn apply<K, V, O>(&mut self, key: &K, value: &V) -> Result<O, Fault>
    where
        S: Stage<K, V, O>,
        O: Default,
        K: Serialize + Debug,
        V: Serialize + Debug,
    {
        match self.inner.call(key, value) {
            Ok(output) => Ok(output),
            Err(fault) => {
                self.drop_record(key, value, fault)?;
                Ok(O::default())
            }
        }
    }

    fn drop_record<K, V>(&self, key: &K, value: &V, fault: Fault) -> Result<(), Fault>
    where
        K: Serialize + Debug,
        V: Serialize + Debug,
    {
        let message = fault.to_string();

        if self.classifier.is_recoverable(&fault) {
            FaultRethrown {
                fault_class: fault.class(),
                message: &message,
            }
            .log();
            return Err(fault);
        }

        RecordDropped {
            key: &render_or_null(key),
            value: &render_or_null(value),
            fault_class: fault.class(),
            message: &message,
            stack_trace: &fault.stack_trace(),
        }
        .log();
        Ok(())
    }
}

impl<K, V, P, C> Processor<K, V> for ErrorLogging<P, C>
where
    P: Processor<K, V>,
    C: Classifier,
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
        match self.inner.process(record, context) {
            Ok(()) => Ok(()),
            Err(fault) => self.drop_record(&record.key, &record.value, fault),
        }
    }

    fn close(&mut self) {
        Processor::<K, V>::close(&mut self.inner);
    }
}

impl<K, V, P, C> FixedKeyProcessor<K, V> for ErrorLogging<P, C>
where
    P: FixedKeyProcessor<K, V>,
    C: Classifier,
    K: Serialize + Debug,
    V: Serialize + Debug,
{
    type ValueOut = P::ValueOut;

    fn process(
        &mut self,
        record: &Record<K, V>,
        context: &mut dyn ProcessorContext<K, P::ValueOut>,
    ) -> Result<(), Fault> {
        match self.inner.process(record, context) {
            Ok(()) => Ok(()),
            Err(fault) => self.drop_record(&record.key, &record.value, fault),
        }
    }

    fn close(&mut self) {
        FixedKeyProcessor::<K, V>::close(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ClassifierPolicy;
    use crate::context::CollectingContext;
    use crate::errors::TransportError;
    use crate::record::RecordMetadata;
    use crate::stage;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Shared buffer the fmt subscriber writes formatted events into.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn with_captured_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.text())
    }

    fn error_lines(logs: &str) -> Vec<&str> {
        logs.lines().filter(|line| line.contains("ERROR")).collect()
    }

    #[test]
    fn test_dropped_single_value_is_none() {
        let mut decorated = ErrorLogging::new(stage::map_values(|_: &String| {
            Err::<usize, _>(Fault::msg("bad"))
        }));

        let output: Option<usize> = decorated.apply(&1, &"foo".to_string()).unwrap();
        assert_eq!(output, None);
    }

    #[test]
    fn test_dropped_sequence_is_empty() {
        let mut decorated = ErrorLogging::new(stage::flat_map_values(|_: &i32| {
            Err::<Vec<i32>, _>(Fault::msg("bad"))
        }));

        let output: Vec<i32> = decorated.apply(&None::<String>, &3).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_success_passes_through() {
        let mut decorated = ErrorLogging::new(stage::flat_map_values(|value: &i32| {
            Ok::<_, Fault>(vec![*value, *value + 1])
        }));

        let output: Vec<i32> = decorated.apply(&(), &3).unwrap();
        assert_eq!(output, vec![3, 4]);
    }

    #[test]
    fn test_recoverable_fault_is_rethrown() {
        let mut decorated = ErrorLogging::new(stage::map_values(|_: &i32| {
            Err::<i32, _>(Fault::new(TransportError::Timeout {
                operation: "produce".to_string(),
            }))
        }));

        assert!(decorated.apply(&(), &1).is_err());

        let mut decorated = decorated.with_classifier(ClassifierPolicy::CaptureAll);
        assert_eq!(decorated.apply(&(), &1).unwrap(), None);
    }

    #[test]
    fn test_dropped_record_logs_one_error_event() {
        let mut decorated = ErrorLogging::new(stage::map_values(|_: &String| {
            Err::<usize, _>(Fault::msg("bad"))
        }));

        let (output, logs): (Result<Option<usize>, Fault>, _) =
            with_captured_logs(|| decorated.apply(&1, &"foo".to_string()));
        assert_eq!(output.unwrap(), None);

        let errors = error_lines(&logs);
        assert_eq!(errors.len(), 1, "{logs}");
        let event = errors[0];
        assert!(event.contains("Cannot process ('1', 'foo')"), "{event}");
        assert!(event.contains("fault_class="), "{event}");
        assert!(event.contains("fault_message=\"bad\""), "{event}");
        assert!(event.contains("stack_trace="), "{event}");
    }

    #[test]
    fn test_recoverable_fault_logs_no_error_event() {
        let mut decorated = ErrorLogging::new(stage::map_values(|_: &String| {
            Err::<usize, _>(Fault::new(TransportError::Disconnected {
                broker: "broker-1:9092".to_string(),
            }))
        }));

        let (output, logs): (Result<Option<usize>, Fault>, _) =
            with_captured_logs(|| decorated.apply(&1, &"foo".to_string()));

        assert!(output.is_err());
        assert!(error_lines(&logs).is_empty(), "{logs}");
        assert!(!logs.contains("Cannot process"), "{logs}");
    }

    struct Explode;

    impl Processor<i32, String> for Explode {
        type KeyOut = String;
        type ValueOut = usize;

        fn process(
            &mut self,
            record: &Record<i32, String>,
            context: &mut dyn ProcessorContext<String, usize>,
        ) -> Result<(), Fault> {
            context.forward(Record::new(record.value.clone(), 1, record.timestamp));
            Err(Fault::msg("exploded after one forward"))
        }
    }

    #[test]
    fn test_processor_fault_is_dropped_after_earlier_forwards() {
        let mut decorated = ErrorLogging::new(Explode);
        let mut context: CollectingContext<String, usize> =
            CollectingContext::new(RecordMetadata::new("input", 0, 0));

        let record = Record::new(1, "foo".to_string(), 0);
        Processor::process(&mut decorated, &record, &mut context).unwrap();

        assert_eq!(context.forwarded().len(), 1);
    }
}
