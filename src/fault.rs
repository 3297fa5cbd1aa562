// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The fault type raised by processing stages.
//!
//! A [`Fault`] is what a stage returns in its `Err` branch. It wraps an
//! [`anyhow::Error`] so that any `std::error::Error` can be propagated with `?`,
//! and it remembers the concrete type name of the error it was created from.
//! That type name is the `error_class` recorded on dead letters.
//!
//! Panics are not faults. They are never caught by any decorator in this crate
//! and always unwind through to the host engine.

use std::any::type_name;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};

/// A processing fault together with the type name of its originating error.
pub struct Fault {
    inner: anyhow::Error,
    class: &'static str,
}

impl Fault {
    /// Wrap a concrete error, recording its type name as the fault class.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            inner: anyhow::Error::new(error),
            class: type_name::<E>(),
        }
    }

    /// Create an ad-hoc fault from a printable message.
    pub fn msg<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self::from_anyhow(anyhow::Error::msg(message))
    }

    /// Adopt an existing `anyhow::Error`. The concrete type is no longer known
    /// at this point, so the class is reported as `anyhow::Error`.
    pub fn from_anyhow(error: anyhow::Error) -> Self {
        Self {
            inner: error,
            class: type_name::<anyhow::Error>(),
        }
    }

    /// Fully qualified type name of the error this fault was created from.
    pub fn class(&self) -> &'static str {
        self.class
    }

    /// Top-level message, or `None` when the error displays as an empty string.
    pub fn message(&self) -> Option<String> {
        let message = self.inner.to_string();
        if message.is_empty() {
            None
        } else {
            Some(message)
        }
    }

    /// Multi-line rendering of the whole source chain, headed by the class.
    ///
    /// A backtrace is appended when one was captured (`RUST_BACKTRACE=1`).
    pub fn stack_trace(&self) -> String {
        format!("{}: {:?}", self.class, self.inner)
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Display + Debug + Send + Sync + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    pub fn is<E>(&self) -> bool
    where
        E: Display + Debug + Send + Sync + 'static,
    {
        self.inner.is::<E>()
    }

    /// The immediate cause of the wrapped error, if any.
    pub fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }

    /// Iterate the wrapped error and all of its causes, outermost first.
    pub fn chain(&self) -> anyhow::Chain<'_> {
        self.inner.chain()
    }

    pub fn into_inner(self) -> anyhow::Error {
        self.inner
    }
}

impl<E> From<E> for Fault
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl From<Fault> for Box<dyn StdError + Send + Sync + 'static> {
    fn from(fault: Fault) -> Self {
        fault.inner.into()
    }
}

impl From<Fault> for Box<dyn StdError + 'static> {
    fn from(fault: Fault) -> Self {
        fault.inner.into()
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl Debug for Fault {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("class", &self.class)
            .field("error", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug, thiserror::Error)]
    #[error("{0}")]
    struct ParseFailure(String);

    #[derive(Debug, thiserror::Error)]
    #[error("outer failure")]
    struct Outer {
        #[source]
        source: ParseFailure,
    }

    fn parse(input: &str) -> Result<u32, Fault> {
        let value = input.parse::<u32>()?;
        Ok(value)
    }

    #[test]
    fn test_class_is_concrete_type_name() {
        let fault = Fault::new(ParseFailure("bad".to_string()));
        assert!(fault.class().ends_with("ParseFailure"));
        assert_eq!(fault.message().as_deref(), Some("bad"));
    }

    #[test]
    fn test_question_mark_converts_std_errors() {
        let fault = parse("not a number").unwrap_err();
        assert!(fault.class().ends_with("ParseIntError"));
        assert!(fault.is::<std::num::ParseIntError>());
    }

    #[test]
    fn test_empty_message_is_absent() {
        let fault = Fault::new(ParseFailure(String::new()));
        assert_eq!(fault.message(), None);
    }

    #[test]
    fn test_stack_trace_contains_whole_chain() {
        let fault = Fault::new(Outer {
            source: ParseFailure("inner detail".to_string()),
        });
        let trace = fault.stack_trace();
        assert!(trace.starts_with(fault.class()));
        assert!(trace.contains("outer failure"));
        assert!(trace.contains("inner detail"));
        assert!(trace.lines().count() > 1);
        assert_eq!(fault.chain().count(), 2);
    }

    #[test]
    fn test_source_is_immediate_cause() {
        let fault = Fault::new(Outer {
            source: ParseFailure("inner".to_string()),
        });
        let source = fault.source().expect("outer error has a source");
        assert_eq!(source.to_string(), "inner");
    }

    #[test]
    fn test_msg_and_anyhow_faults() {
        let fault = Fault::msg("plain message");
        assert_eq!(fault.class(), "anyhow::Error");
        assert_eq!(fault.to_string(), "plain message");

        let fault = Fault::from_anyhow(anyhow::anyhow!("from anyhow"));
        assert_eq!(fault.message().as_deref(), Some("from anyhow"));
    }

    #[test]
    fn test_downcast_to_original_error() {
        let fault = Fault::new(io::Error::new(io::ErrorKind::TimedOut, "slow"));
        let io_error = fault.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_error.kind(), io::ErrorKind::TimedOut);
        assert!(fault.downcast_ref::<ParseFailure>().is_none());
    }

    #[test]
    fn test_boxed_fault_keeps_message() {
        let boxed: Box<dyn StdError + Send + Sync> = Fault::msg("boxed").into();
        assert_eq!(boxed.to_string(), "boxed");
    }
}
