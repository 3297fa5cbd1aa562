// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the fault handling decorators.
//!
//! This module contains message types for:
//! * Faults captured as failure outcomes
//! * Faults handed back to the host engine
//! * Records dropped by the logging decorators
//! * Faults annotated by the describing decorators

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// An unrecoverable fault was captured as a failure outcome.
///
/// # Log Level
/// `debug!` - Routine, the failure travels on as a record
pub struct FaultCaptured<'a> {
    pub fault_class: &'a str,
    pub message: &'a str,
}

impl Display for FaultCaptured<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Captured {}: {}", self.fault_class, self.message)
    }
}

impl StructuredLog for FaultCaptured<'_> {
    fn log(&self) {
        tracing::debug!(
            fault_class = self.fault_class,
            fault_message = self.message,
            "{}", self
        );
    }
}

/// A recoverable fault is propagated to the host engine.
///
/// # Log Level
/// `debug!` - The host engine reports the fault itself
pub struct FaultRethrown<'a> {
    pub fault_class: &'a str,
    pub message: &'a str,
}

impl Display for FaultRethrown<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rethrowing recoverable {}: {}",
            self.fault_class, self.message
        )
    }
}

impl StructuredLog for FaultRethrown<'_> {
    fn log(&self) {
        tracing::debug!(
            fault_class = self.fault_class,
            fault_message = self.message,
            "{}", self
        );
    }
}

/// A record could not be processed and was dropped.
///
/// # Log Level
/// `error!` - Data was discarded
///
/// # Example
/// ```
/// use streamguard::observability::messages::capture::RecordDropped;
///
/// let msg = RecordDropped {
///     key: "1",
///     value: "foo",
///     fault_class: "my_app::ParseFailure",
///     message: "bad",
///     stack_trace: "my_app::ParseFailure: bad",
/// };
///
/// assert_eq!(msg.to_string(), "Cannot process ('1', 'foo')");
/// ```
pub struct RecordDropped<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub fault_class: &'a str,
    pub message: &'a str,
    pub stack_trace: &'a str,
}

impl Display for RecordDropped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Cannot process ('{}', '{}')", self.key, self.value)
    }
}

impl StructuredLog for RecordDropped<'_> {
    fn log(&self) {
        tracing::error!(
            key = self.key,
            value = self.value,
            fault_class = self.fault_class,
            fault_message = self.message,
            stack_trace = self.stack_trace,
            "{}", self
        );
    }
}

/// A fault was annotated with its input before propagating.
///
/// # Log Level
/// `debug!` - The annotated fault is reported by the host engine
pub struct FaultDescribed<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub fault_class: &'a str,
}

impl Display for FaultDescribed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Describing {} raised for ('{}', '{}')",
            self.fault_class, self.key, self.value
        )
    }
}

impl StructuredLog for FaultDescribed<'_> {
    fn log(&self) {
        tracing::debug!(
            key = self.key,
            value = self.value,
            fault_class = self.fault_class,
            "{}", self
        );
    }
}
