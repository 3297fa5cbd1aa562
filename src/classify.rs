// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Recoverable vs unrecoverable fault classification.
//!
//! Decorators ask a [`Classifier`] about every fault a stage raises. A
//! recoverable fault is handed back to the host engine so its own
//! restart/retry machinery deals with it. Everything else is captured.
//!
//! Any `Fn(&Fault) -> bool` is a classifier:
//!
//! ```
//! use streamguard::classify::Classifier;
//! use streamguard::Fault;
//!
//! let rethrow_io = |fault: &Fault| fault.is::<std::io::Error>();
//! assert!(!rethrow_io.is_recoverable(&Fault::msg("bad record")));
//! ```

use crate::errors::TransportError;
use crate::fault::Fault;
use serde::Deserialize;
use std::error::Error as StdError;
use std::io;

pub trait Classifier {
    /// `true` if the fault should propagate instead of being captured.
    fn is_recoverable(&self, fault: &Fault) -> bool;
}

impl<F> Classifier for F
where
    F: Fn(&Fault) -> bool,
{
    fn is_recoverable(&self, fault: &Fault) -> bool {
        self(fault)
    }
}

/// Rethrows transient broker client errors, captures everything else.
///
/// A fault is recoverable only if it is a [`TransportError`] and
/// * it is not [`TransportError::RecordTooLarge`], retrying will never fit it, and
/// * if it is [`TransportError::Serialization`], its immediate cause is an
///   [`io::Error`] of kind [`io::ErrorKind::TimedOut`]. A timing out schema
///   registry is usually just down for a moment; any other serialization
///   failure means the data is malformed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultClassifier;

impl Classifier for DefaultClassifier {
    fn is_recoverable(&self, fault: &Fault) -> bool {
        is_recoverable_transport_error(fault)
    }
}

pub fn is_recoverable_transport_error(fault: &Fault) -> bool {
    match fault.downcast_ref::<TransportError>() {
        None => false,
        Some(TransportError::RecordTooLarge { .. }) => false,
        Some(TransportError::Serialization { source, .. }) => {
            source.as_deref().is_some_and(is_network_timeout)
        }
        Some(_) => true,
    }
}

fn is_network_timeout(cause: &(dyn StdError + Send + Sync + 'static)) -> bool {
    cause
        .downcast_ref::<io::Error>()
        .is_some_and(|error| error.kind() == io::ErrorKind::TimedOut)
}

/// Classifier selected by configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierPolicy {
    /// [`DefaultClassifier`].
    #[default]
    Default,
    /// Never rethrow, capture every fault.
    CaptureAll,
    /// Rethrow every fault.
    RethrowAll,
}

impl ClassifierPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierPolicy::Default => "default",
            ClassifierPolicy::CaptureAll => "capture_all",
            ClassifierPolicy::RethrowAll => "rethrow_all",
        }
    }
}

impl Classifier for ClassifierPolicy {
    fn is_recoverable(&self, fault: &Fault) -> bool {
        match self {
            ClassifierPolicy::Default => DefaultClassifier.is_recoverable(fault),
            ClassifierPolicy::CaptureAll => false,
            ClassifierPolicy::RethrowAll => true,
        }
    }
}
