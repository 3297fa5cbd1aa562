// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The per-item result of a decorated stage.
//!
//! A capturing decorator never raises for an unrecoverable fault. It emits an
//! [`Outcome`] per logical output item instead, and the host engine splits the
//! stream into successes and errors:
//!
//! ```
//! use streamguard::{Fault, Outcome};
//!
//! let outcomes: Vec<Outcome<u32, String, usize>> = vec![
//!     Outcome::success(3),
//!     Outcome::failure(2, "bar".to_string(), Fault::msg("bad")),
//! ];
//!
//! let mut values = Vec::new();
//! let mut errors = Vec::new();
//! for outcome in outcomes {
//!     match outcome.into_error() {
//!         Ok(produced) => values.extend(produced),
//!         Err(error) => errors.push(error),
//!     }
//! }
//!
//! assert_eq!(values, vec![3]);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].0, 2);
//! ```

use crate::fault::Fault;

/// The value half of a captured failure, as it travels on the error stream
/// keyed by the original key.
#[derive(Debug)]
pub struct ProcessingFailure<V> {
    pub value: V,
    pub fault: Fault,
}

impl<V> ProcessingFailure<V> {
    pub fn new(value: V, fault: Fault) -> Self {
        Self { value, fault }
    }
}

/// Result of one decorated invocation for one logical output item.
#[derive(Debug)]
pub enum Outcome<K, V, T> {
    /// Produced values in stage order. Empty when the stage declined to emit.
    Success(Vec<T>),
    /// The original input and the fault it raised.
    Failure { key: K, value: V, fault: Fault },
}

impl<K, V, T> Outcome<K, V, T> {
    pub fn success(value: T) -> Self {
        Outcome::Success(vec![value])
    }

    /// A success that produced nothing.
    pub fn empty() -> Self {
        Outcome::Success(Vec::new())
    }

    pub fn failure(key: K, value: V, fault: Fault) -> Self {
        Outcome::Failure { key, value, fault }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure { .. })
    }

    /// Produced values; empty for failures.
    pub fn values(&self) -> &[T] {
        match self {
            Outcome::Success(values) => values,
            Outcome::Failure { .. } => &[],
        }
    }

    /// The fault of a failure.
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure { fault, .. } => Some(fault),
        }
    }

    /// Produced values, discarding any failure. This is the success stream.
    pub fn into_values(self) -> Vec<T> {
        match self {
            Outcome::Success(values) => values,
            Outcome::Failure { .. } => Vec::new(),
        }
    }

    /// Split into the success values or the error stream entry, keyed by
    /// the original input key.
    pub fn into_error(self) -> Result<Vec<T>, (K, ProcessingFailure<V>)> {
        match self {
            Outcome::Success(values) => Ok(values),
            Outcome::Failure { key, value, fault } => Err((key, ProcessingFailure { value, fault })),
        }
    }

    /// Transform produced values, leaving failures untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<K, V, U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Outcome::Success(values) => Outcome::Success(values.into_iter().map(f).collect()),
            Outcome::Failure { key, value, fault } => Outcome::Failure { key, value, fault },
        }
    }
}
