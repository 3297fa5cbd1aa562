// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::error::Error as StdError;
use thiserror::Error;

/// A stage fault annotated with the input record that triggered it.
///
/// Raised by the describing decorators. `key` and `value` hold the rendered
/// input, `null` standing in for absent values.
#[derive(Debug, Error)]
#[error("Cannot process ('{key}', '{value}')")]
pub struct ProcessingError {
    pub key: String,
    pub value: String,
    #[source]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl ProcessingError {
    pub fn new<E>(key: String, value: String, source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self {
            key,
            value,
            source: source.into(),
        }
    }
}
