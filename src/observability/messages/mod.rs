// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `capture` - decisions the decorators take about faults
//! * `deadletter` - dead letter construction and value rendering
//! * `config` - configuration loading

use tracing::Span;

pub mod capture;
pub mod config;
pub mod deadletter;

/// Emits a message through `tracing` with structured fields.
pub trait StructuredLog {
    fn log(&self);

    /// A span carrying the same fields, for messages that open a unit of work.
    fn span(&self, _name: &str) -> Span {
        Span::none()
    }
}
