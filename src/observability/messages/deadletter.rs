// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for dead letter construction.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A dead letter was built for a captured failure.
///
/// # Log Level
/// `debug!` - One per failed record
pub struct DeadLetterCreated<'a> {
    pub description: &'a str,
    pub fault_class: &'a str,
    pub topic: Option<&'a str>,
    pub partition: Option<i32>,
    pub offset: Option<i64>,
}

impl Display for DeadLetterCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dead letter '{}' for {} at {}-{}@{}",
            self.description,
            self.fault_class,
            self.topic.unwrap_or("?"),
            self.partition.map_or_else(|| "?".to_string(), |p| p.to_string()),
            self.offset.map_or_else(|| "?".to_string(), |o| o.to_string()),
        )
    }
}

impl StructuredLog for DeadLetterCreated<'_> {
    fn log(&self) {
        tracing::debug!(
            description = self.description,
            fault_class = self.fault_class,
            topic = self.topic,
            partition = self.partition,
            offset = self.offset,
            "{}", self
        );
    }
}

/// A value could not be rendered as JSON and fell back to its `Debug` text.
///
/// # Log Level
/// `warn!` - Degraded output
pub struct RenderFallback<'a> {
    pub type_name: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for RenderFallback<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to render {} as JSON, using debug text: {}",
            self.type_name, self.error
        )
    }
}

impl StructuredLog for RenderFallback<'_> {
    fn log(&self) {
        tracing::warn!(
            type_name = self.type_name,
            error = %self.error,
            "{}", self
        );
    }
}
