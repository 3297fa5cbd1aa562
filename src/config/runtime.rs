// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::classify::ClassifierPolicy;
use crate::config::{Config, Strategy};
use crate::converters::SerializedDeadLetterConverter;
use crate::deadletter::{DeadLetterProcessor, ErrorHeaderProcessor};

/// The pieces a host topology needs to wire one decorated stage.
#[derive(Debug, Clone)]
pub struct Runtime {
    pub description: String,
    pub strategy: Strategy,
    pub classifier: ClassifierPolicy,
    pub converter: SerializedDeadLetterConverter,
}

impl Runtime {
    /// Processor turning the error stream into serialized dead letters.
    pub fn dead_letter_processor(&self) -> DeadLetterProcessor<SerializedDeadLetterConverter> {
        DeadLetterProcessor::new(self.description.clone(), self.converter)
    }

    /// Processor tagging failed records with failure headers.
    pub fn header_processor(&self) -> ErrorHeaderProcessor {
        ErrorHeaderProcessor::new(self.description.clone())
    }
}

/// Error handling runtime builder.
///
/// # Examples
/// ```
/// use streamguard::classify::ClassifierPolicy;
/// use streamguard::config::{Config, DeadLetterOptions, RuntimeBuilder, Strategy};
/// use streamguard::converters::DeadLetterFormat;
///
/// let config = Config {
///     description: "Parse quantity".to_string(),
///     strategy: Strategy::Capture,
///     classifier: ClassifierPolicy::CaptureAll,
///     dead_letter: DeadLetterOptions { format: DeadLetterFormat::Protobuf },
/// };
///
/// let runtime = RuntimeBuilder::from_config(&config);
///
/// assert_eq!(runtime.classifier, ClassifierPolicy::CaptureAll);
/// assert_eq!(runtime.converter.format(), DeadLetterFormat::Protobuf);
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    pub fn from_config(cfg: &Config) -> Runtime {
        Runtime {
            description: cfg.description.clone(),
            strategy: cfg.strategy,
            classifier: cfg.classifier,
            converter: SerializedDeadLetterConverter::new(cfg.dead_letter.format),
        }
    }
}
