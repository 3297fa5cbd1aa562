// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod context;
pub mod converter;
pub mod processor;

pub use context::ProcessorContext;
pub use converter::DeadLetterConverter;
pub use processor::{FixedKeyProcessor, Processor};
