// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Dead letters: format-neutral descriptions of captured failures and the
//! processors that route them.
//!
//! * [`DeadLetterDescription`] - what went wrong, for which input, where
//! * [`DeadLetterProcessor`] - turns error stream records into converted dead letters
//! * [`ErrorHeaderProcessor`] - re-emits the original value tagged with failure headers
//! * [`render`] - the value rendering rule shared with the logging decorators

pub mod description;
pub mod headers;
pub mod processor;
pub mod render;

pub use description::{Cause, DeadLetterDescription};
pub use headers::ErrorHeaderProcessor;
pub use processor::DeadLetterProcessor;
pub use render::{render, render_or_null};
