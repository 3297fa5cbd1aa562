// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fault handling decorators.
//!
//! Each decorator wraps a [`Stage`](crate::stage::Stage),
//! [`Processor`](crate::traits::Processor) or
//! [`FixedKeyProcessor`](crate::traits::FixedKeyProcessor) and decides, per
//! fault, between propagating it and handling it:
//!
//! * [`ErrorCapturing`] - unrecoverable faults become [`Outcome::Failure`](crate::Outcome)
//! * [`ErrorLogging`] - unrecoverable faults are logged, the record is dropped
//! * [`ErrorDescribing`] - every fault is annotated with its input and propagated
//!
//! Panics are never caught and always unwind through every decorator.

pub mod capture;
pub mod describe;
pub mod logging;


pub use capture::ErrorCapturing;
pub use describe::ErrorDescribing;
pub use logging::ErrorLogging;
