// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! All diagnostic and operational log lines of the crate are message types in
//! [`messages`]. Each message is a struct with a `Display` implementation and a
//! [`messages::StructuredLog`] implementation that emits it through `tracing`
//! at its level, with the struct fields attached as structured fields.
//!
//! # Usage
//!
//! ```rust
//! use streamguard::observability::messages::capture::FaultCaptured;
//! use streamguard::observability::messages::StructuredLog;
//!
//! let msg = FaultCaptured {
//!     fault_class: "my_app::ParseFailure",
//!     message: "bad",
//! };
//!
//! msg.log();
//! ```

pub mod messages;
