// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod classify;    // recoverable vs unrecoverable faults
pub mod config;      // YAML config + runtime builder
pub mod context;     // forward-aware and in-memory contexts
pub mod converters;  // JSON, protobuf and byte dead letters
pub mod deadletter;  // descriptions, dead letter and header processors
pub mod decorators;  // capture, log-and-drop, describe
pub mod errors;      // error handling
pub mod fault;
pub mod observability;
pub mod outcome;
pub mod proto;       // dead letter protobuf messages
pub mod record;
pub mod stage;       // stage conventions
pub mod traits;      // host engine abstractions

pub use fault::Fault;
pub use outcome::{Outcome, ProcessingFailure};
