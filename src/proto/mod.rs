// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

// Message types for proto/deadletter.proto
#[path = "deadletter.v1.rs"]
pub mod deadletter_v1;

pub use deadletter_v1::{Cause, DeadLetter};
