// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Reference [`DeadLetterConverter`](crate::traits::DeadLetterConverter)s.
//!
//! * [`JsonDeadLetterConverter`] - a `serde_json::Value` document
//! * [`ProtoDeadLetterConverter`] - the `deadletter.v1.DeadLetter` protobuf message
//! * [`SerializedDeadLetterConverter`] - either of the above, encoded to bytes

pub mod json;
pub mod proto;
pub mod serialized;

pub use json::JsonDeadLetterConverter;
pub use proto::ProtoDeadLetterConverter;
pub use serialized::{DeadLetterFormat, SerializedDeadLetterConverter};
