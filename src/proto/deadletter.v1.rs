// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Cause of a failed record.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Cause {
    #[prost(string, optional, tag = "1")]
    pub message: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "2")]
    pub stack_trace: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "3")]
    pub error_class: ::core::option::Option<::prost::alloc::string::String>,
}

/// A record that could not be processed.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeadLetter {
    #[prost(string, tag = "1")]
    pub description: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub cause: ::core::option::Option<Cause>,
    #[prost(string, optional, tag = "3")]
    pub input_value: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "4")]
    pub topic: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int32, optional, tag = "5")]
    pub partition: ::core::option::Option<i32>,
    #[prost(int64, optional, tag = "6")]
    pub offset: ::core::option::Option<i64>,
    /// Epoch millis of the input record.
    #[prost(int64, optional, tag = "7")]
    pub input_timestamp_ms: ::core::option::Option<i64>,
}
