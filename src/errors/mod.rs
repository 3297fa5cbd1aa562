// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod processing;
mod transport;

pub use config::ConfigError;
pub use processing::ProcessingError;
pub use transport::TransportError;
