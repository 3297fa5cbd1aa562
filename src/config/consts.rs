// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "streamguard=info";
/// Configuration file read by the demo when none is given
pub const DEFAULT_CONFIG_PATH: &str = "configs/capture.yaml";
