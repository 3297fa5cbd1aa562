// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for loading and validating error-handling configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file '{path}'")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for the expected structure.
    #[error("failed to parse configuration")]
    Parse {
        #[from]
        source: serde_yaml::Error,
    },

    /// Every dead letter needs a description label.
    #[error("description must not be empty")]
    EmptyDescription,
}
