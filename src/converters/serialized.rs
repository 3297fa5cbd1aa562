// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::converters::{JsonDeadLetterConverter, ProtoDeadLetterConverter};
use crate::deadletter::DeadLetterDescription;
use crate::traits::DeadLetterConverter;
use prost::Message;
use serde::Deserialize;

/// Wire format of serialized dead letters.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeadLetterFormat {
    #[default]
    Json,
    Protobuf,
}

impl DeadLetterFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeadLetterFormat::Json => "json",
            DeadLetterFormat::Protobuf => "protobuf",
        }
    }
}

/// Dead letters encoded to bytes in the configured format.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerializedDeadLetterConverter {
    format: DeadLetterFormat,
}

impl SerializedDeadLetterConverter {
    pub fn new(format: DeadLetterFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> DeadLetterFormat {
        self.format
    }
}

impl DeadLetterConverter for SerializedDeadLetterConverter {
    type Output = Vec<u8>;

    fn convert(&self, description: DeadLetterDescription) -> Vec<u8> {
        match self.format {
            DeadLetterFormat::Json => JsonDeadLetterConverter
                .convert(description)
                .to_string()
                .into_bytes(),
            DeadLetterFormat::Protobuf => ProtoDeadLetterConverter
                .convert(description)
                .encode_to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::ProcessingFailure;
    use crate::proto::DeadLetter;
    use crate::record::RecordMetadata;
    use crate::Fault;

    fn description() -> DeadLetterDescription {
        let failure = ProcessingFailure::new("foo", Fault::msg("bad"));
        DeadLetterDescription::describe("Description", &failure, &RecordMetadata::new("input", 1, 2), 3)
    }

    #[test]
    fn test_json_bytes() {
        let bytes = SerializedDeadLetterConverter::new(DeadLetterFormat::Json).convert(description());
        let document: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(document["topic"], "input");
        assert_eq!(document["offset"], 2);
    }

    #[test]
    fn test_protobuf_bytes() {
        let bytes =
            SerializedDeadLetterConverter::new(DeadLetterFormat::Protobuf).convert(description());
        let message = DeadLetter::decode(bytes.as_slice()).unwrap();
        assert_eq!(message.description, "Description");
        assert_eq!(message.partition, Some(1));
        assert_eq!(message.input_timestamp_ms, Some(3));
    }

    #[test]
    fn test_format_from_yaml() {
        let format: DeadLetterFormat = serde_yaml::from_str("protobuf").unwrap();
        assert_eq!(format, DeadLetterFormat::Protobuf);
        assert_eq!(SerializedDeadLetterConverter::default().format(), DeadLetterFormat::Json);
    }
}
