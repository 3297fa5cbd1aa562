// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::deadletter::RenderFallback;
use crate::observability::messages::StructuredLog;
use serde::Serialize;
use serde_json::Value;
use std::any::type_name;
use std::fmt::Debug;

/// Render a key or value for dead letters and log lines.
///
/// Strings render as their text, numbers and booleans as their literal, and
/// structured values as compact JSON. Only absent values (`None`, `()`) render
/// as absent; non-finite floats keep their literal. Values that cannot be
/// represented as JSON fall back to their `Debug` text.
pub fn render<T>(value: &T) -> Option<String>
where
    T: Serialize + Debug + ?Sized,
{
    match serde_json::to_value(value) {
        Ok(Value::Null) => render_null(value),
        Ok(Value::String(text)) => Some(text),
        Ok(other) => Some(other.to_string()),
        Err(error) => {
            RenderFallback {
                type_name: type_name::<T>(),
                error: &error,
            }
            .log();
            Some(format!("{:?}", value))
        }
    }
}

// JSON collapses NaN and infinities into null. YAML keeps them apart from
// absent values.
fn render_null<T>(value: &T) -> Option<String>
where
    T: Serialize + Debug + ?Sized,
{
    match serde_yaml::to_value(value) {
        Ok(serde_yaml::Value::Null) => None,
        Ok(serde_yaml::Value::Number(number)) => number.as_f64().map(|n| n.to_string()),
        _ => Some(format!("{:?}", value)),
    }
}

/// [`render`], with absent values spelled `null`.
pub fn render_or_null<T>(value: &T) -> String
where
    T: Serialize + Debug + ?Sized,
{
    render(value).unwrap_or_else(|| "null".to_string())
}
