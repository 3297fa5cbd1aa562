// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::deadletter::DeadLetterDescription;

/// Turns a format-neutral dead letter description into a concrete output.
///
/// Implementations must be pure and must not fail. Any
/// `Fn(DeadLetterDescription) -> T` is a converter, so the identity
/// converter is just `|description| description`.
pub trait DeadLetterConverter {
    type Output;

    fn convert(&self, description: DeadLetterDescription) -> Self::Output;
}

impl<F, T> DeadLetterConverter for F
where
    F: Fn(DeadLetterDescription) -> T,
{
    type Output = T;

    fn convert(&self, description: DeadLetterDescription) -> T {
        self(description)
    }
}
