// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod capturing;
mod collecting;

pub use capturing::CapturingContext;
pub use collecting::CollectingContext;
