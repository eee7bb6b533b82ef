// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Form-factor scoring and classification
//!
//! A snapshot is scored by independent rules into mobile, laptop and desktop
//! counters. The strictly highest counter wins (earlier category on ties) if
//! it reaches `DECISION_THRESHOLD`; otherwise the device is `unknown`.

pub mod classification;
pub mod engine;
pub mod report;
pub mod rules;
pub mod score;

pub use classification::*;
pub use engine::*;
pub use report::*;
pub use rules::DECISION_THRESHOLD;
pub use score::*;
