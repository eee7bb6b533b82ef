// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! formfactor - heuristic mobile / laptop / desktop detection.
//!
//! Device signals (viewport geometry, touch and pointer capability, battery
//! state, CPU core count, aspect ratio) are read through a `SignalProvider`,
//! scored into three competing counters and reduced to a single
//! `Classification`.
//!
//! Architecture highlights:
//! - `signals`: provider trait, captured snapshot, static and host providers
//! - `classifier`: scoring rules, score board, decision and diagnostic report
//! - `logging`: tracing subscriber setup for embedders
//!
//! ```no_run
//! use formfactor::signals::{PointerSignals, StaticSignals};
//!
//! # async fn demo() {
//! let signals = StaticSignals::new(390, 844)
//!     .with_touch_points(5)
//!     .with_pointer(PointerSignals::touch());
//! let label = formfactor::classify(&signals).await;
//! println!("{}", label);
//! # }
//! ```

pub mod classifier;
pub mod error;
pub mod logging;
pub mod signals;

pub use classifier::{Classification, ClassificationReport, DeviceClassifier};
pub use error::{FormFactorError, Result};
pub use signals::{SignalProvider, SignalSnapshot};

/// Classify the device behind `provider`.
///
/// Always resolves to one of `mobile`, `laptop`, `desktop` or `unknown`.
pub async fn classify<P>(provider: &P) -> Classification
where
    P: SignalProvider + ?Sized,
{
    classify_with_report(provider).await.classification
}

/// Classify and return every signal, score and fired rule
pub async fn classify_with_report<P>(provider: &P) -> ClassificationReport
where
    P: SignalProvider + ?Sized,
{
    let snapshot = SignalSnapshot::capture(provider).await;
    ClassificationReport::from_snapshot(snapshot)
}
