// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Device classifier

use super::classification::Classification;
use super::report::ClassificationReport;
use super::rules;
use crate::signals::{SignalProvider, SignalSnapshot};

/// Classifies the device behind a signal provider.
///
/// Holds no state between calls; every `classify` captures a fresh snapshot
/// and scores it from zero.
#[derive(Debug, Clone)]
pub struct DeviceClassifier<P> {
    provider: P,
}

impl<P> DeviceClassifier<P>
where
    P: SignalProvider,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Classify the current device. Never fails.
    pub async fn classify(&self) -> Classification {
        self.classify_with_report().await.classification
    }

    /// Classify and return the full diagnostic report
    pub async fn classify_with_report(&self) -> ClassificationReport {
        crate::classify_with_report(&self.provider).await
    }
}

/// Classify an already captured snapshot
pub fn classify_snapshot(snapshot: &SignalSnapshot) -> Classification {
    rules::score(snapshot).decide()
}
