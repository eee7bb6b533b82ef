// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Signal provider trait and a static implementation
//!
//! The classifier never reads platform state directly. Everything goes
//! through a `SignalProvider`, so browser bindings, native hosts and tests
//! can all feed the same scoring code.

use async_trait::async_trait;

use super::snapshot::{BatteryStatus, EnvironmentInfo, PointerSignals, ScreenSignals};
use crate::error::{FormFactorError, Result};

/// Source of ambient device signals
#[async_trait]
pub trait SignalProvider: Send + Sync {
    /// Viewport geometry and touch points
    fn screen(&self) -> ScreenSignals;

    /// Pointer/hover media features, or `None` if media queries are unsupported
    fn pointer(&self) -> Option<PointerSignals>;

    /// Read battery status.
    ///
    /// Return `FormFactorError::BatteryUnsupported` when there is no battery
    /// API; any other error counts as a failed read.
    async fn battery(&self) -> Result<BatteryStatus>;

    /// Logical CPU count, if the platform reports one
    fn cpu_cores(&self) -> Option<u32>;

    /// Platform and user-agent strings
    fn environment(&self) -> EnvironmentInfo {
        EnvironmentInfo::default()
    }
}

/// What a `StaticSignals` battery read resolves to
#[derive(Debug, Clone, PartialEq)]
pub enum BatteryOutcome {
    Status(BatteryStatus),
    Unsupported,
    Fails(String),
}

/// Provider that replays a fixed set of signals
#[derive(Debug, Clone)]
pub struct StaticSignals {
    pub screen: ScreenSignals,
    pub pointer: Option<PointerSignals>,
    pub battery: BatteryOutcome,
    pub cpu_cores: Option<u32>,
    pub environment: EnvironmentInfo,
}

impl StaticSignals {
    /// Signals for a `width` x `height` viewport with nothing else reported
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            screen: ScreenSignals::new(width, height),
            pointer: None,
            battery: BatteryOutcome::Unsupported,
            cpu_cores: None,
            environment: EnvironmentInfo::default(),
        }
    }

    pub fn with_touch_points(mut self, points: u32) -> Self {
        self.screen.max_touch_points = points;
        self
    }

    pub fn with_pixel_ratio(mut self, ratio: f64) -> Self {
        self.screen.pixel_ratio = ratio;
        self
    }

    pub fn with_pointer(mut self, pointer: PointerSignals) -> Self {
        self.pointer = Some(pointer);
        self
    }

    pub fn with_battery(mut self, status: BatteryStatus) -> Self {
        self.battery = BatteryOutcome::Status(status);
        self
    }

    pub fn with_failing_battery(mut self, reason: impl Into<String>) -> Self {
        self.battery = BatteryOutcome::Fails(reason.into());
        self
    }

    pub fn with_cpu_cores(mut self, cores: u32) -> Self {
        self.cpu_cores = Some(cores);
        self
    }

    pub fn with_environment(
        mut self,
        platform: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        self.environment = EnvironmentInfo {
            platform: platform.into(),
            user_agent: user_agent.into(),
        };
        self
    }
}

#[async_trait]
impl SignalProvider for StaticSignals {
    fn screen(&self) -> ScreenSignals {
        self.screen
    }

    fn pointer(&self) -> Option<PointerSignals> {
        self.pointer
    }

    async fn battery(&self) -> Result<BatteryStatus> {
        match &self.battery {
            BatteryOutcome::Status(status) => Ok(*status),
            BatteryOutcome::Unsupported => Err(FormFactorError::BatteryUnsupported),
            BatteryOutcome::Fails(reason) => {
                Err(FormFactorError::BatteryUnavailable(reason.clone()))
            }
        }
    }

    fn cpu_cores(&self) -> Option<u32> {
        self.cpu_cores
    }

    fn environment(&self) -> EnvironmentInfo {
        self.environment.clone()
    }
}
