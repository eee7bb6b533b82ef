// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Captured device signals

use serde::{Serialize, Serializer};

use super::provider::SignalProvider;

/// CPU core count assumed when the platform does not report one
pub const DEFAULT_CPU_CORES: u32 = 4;

/// Pixel ratio assumed when the platform does not report one
pub const DEFAULT_PIXEL_RATIO: f64 = 1.0;

/// Screen geometry and touch capability
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenSignals {
    /// Viewport width in CSS pixels
    pub width: u32,
    /// Viewport height in CSS pixels
    pub height: u32,
    /// Device pixel ratio (0 means unreported)
    pub pixel_ratio: f64,
    /// Maximum simultaneous touch points
    pub max_touch_points: u32,
}

impl ScreenSignals {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_ratio: DEFAULT_PIXEL_RATIO,
            max_touch_points: 0,
        }
    }

    pub fn with_touch_points(mut self, points: u32) -> Self {
        self.max_touch_points = points;
        self
    }

    pub fn with_pixel_ratio(mut self, ratio: f64) -> Self {
        self.pixel_ratio = ratio;
        self
    }
}

/// Pointer and hover media-feature results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerSignals {
    /// `(pointer: coarse)` matches
    pub coarse: bool,
    /// `(pointer: fine)` matches
    pub fine: bool,
    /// `(hover: hover)` matches
    pub hover: bool,
}

impl PointerSignals {
    /// A finger on a touchscreen: coarse pointer, no hover
    pub fn touch() -> Self {
        Self {
            coarse: true,
            fine: false,
            hover: false,
        }
    }

    /// A mouse or trackpad: fine pointer with hover
    pub fn mouse() -> Self {
        Self {
            coarse: false,
            fine: true,
            hover: true,
        }
    }
}

/// Battery status as reported by the platform.
///
/// Times are in seconds. `f64::INFINITY` means the platform cannot estimate
/// the value, matching the browser Battery Status API.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryStatus {
    /// Charge level in `[0, 1]`
    pub level: Option<f64>,
    pub charging: Option<bool>,
    /// Seconds until full; 0 when full or not charging
    #[serde(serialize_with = "serialize_seconds")]
    pub charging_time: Option<f64>,
    /// Seconds until empty
    #[serde(serialize_with = "serialize_seconds")]
    pub discharging_time: Option<f64>,
}

impl BatteryStatus {
    /// A full battery on mains power, the way desktops without a real
    /// battery tend to report
    pub fn plugged_in_full() -> Self {
        Self {
            level: Some(1.0),
            charging: Some(false),
            charging_time: Some(0.0),
            discharging_time: Some(f64::INFINITY),
        }
    }

    /// A battery draining at `level` with `remaining` seconds left
    pub fn discharging(level: f64, remaining: f64) -> Self {
        Self {
            level: Some(level),
            charging: Some(false),
            charging_time: Some(f64::INFINITY),
            discharging_time: Some(remaining),
        }
    }

    /// A battery charging from `level`, full in `until_full` seconds
    pub fn charging(level: f64, until_full: f64) -> Self {
        Self {
            level: Some(level),
            charging: Some(true),
            charging_time: Some(until_full),
            discharging_time: Some(f64::INFINITY),
        }
    }
}

/// Outcome of the asynchronous battery read
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BatteryReading {
    /// The read resolved with a status
    Status(BatteryStatus),
    /// No battery API on this platform
    Unsupported,
    /// The API exists but the read failed
    Failed { reason: String },
}

impl BatteryReading {
    pub fn status(&self) -> Option<&BatteryStatus> {
        match self {
            BatteryReading::Status(status) => Some(status),
            _ => None,
        }
    }
}

/// Immutable record of every signal read during one classification
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalSnapshot {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub pixel_ratio: f64,
    pub touch_capable: bool,
    /// `None` when media-feature queries are unsupported
    pub pointer: Option<PointerSignals>,
    pub battery: BatteryReading,
    pub cpu_cores: u32,
    /// Diagnostic only
    pub platform: String,
    /// Diagnostic only
    pub user_agent: String,
}

impl SignalSnapshot {
    /// Read all signals from a provider.
    ///
    /// Screen and pointer are read first, then the battery read is awaited,
    /// then the core count. A failed battery read is recorded, not returned.
    pub async fn capture<P>(provider: &P) -> Self
    where
        P: SignalProvider + ?Sized,
    {
        let screen = provider.screen();
        let pointer = provider.pointer();

        let battery = match provider.battery().await {
            Ok(status) => BatteryReading::Status(status),
            Err(err) if err.is_unsupported() => {
                tracing::debug!(target: "formfactor.signals", "battery API unsupported");
                BatteryReading::Unsupported
            }
            Err(err) => {
                tracing::warn!(target: "formfactor.signals", "battery read failed: {}", err);
                BatteryReading::Failed {
                    reason: err.to_string(),
                }
            }
        };

        let cpu_cores = provider
            .cpu_cores()
            .filter(|&cores| cores > 0)
            .unwrap_or(DEFAULT_CPU_CORES);

        let environment = provider.environment();

        Self::from_parts(screen, pointer, battery, cpu_cores, environment)
    }

    /// Assemble a snapshot from already-read signals
    pub fn from_parts(
        screen: ScreenSignals,
        pointer: Option<PointerSignals>,
        battery: BatteryReading,
        cpu_cores: u32,
        environment: EnvironmentInfo,
    ) -> Self {
        let pixel_ratio = if screen.pixel_ratio > 0.0 && screen.pixel_ratio.is_finite() {
            screen.pixel_ratio
        } else {
            DEFAULT_PIXEL_RATIO
        };

        Self {
            viewport_width: screen.width,
            viewport_height: screen.height,
            pixel_ratio,
            touch_capable: screen.max_touch_points > 0,
            pointer,
            battery,
            cpu_cores,
            platform: environment.platform,
            user_agent: environment.user_agent,
        }
    }

    /// Viewport width over height.
    ///
    /// A zero height yields an infinite or NaN ratio; callers are expected to
    /// supply a non-zero height.
    pub fn aspect_ratio(&self) -> f64 {
        self.viewport_width as f64 / self.viewport_height as f64
    }
}

/// Platform identification, collected for diagnostics only
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentInfo {
    pub platform: String,
    pub user_agent: String,
}

fn serialize_seconds<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(seconds) if seconds.is_infinite() => serializer.serialize_str("Infinity"),
        Some(seconds) => serializer.serialize_f64(*seconds),
        None => serializer.serialize_none(),
    }
}
