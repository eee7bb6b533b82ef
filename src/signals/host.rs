// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Signal provider backed by the local machine
//!
//! A native process has no viewport, touch screen or media queries, so those
//! come from the caller. CPU count and platform strings come from `sysinfo`,
//! battery status from the Linux power-supply sysfs tree.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sysinfo::System;

use super::provider::SignalProvider;
use super::snapshot::{BatteryStatus, EnvironmentInfo, PointerSignals, ScreenSignals};
use crate::error::{FormFactorError, Result};

/// Default location of power-supply devices on Linux
pub const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

/// Signal provider for the machine this process runs on
#[derive(Debug, Clone)]
pub struct HostSignalProvider {
    screen: ScreenSignals,
    pointer: Option<PointerSignals>,
    power_supply_root: Option<PathBuf>,
}

impl HostSignalProvider {
    /// Create a provider for a `width` x `height` viewport
    pub fn new(width: u32, height: u32) -> Self {
        let power_supply_root = if cfg!(target_os = "linux") {
            Some(PathBuf::from(POWER_SUPPLY_ROOT))
        } else {
            None
        };

        Self {
            screen: ScreenSignals::new(width, height),
            pointer: None,
            power_supply_root,
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

    /// Report pointer capabilities as if media queries were available
    pub fn with_pointer(mut self, pointer: PointerSignals) -> Self {
        self.pointer = Some(pointer);
        self
    }

    /// Read batteries from a different sysfs root
    pub fn with_power_supply_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.power_supply_root = Some(root.into());
        self
    }

    /// Disable battery reads entirely
    pub fn without_battery(mut self) -> Self {
        self.power_supply_root = None;
        self
    }
}

#[async_trait]
impl SignalProvider for HostSignalProvider {
    fn screen(&self) -> ScreenSignals {
        self.screen
    }

    fn pointer(&self) -> Option<PointerSignals> {
        self.pointer
    }

    async fn battery(&self) -> Result<BatteryStatus> {
        let root = self
            .power_supply_root
            .as_deref()
            .ok_or(FormFactorError::BatteryUnsupported)?;
        read_power_supply(root).await
    }

    fn cpu_cores(&self) -> Option<u32> {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        let cores = sys.cpus().len();
        if cores == 0 {
            return None;
        }
        u32::try_from(cores).ok()
    }

    fn environment(&self) -> EnvironmentInfo {
        let os = System::long_os_version()
            .or_else(System::name)
            .unwrap_or_else(|| std::env::consts::OS.to_string());
        let arch = std::env::consts::ARCH;

        EnvironmentInfo {
            platform: format!("{} {}", std::env::consts::OS, arch),
            user_agent: format!("formfactor/{} ({}; {})", env!("CARGO_PKG_VERSION"), os, arch),
        }
    }
}

/// Find the first battery under `root` and read its status
async fn read_power_supply(root: &Path) -> Result<BatteryStatus> {
    let mut entries = match tokio::fs::read_dir(root).await {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(FormFactorError::BatteryUnsupported);
        }
        Err(err) => return Err(FormFactorError::BatteryUnavailable(err.to_string())),
    };

    let mut batteries = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| FormFactorError::BatteryUnavailable(e.to_string()))?
    {
        let path = entry.path();
        if read_trimmed(&path.join("type")).await.as_deref() == Some("Battery") {
            batteries.push(path);
        }
    }

    // BAT0 before BAT1
    batteries.sort();
    let battery = batteries
        .into_iter()
        .next()
        .ok_or(FormFactorError::BatteryUnsupported)?;

    read_battery(&battery).await
}

async fn read_battery(dir: &Path) -> Result<BatteryStatus> {
    let capacity = read_trimmed(&dir.join("capacity"))
        .await
        .and_then(|raw| raw.parse::<f64>().ok())
        .ok_or_else(|| {
            FormFactorError::BatteryUnavailable(format!(
                "no readable capacity in {}",
                dir.display()
            ))
        })?;
    let status = read_trimmed(&dir.join("status"))
        .await
        .unwrap_or_else(|| "Unknown".to_string());

    // energy_* (µWh with µW) or charge_* (µAh with µA); either ratio gives hours
    let now = read_number(dir, &["energy_now", "charge_now"]).await;
    let full = read_number(dir, &["energy_full", "charge_full"]).await;
    let rate = read_number(dir, &["power_now", "current_now"])
        .await
        .map(f64::abs)
        .filter(|r| *r > 0.0);

    let inputs = SysfsBattery {
        capacity_percent: capacity,
        status,
        now,
        full,
        rate,
    };
    let battery = inputs.to_status();
    tracing::debug!(
        target: "formfactor.signals",
        "read battery {}: {:?}",
        dir.display(),
        battery
    );
    Ok(battery)
}

async fn read_trimmed(path: &Path) -> Option<String> {
    tokio::fs::read_to_string(path)
        .await
        .ok()
        .map(|s| s.trim().to_string())
}

async fn read_number(dir: &Path, names: &[&str]) -> Option<f64> {
    for name in names {
        if let Some(value) = read_trimmed(&dir.join(name))
            .await
            .and_then(|raw| raw.parse::<f64>().ok())
        {
            return Some(value);
        }
    }
    None
}

/// Raw sysfs battery attributes
#[derive(Debug, Clone, PartialEq)]
struct SysfsBattery {
    capacity_percent: f64,
    status: String,
    now: Option<f64>,
    full: Option<f64>,
    rate: Option<f64>,
}

impl SysfsBattery {
    /// Convert to browser-style battery status
    fn to_status(&self) -> BatteryStatus {
        let level = (self.capacity_percent / 100.0).clamp(0.0, 1.0);
        let is_full = self.status == "Full" || (self.status == "Not charging" && level >= 1.0);
        let charging = self.status == "Charging";

        let charging_time = if is_full {
            0.0
        } else if charging {
            match (self.now, self.full, self.rate) {
                (Some(now), Some(full), Some(rate)) if full > now => (full - now) / rate * 3600.0,
                _ => f64::INFINITY,
            }
        } else {
            f64::INFINITY
        };

        let discharging_time = if self.status == "Discharging" {
            match (self.now, self.rate) {
                (Some(now), Some(rate)) => now / rate * 3600.0,
                _ => f64::INFINITY,
            }
        } else {
            f64::INFINITY
        };

        BatteryStatus {
            level: Some(level),
            charging: Some(charging),
            charging_time: Some(charging_time),
            discharging_time: Some(discharging_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sysfs(status: &str, capacity: f64) -> SysfsBattery {
        SysfsBattery {
            capacity_percent: capacity,
            status: status.to_string(),
            now: Some(30_000_000.0),
            full: Some(50_000_000.0),
            rate: Some(10_000_000.0),
        }
    }

    #[test]
    fn test_full_battery_looks_idle() {
        let status = sysfs("Full", 100.0).to_status();
        assert_eq!(status, BatteryStatus::plugged_in_full());
    }

    #[test]
    fn test_not_charging_at_full_looks_idle() {
        let status = sysfs("Not charging", 100.0).to_status();
        assert_eq!(status.charging_time, Some(0.0));
        assert_eq!(status.discharging_time, Some(f64::INFINITY));
    }

    #[test]
    fn test_discharging_estimate() {
        let status = sysfs("Discharging", 60.0).to_status();
        assert_eq!(status.level, Some(0.6));
        assert_eq!(status.charging, Some(false));
        assert_eq!(status.charging_time, Some(f64::INFINITY));
        // 30 Wh at 10 W
        assert_eq!(status.discharging_time, Some(3.0 * 3600.0));
    }

    #[test]
    fn test_charging_estimate() {
        let status = sysfs("Charging", 60.0).to_status();
        assert_eq!(status.charging, Some(true));
        // 20 Wh to go at 10 W
        assert_eq!(status.charging_time, Some(2.0 * 3600.0));
        assert_eq!(status.discharging_time, Some(f64::INFINITY));
    }

    #[test]
    fn test_missing_rate_means_unknown_times() {
        let mut raw = sysfs("Discharging", 40.0);
        raw.rate = None;
        let status = raw.to_status();
        assert_eq!(status.discharging_time, Some(f64::INFINITY));
    }

    #[test]
    fn test_capacity_is_clamped() {
        let status = sysfs("Full", 104.0).to_status();
        assert_eq!(status.level, Some(1.0));
    }

    #[test]
    fn test_host_cpu_cores_reported() {
        let provider = HostSignalProvider::new(1920, 1080);
        if let Some(cores) = provider.cpu_cores() {
            assert!(cores > 0);
        }
    }

    #[test]
    fn test_host_environment_mentions_arch() {
        let provider = HostSignalProvider::new(1920, 1080);
        let env = provider.environment();
        assert!(env.platform.contains(std::env::consts::ARCH));
        assert!(env.user_agent.starts_with("formfactor/"));
    }

    #[tokio::test]
    async fn test_without_battery_is_unsupported() {
        let provider = HostSignalProvider::new(1920, 1080).without_battery();
        let err = provider.battery().await.unwrap_err();
        assert!(err.is_unsupported());
    }
}
