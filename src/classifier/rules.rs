// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Scoring rules
//!
//! Every rule is evaluated on every snapshot; rules are independent checks,
//! never an if/else chain, so overlapping rules can all fire.

use super::classification::Category;
use super::score::{Rule, ScoreBoard};
use crate::signals::{BatteryReading, BatteryStatus, PointerSignals, SignalSnapshot};

/// Minimum winning score for a non-`unknown` label
pub const DECISION_THRESHOLD: u32 = 5;

/// Viewport width at or above which a display counts as full HD wide
pub const DESKTOP_MIN_WIDTH: u32 = 1920;
/// Viewport height at or above which a display counts as full HD tall
pub const DESKTOP_MIN_HEIGHT: u32 = 1080;
/// Tablet/laptop breakpoint; narrower viewports look like phones
pub const LAPTOP_MIN_WIDTH: u32 = 768;
pub const LAPTOP_MIN_HEIGHT: u32 = 600;

pub const LAPTOP_MAX_CORES: u32 = 4;
pub const MOBILE_MAX_CORES: u32 = 6;
pub const DESKTOP_MIN_CORES: u32 = 8;

pub const LAPTOP_MAX_ASPECT: f64 = 1.8;
pub const DESKTOP_MIN_ASPECT: f64 = 2.0;
pub const MOBILE_MIN_ASPECT: f64 = 2.1;

/// Run every rule against `snapshot`
pub fn score(snapshot: &SignalSnapshot) -> ScoreBoard {
    let mut board = ScoreBoard::new();
    score_touch_and_geometry(snapshot, &mut board);
    if let Some(pointer) = snapshot.pointer {
        score_pointer(&pointer, &mut board);
    }
    score_battery(&snapshot.battery, &mut board);
    score_hardware(snapshot.cpu_cores, &mut board);
    score_aspect_ratio(snapshot.aspect_ratio(), &mut board);
    board
}

pub fn score_touch_and_geometry(snapshot: &SignalSnapshot, board: &mut ScoreBoard) {
    let (width, height) = (snapshot.viewport_width, snapshot.viewport_height);

    if snapshot.touch_capable {
        board.award(Rule::TouchCapable, Category::Mobile, 3);
        board.award(Rule::TouchCapable, Category::Laptop, 1);
    }
    if width >= DESKTOP_MIN_WIDTH {
        board.award(Rule::WideViewport, Category::Desktop, 1);
    }
    if height >= DESKTOP_MIN_HEIGHT {
        board.award(Rule::TallViewport, Category::Desktop, 1);
    }
    if width >= LAPTOP_MIN_WIDTH && height >= LAPTOP_MIN_HEIGHT {
        board.award(Rule::LaptopViewport, Category::Laptop, 1);
    }
    if width < LAPTOP_MIN_WIDTH {
        board.award(Rule::NarrowViewport, Category::Mobile, 3);
    }
}

pub fn score_pointer(pointer: &PointerSignals, board: &mut ScoreBoard) {
    if pointer.coarse && pointer.hover {
        board.award(Rule::CoarseHoverPointer, Category::Laptop, 2);
    }
    if pointer.fine && pointer.hover {
        board.award(Rule::FineHoverPointer, Category::Desktop, 1);
    }
    if pointer.coarse && !pointer.hover {
        board.award(Rule::CoarseNoHoverPointer, Category::Mobile, 1);
    }
}

pub fn score_battery(reading: &BatteryReading, board: &mut ScoreBoard) {
    match reading {
        BatteryReading::Status(status) => score_battery_status(status, board),
        BatteryReading::Unsupported => {
            board.award(Rule::BatteryUnsupported, Category::Desktop, 1);
        }
        BatteryReading::Failed { .. } => {
            board.award(Rule::BatteryReadFailed, Category::Desktop, 1);
        }
    }
}

/// Battery rules.
///
/// A missing field never matches a comparison, except `discharging_time`:
/// an unreported estimate is not infinite, so it counts as one.
pub fn score_battery_status(status: &BatteryStatus, board: &mut ScoreBoard) {
    if status.level.is_some_and(|level| level < 1.0) {
        board.award(Rule::BatteryNotFull, Category::Laptop, 4);
    }
    if status.charging == Some(true) {
        board.award(Rule::BatteryCharging, Category::Laptop, 1);
    }
    if status.charging_time.is_some_and(|t| t > 0.0) {
        board.award(Rule::ChargingTimeEstimate, Category::Laptop, 2);
    }
    if status.discharging_time != Some(f64::INFINITY) {
        board.award(Rule::DischargingTimeEstimate, Category::Laptop, 2);
    }
    if status.level == Some(1.0)
        && status.charging_time == Some(0.0)
        && status.discharging_time == Some(f64::INFINITY)
    {
        board.award(Rule::BatteryIdleFull, Category::Desktop, 2);
    }
}

pub fn score_hardware(cpu_cores: u32, board: &mut ScoreBoard) {
    if cpu_cores <= LAPTOP_MAX_CORES {
        board.award(Rule::FewCores, Category::Laptop, 1);
    }
    if cpu_cores >= DESKTOP_MIN_CORES {
        board.award(Rule::ManyCores, Category::Desktop, 1);
    }
    if cpu_cores <= MOBILE_MAX_CORES {
        board.award(Rule::ModestCores, Category::Mobile, 1);
    }
}

pub fn score_aspect_ratio(ratio: f64, board: &mut ScoreBoard) {
    if ratio < LAPTOP_MAX_ASPECT {
        board.award(Rule::NarrowAspect, Category::Laptop, 1);
    }
    if ratio >= DESKTOP_MIN_ASPECT {
        board.award(Rule::WideAspect, Category::Desktop, 1);
    }
    if ratio > MOBILE_MIN_ASPECT {
        board.award(Rule::UltraWideAspect, Category::Mobile, 1);
    }
}
