// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Per-category score accumulation and the final decision

use serde::Serialize;

use super::classification::{Category, Classification};
use super::rules::DECISION_THRESHOLD;

/// Identifies the rule that awarded points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    TouchCapable,
    WideViewport,
    TallViewport,
    LaptopViewport,
    NarrowViewport,
    CoarseHoverPointer,
    FineHoverPointer,
    CoarseNoHoverPointer,
    BatteryUnsupported,
    BatteryReadFailed,
    BatteryNotFull,
    BatteryCharging,
    ChargingTimeEstimate,
    DischargingTimeEstimate,
    BatteryIdleFull,
    FewCores,
    ManyCores,
    ModestCores,
    NarrowAspect,
    WideAspect,
    UltraWideAspect,
}

/// One award of points by one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub rule: Rule,
    pub category: Category,
    pub points: u32,
}

/// Three independent counters plus the trail of rules that moved them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    mobile: u32,
    laptop: u32,
    desktop: u32,
    indicators: Vec<Indicator>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A board with preset totals and no indicator trail
    pub fn from_scores(mobile: u32, laptop: u32, desktop: u32) -> Self {
        Self {
            mobile,
            laptop,
            desktop,
            indicators: Vec::new(),
        }
    }

    /// Add `points` to `category` on behalf of `rule`
    pub fn award(&mut self, rule: Rule, category: Category, points: u32) {
        let counter = match category {
            Category::Mobile => &mut self.mobile,
            Category::Laptop => &mut self.laptop,
            Category::Desktop => &mut self.desktop,
        };
        *counter = counter.saturating_add(points);
        self.indicators.push(Indicator {
            rule,
            category,
            points,
        });
        tracing::debug!(
            target: "formfactor.classifier",
            "{:?}: +{} {}",
            rule,
            points,
            category
        );
    }

    pub fn score(&self, category: Category) -> u32 {
        match category {
            Category::Mobile => self.mobile,
            Category::Laptop => self.laptop,
            Category::Desktop => self.desktop,
        }
    }

    pub fn mobile(&self) -> u32 {
        self.mobile
    }

    pub fn laptop(&self) -> u32 {
        self.laptop
    }

    pub fn desktop(&self) -> u32 {
        self.desktop
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    /// Rules that scored for `category`, in firing order
    pub fn rules_for(&self, category: Category) -> Vec<Rule> {
        self.indicators
            .iter()
            .filter(|i| i.category == category)
            .map(|i| i.rule)
            .collect()
    }

    /// Highest-scoring category. Ties keep the earlier category.
    pub fn leader(&self) -> (Category, u32) {
        let mut best = Category::ALL[0];
        let mut best_score = self.score(best);
        for category in &Category::ALL[1..] {
            let score = self.score(*category);
            if score > best_score {
                best = *category;
                best_score = score;
            }
        }
        (best, best_score)
    }

    /// The leader's label if it reached the threshold, else `Unknown`
    pub fn decide(&self) -> Classification {
        let (category, score) = self.leader();
        if score >= DECISION_THRESHOLD {
            category.into()
        } else {
            Classification::Unknown
        }
    }
}
