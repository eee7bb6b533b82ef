// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Diagnostic report of a single classification

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::classification::{Category, Classification};
use super::rules;
use super::score::{Indicator, Rule, ScoreBoard};
use crate::error::Result;
use crate::signals::SignalSnapshot;

/// Final counter values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scores {
    pub mobile: u32,
    pub laptop: u32,
    pub desktop: u32,
}

/// Rules that fired, grouped by category
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CategoryIndicators {
    pub desktop: Vec<Rule>,
    pub laptop: Vec<Rule>,
    pub mobile: Vec<Rule>,
}

/// Everything that went into one classification
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationReport {
    pub classification: Classification,
    pub scores: Scores,
    pub indicators: CategoryIndicators,
    /// Every award in firing order
    pub trail: Vec<Indicator>,
    pub aspect_ratio: f64,
    pub signals: SignalSnapshot,
    pub captured_at: DateTime<Utc>,
}

impl ClassificationReport {
    /// Score `snapshot` and keep all intermediate results
    pub fn from_snapshot(snapshot: SignalSnapshot) -> Self {
        let board = rules::score(&snapshot);
        Self::from_board(snapshot, &board)
    }

    fn from_board(snapshot: SignalSnapshot, board: &ScoreBoard) -> Self {
        let classification = board.decide();
        let (leader, leader_score) = board.leader();
        tracing::debug!(
            target: "formfactor.classifier",
            "scores mobile={} laptop={} desktop={}; leader {} ({}) -> {}",
            board.mobile(),
            board.laptop(),
            board.desktop(),
            leader,
            leader_score,
            classification
        );

        Self {
            classification,
            scores: Scores {
                mobile: board.mobile(),
                laptop: board.laptop(),
                desktop: board.desktop(),
            },
            indicators: CategoryIndicators {
                desktop: board.rules_for(Category::Desktop),
                laptop: board.rules_for(Category::Laptop),
                mobile: board.rules_for(Category::Mobile),
            },
            trail: board.indicators().to_vec(),
            aspect_ratio: snapshot.aspect_ratio(),
            signals: snapshot,
            captured_at: Utc::now(),
        }
    }

    pub fn score(&self, category: Category) -> u32 {
        match category {
            Category::Mobile => self.scores.mobile,
            Category::Laptop => self.scores.laptop,
            Category::Desktop => self.scores.desktop,
        }
    }

    /// Pretty-printed JSON form of the report
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
