// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Form-factor categories and the final classification label

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormFactorError;

/// A scored category. Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mobile,
    Laptop,
    Desktop,
}

impl Category {
    /// All categories in tie-break order
    pub const ALL: [Category; 3] = [Category::Mobile, Category::Laptop, Category::Desktop];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mobile => "mobile",
            Category::Laptop => "laptop",
            Category::Desktop => "desktop",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Phones and small tablets
    Mobile,
    /// Battery-powered portables, touch laptops, convertibles
    Laptop,
    /// Mains-powered machines with large displays
    Desktop,
    /// No category scored high enough
    Unknown,
}

impl Classification {
    /// All labels a classification can produce
    pub const ALL: [Classification; 4] = [
        Classification::Mobile,
        Classification::Laptop,
        Classification::Desktop,
        Classification::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Mobile => "mobile",
            Classification::Laptop => "laptop",
            Classification::Desktop => "desktop",
            Classification::Unknown => "unknown",
        }
    }

    /// Get a human-readable description of this label
    pub fn description(&self) -> &'static str {
        match self {
            Classification::Mobile => "Phone or small touch device",
            Classification::Laptop => "Portable computer",
            Classification::Desktop => "Desktop or workstation",
            Classification::Unknown => "Not enough evidence to decide",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Classification::Unknown)
    }
}

impl From<Category> for Classification {
    fn from(category: Category) -> Self {
        match category {
            Category::Mobile => Classification::Mobile,
            Category::Laptop => Classification::Laptop,
            Category::Desktop => Classification::Desktop,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = FormFactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Classification::Mobile),
            "laptop" => Ok(Classification::Laptop),
            "desktop" => Ok(Classification::Desktop),
            "unknown" => Ok(Classification::Unknown),
            other => Err(FormFactorError::InvalidInput(format!(
                "unknown classification '{}'",
                other
            ))),
        }
    }
}
