//! Spending category taxonomy

use serde::{Deserialize, Serialize};

/// Spending categories matched deterministically against transaction
/// descriptions.
///
/// Declaration order is the classification priority order: the classifier
/// walks categories top to bottom and the first keyword match wins.
/// `Others` carries no keywords and must stay last.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,
    #[serde(rename = "Health & Wellness")]
    HealthAndWellness,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Transfer")]
    Transfer,
    #[serde(rename = "Others")]
    Others,
}

impl Category {
    /// Every category in classification priority order.
    pub const ALL: [Category; 9] = [
        Category::FoodAndDining,
        Category::Shopping,
        Category::Transportation,
        Category::Entertainment,
        Category::BillsAndUtilities,
        Category::HealthAndWellness,
        Category::Education,
        Category::Transfer,
        Category::Others,
    ];

    /// Human-readable label, matching the statement app's display names.
    pub fn label(&self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Shopping => "Shopping",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::BillsAndUtilities => "Bills & Utilities",
            Category::HealthAndWellness => "Health & Wellness",
            Category::Education => "Education",
            Category::Transfer => "Transfer",
            Category::Others => "Others",
        }
    }

    /// Display color (hex) for charts and breakdowns.
    pub fn color(&self) -> &'static str {
        match self {
            Category::FoodAndDining => "#FF6B6B",
            Category::Shopping => "#4ECDC4",
            Category::Transportation => "#45B7D1",
            Category::Entertainment => "#96CEB4",
            Category::BillsAndUtilities => "#FFEEAD",
            Category::HealthAndWellness => "#D4A5A5",
            Category::Education => "#9B9B9B",
            Category::Transfer => "#FFD93D",
            Category::Others => "#6C757D",
        }
    }
}
