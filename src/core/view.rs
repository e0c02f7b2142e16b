use serde::Serialize;

use crate::drink::{DrinkDraft, DrinkRecord};

use super::warning::WarningState;

/// Everything a presentation layer needs to render the list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkListView {
    /// Records in insertion order.
    pub drinks: Vec<DrinkRecord>,
    /// Current draft.
    pub draft: DrinkDraft,
    /// Advisory banner state.
    pub warning: WarningState,
    /// Banner text, present while the warning shows.
    pub warning_message: Option<String>,
    /// Number of stored records.
    pub count: usize,
    /// Total pure alcohol in ml, rounded to two decimals. NaN serializes as `null`.
    pub total_alcohol_ml: f64,
    /// `total_alcohol_ml` formatted with two decimals.
    pub total_alcohol_display: String,
}

impl DrinkListView {
    /// Encodes the view as JSON for a non-Rust front end.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
