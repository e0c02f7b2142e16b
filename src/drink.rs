//! Drink domain record, draft, and field types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Category, DrinkId};

/// Fully materialized, stored drink record.
///
/// `percentage` and `volume_ml` keep the text the user entered; they are
/// parsed only when the aggregate is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkRecord {
    /// Stable record identifier.
    pub id: DrinkId,
    /// Trimmed, non-empty label.
    pub name: String,
    /// Category, `Undefined` when none was chosen.
    pub category: Category,
    /// Alcohol-by-volume percentage as entered.
    pub percentage: String,
    /// Serving volume in milliliters as entered.
    pub volume_ml: String,
}

impl DrinkRecord {
    /// Pure alcohol in this serving, `volume * percentage / 100`.
    ///
    /// Text that does not parse as a number yields NaN.
    pub fn alcohol_ml(&self) -> f64 {
        parse_number(&self.volume_ml) * parse_number(&self.percentage) / 100.0
    }
}

/// Required input field of a [`DrinkDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftField {
    /// Drink name.
    Name,
    /// ABV percentage.
    Percentage,
    /// Serving volume.
    Volume,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DraftField::Name => "name",
            DraftField::Percentage => "percentage",
            DraftField::Volume => "volume",
        })
    }
}

/// In-progress field values for composing a new record or editing one.
///
/// `editing_id` is `None` while composing and names the loaded record while
/// editing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkDraft {
    /// Name as typed.
    pub name: String,
    /// Selected category, `None` when nothing was selected.
    pub category: Option<Category>,
    /// Percentage as typed.
    pub percentage: String,
    /// Volume as typed.
    pub volume_ml: String,
    /// Record currently loaded for modification.
    pub editing_id: Option<DrinkId>,
}

impl DrinkDraft {
    /// Loads `rec` into a draft targeting it.
    pub fn editing(rec: &DrinkRecord) -> Self {
        Self {
            name: rec.name.clone(),
            category: Some(rec.category),
            percentage: rec.percentage.clone(),
            volume_ml: rec.volume_ml.clone(),
            editing_id: Some(rec.id),
        }
    }

    /// True while an existing record is loaded.
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Required fields that are blank after trimming, in form order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(DraftField::Name);
        }
        if self.percentage.trim().is_empty() {
            missing.push(DraftField::Percentage);
        }
        if self.volume_ml.trim().is_empty() {
            missing.push(DraftField::Volume);
        }
        missing
    }

    /// Builds the record stored under `id` from the trimmed draft values.
    ///
    /// Does not check required fields; see [`Self::missing_fields`].
    pub fn to_record(&self, id: DrinkId) -> DrinkRecord {
        DrinkRecord {
            id,
            name: self.name.trim().to_string(),
            category: self.category.unwrap_or_default(),
            percentage: self.percentage.trim().to_string(),
            volume_ml: self.volume_ml.trim().to_string(),
        }
    }
}

fn parse_number(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
