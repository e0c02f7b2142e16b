//! Shared primitive IDs and the drink category enum.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Monotonic drink record identifier.
pub type DrinkId = u64;
/// Monotonic operation sequence number.
pub type OpSeq = u64;

/// Drink category bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// Beer.
    Beer,
    /// Wine.
    Wine,
    /// Whiskey.
    Whiskey,
    /// Vodka.
    Vodka,
    /// Rum.
    Rum,
    /// Mixed drink.
    Cocktail,
    /// Liquor.
    Liquor,
    /// No category was chosen.
    #[default]
    Undefined,
}

impl Category {
    /// Every selectable category, in form order. `Undefined` is not selectable.
    pub const SELECTABLE: [Category; 7] = [
        Category::Beer,
        Category::Wine,
        Category::Whiskey,
        Category::Vodka,
        Category::Rum,
        Category::Cocktail,
        Category::Liquor,
    ];

    /// Display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Beer => "Beer",
            Category::Wine => "Wine",
            Category::Whiskey => "Whiskey",
            Category::Vodka => "Vodka",
            Category::Rum => "Rum",
            Category::Cocktail => "Cocktail",
            Category::Liquor => "Liquor",
            Category::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when category text names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown drink category: {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Blank text maps to [`Category::Undefined`]. `Coctail` is accepted for
    /// forms that still submit the old option value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Category::Undefined);
        }
        match s {
            "Beer" => Ok(Category::Beer),
            "Wine" => Ok(Category::Wine),
            "Whiskey" => Ok(Category::Whiskey),
            "Vodka" => Ok(Category::Vodka),
            "Rum" => Ok(Category::Rum),
            "Cocktail" | "Coctail" => Ok(Category::Cocktail),
            "Liquor" => Ok(Category::Liquor),
            "Undefined" => Ok(Category::Undefined),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}
