//! Runtime event stream payloads.

use crate::{op::Op, types::DrinkId};

/// Events emitted from the single-writer runtime loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrinkEvent {
    /// Draft values or the edit target changed.
    DraftChanged,
    /// A new drink was appended.
    Added {
        /// Appended drink id.
        id: DrinkId,
    },
    /// An existing drink was replaced in place.
    Edited {
        /// Edited drink id.
        id: DrinkId,
    },
    /// A drink was deleted.
    Removed {
        /// Deleted drink id.
        id: DrinkId,
    },
    /// The count warning became visible.
    WarningArmed {
        /// Collection size that armed it.
        threshold: usize,
    },
    /// The count warning was dismissed.
    WarningDismissed,
}

impl From<&Op> for DrinkEvent {
    fn from(op: &Op) -> Self {
        match op {
            Op::Add { drink } => Self::Added { id: drink.id },
            Op::Replace { drink } => Self::Edited { id: drink.id },
            Op::Remove { drink } => Self::Removed { id: drink.id },
            Op::WarningArmed { threshold } => Self::WarningArmed {
                threshold: *threshold,
            },
            Op::WarningDismissed => Self::WarningDismissed,
        }
    }
}
