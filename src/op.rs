//! Mutation journal entries emitted by the store.

use serde::{Deserialize, Serialize};

use crate::{drink::DrinkRecord, types::OpSeq};

/// Immutable description of one successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    /// A record was appended.
    Add {
        /// Appended record.
        drink: DrinkRecord,
    },
    /// A record was replaced in place.
    Replace {
        /// New record contents.
        drink: DrinkRecord,
    },
    /// A record was deleted.
    Remove {
        /// Deleted record.
        drink: DrinkRecord,
    },
    /// An add reached a warning threshold.
    WarningArmed {
        /// Collection size that armed the warning.
        threshold: usize,
    },
    /// The showing warning was dismissed.
    WarningDismissed,
}

/// Journal metadata plus operation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredOp {
    /// Monotonic operation sequence.
    pub seq: OpSeq,
    /// Operation body.
    pub op: Op,
}
