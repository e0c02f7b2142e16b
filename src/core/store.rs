use hashbrown::HashMap;
use tracing::{debug, info, warn};

use crate::{
    config::StoreConfig,
    drink::{DraftField, DrinkDraft, DrinkRecord},
    op::{Op, StoredOp},
    types::{Category, DrinkId, OpSeq},
};

use super::{view::DrinkListView, warning::WarningState};

/// Store failures. None of them change state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Required draft fields are blank.
    #[error("required fields are blank: {0:?}")]
    MissingFields(Vec<DraftField>),
    /// No record with this id is stored.
    #[error("drink {0} not found")]
    NotFound(DrinkId),
    /// `save_edit` was called while composing.
    #[error("no drink is being edited")]
    NotEditing,
    /// `add` was called while a record is loaded for editing.
    #[error("drink {0} is being edited")]
    EditInProgress(DrinkId),
}

/// Ordered drink collection plus the draft and warning state that drive it.
///
/// The op journal is off by default; [`Self::with_journal`] turns it on for
/// owners that drain it, such as the runtime.
#[derive(Debug, Default)]
pub struct DrinkListStore {
    config: StoreConfig,
    records: HashMap<DrinkId, DrinkRecord>,
    order: Vec<DrinkId>,
    draft: DrinkDraft,
    warning: WarningState,
    journal: bool,
    pending_ops: Vec<StoredOp>,
    next_op_seq: OpSeq,
    next_drink_id: DrinkId,
}

impl DrinkListStore {
    /// Empty store with default thresholds.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Empty store using `config`.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            next_op_seq: 1,
            next_drink_id: 1,
            ..Self::default()
        }
    }

    /// Records successful mutations for [`Self::drain_pending_ops`] while `on`.
    ///
    /// Turning the journal off drops ops not yet drained.
    pub fn with_journal(mut self, on: bool) -> Self {
        self.journal = on;
        if !on {
            self.pending_ops.clear();
        }
        self
    }

    /// True while mutations are journaled.
    pub fn is_journaling(&self) -> bool {
        self.journal
    }

    /// Active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Replaces the draft name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        debug!(name = %self.draft.name, "draft name changed");
    }

    /// Replaces the draft category; `None` stores as `Undefined`.
    pub fn set_category(&mut self, category: Option<Category>) {
        self.draft.category = category;
        debug!(?category, "draft category changed");
    }

    /// Replaces the draft percentage text.
    pub fn set_percentage(&mut self, percentage: impl Into<String>) {
        self.draft.percentage = percentage.into();
        debug!(percentage = %self.draft.percentage, "draft percentage changed");
    }

    /// Replaces the draft volume text.
    pub fn set_volume(&mut self, volume_ml: impl Into<String>) {
        self.draft.volume_ml = volume_ml.into();
        debug!(volume_ml = %self.draft.volume_ml, "draft volume changed");
    }

    /// Current draft.
    pub fn draft(&self) -> &DrinkDraft {
        &self.draft
    }

    /// Appends the draft as a new record and clears the draft.
    ///
    /// Arms the warning when the collection grows to a configured threshold.
    pub fn add(&mut self) -> Result<DrinkId, StoreError> {
        if let Some(id) = self.draft.editing_id {
            return Err(StoreError::EditInProgress(id));
        }
        self.check_required()?;

        let id = self.next_drink_id;
        self.next_drink_id += 1;

        let drink = self.draft.to_record(id);
        self.order.push(id);
        self.records.insert(id, drink.clone());
        self.draft = DrinkDraft::default();
        info!(id, name = %drink.name, category = %drink.category, "drink added");
        self.push_op(Op::Add { drink });

        let len = self.order.len();
        if self.config.is_threshold(len) {
            self.warning.arm(len);
            info!(threshold = len, "drink count warning armed");
            self.push_op(Op::WarningArmed { threshold: len });
        }

        Ok(id)
    }

    /// Loads record `id` into the draft, discarding any unsaved draft values.
    pub fn begin_edit(&mut self, id: DrinkId) -> Result<(), StoreError> {
        let Some(rec) = self.records.get(&id) else {
            warn!(id, "edit requested for missing drink");
            return Err(StoreError::NotFound(id));
        };
        self.draft = DrinkDraft::editing(rec);
        debug!(id, "drink loaded for editing");
        Ok(())
    }

    /// Replaces the record under edit with the draft values, keeping its id and
    /// position, then returns the draft to composing.
    pub fn save_edit(&mut self) -> Result<DrinkId, StoreError> {
        let id = self.draft.editing_id.ok_or(StoreError::NotEditing)?;
        if !self.records.contains_key(&id) {
            warn!(id, "save requested for missing drink");
            return Err(StoreError::NotFound(id));
        }
        self.check_required()?;

        let drink = self.draft.to_record(id);
        self.records.insert(id, drink.clone());
        self.draft = DrinkDraft::default();
        info!(id, name = %drink.name, "drink edited");
        self.push_op(Op::Replace { drink });
        Ok(id)
    }

    /// Adds while composing, saves while editing.
    pub fn submit(&mut self) -> Result<DrinkId, StoreError> {
        if self.draft.is_editing() {
            self.save_edit()
        } else {
            self.add()
        }
    }

    /// Clears the draft back to empty composing defaults.
    pub fn discard_draft(&mut self) {
        self.draft = DrinkDraft::default();
        debug!("draft discarded");
    }

    /// Deletes record `id`. Missing ids are a no-op returning `None`.
    pub fn remove(&mut self, id: DrinkId) -> Option<DrinkRecord> {
        let position = self.order.iter().position(|x| *x == id)?;
        self.order.remove(position);
        let drink = self.records.remove(&id)?;
        info!(id, position, "drink removed");
        self.push_op(Op::Remove {
            drink: drink.clone(),
        });
        Some(drink)
    }

    /// Hides the warning. Returns whether it was showing.
    pub fn dismiss_warning(&mut self) -> bool {
        let was_showing = self.warning.dismiss();
        if was_showing {
            info!("drink count warning dismissed");
            self.push_op(Op::WarningDismissed);
        }
        was_showing
    }

    /// Current warning state.
    pub fn warning(&self) -> &WarningState {
        &self.warning
    }

    /// Record by id.
    pub fn get(&self, id: DrinkId) -> Option<&DrinkRecord> {
        self.records.get(&id)
    }

    /// Owned copy of record by id.
    pub fn get_cloned(&self, id: DrinkId) -> Option<DrinkRecord> {
        self.get(id).cloned()
    }

    /// Records in insertion order.
    pub fn records(&self) -> Vec<&DrinkRecord> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .collect()
    }

    /// Owned records in insertion order.
    pub fn records_cloned(&self) -> Vec<DrinkRecord> {
        self.records().into_iter().cloned().collect()
    }

    /// Ids in insertion order.
    pub fn ordered_ids(&self) -> &[DrinkId] {
        &self.order
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of `volume * percentage / 100` over all records, rounded to two
    /// decimals. Any unparseable value makes the total NaN.
    pub fn total_alcohol_ml(&self) -> f64 {
        let total: f64 = self.records().iter().map(|rec| rec.alcohol_ml()).sum();
        (total * 100.0).round() / 100.0
    }

    /// Total formatted with two decimals.
    pub fn total_alcohol_display(&self) -> String {
        format!("{:.2}", self.total_alcohol_ml())
    }

    /// Render-input snapshot.
    pub fn view(&self) -> DrinkListView {
        DrinkListView {
            drinks: self.records_cloned(),
            draft: self.draft.clone(),
            warning: self.warning.clone(),
            warning_message: self.warning.message(),
            count: self.len(),
            total_alcohol_ml: self.total_alcohol_ml(),
            total_alcohol_display: self.total_alcohol_display(),
        }
    }

    /// Takes the ops recorded since the last drain. Always empty with the
    /// journal off.
    pub fn drain_pending_ops(&mut self) -> Vec<StoredOp> {
        std::mem::take(&mut self.pending_ops)
    }

    /// Sequence of the most recent journaled op, 0 before any.
    pub fn latest_op_seq(&self) -> OpSeq {
        self.next_op_seq.saturating_sub(1)
    }

    fn check_required(&self) -> Result<(), StoreError> {
        let missing = self.draft.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            debug!(?missing, "draft rejected");
            Err(StoreError::MissingFields(missing))
        }
    }

    fn push_op(&mut self, op: Op) {
        if !self.journal {
            return;
        }
        let seq = self.next_op_seq;
        self.next_op_seq += 1;
        self.pending_ops.push(StoredOp { seq, op });
    }
}
