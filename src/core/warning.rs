use serde::{Deserialize, Serialize};

/// Advisory banner state.
///
/// Dismissing clears `showing` only; the next threshold crossing arms it again.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WarningState {
    /// True while the banner is shown.
    pub showing: bool,
    /// Collection size that most recently armed the warning.
    pub threshold: Option<usize>,
}

impl WarningState {
    /// Shows the banner for a collection that just reached `threshold`.
    pub fn arm(&mut self, threshold: usize) {
        self.showing = true;
        self.threshold = Some(threshold);
    }

    /// Hides the banner. Returns whether it was showing.
    pub fn dismiss(&mut self) -> bool {
        std::mem::replace(&mut self.showing, false)
    }

    /// Banner text while showing.
    pub fn message(&self) -> Option<String> {
        if !self.showing {
            return None;
        }
        self.threshold.map(|n| {
            format!("You had {n} drinks already, if you continue drinking it can end up bad!")
        })
    }
}
