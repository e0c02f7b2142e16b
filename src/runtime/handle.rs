use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info};

use crate::{
    config::RuntimeConfig,
    core::{
        store::{DrinkListStore, StoreError},
        view::DrinkListView,
    },
    drink::DrinkRecord,
    types::{Category, DrinkId},
};

use super::events::DrinkEvent;

/// Errors surfaced by [`DrinkListHandle`].
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The store rejected the command.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The runtime task is gone.
    #[error("drink list runtime is not running")]
    ChannelClosed,
}

/// Cloneable front door to a store owned by a runtime task.
///
/// Commands are applied one at a time in arrival order, so every mutation is
/// atomic to subscribers.
pub struct DrinkListHandle {
    cmd_tx: mpsc::Sender<Command>,
    events_tx: broadcast::Sender<DrinkEvent>,
}

impl Clone for DrinkListHandle {
    fn clone(&self) -> Self {
        Self {
            cmd_tx: self.cmd_tx.clone(),
            events_tx: self.events_tx.clone(),
        }
    }
}

enum Command {
    SetName {
        text: String,
        resp: oneshot::Sender<()>,
    },
    SetCategory {
        category: Option<Category>,
        resp: oneshot::Sender<()>,
    },
    SetPercentage {
        text: String,
        resp: oneshot::Sender<()>,
    },
    SetVolume {
        text: String,
        resp: oneshot::Sender<()>,
    },
    Add {
        resp: oneshot::Sender<Result<DrinkId, StoreError>>,
    },
    BeginEdit {
        id: DrinkId,
        resp: oneshot::Sender<Result<(), StoreError>>,
    },
    SaveEdit {
        resp: oneshot::Sender<Result<DrinkId, StoreError>>,
    },
    Submit {
        resp: oneshot::Sender<Result<DrinkId, StoreError>>,
    },
    DiscardDraft {
        resp: oneshot::Sender<()>,
    },
    Get {
        id: DrinkId,
        resp: oneshot::Sender<Option<DrinkRecord>>,
    },
    Remove {
        id: DrinkId,
        resp: oneshot::Sender<Option<DrinkRecord>>,
    },
    DismissWarning {
        resp: oneshot::Sender<bool>,
    },
    View {
        resp: oneshot::Sender<DrinkListView>,
    },
    Shutdown {
        resp: oneshot::Sender<()>,
    },
}

/// Moves `store` onto a runtime task and returns a handle to it.
///
/// Turns the store's op journal on; the runtime drains it after every command.
/// Must be called from within a tokio runtime.
pub fn spawn_drinklist(store: DrinkListStore, config: RuntimeConfig) -> DrinkListHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(config.command_queue_bound);
    let (events_tx, _) = broadcast::channel::<DrinkEvent>(config.event_queue_bound);

    let events_tx_loop = events_tx.clone();

    tokio::spawn(async move {
        let mut store = store.with_journal(true);
        info!("drink list runtime started");
        while let Some(cmd) = cmd_rx.recv().await {
            if handle_command(cmd, &mut store, &events_tx_loop) {
                break;
            }
        }
        info!(drinks = store.len(), "drink list runtime stopped");
    });

    DrinkListHandle { cmd_tx, events_tx }
}

impl DrinkListHandle {
    /// Subscribes to events emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<DrinkEvent> {
        self.events_tx.subscribe()
    }

    /// Replaces the draft name.
    pub async fn set_name(&self, text: impl Into<String>) -> Result<(), RuntimeError> {
        let text = text.into();
        self.request(|resp| Command::SetName { text, resp }).await
    }

    /// Replaces the draft category.
    pub async fn set_category(&self, category: Option<Category>) -> Result<(), RuntimeError> {
        self.request(|resp| Command::SetCategory { category, resp }).await
    }

    /// Replaces the draft percentage text.
    pub async fn set_percentage(&self, text: impl Into<String>) -> Result<(), RuntimeError> {
        let text = text.into();
        self.request(|resp| Command::SetPercentage { text, resp }).await
    }

    /// Replaces the draft volume text.
    pub async fn set_volume(&self, text: impl Into<String>) -> Result<(), RuntimeError> {
        let text = text.into();
        self.request(|resp| Command::SetVolume { text, resp }).await
    }

    /// Appends the draft as a new drink.
    pub async fn add(&self) -> Result<DrinkId, RuntimeError> {
        Ok(self.request(|resp| Command::Add { resp }).await??)
    }

    /// Loads drink `id` into the draft.
    pub async fn begin_edit(&self, id: DrinkId) -> Result<(), RuntimeError> {
        Ok(self.request(|resp| Command::BeginEdit { id, resp }).await??)
    }

    /// Writes the draft back to the drink under edit.
    pub async fn save_edit(&self) -> Result<DrinkId, RuntimeError> {
        Ok(self.request(|resp| Command::SaveEdit { resp }).await??)
    }

    /// Adds or saves depending on the draft state.
    pub async fn submit(&self) -> Result<DrinkId, RuntimeError> {
        Ok(self.request(|resp| Command::Submit { resp }).await??)
    }

    /// Clears the draft.
    pub async fn discard_draft(&self) -> Result<(), RuntimeError> {
        self.request(|resp| Command::DiscardDraft { resp }).await
    }

    /// Drink `id`, if stored.
    pub async fn get(&self, id: DrinkId) -> Result<Option<DrinkRecord>, RuntimeError> {
        self.request(|resp| Command::Get { id, resp }).await
    }

    /// Deletes drink `id` if present.
    pub async fn remove(&self, id: DrinkId) -> Result<Option<DrinkRecord>, RuntimeError> {
        self.request(|resp| Command::Remove { id, resp }).await
    }

    /// Hides the count warning.
    pub async fn dismiss_warning(&self) -> Result<bool, RuntimeError> {
        self.request(|resp| Command::DismissWarning { resp }).await
    }

    /// Current render-input snapshot.
    pub async fn view(&self) -> Result<DrinkListView, RuntimeError> {
        self.request(|resp| Command::View { resp }).await
    }

    /// Stops the runtime task after the commands queued before this one.
    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        self.request(|resp| Command::Shutdown { resp }).await
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(make(tx))
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }
}

fn handle_command(
    cmd: Command,
    store: &mut DrinkListStore,
    events_tx: &broadcast::Sender<DrinkEvent>,
) -> bool {
    match cmd {
        Command::SetName { text, resp } => {
            store.set_name(text);
            let _ = events_tx.send(DrinkEvent::DraftChanged);
            let _ = resp.send(());
        }
        Command::SetCategory { category, resp } => {
            store.set_category(category);
            let _ = events_tx.send(DrinkEvent::DraftChanged);
            let _ = resp.send(());
        }
        Command::SetPercentage { text, resp } => {
            store.set_percentage(text);
            let _ = events_tx.send(DrinkEvent::DraftChanged);
            let _ = resp.send(());
        }
        Command::SetVolume { text, resp } => {
            store.set_volume(text);
            let _ = events_tx.send(DrinkEvent::DraftChanged);
            let _ = resp.send(());
        }
        Command::Add { resp } => {
            let res = store.add();
            publish(store, events_tx, res.is_ok());
            let _ = resp.send(res);
        }
        Command::BeginEdit { id, resp } => {
            let res = store.begin_edit(id);
            if res.is_ok() {
                let _ = events_tx.send(DrinkEvent::DraftChanged);
            }
            let _ = resp.send(res);
        }
        Command::SaveEdit { resp } => {
            let res = store.save_edit();
            publish(store, events_tx, res.is_ok());
            let _ = resp.send(res);
        }
        Command::Submit { resp } => {
            let res = store.submit();
            publish(store, events_tx, res.is_ok());
            let _ = resp.send(res);
        }
        Command::DiscardDraft { resp } => {
            store.discard_draft();
            let _ = events_tx.send(DrinkEvent::DraftChanged);
            let _ = resp.send(());
        }
        Command::Get { id, resp } => {
            let _ = resp.send(store.get_cloned(id));
        }
        Command::Remove { id, resp } => {
            let removed = store.remove(id);
            publish(store, events_tx, false);
            let _ = resp.send(removed);
        }
        Command::DismissWarning { resp } => {
            let was_showing = store.dismiss_warning();
            publish(store, events_tx, false);
            let _ = resp.send(was_showing);
        }
        Command::View { resp } => {
            let _ = resp.send(store.view());
        }
        Command::Shutdown { resp } => {
            let _ = resp.send(());
            return true;
        }
    }

    false
}

/// Broadcasts the store's pending ops, then `DraftChanged` when the draft was reset.
fn publish(
    store: &mut DrinkListStore,
    events_tx: &broadcast::Sender<DrinkEvent>,
    draft_reset: bool,
) {
    for stored in store.drain_pending_ops() {
        debug!(seq = stored.seq, "publishing op");
        let _ = events_tx.send(DrinkEvent::from(&stored.op));
    }
    if draft_reset {
        let _ = events_tx.send(DrinkEvent::DraftChanged);
    }
}
