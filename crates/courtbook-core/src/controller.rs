// ── Controller ──
//
// Facade the UI layer talks to. Owns the REST client, the active grid
// context (field + date), the last fetched grid and the selection store.
// Slot status is never edited locally: every command is followed by a
// refetch and the refetched grid replaces the old one wholesale.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

use courtbook_api::types::{LockSlotsBody, MergeSlotsBody, UnlockSlotsBody};
use courtbook_api::{SlotClient, TlsMode, TransportConfig};

use crate::command::{Command, CommandResult, LockRequest, MergeRequest, UnlockRequest};
use crate::config::{ClientConfig, TlsVerification};
use crate::error::CoreError;
use crate::model::{CourtId, CourtSlot, FieldId, FieldSlotGrid, SlotId, format_date};
use crate::store::SelectionStore;

// ── GridContext ──────────────────────────────────────────────────

/// The (field, date) pair a grid and selection belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridContext {
    pub field_id: FieldId,
    pub date: NaiveDate,
}

// ── Controller ───────────────────────────────────────────────────

/// Cheaply cloneable via `Arc<ControllerInner>`.
#[derive(Clone)]
pub struct Controller {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    config: ClientConfig,
    client: SlotClient,
    context: Mutex<Option<GridContext>>,
    grid: watch::Sender<Option<Arc<FieldSlotGrid>>>,
    selection: SelectionStore,
}

impl Controller {
    /// Build the HTTP client from configuration. No request is made.
    pub fn new(config: ClientConfig) -> Result<Self, CoreError> {
        let transport = build_transport(&config);
        let client = SlotClient::new(config.url.as_str(), &transport)?;
        Ok(Self::with_client(config, client))
    }

    /// Use a pre-built client (tests, custom transports).
    pub fn with_client(config: ClientConfig, client: SlotClient) -> Self {
        let (grid, _) = watch::channel(None);
        Self {
            inner: Arc::new(ControllerInner {
                config,
                client,
                context: Mutex::new(None),
                grid,
                selection: SelectionStore::new(),
            }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.inner.selection
    }

    // ── Context ──────────────────────────────────────────────────

    pub async fn context(&self) -> Option<GridContext> {
        self.inner.context.lock().await.clone()
    }

    /// Switch to another field or date. When the context actually changes
    /// the selection is cleared and the cached grid dropped. Returns
    /// whether anything changed.
    pub async fn set_context(&self, field_id: FieldId, date: NaiveDate) -> bool {
        let next = GridContext { field_id, date };
        let mut current = self.inner.context.lock().await;
        if current.as_ref() == Some(&next) {
            return false;
        }

        debug!(field = %next.field_id, date = %next.date, "grid context changed");
        *current = Some(next);
        self.inner.selection.clear_on_context_change();
        self.inner.grid.send_replace(None);
        true
    }

    // ── Grid ─────────────────────────────────────────────────────

    pub fn grid_snapshot(&self) -> Option<Arc<FieldSlotGrid>> {
        self.inner.grid.borrow().clone()
    }

    pub fn subscribe_grid(&self) -> watch::Receiver<Option<Arc<FieldSlotGrid>>> {
        self.inner.grid.subscribe()
    }

    /// Set the context and fetch its grid.
    pub async fn load_grid(
        &self,
        field_id: FieldId,
        date: NaiveDate,
    ) -> Result<Arc<FieldSlotGrid>, CoreError> {
        self.set_context(field_id, date).await;
        self.fetch_grid().await
    }

    /// Fetch the grid for the active context. If the context moved on
    /// while the request was in flight the result is returned but not
    /// published.
    pub async fn fetch_grid(&self) -> Result<Arc<FieldSlotGrid>, CoreError> {
        let ctx = self.context().await.ok_or(CoreError::NoContext)?;

        let raw = self
            .inner
            .client
            .get_field_slots(ctx.field_id.as_str(), &format_date(ctx.date))
            .await?;
        let grid = Arc::new(FieldSlotGrid::try_from(raw)?);

        // Held until the grid is published so `set_context` cannot
        // interleave between the comparison and the send.
        let current = self.inner.context.lock().await;
        if current.as_ref() == Some(&ctx) {
            self.inner.grid.send_replace(Some(Arc::clone(&grid)));
            debug!(
                field = %ctx.field_id,
                courts = grid.courts.len(),
                slots = grid.slot_count(),
                "grid refreshed"
            );
        } else {
            debug!(field = %ctx.field_id, "context changed during fetch; discarding grid");
        }
        drop(current);

        Ok(grid)
    }

    // ── Selection ────────────────────────────────────────────────

    /// Replace the selection for one court. Returns the new total price.
    pub fn select(&self, court_id: CourtId, slots: Vec<CourtSlot>) -> f64 {
        self.inner.selection.set_selection(court_id, slots)
    }

    /// Resolve slot ids against the current grid and make them the
    /// selection of their courts. Every slot must be AVAILABLE; courts
    /// not mentioned keep their selection.
    pub fn select_available(&self, slot_ids: &[SlotId]) -> Result<f64, CoreError> {
        let grid = self.grid_snapshot().ok_or(CoreError::NoContext)?;
        for id in slot_ids {
            if let Some((_, slot)) = grid.find_slot(id).filter(|(_, s)| !s.is_selectable()) {
                return Err(CoreError::ValidationFailed {
                    message: format!("slot {id} is {} and cannot be selected", slot.status),
                });
            }
        }
        self.apply_grouped(&grid, slot_ids)
    }

    /// Like [`Controller::select_available`] but accepts slots in any
    /// status, for unlocking.
    pub fn select_any(&self, slot_ids: &[SlotId]) -> Result<f64, CoreError> {
        let grid = self.grid_snapshot().ok_or(CoreError::NoContext)?;
        self.apply_grouped(&grid, slot_ids)
    }

    fn apply_grouped(&self, grid: &FieldSlotGrid, slot_ids: &[SlotId]) -> Result<f64, CoreError> {
        let mut total = self.inner.selection.total_price();
        for (court_id, slots) in grid.group_slots(slot_ids)? {
            total = self.inner.selection.set_selection(court_id, slots);
        }
        Ok(total)
    }

    // ── Commands ─────────────────────────────────────────────────

    /// Lock the current selection.
    pub async fn lock_selection(&self) -> Result<CommandResult, CoreError> {
        let ctx = self.context().await.ok_or(CoreError::NoContext)?;
        let req = LockRequest::from_selection(ctx.date, ctx.field_id, &self.selection().snapshot());
        self.execute(Command::LockSlots(req)).await
    }

    /// Unlock the current selection.
    pub async fn unlock_selection(&self) -> Result<CommandResult, CoreError> {
        let ctx = self.context().await.ok_or(CoreError::NoContext)?;
        let req =
            UnlockRequest::from_selection(ctx.date, ctx.field_id, &self.selection().snapshot());
        self.execute(Command::UnlockSlots(req)).await
    }

    /// Merge the current selection (single court).
    pub async fn merge_selection(&self) -> Result<CommandResult, CoreError> {
        let ctx = self.context().await.ok_or(CoreError::NoContext)?;
        let req = MergeRequest::from_selection(ctx.date, &self.selection().snapshot())?;
        self.execute(Command::MergeSlots(req)).await
    }

    /// Split a merged slot back into its original slots.
    pub async fn unmerge(&self, slot_id: SlotId) -> Result<CommandResult, CoreError> {
        self.execute(Command::UnmergeSlot { slot_id }).await
    }

    /// Send a command, then refetch the grid whether it succeeded or not.
    ///
    /// A failed command returns its own error even when the refetch
    /// succeeds; a failed refetch after a successful command is logged and
    /// reported as [`CommandResult::Ok`].
    pub async fn execute(&self, cmd: Command) -> Result<CommandResult, CoreError> {
        validate(&cmd)?;
        let name = cmd.name();
        debug!(command = name, "sending command");

        let sent = self.send(&cmd).await;
        match &sent {
            Ok(()) => info!(command = name, "command accepted"),
            Err(e) => warn!(command = name, error = %e, "command failed"),
        }

        let refreshed = self.refetch_after(name).await;
        sent.map(|()| refreshed.map_or(CommandResult::Ok, CommandResult::Refreshed))
    }

    async fn send(&self, cmd: &Command) -> Result<(), CoreError> {
        let client = &self.inner.client;
        match cmd {
            Command::LockSlots(req) => client.lock_slots(&LockSlotsBody::from(req)).await?,
            Command::UnlockSlots(req) => client.unlock_slots(&UnlockSlotsBody::from(req)).await?,
            Command::MergeSlots(req) => client.merge_slots(&MergeSlotsBody::from(req)).await?,
            Command::UnmergeSlot { slot_id } => client.unmerge_slot(slot_id.as_str()).await?,
        }
        Ok(())
    }

    async fn refetch_after(&self, name: &str) -> Option<Arc<FieldSlotGrid>> {
        if self.context().await.is_none() {
            return None;
        }
        match self.fetch_grid().await {
            Ok(grid) => Some(grid),
            Err(e) => {
                warn!(command = name, error = %e, "grid refetch failed");
                None
            }
        }
    }
}

// ── Helpers ──────────────────────────────────────────────────────

fn validate(cmd: &Command) -> Result<(), CoreError> {
    let empty = match cmd {
        Command::LockSlots(req) => req.slot_count() == 0,
        Command::UnlockSlots(req) => req.slot_count() == 0,
        Command::MergeSlots(_) | Command::UnmergeSlot { .. } => false,
    };
    if empty {
        return Err(CoreError::ValidationFailed {
            message: format!("{} needs at least one selected slot", cmd.name()),
        });
    }
    Ok(())
}

fn build_transport(config: &ClientConfig) -> TransportConfig {
    TransportConfig {
        tls: tls_to_transport(&config.tls),
        timeout: config.timeout,
        bearer_token: config.token.clone(),
    }
}

fn tls_to_transport(tls: &TlsVerification) -> TlsMode {
    match tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    }
}
