// ── Command API ──
//
// Every write against the booking backend is a `Command`. The controller
// sends it, then refetches the grid whatever the outcome; no status
// change is ever predicted locally.

pub mod requests;

use std::sync::Arc;

use crate::model::{FieldSlotGrid, SlotId};

pub use requests::{
    LockCourt, LockRequest, LockTimeSlot, MergeRequest, UnlockCourt, UnlockRequest,
};

/// All slot mutations the backend supports.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LockSlots(LockRequest),
    UnlockSlots(UnlockRequest),
    MergeSlots(MergeRequest),
    UnmergeSlot { slot_id: SlotId },
}

impl Command {
    /// Short name for logs and messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LockSlots(_) => "lock",
            Self::UnlockSlots(_) => "unlock",
            Self::MergeSlots(_) => "merge",
            Self::UnmergeSlot { .. } => "unmerge",
        }
    }
}

/// Outcome of a successful command.
#[derive(Debug, Clone)]
pub enum CommandResult {
    /// Accepted; no grid context was active so nothing was refetched, or
    /// the refetch itself failed.
    Ok,
    /// Accepted, and this is the grid as the backend now reports it.
    Refreshed(Arc<FieldSlotGrid>),
}
