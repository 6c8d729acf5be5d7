//! In-memory record collections behind the dashboard tables.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend. `DataStore` is either empty (the default) or filled
//! with synthetic records while demo mode is on. Row actions from the tables
//! land here as typed operations; the views re-render from the result.
//!
//! DESIGN
//! ======
//! Approving or rejecting a request resolves it in place, so the row shows
//! the action time without buttons. After the migration delay the page calls
//! `complete_migration`, which moves the resolved request to the top of the
//! history collection. The timer carries the load generation it was
//! scheduled in; after a reload (which may reuse request ids) or a clear,
//! the stale migration is a no-op.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use rand::Rng;
use serde::Serialize;

use crate::state::records::{ArchiveRecord, RecordError, RewardHistoryEntry, RewardRequest, UserRecord};
use crate::state::ui::ArchiveTab;
use crate::util::synthetic;

const DEMO_TOTAL_USERS: u64 = 1_254;
const DEMO_TOTAL_VIEWS: u64 = 45_678;
const DEMO_TOTAL_REDEEMED: u64 = 342;

/// Headline counters above the tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_views: u64,
    pub total_redeemed: u64,
}

impl DashboardStats {
    fn demo() -> Self {
        Self {
            total_users: DEMO_TOTAL_USERS,
            total_views: DEMO_TOTAL_VIEWS,
            total_redeemed: DEMO_TOTAL_REDEEMED,
        }
    }
}

/// Which bulk export was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportTarget {
    Users,
    Rewards,
}

impl ExportTarget {
    #[must_use]
    pub fn notice(self) -> &'static str {
        match self {
            ExportTarget::Users => "User data exported successfully!",
            ExportTarget::Rewards => "Reward data exported successfully!",
        }
    }
}

/// Result of a simulated bulk export. Nothing is written anywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportReceipt {
    pub target: ExportTarget,
    pub records: usize,
    pub bytes: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataStore {
    /// Whether demo data is shown.
    pub synthetic: bool,
    /// Bumped by every `load`.
    pub generation: u64,
    pub stats: DashboardStats,
    pub users: Vec<UserRecord>,
    /// Pending-requests view. Resolved requests linger here until migrated.
    pub requests: Vec<RewardRequest>,
    pub history: Vec<RewardHistoryEntry>,
    pub archived_users: Vec<UserRecord>,
    pub archived_rewards: Vec<RewardHistoryEntry>,
}

impl DataStore {
    /// Fill every collection with fresh synthetic records, or clear them all.
    pub fn load<R: Rng + ?Sized>(&mut self, use_synthetic: bool, rng: &mut R, now_ms: i64) {
        self.synthetic = use_synthetic;
        self.generation = self.generation.wrapping_add(1);
        if !use_synthetic {
            self.clear();
            return;
        }
        self.stats = DashboardStats::demo();
        self.users = synthetic::users(rng, synthetic::USER_COUNT, false, now_ms);
        self.requests = synthetic::reward_requests(rng, synthetic::REQUEST_COUNT, now_ms);
        self.history = synthetic::reward_history(rng, synthetic::HISTORY_COUNT, false, now_ms);
        self.archived_users = synthetic::users(rng, synthetic::ARCHIVED_USER_COUNT, true, now_ms);
        self.archived_rewards = synthetic::reward_history(rng, synthetic::ARCHIVED_REWARD_COUNT, true, now_ms);
        log::info!("loaded synthetic dashboard data");
    }

    /// Flip demo mode and reload. Returns the new mode.
    pub fn toggle_synthetic<R: Rng + ?Sized>(&mut self, rng: &mut R, now_ms: i64) -> bool {
        let next = !self.synthetic;
        self.load(next, rng, now_ms);
        next
    }

    /// Empty every collection and zero the counters. Demo mode is untouched.
    pub fn clear(&mut self) {
        self.stats = DashboardStats::default();
        self.users.clear();
        self.requests.clear();
        self.history.clear();
        self.archived_users.clear();
        self.archived_rewards.clear();
    }

    // =========================================================================
    // REWARD REQUESTS
    // =========================================================================

    /// Approve a pending request.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `AlreadyResolved` if it was already acted on.
    pub fn approve(&mut self, request_id: &str, now_ms: i64) -> Result<(), RecordError> {
        let slot = self.request_mut(request_id)?;
        *slot = slot.approved(now_ms)?;
        log::info!("approved reward request {request_id}");
        Ok(())
    }

    /// Reject a pending request with a reason.
    ///
    /// # Errors
    ///
    /// As `approve`, plus `EmptyReason` for a blank reason.
    pub fn reject(&mut self, request_id: &str, reason: &str, now_ms: i64) -> Result<(), RecordError> {
        let slot = self.request_mut(request_id)?;
        *slot = slot.rejected(reason, now_ms)?;
        log::info!("rejected reward request {request_id}: {}", reason.trim());
        Ok(())
    }

    /// Move a resolved request out of the pending view into history.
    /// Returns `false` (and changes nothing) if the request is gone, still
    /// pending, or `generation` is not the current load.
    pub fn complete_migration(&mut self, request_id: &str, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        let Some(pos) = self.requests.iter().position(|r| r.id == request_id) else {
            return false;
        };
        let Some(entry) = self.requests[pos].to_history() else {
            return false;
        };
        self.requests.remove(pos);
        self.history.insert(0, entry);
        log::debug!("moved reward request {request_id} to history");
        true
    }

    fn request_mut(&mut self, request_id: &str) -> Result<&mut RewardRequest, RecordError> {
        self.requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or_else(|| not_found(request_id))
    }

    // =========================================================================
    // ARCHIVE
    // =========================================================================

    /// Stamp an archive row as exported.
    ///
    /// # Errors
    ///
    /// `NotFound` if the row does not exist in that archive.
    pub fn export_single(&mut self, archive: ArchiveTab, record_id: &str, now_ms: i64) -> Result<(), RecordError> {
        match archive {
            ArchiveTab::Users => export_in(&mut self.archived_users, record_id, now_ms),
            ArchiveTab::Rewards => export_in(&mut self.archived_rewards, record_id, now_ms),
        }?;
        log::info!("exported archived {} record {record_id}", archive.id());
        Ok(())
    }

    /// Delete an exported archive row.
    ///
    /// # Errors
    ///
    /// `NotFound` if the row does not exist, `NotExported` if it was never exported.
    pub fn delete_single(&mut self, archive: ArchiveTab, record_id: &str) -> Result<(), RecordError> {
        match archive {
            ArchiveTab::Users => delete_in(&mut self.archived_users, record_id),
            ArchiveTab::Rewards => delete_in(&mut self.archived_rewards, record_id),
        }?;
        log::info!("deleted archived {} record {record_id}", archive.id());
        Ok(())
    }

    // =========================================================================
    // BULK EXPORT
    // =========================================================================

    /// Serialize a collection as if exporting it and log the result.
    ///
    /// # Errors
    ///
    /// `Export` if serialization fails.
    pub fn export(&self, target: ExportTarget) -> Result<ExportReceipt, RecordError> {
        let (payload, records) = match target {
            ExportTarget::Users => (serde_json::to_vec(&self.users)?, self.users.len()),
            ExportTarget::Rewards => {
                let payload = RewardsExport { requests: &self.requests, history: &self.history };
                (serde_json::to_vec(&payload)?, self.requests.len() + self.history.len())
            }
        };
        log::info!("export {target:?}: {records} records, {} bytes", payload.len());
        Ok(ExportReceipt { target, records, bytes: payload.len() })
    }
}

#[derive(Serialize)]
struct RewardsExport<'a> {
    requests: &'a [RewardRequest],
    history: &'a [RewardHistoryEntry],
}

fn not_found(id: &str) -> RecordError {
    RecordError::NotFound { id: id.to_owned() }
}

fn export_in<T: ArchiveRecord>(rows: &mut [T], id: &str, now_ms: i64) -> Result<(), RecordError> {
    let row = rows.iter_mut().find(|r| r.id() == id).ok_or_else(|| not_found(id))?;
    *row = row.exported(now_ms);
    Ok(())
}

fn delete_in<T: ArchiveRecord>(rows: &mut Vec<T>, id: &str) -> Result<(), RecordError> {
    let pos = rows.iter().position(|r| r.id() == id).ok_or_else(|| not_found(id))?;
    rows[pos].ensure_deletable()?;
    rows.remove(pos);
    Ok(())
}
