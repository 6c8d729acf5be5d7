use super::*;
use crate::state::records::{Gender, PaymentMethod, RequestStatus, Resolution};
use crate::util::synthetic::{self, seeded};

const T0: i64 = 1_700_000_000_000;

fn request(id: &str) -> RewardRequest {
    RewardRequest {
        id: id.to_owned(),
        user_id: "UID1001".to_owned(),
        name: "John Smith".to_owned(),
        reward: "$10 Gift Card".to_owned(),
        payment_method: PaymentMethod::PayPal,
        payment_details: PaymentMethod::PayPal.placeholder_details().to_owned(),
        status: RequestStatus::Pending,
        action_at: None,
        rejection_reason: None,
    }
}

fn archived_user(id: &str, exported_on: Option<i64>) -> UserRecord {
    UserRecord {
        id: id.to_owned(),
        name: "Lisa Davis".to_owned(),
        email: "lisa.davis@yahoo.com".to_owned(),
        mobile: Some("+15551234567".to_owned()),
        gender: Gender::Female,
        registered_on: T0,
        exported_on,
    }
}

fn store_with_requests(ids: &[&str]) -> DataStore {
    DataStore {
        requests: ids.iter().map(|id| request(id)).collect(),
        ..DataStore::default()
    }
}

// =============================================================
// load / toggle
// =============================================================

#[test]
fn default_store_is_empty_and_not_synthetic() {
    let store = DataStore::default();
    assert!(!store.synthetic);
    assert_eq!(store.stats, DashboardStats::default());
    assert!(store.users.is_empty());
    assert!(store.requests.is_empty());
}

#[test]
fn synthetic_load_fills_every_collection() {
    let mut store = DataStore::default();
    store.load(true, &mut seeded(42), T0);
    assert!(store.synthetic);
    assert_eq!(store.stats.total_users, 1_254);
    assert_eq!(store.stats.total_views, 45_678);
    assert_eq!(store.stats.total_redeemed, 342);
    assert_eq!(store.users.len(), synthetic::USER_COUNT);
    assert_eq!(store.requests.len(), synthetic::REQUEST_COUNT);
    assert_eq!(store.history.len(), synthetic::HISTORY_COUNT);
    assert_eq!(store.archived_users.len(), synthetic::ARCHIVED_USER_COUNT);
    assert_eq!(store.archived_rewards.len(), synthetic::ARCHIVED_REWARD_COUNT);
}

#[test]
fn seeded_loads_are_reproducible() {
    let mut a = DataStore::default();
    let mut b = DataStore::default();
    a.load(true, &mut seeded(9), T0);
    b.load(true, &mut seeded(9), T0);
    assert_eq!(a, b);
}

#[test]
fn toggle_flips_between_synthetic_and_empty() {
    let mut store = DataStore::default();
    assert!(store.toggle_synthetic(&mut seeded(1), T0));
    assert!(!store.users.is_empty());

    assert!(!store.toggle_synthetic(&mut seeded(1), T0));
    assert_eq!(store, DataStore { generation: 2, ..DataStore::default() });
}

// =============================================================
// approve / reject / migration
// =============================================================

#[test]
fn approve_then_reject_is_refused() {
    let mut store = store_with_requests(&["RID2001"]);
    store.approve("RID2001", T0).unwrap();
    let row = &store.requests[0];
    assert_eq!(row.status, RequestStatus::Approved);
    assert!(!row.action_label().is_empty());

    let before = store.clone();
    assert!(matches!(
        store.reject("RID2001", "Not eligible", T0),
        Err(RecordError::AlreadyResolved { .. })
    ));
    assert_eq!(store, before);
}

#[test]
fn reject_with_blank_reason_leaves_request_pending() {
    let mut store = store_with_requests(&["RID2001"]);
    assert!(matches!(store.reject("RID2001", "  ", T0), Err(RecordError::EmptyReason)));
    assert!(store.requests[0].is_pending());
}

#[test]
fn unknown_request_is_not_found() {
    let mut store = store_with_requests(&["RID2001"]);
    assert!(matches!(store.approve("RID9999", T0), Err(RecordError::NotFound { .. })));
}

#[test]
fn migration_moves_resolved_request_to_history_head() {
    let mut store = store_with_requests(&["RID2001", "RID2002"]);
    store.history = synthetic::reward_history(&mut seeded(3), 2, false, T0);

    store.reject("RID2002", "Already claimed", T0).unwrap();
    assert!(store.complete_migration("RID2002", store.generation));

    assert_eq!(store.requests.len(), 1);
    assert_eq!(store.requests[0].id, "RID2001");
    assert_eq!(store.history.len(), 3);
    assert_eq!(store.history[0].id, "RID2002");
    assert_eq!(
        store.history[0].resolution,
        Resolution::Rejected { reason: "Already claimed".to_owned() }
    );
}

#[test]
fn migration_of_missing_or_pending_request_is_noop() {
    let mut store = store_with_requests(&["RID2001"]);
    let generation = store.generation;
    assert!(!store.complete_migration("RID2001", generation));
    assert!(!store.complete_migration("RID2999", generation));

    store.approve("RID2001", T0).unwrap();
    assert!(store.complete_migration("RID2001", generation));
    assert!(!store.complete_migration("RID2001", generation));
    assert_eq!(store.history.len(), 1);
}

#[test]
fn migration_after_clear_is_noop() {
    let mut store = store_with_requests(&["RID2001"]);
    store.approve("RID2001", T0).unwrap();
    let generation = store.generation;
    store.load(false, &mut seeded(0), T0);
    assert!(!store.complete_migration("RID2001", generation));
    assert!(store.history.is_empty());
}

#[test]
fn migration_scheduled_before_reload_skips_fresh_rows() {
    let mut store = DataStore::default();
    store.load(true, &mut seeded(4), T0);
    let id = store.requests.iter().find(|r| r.is_pending()).unwrap().id.clone();
    store.approve(&id, T0).unwrap();
    let generation = store.generation;

    store.toggle_synthetic(&mut seeded(4), T0);
    store.toggle_synthetic(&mut seeded(4), T0);
    let history_len = store.history.len();
    let requests_before = store.requests.clone();

    assert!(!store.complete_migration(&id, generation));
    assert_eq!(store.history.len(), history_len);
    assert_eq!(store.requests, requests_before);
}

#[test]
fn every_load_advances_generation() {
    let mut store = DataStore::default();
    store.load(true, &mut seeded(1), T0);
    let first = store.generation;
    store.load(true, &mut seeded(1), T0);
    assert_eq!(store.generation, first + 1);
}

// =============================================================
// archive export / delete
// =============================================================

#[test]
fn delete_requires_prior_export() {
    let mut store = DataStore {
        archived_users: vec![archived_user("UID1001", None)],
        ..DataStore::default()
    };
    assert!(matches!(
        store.delete_single(ArchiveTab::Users, "UID1001"),
        Err(RecordError::NotExported { .. })
    ));
    assert_eq!(store.archived_users.len(), 1);

    store.export_single(ArchiveTab::Users, "UID1001", T0).unwrap();
    assert_eq!(store.archived_users[0].exported_on, Some(T0));

    store.delete_single(ArchiveTab::Users, "UID1001").unwrap();
    assert!(store.archived_users.is_empty());
}

#[test]
fn archive_actions_target_the_named_archive() {
    let mut store = DataStore::default();
    store.load(true, &mut seeded(5), T0);
    let reward_id = store.archived_rewards[0].id.clone();

    store.export_single(ArchiveTab::Rewards, &reward_id, T0).unwrap();
    assert_eq!(store.archived_rewards[0].exported_on, Some(T0));

    assert!(matches!(
        store.export_single(ArchiveTab::Users, &reward_id, T0),
        Err(RecordError::NotFound { .. })
    ));
}

#[test]
fn already_exported_row_deletes_directly() {
    let mut store = DataStore {
        archived_users: vec![archived_user("UID1002", Some(T0 - 1_000))],
        ..DataStore::default()
    };
    store.delete_single(ArchiveTab::Users, "UID1002").unwrap();
    assert!(store.archived_users.is_empty());
    assert!(matches!(
        store.delete_single(ArchiveTab::Users, "UID1002"),
        Err(RecordError::NotFound { .. })
    ));
}

// =============================================================
// bulk export
// =============================================================

#[test]
fn bulk_export_counts_records() {
    let mut store = DataStore::default();
    store.load(true, &mut seeded(8), T0);

    let users = store.export(ExportTarget::Users).unwrap();
    assert_eq!(users.records, synthetic::USER_COUNT);
    assert!(users.bytes > 0);

    let rewards = store.export(ExportTarget::Rewards).unwrap();
    assert_eq!(rewards.records, synthetic::REQUEST_COUNT + synthetic::HISTORY_COUNT);
    assert_eq!(ExportTarget::Rewards.notice(), "Reward data exported successfully!");
}

#[test]
fn bulk_export_of_empty_store_still_succeeds() {
    let receipt = DataStore::default().export(ExportTarget::Users).unwrap();
    assert_eq!(receipt.records, 0);
    assert_eq!(receipt.bytes, 2);
}
