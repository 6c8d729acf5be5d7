use super::*;

const T0: i64 = 1_700_000_000_000;

fn pending(id: &str) -> RewardRequest {
    RewardRequest {
        id: id.to_owned(),
        user_id: "UID1001".to_owned(),
        name: "Jane Smith".to_owned(),
        reward: "Free E-book".to_owned(),
        payment_method: PaymentMethod::Upi,
        payment_details: PaymentMethod::Upi.placeholder_details().to_owned(),
        status: RequestStatus::Pending,
        action_at: None,
        rejection_reason: None,
    }
}

fn user(exported_on: Option<i64>) -> UserRecord {
    UserRecord {
        id: "UID1001".to_owned(),
        name: "Jane Smith".to_owned(),
        email: "jane.smith@gmail.com".to_owned(),
        mobile: None,
        gender: Gender::Female,
        registered_on: T0,
        exported_on,
    }
}

// =============================================================
// approve / reject
// =============================================================

#[test]
fn approve_stamps_action_time() {
    let approved = pending("RID2001").approved(T0).unwrap();
    assert_eq!(approved.status, RequestStatus::Approved);
    assert_eq!(approved.action_at, Some(T0));
    assert!(!approved.action_label().is_empty());
    assert_eq!(approved.rejection_reason, None);
}

#[test]
fn reject_requires_non_empty_reason() {
    assert!(matches!(
        pending("RID2001").rejected("   ", T0),
        Err(RecordError::EmptyReason)
    ));
    let rejected = pending("RID2001").rejected("  Not eligible ", T0).unwrap();
    assert_eq!(rejected.status, RequestStatus::Rejected);
    assert_eq!(rejected.rejection_reason.as_deref(), Some("Not eligible"));
}

#[test]
fn resolved_request_cannot_transition_again() {
    let approved = pending("RID2001").approved(T0).unwrap();
    assert!(matches!(
        approved.rejected("Already claimed", T0),
        Err(RecordError::AlreadyResolved { status: RequestStatus::Approved, .. })
    ));
    assert!(matches!(approved.approved(T0), Err(RecordError::AlreadyResolved { .. })));
}

#[test]
fn pending_request_has_no_action_label() {
    assert_eq!(pending("RID2001").action_label(), "");
}

// =============================================================
// to_history
// =============================================================

#[test]
fn pending_request_has_no_history_entry() {
    assert!(pending("RID2001").to_history().is_none());
}

#[test]
fn rejected_request_carries_reason_into_history() {
    let entry = pending("RID2002")
        .rejected("Invalid details", T0)
        .unwrap()
        .to_history()
        .unwrap();
    assert_eq!(entry.id, "RID2002");
    assert_eq!(entry.resolution, Resolution::Rejected { reason: "Invalid details".to_owned() });
    assert_eq!(entry.resolution.status(), RequestStatus::Rejected);
    assert_eq!(entry.resolution.reason(), Some("Invalid details"));
    assert_eq!(entry.action_at, T0);
    assert_eq!(entry.exported_on, None);
}

#[test]
fn history_entry_serializes_status_inline() {
    let entry = pending("RID2003").approved(T0).unwrap().to_history().unwrap();
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["status"], "approved");
    assert_eq!(json["id"], "RID2003");
}

// =============================================================
// archive rows
// =============================================================

#[test]
fn archive_row_deletable_only_after_export() {
    let row = user(None);
    assert!(matches!(row.ensure_deletable(), Err(RecordError::NotExported { .. })));
    assert_eq!(row.exported_label(), "No");

    let exported = row.exported(T0);
    assert!(exported.ensure_deletable().is_ok());
    assert_eq!(exported.exported_label(), "2023-11-14");
}

#[test]
fn user_cells_fill_missing_mobile() {
    let cells = user(None).cells();
    assert_eq!(
        cells,
        ["UID1001", "Jane Smith", "jane.smith@gmail.com", "N/A", "Female", "2023-11-14"]
    );
}

#[test]
fn status_display_is_lowercase() {
    assert_eq!(RequestStatus::Rejected.to_string(), "rejected");
    assert_eq!(
        RecordError::AlreadyResolved { id: "RID1".to_owned(), status: RequestStatus::Approved }.to_string(),
        "request RID1 is already approved"
    );
}
