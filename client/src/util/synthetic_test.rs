use super::*;

const T0: i64 = 1_700_000_000_000;

#[test]
fn same_seed_reproduces_records() {
    let a = users(&mut seeded(7), USER_COUNT, true, T0);
    let b = users(&mut seeded(7), USER_COUNT, true, T0);
    assert_eq!(a, b);

    let a = reward_requests(&mut seeded(7), REQUEST_COUNT, T0);
    let b = reward_requests(&mut seeded(7), REQUEST_COUNT, T0);
    assert_eq!(a, b);
}

#[test]
fn users_have_sequential_ids_and_recent_registration() {
    let rows = users(&mut seeded(1), USER_COUNT, false, T0);
    assert_eq!(rows.len(), USER_COUNT);
    assert_eq!(rows[0].id, "UID1001");
    assert_eq!(rows[USER_COUNT - 1].id, "UID1015");
    for row in &rows {
        assert!(row.registered_on <= T0);
        assert!(row.registered_on > T0 - 30 * DAY_MS);
        assert!(row.exported_on.is_none(), "live users are never exported");
        assert!(row.email.contains('@'));
        assert!(row.email.starts_with(&row.name.split(' ').next().unwrap().to_lowercase()));
    }
}

#[test]
fn mobile_numbers_are_us_formatted() {
    let rows = users(&mut seeded(3), 50, false, T0);
    for mobile in rows.iter().filter_map(|u| u.mobile.as_deref()) {
        assert!(mobile.starts_with("+1"));
        assert_eq!(mobile.len(), 12);
    }
}

#[test]
fn archived_exports_fall_within_last_week() {
    let rows = reward_history(&mut seeded(11), 40, true, T0);
    for at in rows.iter().filter_map(|r| r.exported_on) {
        assert!(at <= T0 && at > T0 - 7 * DAY_MS);
    }
}

#[test]
fn requests_keep_status_invariants() {
    let rows = reward_requests(&mut seeded(5), 40, T0);
    assert_eq!(rows[0].id, "RID2001");
    for row in &rows {
        match row.status {
            RequestStatus::Pending => {
                assert_eq!(row.action_at, None);
                assert_eq!(row.rejection_reason, None);
            }
            RequestStatus::Approved => {
                assert_eq!(row.action_at, Some(T0));
                assert_eq!(row.rejection_reason, None);
            }
            RequestStatus::Rejected => {
                assert_eq!(row.action_at, Some(T0));
                assert!(!row.rejection_reason.as_deref().unwrap_or("").is_empty());
            }
        }
        assert_eq!(row.payment_details, row.payment_method.placeholder_details());
    }
    assert!(rows.iter().any(RewardRequest::is_pending));
}

#[test]
fn history_rejections_carry_reasons() {
    let rows = reward_history(&mut seeded(9), HISTORY_COUNT, false, T0);
    assert_eq!(rows.len(), HISTORY_COUNT);
    for row in &rows {
        if let Resolution::Rejected { reason } = &row.resolution {
            assert!(REJECTION_REASONS.contains(&reason.as_str()));
        }
        assert!(row.exported_on.is_none());
    }
}

#[test]
fn series_values_stay_below_max() {
    let values = series(&mut seeded(2), 6, 1000);
    assert_eq!(values.len(), 6);
    assert!(values.iter().all(|v| *v < 1000));
}
