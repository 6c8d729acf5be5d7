//! Placeholder records for demo mode.
//!
//! DESIGN
//! ======
//! Every generator takes the random source and the current instant as
//! arguments, so a fixed seed and clock reproduce the same records. The
//! dashboard seeds a `StdRng` from the clock on each load.

#[cfg(test)]
#[path = "synthetic_test.rs"]
mod synthetic_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::state::records::{
    Gender, PaymentMethod, RequestStatus, Resolution, RewardHistoryEntry, RewardRequest, UserRecord,
};

pub const USER_COUNT: usize = 15;
pub const REQUEST_COUNT: usize = 8;
pub const HISTORY_COUNT: usize = 12;
pub const ARCHIVED_USER_COUNT: usize = 6;
pub const ARCHIVED_REWARD_COUNT: usize = 10;

const DAY_MS: i64 = 24 * 60 * 60 * 1_000;

const FIRST_NAMES: [&str; 10] = [
    "John", "Jane", "Robert", "Emily", "Michael", "Sarah", "David", "Lisa", "James", "Amanda",
];
const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez", "Martinez",
];
const DOMAINS: [&str; 4] = ["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];
const REWARDS: [&str; 5] = [
    "$10 Gift Card",
    "Free Subscription",
    "Discount Coupon",
    "Premium Account",
    "Free E-book",
];
const REJECTION_REASONS: [&str; 3] = ["Invalid details", "Already claimed", "Not eligible"];

/// Weighted 3:1:1 toward pending so the approve/reject controls show up.
const REQUEST_STATUSES: [RequestStatus; 5] = [
    RequestStatus::Pending,
    RequestStatus::Pending,
    RequestStatus::Pending,
    RequestStatus::Approved,
    RequestStatus::Rejected,
];

/// Requests and history draw names from the first five of each list.
const SHORT_NAME_POOL: usize = 5;

/// Generator seeded with `seed`.
#[must_use]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

fn days_before<R: Rng + ?Sized>(rng: &mut R, now_ms: i64, days: i64) -> i64 {
    now_ms - rng.random_range(0..days * DAY_MS)
}

/// Half of archived rows arrive already exported within the last week.
fn archived_export<R: Rng + ?Sized>(rng: &mut R, now_ms: i64) -> Option<i64> {
    rng.random_bool(0.5).then(|| days_before(rng, now_ms, 7))
}

fn short_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = pick(rng, &FIRST_NAMES[..SHORT_NAME_POOL]);
    let last = pick(rng, &LAST_NAMES[..SHORT_NAME_POOL]);
    format!("{first} {last}")
}

/// `count` users registered within the last 30 days.
pub fn users<R: Rng + ?Sized>(rng: &mut R, count: usize, archived: bool, now_ms: i64) -> Vec<UserRecord> {
    (1..=count)
        .map(|i| {
            let first = pick(rng, &FIRST_NAMES);
            let last = pick(rng, &LAST_NAMES);
            let domain = pick(rng, &DOMAINS);
            let mobile = rng
                .random_bool(0.8)
                .then(|| format!("+1{}", rng.random_range(1_000_000_000_u64..10_000_000_000)));
            UserRecord {
                id: format!("UID{}", 1000 + i),
                name: format!("{first} {last}"),
                email: format!("{}.{}@{domain}", first.to_lowercase(), last.to_lowercase()),
                mobile,
                gender: *pick(rng, &Gender::ALL),
                registered_on: days_before(rng, now_ms, 30),
                exported_on: if archived { archived_export(rng, now_ms) } else { None },
            }
        })
        .collect()
}

/// `count` reward requests, mostly pending.
pub fn reward_requests<R: Rng + ?Sized>(rng: &mut R, count: usize, now_ms: i64) -> Vec<RewardRequest> {
    (1..=count)
        .map(|i| {
            let name = short_name(rng);
            let status = *pick(rng, &REQUEST_STATUSES);
            let method = *pick(rng, &PaymentMethod::ALL);
            let rejection_reason =
                (status == RequestStatus::Rejected).then(|| (*pick(rng, &REJECTION_REASONS)).to_owned());
            RewardRequest {
                id: format!("RID{}", 2000 + i),
                user_id: format!("UID{}", 1000 + i),
                name,
                reward: (*pick(rng, &REWARDS)).to_owned(),
                payment_method: method,
                payment_details: method.placeholder_details().to_owned(),
                status,
                action_at: (status != RequestStatus::Pending).then_some(now_ms),
                rejection_reason,
            }
        })
        .collect()
}

/// `count` resolved requests acted on within the last 30 days.
pub fn reward_history<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    archived: bool,
    now_ms: i64,
) -> Vec<RewardHistoryEntry> {
    (1..=count)
        .map(|i| {
            let name = short_name(rng);
            let reward = (*pick(rng, &REWARDS)).to_owned();
            let resolution = if rng.random_bool(0.5) {
                Resolution::Approved
            } else {
                Resolution::Rejected { reason: (*pick(rng, &REJECTION_REASONS)).to_owned() }
            };
            RewardHistoryEntry {
                id: format!("RID{}", 2000 + i),
                user_id: format!("UID{}", 1000 + i),
                name,
                reward,
                resolution,
                action_at: days_before(rng, now_ms, 30),
                exported_on: if archived { archived_export(rng, now_ms) } else { None },
            }
        })
        .collect()
}

/// One placeholder value per label, each in `0..max`.
pub fn series<R: Rng + ?Sized>(rng: &mut R, len: usize, max: u32) -> Vec<u32> {
    (0..len).map(|_| rng.random_range(0..max)).collect()
}

/// Generator seeded from a wall-clock instant, for interactive reloads.
#[must_use]
pub fn from_clock(now_ms: i64) -> StdRng {
    seeded(now_ms.unsigned_abs())
}
