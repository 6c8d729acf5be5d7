//! Record types for users and reward requests, with their pure transitions.
//!
//! DESIGN
//! ======
//! Transitions (approve, reject, export) take a record by reference and
//! return the next value or a `RecordError`; they never touch the store or
//! the DOM. `DataStore` applies them and the tables only project the result.
//!
//! Invariants carried by the types:
//! - a request leaves `Pending` exactly once;
//! - a rejection always carries a non-empty reason;
//! - archive rows are deletable only once `exported_on` is set.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use serde::{Deserialize, Serialize};

use crate::util::format::{format_date, format_timestamp};

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Why a record action was refused.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("record {id} not found")]
    NotFound { id: String },
    #[error("request {id} is already {status}")]
    AlreadyResolved { id: String, status: RequestStatus },
    #[error("Enter a rejection reason.")]
    EmptyReason,
    #[error("record {id} must be exported before it can be deleted")]
    NotExported { id: String },
    #[error("export serialization failed: {0}")]
    Export(#[from] serde_json::Error),
}

// =============================================================================
// VOCABULARY ENUMS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    BankTransfer,
    Upi,
    PayPal,
    CreditCard,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::BankTransfer,
        PaymentMethod::Upi,
        PaymentMethod::PayPal,
        PaymentMethod::CreditCard,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::CreditCard => "Credit Card",
        }
    }

    /// Masked placeholder details, one field per line.
    #[must_use]
    pub fn placeholder_details(self) -> &'static str {
        match self {
            PaymentMethod::BankTransfer => "Account: XXXXXX7890\nIFSC: ABCD0123456",
            PaymentMethod::Upi => "UPI ID: xxxxxxxx@ybl",
            PaymentMethod::PayPal => "PayPal ID: user@example.com",
            PaymentMethod::CreditCard => "Card: XXXX-XXXX-XXXX-1234\nExp: 12/25",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// USERS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub gender: Gender,
    /// Epoch milliseconds.
    pub registered_on: i64,
    /// Set once the archived record has been exported. Live users never carry it.
    pub exported_on: Option<i64>,
}

impl UserRecord {
    /// Visible cell text of the users table, in column order.
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.mobile.clone().unwrap_or_else(|| "N/A".to_owned()),
            self.gender.label().to_owned(),
            format_date(self.registered_on),
        ]
    }
}

// =============================================================================
// REWARD REQUESTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRequest {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub reward: String,
    pub payment_method: PaymentMethod,
    pub payment_details: String,
    pub status: RequestStatus,
    /// When the request was approved or rejected (epoch milliseconds).
    pub action_at: Option<i64>,
    pub rejection_reason: Option<String>,
}

impl RewardRequest {
    /// The request approved at `now_ms`.
    ///
    /// # Errors
    ///
    /// `AlreadyResolved` unless the request is pending.
    pub fn approved(&self, now_ms: i64) -> Result<Self, RecordError> {
        self.ensure_pending()?;
        Ok(Self {
            status: RequestStatus::Approved,
            action_at: Some(now_ms),
            rejection_reason: None,
            ..self.clone()
        })
    }

    /// The request rejected at `now_ms` with a trimmed `reason`.
    ///
    /// # Errors
    ///
    /// `AlreadyResolved` unless pending; `EmptyReason` for a blank reason.
    pub fn rejected(&self, reason: &str, now_ms: i64) -> Result<Self, RecordError> {
        self.ensure_pending()?;
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(RecordError::EmptyReason);
        }
        Ok(Self {
            status: RequestStatus::Rejected,
            action_at: Some(now_ms),
            rejection_reason: Some(reason.to_owned()),
            ..self.clone()
        })
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Formatted action time, empty while pending.
    #[must_use]
    pub fn action_label(&self) -> String {
        self.action_at.map(format_timestamp).unwrap_or_default()
    }

    /// The history entry for a resolved request; `None` while pending.
    #[must_use]
    pub fn to_history(&self) -> Option<RewardHistoryEntry> {
        let resolution = match self.status {
            RequestStatus::Pending => return None,
            RequestStatus::Approved => Resolution::Approved,
            RequestStatus::Rejected => Resolution::Rejected {
                reason: self.rejection_reason.clone().unwrap_or_default(),
            },
        };
        Some(RewardHistoryEntry {
            id: self.id.clone(),
            user_id: self.user_id.clone(),
            name: self.name.clone(),
            reward: self.reward.clone(),
            resolution,
            action_at: self.action_at?,
            exported_on: None,
        })
    }

    fn ensure_pending(&self) -> Result<(), RecordError> {
        if self.is_pending() {
            Ok(())
        } else {
            Err(RecordError::AlreadyResolved { id: self.id.clone(), status: self.status })
        }
    }
}

// =============================================================================
// HISTORY
// =============================================================================

/// Outcome of a resolved request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Resolution {
    Approved,
    Rejected { reason: String },
}

impl Resolution {
    #[must_use]
    pub fn status(&self) -> RequestStatus {
        match self {
            Resolution::Approved => RequestStatus::Approved,
            Resolution::Rejected { .. } => RequestStatus::Rejected,
        }
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Resolution::Approved => None,
            Resolution::Rejected { reason } => Some(reason),
        }
    }
}

/// A resolved request, as listed in history and the rewards archive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardHistoryEntry {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub reward: String,
    #[serde(flatten)]
    pub resolution: Resolution,
    pub action_at: i64,
    pub exported_on: Option<i64>,
}

// =============================================================================
// ARCHIVE ROWS
// =============================================================================

/// Rows of the archive tables: exportable, and deletable once exported.
pub trait ArchiveRecord: Clone {
    fn id(&self) -> &str;
    fn exported_on(&self) -> Option<i64>;

    /// The record stamped as exported at `now_ms`. Re-exporting re-stamps.
    #[must_use]
    fn exported(&self, now_ms: i64) -> Self;

    /// # Errors
    ///
    /// `NotExported` until `exported_on` is set.
    fn ensure_deletable(&self) -> Result<(), RecordError> {
        if self.exported_on().is_some() {
            Ok(())
        } else {
            Err(RecordError::NotExported { id: self.id().to_owned() })
        }
    }

    /// Cell text for the "Exported On" column.
    fn exported_label(&self) -> String {
        self.exported_on().map_or_else(|| "No".to_owned(), format_date)
    }
}

impl ArchiveRecord for UserRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn exported_on(&self) -> Option<i64> {
        self.exported_on
    }

    fn exported(&self, now_ms: i64) -> Self {
        Self { exported_on: Some(now_ms), ..self.clone() }
    }
}

impl ArchiveRecord for RewardHistoryEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn exported_on(&self) -> Option<i64> {
        self.exported_on
    }

    fn exported(&self, now_ms: i64) -> Self {
        Self { exported_on: Some(now_ms), ..self.clone() }
    }
}
