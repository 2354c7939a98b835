//! Shared types used across the generator.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp layout used for every timestamp the generator writes.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Monetary amount in won. Always a positive multiple of 1000.
pub type Amount = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    #[serde(rename = "KAKAOPAY")]
    KakaoPay,
    Cash,
    Transfer,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Card     => "CARD",
            Self::KakaoPay => "KAKAOPAY",
            Self::Cash     => "CASH",
            Self::Transfer => "TRANSFER",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Approved,
    Canceled,
}

impl PaymentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::Canceled => "CANCELED",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Delivery flag: where the order was fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Delivery,
    InStore,
}

impl OrderType {
    /// Label written to the CSV column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Delivery => "배달",
            Self::InStore  => "매장",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One synthetic point-of-sale transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord {
    pub store_name:         String,
    pub authorization_code: String,
    pub amount:             Amount,
    pub payment_method:     PaymentMethod,
    pub status:             PaymentStatus,
    pub order_type:         OrderType,
    pub approval_time:      NaiveDateTime,
    /// Present only for canceled records whose cancellation falls inside
    /// the window. A CANCELED record may still have `None` here.
    pub canceled_at:        Option<NaiveDateTime>,
}

impl PaymentRecord {
    pub fn is_canceled(&self) -> bool {
        self.status == PaymentStatus::Canceled
    }

    /// Canceled, but the cancellation moment fell past the window end.
    pub fn is_canceled_after_window(&self) -> bool {
        self.is_canceled() && self.canceled_at.is_none()
    }
}
