//! Payout types shared with the two payment providers.

use serde::{Deserialize, Serialize};

/// Fixed amount paid to a mentor per completed meeting, in whole
/// currency units.
pub const MEETING_PAYOUT_AMOUNT: i64 = 25;

/// Phone number identifying a payout-link payee not yet registered
/// with a payment account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub country_code: String,
    pub phone_number: String,
}

/// A completed bank-transfer payout as reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankTransfer {
    /// Provider-assigned transfer identifier.
    pub id: String,
    pub status: String,
    pub amount: i64,
    /// Recipient account at the provider.
    #[serde(rename = "recipientId")]
    pub recipient_id: String,
}

/// A claimable payout link as returned by the payout-link provider.
///
/// Mirrors the provider's response shape; this system never persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutLink {
    pub id: String,
    pub created: String,
    pub link: String,
    pub amount: i64,
    pub status: String,
    pub payee: Payee,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
    pub tax_exempt: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimed_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub country_code: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}
