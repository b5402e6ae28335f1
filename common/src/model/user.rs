use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::model::booking::Booking;

/// Per-user settings collected at registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Language,
    pub interests: Vec<String>,
}

/// A signed-in visitor. Authentication is simulated: the record is created
/// locally at sign-in or registration and replaced wholesale on profile edits.
///
/// The `bookings` field is informational only; the authoritative booking list
/// lives in the application state, keyed by `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub preferences: Preferences,
    pub bookings: Vec<Booking>,
    /// Saved tour ids in insertion order.
    pub wishlist: Vec<String>,
}
