use serde::{Deserialize, Serialize};

use crate::model::tour::Tour;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }
}

/// A confirmed reservation against a tour for a specific date and party size.
///
/// The tour record is denormalized into the booking at creation time so the
/// reservation stays self-describing even if the catalog is later replaced.
/// Bookings are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub tour_id: String,
    pub tour: Tour,
    /// ISO calendar date the tour starts.
    pub start_date: String,
    pub number_of_people: u32,
    pub total_price: u32,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// ISO timestamp of booking creation.
    pub created_at: String,
}

impl Booking {
    /// Builds a confirmed booking. The total price is always the tour's
    /// per-person price multiplied by the party size.
    pub fn confirmed(
        id: String,
        user_id: String,
        tour: Tour,
        start_date: String,
        number_of_people: u32,
        special_requests: Option<String>,
        created_at: String,
    ) -> Self {
        Self {
            id,
            user_id,
            tour_id: tour.id.clone(),
            total_price: tour.price * number_of_people,
            tour,
            start_date,
            number_of_people,
            status: BookingStatus::Confirmed,
            special_requests,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tour::tests::sample_tour;

    #[test]
    fn total_price_is_price_times_party_size() {
        let booking = Booking::confirmed(
            "b1".to_string(),
            "u1".to_string(),
            sample_tour(),
            "2025-03-15".to_string(),
            3,
            None,
            "2025-01-01T00:00:00Z".to_string(),
        );
        assert_eq!(booking.total_price, 1350);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.tour_id, "1");
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
    }
}
