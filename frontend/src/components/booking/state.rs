//! Wizard state: the current step, the collected form data, and the
//! completion predicates that gate forward transitions.

use common::i18n::Language;
use common::model::booking::Booking;
use common::model::tour::Tour;

/// The three in-wizard steps. Confirmation is a navigation target, not a
/// fourth wizard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    TourDetails,
    TravelerInfo,
    Payment,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::TourDetails => 1,
            Step::TravelerInfo => 2,
            Step::Payment => 3,
        }
    }

    /// Advances one step, saturating at payment.
    pub fn next(self) -> Step {
        match self {
            Step::TourDetails => Step::TravelerInfo,
            Step::TravelerInfo | Step::Payment => Step::Payment,
        }
    }

    /// Steps back, saturating at the first step.
    pub fn prev(self) -> Step {
        match self {
            Step::TourDetails | Step::TravelerInfo => Step::TourDetails,
            Step::Payment => Step::TravelerInfo,
        }
    }
}

/// The four named steps shown in the progress indicator.
pub fn step_titles(language: Language) -> [&'static str; 4] {
    match language {
        Language::En => ["Tour Details", "Traveler Info", "Payment", "Confirmation"],
        Language::Fr => [
            "Détails du Circuit",
            "Info Voyageur",
            "Paiement",
            "Confirmation",
        ],
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TravelerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Optional; never blocks progression.
    pub emergency_contact: String,
}

impl TravelerInfo {
    pub fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
    }
}

/// State container for the booking wizard component.
pub struct BookingWizard {
    pub step: Step,
    /// Must be one of the tour's available dates before step 1 completes.
    pub selected_date: String,
    pub number_of_people: u32,
    pub special_requests: String,
    pub traveler: TravelerInfo,
    /// True while the simulated payment delay is in flight.
    pub processing: bool,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self {
            step: Step::TourDetails,
            selected_date: String::new(),
            number_of_people: 1,
            special_requests: String::new(),
            traveler: TravelerInfo::default(),
            processing: false,
        }
    }

    /// Running total shown on every step.
    pub fn total_price(&self, tour: &Tour) -> u32 {
        tour.price * self.number_of_people
    }

    /// The special-requests text with surrounding whitespace stripped, or
    /// `None` when effectively empty.
    pub fn special_requests_value(&self) -> Option<String> {
        let trimmed = self.special_requests.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Snapshots the collected form data into a confirmed booking. The
    /// caller supplies the id and timestamp; the result is self-contained,
    /// so settlement can outlive the wizard that produced it.
    pub fn to_booking(&self, tour: &Tour, user_id: &str, id: String, created_at: String) -> Booking {
        Booking::confirmed(
            id,
            user_id.to_string(),
            tour.clone(),
            self.selected_date.clone(),
            self.number_of_people,
            self.special_requests_value(),
            created_at,
        )
    }

    /// The current step's completion predicate. `None` means the forward
    /// transition is allowed; `Some` carries the user-facing message that
    /// blocks it.
    pub fn step_error(&self, tour: &Tour, language: Language) -> Option<&'static str> {
        match self.step {
            Step::TourDetails => {
                if !tour.available_dates.contains(&self.selected_date) {
                    return Some(match language {
                        Language::En => "Please select one of the available dates",
                        Language::Fr => "Veuillez sélectionner une des dates disponibles",
                    });
                }
                if self.number_of_people < 1 {
                    return Some(match language {
                        Language::En => "At least one traveler is required",
                        Language::Fr => "Au moins un voyageur est requis",
                    });
                }
                if self.number_of_people > tour.max_group_size {
                    return Some(match language {
                        Language::En => "Party size exceeds the maximum group size",
                        Language::Fr => "Le nombre de personnes dépasse la taille maximale du groupe",
                    });
                }
                None
            }
            Step::TravelerInfo => {
                if self.traveler.is_complete() {
                    None
                } else {
                    Some(match language {
                        Language::En => "Please fill in name, email, and phone",
                        Language::Fr => "Veuillez renseigner nom, email et téléphone",
                    })
                }
            }
            Step::Payment => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::tour::{Difficulty, TourType};

    fn tour() -> Tour {
        Tour {
            id: "1".to_string(),
            title: "Bamileke Cultural Immersion".to_string(),
            description: String::new(),
            long_description: String::new(),
            price: 450,
            duration: "5 days".to_string(),
            difficulty: Difficulty::Easy,
            region: "Western".to_string(),
            tour_type: TourType::Cultural,
            diversity_tags: vec![],
            images: vec![],
            rating: 4.8,
            reviews_count: 124,
            included: vec![],
            excluded: vec![],
            itinerary: vec![],
            max_group_size: 12,
            available_dates: vec!["2025-03-15".to_string()],
        }
    }

    #[test]
    fn steps_are_linear_and_saturating() {
        assert_eq!(Step::TourDetails.next(), Step::TravelerInfo);
        assert_eq!(Step::TravelerInfo.next(), Step::Payment);
        assert_eq!(Step::Payment.next(), Step::Payment);
        assert_eq!(Step::TourDetails.prev(), Step::TourDetails);
        assert_eq!(Step::Payment.prev(), Step::TravelerInfo);
    }

    #[test]
    fn tour_details_requires_an_available_date() {
        let mut wizard = BookingWizard::new();
        assert!(wizard.step_error(&tour(), Language::En).is_some());
        wizard.selected_date = "2030-01-01".to_string();
        assert!(wizard.step_error(&tour(), Language::En).is_some());
        wizard.selected_date = "2025-03-15".to_string();
        assert!(wizard.step_error(&tour(), Language::En).is_none());
    }

    #[test]
    fn tour_details_bounds_party_size() {
        let mut wizard = BookingWizard::new();
        wizard.selected_date = "2025-03-15".to_string();
        wizard.number_of_people = 13;
        assert_eq!(
            wizard.step_error(&tour(), Language::En),
            Some("Party size exceeds the maximum group size")
        );
        wizard.number_of_people = 0;
        assert_eq!(
            wizard.step_error(&tour(), Language::En),
            Some("At least one traveler is required")
        );
        wizard.number_of_people = 12;
        assert!(wizard.step_error(&tour(), Language::En).is_none());
    }

    #[test]
    fn traveler_info_requires_contact_fields() {
        let mut wizard = BookingWizard::new();
        wizard.step = Step::TravelerInfo;
        assert!(wizard.step_error(&tour(), Language::Fr).is_some());
        wizard.traveler = TravelerInfo {
            first_name: "Ada".to_string(),
            last_name: "Ngoh".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+237 690 123 456".to_string(),
            emergency_contact: String::new(),
        };
        assert!(wizard.step_error(&tour(), Language::Fr).is_none());
    }

    #[test]
    fn booking_snapshot_is_complete_before_settlement() {
        let mut wizard = BookingWizard::new();
        wizard.selected_date = "2025-03-15".to_string();
        wizard.number_of_people = 2;
        wizard.special_requests = "  window seats  ".to_string();

        let booking = wizard.to_booking(
            &tour(),
            "u1",
            "b1".to_string(),
            "2025-01-01T00:00:00Z".to_string(),
        );
        assert_eq!(booking.user_id, "u1");
        assert_eq!(booking.start_date, "2025-03-15");
        assert_eq!(booking.total_price, 900);
        assert_eq!(booking.special_requests.as_deref(), Some("window seats"));
    }

    #[test]
    fn blank_special_requests_become_none() {
        let mut wizard = BookingWizard::new();
        wizard.special_requests = "   ".to_string();
        assert_eq!(wizard.special_requests_value(), None);
    }

    #[test]
    fn running_total_is_price_times_party_size() {
        let mut wizard = BookingWizard::new();
        wizard.number_of_people = 3;
        assert_eq!(wizard.total_price(&tour()), 1350);
    }

    #[test]
    fn payment_step_has_no_further_preconditions() {
        let mut wizard = BookingWizard::new();
        wizard.step = Step::Payment;
        assert!(wizard.step_error(&tour(), Language::En).is_none());
    }
}
