//! The application state container.
//!
//! All mutation flows through [`reduce`], a pure total function of the old
//! state and a tagged [`Action`]. No action fails or panics; actions that do
//! not apply (for example wishlist edits with no signed-in user) return the
//! state unchanged. Side effects such as durable-storage writes are the
//! caller's responsibility and must never happen inside the reducer.

use crate::i18n::Language;
use crate::model::booking::Booking;
use crate::model::tour::Tour;
use crate::model::user::User;

/// Shared application state. One instance exists per session, owned by the
/// frontend store and handed to views as an immutable snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub user: Option<User>,
    pub tours: Vec<Tour>,
    /// Session-only booking list, append-only in normal operation.
    pub bookings: Vec<Booking>,
    pub language: Language,
    pub is_loading: bool,
}

impl AppState {
    /// Initial state seeded with a tour catalog: nobody signed in, no
    /// bookings, English content.
    pub fn with_tours(tours: Vec<Tour>) -> Self {
        Self {
            tours,
            ..Self::default()
        }
    }
}

/// Every mutation the container supports.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the current user; `None` means logged out.
    SetUser(Option<User>),
    /// Replace the entire tour catalog.
    SetTours(Vec<Tour>),
    /// Append one booking to the booking list.
    AddBooking(Booking),
    /// Replace the booking list.
    SetBookings(Vec<Booking>),
    SetLanguage(Language),
    SetLoading(bool),
    /// Add a tour id to the signed-in user's wishlist. No-op when logged
    /// out or when the id is already present.
    AddToWishlist(String),
    /// Remove all occurrences of a tour id from the signed-in user's
    /// wishlist. No-op when logged out.
    RemoveFromWishlist(String),
}

/// Applies `action` to `state`, producing the next state snapshot.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::SetUser(user) => next.user = user,
        Action::SetTours(tours) => next.tours = tours,
        Action::AddBooking(booking) => next.bookings.push(booking),
        Action::SetBookings(bookings) => next.bookings = bookings,
        Action::SetLanguage(language) => next.language = language,
        Action::SetLoading(loading) => next.is_loading = loading,
        Action::AddToWishlist(tour_id) => {
            if let Some(user) = &mut next.user {
                if !user.wishlist.contains(&tour_id) {
                    user.wishlist.push(tour_id);
                }
            }
        }
        Action::RemoveFromWishlist(tour_id) => {
            if let Some(user) = &mut next.user {
                user.wishlist.retain(|id| id != &tour_id);
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tour::tests::sample_tour;
    use crate::model::user::Preferences;

    fn sample_user() -> User {
        User {
            id: "u1".to_string(),
            email: "demo@example.com".to_string(),
            name: "Demo User".to_string(),
            phone: None,
            preferences: Preferences {
                language: Language::En,
                interests: vec!["cultural".to_string()],
            },
            bookings: vec![],
            wishlist: vec![],
        }
    }

    #[test]
    fn set_language_round_trips() {
        let state = AppState::default();
        let next = reduce(&state, Action::SetLanguage(Language::Fr));
        assert_eq!(next.language, Language::Fr);
        // everything else untouched
        assert_eq!(next.user, state.user);
        assert_eq!(next.bookings, state.bookings);
    }

    #[test]
    fn set_user_none_logs_out() {
        let mut state = AppState::default();
        state.user = Some(sample_user());
        let next = reduce(&state, Action::SetUser(None));
        assert!(next.user.is_none());
    }

    #[test]
    fn wishlist_add_requires_signed_in_user() {
        let state = AppState::default();
        let next = reduce(&state, Action::AddToWishlist("2".to_string()));
        assert!(next.user.is_none());
        assert_eq!(next, state);
    }

    #[test]
    fn wishlist_preserves_insertion_order() {
        let mut state = AppState::default();
        state.user = Some(sample_user());
        let state = reduce(&state, Action::AddToWishlist("1".to_string()));
        let state = reduce(&state, Action::AddToWishlist("3".to_string()));
        assert_eq!(
            state.user.as_ref().map(|u| u.wishlist.clone()),
            Some(vec!["1".to_string(), "3".to_string()])
        );
    }

    #[test]
    fn wishlist_add_is_idempotent() {
        let mut state = AppState::default();
        state.user = Some(sample_user());
        let state = reduce(&state, Action::AddToWishlist("1".to_string()));
        let state = reduce(&state, Action::AddToWishlist("1".to_string()));
        assert_eq!(state.user.as_ref().map(|u| u.wishlist.len()), Some(1));
    }

    #[test]
    fn wishlist_toggle_twice_restores_membership() {
        let mut state = AppState::default();
        state.user = Some(sample_user());
        let added = reduce(&state, Action::AddToWishlist("1".to_string()));
        let removed = reduce(&added, Action::RemoveFromWishlist("1".to_string()));
        assert_eq!(removed.user, state.user);
    }

    #[test]
    fn add_booking_appends() {
        let state = AppState::with_tours(vec![sample_tour()]);
        let booking = Booking::confirmed(
            "b1".to_string(),
            "u1".to_string(),
            sample_tour(),
            "2025-03-15".to_string(),
            2,
            None,
            "2025-01-01T00:00:00Z".to_string(),
        );
        let next = reduce(&state, Action::AddBooking(booking.clone()));
        assert_eq!(next.bookings, vec![booking]);
        // catalog untouched
        assert_eq!(next.tours.len(), 1);
    }

    #[test]
    fn set_tours_replaces_entire_catalog() {
        let state = AppState::with_tours(vec![sample_tour()]);
        let next = reduce(&state, Action::SetTours(vec![]));
        assert!(next.tours.is_empty());
    }

    #[test]
    fn set_loading_flag() {
        let state = AppState::default();
        assert!(!state.is_loading);
        let next = reduce(&state, Action::SetLoading(true));
        assert!(next.is_loading);
    }
}
