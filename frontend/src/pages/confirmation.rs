//! Post-payment confirmation: looks the booking up by id in the session
//! state and shows its details plus a few related tours.

use common::i18n::Language;
use common::model::tour::Tour;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::tour_card::TourCard;
use crate::pages::not_found::NotFoundView;
use crate::routes::Route;
use crate::store::use_store;

#[derive(Properties, PartialEq)]
pub struct ConfirmationProps {
    pub booking_id: String,
}

/// Up to three other tours of the same type as the booked one.
fn related_tours(tours: &[Tour], booked: &Tour) -> Vec<Tour> {
    tours
        .iter()
        .filter(|t| t.tour_type == booked.tour_type && t.id != booked.id)
        .take(3)
        .cloned()
        .collect()
}

#[function_component(ConfirmationPage)]
pub fn confirmation_page(props: &ConfirmationProps) -> Html {
    let store = use_store();
    let language = store.state.language;

    let Some(booking) = store
        .state
        .bookings
        .iter()
        .find(|b| b.id == props.booking_id)
        .cloned()
    else {
        return html! {
            <NotFoundView
                title={match language {
                    Language::En => "Booking not found",
                    Language::Fr => "Réservation introuvable",
                }}
                back_to={Route::Dashboard}
            />
        };
    };

    let related = related_tours(&store.state.tours, &booking.tour);

    html! {
        <div class="confirmation-page">
            <div class="confirmation-banner">
                <span class="checkmark">{ "✓" }</span>
                <h1>{ match language {
                    Language::En => "Booking Confirmed!",
                    Language::Fr => "Réservation Confirmée !",
                } }</h1>
                <p>{ match language {
                    Language::En => "This is a demo confirmation. No payment was processed.",
                    Language::Fr => "Ceci est une confirmation de démonstration. Aucun paiement n'a été traité.",
                } }</p>
            </div>

            <div class="confirmation-details">
                <h2>{ booking.tour.title.clone() }</h2>
                <dl>
                    <dt>{ match language {
                        Language::En => "Booking Reference",
                        Language::Fr => "Référence de Réservation",
                    } }</dt>
                    <dd>{ booking.id.clone() }</dd>
                    <dt>{ "Date" }</dt>
                    <dd>{ booking.start_date.clone() }</dd>
                    <dt>{ match language {
                        Language::En => "Travelers",
                        Language::Fr => "Voyageurs",
                    } }</dt>
                    <dd>{ booking.number_of_people }</dd>
                    <dt>{ "Total" }</dt>
                    <dd>{ format!("${}", booking.total_price) }</dd>
                    <dt>{ match language {
                        Language::En => "Status",
                        Language::Fr => "Statut",
                    } }</dt>
                    <dd>{ booking.status.label() }</dd>
                </dl>
                if let Some(requests) = booking.special_requests.as_deref().filter(|s| !s.is_empty()) {
                    <p class="special-requests">{ requests.to_owned() }</p>
                }
                <Link<Route> to={Route::Dashboard} classes="btn">
                    { match language {
                        Language::En => "Go to Dashboard",
                        Language::Fr => "Voir le Tableau de Bord",
                    } }
                </Link<Route>>
            </div>

            if !related.is_empty() {
                <section class="related-tours">
                    <h3>{ match language {
                        Language::En => "You might also like",
                        Language::Fr => "Vous aimerez peut-être aussi",
                    } }</h3>
                    <div class="tour-grid">
                        { for related.into_iter().map(|tour| html! { <TourCard {tour} /> }) }
                    </div>
                </section>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::related_tours;
    use common::model::tour::{Difficulty, Tour, TourType};

    fn tour(id: &str, tour_type: TourType) -> Tour {
        Tour {
            id: id.to_string(),
            title: String::new(),
            description: String::new(),
            long_description: String::new(),
            price: 450,
            duration: "5 days".to_string(),
            difficulty: Difficulty::Easy,
            region: "Western".to_string(),
            tour_type,
            diversity_tags: vec![],
            images: vec![],
            rating: 4.8,
            reviews_count: 124,
            included: vec![],
            excluded: vec![],
            itinerary: vec![],
            max_group_size: 12,
            available_dates: vec![],
        }
    }

    #[test]
    fn related_excludes_the_booked_tour_and_other_types() {
        let booked = tour("1", TourType::Cultural);
        let same_type = tour("9", TourType::Cultural);
        let other_type = tour("10", TourType::Wildlife);

        let tours = vec![booked.clone(), same_type.clone(), other_type];
        let related = related_tours(&tours, &booked);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "9");
    }

    #[test]
    fn related_caps_at_three() {
        let booked = tour("1", TourType::Cultural);
        let tours: Vec<_> = (1..=5)
            .map(|i| tour(&format!("r{i}"), TourType::Cultural))
            .collect();
        assert_eq!(related_tours(&tours, &booked).len(), 3);
    }
}
