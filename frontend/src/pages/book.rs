//! Booking entry page. Resolves the tour and the signed-in user before the
//! wizard mounts; a missing tour renders the not-found fallback and a missing
//! user renders a login prompt, so the wizard itself never deals with either.

use common::i18n::Language;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::booking::BookingWizard;
use crate::pages::not_found::NotFoundView;
use crate::routes::Route;
use crate::store::use_store;

#[derive(Properties, PartialEq)]
pub struct BookingPageProps {
    pub id: String,
}

#[function_component(BookingPage)]
pub fn booking_page(props: &BookingPageProps) -> Html {
    let store = use_store();
    let language = store.state.language;

    let Some(tour) = store.state.tours.iter().find(|t| t.id == props.id).cloned() else {
        return html! {
            <NotFoundView
                title={match language {
                    Language::En => "Tour Not Found",
                    Language::Fr => "Circuit Introuvable",
                }}
                back_to={Route::Tours}
            />
        };
    };

    let Some(user) = store.state.user.clone() else {
        return html! {
            <div class="login-required">
                <h2>{ match language {
                    Language::En => "Login Required",
                    Language::Fr => "Connexion Requise",
                } }</h2>
                <p>{ match language {
                    Language::En => "Please login to continue with your booking",
                    Language::Fr => "Veuillez vous connecter pour poursuivre votre réservation",
                } }</p>
                <Link<Route> to={Route::Auth}>{"Login / Register"}</Link<Route>>
            </div>
        };
    };

    html! { <BookingWizard {tour} {user} store={store} /> }
}
