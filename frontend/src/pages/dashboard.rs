//! User dashboard: overview counts, booking history for the session,
//! wishlist, and profile editing. Login-gated; profile edits replace the
//! user record wholesale through the state container.

use common::i18n::{t, Language};
use common::model::booking::Booking;
use common::state::Action;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::tour_card::TourCard;
use crate::routes::Route;
use crate::store::use_store;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Bookings,
    Wishlist,
    Profile,
}

/// Today's ISO calendar date, for splitting bookings into upcoming and past.
fn today() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.chars().take(10).collect()
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let store = use_store();
    let language = store.state.language;
    let tab = use_state(|| Tab::Overview);

    let Some(user) = store.state.user.clone() else {
        return html! {
            <div class="login-required">
                <h2>{ match language {
                    Language::En => "Access Denied",
                    Language::Fr => "Accès Refusé",
                } }</h2>
                <p>{ match language {
                    Language::En => "Please login to access your dashboard",
                    Language::Fr => "Veuillez vous connecter pour accéder à votre tableau de bord",
                } }</p>
                <Link<Route> to={Route::Auth}>{ t("login", language) }</Link<Route>>
            </div>
        };
    };

    let today = today();
    let my_bookings: Vec<Booking> = store
        .state
        .bookings
        .iter()
        .filter(|b| b.user_id == user.id)
        .cloned()
        .collect();
    let (upcoming, past): (Vec<Booking>, Vec<Booking>) = my_bookings
        .into_iter()
        .partition(|b| b.start_date > today);
    let wishlisted: Vec<_> = store
        .state
        .tours
        .iter()
        .filter(|tour| user.wishlist.contains(&tour.id))
        .cloned()
        .collect();

    let tabs = [
        (Tab::Overview, match language {
            Language::En => "Overview",
            Language::Fr => "Aperçu",
        }),
        (Tab::Bookings, match language {
            Language::En => "My Bookings",
            Language::Fr => "Mes Réservations",
        }),
        (Tab::Wishlist, match language {
            Language::En => "Wishlist",
            Language::Fr => "Liste de Souhaits",
        }),
        (Tab::Profile, match language {
            Language::En => "Profile",
            Language::Fr => "Profil",
        }),
    ];

    let booking_row = |booking: &Booking| {
        html! {
            <div class="booking-row">
                <div>
                    <h4>{ booking.tour.title.clone() }</h4>
                    <p>{ format!(
                        "{} · {} {}",
                        booking.start_date,
                        booking.number_of_people,
                        match language {
                            Language::En => "people",
                            Language::Fr => "personnes",
                        },
                    ) }</p>
                </div>
                <div class="booking-row-amount">
                    <span>{ format!("${}", booking.total_price) }</span>
                    <span class="status">{ booking.status.label() }</span>
                </div>
            </div>
        }
    };

    let content = match *tab {
        Tab::Overview => html! {
            <div class="dashboard-overview">
                <h2>{ format!(
                    "{}, {}!",
                    match language {
                        Language::En => "Welcome back",
                        Language::Fr => "Bienvenue",
                    },
                    user.name,
                ) }</h2>
                <div class="stat-cards">
                    <div class="stat-card">
                        <span class="stat-value">{ upcoming.len() }</span>
                        <span>{ match language {
                            Language::En => "Upcoming Tours",
                            Language::Fr => "Circuits à Venir",
                        } }</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{ wishlisted.len() }</span>
                        <span>{ match language {
                            Language::En => "Saved Tours",
                            Language::Fr => "Circuits Sauvegardés",
                        } }</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{ past.len() }</span>
                        <span>{ match language {
                            Language::En => "Completed Tours",
                            Language::Fr => "Circuits Terminés",
                        } }</span>
                    </div>
                </div>
                { for upcoming.iter().take(3).map(booking_row) }
            </div>
        },
        Tab::Bookings => html! {
            <div class="dashboard-bookings">
                <h3>{ match language {
                    Language::En => "Upcoming",
                    Language::Fr => "À Venir",
                } }</h3>
                if upcoming.is_empty() {
                    <p>{ match language {
                        Language::En => "No bookings yet. Session bookings are not kept across reloads.",
                        Language::Fr => "Aucune réservation. Les réservations de session ne survivent pas au rechargement.",
                    } }</p>
                }
                { for upcoming.iter().map(booking_row) }
                <h3>{ match language {
                    Language::En => "Past",
                    Language::Fr => "Passées",
                } }</h3>
                { for past.iter().map(booking_row) }
            </div>
        },
        Tab::Wishlist => html! {
            <div class="tour-grid">
                if wishlisted.is_empty() {
                    <p>{ match language {
                        Language::En => "Your wishlist is empty",
                        Language::Fr => "Votre liste de souhaits est vide",
                    } }</p>
                }
                { for wishlisted.into_iter().map(|tour| html! { <TourCard {tour} /> }) }
            </div>
        },
        Tab::Profile => html! {
            <ProfileEditor />
        },
    };

    html! {
        <div class="dashboard-page">
            <nav class="dashboard-tabs">
                { for tabs.into_iter().map(|(id, label)| {
                    let tab = tab.clone();
                    let class = if *tab == id { "tab active" } else { "tab" };
                    html! {
                        <button {class} onclick={Callback::from(move |_| tab.set(id))}>
                            { label }
                        </button>
                    }
                }) }
            </nav>
            <section class="dashboard-content">{ content }</section>
        </div>
    }
}

/// Profile edit form: collects name, phone, and interests, and replaces the
/// user record wholesale on save.
#[function_component(ProfileEditor)]
fn profile_editor() -> Html {
    let store = use_store();
    let language = store.state.language;
    let Some(user) = store.state.user.clone() else {
        return Html::default();
    };

    let name = use_state(|| user.name.clone());
    let phone = use_state(|| user.phone.clone().unwrap_or_default());

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };

    let on_save = {
        let store = store.clone();
        let name = name.clone();
        let phone = phone.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(current) = store.state.user.clone() else {
                return;
            };
            let updated = common::model::user::User {
                name: (*name).clone(),
                phone: (!phone.is_empty()).then(|| (*phone).clone()),
                ..current
            };
            store.dispatch(Action::SetUser(Some(updated)));
            crate::toast::show_toast(match store.state.language {
                Language::En => "Profile saved",
                Language::Fr => "Profil enregistré",
            });
        })
    };

    html! {
        <form class="profile-editor" onsubmit={on_save}>
            <label>{ match language {
                Language::En => "Full Name",
                Language::Fr => "Nom Complet",
            } }</label>
            <input type="text" value={(*name).clone()} oninput={on_name} />

            <label>{ match language {
                Language::En => "Phone Number",
                Language::Fr => "Numéro de Téléphone",
            } }</label>
            <input type="tel" value={(*phone).clone()} oninput={on_phone} />

            <p class="profile-email">{ format!("Email: {}", user.email) }</p>

            <button type="submit">{ match language {
                Language::En => "Save",
                Language::Fr => "Enregistrer",
            } }</button>
        </form>
    }
}
