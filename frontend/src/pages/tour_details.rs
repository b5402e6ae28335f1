//! Full tour record view: gallery, long description, itinerary,
//! included/excluded amenities, available dates, wishlist toggle, and the
//! booking call-to-action. Renders the not-found fallback when the id is
//! absent from the catalog.

use common::i18n::{t, Language};
use common::state::Action;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::not_found::NotFoundView;
use crate::routes::Route;
use crate::store::use_store;
use crate::toast::show_toast;

#[derive(Properties, PartialEq)]
pub struct TourDetailsProps {
    pub id: String,
}

#[function_component(TourDetailsPage)]
pub fn tour_details_page(props: &TourDetailsProps) -> Html {
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

    let wishlisted = store
        .state
        .user
        .as_ref()
        .is_some_and(|user| user.wishlist.contains(&tour.id));

    let on_wishlist_toggle = {
        let store = store.clone();
        let tour_id = tour.id.clone();
        Callback::from(move |_| {
            if store.state.user.is_none() {
                show_toast(match store.state.language {
                    Language::En => "Please login to add tours to wishlist",
                    Language::Fr => {
                        "Veuillez vous connecter pour ajouter des circuits à votre liste de souhaits"
                    }
                });
                return;
            }
            let action = if store
                .state
                .user
                .as_ref()
                .is_some_and(|u| u.wishlist.contains(&tour_id))
            {
                Action::RemoveFromWishlist(tour_id.clone())
            } else {
                Action::AddToWishlist(tour_id.clone())
            };
            store.dispatch(action);
        })
    };

    html! {
        <article class="tour-details">
            <header class="tour-details-header">
                <div class="gallery">
                    { for tour.images.iter().map(|image| html! {
                        <img src={image.clone()} alt={tour.title.clone()} />
                    }) }
                </div>
                <h1>{ tour.title.clone() }</h1>
                <p class="tour-meta">
                    { format!(
                        "{} · {} · {} · ★ {} ({} {})",
                        tour.region,
                        tour.duration,
                        tour.difficulty.label(),
                        tour.rating,
                        tour.reviews_count,
                        t("reviews", language),
                    ) }
                </p>
                <div class="tour-actions">
                    <Link<Route> to={Route::Book { id: tour.id.clone() }} classes="book-cta">
                        { format!("{} — ${}", t("bookNow", language), tour.price) }
                    </Link<Route>>
                    <button
                        class={classes!("wishlist-toggle", wishlisted.then_some("wishlisted"))}
                        onclick={on_wishlist_toggle}
                    >
                        { if wishlisted { "♥" } else { "♡" } }
                    </button>
                </div>
            </header>

            <section class="tour-description">
                <p>{ tour.long_description.clone() }</p>
                <div class="tour-tags">
                    { for tour.diversity_tags.iter().map(|tag| html! {
                        <span class="tag">{ tag.clone() }</span>
                    }) }
                </div>
            </section>

            <section class="tour-itinerary">
                <h2>{ match language {
                    Language::En => "Itinerary",
                    Language::Fr => "Itinéraire",
                } }</h2>
                { for tour.itinerary.iter().map(|day| html! {
                    <div class="itinerary-day">
                        <h3>{ format!("Day {} — {}", day.day, day.title) }</h3>
                        <p>{ day.description.clone() }</p>
                        <ul>
                            { for day.activities.iter().map(|a| html! { <li>{ a.clone() }</li> }) }
                        </ul>
                    </div>
                }) }
            </section>

            <section class="tour-amenities">
                <div>
                    <h2>{ match language {
                        Language::En => "Included",
                        Language::Fr => "Inclus",
                    } }</h2>
                    <ul>
                        { for tour.included.iter().map(|i| html! { <li>{ i.clone() }</li> }) }
                    </ul>
                </div>
                <div>
                    <h2>{ match language {
                        Language::En => "Not Included",
                        Language::Fr => "Non Inclus",
                    } }</h2>
                    <ul>
                        { for tour.excluded.iter().map(|e| html! { <li>{ e.clone() }</li> }) }
                    </ul>
                </div>
            </section>

            <section class="tour-dates">
                <h2>{ t("selectDate", language) }</h2>
                <ul>
                    { for tour.available_dates.iter().map(|d| html! { <li>{ d.clone() }</li> }) }
                </ul>
                <p>{ format!(
                    "{}: {}",
                    match language {
                        Language::En => "Maximum group size",
                        Language::Fr => "Taille maximale du groupe",
                    },
                    tour.max_group_size,
                ) }</p>
            </section>
        </article>
    }
}
