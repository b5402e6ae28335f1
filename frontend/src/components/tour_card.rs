//! Catalog card for a single tour: summary details, price, and the
//! auth-gated wishlist heart.

use common::i18n::{t, Language};
use common::model::tour::Tour;
use common::state::Action;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::store::use_store;
use crate::toast::show_toast;

#[derive(Properties, PartialEq, Clone)]
pub struct TourCardProps {
    pub tour: Tour,
}

#[function_component(TourCard)]
pub fn tour_card(props: &TourCardProps) -> Html {
    let store = use_store();
    let language = store.state.language;
    let tour = &props.tour;
    let wishlisted = store
        .state
        .user
        .as_ref()
        .is_some_and(|user| user.wishlist.contains(&tour.id));

    let on_wishlist_toggle = {
        let store = store.clone();
        let tour_id = tour.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(user) = &store.state.user else {
                show_toast(match store.state.language {
                    Language::En => "Please login to add tours to wishlist",
                    Language::Fr => {
                        "Veuillez vous connecter pour ajouter des circuits à votre liste de souhaits"
                    }
                });
                return;
            };
            if user.wishlist.contains(&tour_id) {
                store.dispatch(Action::RemoveFromWishlist(tour_id.clone()));
                show_toast(match store.state.language {
                    Language::En => "Removed from wishlist",
                    Language::Fr => "Retiré de la liste de souhaits",
                });
            } else {
                store.dispatch(Action::AddToWishlist(tour_id.clone()));
                show_toast(match store.state.language {
                    Language::En => "Added to wishlist",
                    Language::Fr => "Ajouté à la liste de souhaits",
                });
            }
        })
    };

    html! {
        <div class="tour-card">
            <div class="tour-card-media">
                if let Some(image) = tour.images.first() {
                    <img src={image.clone()} alt={tour.title.clone()} />
                }
                <button
                    class={classes!("wishlist-toggle", wishlisted.then_some("wishlisted"))}
                    aria-pressed={wishlisted.to_string()}
                    onclick={on_wishlist_toggle}
                >
                    {"♥"}
                </button>
                <span class="tour-type-badge">{ t(tour.tour_type.tag(), language) }</span>
            </div>

            <div class="tour-card-body">
                <p class="tour-region">{ tour.region.clone() }</p>
                <h3 class="tour-title">
                    <Link<Route> to={Route::TourDetails { id: tour.id.clone() }}>
                        { tour.title.clone() }
                    </Link<Route>>
                </h3>
                <p class="tour-description">{ tour.description.clone() }</p>

                <div class="tour-tags">
                    { for tour.diversity_tags.iter().take(2).map(|tag| html! {
                        <span class="tag">{ tag.clone() }</span>
                    }) }
                </div>

                <div class="tour-meta">
                    <span>{ tour.duration.clone() }</span>
                    <span>{ format!("max {}", tour.max_group_size) }</span>
                    <span class="difficulty">{ tour.difficulty.label() }</span>
                </div>

                <div class="tour-card-footer">
                    <span class="tour-rating">
                        { format!("★ {} ({})", tour.rating, tour.reviews_count) }
                    </span>
                    <span class="tour-price">
                        { format!("${}", tour.price) }
                        <small>{ match language {
                            Language::En => " per person",
                            Language::Fr => " par personne",
                        } }</small>
                    </span>
                </div>
            </div>
        </div>
    }
}
