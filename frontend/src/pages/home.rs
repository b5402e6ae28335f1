//! Landing page: hero with a search box that forwards to the tours page,
//! plus the three most-reviewed tours as a featured strip.

use common::i18n::t;
use serde::Serialize;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::tour_card::TourCard;
use crate::routes::Route;
use crate::store::use_store;

/// Query string carried from the hero search into the tours page.
#[derive(Serialize)]
pub struct SearchQuery {
    pub search: String,
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let store = use_store();
    let navigator = use_navigator();
    let language = store.state.language;
    let query = use_state(String::new);

    let on_query_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_search = {
        let query = query.clone();
        Callback::from(move |_| {
            let Some(nav) = &navigator else {
                return;
            };
            let search = (*query).clone();
            if search.is_empty() {
                nav.push(&Route::Tours);
            } else {
                let _ = nav.push_with_query(&Route::Tours, &SearchQuery { search });
            }
        })
    };

    let mut featured = store.state.tours.clone();
    featured.sort_by(|a, b| b.reviews_count.cmp(&a.reviews_count));
    featured.truncate(3);

    html! {
        <div class="home-page">
            <section class="hero">
                <h1>{ t("heroTitle", language) }</h1>
                <h2>{ t("heroSubtitle", language) }</h2>
                <p>{ t("heroDescription", language) }</p>

                <div class="hero-search">
                    <input
                        type="text"
                        value={(*query).clone()}
                        oninput={on_query_input}
                        placeholder={ t("searchPlaceholder", language).to_string() }
                    />
                    <button onclick={on_search}>{ t("searchButton", language) }</button>
                </div>
            </section>

            <section class="featured-tours">
                <h2>{ t("tours", language) }</h2>
                <div class="tour-grid">
                    { for featured.into_iter().map(|tour| html! { <TourCard {tour} /> }) }
                </div>
                <Link<Route> to={Route::Tours} classes="see-all">
                    { t("viewDetails", language) }
                </Link<Route>>
            </section>
        </div>
    }
}
