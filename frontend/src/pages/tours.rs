//! Tour catalog page: filter sidebar and sort dropdown driving
//! `common::filter::TourFilter`, with the results rendered as cards.

use common::filter::{SortKey, TourFilter};
use common::i18n::{t, Language};
use common::model::tour::{Difficulty, TourType};
use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::tour_card::TourCard;
use crate::store::use_store;

const REGIONS: [&str; 6] = [
    "Northern",
    "Eastern",
    "Western",
    "Southwest",
    "Littoral",
    "Center",
];

/// Price slider upper bound; also the "no ceiling" sentinel.
const PRICE_CAP: u32 = 1000;

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: String,
}

fn sort_key_from_tag(tag: &str) -> SortKey {
    match tag {
        "price-low" => SortKey::PriceLowToHigh,
        "price-high" => SortKey::PriceHighToLow,
        "rating" => SortKey::Rating,
        "duration" => SortKey::Duration,
        _ => SortKey::Popularity,
    }
}

#[function_component(ToursPage)]
pub fn tours_page() -> Html {
    let store = use_store();
    let location = use_location();
    let language = store.state.language;

    let initial_query = location
        .and_then(|loc| loc.query::<SearchQuery>().ok())
        .map(|q| q.search)
        .unwrap_or_default();
    let filter = use_state(move || TourFilter {
        query: initial_query,
        max_price: Some(PRICE_CAP),
        ..TourFilter::default()
    });

    let set_filter = |f: Box<dyn Fn(&mut TourFilter, String)>| {
        let filter = filter.clone();
        Callback::from(move |value: String| {
            let mut next = (*filter).clone();
            f(&mut next, value);
            filter.set(next);
        })
    };

    let on_query = set_filter(Box::new(|f, v| f.query = v));
    let on_region = set_filter(Box::new(|f, v| {
        f.region = (!v.is_empty()).then_some(v);
    }));
    let on_type = set_filter(Box::new(|f, v| {
        f.tour_type = TourType::ALL.into_iter().find(|ty| ty.tag() == v);
    }));
    let on_difficulty = set_filter(Box::new(|f, v| {
        f.difficulty = Difficulty::ALL.into_iter().find(|d| d.label() == v);
    }));
    let on_price = set_filter(Box::new(|f, v| {
        f.max_price = Some(v.parse().unwrap_or(PRICE_CAP));
    }));
    let on_sort = set_filter(Box::new(|f, v| f.sort = sort_key_from_tag(&v)));

    let on_clear = {
        let filter = filter.clone();
        Callback::from(move |_| {
            filter.set(TourFilter {
                max_price: Some(PRICE_CAP),
                ..TourFilter::default()
            });
        })
    };

    let results = filter.apply(&store.state.tours);
    let max_price = filter.max_price.unwrap_or(PRICE_CAP);

    let select_cb = |cb: Callback<String>| {
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };
    let input_cb = |cb: Callback<String>| {
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };

    html! {
        <div class="tours-page">
            <header class="page-header">
                <h1>{ t("tours", language) }</h1>
                <p>{ match language {
                    Language::En => "Discover authentic experiences across Cameroon's diverse regions",
                    Language::Fr => "Découvrez des expériences authentiques à travers les diverses régions du Cameroun",
                } }</p>
            </header>

            <div class="tours-layout">
                <aside class="filter-sidebar">
                    <div class="filter-header">
                        <h2>{"Filters"}</h2>
                        <button onclick={on_clear.clone()}>
                            { match language {
                                Language::En => "Clear All",
                                Language::Fr => "Tout Effacer",
                            } }
                        </button>
                    </div>

                    <label>{ match language {
                        Language::En => "Search",
                        Language::Fr => "Recherche",
                    } }</label>
                    <input
                        type="text"
                        value={filter.query.clone()}
                        oninput={input_cb(on_query)}
                        placeholder={ t("searchPlaceholder", language).to_string() }
                    />

                    <label>{ match language {
                        Language::En => "Region",
                        Language::Fr => "Région",
                    } }</label>
                    <select onchange={select_cb(on_region)}>
                        <option value="" selected={filter.region.is_none()}>
                            { match language {
                                Language::En => "All Regions",
                                Language::Fr => "Toutes les Régions",
                            } }
                        </option>
                        { for REGIONS.iter().map(|region| html! {
                            <option
                                value={*region}
                                selected={filter.region.as_deref() == Some(*region)}
                            >
                                { *region }
                            </option>
                        }) }
                    </select>

                    <label>{ match language {
                        Language::En => "Tour Type",
                        Language::Fr => "Type de Circuit",
                    } }</label>
                    <select onchange={select_cb(on_type)}>
                        <option value="" selected={filter.tour_type.is_none()}>
                            { match language {
                                Language::En => "All Types",
                                Language::Fr => "Tous les Types",
                            } }
                        </option>
                        { for TourType::ALL.iter().map(|ty| html! {
                            <option
                                value={ty.tag()}
                                selected={filter.tour_type == Some(*ty)}
                            >
                                { t(ty.tag(), language) }
                            </option>
                        }) }
                    </select>

                    <label>{ t("difficulty", language) }</label>
                    <select onchange={select_cb(on_difficulty)}>
                        <option value="" selected={filter.difficulty.is_none()}>
                            { match language {
                                Language::En => "All Levels",
                                Language::Fr => "Tous Niveaux",
                            } }
                        </option>
                        { for Difficulty::ALL.iter().map(|d| html! {
                            <option
                                value={d.label()}
                                selected={filter.difficulty == Some(*d)}
                            >
                                { d.label() }
                            </option>
                        }) }
                    </select>

                    <label>{ format!("{} ≤ ${max_price}", t("price", language)) }</label>
                    <input
                        type="range"
                        min="0"
                        max={PRICE_CAP.to_string()}
                        value={max_price.to_string()}
                        oninput={input_cb(on_price)}
                    />
                </aside>

                <section class="tours-results">
                    <div class="results-header">
                        <p>{ format!(
                            "{} {}",
                            results.len(),
                            match language {
                                Language::En => "tours found",
                                Language::Fr => "circuits trouvés",
                            }
                        ) }</p>
                        <select onchange={select_cb(on_sort)}>
                            <option value="popularity">{ match language {
                                Language::En => "Popularity",
                                Language::Fr => "Popularité",
                            } }</option>
                            <option value="price-low">{ match language {
                                Language::En => "Price: Low to High",
                                Language::Fr => "Prix: Bas à Élevé",
                            } }</option>
                            <option value="price-high">{ match language {
                                Language::En => "Price: High to Low",
                                Language::Fr => "Prix: Élevé à Bas",
                            } }</option>
                            <option value="rating">{ match language {
                                Language::En => "Highest Rated",
                                Language::Fr => "Mieux Noté",
                            } }</option>
                            <option value="duration">{ t("duration", language) }</option>
                        </select>
                    </div>

                    if results.is_empty() {
                        <div class="no-results">
                            <h3>{ match language {
                                Language::En => "No tours found",
                                Language::Fr => "Aucun circuit trouvé",
                            } }</h3>
                            <p>{ match language {
                                Language::En => "Try adjusting your filters or search terms",
                                Language::Fr => "Essayez d'ajuster vos filtres ou termes de recherche",
                            } }</p>
                            <button onclick={on_clear}>
                                { match language {
                                    Language::En => "Clear Filters",
                                    Language::Fr => "Effacer les Filtres",
                                } }
                            </button>
                        </div>
                    } else {
                        <div class="tour-grid">
                            { for results.into_iter().map(|tour| html! { <TourCard {tour} /> }) }
                        </div>
                    }
                </section>
            </div>
        </div>
    }
}
