//! Static blog listing with a handful of hard-coded posts.

use common::i18n::Language;
use yew::prelude::*;

use crate::store::use_store;

struct Post {
    title_en: &'static str,
    title_fr: &'static str,
    excerpt_en: &'static str,
    excerpt_fr: &'static str,
    date: &'static str,
}

const POSTS: &[Post] = &[
    Post {
        title_en: "Climbing Mount Cameroon: a first-timer's guide",
        title_fr: "Gravir le Mont Cameroun : guide du débutant",
        excerpt_en: "West Africa's highest peak rewards the climb with views from \
                     rainforest to crater. Here is how to prepare.",
        excerpt_fr: "Le plus haut sommet d'Afrique de l'Ouest récompense l'ascension \
                     par des vues de la forêt au cratère. Voici comment vous préparer.",
        date: "2025-01-12",
    },
    Post {
        title_en: "Five dishes to try in Douala",
        title_fr: "Cinq plats à goûter à Douala",
        excerpt_en: "From ndolé to grilled fish at the port, the city eats well. A \
                     short tour of its street food.",
        excerpt_fr: "Du ndolé au poisson braisé du port, la ville mange bien. Un \
                     petit tour de sa cuisine de rue.",
        date: "2025-02-03",
    },
    Post {
        title_en: "Why Waza is best visited in the dry season",
        title_fr: "Pourquoi visiter Waza en saison sèche",
        excerpt_en: "Wildlife gathers around the waterholes between November and \
                     April, making sightings far more likely.",
        excerpt_fr: "La faune se rassemble autour des points d'eau entre novembre et \
                     avril, ce qui rend les observations bien plus probables.",
        date: "2025-02-21",
    },
];

#[function_component(BlogPage)]
pub fn blog_page() -> Html {
    let store = use_store();
    let language = store.state.language;

    html! {
        <div class="blog-page">
            <h1>{ match language {
                Language::En => "Travel Stories",
                Language::Fr => "Récits de Voyage",
            } }</h1>
            <div class="post-list">
                { for POSTS.iter().map(|post| {
                    let (title, excerpt) = match language {
                        Language::En => (post.title_en, post.excerpt_en),
                        Language::Fr => (post.title_fr, post.excerpt_fr),
                    };
                    html! {
                        <article class="post-card">
                            <span class="post-date">{ post.date }</span>
                            <h2>{ title }</h2>
                            <p>{ excerpt }</p>
                        </article>
                    }
                }) }
            </div>
        </div>
    }
}
