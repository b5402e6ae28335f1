//! Static about page, bilingual through the active language.

use common::i18n::Language;
use yew::prelude::*;

use crate::store::use_store;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let store = use_store();
    let language = store.state.language;

    let (title, intro, mission, values) = match language {
        Language::En => (
            "About Cameroon Travel",
            "We are a Cameroonian team showcasing the country known as Africa in \
             miniature: rainforest, savanna, volcanic mountains, and Atlantic coast \
             within a single border.",
            "Our mission is sustainable tourism that puts local communities first. \
             Guides, hosts, and artisans on every tour come from the regions you visit.",
            [
                "Community-led experiences",
                "Environmental responsibility",
                "Fair pay for local partners",
                "Cultural respect and consent",
            ],
        ),
        Language::Fr => (
            "À Propos de Cameroon Travel",
            "Nous sommes une équipe camerounaise qui fait découvrir le pays surnommé \
             l'Afrique en miniature : forêt tropicale, savane, montagnes volcaniques \
             et côte atlantique dans un seul pays.",
            "Notre mission est un tourisme durable qui place les communautés locales \
             au premier plan. Les guides, hôtes et artisans de chaque circuit viennent \
             des régions que vous visitez.",
            [
                "Expériences menées par les communautés",
                "Responsabilité environnementale",
                "Rémunération équitable des partenaires locaux",
                "Respect et consentement culturels",
            ],
        ),
    };

    html! {
        <div class="about-page">
            <h1>{ title }</h1>
            <p class="about-intro">{ intro }</p>
            <section>
                <h2>{ match language {
                    Language::En => "Our Mission",
                    Language::Fr => "Notre Mission",
                } }</h2>
                <p>{ mission }</p>
            </section>
            <section>
                <h2>{ match language {
                    Language::En => "What We Stand For",
                    Language::Fr => "Nos Valeurs",
                } }</h2>
                <ul>
                    { for values.into_iter().map(|v| html! { <li>{ v }</li> }) }
                </ul>
            </section>
        </div>
    }
}
