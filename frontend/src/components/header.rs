//! Top navigation bar: route links, the language switcher, and auth-aware
//! login/logout controls.

use common::i18n::{t, Language};
use common::state::Action;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::store::use_store;

#[function_component(Header)]
pub fn header() -> Html {
    let store = use_store();
    let navigator = use_navigator();
    let language = store.state.language;
    let user = store.state.user.clone();

    let on_language_change = {
        let store = store.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Some(language) = Language::from_tag(&select.value()) {
                store.dispatch(Action::SetLanguage(language));
            }
        })
    };

    let on_logout = {
        let store = store.clone();
        Callback::from(move |_| {
            store.dispatch(Action::SetUser(None));
            if let Some(nav) = &navigator {
                nav.push(&Route::Home);
            }
        })
    };

    html! {
        <header class="site-header">
            <Link<Route> to={Route::Home} classes="brand">
                <span class="brand-mark">{"CM"}</span>
                <span class="brand-name">{"Discover Cameroon"}</span>
            </Link<Route>>

            <nav class="main-nav">
                <Link<Route> to={Route::Home}>{ t("home", language) }</Link<Route>>
                <Link<Route> to={Route::Tours}>{ t("tours", language) }</Link<Route>>
                <Link<Route> to={Route::About}>{ t("about", language) }</Link<Route>>
                <Link<Route> to={Route::Blog}>{ t("blog", language) }</Link<Route>>
                <Link<Route> to={Route::Contact}>{ t("contact", language) }</Link<Route>>
            </nav>

            <div class="header-controls">
                <select class="language-select" onchange={on_language_change} value={language.tag()}>
                    <option value="en" selected={language == Language::En}>{"English"}</option>
                    <option value="fr" selected={language == Language::Fr}>{"Français"}</option>
                </select>
                {
                    match user {
                        Some(user) => html! {
                            <>
                                <Link<Route> to={Route::Dashboard} classes="nav-user">
                                    { user.name.clone() }
                                </Link<Route>>
                                <button class="nav-logout" onclick={on_logout}>
                                    { t("logout", language) }
                                </button>
                            </>
                        },
                        None => html! {
                            <Link<Route> to={Route::Auth} classes="nav-login">
                                { t("login", language) }
                            </Link<Route>>
                        },
                    }
                }
            </div>
        </header>
    }
}
