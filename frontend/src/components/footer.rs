use common::i18n::t;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::store::use_store;

#[function_component(Footer)]
pub fn footer() -> Html {
    let store = use_store();
    let language = store.state.language;

    html! {
        <footer class="site-footer">
            <div class="footer-about">
                <h4>{"Discover Cameroon"}</h4>
                <p>{ t("aboutCompany", language) }</p>
            </div>
            <nav class="footer-nav">
                <Link<Route> to={Route::Tours}>{ t("tours", language) }</Link<Route>>
                <Link<Route> to={Route::About}>{ t("about", language) }</Link<Route>>
                <Link<Route> to={Route::Contact}>{ t("contact", language) }</Link<Route>>
            </nav>
            <div class="footer-newsletter">
                <h4>{ t("newsletter", language) }</h4>
                <p>{ t("newsletterText", language) }</p>
            </div>
        </footer>
    }
}
