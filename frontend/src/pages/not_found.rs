//! Not-found fallbacks: the catch-all route page plus a reusable view for
//! parameterized routes whose entity is absent from current state. Always a
//! rendered escape hatch, never a thrown error.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundViewProps {
    pub title: &'static str,
    pub back_to: Route,
}

#[function_component(NotFoundView)]
pub fn not_found_view(props: &NotFoundViewProps) -> Html {
    html! {
        <div class="not-found">
            <h2>{ props.title }</h2>
            <Link<Route> to={props.back_to.clone()}>{"← Back"}</Link<Route>>
        </div>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! { <NotFoundView title="Page Not Found" back_to={Route::Home} /> }
}
