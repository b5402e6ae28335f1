use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages;
use crate::routes::Route;
use crate::store::StoreProvider;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <StoreProvider>
                <div class="app-shell">
                    <Header />
                    <main class="app-main">
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </div>
            </StoreProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Tours => html! { <pages::tours::ToursPage /> },
        Route::TourDetails { id } => html! { <pages::tour_details::TourDetailsPage {id} /> },
        Route::Book { id } => html! { <pages::book::BookingPage {id} /> },
        Route::Auth => html! { <pages::auth::AuthPage /> },
        Route::Dashboard => html! { <pages::dashboard::DashboardPage /> },
        Route::About => html! { <pages::about::AboutPage /> },
        Route::Blog => html! { <pages::blog::BlogPage /> },
        Route::Contact => html! { <pages::contact::ContactPage /> },
        Route::Admin => html! { <pages::admin::AdminPage /> },
        Route::Confirmation { booking_id } => {
            html! { <pages::confirmation::ConfirmationPage {booking_id} /> }
        }
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}
