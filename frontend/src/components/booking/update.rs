//! Update function for the booking wizard, Elm style: mutate the wizard
//! state for a message and return whether the view should re-render.
//!
//! Forward transitions ask the current step's completion predicate first;
//! a failed precondition surfaces a toast and blocks the move. The payment
//! submission snapshots the wizard into a confirmed booking and hands it to
//! a fire-and-forget simulated delay that dispatches it into the state
//! container when it settles; the wizard then navigates to the confirmation
//! view if it is still mounted.

use common::i18n::Language;
use common::state::Action;
use uuid::Uuid;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::routes::Route;
use crate::toast::show_toast;

use super::messages::Msg;
use super::state::BookingWizard;

pub fn update(component: &mut BookingWizard, ctx: &Context<BookingWizard>, msg: Msg) -> bool {
    let props = ctx.props();
    let language = props.store.state.language;

    match msg {
        Msg::SelectDate(date) => {
            component.selected_date = date;
            true
        }
        Msg::SetPeople(count) => {
            component.number_of_people = count;
            true
        }
        Msg::SetSpecialRequests(text) => {
            component.special_requests = text;
            true
        }
        Msg::SetFirstName(value) => {
            component.traveler.first_name = value;
            true
        }
        Msg::SetLastName(value) => {
            component.traveler.last_name = value;
            true
        }
        Msg::SetEmail(value) => {
            component.traveler.email = value;
            true
        }
        Msg::SetPhone(value) => {
            component.traveler.phone = value;
            true
        }
        Msg::SetEmergencyContact(value) => {
            component.traveler.emergency_contact = value;
            true
        }
        Msg::NextStep => {
            if let Some(error) = component.step_error(&props.tour, language) {
                show_toast(error);
                return false;
            }
            component.step = component.step.next();
            true
        }
        Msg::PrevStep => {
            if component.processing {
                return false;
            }
            component.step = component.step.prev();
            true
        }
        Msg::SubmitPayment => {
            if component.processing {
                return false;
            }
            component.processing = true;
            props.store.dispatch(Action::SetLoading(true));

            let booking = component.to_booking(
                &props.tour,
                &props.user.id,
                Uuid::new_v4().to_string(),
                String::from(js_sys::Date::new_0().to_iso_string()),
            );
            let store = props.store.clone();
            let link = ctx.link().clone();
            // The booking is dispatched from inside the future, so navigating
            // away mid-delay still appends it once the timer fires; only the
            // confirmation-page navigation needs the wizard still mounted.
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(2000).await;
                gloo_console::debug!(format!("booking {} confirmed", booking.id));
                let booking_id = booking.id.clone();
                store.dispatch(Action::AddBooking(booking));
                store.dispatch(Action::SetLoading(false));
                show_toast(match language {
                    Language::En => "Payment successful!",
                    Language::Fr => "Paiement réussi!",
                });
                link.send_message(Msg::PaymentSettled(booking_id));
            });
            true
        }
        Msg::PaymentSettled(booking_id) => {
            component.processing = false;
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::Confirmation { booking_id });
            }
            true
        }
    }
}
