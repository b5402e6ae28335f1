//! Booking wizard: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and messages.
//!
//! The wizard walks three visible steps (tour details, traveler info,
//! payment); the confirmation is reached by navigating to the confirmation
//! route once the simulated payment settles. Transitions are linear and each
//! forward step is gated by the current step's completion predicate.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::BookingWizardProps;
pub use state::BookingWizard;

impl Component for BookingWizard {
    type Message = Msg;
    type Properties = BookingWizardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BookingWizard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
