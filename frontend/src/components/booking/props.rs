//! Properties for the booking wizard.
//!
//! The wizard never resolves entities itself: the booking page hands it the
//! tour being booked and the signed-in user, and short-circuits to the
//! login prompt or not-found view before the wizard ever mounts. The store
//! handle is injected so the final payment step can dispatch the booking.

use common::model::tour::Tour;
use common::model::user::User;
use yew::prelude::*;

use crate::store::StoreHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct BookingWizardProps {
    pub tour: Tour,
    pub user: User,
    pub store: StoreHandle,
}
