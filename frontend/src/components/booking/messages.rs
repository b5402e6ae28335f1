#[derive(Clone)]
pub enum Msg {
    SelectDate(String),
    SetPeople(u32),
    SetSpecialRequests(String),
    SetFirstName(String),
    SetLastName(String),
    SetEmail(String),
    SetPhone(String),
    SetEmergencyContact(String),
    NextStep,
    PrevStep,
    SubmitPayment,
    /// Carries the id of the booking that was just dispatched, for the
    /// confirmation-page navigation.
    PaymentSettled(String),
}
