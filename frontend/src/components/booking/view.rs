//! View rendering for the booking wizard: the four-step progress indicator,
//! the active step's form, the back/next controls, and the summary sidebar
//! with the running total.

use common::i18n::{t, Language};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{step_titles, BookingWizard, Step};

pub fn view(component: &BookingWizard, ctx: &Context<BookingWizard>) -> Html {
    let link = ctx.link();
    let props = ctx.props();
    let language = props.store.state.language;

    html! {
        <div class="booking-wizard">
            { build_step_indicator(component, language) }

            <div class="booking-columns">
                <section class="booking-form">
                    <h1>{ t("bookingTitle", language) }</h1>
                    {
                        match component.step {
                            Step::TourDetails => build_tour_details_step(component, ctx),
                            Step::TravelerInfo => build_traveler_step(component, link, language),
                            Step::Payment => build_payment_step(component, ctx),
                        }
                    }
                    { build_nav_buttons(component, link, language) }
                </section>

                { build_summary_sidebar(component, ctx) }
            </div>
        </div>
    }
}

fn build_step_indicator(component: &BookingWizard, language: Language) -> Html {
    let current = component.step.number();
    html! {
        <ol class="step-indicator">
            { for step_titles(language).iter().enumerate().map(|(i, title)| {
                let number = i as u8 + 1;
                let class = if current >= number { "step reached" } else { "step" };
                html! {
                    <li class={class}>
                        <span class="step-number">{ number }</span>
                        <span class="step-title">{ *title }</span>
                    </li>
                }
            }) }
        </ol>
    }
}

fn build_tour_details_step(component: &BookingWizard, ctx: &Context<BookingWizard>) -> Html {
    let link = ctx.link();
    let tour = &ctx.props().tour;
    let language = ctx.props().store.state.language;

    let on_date_change = link.callback(|e: Event| {
        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
        Msg::SelectDate(select.value())
    });
    let on_people_change = link.callback(|e: Event| {
        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
        Msg::SetPeople(select.value().parse().unwrap_or(1))
    });
    let on_requests_input = link.callback(|e: InputEvent| {
        let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetSpecialRequests(area.value())
    });

    html! {
        <div class="step-content">
            <label>{ t("selectDate", language) }</label>
            <select onchange={on_date_change}>
                <option value="" selected={component.selected_date.is_empty()}>
                    { match language {
                        Language::En => "Choose a date",
                        Language::Fr => "Choisir une date",
                    } }
                </option>
                { for tour.available_dates.iter().map(|date| html! {
                    <option value={date.clone()} selected={component.selected_date == *date}>
                        { date.clone() }
                    </option>
                }) }
            </select>

            <label>{ t("numberOfPeople", language) }</label>
            <select onchange={on_people_change}>
                { for (1..=tour.max_group_size).map(|n| html! {
                    <option value={n.to_string()} selected={component.number_of_people == n}>
                        { n }
                    </option>
                }) }
            </select>

            <label>{ t("specialRequests", language) }</label>
            <textarea
                value={component.special_requests.clone()}
                oninput={on_requests_input}
                placeholder={ match language {
                    Language::En => "Any special requests or dietary requirements...",
                    Language::Fr => "Demandes spéciales ou exigences alimentaires...",
                } }
            />
        </div>
    }
}

fn build_traveler_step(
    component: &BookingWizard,
    link: &Scope<BookingWizard>,
    language: Language,
) -> Html {
    let text_input = |label: &str,
                      value: String,
                      required: bool,
                      on_input: Callback<InputEvent>| {
        html! {
            <>
                <label>{ label.to_string() }</label>
                <input type="text" {value} oninput={on_input} required={required} />
            </>
        }
    };

    let first = link.callback(|e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        Msg::SetFirstName(input.value())
    });
    let last = link.callback(|e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        Msg::SetLastName(input.value())
    });
    let email = link.callback(|e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        Msg::SetEmail(input.value())
    });
    let phone = link.callback(|e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        Msg::SetPhone(input.value())
    });
    let emergency = link.callback(|e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        Msg::SetEmergencyContact(input.value())
    });

    let (first_label, last_label, phone_label, emergency_label) = match language {
        Language::En => ("First Name", "Last Name", "Phone Number", "Emergency Contact"),
        Language::Fr => ("Prénom", "Nom", "Numéro de Téléphone", "Contact d'Urgence"),
    };

    html! {
        <div class="step-content">
            { text_input(first_label, component.traveler.first_name.clone(), true, first) }
            { text_input(last_label, component.traveler.last_name.clone(), true, last) }
            { text_input("Email", component.traveler.email.clone(), true, email) }
            { text_input(phone_label, component.traveler.phone.clone(), true, phone) }
            { text_input(
                emergency_label,
                component.traveler.emergency_contact.clone(),
                false,
                emergency,
            ) }
        </div>
    }
}

fn build_payment_step(component: &BookingWizard, ctx: &Context<BookingWizard>) -> Html {
    let link = ctx.link();
    let tour = &ctx.props().tour;
    let language = ctx.props().store.state.language;
    let total = component.total_price(tour);

    html! {
        <div class="step-content">
            <div class="payment-summary">
                <h3>{ match language {
                    Language::En => "Payment Summary",
                    Language::Fr => "Résumé du Paiement",
                } }</h3>
                <p>{ format!("{} — ${}", tour.title, tour.price) }</p>
                <p>{ format!(
                    "{} x {}",
                    component.number_of_people,
                    match language {
                        Language::En => "people",
                        Language::Fr => "personnes",
                    }
                ) }</p>
                <p class="total">{ format!("{}: ${}", t("totalPrice", language), total) }</p>
            </div>

            <p class="demo-notice">
                { match language {
                    Language::En => "This is a demo payment system. No actual charges will be made.",
                    Language::Fr => "Ceci est un système de paiement de démonstration. Aucun frais réel ne sera prélevé.",
                } }
            </p>

            <button
                class="pay-button"
                disabled={component.processing}
                onclick={link.callback(|_| Msg::SubmitPayment)}
            >
                {
                    if component.processing {
                        match language {
                            Language::En => "Processing payment...".to_string(),
                            Language::Fr => "Traitement du paiement...".to_string(),
                        }
                    } else {
                        match language {
                            Language::En => format!("Complete Payment (${total})"),
                            Language::Fr => format!("Finaliser le Paiement (${total})"),
                        }
                    }
                }
            </button>
        </div>
    }
}

fn build_nav_buttons(
    component: &BookingWizard,
    link: &Scope<BookingWizard>,
    language: Language,
) -> Html {
    let at_first = component.step == Step::TourDetails;
    let at_payment = component.step == Step::Payment;

    html! {
        <div class="wizard-nav">
            <button
                disabled={at_first || component.processing}
                onclick={link.callback(|_| Msg::PrevStep)}
            >
                { match language {
                    Language::En => "Previous",
                    Language::Fr => "Précédent",
                } }
            </button>
            if !at_payment {
                <button class="primary" onclick={link.callback(|_| Msg::NextStep)}>
                    { match language {
                        Language::En => "Next",
                        Language::Fr => "Suivant",
                    } }
                </button>
            }
        </div>
    }
}

fn build_summary_sidebar(component: &BookingWizard, ctx: &Context<BookingWizard>) -> Html {
    let tour = &ctx.props().tour;
    let language = ctx.props().store.state.language;

    html! {
        <aside class="booking-summary">
            <h2>{ match language {
                Language::En => "Booking Summary",
                Language::Fr => "Résumé de Réservation",
            } }</h2>
            if let Some(image) = tour.images.first() {
                <img src={image.clone()} alt={tour.title.clone()} />
            }
            <h3>{ tour.title.clone() }</h3>
            <p>{ format!("{} · {}", tour.region, tour.duration) }</p>
            <p>{ format!("★ {} ({} {})", tour.rating, tour.reviews_count, t("reviews", language)) }</p>

            if !component.selected_date.is_empty() {
                <p>{ format!("Date: {}", component.selected_date) }</p>
            }
            <p>{ format!("{}: {}", t("numberOfPeople", language), component.number_of_people) }</p>
            <p class="total">
                { format!("{}: ${}", t("totalPrice", language), component.total_price(tour)) }
            </p>
        </aside>
    }
}
