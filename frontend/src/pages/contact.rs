//! Contact page with a local-only form. Nothing is sent anywhere; a filled
//! form just clears itself and confirms with a toast.

use common::i18n::Language;
use yew::prelude::*;

use crate::store::use_store;
use crate::toast::show_toast;

#[derive(Clone, Default, PartialEq)]
struct ContactForm {
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && self.email.contains('@')
            && !self.message.trim().is_empty()
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let store = use_store();
    let language = store.state.language;
    let form = use_state(ContactForm::default);

    let field = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, target.value());
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = target.value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.is_complete() {
                show_toast(match language {
                    Language::En => "Please fill in all fields with a valid email",
                    Language::Fr => "Veuillez remplir tous les champs avec un email valide",
                });
                return;
            }
            form.set(ContactForm::default());
            show_toast(match language {
                Language::En => "Message sent! We will get back to you soon.",
                Language::Fr => "Message envoyé ! Nous vous répondrons bientôt.",
            });
        })
    };

    html! {
        <div class="contact-page">
            <h1>{ match language {
                Language::En => "Contact Us",
                Language::Fr => "Contactez-Nous",
            } }</h1>
            <div class="contact-grid">
                <div class="contact-info">
                    <p>{ "Yaoundé, Cameroun" }</p>
                    <p>{ "info@cameroontravel.example" }</p>
                    <p>{ "+237 690 123 456" }</p>
                </div>
                <form class="contact-form" onsubmit={on_submit}>
                    <input
                        type="text"
                        value={form.name.clone()}
                        oninput={field(|f, v| f.name = v)}
                        placeholder={match language {
                            Language::En => "Your name",
                            Language::Fr => "Votre nom",
                        }}
                    />
                    <input
                        type="email"
                        value={form.email.clone()}
                        oninput={field(|f, v| f.email = v)}
                        placeholder={match language {
                            Language::En => "Your email",
                            Language::Fr => "Votre email",
                        }}
                    />
                    <textarea
                        value={form.message.clone()}
                        oninput={on_message}
                        rows="6"
                        placeholder={match language {
                            Language::En => "Your message",
                            Language::Fr => "Votre message",
                        }}
                    />
                    <button type="submit">{ match language {
                        Language::En => "Send Message",
                        Language::Fr => "Envoyer le Message",
                    } }</button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::ContactForm;

    #[test]
    fn complete_requires_every_field_and_an_email_shape() {
        let mut form = ContactForm {
            name: "Ama".into(),
            email: "ama@example.com".into(),
            message: "Hello".into(),
        };
        assert!(form.is_complete());

        form.email = "not-an-email".into();
        assert!(!form.is_complete());

        form.email = "ama@example.com".into();
        form.message = "   ".into();
        assert!(!form.is_complete());
    }
}
