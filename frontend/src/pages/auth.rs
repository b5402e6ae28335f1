//! Simulated authentication: any email/password signs in, registration only
//! checks that the two passwords match. Successful submission builds a
//! `User`, dispatches it into the state container (which persists it), and
//! redirects to the dashboard.

use common::i18n::{t, Language};
use common::model::user::{Preferences, User};
use common::state::Action;
use uuid::Uuid;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::store::use_store;
use crate::toast::show_toast;

#[derive(Clone, Default, PartialEq)]
struct AuthForm {
    email: String,
    password: String,
    confirm_password: String,
    name: String,
    phone: String,
}

#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let store = use_store();
    let navigator = use_navigator();
    let language = store.state.language;
    let is_login = use_state(|| true);
    let form = use_state(AuthForm::default);

    let field = |f: fn(&mut AuthForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            f(&mut next, input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let store = store.clone();
        let is_login = is_login.clone();
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = (*form).clone();

            if !*is_login && form.password != form.confirm_password {
                show_toast(match store.state.language {
                    Language::En => "Passwords do not match",
                    Language::Fr => "Les mots de passe ne correspondent pas",
                });
                return;
            }

            let user = User {
                id: Uuid::new_v4().to_string(),
                email: form.email,
                name: if *is_login {
                    "Demo User".to_string()
                } else {
                    form.name
                },
                phone: if *is_login {
                    Some("+237 690 123 456".to_string())
                } else {
                    (!form.phone.is_empty()).then_some(form.phone)
                },
                preferences: Preferences {
                    language: store.state.language,
                    interests: vec!["cultural".to_string(), "wildlife".to_string()],
                },
                bookings: vec![],
                wishlist: vec![],
            };
            store.dispatch(Action::SetUser(Some(user)));

            show_toast(match (*is_login, store.state.language) {
                (true, Language::En) => "Welcome back!",
                (true, Language::Fr) => "Bienvenue!",
                (false, Language::En) => "Account created successfully!",
                (false, Language::Fr) => "Compte créé avec succès!",
            });

            if let Some(nav) = &navigator {
                nav.push(&Route::Dashboard);
            }
        })
    };

    let on_toggle = {
        let is_login = is_login.clone();
        Callback::from(move |_| is_login.set(!*is_login))
    };

    html! {
        <div class="auth-page">
            <h2>{ match (*is_login, language) {
                (true, Language::En) => "Welcome back",
                (true, Language::Fr) => "Bienvenue",
                (false, Language::En) => "Create account",
                (false, Language::Fr) => "Créer un compte",
            } }</h2>

            <form onsubmit={on_submit}>
                if !*is_login {
                    <label>{ match language {
                        Language::En => "Full Name",
                        Language::Fr => "Nom Complet",
                    } }</label>
                    <input
                        type="text"
                        value={form.name.clone()}
                        oninput={field(|f, v| f.name = v)}
                        required=true
                    />

                    <label>{ match language {
                        Language::En => "Phone Number",
                        Language::Fr => "Numéro de Téléphone",
                    } }</label>
                    <input
                        type="tel"
                        value={form.phone.clone()}
                        oninput={field(|f, v| f.phone = v)}
                        placeholder="+237 690 123 456"
                    />
                }

                <label>{"Email"}</label>
                <input
                    type="email"
                    value={form.email.clone()}
                    oninput={field(|f, v| f.email = v)}
                    required=true
                />

                <label>{ match language {
                    Language::En => "Password",
                    Language::Fr => "Mot de Passe",
                } }</label>
                <input
                    type="password"
                    value={form.password.clone()}
                    oninput={field(|f, v| f.password = v)}
                    required=true
                />

                if !*is_login {
                    <label>{ match language {
                        Language::En => "Confirm Password",
                        Language::Fr => "Confirmer le Mot de Passe",
                    } }</label>
                    <input
                        type="password"
                        value={form.confirm_password.clone()}
                        oninput={field(|f, v| f.confirm_password = v)}
                        required=true
                    />
                }

                <button type="submit">
                    { if *is_login { t("login", language) } else { t("register", language) } }
                </button>
            </form>

            <button class="auth-toggle" onclick={on_toggle}>
                { match (*is_login, language) {
                    (true, Language::En) => "Don't have an account? Sign up",
                    (true, Language::Fr) => "Pas de compte? S'inscrire",
                    (false, Language::En) => "Already have an account? Sign in",
                    (false, Language::Fr) => "Déjà un compte? Se connecter",
                } }
            </button>

            <p class="demo-notice">
                { match language {
                    Language::En => "Demo mode: use any email and password to sign in.",
                    Language::Fr => "Mode démo: utilisez n'importe quel email et mot de passe pour vous connecter.",
                } }
            </p>
        </div>
    }
}
