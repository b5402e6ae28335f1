//! Admin area behind a demo password gate. The gate is per mount: leaving
//! the page and coming back asks again.

use common::i18n::Language;
use yew::prelude::*;

use crate::store::use_store;
use crate::toast::show_toast;

const ADMIN_PASSWORD: &str = "admin123";

/// Checks the demo admin password.
pub fn is_admin_password(candidate: &str) -> bool {
    candidate == ADMIN_PASSWORD
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let store = use_store();
    let language = store.state.language;
    let unlocked = use_state(|| false);
    let password = use_state(String::new);

    if !*unlocked {
        let on_input = {
            let password = password.clone();
            Callback::from(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                password.set(input.value());
            })
        };
        let on_submit = {
            let unlocked = unlocked.clone();
            let password = password.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                if is_admin_password(&password) {
                    unlocked.set(true);
                } else {
                    show_toast(match language {
                        Language::En => "Incorrect password",
                        Language::Fr => "Mot de passe incorrect",
                    });
                }
            })
        };
        return html! {
            <div class="admin-gate">
                <h2>{ match language {
                    Language::En => "Admin Access",
                    Language::Fr => "Accès Administrateur",
                } }</h2>
                <form onsubmit={on_submit}>
                    <input
                        type="password"
                        value={(*password).clone()}
                        oninput={on_input}
                        placeholder={match language {
                            Language::En => "Password",
                            Language::Fr => "Mot de passe",
                        }}
                    />
                    <button type="submit">{ match language {
                        Language::En => "Enter",
                        Language::Fr => "Entrer",
                    } }</button>
                </form>
                <p class="demo-note">{ match language {
                    Language::En => "Demo hint: admin123",
                    Language::Fr => "Indice démo : admin123",
                } }</p>
            </div>
        };
    }

    let tours = &store.state.tours;
    let bookings = &store.state.bookings;
    let revenue: u32 = bookings.iter().map(|b| b.total_price).sum();

    html! {
        <div class="admin-page">
            <h2>{ match language {
                Language::En => "Admin Dashboard",
                Language::Fr => "Tableau de Bord Admin",
            } }</h2>
            <div class="stat-cards">
                <div class="stat-card">
                    <span class="stat-value">{ tours.len() }</span>
                    <span>{ match language {
                        Language::En => "Tours",
                        Language::Fr => "Circuits",
                    } }</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{ bookings.len() }</span>
                    <span>{ match language {
                        Language::En => "Bookings",
                        Language::Fr => "Réservations",
                    } }</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{ format!("${revenue}") }</span>
                    <span>{ match language {
                        Language::En => "Revenue",
                        Language::Fr => "Revenus",
                    } }</span>
                </div>
            </div>

            <h3>{ match language {
                Language::En => "Tour Catalog",
                Language::Fr => "Catalogue des Circuits",
            } }</h3>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>{ "ID" }</th>
                        <th>{ match language {
                            Language::En => "Title",
                            Language::Fr => "Titre",
                        } }</th>
                        <th>{ match language {
                            Language::En => "Region",
                            Language::Fr => "Région",
                        } }</th>
                        <th>{ match language {
                            Language::En => "Price",
                            Language::Fr => "Prix",
                        } }</th>
                        <th>{ match language {
                            Language::En => "Rating",
                            Language::Fr => "Note",
                        } }</th>
                    </tr>
                </thead>
                <tbody>
                    { for tours.iter().map(|tour| html! {
                        <tr>
                            <td>{ tour.id.clone() }</td>
                            <td>{ tour.title.clone() }</td>
                            <td>{ tour.region.clone() }</td>
                            <td>{ format!("${}", tour.price) }</td>
                            <td>{ format!("{:.1}", tour.rating) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>

            <h3>{ match language {
                Language::En => "Session Bookings",
                Language::Fr => "Réservations de Session",
            } }</h3>
            if bookings.is_empty() {
                <p>{ match language {
                    Language::En => "No bookings in this session",
                    Language::Fr => "Aucune réservation dans cette session",
                } }</p>
            } else {
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>{ "ID" }</th>
                            <th>{ match language {
                                Language::En => "Tour",
                                Language::Fr => "Circuit",
                            } }</th>
                            <th>{ "Date" }</th>
                            <th>{ match language {
                                Language::En => "People",
                                Language::Fr => "Personnes",
                            } }</th>
                            <th>{ "Total" }</th>
                            <th>{ match language {
                                Language::En => "Status",
                                Language::Fr => "Statut",
                            } }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for bookings.iter().map(|b| html! {
                            <tr>
                                <td>{ b.id.clone() }</td>
                                <td>{ b.tour.title.clone() }</td>
                                <td>{ b.start_date.clone() }</td>
                                <td>{ b.number_of_people }</td>
                                <td>{ format!("${}", b.total_price) }</td>
                                <td>{ b.status.label() }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::is_admin_password;

    #[test]
    fn accepts_only_the_demo_password() {
        assert!(is_admin_password("admin123"));
        assert!(!is_admin_password("admin"));
        assert!(!is_admin_password(""));
        assert!(!is_admin_password("ADMIN123"));
    }
}
