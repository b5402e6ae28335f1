//! Durable browser storage for the rehydrated slices of application state.
//!
//! Exactly two keys are used: `user` (serialized [`User`] or absent) and
//! `language` (`"en"` or `"fr"`). Each is read once at startup and written
//! whenever the corresponding state slice changes. Bookings are deliberately
//! not persisted, so a reload restores the user but not their session's
//! booking history.

use common::i18n::Language;
use common::model::user::User;
use gloo_console::warn;

const USER_KEY: &str = "user";
const LANGUAGE_KEY: &str = "language";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_user() -> Option<User> {
    let raw = local_storage()?.get_item(USER_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(err) => {
            warn!(format!("discarding unreadable stored user: {err}"));
            None
        }
    }
}

/// Writes the current user, or clears the key on logout.
pub fn save_user(user: Option<&User>) {
    let Some(storage) = local_storage() else {
        return;
    };
    match user {
        Some(user) => match serde_json::to_string(user) {
            Ok(json) => {
                if storage.set_item(USER_KEY, &json).is_err() {
                    warn!("failed to persist user");
                }
            }
            Err(err) => warn!(format!("failed to serialize user: {err}")),
        },
        None => {
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

pub fn load_language() -> Option<Language> {
    let tag = local_storage()?.get_item(LANGUAGE_KEY).ok()??;
    Language::from_tag(&tag)
}

pub fn save_language(language: Language) {
    if let Some(storage) = local_storage() {
        if storage.set_item(LANGUAGE_KEY, language.tag()).is_err() {
            warn!("failed to persist language preference");
        }
    }
}
