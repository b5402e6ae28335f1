//! Yew adapter around the shared state container in `common::state`.
//!
//! The store is injected into the component tree through a
//! `ContextProvider` rather than living in a global, and every mutation goes
//! through the typed dispatch of [`common::state::reduce`]. Persistence runs
//! as observers on the two durable slices (`user`, `language`) after a state
//! change propagates; the reducer itself stays pure.

use std::rc::Rc;

use yew::prelude::*;

use common::state::{reduce, Action, AppState};

/// Immutable state snapshot handed to views. Dispatching an [`Action`]
/// produces the next snapshot via the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub struct AppStore {
    pub state: AppState,
}

impl Reducible for AppStore {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        Rc::new(Self {
            state: reduce(&self.state, action),
        })
    }
}

pub type StoreHandle = UseReducerHandle<AppStore>;

/// Convenience accessor for the injected store.
#[hook]
pub fn use_store() -> StoreHandle {
    use_context::<StoreHandle>().expect("StoreProvider must wrap the application")
}

#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the state container for the session. Seeds the catalog, rehydrates
/// `user` and `language` from durable storage once at construction, and
/// registers the write-back observers.
#[function_component(StoreProvider)]
pub fn store_provider(props: &StoreProviderProps) -> Html {
    let store = use_reducer_eq(|| {
        let mut state = AppState::with_tours(crate::data::seed_tours());
        if let Some(user) = crate::storage::load_user() {
            gloo_console::debug!(format!("rehydrated user {}", user.id));
            state.user = Some(user);
        }
        if let Some(language) = crate::storage::load_language() {
            state.language = language;
        }
        AppStore { state }
    });

    {
        let user = store.state.user.clone();
        use_effect_with(user, |user| crate::storage::save_user(user.as_ref()));
    }
    {
        let language = store.state.language;
        use_effect_with(language, |language| {
            crate::storage::save_language(*language);
        });
    }

    html! {
        <ContextProvider<StoreHandle> context={store}>
            { props.children.clone() }
        </ContextProvider<StoreHandle>>
    }
}
