// ============================================================================
// SESSION CONTEXT - Provider de la sesión compartida
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::services::{BrowserRouter, LocalStorageStore};
use crate::state::SessionState;

/// Sesión respaldada por localStorage y el historial del navegador
pub fn browser_session_state() -> SessionState {
    SessionState::new(
        Rc::new(LocalStorageStore),
        Rc::new(BrowserRouter::new()),
        CONFIG.session.clone(),
    )
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_memo((), |_| browser_session_state());

    html! {
        <ContextProvider<SessionState> context={(*session).clone()}>
            { props.children.clone() }
        </ContextProvider<SessionState>>
    }
}
