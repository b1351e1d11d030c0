// ============================================================================
// USE SESSION HOOK - Sesión compartida desde el SessionProvider
// ============================================================================
// Re-renderiza el componente cuando la sesión cambia y la recalcula
// (sincrónicamente, durante el render) en cada cambio de ruta.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::browser_session_state;
use crate::models::Session;
use crate::state::SessionState;

#[derive(Clone)]
pub struct UseSessionHandle {
    pub state: SessionState,
    pub session: Session,
    pub current_path: String,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    // Sin provider (componente aislado) se usa el storage del navegador,
    // una sola instancia por componente
    let context = use_context::<SessionState>();
    let fallback = use_memo(context.is_none(), |missing| (*missing).then(browser_session_state));
    let state = match (context, (*fallback).clone()) {
        (Some(state), _) | (None, Some(state)) => state,
        (None, None) => browser_session_state(),
    };
    let current_path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();
    let trigger = use_force_update();

    {
        let trigger = trigger.clone();
        use_effect_with(state.clone(), move |state| {
            let id = state.subscribe(move |_| trigger.force_update());
            let state = state.clone();
            move || {
                state.unsubscribe(id);
            }
        });
    }

    // Recalcular en cada navegación, antes de leer la sesión para este render
    state.sync_route(&current_path);

    let logout = {
        let state = state.clone();
        Callback::from(move |_| state.logout())
    };

    UseSessionHandle {
        session: state.session(),
        state,
        current_path,
        logout,
    }
}
