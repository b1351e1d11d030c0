// ============================================================================
// SESSION STATE - Sesión observable derivada del token guardado
// ============================================================================
// Se pasa explícitamente (context provider) en lugar de leer localStorage
// desde cada componente. Se recalcula en cada navegación.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::models::Session;
use crate::services::{CredentialStore, Router};
use crate::state::reactivity::{ReactiveState, SubscriptionId};

/// Lectura pura del almacén: token ausente o vacío = no autenticado
pub fn derive_session(store: &dyn CredentialStore, token_key: &str) -> Session {
    Session::from_token(store.get(token_key).filter(|token| !token.is_empty()))
}

#[derive(Clone)]
pub struct SessionState {
    store: Rc<dyn CredentialStore>,
    router: Rc<dyn Router>,
    config: Rc<SessionConfig>,
    current: ReactiveState<Session>,
    last_path: Rc<RefCell<Option<String>>>,
}

impl SessionState {
    pub fn new(store: Rc<dyn CredentialStore>, router: Rc<dyn Router>, config: SessionConfig) -> Self {
        let session = derive_session(store.as_ref(), &config.token_key);
        log::info!(
            "🔐 Sesión inicial: {}",
            if session.is_authenticated() { "autenticada" } else { "anónima" }
        );
        Self {
            store,
            router,
            config: Rc::new(config),
            current: ReactiveState::new(session),
            last_path: Rc::new(RefCell::new(None)),
        }
    }

    pub fn session(&self) -> Session {
        self.current.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.with(Session::is_authenticated)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn router(&self) -> &Rc<dyn Router> {
        &self.router
    }

    /// Recalcular desde el almacén (en cada cambio de ruta).
    /// Devuelve true si la sesión cambió.
    pub fn refresh(&self) -> bool {
        let session = derive_session(self.store.as_ref(), &self.config.token_key);
        let changed = self.current.set_if_changed(session);
        if changed {
            log::debug!("🔄 Sesión recalculada tras navegación");
        }
        changed
    }

    /// Se llama durante el render con la ruta actual: recalcula la sesión
    /// antes de pintar si la ruta cambió. Devuelve true si la sesión cambió.
    pub fn sync_route(&self, current_path: &str) -> bool {
        let path_changed = self.last_path.borrow().as_deref() != Some(current_path);
        if !path_changed {
            return false;
        }
        *self.last_path.borrow_mut() = Some(current_path.to_string());
        self.refresh()
    }

    pub fn login(&self, token: &str) -> Result<(), SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        self.store.set(&self.config.token_key, token)?;
        self.current.set_if_changed(Session::from_token(Some(token.to_string())));
        log::info!("✅ Login completado");
        Ok(())
    }

    /// Borra el token y navega al login (una sola vez).
    /// Un fallo del almacén se registra pero no impide el logout en memoria.
    pub fn logout(&self) {
        log::info!("👋 Logout iniciado");
        if let Err(e) = self.store.remove(&self.config.token_key) {
            log::error!("❌ Error eliminando token: {}", e);
        }
        self.current.set_if_changed(Session::anonymous());
        self.router.navigate(&self.config.login_route);
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Session) + 'static,
    {
        self.current.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.current.unsubscribe(id)
    }
}

impl PartialEq for SessionState {
    /// Mismo provider (mismo estado compartido)
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{MemoryCredentialStore, MemoryRouter};
    use std::cell::Cell;

    fn fixture(token: Option<&str>, path: &str) -> (SessionState, MemoryCredentialStore, MemoryRouter) {
        let store = match token {
            Some(token) => MemoryCredentialStore::with_entry("authToken", token),
            None => MemoryCredentialStore::new(),
        };
        let router = MemoryRouter::new(path);
        let state = SessionState::new(
            Rc::new(store.clone()),
            Rc::new(router.clone()),
            SessionConfig::default(),
        );
        (state, store, router)
    }

    #[test]
    fn derives_from_store_at_construction() {
        let (state, _, _) = fixture(Some("abc"), "/dashboard");
        assert!(state.is_authenticated());
        let (state, _, _) = fixture(Some(""), "/dashboard");
        assert!(!state.is_authenticated());
        let (state, _, _) = fixture(None, "/dashboard");
        assert!(!state.is_authenticated());
    }

    #[test]
    fn login_stores_token_and_notifies() {
        let (state, store, _) = fixture(None, "/login");
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        state.subscribe(move |session| {
            assert!(session.is_authenticated());
            counter.set(counter.get() + 1);
        });

        state.login("demo-token").unwrap();
        assert!(state.is_authenticated());
        assert_eq!(store.get("authToken").as_deref(), Some("demo-token"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn empty_token_login_is_rejected_without_side_effects() {
        let (state, store, _) = fixture(None, "/login");
        assert_eq!(state.login(""), Err(SessionError::EmptyToken));
        assert!(!state.is_authenticated());
        assert_eq!(store.get("authToken"), None);
    }

    #[test]
    fn login_propagates_storage_failure() {
        let (state, store, _) = fixture(None, "/login");
        store.set_read_only(true);
        assert!(matches!(state.login("abc"), Err(SessionError::Storage(_))));
        assert!(!state.is_authenticated());
    }

    #[test]
    fn logout_clears_token_and_navigates_once() {
        let (state, store, router) = fixture(Some("abc"), "/dashboard");
        state.logout();
        assert!(!state.is_authenticated());
        assert_eq!(store.get("authToken"), None);
        assert_eq!(router.visits(), vec!["/login".to_string()]);
    }

    #[test]
    fn logout_survives_storage_failure() {
        let (state, store, router) = fixture(Some("abc"), "/dashboard");
        store.set_read_only(true);
        state.logout();
        assert!(!state.is_authenticated());
        assert_eq!(router.visit_count("/login"), 1);
    }

    #[test]
    fn route_change_recomputes_before_reading() {
        let (state, store, _) = fixture(Some("abc"), "/dashboard");
        assert!(!state.sync_route("/dashboard"));
        assert!(state.is_authenticated());

        // Otra pestaña/componente borra el token; la siguiente ruta lo ve ya
        store.remove("authToken").unwrap();
        assert!(!state.sync_route("/dashboard"));
        assert!(state.is_authenticated());
        assert!(state.sync_route("/global-trade-search"));
        assert!(!state.is_authenticated());
    }

    #[test]
    fn sync_route_is_idempotent_for_the_same_path() {
        let (state, store, _) = fixture(None, "/login");
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        state.subscribe(move |_| counter.set(counter.get() + 1));

        state.sync_route("/login");
        store.set("authToken", "abc").unwrap();
        state.sync_route("/login");
        assert_eq!(calls.get(), 0);
        state.sync_route("/dashboard");
        state.sync_route("/dashboard");
        assert_eq!(calls.get(), 1);
        assert!(state.is_authenticated());
    }

    #[test]
    fn refresh_sees_changes_made_by_other_components() {
        let (state, store, _) = fixture(Some("abc"), "/dashboard");
        let other = SessionState::new(
            Rc::new(store.clone()),
            Rc::new(MemoryRouter::new("/dashboard")),
            SessionConfig::default(),
        );
        other.logout();
        assert!(state.is_authenticated());
        assert!(state.refresh());
        assert!(!state.is_authenticated());
        assert!(!state.refresh());
    }
}
