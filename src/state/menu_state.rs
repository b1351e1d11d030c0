// ============================================================================
// MENU STATE - Máquina de estados del menú móvil (Closed / Open)
// ============================================================================
// Closed --toggle--> Open --toggle/selectItem/dismiss--> Closed
// Cualquier estado --logout--> Closed (+ sesión borrada + navegación a login)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::navigation::{active_index, NavItem, NAV_ITEMS};
use crate::state::reactivity::{ReactiveState, SubscriptionId};
use crate::state::session_state::SessionState;
use crate::utils::constants::{HELP_ROUTE, LOGIN_ROUTE, REGISTER_ROUTE, SETTINGS_ROUTE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// `Inline`: menú del header (solo existe con sesión).
/// `Overlay`: menú independiente, con panel "sign in required" sin sesión.
/// El shell solo monta `Inline`; `Overlay` queda para componentes que
/// embeben el menú fuera del header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuVariant {
    Inline,
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuAction {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

/// Acciones secundarias del panel con sesión (solo cierran el menú)
pub static ACCOUNT_ACTIONS: &[MenuAction] = &[
    MenuAction { label: "Settings", path: SETTINGS_ROUTE, icon: "Settings" },
    MenuAction { label: "Help & Support", path: HELP_ROUTE, icon: "HelpCircle" },
];

pub static SIGN_IN_ACTIONS: &[MenuAction] = &[
    MenuAction { label: "Sign In", path: LOGIN_ROUTE, icon: "LogIn" },
    MenuAction { label: "Create Account", path: REGISTER_ROUTE, icon: "UserPlus" },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuPanel {
    Navigation {
        items: &'static [NavItem],
        active_index: Option<usize>,
        actions: &'static [MenuAction],
    },
    SignInRequired {
        actions: &'static [MenuAction],
    },
}

#[derive(Clone)]
pub struct MobileMenuController {
    variant: MenuVariant,
    session: SessionState,
    state: ReactiveState<MenuState>,
    session_subscription: Rc<Cell<Option<SubscriptionId>>>,
    last_path: Rc<RefCell<Option<String>>>,
}

impl MobileMenuController {
    pub fn new(session: SessionState, variant: MenuVariant) -> Self {
        let state = ReactiveState::new(MenuState::Closed);
        let subscription = (variant == MenuVariant::Inline).then(|| {
            let state = state.clone();
            session.subscribe(move |current| {
                if !current.is_authenticated() && state.set_if_changed(MenuState::Closed) {
                    log::debug!("📱 Menú cerrado: sesión terminada");
                }
            })
        });
        Self {
            variant,
            session,
            state,
            session_subscription: Rc::new(Cell::new(subscription)),
            last_path: Rc::new(RefCell::new(None)),
        }
    }

    pub fn variant(&self) -> MenuVariant {
        self.variant
    }

    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// El backdrop existe mientras el menú está abierto
    pub fn shows_backdrop(&self) -> bool {
        self.is_open()
    }

    pub fn toggle(&self) {
        if self.variant == MenuVariant::Inline && !self.session.is_authenticated() {
            log::debug!("📱 Toggle ignorado: el menú del header requiere sesión");
            return;
        }
        let next = match self.state() {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        log::debug!("📱 Menú móvil: {:?}", next);
        self.state.set(next);
    }

    /// Cierra y navega al destino elegido
    pub fn select_item(&self, path: &str) {
        self.close();
        self.session.router().navigate(path);
    }

    /// Tap en el backdrop
    pub fn dismiss(&self) {
        self.close();
    }

    /// Cierra el menú y termina la sesión. La sesión navega al login.
    pub fn logout(&self) {
        self.close();
        self.session.logout();
    }

    /// Cambio de ruta: el menú nunca sobrevive a una navegación
    pub fn on_navigation(&self) {
        self.close();
    }

    /// Se llama durante el render: cierra el menú si la ruta cambió por
    /// cualquier vía (back/forward incluidos), antes de pintarlo.
    pub fn sync_route(&self, current_path: &str) {
        let previous = self.last_path.replace(Some(current_path.to_string()));
        if previous.is_some_and(|previous| previous != current_path) {
            self.on_navigation();
        }
    }

    pub fn panel(&self, current_path: &str) -> Option<MenuPanel> {
        if !self.is_open() {
            return None;
        }
        if self.session.is_authenticated() {
            Some(MenuPanel::Navigation {
                items: NAV_ITEMS,
                active_index: active_index(NAV_ITEMS, current_path),
                actions: ACCOUNT_ACTIONS,
            })
        } else {
            Some(MenuPanel::SignInRequired { actions: SIGN_IN_ACTIONS })
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&MenuState) + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    /// Suelta la suscripción a la sesión (unmount del componente)
    pub fn dispose(&self) {
        if let Some(id) = self.session_subscription.take() {
            self.session.unsubscribe(id);
        }
    }

    fn close(&self) {
        self.state.set_if_changed(MenuState::Closed);
    }
}

impl PartialEq for MobileMenuController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session_subscription, &other.session_subscription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::services::{CredentialStore, MemoryCredentialStore, MemoryRouter};

    struct Fixture {
        session: SessionState,
        store: MemoryCredentialStore,
        router: MemoryRouter,
    }

    fn fixture(token: Option<&str>) -> Fixture {
        let store = match token {
            Some(token) => MemoryCredentialStore::with_entry("authToken", token),
            None => MemoryCredentialStore::new(),
        };
        let router = MemoryRouter::new("/dashboard");
        let session = SessionState::new(
            Rc::new(store.clone()),
            Rc::new(router.clone()),
            SessionConfig::default(),
        );
        Fixture { session, store, router }
    }

    #[test]
    fn starts_closed_and_toggles() {
        let fx = fixture(Some("abc"));
        let menu = MobileMenuController::new(fx.session.clone(), MenuVariant::Inline);
        assert_eq!(menu.state(), MenuState::Closed);
        menu.toggle();
        assert!(menu.is_open());
        assert!(menu.shows_backdrop());
        menu.toggle();
        assert!(!menu.is_open());
        assert!(!menu.shows_backdrop());
    }

    #[test]
    fn only_toggle_opens_from_closed() {
        let fx = fixture(Some("abc"));
        let menu = MobileMenuController::new(fx.session.clone(), MenuVariant::Overlay);
        menu.dismiss();
        assert!(!menu.is_open());
        menu.on_navigation();
        assert!(!menu.is_open());
        menu.select_item("/dashboard");
        assert!(!menu.is_open());
        menu.logout();
        assert!(!menu.is_open());
    }

    #[test]
    fn select_item_closes_then_navigates() {
        let fx = fixture(Some("abc"));
        let menu = MobileMenuController::new(fx.session.clone(), MenuVariant::Inline);
        menu.toggle();
        menu.select_item("/global-trade-search");
        assert!(!menu.is_open());
        assert_eq!(fx.router.visits(), vec!["/global-trade-search".to_string()]);
    }

    #[test]
    fn dismiss_and_navigation_close() {
        let fx = fixture(Some("abc"));
        let menu = MobileMenuController::new(fx.session.clone(), MenuVariant::Inline);
        menu.toggle();
        menu.dismiss();
        assert!(!menu.is_open());
        menu.toggle();
        menu.on_navigation();
        assert!(!menu.is_open());
        assert!(fx.router.visits().is_empty());
    }

    #[test]
    fn history_navigation_closes_menu_before_render() {
        let fx = fixture(Some("abc"));
        let menu = MobileMenuController::new(fx.session.clone(), MenuVariant::Inline);
        menu.sync_route("/dashboard");
        menu.toggle();
        menu.sync_route("/dashboard");
        assert!(menu.is_open());

        // back/forward: la ruta cambia sin pasar por select_item
        menu.sync_route("/global-trade-search");
        assert!(!menu.is_open());
        assert_eq!(menu.panel("/global-trade-search"), None);
        assert!(fx.router.visits().is_empty());
    }

    #[test]
    fn logout_while_open_closes_clears_and_navigates_once() {
        let fx = fixture(Some("abc"));
        let menu = MobileMenuController::new(fx.session.clone(), MenuVariant::Inline);
        menu.toggle();
        assert!(menu.is_open());

        menu.logout();

        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!fx.session.is_authenticated());
        assert_eq!(fx.store.get("authToken"), None);
        assert_eq!(fx.router.visit_count("/login"), 1);
        assert_eq!(fx.router.visits().len(), 1);
    }

    #[test]
    fn logout_from_closed_still_clears_session() {
        let fx = fixture(Some("abc"));
        let menu = MobileMenuController::new(fx.session.clone(), MenuVariant::Overlay);
        menu.logout();
        assert!(!menu.is_open());
        assert!(!fx.session.is_authenticated());
        assert_eq!(fx.router.visit_count("/login"), 1);
    }

    #[test]
    fn inline_menu_cannot_open_without_session() {
        let fx = fixture(None);
        let menu = MobileMenuController::new(fx.session.clone(), MenuVariant::Inline);
        menu.toggle();
        assert!(!menu.is_open());
        assert_eq!(menu.panel("/dashboard"), None);
    }

    #[test]
    fn inline_menu_closes_when_session_ends_elsewhere() {
        let fx = fixture(Some("abc"));
        let menu = MobileMenuController::new(fx.session.clone(), MenuVariant::Inline);
        menu.toggle();
        fx.session.logout();
        assert!(!menu.is_open());
    }

    #[test]
    fn overlay_without_session_shows_sign_in_panel() {
        let fx = fixture(None);
        let menu = MobileMenuController::new(fx.session.clone(), MenuVariant::Overlay);
        menu.toggle();
        assert_eq!(menu.panel("/dashboard"), Some(MenuPanel::SignInRequired { actions: SIGN_IN_ACTIONS }));

        menu.select_item(SIGN_IN_ACTIONS[1].path);
        assert!(!menu.is_open());
        assert_eq!(fx.router.visits(), vec!["/register".to_string()]);
    }

    #[test]
    fn navigation_panel_marks_exact_active_item() {
        let fx = fixture(Some("abc"));
        let menu = MobileMenuController::new(fx.session.clone(), MenuVariant::Inline);
        assert_eq!(menu.panel("/dashboard"), None);
        menu.toggle();
        match menu.panel("/dashboard") {
            Some(MenuPanel::Navigation { items, active_index, actions }) => {
                assert_eq!(items, NAV_ITEMS);
                assert_eq!(active_index, Some(0));
                assert_eq!(actions, ACCOUNT_ACTIONS);
            }
            other => panic!("panel inesperado: {:?}", other),
        }
    }

    #[test]
    fn subscribers_follow_transitions_and_dispose_detaches_from_session() {
        let fx = fixture(Some("abc"));
        let menu = MobileMenuController::new(fx.session.clone(), MenuVariant::Inline);
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = seen.clone();
        menu.subscribe(move |state| sink.borrow_mut().push(*state));
        menu.toggle();
        menu.dismiss();
        menu.dismiss();
        assert_eq!(*seen.borrow(), vec![MenuState::Open, MenuState::Closed]);

        menu.dispose();
        menu.toggle();
        fx.session.logout();
        assert!(menu.is_open());
    }
}
