// ============================================================================
// NAVIGATION VIEWMODEL - Qué muestra el header para (ruta, sesión)
// ============================================================================

use crate::config::SessionConfig;
use crate::models::navigation::{active_index, NavItem, NAV_ITEMS};
use crate::models::Session;

/// Zona de acciones a la derecha del header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderActions {
    /// Header oculto: no hay acciones
    None,
    /// Entradas "Login" y "Register"
    Guest,
    /// Usuario, logout y botón del menú móvil
    Account,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationVisibility {
    pub show_header: bool,
    pub items: &'static [NavItem],
    pub active_index: Option<usize>,
    pub actions: HeaderActions,
}

impl NavigationVisibility {
    fn hidden() -> Self {
        Self { show_header: false, items: &[], active_index: None, actions: HeaderActions::None }
    }

    pub fn active_item(&self) -> Option<&'static NavItem> {
        let items = self.items;
        self.active_index.and_then(|index| items.get(index))
    }
}

/// Reglas en orden:
/// 1. login/register: sin header
/// 2. sin sesión: sin links, acciones de invitado
/// 3. con sesión: todos los links, activo por igualdad exacta de path
pub fn compute_visibility(current_path: &str, session: &Session) -> NavigationVisibility {
    compute_visibility_with(&SessionConfig::default(), current_path, session)
}

pub fn compute_visibility_with(
    config: &SessionConfig,
    current_path: &str,
    session: &Session,
) -> NavigationVisibility {
    if config.is_auth_route(current_path) {
        return NavigationVisibility::hidden();
    }

    if !session.is_authenticated() {
        return NavigationVisibility {
            show_header: true,
            items: &[],
            active_index: None,
            actions: HeaderActions::Guest,
        };
    }

    NavigationVisibility {
        show_header: true,
        items: NAV_ITEMS,
        active_index: active_index(NAV_ITEMS, current_path),
        actions: HeaderActions::Account,
    }
}
