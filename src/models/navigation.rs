use crate::utils::constants::{HOME_ROUTE, SEARCH_ROUTE};

/// Destino navegable del header y del menú móvil
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

/// Tabla única compartida por el header y el menú móvil
pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", path: HOME_ROUTE, icon: "BarChart3" },
    NavItem { label: "Global Trade Search", path: SEARCH_ROUTE, icon: "Search" },
];

/// Índice del item cuyo path coincide exactamente con `current_path`
pub fn active_index(items: &[NavItem], current_path: &str) -> Option<usize> {
    items.iter().position(|item| item.path == current_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_only() {
        assert_eq!(active_index(NAV_ITEMS, "/dashboard"), Some(0));
        assert_eq!(active_index(NAV_ITEMS, "/global-trade-search"), Some(1));
        assert_eq!(active_index(NAV_ITEMS, "/dashboard/"), None);
        assert_eq!(active_index(NAV_ITEMS, "/dashboard/overview"), None);
        assert_eq!(active_index(NAV_ITEMS, "/"), None);
    }

    #[test]
    fn paths_are_unique() {
        for (i, a) in NAV_ITEMS.iter().enumerate() {
            for b in &NAV_ITEMS[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
    }
}
