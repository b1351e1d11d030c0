use crate::config::LayoutConfig;

/// Presentación del shell de autenticación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellLayout {
    /// Panel de marca + panel de formulario
    TwoPane,
    /// Solo formulario, con logo compacto encima
    SinglePane,
}

impl ShellLayout {
    pub fn shows_branding_pane(self) -> bool {
        self == ShellLayout::TwoPane
    }

    pub fn shows_compact_logo(self) -> bool {
        self == ShellLayout::SinglePane
    }
}

pub fn shell_layout(viewport_width: u32, layout: &LayoutConfig) -> ShellLayout {
    if viewport_width >= layout.two_pane_min_width {
        ShellLayout::TwoPane
    } else {
        ShellLayout::SinglePane
    }
}

/// Por debajo del breakpoint `md` la navegación pasa al menú móvil
pub fn uses_mobile_navigation(viewport_width: u32, layout: &LayoutConfig) -> bool {
    viewport_width < layout.mobile_max_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        let layout = LayoutConfig::default();
        assert_eq!(shell_layout(1024, &layout), ShellLayout::TwoPane);
        assert_eq!(shell_layout(1023, &layout), ShellLayout::SinglePane);
        assert_eq!(shell_layout(375, &layout), ShellLayout::SinglePane);
        assert!(ShellLayout::TwoPane.shows_branding_pane());
        assert!(ShellLayout::SinglePane.shows_compact_logo());
    }

    #[test]
    fn mobile_navigation_below_md() {
        let layout = LayoutConfig::default();
        assert!(uses_mobile_navigation(767, &layout));
        assert!(!uses_mobile_navigation(768, &layout));
    }
}
