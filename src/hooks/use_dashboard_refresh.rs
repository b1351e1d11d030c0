// ============================================================================
// USE DASHBOARD REFRESH - Controlador de recargas ligado al componente
// ============================================================================
// El controlador se crea al montar y se destruye en el cleanup del efecto:
// ningún tick ni recarga sobrevive al desmontaje.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::FilterSet;
use crate::services::{BrowserScheduler, MockDashboardSource};
use crate::state::{DashboardRefreshController, DashboardState};

pub struct UseDashboardRefreshHandle {
    /// `None` solo antes del primer montaje
    pub state: Option<DashboardState>,
    pub apply_filters: Callback<FilterSet>,
    pub refresh: Callback<MouseEvent>,
    pub dismiss_error: Callback<MouseEvent>,
}

#[hook]
pub fn use_dashboard_refresh() -> UseDashboardRefreshHandle {
    let controller: Rc<RefCell<Option<DashboardRefreshController>>> = use_mut_ref(|| None);
    let state = use_state(|| None::<DashboardState>);

    {
        let controller = controller.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let mounted = DashboardRefreshController::mount(
                Rc::new(BrowserScheduler),
                Rc::new(MockDashboardSource),
                CONFIG.refresh,
            );
            state.set(Some(mounted.state()));
            let setter = state.clone();
            mounted.subscribe(move |current| setter.set(Some(current.clone())));
            *controller.borrow_mut() = Some(mounted);

            move || {
                let mounted = controller.borrow_mut().take();
                if let Some(mounted) = mounted {
                    mounted.unmount();
                }
            }
        });
    }

    let apply_filters = {
        let controller = controller.clone();
        Callback::from(move |filters: FilterSet| {
            if let Some(mounted) = controller.borrow().as_ref() {
                mounted.apply_filters(filters);
            }
        })
    };
    let refresh = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(mounted) = controller.borrow().as_ref() {
                mounted.refresh();
            }
        })
    };
    let dismiss_error = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(mounted) = controller.borrow().as_ref() {
                mounted.dismiss_error();
            }
        })
    };

    UseDashboardRefreshHandle {
        state: (*state).clone(),
        apply_filters,
        refresh,
        dismiss_error,
    }
}
