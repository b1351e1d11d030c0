use yew::prelude::*;

use crate::hooks::use_session::use_session;
use crate::state::{MenuState, MenuVariant, MobileMenuController};

#[derive(Clone, PartialEq)]
pub struct UseMobileMenuHandle {
    pub controller: MobileMenuController,
    /// Copia del estado en este render
    pub state: MenuState,
    pub toggle: Callback<MouseEvent>,
    pub dismiss: Callback<MouseEvent>,
    pub select: Callback<String>,
    pub logout: Callback<MouseEvent>,
}

#[hook]
pub fn use_mobile_menu(variant: MenuVariant) -> UseMobileMenuHandle {
    let session = use_session();
    let controller = {
        let state = session.state.clone();
        use_memo(variant, move |variant| MobileMenuController::new(state, *variant))
    };
    let trigger = use_force_update();

    {
        let trigger = trigger.clone();
        use_effect_with(controller.clone(), move |controller| {
            let id = controller.subscribe(move |_| trigger.force_update());
            let controller = controller.clone();
            move || {
                controller.unsubscribe(id);
                controller.dispose();
            }
        });
    }

    // El menú nunca sobrevive a un cambio de ruta (ni siquiera un frame)
    controller.sync_route(&session.current_path);

    let toggle = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.toggle())
    };
    let dismiss = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.dismiss())
    };
    let select = {
        let controller = controller.clone();
        Callback::from(move |path: String| controller.select_item(&path))
    };
    let logout = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.logout())
    };

    UseMobileMenuHandle {
        state: controller.state(),
        controller: (*controller).clone(),
        toggle,
        dismiss,
        select,
        logout,
    }
}
