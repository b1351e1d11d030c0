// ============================================================================
// MOBILE MENU - Panel desplegable + backdrop
// ============================================================================
// Solo pinta lo que el controlador decide: el panel sale de
// `MobileMenuController::panel` y cada acción vuelve al controlador.
// ============================================================================

use yew::prelude::*;

use crate::hooks::UseMobileMenuHandle;
use crate::state::MenuPanel;
use crate::utils::constants::{APP_NAME, DEMO_USER_EMAIL, DEMO_USER_NAME};
use crate::views::shared::Icon;

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub menu: UseMobileMenuHandle,
    pub current_path: AttrValue,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let menu = &props.menu;
    let Some(panel) = menu.controller.panel(&props.current_path) else {
        return html! {};
    };

    let link = |label: &'static str, path: &'static str, icon: &'static str, active: bool| {
        let select = menu.select.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            select.emit(path.to_string());
        });
        html! {
            <a href={path} class={classes!("mobile-menu-item", active.then_some("active"))} {onclick}>
                <Icon name={icon} />
                <span>{ label }</span>
                if active {
                    <span class="active-dot" />
                }
            </a>
        }
    };

    let body = match panel {
        MenuPanel::Navigation { items, active_index, actions } => html! {
            <>
                <div class="mobile-menu-items">
                    { for items.iter().enumerate().map(|(i, item)| link(item.label, item.path, item.icon, active_index == Some(i))) }
                </div>
                <div class="mobile-menu-user">
                    <div class="user-badge">
                        <div class="user-avatar"><Icon name="User" /></div>
                        <div class="user-info">
                            <div class="user-name">{ DEMO_USER_NAME }</div>
                            <div class="user-email">{ DEMO_USER_EMAIL }</div>
                        </div>
                        <span class="status-online" title="Online" />
                    </div>
                    <div class="mobile-menu-actions">
                        { for actions.iter().map(|action| html! {
                            <button class="btn-ghost" onclick={menu.dismiss.clone()}>
                                <Icon name={action.icon} />
                                <span>{ action.label }</span>
                            </button>
                        }) }
                        <button class="btn-ghost btn-logout" onclick={menu.logout.clone()}>
                            <Icon name="LogOut" />
                            <span>{ "Logout" }</span>
                        </button>
                    </div>
                </div>
            </>
        },
        MenuPanel::SignInRequired { actions } => html! {
            <div class="mobile-menu-locked">
                <Icon name="Lock" class={classes!("icon-large")} />
                <h3>{ "Access Required" }</h3>
                <p>{ format!("Please sign in to access {}", APP_NAME) }</p>
                <div class="mobile-menu-actions">
                    { for actions.iter().map(|action| link(action.label, action.path, action.icon, false)) }
                </div>
            </div>
        },
    };

    html! {
        <div class="mobile-menu">
            if menu.controller.shows_backdrop() {
                <div class="mobile-menu-backdrop" onclick={menu.dismiss.clone()} />
            }
            <div class="mobile-menu-panel">
                <nav>{ body }</nav>
            </div>
        </div>
    }
}
