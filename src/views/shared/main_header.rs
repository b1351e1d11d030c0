// ============================================================================
// MAIN HEADER - Barra superior (logo, navegación, acciones)
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_mobile_menu, use_session, use_viewport_width};
use crate::routes::AppRoute;
use crate::state::MenuVariant;
use crate::utils::constants::{APP_NAME, DEMO_USER_NAME};
use crate::viewmodels::{compute_visibility_with, uses_mobile_navigation, HeaderActions};
use crate::views::shared::{Icon, MobileMenu};

#[function_component(MainHeader)]
pub fn main_header() -> Html {
    let session = use_session();
    let menu = use_mobile_menu(MenuVariant::Inline);
    let width = use_viewport_width();
    let mobile = uses_mobile_navigation(width, &CONFIG.layout);

    // Al pasar a escritorio el menú móvil deja de tener botón: se cierra
    {
        let controller = menu.controller.clone();
        use_effect_with(mobile, move |mobile| {
            if !*mobile {
                controller.dismiss();
            }
            || ()
        });
    }

    let visibility = compute_visibility_with(
        session.state.config(),
        &session.current_path,
        &session.session,
    );
    if !visibility.show_header {
        return html! {};
    }

    // Por debajo de `md` la navegación vive en el menú móvil
    let nav = if mobile {
        html! {}
    } else {
        html! {
            <nav class="header-nav">
                { for visibility.items.iter().enumerate().map(|(i, item)| {
                    let active = visibility.active_index == Some(i);
                    let route = AppRoute::recognize(item.path).unwrap_or(AppRoute::NotFound);
                    html! {
                        <Link<AppRoute> to={route} classes={classes!("nav-link", active.then_some("active"))}>
                            <Icon name={item.icon} />
                            <span>{ item.label }</span>
                        </Link<AppRoute>>
                    }
                }) }
            </nav>
        }
    };

    let actions = match visibility.actions {
        HeaderActions::Account if mobile => html! {
            <button class="btn-ghost btn-icon btn-menu" onclick={menu.toggle.clone()} aria-label="Menu">
                <Icon name={if menu.state.is_open() { "X" } else { "Menu" }} />
            </button>
        },
        HeaderActions::Account => {
            let logout = session.logout.reform(|_: MouseEvent| ());
            html! {
                <div class="header-user">
                    <div class="user-avatar"><Icon name="User" /></div>
                    <span class="user-name">{ DEMO_USER_NAME }</span>
                    <button class="btn-ghost btn-sm" onclick={logout}>
                        <Icon name="LogOut" />
                        <span>{ "Logout" }</span>
                    </button>
                </div>
            }
        }
        HeaderActions::Guest => html! {
            <div class="header-guest">
                <Link<AppRoute> to={AppRoute::Login} classes={classes!("btn-ghost", "btn-sm")}>{ "Login" }</Link<AppRoute>>
                <Link<AppRoute> to={AppRoute::Register} classes={classes!("btn-primary", "btn-sm")}>{ "Register" }</Link<AppRoute>>
            </div>
        },
        HeaderActions::None => html! {},
    };

    html! {
        <>
            <header class="main-header">
                <div class="header-content">
                    <Link<AppRoute> to={AppRoute::Dashboard} classes={classes!("header-logo")}>
                        <span class="logo-icon"><Icon name="TrendingUp" /></span>
                        <span class="logo-text">{ APP_NAME }</span>
                    </Link<AppRoute>>
                    { nav }
                    <div class="header-actions">{ actions }</div>
                </div>
            </header>
            <MobileMenu menu={menu} current_path={session.current_path.clone()} />
        </>
    }
}
