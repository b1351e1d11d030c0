// ============================================================================
// AUTHENTICATION LAYOUT - Shell de login / registro
// ============================================================================
// Dos paneles (branding + formulario) a partir del breakpoint `lg`;
// por debajo solo el formulario con un logo compacto.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_viewport_width;
use crate::routes::AppRoute;
use crate::utils::constants::{APP_NAME, PRIVACY_ROUTE, TERMS_ROUTE};
use crate::viewmodels::shell_layout;
use crate::views::shared::Icon;

const FEATURES: &[(&str, &str, &str)] = &[
    ("BarChart3", "Advanced Analytics", "Comprehensive trade data visualization and pattern recognition"),
    ("Search", "Global Search", "Instant access to worldwide trade records and market intelligence"),
    ("Shield", "Enterprise Security", "Bank-grade security for sensitive trade and financial data"),
];

#[derive(Properties, PartialEq)]
pub struct AuthenticationLayoutProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(AuthenticationLayout)]
pub fn authentication_layout(props: &AuthenticationLayoutProps) -> Html {
    let width = use_viewport_width();
    let layout = shell_layout(width, &CONFIG.layout);

    html! {
        <div class="auth-shell">
            if layout.shows_branding_pane() {
                <div class="auth-branding">
                    <div class="auth-branding-content">
                        <div class="brand">
                            <span class="brand-icon"><Icon name="TrendingUp" /></span>
                            <span class="brand-name">{ APP_NAME }</span>
                        </div>
                        <h1>{ "Global Trade Intelligence Platform" }</h1>
                        <p class="brand-tagline">
                            { "Empowering trade professionals with sophisticated analytics and real-time market insights for confident decision-making in global commerce." }
                        </p>
                        <ul class="brand-features">
                            { for FEATURES.iter().map(|(icon, title, text)| html! {
                                <li class="brand-feature">
                                    <span class="feature-icon"><Icon name={*icon} /></span>
                                    <div>
                                        <h3>{ *title }</h3>
                                        <p>{ *text }</p>
                                    </div>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            }

            <div class="auth-form-pane">
                <div class="auth-form-container">
                    if layout.shows_compact_logo() {
                        <div class="auth-compact-logo">
                            <Link<AppRoute> to={AppRoute::Home} classes={classes!("brand")}>
                                <span class="brand-icon"><Icon name="TrendingUp" /></span>
                                <span class="brand-name">{ APP_NAME }</span>
                            </Link<AppRoute>>
                        </div>
                    }

                    <div class="auth-form-header">
                        <h2>{ props.title.clone() }</h2>
                        if let Some(subtitle) = &props.subtitle {
                            <p class="muted">{ subtitle.clone() }</p>
                        }
                    </div>

                    <div class="auth-form-content">{ props.children.clone() }</div>

                    <div class="auth-footer">
                        <p>
                            { "By continuing, you agree to our " }
                            <a href={TERMS_ROUTE}>{ "Terms of Service" }</a>
                            { " and " }
                            <a href={PRIVACY_ROUTE}>{ "Privacy Policy" }</a>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
