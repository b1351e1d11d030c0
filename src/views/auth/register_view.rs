use chrono::Utc;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_document_title, use_session};
use crate::routes::AppRoute;
use crate::viewmodels::{demo_token, RegisterForm};
use crate::views::shared::AuthenticationLayout;

#[function_component(RegisterView)]
pub fn register_view() -> Html {
    use_document_title("Create Account");
    let session = use_session();
    let navigator = use_navigator();
    let error = use_state(|| None::<String>);

    let full_name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();

    let on_submit = {
        let refs = (full_name_ref.clone(), email_ref.clone(), password_ref.clone(), confirm_ref.clone());
        let error = error.clone();
        let state = session.state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>().map(|input| input.value()).unwrap_or_default()
            };
            let form = RegisterForm {
                full_name: value(&refs.0),
                email: value(&refs.1),
                password: value(&refs.2),
                confirm_password: value(&refs.3),
            };

            if let Err(e) = form.validate() {
                error.set(Some(e.to_string()));
                return;
            }

            // Cuenta de demo: registrarse equivale a iniciar sesión
            match state.login(&demo_token(&form.email, Utc::now())) {
                Ok(()) => {
                    log::info!("✅ Cuenta creada para {}", form.full_name);
                    if let Some(navigator) = &navigator {
                        navigator.push(&AppRoute::Dashboard);
                    }
                }
                Err(e) => {
                    log::error!("❌ Registro fallido: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        })
    };

    html! {
        <AuthenticationLayout title="Create your account" subtitle={Some(AttrValue::from("Start analyzing global trade in minutes"))}>
            <form class="auth-form" onsubmit={on_submit}>
                if let Some(message) = (*error).clone() {
                    <div class="form-error" role="alert">{ message }</div>
                }
                <div class="form-group">
                    <label for="full-name">{ "Full name" }</label>
                    <input type="text" id="full-name" ref={full_name_ref} placeholder="Jane Doe" />
                </div>
                <div class="form-group">
                    <label for="email">{ "Work email" }</label>
                    <input type="email" id="email" ref={email_ref} placeholder="you@company.com" />
                </div>
                <div class="form-group">
                    <label for="password">{ "Password" }</label>
                    <input type="password" id="password" ref={password_ref} />
                </div>
                <div class="form-group">
                    <label for="confirm-password">{ "Confirm password" }</label>
                    <input type="password" id="confirm-password" ref={confirm_ref} />
                </div>
                <button type="submit" class="btn-primary btn-block">{ "Create Account" }</button>
                <p class="auth-switch">
                    { "Already have an account? " }
                    <Link<AppRoute> to={AppRoute::Login}>{ "Sign in" }</Link<AppRoute>>
                </p>
            </form>
        </AuthenticationLayout>
    }
}
