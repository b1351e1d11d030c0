use chrono::Utc;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_document_title, use_session};
use crate::routes::AppRoute;
use crate::viewmodels::{demo_token, LoginForm};
use crate::views::shared::AuthenticationLayout;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    use_document_title("Sign In");
    let session = use_session();
    let navigator = use_navigator();
    let form = use_state(LoginForm::default);
    let error = use_state(|| None::<String>);

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm { email: input.value(), ..(*form).clone() });
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm { password: input.value(), ..(*form).clone() });
        })
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let state = session.state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Err(e) = form.validate() {
                error.set(Some(e.to_string()));
                return;
            }

            match state.login(&demo_token(&form.email, Utc::now())) {
                Ok(()) => {
                    error.set(None);
                    if let Some(navigator) = &navigator {
                        navigator.push(&AppRoute::Dashboard);
                    }
                }
                Err(e) => {
                    log::error!("❌ Login fallido: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        })
    };

    html! {
        <AuthenticationLayout title="Welcome back" subtitle={Some(AttrValue::from("Sign in to your TradeFlow Analytics account"))}>
            <form class="auth-form" onsubmit={on_submit}>
                if let Some(message) = (*error).clone() {
                    <div class="form-error" role="alert">{ message }</div>
                }
                <div class="form-group">
                    <label for="email">{ "Email" }</label>
                    <input
                        type="email"
                        id="email"
                        placeholder="analyst@tradeflow.com"
                        value={form.email.clone()}
                        oninput={on_email}
                    />
                </div>
                <div class="form-group">
                    <label for="password">{ "Password" }</label>
                    <input
                        type="password"
                        id="password"
                        placeholder="Enter your password"
                        value={form.password.clone()}
                        oninput={on_password}
                    />
                </div>
                <button type="submit" class="btn-primary btn-block">{ "Sign In" }</button>
                <p class="auth-switch">
                    { "Don't have an account? " }
                    <Link<AppRoute> to={AppRoute::Register}>{ "Create one" }</Link<AppRoute>>
                </p>
            </form>
        </AuthenticationLayout>
    }
}
