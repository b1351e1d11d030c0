use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_document_title;
use crate::routes::AppRoute;
use crate::views::shared::MainHeader;

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    use_document_title("Page Not Found");

    html! {
        <div class="page">
            <MainHeader />
            <main class="page-main not-found">
                <h1>{ "404" }</h1>
                <p class="muted">{ "The page you are looking for does not exist." }</p>
                <Link<AppRoute> to={AppRoute::Dashboard} classes={classes!("btn-primary")}>{ "Back to Dashboard" }</Link<AppRoute>>
            </main>
        </div>
    }
}
