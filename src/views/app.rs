// ============================================================================
// APP VIEW - Raíz: router + sesión compartida + rutas
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::SessionProvider;
use crate::routes::{switch, AppRoute};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <Switch<AppRoute> render={switch} />
            </SessionProvider>
        </BrowserRouter>
    }
}
