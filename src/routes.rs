use yew::prelude::*;
use yew_router::prelude::*;

use crate::views::auth::{LoginView, RegisterView};
use crate::views::dashboard::DashboardView;
use crate::views::not_found::NotFoundView;
use crate::views::search_view::GlobalTradeSearchView;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum AppRoute {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/global-trade-search")]
    GlobalTradeSearch,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: AppRoute) -> Html {
    match route {
        AppRoute::Home => html! { <Redirect<AppRoute> to={AppRoute::Dashboard} /> },
        AppRoute::Dashboard => html! { <DashboardView /> },
        AppRoute::GlobalTradeSearch => html! { <GlobalTradeSearchView /> },
        AppRoute::Login => html! { <LoginView /> },
        AppRoute::Register => html! { <RegisterView /> },
        AppRoute::NotFound => html! { <NotFoundView /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::{HOME_ROUTE, LOGIN_ROUTE, REGISTER_ROUTE, SEARCH_ROUTE};

    #[test]
    fn route_paths_match_navigation_constants() {
        assert_eq!(AppRoute::Dashboard.to_path(), HOME_ROUTE);
        assert_eq!(AppRoute::GlobalTradeSearch.to_path(), SEARCH_ROUTE);
        assert_eq!(AppRoute::Login.to_path(), LOGIN_ROUTE);
        assert_eq!(AppRoute::Register.to_path(), REGISTER_ROUTE);
    }

    #[test]
    fn recognizes_known_paths() {
        assert_eq!(AppRoute::recognize("/dashboard"), Some(AppRoute::Dashboard));
        assert_eq!(AppRoute::recognize("/login"), Some(AppRoute::Login));
        assert_eq!(AppRoute::not_found_route(), Some(AppRoute::NotFound));
    }
}
