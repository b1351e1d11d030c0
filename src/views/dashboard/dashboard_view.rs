// ============================================================================
// DASHBOARD VIEW - Página principal de analítica
// ============================================================================

use yew::prelude::*;

use crate::hooks::{use_dashboard_refresh, use_document_title};
use crate::utils::format_last_updated;
use crate::views::dashboard::{AlertsFeed, FilterControls, TradeVolumeCard, TrendingProductsChart, WorldTradeMap};
use crate::views::shared::{Icon, LoadingOverlay, MainHeader};

#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    use_document_title("Dashboard");
    let dashboard = use_dashboard_refresh();

    let Some(state) = dashboard.state.clone() else {
        return html! {
            <div class="page">
                <MainHeader />
                <main class="page-main">
                    <LoadingOverlay message="Loading dashboard..." />
                </main>
            </div>
        };
    };
    let loading = state.refresh.is_loading();

    html! {
        <div class="page">
            <MainHeader />
            <main class="page-main">
                <div class="page-container">
                    <div class="page-header">
                        <div>
                            <nav class="breadcrumb">
                                <span>{ "Dashboard" }</span>
                                <Icon name="ChevronRight" />
                                <span class="current">{ "Overview" }</span>
                            </nav>
                            <h1>{ "Trade Analytics Dashboard" }</h1>
                            <p class="muted">{ "Real-time global trade intelligence and market insights" }</p>
                        </div>
                        <div class="page-actions">
                            <div class="last-updated">
                                <div class="muted">{ "Last updated" }</div>
                                <div class="timestamp">{ format_last_updated(state.refresh.last_updated) }</div>
                            </div>
                            <button class={classes!("btn-outline", "btn-sm", loading.then_some("is-loading"))} onclick={dashboard.refresh.clone()}>
                                <span class={classes!(loading.then_some("spin"))}><Icon name="RefreshCw" /></span>
                                <span>{ "Refresh" }</span>
                            </button>
                            <button class="btn-primary btn-sm">
                                <Icon name="Settings" />
                                <span>{ "Customize" }</span>
                            </button>
                        </div>
                    </div>

                    if let Some(error) = state.refresh.error() {
                        <div class="error-banner" role="alert">
                            <Icon name="AlertTriangle" />
                            <span>{ format!("Could not update dashboard: {}", error) }</span>
                            <button class="btn-ghost btn-sm" onclick={dashboard.dismiss_error.clone()}>{ "Dismiss" }</button>
                        </div>
                    }

                    <FilterControls filters={state.filters.clone()} on_change={dashboard.apply_filters.clone()} />

                    <div class="grid grid-cards">
                        { for state.snapshot.metrics.iter().map(|metric| html! {
                            <TradeVolumeCard metric={metric.clone()} />
                        }) }
                    </div>

                    <div class="grid grid-main">
                        <div class="span-2">
                            <WorldTradeMap routes={state.snapshot.routes.clone()} />
                        </div>
                        <div class="span-1">
                            <TrendingProductsChart products={state.snapshot.trending_products.clone()} />
                        </div>
                    </div>

                    <AlertsFeed alerts={state.snapshot.alerts.clone()} />
                </div>
            </main>
            if loading {
                <LoadingOverlay message="Updating dashboard data..." />
            }
        </div>
    }
}
