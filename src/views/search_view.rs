use yew::prelude::*;

use crate::hooks::use_document_title;
use crate::views::shared::{Icon, MainHeader};

#[function_component(GlobalTradeSearchView)]
pub fn global_trade_search_view() -> Html {
    use_document_title("Global Trade Search");

    html! {
        <div class="page">
            <MainHeader />
            <main class="page-main">
                <div class="page-container">
                    <h1>{ "Global Trade Search" }</h1>
                    <p class="muted">{ "Search worldwide trade records by product, HS code, company or route." }</p>
                    <div class="search-box">
                        <Icon name="Search" />
                        <input type="search" placeholder="e.g. HS 8542 semiconductors" disabled=true />
                    </div>
                    <p class="muted">{ "Search is coming soon." }</p>
                </div>
            </main>
        </div>
    }
}
