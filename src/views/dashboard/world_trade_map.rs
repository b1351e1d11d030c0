use yew::prelude::*;

use crate::models::TradeRoute;
use crate::views::shared::Icon;

#[derive(Properties, PartialEq)]
pub struct WorldTradeMapProps {
    pub routes: Vec<TradeRoute>,
}

#[function_component(WorldTradeMap)]
pub fn world_trade_map(props: &WorldTradeMapProps) -> Html {
    html! {
        <div class="card world-trade-map">
            <h3 class="card-heading"><Icon name="Globe" />{ " Major Trade Routes" }</h3>
            if props.routes.is_empty() {
                <p class="muted">{ "No routes for the selected filters" }</p>
            } else {
                <table class="routes-table">
                    <thead>
                        <tr>
                            <th>{ "Origin" }</th>
                            <th>{ "Destination" }</th>
                            <th>{ "Region" }</th>
                            <th class="numeric">{ "Volume" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for props.routes.iter().map(|route| html! {
                            <tr>
                                <td>{ route.origin.clone() }</td>
                                <td>{ route.destination.clone() }</td>
                                <td>{ route.region.clone() }</td>
                                <td class="numeric">{ format!("${:.1}B", route.volume_billions) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}
