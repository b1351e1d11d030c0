use yew::prelude::*;

use crate::models::TrendingProduct;

#[derive(Properties, PartialEq)]
pub struct TrendingProductsChartProps {
    pub products: Vec<TrendingProduct>,
}

/// Barras horizontales proporcionales al mayor volumen
#[function_component(TrendingProductsChart)]
pub fn trending_products_chart(props: &TrendingProductsChartProps) -> Html {
    let max = props.products.iter().map(|p| p.volume_billions).fold(0.0_f64, f64::max);

    html! {
        <div class="card trending-products">
            <h3 class="card-heading">{ "Trending Products" }</h3>
            <ul class="bar-chart">
                { for props.products.iter().map(|product| {
                    let width = if max > 0.0 { product.volume_billions / max * 100.0 } else { 0.0 };
                    let growth = if product.growth_pct >= 0.0 { "change-positive" } else { "change-negative" };
                    html! {
                        <li class="bar-row">
                            <div class="bar-label">
                                <span>{ product.name.clone() }</span>
                                <span class="muted">{ format!("HS {}", product.hs_code) }</span>
                            </div>
                            <div class="bar-track">
                                <div class="bar-fill" style={format!("width: {:.1}%", width)} />
                            </div>
                            <div class="bar-values">
                                <span>{ format!("${:.1}B", product.volume_billions) }</span>
                                <span class={growth}>{ format!("{:+.1}%", product.growth_pct) }</span>
                            </div>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}
