use yew::prelude::*;

use crate::models::{ChangeType, TradeMetric};
use crate::views::shared::Icon;

#[derive(Properties, PartialEq)]
pub struct TradeVolumeCardProps {
    pub metric: TradeMetric,
}

#[function_component(TradeVolumeCard)]
pub fn trade_volume_card(props: &TradeVolumeCardProps) -> Html {
    let metric = &props.metric;
    let trend = match metric.change_type {
        ChangeType::Positive => "change-positive",
        ChangeType::Negative => "change-negative",
    };

    html! {
        <div class="card trade-volume-card">
            <div class="card-top">
                <span class={classes!("card-icon", metric.color.clone())}>
                    <Icon name={metric.icon.clone()} />
                </span>
                <span class={classes!("card-change", trend)}>{ metric.change.clone() }</span>
            </div>
            <div class="card-value">{ metric.value.clone() }</div>
            <div class="card-title">{ metric.title.clone() }</div>
        </div>
    }
}
