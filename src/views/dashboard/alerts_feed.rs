use yew::prelude::*;

use crate::models::{AlertSeverity, TradeAlert};
use crate::views::shared::Icon;

fn severity_class(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Info => "alert-info",
        AlertSeverity::Warning => "alert-warning",
        AlertSeverity::Critical => "alert-critical",
    }
}

fn relative_time(minutes_ago: u32) -> String {
    match minutes_ago {
        0 => "just now".to_string(),
        1..=59 => format!("{} min ago", minutes_ago),
        _ => format!("{} h ago", minutes_ago / 60),
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertsFeedProps {
    pub alerts: Vec<TradeAlert>,
}

#[function_component(AlertsFeed)]
pub fn alerts_feed(props: &AlertsFeedProps) -> Html {
    html! {
        <div class="card alerts-feed">
            <h3 class="card-heading">{ "Market Alerts" }</h3>
            <ul>
                { for props.alerts.iter().map(|alert| html! {
                    <li key={alert.id} class={classes!("alert-row", severity_class(alert.severity))}>
                        <Icon name={if alert.severity == AlertSeverity::Info { "Info" } else { "AlertTriangle" }} />
                        <div class="alert-body">
                            <div class="alert-title">{ alert.title.clone() }</div>
                            <div class="alert-message">{ alert.message.clone() }</div>
                        </div>
                        <div class="alert-meta">
                            <span>{ alert.region.clone() }</span>
                            <span class="muted">{ relative_time(alert.minutes_ago) }</span>
                        </div>
                    </li>
                }) }
            </ul>
        </div>
    }
}
