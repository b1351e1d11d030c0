use yew::prelude::*;

use crate::views::shared::Icon;

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
    pub message: AttrValue,
}

/// Overlay semitransparente mientras hay una recarga en curso
#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    html! {
        <div class="loading-overlay">
            <div class="loading-card">
                <span class="spin"><Icon name="Loader2" /></span>
                <span>{ props.message.clone() }</span>
            </div>
        </div>
    }
}
