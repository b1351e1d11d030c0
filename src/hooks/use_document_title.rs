use yew::prelude::*;

use crate::utils::constants::APP_NAME;

/// Título de la pestaña: "<página> - TradeFlow Analytics"
#[hook]
pub fn use_document_title(page: &'static str) {
    use_effect_with(page, |page| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&format!("{} - {}", page, APP_NAME));
        }
        || ()
    });
}
