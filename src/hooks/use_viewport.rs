use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::config::CONFIG;

/// Ancho actual del viewport (px CSS); fuera del navegador, el breakpoint de dos paneles
pub fn viewport_width() -> u32 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width.max(0.0) as u32)
        .unwrap_or(CONFIG.layout.two_pane_min_width)
}

/// Ancho del viewport, actualizado en cada `resize`
#[hook]
pub fn use_viewport_width() -> u32 {
    let width = use_state(viewport_width);

    {
        let width = width.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| {
                width.set(viewport_width());
            });
            let win = window();
            if let Some(win) = &win {
                if let Err(e) = win.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref()) {
                    log::warn!("⚠️ No se pudo escuchar resize: {:?}", e);
                }
            }
            move || {
                if let Some(win) = win {
                    if let Err(e) = win.remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref()) {
                        log::warn!("⚠️ No se pudo quitar el listener de resize: {:?}", e);
                    }
                }
                drop(listener);
            }
        });
    }

    *width
}
