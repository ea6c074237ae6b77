//! Best-effort bridge to an external list-animation utility.
//!
//! The host may load a module script that installs `window.autoAnimate`
//! (for example `@formkit/auto-animate`). Once a container mounts, the hook is
//! invoked with its element and takes over insert/remove/reorder transitions.
//! When the hook is missing, or during SSR and tests, nothing happens; view
//! state never depends on it.

use leptos::html;
use leptos::prelude::*;

/// Name of the global function looked up on `window`.
pub const GLOBAL_HOOK: &str = "autoAnimate";

#[cfg(feature = "hydrate")]
const ATTACHED_ATTR: &str = "data-auto-animate";

/// Create a container ref that is handed to the animation hook after mount.
pub fn use_auto_animate() -> NodeRef<html::Div> {
    let node = NodeRef::<html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };
            attach(&el);
        });
    }

    node
}

#[cfg(feature = "hydrate")]
fn attach(el: &web_sys::HtmlElement) {
    use wasm_bindgen::JsCast as _;

    if el.has_attribute(ATTACHED_ATTR) {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let hook = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(GLOBAL_HOOK)).ok();
    let Some(hook) = hook.as_ref().and_then(|h| h.dyn_ref::<js_sys::Function>()) else {
        log::debug!("window.{GLOBAL_HOOK} not installed; skipping container animation");
        return;
    };
    match hook.call1(&wasm_bindgen::JsValue::NULL, el) {
        Ok(_) => {
            let _ = el.set_attribute(ATTACHED_ATTR, "on");
        }
        Err(e) => log::warn!("window.{GLOBAL_HOOK} failed: {e:?}"),
    }
}
