use crate::models::dashboard::{Dashboard, DashboardAction};
use crate::models::view_state::ViewState;
use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use yew::prelude::*;

/// View encoded in the current URL fragment, defaults when absent.
pub fn read_hash() -> ViewState {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| ViewState::from_hash(&hash))
        .unwrap_or_default()
}

fn write_hash(view: &ViewState) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let location = window.location();
    let hash = view.to_hash();
    if location.hash()? != hash {
        location.set_hash(&hash)?;
    }
    Ok(())
}

/// Mirrors the dashboard view into the URL fragment and restores it on
/// `hashchange`. Our own writes decode to the current view and are ignored.
#[hook]
pub fn use_hash_sync(dashboard: &UseReducerHandle<Dashboard>) {
    {
        let view = dashboard.view();
        let ready = dashboard.is_ready();

        use_effect_with((view, ready), |(view, ready)| {
            if *ready {
                if let Err(e) = write_hash(view) {
                    gloo::console::warn!(format!("Failed to update hash: {e:?}"));
                }
            }
        });
    }

    {
        let dispatcher = dashboard.dispatcher();

        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "hashchange", move |_| {
                    dispatcher.dispatch(DashboardAction::Restore(read_hash()));
                })
            });

            move || drop(listener)
        });
    }
}
