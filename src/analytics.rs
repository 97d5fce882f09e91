use std::cell::Cell;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = umami, js_name = track)]
    fn umami_track(event: &str);
}

pub const MENU_OPENED: &str = "menu-opened";
pub const JOIN_SUBMITTED: &str = "join-submitted";

thread_local! {
    static MENU_OPEN_TRACKED: Cell<bool> = const { Cell::new(false) };
}

/// Send a named event to Umami.
/// Does nothing if the Umami script is missing (blocked, or not configured in `index.html`).
/// Only event names are sent, never form contents.
pub fn track_event(event: &str) {
    let loaded = js_sys::eval("typeof umami !== 'undefined'")
        .ok()
        .and_then(|val| val.as_bool())
        .unwrap_or(false);
    if loaded {
        umami_track(event);
    }
}

/// Track the first time the mobile menu is opened on this page load.
pub fn track_menu_opened() {
    MENU_OPEN_TRACKED.with(|tracked| {
        if !tracked.get() {
            tracked.set(true);
            track_event(MENU_OPENED);
        }
    });
}
