mod utils;

pub mod animator;
pub mod color;
pub mod config;
pub mod cursor;
pub mod field;
pub mod hero;
pub mod navigation;
pub mod particle;
pub mod renderer;
pub mod reveal;
pub mod scroll;
pub mod surface;
pub mod typewriter;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub use hero::AnimationHandle;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// One independent piece of page behaviour, hooked up once on load.
pub type Wiring = fn(&Window, &Document) -> Result<(), JsValue>;

pub const PAGE_WIRING: &[(&str, Wiring)] = &[
    ("mobile menu", navigation::wire_mobile_menu),
    ("anchor links", navigation::wire_anchor_links),
    ("back to top", navigation::wire_back_to_top),
    ("nav highlight", navigation::wire_nav_highlight),
    ("scroll chrome", scroll::wire_scroll_chrome),
    ("reveal", reveal::wire_reveal),
    ("timeline", reveal::wire_timeline),
    ("certifications", reveal::reveal_certifications),
    ("cursor", cursor::wire_cursor),
    ("hero typing", typewriter::start_hero_typing),
];

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// Hero particle field only. Inert handle when there is no window, document
/// or canvas.
#[wasm_bindgen]
pub fn start_hero_particles() -> Result<AnimationHandle, JsValue> {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return Ok(AnimationHandle::inert()),
    };
    match window.document() {
        Some(document) => hero::attach(&window, &document),
        None => Ok(AnimationHandle::inert()),
    }
}

/// Runs each wiring step, then starts the particle field. A step that fails
/// is logged and skipped; it never keeps the others from running.
pub fn start_with(wiring: &[(&str, Wiring)]) -> Result<AnimationHandle, JsValue> {
    initialize();
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            for &(name, wire) in wiring {
                if let Err(err) = wire(&window, &document) {
                    crate::log!("{} not wired: {:?}", name, err);
                }
            }
        }
    }
    start_hero_particles()
}

/// Everything the page script does, meant to be called once the DOM is loaded.
#[wasm_bindgen]
pub fn start() -> Result<AnimationHandle, JsValue> {
    start_with(PAGE_WIRING)
}
