// Custom cursor: the dot follows the mouse directly, the outline trails it
// with a short animation and grows over interactive elements.

use crate::config::{
    CURSOR_DOT_SELECTOR, CURSOR_INTERACT_CLASS, CURSOR_OUTLINE_LAG_MS, CURSOR_OUTLINE_SELECTOR,
    INTERACTIVE_SELECTOR,
};
use crate::utils::{js_object, select_all};
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyframeAnimationOptions, MouseEvent, Window};

/// CSS `left`/`top` for a pointer at client coordinates (x, y).
pub fn cursor_offsets(client_x: i32, client_y: i32) -> (String, String) {
    (format!("{}px", client_x), format!("{}px", client_y))
}

/// Whether the outline should be in its "interact" state after a hover event.
pub fn interact_state(event_type: &str) -> Option<bool> {
    match event_type {
        "mouseenter" => Some(true),
        "mouseleave" => Some(false),
        _ => None,
    }
}

fn html(el: Option<Element>) -> Option<HtmlElement> {
    el.and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn trail(outline: &HtmlElement, left: &str, top: &str, options: &KeyframeAnimationOptions) -> Result<(), JsValue> {
    let frame = js_object(&[("left", JsValue::from_str(left)), ("top", JsValue::from_str(top))])?;
    let frames = Array::of1(&frame);
    outline.animate_with_keyframe_animation_options(Some(&*frames), options);
    Ok(())
}

pub fn wire_cursor(window: &Window, document: &Document) -> Result<(), JsValue> {
    let (dot, outline) = match (
        html(document.query_selector(CURSOR_DOT_SELECTOR)?),
        html(document.query_selector(CURSOR_OUTLINE_SELECTOR)?),
    ) {
        (Some(dot), Some(outline)) => (dot, outline),
        _ => return Ok(()),
    };

    // The outline keeps its final keyframe so it rests under the pointer
    let options: KeyframeAnimationOptions = js_object(&[
        ("duration", JsValue::from_f64(CURSOR_OUTLINE_LAG_MS)),
        ("fill", JsValue::from_str("forwards")),
    ])?
    .unchecked_into();

    let on_move = {
        let outline = outline.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let (left, top) = cursor_offsets(event.client_x(), event.client_y());
            let style = dot.style();
            let _ = style.set_property("left", &left);
            let _ = style.set_property("top", &top);
            let _ = trail(&outline, &left, &top, &options);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let on_hover = Closure::wrap(Box::new(move |event: Event| {
        if let Some(interacting) = interact_state(&event.type_()) {
            let _ = outline
                .class_list()
                .toggle_with_force(CURSOR_INTERACT_CLASS, interacting);
        }
    }) as Box<dyn FnMut(Event)>);
    for el in select_all(document, INTERACTIVE_SELECTOR)? {
        el.add_event_listener_with_callback("mouseenter", on_hover.as_ref().unchecked_ref())?;
        el.add_event_listener_with_callback("mouseleave", on_hover.as_ref().unchecked_ref())?;
    }
    on_hover.forget();
    Ok(())
}
