// Scroll-into-view effects: delayed `.reveal` elements, alternating timeline
// items and the staggered certification boxes.

use crate::config::{
    ACTIVE_CLASS, CERTIFICATION_SELECTOR, CERTIFICATION_STAGGER_MS, REVEAL_SELECTOR,
    REVEAL_THRESHOLD, TIMELINE_SELECTOR, TIMELINE_THRESHOLD,
};
use crate::utils::{js_object, select_all, set_timeout};
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

/// Delay in ms from a `data-delay` attribute such as `"300ms"` or `"300"`.
/// Anything without leading digits counts as no delay.
pub fn reveal_delay_ms(data_delay: Option<&str>) -> i32 {
    let raw = match data_delay {
        Some(raw) => raw.replacen("ms", "", 1),
        None => return 0,
    };
    let raw = raw.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Classes for the `index`-th entry of an intersection batch; every other
/// item swings in from the right.
pub fn timeline_classes(index: usize) -> &'static [&'static str] {
    const LEFT: &[&str] = &[ACTIVE_CLASS];
    const RIGHT: &[&str] = &["right", ACTIVE_CLASS];
    if index % 2 != 0 {
        RIGHT
    } else {
        LEFT
    }
}

pub fn stagger_delay_ms(index: usize) -> i32 {
    index as i32 * CERTIFICATION_STAGGER_MS
}

fn threshold(ratio: f64) -> Result<IntersectionObserverInit, JsValue> {
    Ok(js_object(&[("threshold", JsValue::from_f64(ratio))])?.unchecked_into())
}

/// Observes every element matching `selector`, handing each entry of a batch
/// to `on_entry` with its index in that batch. Pages without a match get no
/// observer at all.
pub(crate) fn observe_all<F>(
    document: &Document,
    selector: &str,
    options: &IntersectionObserverInit,
    mut on_entry: F,
) -> Result<(), JsValue>
where
    F: FnMut(usize, IntersectionObserverEntry) + 'static,
{
    let targets = select_all(document, selector)?;
    if targets.is_empty() {
        return Ok(());
    }
    let callback = Closure::wrap(Box::new(move |entries: Array| {
        for (index, entry) in entries.iter().enumerate() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                on_entry(index, entry);
            }
        }
    }) as Box<dyn FnMut(Array)>);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?;
    for target in &targets {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}

pub fn wire_reveal(window: &Window, document: &Document) -> Result<(), JsValue> {
    let window = window.clone();
    observe_all(document, REVEAL_SELECTOR, &threshold(REVEAL_THRESHOLD)?, move |_, entry| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        let delay = reveal_delay_ms(target.get_attribute("data-delay").as_deref());
        let _ = set_timeout(&window, delay, move || {
            let _ = target.class_list().add_1(ACTIVE_CLASS);
        });
    })
}

pub fn wire_timeline(_window: &Window, document: &Document) -> Result<(), JsValue> {
    observe_all(document, TIMELINE_SELECTOR, &threshold(TIMELINE_THRESHOLD)?, |index, entry| {
        if !entry.is_intersecting() {
            return;
        }
        let class_list = entry.target().class_list();
        for class in timeline_classes(index) {
            let _ = class_list.add_1(class);
        }
    })
}

/// Hides the certification boxes, then fades them up one after another.
pub fn reveal_certifications(window: &Window, document: &Document) -> Result<(), JsValue> {
    for (index, el) in select_all(document, CERTIFICATION_SELECTOR)?.into_iter().enumerate() {
        let el = match el.dyn_into::<HtmlElement>() {
            Ok(el) => el,
            Err(_) => continue,
        };
        let style = el.style();
        style.set_property("opacity", "0")?;
        style.set_property("transform", "translateY(50px)")?;
        set_timeout(window, stagger_delay_ms(index), move || {
            let style = el.style();
            let _ = style.set_property("transition", "all 0.8s ease");
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "translateY(0)");
        })?;
    }
    Ok(())
}
