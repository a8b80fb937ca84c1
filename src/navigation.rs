// In-page navigation: mobile menu, smooth anchor scrolling, back-to-top and
// highlighting the nav link of the section in view.

use crate::config::{
    ACTIVE_CLASS, ANCHOR_LINK_SELECTOR, BACK_TO_TOP_ID, HIDDEN_CLASS, MOBILE_MENU_BUTTON_ID,
    MOBILE_MENU_ID, NAV_LINK_SELECTOR, NAV_ROOT_MARGIN, SECTION_SELECTOR,
};
use crate::reveal::observe_all;
use crate::utils::{js_object, select_all};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, IntersectionObserverInit, ScrollIntoViewOptions, ScrollToOptions,
    Window,
};

/// What a click on an in-page link should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorClick<'a> {
    /// Selector of the section to scroll to.
    pub target: &'a str,
    pub close_menu: bool,
}

impl<'a> AnchorClick<'a> {
    /// None for a bare `#` or a link that leaves the page; those keep the
    /// browser's default behaviour.
    pub fn resolve(href: &'a str, menu_open: bool) -> Option<Self> {
        if href.len() > 1 && href.starts_with('#') {
            Some(AnchorClick {
                target: href,
                close_menu: menu_open,
            })
        } else {
            None
        }
    }
}

/// Whether a nav link with `href` points at the section `section_id`.
pub fn links_to(href: &str, section_id: &str) -> bool {
    href.get(1..).map_or(false, |id| id == section_id)
}

fn smooth_behavior() -> (&'static str, JsValue) {
    ("behavior", JsValue::from_str("smooth"))
}

pub fn wire_mobile_menu(_window: &Window, document: &Document) -> Result<(), JsValue> {
    let (button, menu) = match (
        document.get_element_by_id(MOBILE_MENU_BUTTON_ID),
        document.get_element_by_id(MOBILE_MENU_ID),
    ) {
        (Some(button), Some(menu)) => (button, menu),
        _ => return Ok(()),
    };
    let on_click = Closure::wrap(Box::new(move || {
        let _ = menu.class_list().toggle(HIDDEN_CLASS);
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn follow_anchor(document: &Document, anchor: &Element, menu: Option<&Element>, event: &Event) {
    let href = anchor.get_attribute("href").unwrap_or_default();
    let menu_open = menu.map_or(false, |menu| !menu.class_list().contains(HIDDEN_CLASS));
    let click = match AnchorClick::resolve(&href, menu_open) {
        Some(click) => click,
        None => return,
    };
    event.prevent_default();
    if click.close_menu {
        if let Some(menu) = menu {
            let _ = menu.class_list().add_1(HIDDEN_CLASS);
        }
    }
    // Hrefs that are not valid selectors simply do not scroll
    if let Ok(Some(section)) = document.query_selector(click.target) {
        if let Ok(options) = js_object(&[smooth_behavior()]) {
            section.scroll_into_view_with_scroll_into_view_options(
                options.unchecked_ref::<ScrollIntoViewOptions>(),
            );
        }
    }
}

pub fn wire_anchor_links(_window: &Window, document: &Document) -> Result<(), JsValue> {
    let menu = document.get_element_by_id(MOBILE_MENU_ID);
    for anchor in select_all(document, ANCHOR_LINK_SELECTOR)? {
        let on_click = {
            let document = document.clone();
            let anchor = anchor.clone();
            let menu = menu.clone();
            Closure::wrap(Box::new(move |event: Event| {
                follow_anchor(&document, &anchor, menu.as_ref(), &event);
            }) as Box<dyn FnMut(Event)>)
        };
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

pub fn wire_back_to_top(window: &Window, document: &Document) -> Result<(), JsValue> {
    let button = match document.get_element_by_id(BACK_TO_TOP_ID) {
        Some(button) => button,
        None => return Ok(()),
    };
    let options: ScrollToOptions =
        js_object(&[smooth_behavior(), ("top", JsValue::from_f64(0.0))])?.unchecked_into();
    let win = window.clone();
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        win.scroll_to_with_scroll_to_options(&options);
    }) as Box<dyn FnMut(Event)>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// Marks the nav link of whichever section crosses the middle of the viewport.
pub fn wire_nav_highlight(_window: &Window, document: &Document) -> Result<(), JsValue> {
    let links = select_all(document, NAV_LINK_SELECTOR)?;
    let options: IntersectionObserverInit =
        js_object(&[("rootMargin", JsValue::from_str(NAV_ROOT_MARGIN))])?.unchecked_into();
    observe_all(document, SECTION_SELECTOR, &options, move |_, entry| {
        if !entry.is_intersecting() {
            return;
        }
        let section_id = entry.target().id();
        for link in &links {
            let href = link.get_attribute("href").unwrap_or_default();
            let _ = link
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, links_to(&href, &section_id));
        }
    })
}
