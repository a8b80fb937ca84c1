// Scroll-driven page chrome: header shadow, back-to-top visibility and the
// custom cursor, which is only shown above the end of the about section.

use crate::config::{
    ABOUT_SECTION_ID, BACK_TO_TOP_AFTER, BACK_TO_TOP_ID, CURSOR_DOT_SELECTOR,
    CURSOR_OUTLINE_SELECTOR, HEADER_ID, HEADER_SCROLLED_AFTER,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScrollState {
    pub header_scrolled: bool,
    pub back_to_top_visible: bool,
    /// None when the page has no custom cursor to manage.
    pub custom_cursor: Option<bool>,
}

impl ScrollState {
    pub fn evaluate(scroll_y: f64, about_bottom: Option<f64>) -> Self {
        ScrollState {
            header_scrolled: scroll_y > HEADER_SCROLLED_AFTER,
            back_to_top_visible: scroll_y > BACK_TO_TOP_AFTER,
            custom_cursor: about_bottom.map(|bottom| scroll_y <= bottom),
        }
    }
}

/// Body `cursor` value and dot/outline opacity for the custom cursor.
pub fn cursor_styles(custom_cursor: bool) -> (&'static str, &'static str) {
    if custom_cursor {
        ("none", "1")
    } else {
        ("default", "0")
    }
}

struct CustomCursor {
    body: HtmlElement,
    dot: HtmlElement,
    outline: HtmlElement,
    about: HtmlElement,
}

impl CustomCursor {
    fn find(document: &Document) -> Result<Option<Self>, JsValue> {
        let html = |el: Option<web_sys::Element>| el.and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let about = html(document.get_element_by_id(ABOUT_SECTION_ID));
        let dot = html(document.query_selector(CURSOR_DOT_SELECTOR)?);
        let outline = html(document.query_selector(CURSOR_OUTLINE_SELECTOR)?);
        Ok(match (document.body(), dot, outline, about) {
            (Some(body), Some(dot), Some(outline), Some(about)) => Some(CustomCursor {
                body,
                dot,
                outline,
                about,
            }),
            _ => None,
        })
    }

    fn about_bottom(&self) -> f64 {
        (self.about.offset_top() + self.about.offset_height()) as f64
    }

    fn show(&self, visible: bool) -> Result<(), JsValue> {
        let (cursor, opacity) = cursor_styles(visible);
        self.body.style().set_property("cursor", cursor)?;
        self.dot.style().set_property("opacity", opacity)?;
        self.outline.style().set_property("opacity", opacity)?;
        Ok(())
    }
}

pub fn wire_scroll_chrome(window: &Window, document: &Document) -> Result<(), JsValue> {
    let header = document.get_element_by_id(HEADER_ID);
    let back_to_top = document.get_element_by_id(BACK_TO_TOP_ID);
    let cursor = CustomCursor::find(document)?;

    let win = window.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let state = ScrollState::evaluate(scroll_y, cursor.as_ref().map(CustomCursor::about_bottom));
        if let Some(header) = &header {
            let _ = header
                .class_list()
                .toggle_with_force("header-scrolled", state.header_scrolled);
        }
        if let Some(button) = &back_to_top {
            let _ = button
                .class_list()
                .toggle_with_force("visible", state.back_to_top_visible);
        }
        if let (Some(cursor), Some(visible)) = (&cursor, state.custom_cursor) {
            let _ = cursor.show(visible);
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}
