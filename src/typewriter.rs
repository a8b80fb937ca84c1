// Character-at-a-time "typing" of the hero title and subtitle.

use crate::config::{
    HERO_SUBTITLE_ID, HERO_SUBTITLE_TEXT, HERO_TITLE_ID, HERO_TITLE_TEXT,
    SUBTITLE_TYPING_SPEED_MS, TITLE_TYPING_SPEED_MS, TYPING_CURSOR_CLASS, TYPING_START_DELAY_MS,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Typewriter {
            chars: text.chars().collect(),
            typed: 0,
        }
    }

    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.chars.get(self.typed).copied()?;
        self.typed += 1;
        Some(ch)
    }

    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }

    pub fn typed(&self) -> String {
        self.chars[..self.typed].iter().collect()
    }
}

struct TypingJob {
    window: Window,
    document: Document,
    element: Element,
    cursor: Element,
    writer: Typewriter,
    speed_ms: i32,
    on_done: Option<Box<dyn FnOnce()>>,
}

fn type_next(mut job: TypingJob) {
    match job.writer.next_char() {
        Some(ch) => {
            let text = job.document.create_text_node(&ch.to_string());
            let _ = job.element.insert_before(&text, Some(&*job.cursor));
            let window = job.window.clone();
            let speed_ms = job.speed_ms;
            let tick = Closure::once_into_js(move || type_next(job));
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(tick.unchecked_ref(), speed_ms);
        }
        None => {
            if let Some(on_done) = job.on_done.take() {
                on_done();
            }
        }
    }
}

/// Replaces the element's content with `text`, typed in front of a cursor
/// span. The first character lands immediately, the rest `speed_ms` apart,
/// and `on_done` runs one tick after the last.
pub fn type_into(
    window: &Window,
    document: &Document,
    element: &Element,
    text: &str,
    speed_ms: i32,
    on_done: Option<Box<dyn FnOnce()>>,
) -> Result<(), JsValue> {
    element.set_inner_html("");
    let cursor = document.create_element("span")?;
    cursor.set_class_name(TYPING_CURSOR_CLASS);
    element.append_child(&cursor)?;

    type_next(TypingJob {
        window: window.clone(),
        document: document.clone(),
        element: element.clone(),
        cursor,
        writer: Typewriter::new(text),
        speed_ms,
        on_done,
    });
    Ok(())
}

fn hide_cursor(element: &Element) -> Result<(), JsValue> {
    let selector = format!(".{}", TYPING_CURSOR_CLASS);
    if let Some(cursor) = element.query_selector(&selector)? {
        if let Ok(cursor) = cursor.dyn_into::<HtmlElement>() {
            let style = cursor.style();
            style.set_property("animation", "none")?;
            style.set_property("opacity", "0")?;
        }
    }
    Ok(())
}

/// Types the hero title, then the subtitle, after a short initial pause.
/// Does nothing unless both elements are on the page.
pub fn start_hero_typing(window: &Window, document: &Document) -> Result<(), JsValue> {
    let (title, subtitle) = match (
        document.get_element_by_id(HERO_TITLE_ID),
        document.get_element_by_id(HERO_SUBTITLE_ID),
    ) {
        (Some(title), Some(subtitle)) => (title, subtitle),
        _ => return Ok(()),
    };

    let w = window.clone();
    let d = document.clone();
    let begin = Closure::once_into_js(move || {
        let then_subtitle: Box<dyn FnOnce()> = {
            let (w, d, title) = (w.clone(), d.clone(), title.clone());
            Box::new(move || {
                let _ = hide_cursor(&title);
                let _ = type_into(&w, &d, &subtitle, HERO_SUBTITLE_TEXT, SUBTITLE_TYPING_SPEED_MS, None);
            })
        };
        let _ = type_into(&w, &d, &title, HERO_TITLE_TEXT, TITLE_TYPING_SPEED_MS, Some(then_subtitle));
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        begin.unchecked_ref(),
        TYPING_START_DELAY_MS,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_in_order_then_stops() {
        let mut writer = Typewriter::new("DEV");
        assert!(!writer.is_done());
        assert_eq!(writer.next_char(), Some('D'));
        assert_eq!(writer.next_char(), Some('E'));
        assert_eq!(writer.typed(), "DE");
        assert_eq!(writer.next_char(), Some('V'));
        assert!(writer.is_done());
        assert_eq!(writer.next_char(), None);
        assert_eq!(writer.typed(), "DEV");
    }

    #[test]
    fn steps_by_char_not_byte() {
        let mut writer = Typewriter::new("AI & ✨ML");
        let typed: String = std::iter::from_fn(|| writer.next_char()).collect();
        assert_eq!(typed, "AI & ✨ML");
        assert_eq!(writer.typed().chars().count(), 8);
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut writer = Typewriter::new("");
        assert!(writer.is_done());
        assert_eq!(writer.next_char(), None);
        assert_eq!(writer.typed(), "");
    }

    #[test]
    fn hero_texts_are_typed_fully() {
        for text in &[HERO_TITLE_TEXT, HERO_SUBTITLE_TEXT] {
            let mut writer = Typewriter::new(text);
            while writer.next_char().is_some() {}
            assert_eq!(writer.typed(), *text);
        }
    }
}
