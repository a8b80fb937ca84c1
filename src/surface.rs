// Canvas pixel dimensions, measured from the element's layout box so that
// drawing coordinates line up with CSS pixels regardless of scroll position.

use web_sys::{HtmlCanvasElement, Window};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        SurfaceSize { width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Picks the first non-zero extent out of the element's client size, its
/// offset size and the viewport size. Zero if all three are empty.
pub fn resolve_extent(client: i32, offset: i32, viewport: f64) -> u32 {
    if client > 0 {
        client as u32
    } else if offset > 0 {
        offset as u32
    } else if viewport >= 1.0 {
        viewport as u32
    } else {
        0
    }
}

pub fn measure(canvas: &HtmlCanvasElement, window: &Window) -> SurfaceSize {
    let viewport = |dim: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        dim.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    let width = resolve_extent(
        canvas.client_width(),
        canvas.offset_width(),
        viewport(window.inner_width()),
    );
    let height = resolve_extent(
        canvas.client_height(),
        canvas.offset_height(),
        viewport(window.inner_height()),
    );
    SurfaceSize { width, height }
}

// Resizing the backing buffer also wipes whatever was drawn on it.
pub fn apply(canvas: &HtmlCanvasElement, size: SurfaceSize) {
    canvas.set_width(size.width);
    canvas.set_height(size.height);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_size_wins() {
        assert_eq!(resolve_extent(640, 800, 1024.0), 640);
    }

    #[test]
    fn falls_back_to_offset_then_viewport() {
        assert_eq!(resolve_extent(0, 800, 1024.0), 800);
        assert_eq!(resolve_extent(0, 0, 1024.0), 1024);
        assert_eq!(resolve_extent(0, 0, 0.0), 0);
    }

    #[test]
    fn area_does_not_overflow_u32() {
        let size = SurfaceSize::new(100_000, 100_000);
        assert_eq!(size.area(), 10_000_000_000);
    }
}
