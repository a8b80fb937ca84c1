// Drawing seam between the particle field and the 2d canvas context.
// The field only ever clears, fills circles and strokes straight lines, so
// that is all a renderer has to provide.

use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Renderer {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: &str);
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, color: &str);
}

impl Renderer for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: &str) {
        self.begin_path();
        // Only fails for a negative radius
        let _ = self.arc(center[0], center[1], radius, 0.0, PI * 2.0);
        #[allow(deprecated)]
        self.set_fill_style(&JsValue::from_str(color));
        self.fill();
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, color: &str) {
        #[allow(deprecated)]
        self.set_stroke_style(&JsValue::from_str(color));
        self.set_line_width(width);
        self.begin_path();
        self.move_to(from[0], from[1]);
        self.line_to(to[0], to[1]);
        self.stroke();
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::Renderer;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Op {
        Clear { width: f64, height: f64 },
        Circle { center: [f64; 2], radius: f64, color: String },
        Line { from: [f64; 2], to: [f64; 2], width: f64, color: String },
    }

    /// Keeps every draw call so tests can assert on what would have hit the canvas.
    #[derive(Default, Debug)]
    pub struct Recorder {
        pub ops: Vec<Op>,
    }

    impl Recorder {
        pub fn lines(&self) -> Vec<&Op> {
            self.ops.iter().filter(|op| matches!(op, Op::Line { .. })).collect()
        }

        pub fn circles(&self) -> Vec<&Op> {
            self.ops.iter().filter(|op| matches!(op, Op::Circle { .. })).collect()
        }
    }

    impl Renderer for Recorder {
        fn clear(&mut self, width: f64, height: f64) {
            self.ops.push(Op::Clear { width, height });
        }

        fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: &str) {
            self.ops.push(Op::Circle { center, radius, color: color.to_owned() });
        }

        fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, color: &str) {
            self.ops.push(Op::Line { from, to, width, color: color.to_owned() });
        }
    }

    // Lets a test keep reading the ops while something else owns the renderer
    impl<R: Renderer> Renderer for Rc<RefCell<R>> {
        fn clear(&mut self, width: f64, height: f64) {
            self.borrow_mut().clear(width, height);
        }

        fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: &str) {
            self.borrow_mut().fill_circle(center, radius, color);
        }

        fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, color: &str) {
            self.borrow_mut().stroke_line(from, to, width, color);
        }
    }
}
