// Browser side of the hero particle field: finds the canvas, keeps its pixel
// buffer in step with its layout size and drives the animator from
// requestAnimationFrame until stopped.

use crate::animator::{CancelToken, ParticleAnimator};
use crate::config::HERO_CANVAS_ID;
use crate::surface;
use rand::rngs::ThreadRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct Hero {
    canvas: HtmlCanvasElement,
    window: Window,
    animator: ParticleAnimator<CanvasRenderingContext2d>,
    rng: ThreadRng,
}

impl Hero {
    fn configure_surface(&mut self) {
        let size = surface::measure(&self.canvas, &self.window);
        surface::apply(&self.canvas, size);
        self.animator.configure_surface(size);
    }

    fn reseed(&mut self) {
        self.configure_surface();
        self.animator.populate(&mut self.rng);
    }
}

struct Running {
    window: Window,
    hero: Rc<RefCell<Hero>>,
    cancel: CancelToken,
    frame_id: Rc<Cell<Option<i32>>>,
    frame: FrameCallback,
    on_resize: Closure<dyn FnMut()>,
}

/// Handle to a running hero animation. An inert handle (no canvas, no 2d
/// context) reports not running and ignores `stop`.
#[wasm_bindgen]
pub struct AnimationHandle {
    running: Option<Running>,
}

#[wasm_bindgen]
impl AnimationHandle {
    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .map_or(false, |running| !running.cancel.is_cancelled())
    }

    pub fn particle_count(&self) -> usize {
        self.running
            .as_ref()
            .map_or(0, |running| running.hero.borrow().animator.field().len())
    }

    /// Tears the loop down: no further frames, no resize handling. The last
    /// drawn frame stays on the canvas.
    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.cancel.cancel();
            if let Some(id) = running.frame_id.take() {
                let _ = running.window.cancel_animation_frame(id);
            }
            let _ = running.window.remove_event_listener_with_callback(
                "resize",
                running.on_resize.as_ref().unchecked_ref(),
            );
            // Breaks the closure's reference to itself
            running.frame.borrow_mut().take();
            running.hero.borrow_mut().animator.detach();
        }
    }
}

impl AnimationHandle {
    pub(crate) fn inert() -> Self {
        AnimationHandle { running: None }
    }
}

fn find_canvas(document: &Document) -> Option<HtmlCanvasElement> {
    document
        .get_element_by_id(HERO_CANVAS_ID)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn request_frame(window: &Window, frame: &FrameCallback) -> Result<i32, JsValue> {
    match frame.borrow().as_ref() {
        Some(callback) => window.request_animation_frame(callback.as_ref().unchecked_ref()),
        None => Err(JsValue::from_str("frame callback released")),
    }
}

/// Starts the particle field on `#hero-canvas`. A page without the canvas, or
/// a browser without a 2d context, gets an inert handle and no error.
pub fn attach(window: &Window, document: &Document) -> Result<AnimationHandle, JsValue> {
    let canvas = match find_canvas(document) {
        Some(canvas) => canvas,
        None => return Ok(AnimationHandle::inert()),
    };
    let animator = ParticleAnimator::new(context_2d(&canvas));
    if !animator.is_active() {
        return Ok(AnimationHandle::inert());
    }

    let hero = Rc::new(RefCell::new(Hero {
        canvas,
        window: window.clone(),
        animator,
        rng: rand::thread_rng(),
    }));
    hero.borrow_mut().reseed();

    let on_resize = {
        let hero = hero.clone();
        Closure::wrap(Box::new(move || {
            hero.borrow_mut().reseed();
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

    let cancel = CancelToken::new();
    let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    {
        let hero = hero.clone();
        let cancel = cancel.clone();
        let frame_id = frame_id.clone();
        let next = frame.clone();
        let window = window.clone();
        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if cancel.is_cancelled() {
                return;
            }
            frame_id.set(request_frame(&window, &next).ok());
            #[cfg(feature = "frame-timing")]
            let _timer = crate::utils::Timer::new("hero render_frame");
            hero.borrow_mut().animator.render_frame();
        }) as Box<dyn FnMut()>));
    }
    frame_id.set(Some(request_frame(window, &frame)?));

    {
        let hero = hero.borrow();
        let size = hero.animator.field().surface();
        crate::log!(
            "hero particles: {} on {}x{}",
            hero.animator.field().len(),
            size.width,
            size.height
        );
    }

    Ok(AnimationHandle {
        running: Some(Running {
            window: window.clone(),
            hero,
            cancel,
            frame_id,
            frame,
            on_resize,
        }),
    })
}
