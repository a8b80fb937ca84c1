// Owner of the particle field for one canvas. Holds the renderer as an
// Option: without a drawing context every operation is a silent no-op, so a
// page without the hero canvas behaves exactly as if the animation was never
// there.

use crate::field::ParticleField;
use crate::renderer::Renderer;
use crate::surface::SurfaceSize;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;

pub struct ParticleAnimator<R> {
    renderer: Option<R>,
    field: ParticleField,
}

impl<R: Renderer> ParticleAnimator<R> {
    pub fn new(renderer: Option<R>) -> Self {
        ParticleAnimator {
            renderer,
            field: ParticleField::default(),
        }
    }

    pub fn with_field(renderer: Option<R>, field: ParticleField) -> Self {
        ParticleAnimator { renderer, field }
    }

    /// Drops the drawing context; from here on the animator is inert.
    pub fn detach(&mut self) -> Option<R> {
        self.renderer.take()
    }

    pub fn is_active(&self) -> bool {
        self.renderer.is_some()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    pub fn configure_surface(&mut self, surface: SurfaceSize) {
        if self.is_active() {
            self.field.set_surface(surface);
        }
    }

    pub fn populate<G: Rng + ?Sized>(&mut self, rng: &mut G) {
        if self.is_active() {
            self.field.populate(rng);
        }
    }

    /// New surface size: the old particles are dropped and a fresh set is
    /// seeded at the new density.
    pub fn resize<G: Rng + ?Sized>(&mut self, surface: SurfaceSize, rng: &mut G) {
        self.configure_surface(surface);
        self.populate(rng);
    }

    pub fn render_frame(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            self.field.render_frame(renderer);
        }
    }
}

/// Shared stop flag for a self re-arming frame loop.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}
