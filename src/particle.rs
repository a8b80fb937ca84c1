// Simple particle struct to keep track of individual position, velocity, and size

use crate::config::{MAX_PARTICLE_SIZE, MAX_PARTICLE_SPEED, MIN_PARTICLE_SIZE};
use crate::renderer::Renderer;
use crate::surface::SurfaceSize;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub size: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, size: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            size,
        }
    }

    /// Random particle fully inside the surface. Draws size, x, y, then the two
    /// velocity components, in that order.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, surface: SurfaceSize) -> Particle {
        let size = rng.gen::<f64>() * (MAX_PARTICLE_SIZE - MIN_PARTICLE_SIZE) + MIN_PARTICLE_SIZE;
        let pos_x = inset(rng, surface.width as f64, size * 2.0);
        let pos_y = inset(rng, surface.height as f64, size * 2.0);
        let vel_x = rng.gen::<f64>() * MAX_PARTICLE_SPEED * 2.0 - MAX_PARTICLE_SPEED;
        let vel_y = rng.gen::<f64>() * MAX_PARTICLE_SPEED * 2.0 - MAX_PARTICLE_SPEED;
        Particle::new(pos_x, pos_y, vel_x, vel_y, size)
    }

    // The bounce test runs before moving, so a particle that just crossed an
    // edge is drawn outside once and heads back in on the next frame.
    pub fn update(&mut self, surface: SurfaceSize) {
        let bounds = [surface.width as f64, surface.height as f64];
        for axis in 0..2 {
            if self.pos[axis] > bounds[axis] || self.pos[axis] < 0.0 {
                self.vel[axis] = -self.vel[axis];
            }
            self.pos[axis] += self.vel[axis];
        }
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, color: &str) {
        renderer.fill_circle(self.pos, self.size, color);
    }
}

// Uniform in [margin, extent - margin], or the middle of the axis when the
// surface is too small to fit the margin on both sides.
fn inset<R: Rng + ?Sized>(rng: &mut R, extent: f64, margin: f64) -> f64 {
    let span = extent - margin * 2.0;
    if span > 0.0 {
        rng.gen::<f64>() * span + margin
    } else {
        // still consume a draw so every particle takes five
        rng.gen::<f64>();
        extent / 2.0
    }
}
