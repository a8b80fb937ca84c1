// The set of particles for one canvas, plus the rules that seed it from the
// surface area and link nearby pairs with fading lines.

use crate::config::{
    AREA_PER_PARTICLE, LINK_COLOR, LINK_DISTANCE_DIVISOR, LINK_FADE_FACTOR, LINK_MAX_OPACITY,
    LINK_WIDTH, MIN_PARTICLES, PARTICLE_ALPHA, PARTICLE_COLOR,
};
use crate::particle::Particle;
use crate::renderer::Renderer;
use crate::surface::SurfaceSize;
use rand::Rng;
use vecmath::{vec2_square_len, vec2_sub};

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    surface: SurfaceSize,
    particles: Vec<Particle>,
}

/// Density formula: one particle per 9000 square pixels, never fewer than 20.
pub fn particle_count_for(surface: SurfaceSize) -> usize {
    MIN_PARTICLES.max((surface.area() / AREA_PER_PARTICLE) as usize)
}

/// Squared distance under which two particles get linked.
pub fn link_threshold_sq(surface: SurfaceSize) -> f64 {
    let threshold = surface.width as f64 / LINK_DISTANCE_DIVISOR;
    threshold * threshold
}

/// Line opacity for a pair at squared distance `dist_sq`. Zero at or past the
/// threshold, otherwise fades linearly in `dist_sq` without ever reaching
/// zero inside it. Not capped; see `LINK_MAX_OPACITY`.
pub fn link_opacity(dist_sq: f64, threshold_sq: f64) -> f64 {
    if dist_sq < threshold_sq {
        1.0 - dist_sq / (threshold_sq * LINK_FADE_FACTOR)
    } else {
        0.0
    }
}

impl ParticleField {
    pub fn new(surface: SurfaceSize) -> Self {
        ParticleField {
            surface,
            particles: Vec::new(),
        }
    }

    pub fn with_particles(surface: SurfaceSize, particles: Vec<Particle>) -> Self {
        ParticleField { surface, particles }
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    // Takes effect for bounds and links right away; the particles themselves
    // are only replaced by the next populate().
    pub fn set_surface(&mut self, surface: SurfaceSize) {
        self.surface = surface;
    }

    /// Throws the current particles away and seeds a fresh batch sized for the surface.
    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let count = particle_count_for(self.surface);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::spawn(rng, self.surface));
        }
        self.particles = particles;
    }

    pub fn advance_frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        let fill = PARTICLE_COLOR.rgba(PARTICLE_ALPHA);
        for particle in &mut self.particles {
            particle.update(self.surface);
            particle.draw(renderer, &fill);
        }
    }

    pub fn connect_particles<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let threshold_sq = link_threshold_sq(self.surface);
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dist_sq = vec2_square_len(vec2_sub(a.pos, b.pos));
                let opacity = link_opacity(dist_sq, threshold_sq);
                if opacity > 0.0 {
                    let color = LINK_COLOR.rgba(opacity.min(LINK_MAX_OPACITY));
                    renderer.stroke_line(a.pos, b.pos, LINK_WIDTH, &color);
                }
            }
        }
    }

    pub fn render_frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        renderer.clear(self.surface.width as f64, self.surface.height as f64);
        self.advance_frame(renderer);
        self.connect_particles(renderer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{Op, Recorder};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field_of(width: u32, height: u32, positions: &[[f64; 2]]) -> ParticleField {
        let particles = positions
            .iter()
            .map(|p| Particle::new(p[0], p[1], 0.0, 0.0, 1.0))
            .collect();
        ParticleField::with_particles(SurfaceSize::new(width, height), particles)
    }

    #[test]
    fn count_follows_density_formula() {
        assert_eq!(particle_count_for(SurfaceSize::new(300, 300)), 20);
        assert_eq!(particle_count_for(SurfaceSize::new(1000, 900)), 100);
        assert_eq!(particle_count_for(SurfaceSize::new(0, 0)), 20);
        assert_eq!(particle_count_for(SurfaceSize::new(1920, 1080)), 230);
    }

    #[test]
    fn populate_produces_density_count() {
        let mut rng = StdRng::seed_from_u64(42);
        for &(w, h) in &[(300, 300), (1000, 900), (1200, 800), (37, 11)] {
            let size = SurfaceSize::new(w, h);
            let mut field = ParticleField::new(size);
            field.populate(&mut rng);
            let expected = 20usize.max((w as u64 * h as u64 / 9000) as usize);
            assert_eq!(field.len(), expected);
        }
    }

    #[test]
    fn populate_twice_keeps_count() {
        let size = SurfaceSize::new(1200, 800);
        let mut field = ParticleField::new(size);
        field.populate(&mut StdRng::seed_from_u64(1));
        let first = field.particles().to_vec();
        field.populate(&mut StdRng::seed_from_u64(2));
        assert_eq!(field.len(), first.len());
        assert_ne!(field.particles(), &first[..]);
    }

    #[test]
    fn populate_is_reproducible_with_same_seed() {
        let size = SurfaceSize::new(640, 480);
        let mut a = ParticleField::new(size);
        let mut b = ParticleField::new(size);
        a.populate(&mut StdRng::seed_from_u64(9));
        b.populate(&mut StdRng::seed_from_u64(9));
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn resize_recomputes_count_from_new_area() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ParticleField::new(SurfaceSize::new(1200, 800));
        field.populate(&mut rng);
        assert_eq!(field.len(), 106);

        field.set_surface(SurfaceSize::new(400, 300));
        field.populate(&mut rng);
        assert_eq!(field.len(), 20);
        for p in field.particles() {
            assert!(p.pos[0] <= 400.0 && p.pos[1] <= 300.0);
        }
    }

    #[test]
    fn particles_stay_within_one_step_of_bounds() {
        let size = SurfaceSize::new(320, 180);
        let mut field = ParticleField::new(size);
        field.populate(&mut StdRng::seed_from_u64(11));
        let mut recorder = Recorder::default();
        for _ in 0..5000 {
            field.advance_frame(&mut recorder);
            recorder.ops.clear();
            for p in field.particles() {
                let tol = p.vel[0].abs().max(p.vel[1].abs()) + 1e-9;
                assert!(p.pos[0] >= -tol && p.pos[0] <= 320.0 + tol, "x = {}", p.pos[0]);
                assert!(p.pos[1] >= -tol && p.pos[1] <= 180.0 + tol, "y = {}", p.pos[1]);
            }
        }
    }

    #[test]
    fn advance_draws_each_particle_at_new_position() {
        let mut field = ParticleField::with_particles(
            SurfaceSize::new(100, 100),
            vec![
                Particle::new(10.0, 10.0, 0.25, 0.0, 1.5),
                Particle::new(50.0, 50.0, 0.0, -0.25, 2.5),
            ],
        );
        let mut recorder = Recorder::default();
        field.advance_frame(&mut recorder);
        let fill = "rgba(99,102,241,0.5)".to_owned();
        assert_eq!(
            recorder.ops,
            vec![
                Op::Circle { center: [10.25, 10.0], radius: 1.5, color: fill.clone() },
                Op::Circle { center: [50.0, 49.75], radius: 2.5, color: fill },
            ]
        );
    }

    #[test]
    fn no_line_at_exact_threshold() {
        // width 700 gives a 100px threshold
        let field = field_of(700, 400, &[[0.0, 0.0], [100.0, 0.0]]);
        let mut recorder = Recorder::default();
        field.connect_particles(&mut recorder);
        assert!(recorder.ops.is_empty());
        assert_eq!(link_opacity(10_000.0, link_threshold_sq(field.surface())), 0.0);
    }

    #[test]
    fn no_line_past_threshold() {
        // 80,80 is ~113px away, just outside
        let field = field_of(700, 400, &[[0.0, 0.0], [80.0, 80.0], [300.0, 300.0]]);
        let mut recorder = Recorder::default();
        field.connect_particles(&mut recorder);
        assert!(recorder.ops.is_empty());
    }

    #[test]
    fn near_pair_gets_faded_line() {
        let field = field_of(700, 400, &[[0.0, 0.0], [50.0, 0.0]]);
        let mut recorder = Recorder::default();
        field.connect_particles(&mut recorder);
        let expected = 1.0 - 2500.0 / (10_000.0 * 1.2);
        assert_eq!(
            recorder.ops,
            vec![Op::Line {
                from: [0.0, 0.0],
                to: [50.0, 0.0],
                width: 1.0,
                color: format!("rgba(129,140,248,{})", expected),
            }]
        );
    }

    #[test]
    fn very_close_pair_is_capped() {
        let field = field_of(700, 400, &[[0.0, 0.0], [3.0, 4.0]]);
        let mut recorder = Recorder::default();
        field.connect_particles(&mut recorder);
        match &recorder.ops[..] {
            [Op::Line { color, .. }] => assert_eq!(color, "rgba(129,140,248,0.9)"),
            other => panic!("unexpected ops: {:?}", other),
        }
    }

    #[test]
    fn each_pair_linked_once() {
        let field = field_of(700, 400, &[[0.0, 0.0], [10.0, 0.0], [0.0, 10.0], [10.0, 10.0]]);
        let mut recorder = Recorder::default();
        field.connect_particles(&mut recorder);
        assert_eq!(recorder.lines().len(), 6);
    }

    #[test]
    fn opacity_decreases_with_distance() {
        let threshold_sq = link_threshold_sq(SurfaceSize::new(700, 400));
        let mut last = f64::INFINITY;
        for d in 0..=110 {
            let d = d as f64;
            let opacity = link_opacity(d * d, threshold_sq);
            assert!(opacity <= last, "opacity rose at distance {}", d);
            last = opacity;
        }
        assert!(link_opacity(threshold_sq, threshold_sq) <= 0.0);
    }

    #[test]
    fn zero_width_surface_draws_no_lines() {
        let field = field_of(0, 400, &[[0.0, 0.0], [0.0, 0.0]]);
        let mut recorder = Recorder::default();
        field.connect_particles(&mut recorder);
        assert!(recorder.ops.is_empty());
    }

    #[test]
    fn render_frame_clears_then_draws_then_links() {
        let mut field = field_of(700, 400, &[[10.0, 10.0], [20.0, 10.0]]);
        let mut recorder = Recorder::default();
        field.render_frame(&mut recorder);
        assert_eq!(recorder.ops[0], Op::Clear { width: 700.0, height: 400.0 });
        assert!(matches!(recorder.ops[1], Op::Circle { .. }));
        assert!(matches!(recorder.ops[2], Op::Circle { .. }));
        assert!(matches!(recorder.ops[3], Op::Line { .. }));
        assert_eq!(recorder.ops.len(), 4);
        assert_eq!(recorder.circles().len(), 2);
    }
}
