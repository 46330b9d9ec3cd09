//! Confetti shown after a correct answer.
//!
//! Entirely cosmetic: the session never reads anything back from it.

use std::time::{Duration, Instant};

use rand::Rng;
use ratatui::style::Color;

/// Default lifetime of a celebration.
pub const DEFAULT_CELEBRATION: Duration = Duration::from_millis(2000);

const GLYPHS: [char; 6] = ['*', '+', '•', '✦', '·', '○'];
const COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
];
const MAX_PARTICLES: usize = 400;

/// Quadratic ease-out: `max(0, 1 - t²)` with `t` clamped to `[0, 1]`.
pub fn fade_opacity(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    (1.0 - t * t).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: u16,
    pub y: u16,
    pub glyph: char,
    pub color: Color,
    /// Drawn while the opacity is above this value.
    threshold: f64,
    /// Rows fallen over the whole celebration.
    fall: f64,
}

#[derive(Debug, Clone)]
pub struct Celebration {
    started: Instant,
    duration: Duration,
    viewport: (u16, u16),
    particles: Vec<Particle>,
    finished: bool,
}

impl Celebration {
    /// Scatter confetti over a `(width, height)` viewport.
    pub fn start<R: Rng + ?Sized>(
        viewport: (u16, u16),
        duration: Duration,
        now: Instant,
        rng: &mut R,
    ) -> Self {
        let (width, height) = viewport;
        let area = width as usize * height as usize;
        let count = (area / 12).min(MAX_PARTICLES);

        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen_range(0..width.max(1)),
                y: rng.gen_range(0..height.max(1) / 2 + 1),
                glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
                color: COLORS[rng.gen_range(0..COLORS.len())],
                threshold: rng.gen_range(0.0..1.0),
                fall: rng.gen_range(2.0..(height as f64 / 2.0).max(3.0)),
            })
            .collect();

        tracing::debug!("Celebration started with {} particles", count);

        Self {
            started: now,
            duration,
            viewport,
            particles,
            finished: false,
        }
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Elapsed share of the duration, clamped to `[0, 1]`.
    pub fn progress_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn opacity_at(&self, now: Instant) -> f64 {
        fade_opacity(self.progress_at(now))
    }

    /// Advance one frame. Returns whether the animation is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.progress_at(now) >= 1.0 {
            self.finished = true;
        }
        !self.finished
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Particles to draw at `now`, already moved by their fall.
    pub fn visible_particles(&self, now: Instant) -> impl Iterator<Item = Particle> + '_ {
        let progress = self.progress_at(now);
        let opacity = fade_opacity(progress);
        let height = self.viewport.1;

        self.particles
            .iter()
            .filter(move |p| !self.finished && p.threshold < opacity)
            .filter_map(move |p| {
                let y = p.y as f64 + p.fall * progress;
                (y < height as f64).then(|| Particle { y: y as u16, ..*p })
            })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn celebration(now: Instant) -> Celebration {
        let mut rng = StdRng::seed_from_u64(1);
        Celebration::start((80, 24), DEFAULT_CELEBRATION, now, &mut rng)
    }

    #[test]
    fn test_fade_curve() {
        assert_eq!(fade_opacity(0.0), 1.0);
        assert!((fade_opacity(0.5) - 0.75).abs() < 1e-9);
        assert_eq!(fade_opacity(1.0), 0.0);
        assert_eq!(fade_opacity(-1.0), 1.0);
        assert_eq!(fade_opacity(3.0), 0.0);
    }

    #[test]
    fn test_progress_and_finish() {
        let now = Instant::now();
        let mut effect = celebration(now);

        assert_eq!(effect.progress_at(now), 0.0);
        assert!(effect.tick(now + Duration::from_millis(1000)));
        assert!((effect.opacity_at(now + Duration::from_millis(1000)) - 0.75).abs() < 1e-9);

        assert!(!effect.tick(now + Duration::from_millis(2000)));
        assert!(effect.is_finished());
        assert_eq!(effect.visible_particles(now).count(), 0);
    }

    #[test]
    fn test_particles_thin_out_and_stay_in_viewport() {
        let now = Instant::now();
        let effect = celebration(now);
        assert!(effect.particle_count() > 0);

        let early = effect.visible_particles(now).count();
        let late = effect
            .visible_particles(now + Duration::from_millis(1800))
            .count();
        assert!(late < early);

        for p in effect.visible_particles(now + Duration::from_millis(900)) {
            assert!(p.x < 80);
            assert!(p.y < 24);
        }
    }

    #[test]
    fn test_zero_viewport_has_no_particles() {
        let mut rng = StdRng::seed_from_u64(2);
        let effect = Celebration::start((0, 0), DEFAULT_CELEBRATION, Instant::now(), &mut rng);
        assert_eq!(effect.particle_count(), 0);
    }
}
