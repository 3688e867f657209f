//! Pointer sparkle trail
//!
//! A bounded set of short-lived particles. Pointer movement spawns small
//! batches (throttled), a fixed-rate tick moves every particle along its
//! velocity and fades it out, and spent particles are culled.
//!
//! The field owns no timers or listeners; the host drives it through
//! [`SparkleField::pointer_moved`] and [`SparkleField::tick`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SparkleConfig;

/// Opacities at or below this are treated as zero
const OPACITY_EPSILON: f64 = 1e-9;

const VELOCITY_X: (f64, f64) = (-1.0, 1.0);
/// Screen y grows downward, so a negative range drifts upward
const VELOCITY_Y: (f64, f64) = (-2.0, 0.0);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Particle {
    pub fn is_alive(&self) -> bool {
        self.opacity > OPACITY_EPSILON
    }

    /// Blur radius of the dot's glow
    pub fn glow_radius(&self) -> f64 {
        self.size * 2.0
    }
}

pub struct SparkleField<R> {
    config: SparkleConfig,
    rng: R,
    particles: Vec<Particle>,
    last_spawn_ms: Option<f64>,
    next_id: u64,
}

impl<R: Rng> SparkleField<R> {
    pub fn new(config: SparkleConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            particles: Vec::new(),
            last_spawn_ms: None,
            next_id: 0,
        }
    }

    pub fn config(&self) -> &SparkleConfig {
        &self.config
    }

    /// Live particles, oldest first
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Handle a pointer move at `(x, y)` observed at `now_ms`.
    ///
    /// Returns the number of particles spawned, which is zero when the
    /// event falls inside the throttle window of the previous batch.
    pub fn pointer_moved(&mut self, x: f64, y: f64, now_ms: f64) -> usize {
        if let Some(last) = self.last_spawn_ms {
            // A clock that stepped backwards restarts the window from `now_ms`
            if now_ms >= last && now_ms - last < self.config.throttle_ms {
                return 0;
            }
        }
        self.last_spawn_ms = Some(now_ms);

        let min_batch = self.config.min_batch.min(self.config.max_batch);
        let count = self.rng.gen_range(min_batch..=self.config.max_batch);

        for _ in 0..count {
            let particle = self.spawn_one(x, y);
            self.particles.push(particle);
        }

        let max = self.config.max_particles;
        if self.particles.len() > max {
            let overflow = self.particles.len() - max;
            self.particles.drain(..overflow);
        }

        tracing::trace!(x, y, count, live = self.particles.len(), "sparkle batch spawned");
        count
    }

    /// Advance every particle by one frame and drop the spent ones.
    ///
    /// Returns the number of particles removed.
    pub fn tick(&mut self) -> usize {
        let decay = self.config.decay_per_tick;
        for particle in &mut self.particles {
            particle.x += particle.vx;
            particle.y += particle.vy;
            particle.opacity -= decay;
        }

        let before = self.particles.len();
        self.particles.retain(Particle::is_alive);
        before - self.particles.len()
    }

    fn spawn_one(&mut self, x: f64, y: f64) -> Particle {
        let jitter = self.config.jitter.abs();
        let size = if self.config.max_size > self.config.min_size {
            self.rng.gen_range(self.config.min_size..self.config.max_size)
        } else {
            self.config.min_size
        };

        let id = self.next_id;
        self.next_id += 1;

        Particle {
            id,
            x: x + self.rng.gen_range(-jitter..=jitter),
            y: y + self.rng.gen_range(-jitter..=jitter),
            size,
            opacity: 1.0,
            vx: self.rng.gen_range(VELOCITY_X.0..=VELOCITY_X.1),
            vy: self.rng.gen_range(VELOCITY_Y.0..=VELOCITY_Y.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn field() -> SparkleField<ChaCha8Rng> {
        SparkleField::new(SparkleConfig::default(), ChaCha8Rng::seed_from_u64(7))
    }

    #[test]
    fn test_first_move_spawns_batch() {
        let mut field = field();
        let spawned = field.pointer_moved(100.0, 100.0, 0.0);
        assert!((2..=3).contains(&spawned));
        assert_eq!(field.len(), spawned);
    }

    #[test]
    fn test_spawned_particle_ranges() {
        let mut field = field();
        for i in 0..20 {
            field.pointer_moved(200.0, 300.0, i as f64 * 30.0);
        }

        for p in field.particles() {
            assert!((190.0..=210.0).contains(&p.x));
            assert!((290.0..=310.0).contains(&p.y));
            assert!((4.0..8.0).contains(&p.size));
            assert_eq!(p.opacity, 1.0);
            assert!((-1.0..=1.0).contains(&p.vx));
            assert!((-2.0..=0.0).contains(&p.vy));
        }
    }

    #[test]
    fn test_throttle_window() {
        let mut field = field();
        assert!(field.pointer_moved(0.0, 0.0, 1000.0) > 0);
        assert_eq!(field.pointer_moved(5.0, 5.0, 1029.9), 0);
        assert!(field.pointer_moved(5.0, 5.0, 1030.0) > 0);
    }

    #[test]
    fn test_tick_moves_and_fades() {
        let mut field = field();
        field.pointer_moved(50.0, 50.0, 0.0);
        let before = field.particles().to_vec();

        assert_eq!(field.tick(), 0);

        for (old, new) in before.iter().zip(field.particles()) {
            assert_eq!(old.id, new.id);
            assert!((new.x - (old.x + old.vx)).abs() < 1e-12);
            assert!((new.y - (old.y + old.vy)).abs() < 1e-12);
            assert!((new.opacity - 0.98).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut field = field();
        for i in 0..30 {
            field.pointer_moved(0.0, 0.0, i as f64 * 100.0);
        }
        let mut ids: Vec<u64> = field.particles().iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), field.len());
    }

    #[test]
    fn test_clock_step_back_restarts_throttle() {
        let mut field = field();
        assert!(field.pointer_moved(0.0, 0.0, 5000.0) > 0);
        assert!(field.pointer_moved(0.0, 0.0, 1000.0) > 0);
        assert_eq!(field.pointer_moved(0.0, 0.0, 1010.0), 0);
        assert!(field.pointer_moved(0.0, 0.0, 1030.0) > 0);
    }

    #[test]
    fn test_glow_radius() {
        let particle = Particle {
            id: 0,
            x: 0.0,
            y: 0.0,
            size: 5.0,
            opacity: 1.0,
            vx: 0.0,
            vy: 0.0,
        };
        assert_eq!(particle.glow_radius(), 10.0);
    }
}
