//! Ambient particle field
//!
//! A fixed-size set of decorative points with randomized trajectories
//! and infinite looping. Particles are generated exactly once when the
//! field is constructed and are immutable afterwards; only their shared
//! animation clock advances. Re-reading the descriptors never rerolls
//! randomness - a new field must be constructed to reseed.
//!
//! The random source is injected so tests can seed it deterministically
//! while production uses entropy.

use claimsight_core::Point;

/// Parameters for particle generation
#[derive(Clone, Copy, Debug)]
pub struct ParticleFieldConfig {
    /// Number of particles in the field
    pub count: usize,
    /// Drift vectors are uniform over +/- this many pixels per axis
    pub drift_range_px: f32,
    /// Minimum cycle duration in milliseconds
    pub cycle_min_ms: f32,
    /// Maximum cycle duration in milliseconds
    pub cycle_max_ms: f32,
    /// Opacity at the midpoint of each cycle
    pub peak_opacity: f32,
}

impl Default for ParticleFieldConfig {
    fn default() -> Self {
        Self {
            count: 25,
            drift_range_px: 50.0,
            cycle_min_ms: 15_000.0,
            cycle_max_ms: 25_000.0,
            peak_opacity: 0.6,
        }
    }
}

/// An immutable particle descriptor
///
/// Origin is a percentage of the container box; drift is a pixel
/// offset reached at the end of each cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Stable index within the field
    pub id: usize,
    /// Origin position, percent of container (0-100 per axis)
    pub origin: Point,
    /// Signed drift in pixels over one cycle
    pub drift: Point,
    /// Cycle duration in milliseconds
    pub cycle_ms: f32,
    /// Alternating palette slot (even/odd in the reference design)
    pub palette_index: usize,
}

/// Instantaneous visual state of one particle
#[derive(Clone, Copy, Debug)]
pub struct ParticleState {
    /// Current pixel offset from the particle's origin
    pub offset: Point,
    /// Current opacity (0.0 to peak and back)
    pub opacity: f32,
}

/// A mounted particle field
///
/// Purely decorative: it never participates in hit testing, so pointer
/// interaction always falls through to the content underneath.
pub struct ParticleField {
    config: ParticleFieldConfig,
    particles: Vec<Particle>,
    elapsed_ms: f32,
}

impl ParticleField {
    /// Generate a field of `config.count` particles from `rng`
    pub fn generate(config: ParticleFieldConfig, rng: &mut fastrand::Rng) -> Self {
        let particles = (0..config.count)
            .map(|id| Particle {
                id,
                origin: Point::new(rng.f32() * 100.0, rng.f32() * 100.0),
                drift: Point::new(
                    rng.f32() * 2.0 * config.drift_range_px - config.drift_range_px,
                    rng.f32() * 2.0 * config.drift_range_px - config.drift_range_px,
                ),
                cycle_ms: config.cycle_min_ms
                    + rng.f32() * (config.cycle_max_ms - config.cycle_min_ms),
                palette_index: id % 2,
            })
            .collect();

        Self {
            config,
            particles,
            elapsed_ms: 0.0,
        }
    }

    /// Generate with default parameters
    pub fn with_default(rng: &mut fastrand::Rng) -> Self {
        Self::generate(ParticleFieldConfig::default(), rng)
    }

    /// The immutable particle descriptors
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance the shared animation clock
    pub fn tick(&mut self, dt_ms: f32) {
        self.elapsed_ms += dt_ms;
    }

    /// Sample the current visual state of particle `index`
    ///
    /// Position drifts linearly from origin to origin+drift across the
    /// cycle; opacity rises 0 to peak over the first half and falls
    /// back to 0 over the second, which also hides the wrap back to
    /// the origin.
    pub fn sample(&self, index: usize) -> Option<ParticleState> {
        let particle = self.particles.get(index)?;
        let phase = (self.elapsed_ms % particle.cycle_ms) / particle.cycle_ms;

        let opacity = if phase < 0.5 {
            self.config.peak_opacity * (phase * 2.0)
        } else {
            self.config.peak_opacity * (2.0 - phase * 2.0)
        };

        Some(ParticleState {
            offset: Point::new(particle.drift.x * phase, particle.drift.y * phase),
            opacity,
        })
    }

    /// The field never intercepts pointer input
    pub fn hit_test(&self, _point: Point) -> bool {
        false
    }
}
