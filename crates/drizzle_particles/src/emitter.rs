//! # Emitter
//!
//! One pool plus the policies that drive it. Each `update` runs the frame
//! pipeline in a fixed order:
//!
//! ```text
//! emit (allocate + birth) -> integrate -> sort back-to-front -> pack -> publish
//! ```
//!
//! The packed streams are double buffered: `update` fills the back copy and
//! publishes it, and [`Emitter::feed`] returns the published copy until the
//! next update.

use drizzle_core::{Allocation, DoubleBuffer, SlotPool};
use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::EmitterConfig;
use crate::emission::EmissionController;
use crate::error::ConfigResult;
use crate::integrator::Integrator;
use crate::mesh::{BillboardMesh, InstancedDraw};
use crate::packer::PackedAttributes;
use crate::particle::Particle;
use crate::sampler::DirectionSampler;
use crate::sort::farther_first;
use crate::spawn::BirthPolicy;
use crate::stats::ParticleStats;

/// A particle emitter with its own pool, RNG stream, and render feed.
#[derive(Debug)]
pub struct Emitter {
    name: String,
    pool: SlotPool<Particle>,
    controller: EmissionController,
    birth: BirthPolicy,
    sampler: Box<dyn DirectionSampler>,
    integrator: Integrator,
    rng: ChaCha8Rng,
    feed: DoubleBuffer<PackedAttributes>,
    mesh: &'static BillboardMesh,
    stats: ParticleStats,
    /// Forced reuses from `emit` calls since the last update.
    pending_forced: usize,
    /// Births from `emit` calls since the last update.
    pending_spawned: usize,
}

impl Emitter {
    /// Builds an emitter from a configuration.
    ///
    /// Allocates the pool and both feed buffers up front. Nothing is
    /// allocated afterwards.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error, if any.
    pub fn new(config: &EmitterConfig) -> ConfigResult<Self> {
        config.validate()?;

        tracing::debug!(
            "Emitter built: {} (capacity {}, {}/s, ceiling {}, seed {:#x})",
            config.name,
            config.capacity,
            config.emission_rate,
            config.max_spawn_per_frame,
            config.seed
        );

        Ok(Self {
            name: config.name.clone(),
            pool: SlotPool::new(config.capacity, Particle::DEAD),
            controller: EmissionController::new(config.emission_rate, config.max_spawn_per_frame),
            birth: BirthPolicy::from_config(config),
            sampler: config.sampler.build(),
            integrator: Integrator::new(config.acceleration),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            feed: DoubleBuffer::from_fn(|| PackedAttributes::with_capacity(config.capacity)),
            mesh: config.mesh.mesh(),
            stats: ParticleStats {
                pool_size: config.capacity,
                ..ParticleStats::default()
            },
            pending_forced: 0,
            pending_spawned: 0,
        })
    }

    /// Replaces the direction sampler.
    #[must_use]
    pub fn with_sampler(mut self, sampler: Box<dyn DirectionSampler>) -> Self {
        self.sampler = sampler;
        self
    }

    /// Emitter name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs one frame.
    ///
    /// # Arguments
    ///
    /// * `dt` - Seconds since the previous frame. Must be non-negative.
    /// * `viewer` - Camera position, shared by every emitter in the frame.
    pub fn update(&mut self, dt: f32, viewer: Vec3) -> ParticleStats {
        let births = self.controller.particles_to_spawn(dt);
        for _ in 0..births {
            let particle = self.birth.spawn(self.sampler.as_ref(), &mut self.rng);
            self.emit(particle);
        }

        let report = self.integrator.step(self.pool.as_mut_slice(), dt, viewer);
        self.pool.sort_unstable_by(farther_first);

        self.feed.back_mut().pack(self.pool.as_slice());
        self.feed.publish();

        self.stats = ParticleStats {
            pool_size: self.pool.capacity(),
            live_count: report.live,
            spawned_this_frame: self.pending_spawned,
            died_this_frame: report.died,
            forced_reuses: self.pending_forced,
            frame: self.feed.frame_count(),
        };
        self.pending_spawned = 0;
        self.pending_forced = 0;

        if self.stats.is_saturated() {
            tracing::warn!(
                "Emitter {} saturated: {} births reused slot 0",
                self.name,
                self.stats.forced_reuses
            );
        }
        tracing::trace!("Emitter {} frame {}: {}", self.name, self.stats.frame, self.stats);

        self.stats
    }

    /// Places an already-initialized particle through the allocator.
    ///
    /// The particle takes part in the next `update` like any other birth.
    pub fn emit(&mut self, particle: Particle) -> Allocation {
        let allocation = self.pool.allocate();
        self.pool[allocation.handle()] = particle;

        self.pending_spawned += 1;
        if allocation.is_eviction() {
            self.pending_forced += 1;
        }
        allocation
    }

    /// The last published instance streams.
    #[inline]
    #[must_use]
    pub fn feed(&self) -> &PackedAttributes {
        self.feed.front()
    }

    /// Live particles as of the last update.
    #[inline]
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.feed.front().live_count()
    }

    /// Draw descriptor for the last published feed.
    #[must_use]
    pub fn draw(&self) -> InstancedDraw {
        let instances = u32::try_from(self.live_count()).unwrap_or(u32::MAX);
        InstancedDraw::new(self.mesh, instances)
    }

    /// Billboard drawn per particle.
    #[inline]
    #[must_use]
    pub fn mesh(&self) -> &'static BillboardMesh {
        self.mesh
    }

    /// The particle pool.
    #[inline]
    #[must_use]
    pub fn pool(&self) -> &SlotPool<Particle> {
        &self.pool
    }

    /// Counters from the last update.
    #[inline]
    #[must_use]
    pub fn stats(&self) -> &ParticleStats {
        &self.stats
    }

    /// Kills every particle and rewinds the allocator. The published feed is
    /// left as is until the next update.
    pub fn clear(&mut self) {
        self.pool.clear(&Particle::DEAD);
        self.pending_forced = 0;
        self.pending_spawned = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::EmissionZone;
    use crate::sort::is_back_to_front;

    fn tiny(capacity: usize) -> EmitterConfig {
        EmitterConfig {
            name: "tiny".to_owned(),
            capacity,
            emission_rate: 100.0,
            max_spawn_per_frame: 3,
            lifespan_seconds: 1.0,
            main_direction: Vec3::new(0.0, 0.0, -1.0),
            spread: 0.5,
            zone: EmissionZone::Point {
                position: Vec3::new(0.0, 0.0, -5.0),
            },
            ..EmitterConfig::smoke()
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(Emitter::new(&tiny(0)).is_err());
    }

    #[test]
    fn test_update_spawns_and_publishes() {
        let mut emitter = Emitter::new(&tiny(16)).unwrap();
        assert_eq!(emitter.live_count(), 0);

        let stats = emitter.update(0.1, Vec3::ZERO);

        assert_eq!(stats.spawned_this_frame, 3);
        assert_eq!(stats.live_count, 3);
        assert_eq!(stats.frame, 1);
        assert_eq!(emitter.live_count(), 3);
        assert_eq!(emitter.feed().colors().len(), 3);
        assert_eq!(emitter.draw().instance_count, 3);
        assert!(is_back_to_front(emitter.pool().as_slice()));
    }

    #[test]
    fn test_saturation_is_counted() {
        let mut emitter = Emitter::new(&tiny(2)).unwrap();

        let stats = emitter.update(0.1, Vec3::ZERO);

        assert_eq!(stats.spawned_this_frame, 3);
        assert_eq!(stats.forced_reuses, 1);
        assert_eq!(stats.live_count, 2);
    }

    #[test]
    fn test_particles_expire() {
        let mut emitter = Emitter::new(&tiny(16)).unwrap();
        emitter.update(0.1, Vec3::ZERO);

        // Zero dt: nothing spawns, nothing ages
        let stats = emitter.update(0.0, Vec3::ZERO);
        assert_eq!(stats.live_count, 3);

        // 100/s * 0.005 s = 0.5, rounds down to no births
        let stats = emitter.update(0.005, Vec3::ZERO);
        assert_eq!(stats.spawned_this_frame, 0);
        assert_eq!(stats.live_count, 3);

        emitter.clear();
        let stats = emitter.update(0.0, Vec3::ZERO);
        assert_eq!(stats.live_count, 0);
    }
}
