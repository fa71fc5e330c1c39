//! Integration tests for the emitter frame pipeline.

use drizzle_particles::{
    is_back_to_front, Emitter, EmitterConfig, EmissionZone, Particle, UnitSphere,
};
use glam::Vec3;

/// Emitter that never spawns on its own, for hand-placed particles.
fn manual(capacity: usize) -> Emitter {
    let config = EmitterConfig {
        name: "manual".to_owned(),
        capacity,
        emission_rate: 0.0,
        acceleration: Vec3::ZERO,
        ..EmitterConfig::smoke()
    };
    Emitter::new(&config).unwrap()
}

fn still(position: Vec3, color: [u8; 4], life: f32) -> Particle {
    Particle::new(position, Vec3::ZERO, color, 0.5, life)
}

#[test]
fn test_two_particles_pack_far_then_near() {
    let mut emitter = manual(4);
    emitter.emit(still(Vec3::new(1.0, 0.0, 0.0), [1, 1, 1, 1], 1.0));
    emitter.emit(still(Vec3::new(3.0, 0.0, 0.0), [9, 9, 9, 9], 10.0));

    let stats = emitter.update(0.5, Vec3::ZERO);

    assert_eq!(stats.live_count, 2);
    let feed = emitter.feed();
    assert_eq!(feed.live_count(), 2);
    assert_eq!(
        feed.position_size(),
        &[[3.0, 0.0, 0.0, 0.5], [1.0, 0.0, 0.0, 0.5]]
    );
    assert_eq!(feed.colors(), &[[9, 9, 9, 9], [1, 1, 1, 1]]);
}

#[test]
fn test_expired_particle_leaves_feed_and_frees_slot() {
    let mut emitter = manual(1);
    assert!(!emitter.emit(still(Vec3::X, [0; 4], 0.3)).is_eviction());

    let stats = emitter.update(0.5, Vec3::ZERO);

    assert_eq!(stats.live_count, 0);
    assert_eq!(stats.died_this_frame, 1);
    assert!(emitter.feed().is_empty());
    assert!(emitter.feed().position_size_bytes().is_empty());

    // The only slot is free again
    let next = emitter.emit(still(Vec3::Y, [0; 4], 1.0));
    assert!(!next.is_eviction());
    assert_eq!(next.handle().index(), 0);
}

#[test]
fn test_live_count_tracks_pool() {
    let config = EmitterConfig::smoke().with_capacity(500);
    let mut emitter = Emitter::new(&config).unwrap();

    for frame in 0..240u16 {
        let angle = f32::from(frame) * 0.05;
        let viewer = Vec3::new(angle.cos() * 8.0, 2.0, angle.sin() * 8.0 - 7.0);
        let stats = emitter.update(1.0 / 60.0, viewer);

        let pool = emitter.pool().as_slice();
        let live_slots = pool.iter().filter(|p| p.is_live()).count();

        assert!(stats.live_count <= config.capacity);
        assert_eq!(stats.live_count, live_slots);
        assert_eq!(emitter.feed().position_size().len(), stats.live_count);
        assert_eq!(emitter.feed().colors().len(), stats.live_count);
        assert!(is_back_to_front(pool));
    }
}

#[test]
fn test_no_spawn_never_grows() {
    let mut emitter = manual(32);
    for i in 0..20u8 {
        let life = 0.1 * f32::from(i + 1);
        emitter.emit(still(Vec3::new(f32::from(i), 0.0, 0.0), [i; 4], life));
    }

    let mut previous = usize::MAX;
    for _ in 0..30 {
        let stats = emitter.update(0.1, Vec3::ZERO);
        assert!(stats.live_count <= previous);
        previous = stats.live_count;
    }
    assert_eq!(previous, 0);
}

#[test]
fn test_long_frame_spawns_ceiling() {
    let config = EmitterConfig::smoke().with_capacity(1_000);
    let mut emitter = Emitter::new(&config).unwrap();

    let stats = emitter.update(10.0, Vec3::ZERO);

    assert_eq!(stats.spawned_this_frame, config.max_spawn_per_frame);
    // A ten second frame outlives the one second lifespan
    assert_eq!(stats.died_this_frame, config.max_spawn_per_frame);
    assert_eq!(stats.live_count, 0);
}

#[test]
fn test_saturated_pool_reuses_slot_zero() {
    let config = EmitterConfig::smoke().with_capacity(100);
    let mut emitter = Emitter::new(&config).unwrap();

    // 10000/s * 0.02 s = 200, capped at 160
    let stats = emitter.update(0.02, Vec3::ZERO);

    assert_eq!(stats.spawned_this_frame, 160);
    assert_eq!(stats.forced_reuses, 60);
    assert_eq!(stats.live_count, 100);
    assert!(stats.is_saturated());
}

#[test]
fn test_same_seed_same_feed() {
    let config = EmitterConfig::rain().with_capacity(2_000).with_seed(42);
    let mut a = Emitter::new(&config).unwrap();
    let mut b = Emitter::new(&config).unwrap();

    for _ in 0..5 {
        a.update(0.016, Vec3::new(0.0, 1.0, 5.0));
        b.update(0.016, Vec3::new(0.0, 1.0, 5.0));
    }

    assert_eq!(a.feed(), b.feed());
    assert_eq!(a.draw(), b.draw());
}

#[test]
fn test_sphere_sampler_keeps_speed_band() {
    let config = EmitterConfig {
        capacity: 256,
        main_direction: Vec3::ZERO,
        spread: 2.0,
        acceleration: Vec3::ZERO,
        zone: EmissionZone::Point {
            position: Vec3::ZERO,
        },
        ..EmitterConfig::smoke()
    };
    let mut emitter = Emitter::new(&config)
        .unwrap()
        .with_sampler(Box::new(UnitSphere));

    emitter.update(0.01, Vec3::ZERO);

    for particle in emitter.pool().as_slice().iter().filter(|p| p.is_live()) {
        assert!((particle.velocity.length() - 2.0).abs() < 1e-3);
    }
}
