//! Back-to-front depth ordering for alpha blending.

use std::cmp::Ordering;

use crate::particle::Particle;

/// Comparator placing farther particles first.
///
/// `a` sorts before `b` iff `a.camera_distance_sq > b.camera_distance_sq`.
/// Dead slots carry a negative sentinel and therefore land after every
/// live particle.
#[inline]
#[must_use]
pub fn farther_first(a: &Particle, b: &Particle) -> Ordering {
    b.camera_distance_sq.total_cmp(&a.camera_distance_sq)
}

/// Sorts a whole pool back-to-front. Equal distances end up in any order.
pub fn sort_back_to_front(particles: &mut [Particle]) {
    particles.sort_unstable_by(farther_first);
}

/// Returns `true` if live particles are non-increasing in distance and every
/// dead slot follows the last live one.
#[must_use]
pub fn is_back_to_front(particles: &[Particle]) -> bool {
    let live = particles.iter().take_while(|p| p.is_live()).count();
    let (front, tail) = particles.split_at(live);

    tail.iter().all(|p| !p.is_live())
        && front
            .windows(2)
            .all(|pair| pair[0].camera_distance_sq >= pair[1].camera_distance_sq)
}
