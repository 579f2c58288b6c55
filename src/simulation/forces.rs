//! Per-tick external force stage
//!
//! Resets the force accumulators, applies gravity and air drag, and clamps
//! particle speed. Runs first in the tick, before contacts are generated;
//! the forces accumulated here are only integrated after the solver has
//! had a chance to anticipate them.

use super::params::Parameters;
use super::states::{NVec2, World};

/// Apply gravity, drag and the speed clamp to every particle in `world`
pub fn apply_external_forces(world: &mut World, params: &Parameters) {
    let dt = params.dt;

    // Per-step damping factor approximating continuous decay:
    // after one second of ticks the velocity has shrunk to air_drag of
    // its starting value
    let damping = params.air_drag.powf(dt);

    for p in world.particles.iter_mut() {
        // Reset the accumulator from the previous tick
        p.f = NVec2::zeros();

        // Gravity enters as a force scaled by mass (1 / inv_mass), so the
        // resulting acceleration is the same for every radius
        p.f.y += params.gravity / p.inv_mass;

        // Damp velocity
        p.v *= damping;

        // Restrict velocity
        // Only speeds that round to a nonzero value are touched;
        // renormalizing a near-zero velocity would divide by almost zero
        let speed = p.v.norm();
        if speed.round() != 0.0 {
            // Normalize, clamp the magnitude, rescale. Direction is
            // preserved exactly
            p.v /= speed;
            let clamped = speed
                .min(params.max_particle_velocity)
                .max(-params.max_particle_velocity);
            p.v *= clamped;
        }
    }
}
