//! Fixed-step integration and arena boundary handling
//!
//! Integrates the tick's accumulated forces into velocities and the
//! updated velocities into positions, then bounces particles off the four
//! arena edges. Runs last in the tick, after the solver.

use super::params::Parameters;
use super::states::{Arena, World};

/// Advance every particle by one step of `params.dt` and keep it inside
/// the arena
pub fn integrate(world: &mut World, arena: &Arena, params: &Parameters) {
    let dt = params.dt;

    for p in world.particles.iter_mut() {
        // Semi-implicit update: velocity first from this tick's forces,
        // then position from the updated velocity
        // v_n+1 = v_n + (f * dt) * w
        p.v += p.f * dt * p.inv_mass;
        // x_n+1 = x_n + v_n+1 * dt
        p.x += p.v * dt;

        // Bounce off the arena border: clamp the position to the edge and
        // negate the velocity component, perfectly elastic. Each axis is
        // checked on its own, so a corner hit flips both components
        if p.x.x + p.radius >= arena.width {
            p.x.x = arena.width - p.radius;
            p.v.x = -p.v.x;
        }
        if p.x.x - p.radius <= 0.0 {
            p.x.x = p.radius;
            p.v.x = -p.v.x;
        }
        if p.x.y + p.radius >= arena.height {
            p.x.y = arena.height - p.radius;
            p.v.y = -p.v.y;
        }
        if p.x.y - p.radius <= 0.0 {
            p.x.y = p.radius;
            p.v.y = -p.v.y;
        }
    }

    // Advance time by one full step
    world.t += dt;
}
