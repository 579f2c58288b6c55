//! Sequential impulse contact solver
//!
//! Removes relative approach velocity along each contact normal and bleeds
//! off penetration with a small positional bias. Runs a fixed number of
//! passes over the contact buffer; each visit applies only the change in
//! the contact's accumulated impulse, so repeated passes cannot overshoot.
//! Approximate by construction: iteration count trades accuracy for cost
//! and there is no convergence guarantee.

use super::contacts::Contact;
use super::params::Parameters;
use super::states::{Particle, World};

// Positional correction tuning: up to `SLOP` of penetration is tolerated,
// and only `PERCENT` of the rest is removed per visit to keep resting
// stacks from jittering
const SLOP: f64 = 0.01;
const PERCENT: f64 = 0.2;

/// Run `params.iterations` solver passes (at least one) over `contacts`
pub fn solve_contacts(world: &mut World, contacts: &mut [Contact], params: &Parameters) {
    let dt = params.dt;
    let iterations = params.iterations.max(1);

    for _ in 0..iterations {
        // Newest contacts first. Impulses and position corrections apply
        // immediately, so later visits in the same pass already see the
        // updated state
        for con in contacts.iter_mut().rev() {
            let (pa, pb) = particle_pair_mut(&mut world.particles, con.a, con.b);

            // Relative velocity along the normal. Positive means the pair
            // is already separating and needs no impulse
            let rel_normal_vel = (pb.v - pa.v).dot(&con.normal);
            if rel_normal_vel > 0.0 {
                continue;
            }

            // Velocity the pending force integration will add this tick,
            // projected on the normal. Solving against it keeps the pair
            // from sinking back in once forces are integrated
            let rel_force = (pb.f * pb.inv_mass - pa.f * pa.inv_mass).dot(&con.normal);

            // Remove the approach velocity, the force-induced velocity,
            // and enough extra closing velocity to clear the overlap
            // within this tick
            let remove_vel = rel_normal_vel + dt * rel_force - con.penetration / dt;

            // inv_sum > 0 always holds for positive radii; guard the
            // division anyway
            let inv_sum = pa.inv_mass + pb.inv_mass;
            if inv_sum <= 0.0 {
                continue;
            }
            let imp = remove_vel / inv_sum;

            // Clamp the accumulated impulse and apply only the change
            // since the previous visit
            let new_impulse = (imp + con.impulse)
                .min(params.max_contact_impulse)
                .max(-params.max_contact_impulse);
            let change = new_impulse - con.impulse;
            con.impulse = new_impulse;

            // Apply impulse: `change` is negative for an approaching
            // pair, so this pushes a and b apart along the normal,
            // weighted by inverse mass
            let impulse_vec = con.normal * change;
            pa.v += impulse_vec * pa.inv_mass;
            pb.v -= impulse_vec * pb.inv_mass;

            // Positional correction: directly push the pair apart by a
            // fraction of the penetration beyond the slop, split by
            // inverse mass and applied to positions right away
            let correction =
                con.normal * ((con.penetration - SLOP).max(0.0) / inv_sum * PERCENT);
            pa.x -= correction * pa.inv_mass;
            pb.x += correction * pb.inv_mass;
        }
    }
}

/// Mutably borrow two distinct particles at once
fn particle_pair_mut(
    particles: &mut [Particle],
    a: usize,
    b: usize,
) -> (&mut Particle, &mut Particle) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = particles.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = particles.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}
