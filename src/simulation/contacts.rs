//! Contact records and brute-force contact generation
//!
//! A `Contact` is a transient constraint between two overlapping
//! particles. The set is rebuilt from scratch every tick into a reusable
//! buffer; the accumulated impulse never survives a tick.

use super::states::{NVec2, World};

#[derive(Debug, Clone)]
pub struct Contact {
    pub a: usize, // index of the first particle
    pub b: usize, // index of the second particle
    pub normal: NVec2, // unit vector pointing from a toward b
    pub penetration: f64, // overlap depth, non-negative
    pub impulse: f64, // impulse accumulated by this tick's solver run
}

/// Rebuild `contacts` from the current particle positions.
///
/// Every ordered pair of distinct overlapping particles is tested, so an
/// overlapping pair yields two records with swapped roles and opposite
/// normals, and the solver sees each pair twice per pass. No broad phase:
/// the test is quadratic in particle count, which caps practical counts
/// at a few hundred.
pub fn generate_contacts(world: &World, contacts: &mut Vec<Contact>) {
    contacts.clear();

    let n = world.particles.len();
    for b in 0..n {
        for a in 0..n {
            if a == b {
                continue;
            }
            let pa = &world.particles[a];
            let pb = &world.particles[b];
            if !pa.colliding_with(pb) {
                continue;
            }

            let diff = pb.x - pa.x;
            let dist = diff.norm();

            // Coincident centers leave no direction to separate along;
            // fall back to a (0, 1) normal and treat the whole radius of
            // `a` as the overlap
            let (normal, penetration) = if dist > 0.0 {
                (diff / dist, (pb.radius + pa.radius) - dist)
            } else {
                (NVec2::new(0.0, 1.0), pa.radius)
            };

            contacts.push(Contact {
                a,
                b,
                normal,
                penetration,
                impulse: 0.0,
            });
        }
    }
}
