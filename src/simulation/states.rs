//! Core state types for the circle simulation.
//!
//! Defines the dynamic particle, the rectangular arena and the `World`
//! holding the particle collection and the current simulation time `t`.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub f: NVec2, // accumulated force, reset every tick
    pub(crate) radius: f64, // radius, fixed at construction
    pub(crate) inv_mass: f64, // 100 / radius^2, derived once from radius
}

impl Particle {
    /// Build a particle at `(x, y)` with the spawn velocity `(0, 1)`.
    /// Mass grows with the circle area, `inv_mass = 1 / (radius^2 / 100)`,
    /// so larger circles are heavier. Callers validate the radius first
    /// (`Simulation::add_particle`); a non-positive radius here would give
    /// a non-finite inverse mass.
    pub(crate) fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            x: NVec2::new(x, y),
            v: NVec2::new(0.0, 1.0),
            f: NVec2::zeros(),
            radius,
            inv_mass: 1.0 / (radius * radius / 100.0),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    /// True iff the circles overlap: squared center distance strictly
    /// below the squared radius sum. Circles that merely touch do not
    /// collide.
    pub fn colliding_with(&self, other: &Particle) -> bool {
        let rs = self.radius + other.radius;
        let d = self.x - other.x;
        d.dot(&d) < rs * rs
    }
}

/// Rectangular arena `[0, width] x [0, height]` the particles bounce inside
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone)]
pub struct World {
    pub particles: Vec<Particle>, // collection of dynamic particles
    pub t: f64, // time
}

impl World {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            t: 0.0,
        }
    }
}
