//! Simulation context and public stepping API
//!
//! `Simulation` owns the particle world, the arena, the reusable contact
//! buffer and the tunable parameters. One `step` call runs a full tick:
//! external forces -> contact generation -> impulse solver -> integration
//! and boundary bounce, then refreshes the published counters.

use log::debug;
use thiserror::Error;

use super::contacts::{self, Contact};
use super::forces;
use super::integrator;
use super::params::Parameters;
use super::solver;
use super::states::{Arena, Particle, World};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("particle radius must be positive and finite, got {radius}")]
    InvalidRadius { radius: f64 },
}

/// Counters published after each tick, for status display
#[derive(Debug, Clone, Copy, Default)]
pub struct StepCounters {
    pub particles: usize, // particles in the world
    pub contacts: usize, // contacts generated this tick
    pub solved_contacts: usize, // contacts no longer overlapping after integration
}

pub struct Simulation {
    world: World,
    arena: Arena,
    contacts: Vec<Contact>, // reused across ticks, cleared on generation
    params: Parameters,
    counters: StepCounters,
}

impl Simulation {
    pub fn new(arena: Arena, params: Parameters) -> Self {
        Self {
            world: World::new(),
            arena,
            contacts: Vec::new(),
            params,
            counters: StepCounters::default(),
        }
    }

    /// Advance the simulation by one tick of `params.dt`.
    ///
    /// The caller owns the clock: a real-time host invokes this from its
    /// own fixed-interval loop, a headless driver or test calls it back to
    /// back.
    pub fn step(&mut self) {
        forces::apply_external_forces(&mut self.world, &self.params);
        contacts::generate_contacts(&self.world, &mut self.contacts);
        solver::solve_contacts(&mut self.world, &mut self.contacts, &self.params);
        integrator::integrate(&mut self.world, &self.arena, &self.params);

        // A contact counts as solved when its endpoints no longer overlap
        // after integration
        let solved = self
            .contacts
            .iter()
            .filter(|c| !self.world.particles[c.a].colliding_with(&self.world.particles[c.b]))
            .count();

        self.counters = StepCounters {
            particles: self.world.particles.len(),
            contacts: self.contacts.len(),
            solved_contacts: solved,
        };
        debug!(
            "t = {:.4}: {} particles, {} contacts, {} solved",
            self.world.t, self.counters.particles, self.counters.contacts, self.counters.solved_contacts
        );
    }

    /// Insert a particle at `(x, y)` with the spawn velocity `(0, 1)`.
    /// The radius must be positive and finite; anything else would produce
    /// a non-finite inverse mass and is rejected here, at the boundary.
    pub fn add_particle(&mut self, x: f64, y: f64, radius: f64) -> Result<(), SimError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SimError::InvalidRadius { radius });
        }
        self.world.particles.push(Particle::new(x, y, radius));
        Ok(())
    }

    /// Drop all particles and contacts
    pub fn clear(&mut self) {
        self.world.particles.clear();
        self.contacts.clear();
        self.counters = StepCounters::default();
    }

    /// Set the solver iteration count; values below 1 are clamped to 1
    pub fn set_iterations(&mut self, iterations: u32) {
        self.params.iterations = iterations.max(1);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.world.particles
    }

    /// Mutable particle access for external input handling (dragging,
    /// flicking). The collection itself stays owned by the simulation
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.world.particles
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn counters(&self) -> StepCounters {
        self.counters
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut Parameters {
        &mut self.params
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn t(&self) -> f64 {
        self.world.t
    }
}
