//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ArenaConfig`]      – bounds of the rectangular arena
//! - [`ParametersConfig`] – numerical parameters and tunables
//! - [`ParticleConfig`]   – initial state for each particle
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! arena:
//!   width: 800.0
//!   height: 600.0
//!
//! parameters:
//!   dt: 0.00833333333         # fixed tick length (1/120)
//!   t_end: 5.0                # headless run length
//!   gravity: 200.0            # gravity on each particle
//!   air_drag: 0.8             # damping on particle velocity
//!   iterations: 1             # solver iterations per tick
//!   max_contact_impulse: 100000.0
//!   max_particle_velocity: 500.0
//!
//! particles:
//!   - x: 400.0
//!     y: 100.0
//!     radius: 10.0
//!   - x: 408.0
//!     y: 130.0
//!     radius: 14.0
//! ```
//!
//! Every `arena` and `parameters` field may be omitted; the defaults above
//! are used. Particles always spawn with velocity `(0, 1)`, like particles
//! spawned at runtime. The engine maps this configuration into its runtime
//! representation via `Scenario::build_scenario`.

use serde::Deserialize;

use crate::simulation::params::Parameters;

/// Bounds of the rectangular arena
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Numerical parameters and tunables for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub dt: f64,                    // fixed tick length
    pub t_end: f64,                 // headless run length
    pub gravity: f64,               // gravity on each particle
    pub air_drag: f64,              // damping on particle velocity
    pub iterations: u32,            // solver iterations per tick, clamped to >= 1
    pub max_contact_impulse: f64,   // accumulated impulse clamp
    pub max_particle_velocity: f64, // hard speed clamp
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            dt: p.dt,
            t_end: p.t_end,
            gravity: p.gravity,
            air_drag: p.air_drag,
            iterations: p.iterations,
            max_contact_impulse: p.max_contact_impulse,
            max_particle_velocity: p.max_particle_velocity,
        }
    }
}

/// Configuration for a single particle's initial state
#[derive(Deserialize, Debug)]
pub struct ParticleConfig {
    pub x: f64,      // initial position x
    pub y: f64,      // initial position y
    pub radius: f64, // radius, must be positive
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub arena: ArenaConfig, // arena bounds
    #[serde(default)]
    pub parameters: ParametersConfig, // numerical parameters and tunables
    #[serde(default)]
    pub particles: Vec<ParticleConfig>, // initial particles
}
