//! Build a fully-initialized runtime simulation from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! `Scenario` bundle: a populated `Simulation` plus the end time a
//! headless driver runs to. Every particle radius is validated on the way
//! in and a below-1 iteration count is clamped.

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::{SimError, Simulation};
use crate::simulation::params::Parameters;
use crate::simulation::states::Arena;

pub struct Scenario {
    pub simulation: Simulation,
    pub t_end: f64,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            t_end: p_cfg.t_end,
            gravity: p_cfg.gravity,
            air_drag: p_cfg.air_drag,
            iterations: p_cfg.iterations.max(1),
            max_contact_impulse: p_cfg.max_contact_impulse,
            max_particle_velocity: p_cfg.max_particle_velocity,
        };

        let arena = Arena {
            width: cfg.arena.width,
            height: cfg.arena.height,
        };

        // Particles: validated one by one through the normal spawn path
        let t_end = parameters.t_end;
        let mut simulation = Simulation::new(arena, parameters);
        for pc in &cfg.particles {
            simulation.add_particle(pc.x, pc.y, pc.radius)?;
        }

        Ok(Self { simulation, t_end })
    }
}
