pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Arena, NVec2, Particle, World};
pub use simulation::params::Parameters;
pub use simulation::contacts::{generate_contacts, Contact};
pub use simulation::forces::apply_external_forces;
pub use simulation::solver::solve_contacts;
pub use simulation::integrator::integrate;
pub use simulation::engine::{SimError, Simulation, StepCounters};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ArenaConfig, ParametersConfig, ParticleConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_step, bench_step_curve};
