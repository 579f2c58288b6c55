use sisim::{Scenario, ScenarioConfig};

use clap::Parser;
use anyhow::Result;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "drop.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let scenario_cfg = load_scenario_from_yaml()?;

    let Scenario { mut simulation, t_end } = Scenario::build_scenario(scenario_cfg)?;
    info!(
        "scenario loaded: {} particles, dt = {}, t_end = {}",
        simulation.particles().len(),
        simulation.params().dt,
        t_end
    );

    // Headless fixed-step loop. A real-time host would call step() from
    // its own interval timer instead and render between ticks
    while simulation.t() < t_end {
        simulation.step();
    }

    let counters = simulation.counters();
    info!("finished at t = {:.4}", simulation.t());
    println!(
        "t = {:.4}  particles = {}  contacts = {}  solved = {}  iterations = {}",
        simulation.t(),
        counters.particles,
        counters.contacts,
        counters.solved_contacts,
        simulation.params().iterations
    );

    //sisim::bench_step();
    //sisim::bench_step_curve();

    Ok(())
}
