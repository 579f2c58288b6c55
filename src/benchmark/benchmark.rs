use std::time::Instant;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::Arena;

/// Helper to build a Simulation with `n` deterministically placed particles
fn make_simulation(n: usize) -> Simulation {
    let arena = Arena {
        width: 800.0,
        height: 600.0,
    };
    let mut sim = Simulation::new(arena, Parameters::default());

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = 400.0 + (i_f * 0.37).sin() * 350.0;
        let y = 300.0 + (i_f * 0.13).cos() * 250.0;
        sim.add_particle(x, y, 8.0).expect("bench radius is valid");
    }

    sim
}

pub fn bench_step() {
    // Different particle counts to test; contact generation is O(n^2), so
    // the range stays modest
    let ns = [50, 100, 200, 400, 800];
    let steps = 10; // ticks timed per count (tune as needed)

    for n in ns {
        let mut sim = make_simulation(n);

        // Warm up
        sim.step();

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step();
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {n:5}, step = {:8.6} s, contacts = {}",
            per_step,
            sim.counters().contacts
        );
    }
}

/// Benchmark whole ticks for a range of n
/// Paste output directly into excel to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    // Steps of 50 to give a smoother graph
    for n in (50..=1600).step_by(50) {
        // Small n: average over a few ticks to smooth noise
        // Large n: fewer ticks to avoid minutes of runtime
        let steps = if n <= 400 { 10 } else { 3 };

        let mut sim = make_simulation(n);

        // Warm-up one tick
        sim.step();

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step();
        }
        let elapsed = t0.elapsed().as_secs_f64() * 1000.0; // ms total
        let ms = elapsed / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
