//! Terminal front end for the simulation.
//!
//! Prompts for grid dimensions and a step count (enter accepts the
//! defaults), then animates the run as text frames at a fixed interval,
//! stopping early if the grid settles into a still life or an oscillator.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use rust_life::{Engine, EngineConfig, Runner, RunnerConfig, StopReason};

const FRAME_INTERVAL: Duration = Duration::from_millis(200);

/// Read a whole number, re-prompting on garbage. Empty input or EOF takes
/// the default.
fn prompt_usize(input: &mut impl BufRead, label: &str, default: usize) -> io::Result<usize> {
    loop {
        print!("{} [{}]: ", label, default);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(default);
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("not a whole number: {:?}", trimmed),
        }
    }
}

fn print_frame(engine: &Engine) {
    println!();
    println!(
        "generation {}: population {}",
        engine.generation(),
        engine.population()
    );
    print!("{}", engine.grid());
}

fn run() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let rows = prompt_usize(&mut input, "Grid rows", 50)?;
    let cols = prompt_usize(&mut input, "Grid cols", 50)?;
    let steps = prompt_usize(&mut input, "Steps to run", 100)?;

    let mut engine = Engine::with_config(&EngineConfig::new(rows, cols))?;
    print_frame(&engine);

    let runner = Runner::new(RunnerConfig::new(steps as u64));
    let report = runner.run_with(&mut engine, |engine| {
        thread::sleep(FRAME_INTERVAL);
        print_frame(engine);
    });

    println!();
    match report.stop {
        StopReason::MaxSteps => {
            println!("ran {} steps", report.steps_taken);
        }
        StopReason::Cycle { first_seen, period: 1 } => {
            println!(
                "settled into a still life at generation {} after {} steps",
                first_seen, report.steps_taken
            );
        }
        StopReason::Cycle { first_seen, period } => {
            println!(
                "entered a period-{} cycle at generation {} after {} steps",
                period, first_seen, report.steps_taken
            );
        }
    }
    println!("final population: {}", report.final_population);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
