mod render;
mod runner;

use anyhow::{Context, Result};
use clap::Parser;
use runner::Outcome;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use turing_sim::{Machine, ProgramManager, MAX_EXECUTION_STEPS, PROGRAMS};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(after_help = "EXAMPLES:
  turing-sim-cli --program ping-pong --steps 10
  turing-sim-cli --program binary-increment --input 111 --steps 100
  RUST_LOG=turing_sim=trace turing-sim-cli --program busy-beaver-3 --steps 20")]
struct Cli {
    /// Name of the built-in program to run
    #[clap(short, long, default_value = "ping-pong")]
    program: String,

    /// Initial tape contents, one symbol per character ('_' is the blank)
    #[clap(short, long)]
    input: Option<String>,

    /// Maximum number of steps to execute
    #[clap(short, long, default_value_t = 10)]
    steps: usize,

    /// Print one JSON object per step instead of rendered tapes
    #[clap(long)]
    json: bool,

    /// Print every state's transition table before running
    #[clap(short, long)]
    transitions: bool,

    /// List the built-in programs and exit
    #[clap(short, long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    if cli.list {
        for program in PROGRAMS.iter() {
            println!("{:<18} {}", program.name, program.description);
        }
        return Ok(());
    }

    let program = ProgramManager::get_program_by_name(&cli.program).with_context(|| {
        format!(
            "available programs: {}",
            ProgramManager::list_program_names().join(", ")
        )
    })?;
    let mut machine = program
        .machine()
        .with_context(|| format!("failed to build program '{}'", program.name))?;

    if let Some(input) = &cli.input {
        let symbols = runner::parse_input(input, machine.tape().blank());
        machine
            .load_input(symbols)
            .context("input must contain at least one symbol")?;
    }

    if cli.transitions {
        let mut states: Vec<_> = machine.states().collect();
        states.sort_by(|a, b| a.name().cmp(b.name()));
        for state in states {
            println!("{}", render::render_transitions(state));
        }
        println!();
    }

    let budget = cli.steps.min(MAX_EXECUTION_STEPS);
    if budget < cli.steps {
        tracing::warn!(requested = cli.steps, budget, "step budget capped");
    }

    print_frame(&machine, cli.json)?;
    let outcome = runner::run(&mut machine, budget, |machine, _| {
        if let Err(e) = print_frame(machine, cli.json) {
            tracing::error!(%e, "failed to print frame");
        }
    })
    .with_context(|| format!("program '{}' failed", program.name))?;

    match outcome {
        Outcome::Halted { state, symbol } => {
            println!(
                "\nHalted in state {} on '{}' after {} steps.",
                state,
                symbol,
                machine.step_count()
            );
        }
        Outcome::BudgetExhausted => {
            println!("\nStopped after {} steps.", machine.step_count());
        }
    }

    Ok(())
}

fn print_frame(machine: &Machine, json: bool) -> Result<()> {
    if json {
        let frame = serde_json::json!({
            "step": machine.step_count(),
            "state": machine.current_state_name(),
            "tape": machine.snapshot(),
        });
        println!("{}", serde_json::to_string(&frame)?);
    } else {
        println!(
            "step {} state {}\n{}",
            machine.step_count(),
            machine.current_state_name(),
            render::render_tape(&machine.snapshot())
        );
    }
    Ok(())
}
