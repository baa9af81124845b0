//! This crate provides the core logic for a single-tape Turing Machine simulator.
//! It includes the unbounded tape, the per-state transition tables, the step engine
//! that drives them, and a small collection of predefined programs.

pub mod machine;
pub mod programs;
pub mod state;
pub mod tape;
pub mod types;

/// Re-exports the `Machine` struct from the machine module.
pub use machine::Machine;
/// Re-exports `Program`, `ProgramManager`, and `PROGRAMS` from the programs module.
pub use programs::{Program, ProgramManager, PROGRAMS};
/// Re-exports the `State` struct from the state module.
pub use state::State;
/// Re-exports the tape and its read-only snapshot.
pub use tape::{Tape, TapeSnapshot};
/// Re-exports the shared value and error types.
pub use types::{
    Direction, Symbol, Transition, TuringMachineError, DEFAULT_BLANK_SYMBOL, MAX_EXECUTION_STEPS,
};
