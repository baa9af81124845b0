//! Predefined programs, built directly against the engine API.

use crate::machine::Machine;
use crate::state::State;
use crate::types::{Direction, TuringMachineError};
use std::collections::HashMap;

/// A named, ready-to-run machine configuration.
#[derive(Debug, Clone, Copy)]
pub struct Program {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> Result<Machine, TuringMachineError>,
}

impl Program {
    /// Builds a fresh machine with this program's states and initial tape.
    pub fn machine(&self) -> Result<Machine, TuringMachineError> {
        (self.build)()
    }
}

lazy_static::lazy_static! {
    pub static ref PROGRAMS: Vec<Program> = vec![
        Program {
            name: "ping-pong",
            description: "Two states bouncing between a wall of 'b' and the left edge",
            build: ping_pong,
        },
        Program {
            name: "fill",
            description: "A single self-looping state writing 'a' forever",
            build: fill,
        },
        Program {
            name: "busy-beaver-3",
            description: "3-state, 2-symbol busy beaver; halts after 14 steps with six 1s",
            build: busy_beaver_3,
        },
        Program {
            name: "binary-increment",
            description: "Adds one to the binary number on the tape",
            build: binary_increment,
        },
    ];

    static ref PROGRAM_INDEX: HashMap<&'static str, usize> = PROGRAMS
        .iter()
        .enumerate()
        .map(|(i, program)| (program.name, i))
        .collect();
}

pub struct ProgramManager;

impl ProgramManager {
    /// Get the number of available programs
    pub fn get_program_count() -> usize {
        PROGRAMS.len()
    }

    /// Get a program by its index
    pub fn get_program_by_index(index: usize) -> Result<Program, TuringMachineError> {
        PROGRAMS
            .get(index)
            .copied()
            .ok_or_else(|| TuringMachineError::UnknownProgram(format!("#{}", index)))
    }

    /// Get a program by its name
    pub fn get_program_by_name(name: &str) -> Result<Program, TuringMachineError> {
        PROGRAM_INDEX
            .get(name)
            .map(|&index| PROGRAMS[index])
            .ok_or_else(|| TuringMachineError::UnknownProgram(name.to_string()))
    }

    /// List all program names
    pub fn list_program_names() -> Vec<&'static str> {
        PROGRAMS.iter().map(|program| program.name).collect()
    }
}

fn ping_pong() -> Result<Machine, TuringMachineError> {
    let mut state_a = State::new("A");
    let mut state_b = State::new("B");

    state_a.add_transition("A", " ", "a", Direction::Right);
    state_a.add_transition("B", "b", "b", Direction::Left);

    state_b.add_transition("A", " ", "a", Direction::Right);
    state_b.add_transition("B", "a", "a", Direction::Left);

    let mut machine = Machine::new(state_a);
    machine.add_state(state_b);
    machine.load_input([" ", " ", " ", " ", "b"])?;
    Ok(machine)
}

fn fill() -> Result<Machine, TuringMachineError> {
    let mut state = State::new("A");
    state.add_transition("A", " ", "a", Direction::Right);
    Ok(Machine::new(state))
}

fn busy_beaver_3() -> Result<Machine, TuringMachineError> {
    let mut a = State::new("A");
    let mut b = State::new("B");
    let mut c = State::new("C");

    a.add_transition("B", '0', '1', Direction::Right);
    a.add_transition("H", '1', '1', Direction::Right);
    b.add_transition("C", '0', '0', Direction::Right);
    b.add_transition("B", '1', '1', Direction::Right);
    c.add_transition("C", '0', '1', Direction::Left);
    c.add_transition("A", '1', '1', Direction::Left);

    let mut machine = Machine::with_blank(a, '0');
    machine.add_state(b);
    machine.add_state(c);
    // No rules: stepping in H reports NoTransition.
    machine.add_state(State::new("H"));
    Ok(machine)
}

fn binary_increment() -> Result<Machine, TuringMachineError> {
    let mut right = State::new("right");
    let mut carry = State::new("carry");

    // Walk to the blank after the last digit, then propagate the carry leftwards.
    right.add_transition("right", '0', '0', Direction::Right);
    right.add_transition("right", '1', '1', Direction::Right);
    right.add_transition("carry", ' ', ' ', Direction::Left);

    carry.add_transition("carry", '1', '0', Direction::Left);
    carry.add_transition("done", '0', '1', Direction::Left);
    carry.add_transition("done", ' ', '1', Direction::Left);

    let mut machine = Machine::new(right);
    machine.add_state(carry);
    machine.add_state(State::new("done"));
    machine.load_input("1011".chars())?;
    Ok(machine)
}
