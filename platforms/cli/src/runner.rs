//! Run policy: how many steps to take and what a failed step means.

use turing_sim::{Machine, Symbol, Transition, TuringMachineError};

/// Why a run stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The current state had no rule for the symbol under the head.
    Halted { state: String, symbol: Symbol },
    /// The step budget ran out before the machine halted.
    BudgetExhausted,
}

/// Steps `machine` at most `budget` times, calling `on_step` after every applied
/// transition.
///
/// A missing transition is treated as a normal halt. Any other step failure is
/// returned as an error.
pub fn run<F>(
    machine: &mut Machine,
    budget: usize,
    mut on_step: F,
) -> Result<Outcome, TuringMachineError>
where
    F: FnMut(&Machine, &Transition),
{
    for _ in 0..budget {
        match machine.step() {
            Ok(transition) => on_step(machine, &transition),
            Err(TuringMachineError::NoTransition { state, symbol }) => {
                return Ok(Outcome::Halted { state, symbol });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(Outcome::BudgetExhausted)
}

/// Turns command-line input into tape symbols: one symbol per character, with `_`
/// standing for the machine's blank.
pub fn parse_input(input: &str, blank: &Symbol) -> Vec<Symbol> {
    input
        .chars()
        .map(|c| if c == '_' { blank.clone() } else { Symbol::from(c) })
        .collect()
}
