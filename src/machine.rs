//! This module defines the `Machine` struct, which drives a single-tape Turing Machine.
//! It owns the tape and the registry of states, and advances the computation one
//! transition at a time.

use crate::state::State;
use crate::tape::{Tape, TapeSnapshot};
use crate::types::{Symbol, Transition, TuringMachineError};
use std::collections::HashMap;

/// Represents a single-tape deterministic Turing Machine.
///
/// The machine owns every state by name, so transitions only carry the name of their
/// destination. The current state always names a registered state.
///
/// There is no built-in run loop and no halted flag: a machine stops when `step`
/// reports `TuringMachineError::NoTransition`, and how many steps to take is up to
/// the caller.
#[derive(Debug, Clone)]
pub struct Machine {
    tape: Tape,
    states: HashMap<String, State>,
    current: String,
    step_count: usize,
}

impl Machine {
    /// Creates a machine starting in `initial`, with a single blank cell on the tape.
    pub fn new(initial: State) -> Self {
        Self::from_parts(initial, Tape::new())
    }

    /// Like `new`, but the tape uses `blank` for every cell it materializes.
    pub fn with_blank(initial: State, blank: impl Into<Symbol>) -> Self {
        Self::from_parts(initial, Tape::with_blank(blank))
    }

    fn from_parts(initial: State, tape: Tape) -> Self {
        let current = initial.name().to_string();
        let mut states = HashMap::new();
        states.insert(current.clone(), initial);

        Self {
            tape,
            states,
            current,
            step_count: 0,
        }
    }

    /// Registers `state` under its name, replacing any state already registered
    /// under that name.
    ///
    /// # Returns
    ///
    /// * `Some(State)` holding the replaced registration, if there was one.
    /// * `None` otherwise.
    pub fn add_state(&mut self, state: State) -> Option<State> {
        let name = state.name().to_string();
        let replaced = self.states.insert(name.clone(), state);
        if replaced.is_some() {
            tracing::debug!(state = %name, "replaced state registration");
        } else {
            tracing::debug!(state = %name, "registered state");
        }
        replaced
    }

    /// Replaces the tape contents with `symbols` and moves the head to the first cell.
    ///
    /// This may be called at any time, including between steps. The current state
    /// and step count are not affected.
    ///
    /// # Errors
    ///
    /// * `TuringMachineError::EmptyLoad` if `symbols` is empty.
    pub fn load_input<I, S>(&mut self, symbols: I) -> Result<(), TuringMachineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.tape.load(symbols)
    }

    /// Executes a single step of the computation.
    ///
    /// Reads the symbol under the head, looks up the current state's transition for
    /// it, writes the transition's symbol, moves the head and switches to the
    /// destination state. The write and the move always both happen, even when the
    /// written symbol equals the one read.
    ///
    /// # Returns
    ///
    /// * `Ok(Transition)` with the transition that was applied.
    ///
    /// # Errors
    ///
    /// * `TuringMachineError::NoTransition` if the current state has no rule for the
    ///   symbol under the head. This is how a machine halts.
    /// * `TuringMachineError::UndefinedState` if the matched rule points at a state
    ///   that is not registered.
    ///
    /// On error the tape, head, current state and step count are left unchanged.
    pub fn step(&mut self) -> Result<Transition, TuringMachineError> {
        let symbol = self.tape.get();
        let transition = match self.current_state().get_transition(symbol) {
            Some(transition) => transition.clone(),
            None => {
                tracing::debug!(state = %self.current, symbol = %symbol, "no transition");
                return Err(TuringMachineError::NoTransition {
                    state: self.current.clone(),
                    symbol: symbol.clone(),
                });
            }
        };

        if !self.states.contains_key(&transition.to) {
            return Err(TuringMachineError::UndefinedState {
                state: transition.from,
                destination: transition.to,
            });
        }

        self.tape.set(transition.write.clone());
        self.tape.move_head(transition.direction);
        self.current.clone_from(&transition.to);
        self.step_count += 1;

        tracing::trace!(
            step = self.step_count,
            from = %transition.from,
            read = %transition.read,
            write = %transition.write,
            direction = %transition.direction,
            to = %transition.to,
            "applied transition"
        );

        Ok(transition)
    }

    /// Returns the current state.
    pub fn current_state(&self) -> &State {
        &self.states[self.current.as_str()]
    }

    pub fn current_state_name(&self) -> &str {
        &self.current
    }

    /// Returns the registered state called `name`, if any.
    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.get(name)
    }

    /// Returns the registered state called `name` for wiring further transitions.
    pub fn state_mut(&mut self, name: &str) -> Option<&mut State> {
        self.states.get_mut(name)
    }

    /// Iterates over all registered states, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.values()
    }

    /// Returns the symbol currently under the head.
    pub fn symbol(&self) -> &Symbol {
        self.tape.get()
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn snapshot(&self) -> TapeSnapshot {
        self.tape.snapshot()
    }

    /// Returns the number of steps applied so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn contents(machine: &Machine) -> String {
        machine.tape().cells().map(Symbol::as_str).collect()
    }

    fn create_ping_pong_machine() -> Machine {
        let mut state_a = State::new("A");
        let mut state_b = State::new("B");

        state_a.add_transition("A", " ", "a", Direction::Right);
        state_a.add_transition("B", "b", "b", Direction::Left);
        state_b.add_transition("A", " ", "a", Direction::Right);
        state_b.add_transition("B", "a", "a", Direction::Left);

        let mut machine = Machine::new(state_a);
        machine.add_state(state_b);
        machine.load_input([" ", " ", " ", " ", "b"]).unwrap();
        machine
    }

    #[test]
    fn test_machine_creation() {
        let machine = Machine::new(State::new("start"));

        assert_eq!(machine.current_state_name(), "start");
        assert_eq!(machine.current_state().name(), "start");
        assert_eq!(machine.tape().len(), 1);
        assert_eq!(machine.symbol(), &Symbol::blank());
        assert_eq!(machine.step_count(), 0);
    }

    #[test]
    fn test_ping_pong_trace() {
        let mut machine = create_ping_pong_machine();

        let expected = [
            ("a   b", 1, "A"),
            ("aa  b", 2, "A"),
            ("aaa b", 3, "A"),
            ("aaaab", 4, "A"),
            ("aaaab", 3, "B"),
            ("aaaab", 2, "B"),
            ("aaaab", 1, "B"),
            ("aaaab", 0, "B"),
            (" aaaab", 0, "B"),
            ("aaaaab", 1, "A"),
        ];

        for (i, (tape, head, state)) in expected.iter().enumerate() {
            machine.step().unwrap();
            assert_eq!(contents(&machine), *tape, "tape after step {}", i + 1);
            assert_eq!(machine.tape().head(), *head, "head after step {}", i + 1);
            assert_eq!(machine.current_state_name(), *state, "state after step {}", i + 1);
        }
        assert_eq!(machine.step_count(), 10);
    }

    #[test]
    fn test_self_loop_convergence() {
        let mut state = State::new("A");
        state.add_transition("A", " ", "a", Direction::Right);
        let mut machine = Machine::new(state);

        for _ in 0..7 {
            machine.step().unwrap();
        }

        let snapshot = machine.snapshot();
        assert_eq!(snapshot.head, 7);
        assert_eq!(contents(&machine), "aaaaaaa ");
        assert_eq!(machine.current_state_name(), "A");
    }

    #[test]
    fn test_write_lands_on_pre_step_cell() {
        let mut state = State::new("A");
        state.add_transition("A", "x", "y", Direction::Left);
        state.add_transition("A", "q", "q", Direction::Right);
        let mut machine = Machine::new(state);
        machine.load_input(["q", "x", "q"]).unwrap();
        machine.step().unwrap();
        assert_eq!(machine.tape().head(), 1);

        let transition = machine.step().unwrap();

        assert_eq!(transition.write, "y");
        assert_eq!(machine.tape().head(), 0);
        assert_eq!(contents(&machine), "qyq");
    }

    #[test]
    fn test_identity_write_still_moves() {
        let mut state = State::new("A");
        state.add_transition("A", "1", "1", Direction::Right);
        let mut machine = Machine::new(state);
        machine.load_input(["1"]).unwrap();

        machine.step().unwrap();

        assert_eq!(machine.tape().head(), 1);
        assert_eq!(contents(&machine), "1 ");
    }

    #[test]
    fn test_missing_transition_leaves_machine_unchanged() {
        let mut state = State::new("A");
        state.add_transition("A", "a", "b", Direction::Right);
        let mut machine = Machine::new(state);
        machine.load_input(["a", "z"]).unwrap();
        machine.step().unwrap();
        let before = machine.snapshot();

        let result = machine.step();

        assert_eq!(
            result,
            Err(TuringMachineError::NoTransition {
                state: "A".to_string(),
                symbol: Symbol::from('z'),
            })
        );
        assert_eq!(machine.snapshot(), before);
        assert_eq!(machine.current_state_name(), "A");
        assert_eq!(machine.step_count(), 1);

        // Failing again yields the same outcome; nothing is retried or skipped.
        assert!(matches!(
            machine.step(),
            Err(TuringMachineError::NoTransition { .. })
        ));
    }

    #[test]
    fn test_unregistered_destination_is_rejected_before_writing() {
        let mut state = State::new("A");
        state.add_transition("ghost", " ", "x", Direction::Right);
        let mut machine = Machine::new(state);
        let before = machine.snapshot();

        let result = machine.step();

        assert_eq!(
            result,
            Err(TuringMachineError::UndefinedState {
                state: "A".to_string(),
                destination: "ghost".to_string(),
            })
        );
        assert_eq!(machine.snapshot(), before);
        assert_eq!(machine.current_state_name(), "A");

        machine.add_state(State::new("ghost"));
        machine.step().unwrap();
        assert_eq!(machine.current_state_name(), "ghost");
    }

    #[test]
    fn test_add_state_replaces_by_name() {
        let mut first = State::new("B");
        first.add_transition("B", " ", "1", Direction::Right);
        let mut second = State::new("B");
        second.add_transition("B", " ", "2", Direction::Right);

        let mut start = State::new("A");
        start.add_transition("B", " ", " ", Direction::Right);
        let mut machine = Machine::new(start);

        assert!(machine.add_state(first).is_none());
        let replaced = machine.add_state(second).unwrap();
        assert_eq!(replaced.len(), 1);
        assert_eq!(machine.states().count(), 2);

        machine.step().unwrap();
        machine.step().unwrap();
        assert_eq!(contents(&machine), " 2 ");
    }

    #[test]
    fn test_wiring_after_registration() {
        let mut machine = Machine::new(State::new("A"));
        machine.add_state(State::new("B"));

        machine
            .state_mut("A")
            .unwrap()
            .add_transition("B", " ", "x", Direction::Right);

        machine.step().unwrap();
        assert_eq!(machine.current_state_name(), "B");
        assert!(machine.state("B").unwrap().is_empty());
        assert!(machine.state("C").is_none());
    }

    #[test]
    fn test_load_input_mid_run_resets_tape_only() {
        let mut machine = create_ping_pong_machine();
        for _ in 0..5 {
            machine.step().unwrap();
        }
        assert_eq!(machine.current_state_name(), "B");

        machine.load_input(["a", "a"]).unwrap();

        assert_eq!(machine.tape().head(), 0);
        assert_eq!(contents(&machine), "aa");
        assert_eq!(machine.current_state_name(), "B");
        assert_eq!(machine.step_count(), 5);

        // B walks left off the loaded input, then writes on the new blank cell.
        machine.step().unwrap();
        assert_eq!(contents(&machine), " aa");
        machine.step().unwrap();
        assert_eq!(contents(&machine), "aaa");
        assert_eq!(machine.current_state_name(), "A");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let mut machine = create_ping_pong_machine();

        let result = machine.load_input(Vec::<&str>::new());

        assert_eq!(result, Err(TuringMachineError::EmptyLoad));
        assert_eq!(contents(&machine), "    b");
    }

    #[test]
    fn test_custom_blank() {
        let mut state = State::new("A");
        state.add_transition("A", "_", "1", Direction::Left);
        let mut machine = Machine::with_blank(state, '_');

        machine.step().unwrap();
        machine.step().unwrap();

        assert_eq!(contents(&machine), "_11");
        assert_eq!(machine.tape().blank(), "_");
    }
}
