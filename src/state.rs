//! This module defines `State`, a named node of the machine's control graph together
//! with the transition table keyed by the symbol read under the head.

use crate::types::{Direction, Symbol, Transition};
use std::collections::BTreeMap;

/// A named control state owning its transition table.
///
/// The table holds at most one transition per read symbol. Adding a transition for a
/// symbol that already has one replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    name: String,
    transitions: BTreeMap<Symbol, Transition>,
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts the transition taken when `read` is under the head, replacing any
    /// existing one for that symbol.
    ///
    /// `to` names the destination state. It may be this state, or a state that has
    /// not been registered with the machine yet; it only has to resolve by the time
    /// the transition is taken.
    ///
    /// # Returns
    ///
    /// * `Some(Transition)` holding the replaced transition, if there was one.
    /// * `None` otherwise.
    pub fn add_transition(
        &mut self,
        to: impl Into<String>,
        read: impl Into<Symbol>,
        write: impl Into<Symbol>,
        direction: Direction,
    ) -> Option<Transition> {
        let read = read.into();
        let transition = Transition {
            from: self.name.clone(),
            to: to.into(),
            read: read.clone(),
            write: write.into(),
            direction,
        };

        self.transitions.insert(read, transition)
    }

    /// Returns the transition for `read`, or `None` if this state has no rule for it.
    pub fn get_transition(&self, read: &Symbol) -> Option<&Transition> {
        self.transitions.get(read)
    }

    /// Iterates over the transitions, ordered by read symbol.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.values()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
