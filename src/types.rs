//! This module defines the core value types shared by the tape, the states and the
//! machine: symbols, head directions, transitions and the error type.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The default blank symbol used on the Turing Machine tape.
pub const DEFAULT_BLANK_SYMBOL: &str = " ";
/// The maximum number of steps a caller-side run loop should allow.
/// The engine itself never loops; this is a budget for consumers.
pub const MAX_EXECUTION_STEPS: usize = 10000;

/// A single tape symbol.
///
/// Symbols are opaque tokens drawn from a finite alphabet and are only ever
/// compared for equality. Most programs use single characters, but any string
/// token is accepted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The default blank symbol, `" "`.
    pub fn blank() -> Self {
        Self(DEFAULT_BLANK_SYMBOL.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::blank()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for Symbol {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Represents the possible directions a Turing Machine head can move.
///
/// Every move shifts the head by exactly one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("L"),
            Direction::Right => f.write_str("R"),
        }
    }
}

/// Represents a single transition rule of a state.
///
/// Source and destination are state names resolved through the machine's state
/// registry, so transitions may form self-loops and cycles freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The state that owns this transition.
    pub from: String,
    /// The state the machine moves to after applying the transition.
    pub to: String,
    /// The symbol that must be under the head for this transition to apply.
    pub read: Symbol,
    /// The symbol written at the head before moving.
    pub write: Symbol,
    /// The direction the head moves after writing.
    pub direction: Direction,
}

/// Represents various errors that can occur during Turing Machine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuringMachineError {
    /// The current state has no rule for the symbol under the head.
    ///
    /// This is how a machine stops. Whether it means "finished" or "malformed
    /// program" is for the caller to decide; the tape and current state are left
    /// exactly as they were before the failed step.
    #[error("No transition defined for state {state} and symbol '{symbol}'")]
    NoTransition { state: String, symbol: Symbol },
    /// A transition points at a state that was never registered with the machine.
    #[error("Transition from state {state} references unregistered state {destination}")]
    UndefinedState { state: String, destination: String },
    /// An empty symbol sequence was loaded onto the tape.
    #[error("Cannot load an empty symbol sequence onto the tape")]
    EmptyLoad,
    /// A built-in program lookup failed.
    #[error("Unknown program: {0}")]
    UnknownProgram(String),
}
