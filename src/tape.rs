//! This module defines the `Tape`, an unbounded sequence of symbols with a single
//! read/write head. Cells are materialized lazily as the head walks past either end.

use crate::types::{Direction, Symbol, TuringMachineError};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// An unbounded, bidirectionally growable tape.
///
/// The tape always holds at least one cell and the head always points at a valid
/// cell. Moving past either end appends a blank cell on that side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: VecDeque<Symbol>,
    head: usize,
    blank: Symbol,
}

/// A read-only copy of the tape contents and head position, for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapeSnapshot {
    pub cells: Vec<Symbol>,
    pub head: usize,
}

impl Tape {
    /// Creates a tape holding a single blank cell, using the default blank symbol.
    pub fn new() -> Self {
        Self::with_blank(Symbol::blank())
    }

    /// Creates a tape holding a single `blank` cell, with the head on it.
    pub fn with_blank(blank: impl Into<Symbol>) -> Self {
        let blank = blank.into();
        Self {
            cells: VecDeque::from([blank.clone()]),
            head: 0,
            blank,
        }
    }

    /// Returns the symbol under the head.
    pub fn get(&self) -> &Symbol {
        &self.cells[self.head]
    }

    /// Overwrites the symbol under the head.
    pub fn set(&mut self, symbol: impl Into<Symbol>) {
        self.cells[self.head] = symbol.into();
    }

    /// Moves the head one cell in `direction`, growing the tape if the head
    /// walks off either end.
    pub fn move_head(&mut self, direction: Direction) {
        match direction {
            Direction::Right => {
                self.head += 1;
                if self.head == self.cells.len() {
                    self.cells.push_back(self.blank.clone());
                }
            }
            Direction::Left => {
                if self.head == 0 {
                    // Extend tape to the left; the head stays on the new cell.
                    self.cells.push_front(self.blank.clone());
                } else {
                    self.head -= 1;
                }
            }
        }
    }

    /// Replaces the whole tape with `symbols` and puts the head on the first cell.
    ///
    /// # Errors
    ///
    /// * `TuringMachineError::EmptyLoad` if `symbols` is empty. The tape is left untouched.
    pub fn load<I, S>(&mut self, symbols: I) -> Result<(), TuringMachineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let cells: VecDeque<Symbol> = symbols.into_iter().map(Into::into).collect();
        if cells.is_empty() {
            return Err(TuringMachineError::EmptyLoad);
        }

        tracing::debug!(len = cells.len(), "loading tape");
        self.cells = cells;
        self.head = 0;
        Ok(())
    }

    pub fn head(&self) -> usize {
        self.head
    }

    /// Returns the number of materialized cells. Never zero.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a tape holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn blank(&self) -> &Symbol {
        &self.blank
    }

    /// Iterates over the materialized cells from left to right.
    pub fn cells(&self) -> impl Iterator<Item = &Symbol> {
        self.cells.iter()
    }

    pub fn snapshot(&self) -> TapeSnapshot {
        TapeSnapshot {
            cells: self.cells.iter().cloned().collect(),
            head: self.head,
        }
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}
