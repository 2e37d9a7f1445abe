//! Reusable parser scratch state.

use std::ops::{Deref, DerefMut};
use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::ast::Statement;

/// Per-parse scratch state.
///
/// Lives in a [`ParserPool`] between parses and is reset to its zero value
/// whenever it goes back.
#[derive(Debug, Default)]
pub struct ParserState {
    /// Current recursion depth.
    pub(crate) depth: usize,
    /// The recognised prefix of the DDL statement being parsed.
    pub(crate) partial_ddl: Option<Statement>,
}

impl ParserState {
    /// Clears the state.
    pub fn reset(&mut self) {
        self.depth = 0;
        self.partial_ddl = None;
    }

    /// Returns true if the state holds nothing.
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        self.depth == 0 && self.partial_ddl.is_none()
    }
}

/// A pool of [`ParserState`] values shared between threads.
#[derive(Debug, Default)]
pub struct ParserPool {
    states: Mutex<Vec<ParserState>>,
}

impl ParserPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a state out of the pool, allocating one if the pool is empty.
    ///
    /// The state returns to the pool when the guard is dropped.
    pub fn acquire(&self) -> PooledState<'_> {
        let state = self.states.lock().pop().unwrap_or_else(|| {
            tracing::trace!("allocating parser state");
            ParserState::default()
        });
        PooledState { pool: self, state }
    }

    /// Returns the number of idle states.
    #[must_use]
    pub fn idle(&self) -> usize {
        self.states.lock().len()
    }
}

/// A [`ParserState`] on loan from a [`ParserPool`].
#[derive(Debug)]
pub struct PooledState<'p> {
    pool: &'p ParserPool,
    state: ParserState,
}

impl Deref for PooledState<'_> {
    type Target = ParserState;

    fn deref(&self) -> &ParserState {
        &self.state
    }
}

impl DerefMut for PooledState<'_> {
    fn deref_mut(&mut self) -> &mut ParserState {
        &mut self.state
    }
}

impl Drop for PooledState<'_> {
    fn drop(&mut self) {
        let mut state = std::mem::take(&mut self.state);
        state.reset();
        self.pool.states.lock().push(state);
    }
}

/// Returns the process-wide pool.
pub fn global() -> &'static ParserPool {
    static POOL: OnceLock<ParserPool> = OnceLock::new();
    POOL.get_or_init(ParserPool::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_reused_and_reset() {
        let pool = ParserPool::new();
        {
            let mut state = pool.acquire();
            state.depth = 3;
            state.partial_ddl = Some(Statement::Begin);
        }
        assert_eq!(pool.idle(), 1);

        let state = pool.acquire();
        assert!(state.is_clear());
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn test_concurrent_acquire() {
        let pool = ParserPool::new();
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        let mut state = pool.acquire();
                        assert!(state.is_clear());
                        state.depth += 1;
                    }
                });
            }
        });
        assert!(pool.idle() >= 1);
        assert!(pool.idle() <= 8);
    }
}
