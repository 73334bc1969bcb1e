//! Module with the checkpoint stack of the cursor.
//!
//! Checkpoints support speculative parsing. A parser saves the offset before it tries an
//! alternative and either commits to the consumed input or rolls back to the saved offset.
//! Checkpoints nest strictly LIFO.
//!
//! The manual protocol is [Cursor::push_state] followed by exactly one of [Cursor::pop_state]
//! (commit) or [Cursor::restore_state] (roll back). The scoped variant is [Cursor::speculate],
//! which returns a [Speculation] guard that rolls back when dropped unless it was committed.
use std::ops::{Deref, DerefMut};

use log::trace;

use crate::{Cursor, Unit};

impl<'a, U: Unit> Cursor<'a, U> {
    /// Saves the current offset on the checkpoint stack.
    pub fn push_state(&mut self) {
        self.checkpoints.push(self.index());
        trace!(
            "Push checkpoint {} (depth {})",
            self.index(),
            self.checkpoints.len()
        );
    }

    /// Discards the most recent checkpoint without changing the offset.
    ///
    /// # Panics
    /// Panics if there is no checkpoint, i.e. pushes and pops are unbalanced.
    pub fn pop_state(&mut self) {
        let Some(offset) = self.checkpoints.pop() else {
            panic!("pop_state called without a matching push_state");
        };
        trace!(
            "Pop checkpoint {} (depth {})",
            offset,
            self.checkpoints.len()
        );
    }

    /// Resets the offset to the most recent checkpoint and discards the checkpoint.
    ///
    /// # Panics
    /// Panics if there is no checkpoint, i.e. pushes and restores are unbalanced.
    pub fn restore_state(&mut self) {
        let Some(offset) = self.checkpoints.pop() else {
            panic!("restore_state called without a matching push_state");
        };
        trace!(
            "Restore checkpoint {} from {} (depth {})",
            offset,
            self.index(),
            self.checkpoints.len()
        );
        self.reset_to(offset);
    }

    /// The number of open checkpoints.
    #[inline]
    pub fn checkpoints(&self) -> usize {
        self.checkpoints.len()
    }

    /// Pushes a checkpoint and returns a guard that owns it.
    ///
    /// The guard dereferences to the cursor. Dropping the guard restores the checkpoint, calling
    /// [Speculation::commit] discards it and keeps the consumed input.
    ///
    /// ```rust
    /// use readr::Reader;
    ///
    /// let mut reader = Reader::from("->x");
    /// {
    ///     let mut attempt = reader.speculate();
    ///     assert!(attempt.match_literal("->"));
    ///     assert!(!attempt.match_literal("y"));
    /// }
    /// assert_eq!(reader.index(), 0);
    ///
    /// let mut attempt = reader.speculate();
    /// assert!(attempt.match_literal("->"));
    /// attempt.commit();
    /// assert_eq!(reader.index(), 2);
    /// ```
    pub fn speculate(&mut self) -> Speculation<'_, 'a, U> {
        self.push_state();
        let depth = self.checkpoints.len();
        Speculation {
            cursor: self,
            depth,
            committed: false,
        }
    }

    /// Runs `f` speculatively.
    /// The consumed input is kept if `f` returns `Some`, otherwise the cursor is rolled back.
    pub fn attempt<T, F>(&mut self, f: F) -> Option<T>
    where
        F: FnOnce(&mut Cursor<'a, U>) -> Option<T>,
    {
        let mut speculation = self.speculate();
        let result = f(&mut *speculation);
        if result.is_some() {
            speculation.commit();
        }
        result
    }
}

/// A checkpoint that is restored when it goes out of scope.
///
/// Created by [Cursor::speculate].
#[derive(Debug)]
pub struct Speculation<'c, 'a, U: Unit> {
    cursor: &'c mut Cursor<'a, U>,
    // The stack depth that includes this speculation's checkpoint.
    depth: usize,
    committed: bool,
}

impl<U: Unit> Speculation<'_, '_, U> {
    /// Keeps the consumed input and discards the checkpoint.
    pub fn commit(mut self) {
        self.check_depth();
        self.cursor.pop_state();
        self.committed = true;
    }

    /// Rolls back to the checkpoint. Equivalent to dropping the guard.
    pub fn rollback(self) {}

    /// The offset the speculation started at.
    ///
    /// # Panics
    /// Panics if checkpoints pushed or popped through the guard are unbalanced.
    pub fn start(&self) -> usize {
        self.check_depth();
        self.cursor.checkpoints[self.depth - 1]
    }

    fn check_depth(&self) {
        assert_eq!(
            self.cursor.checkpoints(),
            self.depth,
            "unbalanced checkpoints inside a speculation"
        );
    }
}

impl<'a, U: Unit> Deref for Speculation<'_, 'a, U> {
    type Target = Cursor<'a, U>;

    fn deref(&self) -> &Self::Target {
        self.cursor
    }
}

impl<U: Unit> DerefMut for Speculation<'_, '_, U> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cursor
    }
}

impl<U: Unit> Drop for Speculation<'_, '_, U> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if std::thread::panicking() {
            // Unwinding already; the guard's own checkpoint may be gone.
            if self.cursor.checkpoints() < self.depth {
                return;
            }
        } else {
            self.check_depth();
        }
        self.cursor.restore_state();
    }
}
