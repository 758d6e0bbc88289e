use crate::{Handle, StackPool};

/// Forward iterator over the values of one stack, head to sentinel.
///
/// Created by [`StackPool::iter`]. Cheaply copyable; a fresh iterator can
/// always be re-created from any handle. Two iterators compare equal iff
/// they walk the same pool and sit at the same node, so "at end" can be
/// tested as equality against `pool.iter(Handle::NIL)`.
pub struct Iter<'a, T> {
    pool: &'a StackPool<T>,
    current: Handle<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(pool: &'a StackPool<T>, head: Handle<T>) -> Self {
        Self {
            pool,
            current: head,
        }
    }

    /// Handle of the node the iterator will yield next (the sentinel once
    /// the chain is exhausted).
    #[must_use]
    pub const fn handle(&self) -> Handle<T> {
        self.current
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_nil() {
            return None;
        }
        let value = self.pool.value(self.current);
        self.current = self.pool.next(self.current);
        Some(value)
    }
}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Iter<'_, T> {}

impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.pool, other.pool) && self.current == other.current
    }
}

impl<T> Eq for Iter<'_, T> {}

impl<T> std::fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Iter({:?})", self.current)
    }
}

/// Mutable forward cursor over the values of one stack.
///
/// Created by [`StackPool::cursor_mut`]. The mutable counterpart of
/// [`Iter`]: it borrows the pool exclusively and hands out one short-lived
/// `&mut T` at a time, so the chain's links cannot be rewired mid-walk.
pub struct CursorMut<'a, T> {
    pool: &'a mut StackPool<T>,
    current: Handle<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) const fn new(pool: &'a mut StackPool<T>, head: Handle<T>) -> Self {
        Self {
            pool,
            current: head,
        }
    }

    /// Handle of the node the cursor is positioned at (the sentinel once
    /// the chain is exhausted).
    #[must_use]
    pub const fn handle(&self) -> Handle<T> {
        self.current
    }

    /// Returns `true` once the cursor has reached the sentinel.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.current.is_nil()
    }

    /// Moves the cursor to the current node's successor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the sentinel.
    pub fn advance(&mut self) {
        self.current = self.pool.next(self.current);
    }

    /// Returns a mutable reference to the current node's value.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the sentinel.
    #[must_use]
    pub fn value(&mut self) -> &mut T {
        self.pool.value_mut(self.current)
    }
}

impl<T> std::fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CursorMut({:?})", self.current)
    }
}
