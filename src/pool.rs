use std::collections::TryReserveError;

use crate::{CursorMut, Handle, Iter};

/// One slot of the backing store: a stored value plus the intrusive link
/// to the next node of whichever chain currently owns the slot.
struct Node<T> {
    value: T,
    next: Handle<T>,
}

/// Arena hosting many independent singly-linked stacks in one contiguous
/// buffer.
///
/// Every stack is a chain of nodes threaded through the pool's backing
/// store and identified by the [`Handle`] of its head node; the sentinel
/// [`Handle::NIL`] is the empty stack. Nodes freed by [`pop`](Self::pop)
/// or [`free_stack`](Self::free_stack) are recycled through an internal
/// free list (itself a chain through the same `next` links), so push/pop
/// churn across many short-lived stacks costs no per-node allocations.
///
/// Raw handle values are logical offsets, not addresses, so they stay
/// valid when the backing store reallocates on growth.
///
/// Handles are not owning and not checked beyond bounds: a handle used
/// after its node was popped or freed reads whatever the slot currently
/// holds. Keeping handles straight is the caller's obligation.
pub struct StackPool<T> {
    nodes: Vec<Node<T>>,
    free_nodes: Handle<T>,
}

impl<T> StackPool<T> {
    /// Creates an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_nodes: Handle::NIL,
        }
    }

    /// Creates a pool with pre-allocated capacity for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free_nodes: Handle::NIL,
        }
    }

    /// Returns a new empty stack: the sentinel handle.
    ///
    /// Same value as [`Handle::NIL`], always. O(1), no side effects.
    #[must_use]
    #[expect(clippy::unused_self)]
    pub const fn new_stack(&self) -> Handle<T> {
        Handle::NIL
    }

    /// Prepends `value` ahead of `head`, returning the new head.
    ///
    /// Recycles the most recently freed slot if one exists, otherwise
    /// appends a slot to the backing store (which may reallocate; raw
    /// handle values are unaffected). O(1) amortized.
    ///
    /// # Panics
    ///
    /// Panics if a recycled free-list link is out of bounds, which can
    /// only result from handle misuse such as a double [`pop`](Self::pop).
    #[must_use = "losing the returned head leaks the node until the pool is dropped"]
    pub fn push(&mut self, value: T, head: Handle<T>) -> Handle<T> {
        if self.free_nodes.is_nil() {
            self.nodes.push(Node { value, next: head });
            return Handle::from_slot(self.nodes.len() - 1);
        }
        let new_head = self.free_nodes;
        self.free_nodes = self.next(new_head);
        let node = self.node_mut(new_head);
        node.value = value;
        node.next = head;
        new_head
    }

    /// Detaches the head node of the stack at `head`, relinks it onto the
    /// free list, and returns the old head's successor. O(1).
    ///
    /// The detached slot keeps its value until the next
    /// [`push`](Self::push) overwrites it.
    ///
    /// # Panics
    ///
    /// Panics if `head` is the sentinel or out of bounds.
    #[must_use = "the returned handle is the stack's new head"]
    pub fn pop(&mut self, head: Handle<T>) -> Handle<T> {
        let new_head = self.next(head);
        self.node_mut(head).next = self.free_nodes;
        self.free_nodes = head;
        new_head
    }

    /// Releases the entire chain starting at `head` back to the free list
    /// and returns the sentinel.
    ///
    /// O(length): the chain's tail must be located so the whole chain can
    /// be attached to the free list in one relink. A sentinel `head` is a
    /// no-op.
    ///
    /// # Panics
    ///
    /// Panics if the chain contains an out-of-bounds link.
    pub fn free_stack(&mut self, head: Handle<T>) -> Handle<T> {
        if head.is_nil() {
            return Handle::NIL;
        }
        let mut tail = head;
        loop {
            let next = self.next(tail);
            if next.is_nil() {
                break;
            }
            tail = next;
        }
        self.node_mut(tail).next = self.free_nodes;
        self.free_nodes = head;
        Handle::NIL
    }

    /// Builds one stack by pushing every item of `items`, returning the
    /// final head. The last item yielded ends up on top; empty input
    /// yields the sentinel. O(n).
    pub fn stack_from_iter(&mut self, items: impl IntoIterator<Item = T>) -> Handle<T> {
        let mut head = Handle::NIL;
        for item in items {
            head = self.push(item, head);
        }
        head
    }

    /// Returns a reference to the value at `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is the sentinel or out of bounds.
    #[must_use]
    pub fn value(&self, handle: Handle<T>) -> &T {
        &self.node(handle).value
    }

    /// Returns a mutable reference to the value at `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is the sentinel or out of bounds.
    #[must_use]
    pub fn value_mut(&mut self, handle: Handle<T>) -> &mut T {
        &mut self.node_mut(handle).value
    }

    /// Returns a reference to the value at `handle`, or `None` if
    /// `handle` is the sentinel or out of bounds.
    #[must_use]
    pub fn try_value(&self, handle: Handle<T>) -> Option<&T> {
        if handle.is_nil() {
            return None;
        }
        self.nodes.get(handle.slot()).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value at `handle`, or `None`
    /// if `handle` is the sentinel or out of bounds.
    #[must_use]
    pub fn try_value_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        if handle.is_nil() {
            return None;
        }
        self.nodes
            .get_mut(handle.slot())
            .map(|node| &mut node.value)
    }

    /// Returns the successor of the node at `handle` (the sentinel for
    /// the last node of a chain).
    ///
    /// # Panics
    ///
    /// Panics if `handle` is the sentinel or out of bounds.
    #[must_use]
    pub fn next(&self, handle: Handle<T>) -> Handle<T> {
        self.node(handle).next
    }

    /// Returns the successor of the node at `handle`, or `None` if
    /// `handle` is the sentinel or out of bounds.
    #[must_use]
    pub fn try_next(&self, handle: Handle<T>) -> Option<Handle<T>> {
        if handle.is_nil() {
            return None;
        }
        self.nodes.get(handle.slot()).map(|node| node.next)
    }

    /// Returns `true` if `handle` is the empty stack (the sentinel).
    ///
    /// O(1), never fails.
    #[must_use]
    #[expect(clippy::unused_self)]
    pub const fn is_stack_empty(&self, handle: Handle<T>) -> bool {
        handle.is_nil()
    }

    /// Returns the number of node slots in the backing store, live and
    /// free together. Never decreases.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the pool holds no node slots at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the backing store's capacity in nodes.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserves capacity for at least `additional` more nodes.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Tries to reserve capacity for at least `additional` more nodes,
    /// leaving the pool untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns the backing store's allocation error if memory cannot be
    /// acquired.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.nodes.try_reserve(additional)
    }

    /// Drops every stored value and empties every stack, including the
    /// free list. Retains allocated memory for reuse.
    ///
    /// All outstanding handles become invalid.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.free_nodes = Handle::NIL;
    }

    /// Returns a forward iterator over the values of the stack at `head`,
    /// from head to sentinel.
    #[must_use]
    pub const fn iter(&self, head: Handle<T>) -> Iter<'_, T> {
        Iter::new(self, head)
    }

    /// Returns a mutable cursor positioned at `head`.
    pub const fn cursor_mut(&mut self, head: Handle<T>) -> CursorMut<'_, T> {
        CursorMut::new(self, head)
    }

    fn node(&self, handle: Handle<T>) -> &Node<T> {
        &self.nodes[handle.slot()]
    }

    fn node_mut(&mut self, handle: Handle<T>) -> &mut Node<T> {
        &mut self.nodes[handle.slot()]
    }
}

impl<T> Default for StackPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::ops::Index<Handle<T>> for StackPool<T> {
    type Output = T;

    fn index(&self, handle: Handle<T>) -> &T {
        self.value(handle)
    }
}

impl<T> std::ops::IndexMut<Handle<T>> for StackPool<T> {
    fn index_mut(&mut self, handle: Handle<T>) -> &mut T {
        self.value_mut(handle)
    }
}
