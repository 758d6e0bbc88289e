//! Arena for many singly-linked stacks sharing one contiguous buffer.
//!
//! `stack-pool` stores the nodes of arbitrarily many independent stacks in
//! a single growable buffer owned by [`StackPool<T>`]. Each stack is
//! identified by the [`Handle<T>`] of its head node; [`Handle::NIL`] is
//! the empty stack. Nodes released by [`pop`](StackPool::pop) or
//! [`free_stack`](StackPool::free_stack) go onto an internal free list and
//! are recycled by the next [`push`](StackPool::push), so building and
//! tearing down many short-lived stacks (parser work-lists, traversal
//! frontiers) costs no per-node heap traffic.
//!
//! # Key properties
//!
//! - **O(1) push/pop**: the free list makes node reuse constant-time
//! - **Stable handles**: handles are logical offsets, unaffected by
//!   backing-store reallocation
//! - **Intrusive free list**: freed nodes are threaded through the same
//!   links as live chains, with zero bookkeeping overhead per node
//! - **Single-threaded**: one writer, no internal synchronization
//!
//! # Example
//!
//! ```
//! use stack_pool::{Handle, StackPool};
//!
//! let mut pool: StackPool<i32> = StackPool::new();
//!
//! let mut stack = pool.new_stack();
//! stack = pool.push(10, stack);
//! stack = pool.push(20, stack);
//! assert_eq!(pool.iter(stack).copied().collect::<Vec<_>>(), [20, 10]);
//!
//! stack = pool.pop(stack);
//! assert_eq!(pool[stack], 10);
//!
//! stack = pool.free_stack(stack);
//! assert!(pool.is_stack_empty(stack));
//!
//! // The freed slots are recycled before the buffer grows again.
//! let other = pool.push(30, Handle::NIL);
//! assert_eq!(pool[other], 30);
//! ```
//!
//! Handles carry no ownership: using one after its node was popped or
//! freed reads whatever the recycled slot currently holds, and using a
//! handle from a different pool is bounds-checked at best. Both are
//! caller contract violations.

#![deny(missing_docs)]

mod handle;
mod iter;
mod pool;

pub use handle::Handle;
pub use iter::{CursorMut, Iter};
pub use pool::StackPool;

#[cfg(test)]
mod tests;
