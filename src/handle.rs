use std::marker::PhantomData;

/// Index-based address of a node in a [`StackPool`](crate::StackPool).
///
/// A handle names either one node (the head of a chain) or nothing at all:
/// [`Handle::NIL`] is the reserved sentinel meaning "no node", and doubles
/// as the empty stack. Raw handle values are 1-based — slot `i` of the
/// backing store is addressed as `i + 1` — so `0` can serve as the
/// sentinel while the raw type stays unsigned.
///
/// Implements [`Copy`], so it can be freely duplicated and stored in data
/// structures. A handle carries no ownership: it stays meaningful only
/// while the node it names has not been popped or freed, and it must not
/// outlive the pool it came from.
///
/// # Panics
///
/// Dereferencing the sentinel or a raw value beyond the pool's backing
/// store panics with an out-of-bounds error.
pub struct Handle<T> {
    raw: usize,
    _marker: PhantomData<T>,
}

impl<T> Handle<T> {
    /// The sentinel handle: end of chain, empty stack, "no node".
    pub const NIL: Self = Self {
        raw: 0,
        _marker: PhantomData,
    };

    /// Returns `true` if this handle is the sentinel.
    #[must_use]
    pub const fn is_nil(self) -> bool {
        self.raw == 0
    }

    /// Returns the raw 1-based address (`0` for the sentinel).
    #[must_use]
    pub const fn into_raw(self) -> usize {
        self.raw
    }

    /// Creates a handle from a raw 1-based address.
    ///
    /// The caller must ensure the address is valid for the target pool;
    /// `0` yields [`Handle::NIL`].
    #[must_use]
    pub const fn from_raw(raw: usize) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    /// Backing-store slot this handle addresses.
    ///
    /// # Panics
    ///
    /// Panics if this handle is the sentinel.
    pub(crate) const fn slot(self) -> usize {
        assert!(self.raw != 0, "nil handle dereferenced");
        self.raw - 1
    }

    /// Handle addressing backing-store slot `slot`.
    pub(crate) const fn from_slot(slot: usize) -> Self {
        Self::from_raw(slot + 1)
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for Handle<T> {}

impl<T> std::hash::Hash for Handle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<T> std::fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_nil() {
            write!(f, "Handle(nil)")
        } else {
            write!(f, "Handle({})", self.raw)
        }
    }
}

impl<T> Default for Handle<T> {
    fn default() -> Self {
        Self::NIL
    }
}

impl<T> PartialOrd for Handle<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Handle<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.raw.cmp(&other.raw)
    }
}
