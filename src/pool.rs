use crate::{RawPlace, Value};
use std::{
    alloc::Layout,
    cmp,
    fmt::{self, Formatter},
};

/// Capacity of the first allocation. Growing from empty jumps straight here
/// instead of crawling through tiny reallocations.
pub const MIN_CAPACITY: usize = 8;

/// Capacity multiplier on every subsequent growth. Doubling keeps the total
/// copying work across N appends at O(N), so append is amortized O(1).
pub const GROWTH_FACTOR: usize = 2;

/// Error growing the pool's storage
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error due to the computed capacity exceeding the maximum
    /// (usually `isize::MAX` bytes).
    #[error("exceeding the capacity maximum")]
    CapacityOverflow,

    /// The memory allocator returned an error
    #[error("memory allocation of {layout:?} failed")]
    AllocError {
        /// The layout of allocation request that failed
        layout: Layout,
    },
}

/// Alias for `Result<T, Error>` to return from [`ValueArray`] methods
pub type Result<T> = std::result::Result<T, Error>;

/// An append-only, growable array of [`Value`]s with explicit capacity
/// tracking — the storage a constant pool sits on.
///
/// Starts empty with no allocation. [`write`] grows the backing storage by
/// [`GROWTH_FACTOR`] whenever it is full (starting at [`MIN_CAPACITY`]) and
/// returns the slot index, which stays valid for the life of the pool.
/// [`release`] deallocates and returns to the empty state; dropping the pool
/// does the same.
///
/// ```
/// use value_pool::ValueArray;
///
/// fn main() -> value_pool::Result<()> {
///     let mut pool = ValueArray::new();
///     assert_eq!(pool.write(1.2)?, 0);
///     assert_eq!(pool.write(3.4)?, 1);
///     assert_eq!(pool.as_slice(), &[1.2, 3.4]);
///     Ok(())
/// }
/// ```
///
/// [`write`]: Self::write
/// [`release`]: Self::release
pub struct ValueArray {
    place: RawPlace,
    count: usize,
}

impl ValueArray {
    /// Constructs an empty pool: zero capacity, zero count, no allocation.
    pub const fn new() -> Self {
        Self { place: RawPlace::dangling(), count: 0 }
    }

    /// Number of values stored.
    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of values the current allocation can hold without growing.
    pub const fn capacity(&self) -> usize {
        self.place.cap()
    }

    /// Appends `value` and returns the index it was stored at.
    ///
    /// Indices are handed out consecutively from zero and are not
    /// invalidated by later growth, so callers can use them as stable slot
    /// numbers. NaN and infinities are stored bit-for-bit, never inspected.
    ///
    /// # Errors
    ///
    /// Fails only when the grown storage cannot be allocated; the pool is
    /// left exactly as it was, so it can still be read or released.
    pub fn write(&mut self, value: Value) -> Result<usize> {
        if self.count == self.place.cap() {
            let doubled = self
                .place
                .cap()
                .checked_mul(GROWTH_FACTOR)
                .ok_or(Error::CapacityOverflow)?;
            self.place.grow_to(cmp::max(MIN_CAPACITY, doubled))?;
        }

        // SAFETY: `count < cap` after the growth check above
        unsafe { self.place.write(self.count, value) };
        self.count += 1;
        Ok(self.count - 1)
    }

    /// Copies out the value at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.as_slice().get(index).copied()
    }

    /// The stored values, in insertion order.
    pub fn as_slice(&self) -> &[Value] {
        // SAFETY: `[0, count)` is initialized by `write`
        unsafe { self.place.as_slice(self.count) }
    }

    /// Deallocates the backing storage and resets to the empty state.
    ///
    /// Safe to call on an already-empty pool, and the pool stays usable:
    /// the next [`write`](Self::write) allocates afresh at [`MIN_CAPACITY`].
    pub fn release(&mut self) {
        self.place.release();
        self.count = 0;
    }
}

impl Default for ValueArray {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValueArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueArray")
            .field("count", &self.count)
            .field("capacity", &self.place.cap())
            .field("values", &self.as_slice())
            .finish()
    }
}
