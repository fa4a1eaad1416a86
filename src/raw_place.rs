use crate::{Error, Result, Value};
use std::{
    alloc::{self, Layout},
    fmt::{self, Formatter},
    mem,
    ptr::NonNull,
    slice,
};

/// Owned backing storage: a pointer plus the capacity it was allocated for.
///
/// Tracks nothing about initialization — the caller layers a `count` on top
/// and only reads `[0, count)`. `cap == 0` means no allocation at all and a
/// dangling, never-dereferenced pointer.
pub(crate) struct RawPlace {
    ptr: NonNull<Value>,
    cap: usize,
}

impl RawPlace {
    pub const fn dangling() -> Self {
        Self { ptr: NonNull::dangling(), cap: 0 }
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// # Safety
    /// `len <= cap` and elements `[0, len)` must have been written.
    pub unsafe fn as_slice(&self, len: usize) -> &[Value] {
        slice::from_raw_parts(self.ptr.as_ptr(), len)
    }

    /// # Safety
    /// `index < cap`.
    pub unsafe fn write(&mut self, index: usize, value: Value) {
        self.ptr.as_ptr().add(index).write(value);
    }

    fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
        if self.cap == 0 {
            None
        } else {
            // SAFETY: we would use `Layout::array`, but this size+align pair
            // already passed `Layout::array` when the block was allocated
            unsafe {
                let layout = Layout::from_size_align_unchecked(
                    mem::size_of::<Value>() * self.cap,
                    mem::align_of::<Value>(),
                );
                Some((self.ptr.cast(), layout))
            }
        }
    }

    /// Reallocates to exactly `cap` elements, preserving the old contents at
    /// their indices. On error the old block (if any) is left untouched.
    pub fn grow_to(&mut self, cap: usize) -> Result<()> {
        debug_assert!(cap > self.cap);

        let new_layout = Layout::array::<Value>(cap).map_err(|_| Error::CapacityOverflow)?;
        let ptr = match self.current_memory() {
            // SAFETY: `old_layout` is the layout of the live block and
            // `new_layout.size()` is nonzero (cap > 0, Value is not a ZST)
            Some((ptr, old_layout)) => unsafe {
                alloc::realloc(ptr.as_ptr(), old_layout, new_layout.size())
            },
            // SAFETY: `new_layout` is nonzero-sized for the same reason
            None => unsafe { alloc::alloc(new_layout) },
        };

        self.ptr = NonNull::new(ptr.cast()).ok_or(Error::AllocError { layout: new_layout })?;
        self.cap = cap;
        Ok(())
    }

    /// Deallocates and returns to the dangling state. Idempotent.
    pub fn release(&mut self) {
        if let Some((ptr, layout)) = self.current_memory() {
            // SAFETY: `ptr`/`layout` describe the live block; fields are
            // reset below so no second deallocation can observe them
            unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }
}

impl fmt::Debug for RawPlace {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}..{})", self.ptr, self.cap)
    }
}

impl Drop for RawPlace {
    fn drop(&mut self) {
        self.release();
    }
}

// `Value` is plain data and the allocation is exclusively owned.
unsafe impl Send for RawPlace {}
unsafe impl Sync for RawPlace {}
