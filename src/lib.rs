//! Growable constant-value storage for bytecode toolchains.
//!
//! [`ValueArray`] is an append-only array of `f64` constants with explicit
//! capacity tracking and doubling growth; [`format_value`] renders one value
//! for diagnostic dumps. The compiler, chunk format, and virtual machine
//! that consume the pool live elsewhere.

// special lint
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
// rust compiler lints
#![deny(unused_must_use)]
#![warn(missing_debug_implementations)]

mod pool;
mod raw_place;
mod value;

pub(crate) use raw_place::RawPlace;
pub use {
    pool::{Error, Result, ValueArray, GROWTH_FACTOR, MIN_CAPACITY},
    value::{format_value, print_value, Value},
};

fn _assertion() {
    fn assert_send<T: Send>() {}

    assert_send::<ValueArray>();
}

#[test]
fn smoke() -> Result<()> {
    let mut pool = ValueArray::new();

    for i in 0..1000 {
        let index = pool.write(i as Value)?;
        assert_eq!(index, i);
    }
    assert_eq!(pool.len(), 1000);
    assert!(pool.as_slice().iter().copied().eq((0..1000).map(|i| i as Value)));

    pool.release();
    assert_eq!(pool.capacity(), 0);
    assert_eq!(pool.write(42.0)?, 0);

    Ok(())
}
