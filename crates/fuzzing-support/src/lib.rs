#![allow(clippy::cargo_common_metadata)]

use arbitrary::{Arbitrary, Unstructured};

pub use arbitrary;
pub use dynamic_array;
pub mod many_arrays;

#[cfg(fuzzing_repro)]
pub use std::{dbg, eprint, eprintln};

#[cfg(not(fuzzing_repro))]
#[macro_export]
macro_rules! dbg {
    ($($tt:tt)*) => {};
}

#[cfg(not(fuzzing_repro))]
#[macro_export]
macro_rules! eprint {
    ($($tt:tt)*) => {};
}

#[cfg(not(fuzzing_repro))]
#[macro_export]
macro_rules! eprintln {
    ($($tt:tt)*) => {};
}

#[derive(Debug, Clone, Copy)]
struct UpTo<const MAX: usize>(usize);

impl<'a, const MAX: usize> Arbitrary<'a> for UpTo<MAX> {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self(u.int_in_range(0..=MAX)?))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <usize as Arbitrary>::size_hint(depth)
    }
}
