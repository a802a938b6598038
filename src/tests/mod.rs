#![cfg(all(feature = "std", feature = "panic-on-alloc"))]

use std::fmt;

mod growth;

pub(crate) use tracked::Tracked;

/// Element payloads the generic tests run with, one sized and one zero-sized.
pub(crate) trait Payload: Clone + PartialEq + fmt::Debug + 'static {
    fn nth(n: usize) -> Self;
}

impl Payload for i32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn nth(n: usize) -> Self {
        n as i32
    }
}

impl Payload for () {
    fn nth(_: usize) -> Self {}
}

macro_rules! zst_or_not {
    ($($(#[$attr:meta])* $ident:ident)*) => {
        mod non_zst {
            $(
                #[test]
                $(#[$attr])*
                fn $ident() {
                    super::$ident::<i32>();
                }
            )*
        }

        mod zst {
            $(
                #[test]
                $(#[$attr])*
                fn $ident() {
                    super::$ident::<()>();
                }
            )*
        }
    };
}

pub(crate) use zst_or_not;

#[allow(dead_code)]
fn assert_send_sync() {
    fn must_be_send_sync<T: Send + Sync>(_: &T) {}
    let array = crate::DynamicArray::<i32>::new();
    must_be_send_sync(&array);
}

#[allow(dead_code)]
fn assert_covariant() {
    fn cursor<'a, 'other>(x: crate::Cursor<'static, &'static str>) -> crate::Cursor<'a, &'other str> {
        x
    }

    fn array<'other>(x: crate::DynamicArray<&'static str>) -> crate::DynamicArray<&'other str> {
        x
    }
}
