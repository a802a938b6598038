#![cfg(all(feature = "std", feature = "panic-on-alloc"))]
#![allow(unused)]

pub(crate) mod logger;

use std::{
    string::String,
    panic::{AssertUnwindSafe, UnwindSafe, catch_unwind},
};

/// Runs `f` with the panic hook silenced and returns the panic message, if any.
pub(crate) fn catch<F: FnOnce() -> R + UnwindSafe, R>(f: F) -> Result<R, String> {
    let hook = std::panic::take_hook();

    std::panic::set_hook(std::boxed::Box::new(|_| {
        // be quiet
    }));

    let result = match catch_unwind(f) {
        Ok(r) => Ok(r),
        Err(err) => {
            if let Some(&err) = err.downcast_ref::<&str>() {
                Err(err.into())
            } else if let Some(err) = err.downcast_ref::<String>() {
                Err(err.clone())
            } else {
                Err("panicked".into())
            }
        }
    };

    std::panic::set_hook(hook);

    result
}
