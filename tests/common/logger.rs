use std::{
    cell::RefCell,
    format,
    string::String,
    sync::Once,
    thread_local,
    vec::Vec,
};

use log::{LevelFilter, Log, Metadata, Record};

thread_local! {
    static CAPTURED: RefCell<Option<Vec<String>>> = const { RefCell::new(None) };
}

/// Collects the records logged on the current thread while capturing.
struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        CAPTURED.with_borrow_mut(|captured| {
            if let Some(lines) = captured {
                lines.push(format!("{} {}: {}", record.level(), record.target(), record.args()));
            }
        });
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;
static INIT: Once = Once::new();

/// Runs `f` and returns every log line it produced as `"LEVEL target: message"`.
pub(crate) fn capture(f: impl FnOnce()) -> Vec<String> {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger is installed");
        log::set_max_level(LevelFilter::Trace);
    });

    CAPTURED.set(Some(Vec::new()));
    f();
    CAPTURED.take().unwrap_or_default()
}
