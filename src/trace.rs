//! Debug traces of the decoding steps.
//!
//! Traces go through [`tracing::debug!`] and are off until
//! [`set_show_traces`] turns them on for the whole process. The library never
//! installs a subscriber; the host does.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::key::RawKeyEvent;

static SHOW_TRACES: AtomicBool = AtomicBool::new(false);

pub fn show_traces() -> bool {
    SHOW_TRACES.load(Ordering::Relaxed)
}

pub fn set_show_traces(show: bool) {
    SHOW_TRACES.store(show, Ordering::Relaxed);
}

/// Emits a decoding step trace when traces are on.
pub(crate) fn step(message: &str) {
    show_traces().then(|| {
        tracing::debug!(message = "⌨️ keyboard_helper", step = %message);
    });
}

/// Traces raw key events, collapsing a run of repeats into one "...".
#[derive(Debug, Default, Clone)]
pub(crate) struct RawEventTracer {
    last_key_repeated: bool,
}

impl RawEventTracer {
    pub(crate) fn last_key_repeated(&self) -> bool {
        self.last_key_repeated
    }

    pub(crate) fn trace(&mut self, label: &str, raw: &RawKeyEvent) {
        if raw.is_repeat {
            if !self.last_key_repeated {
                self.last_key_repeated = true;
                step("...");
            }
            return;
        }

        self.last_key_repeated = false;
        show_traces().then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "⌨️ keyboard_helper",
                label = %label,
                key = %raw.key,
                system_key = %raw.system_key,
                is_down = raw.is_down,
            );
        });
    }
}
