//! Trailing-edge debounce.
//!
//! `Debounce` is the bookkeeping half: every trigger arms a new generation and
//! only the newest generation may fire. `Debounced` pairs it with a
//! `gloo_timers` timeout in the browser.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::Cell;
use std::rc::Rc;

/// Generation counter shared between a trigger site and its pending timers.
#[derive(Clone, Debug, Default)]
pub struct Debounce {
    generation: Rc<Cell<u64>>,
}

impl Debounce {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new quiet period, invalidating every earlier token.
    pub fn arm(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    /// Whether `token` is still the most recent trigger.
    #[must_use]
    pub fn is_current(&self, token: u64) -> bool {
        self.generation.get() == token
    }
}

/// Runs `callback` once `wait_ms` have passed without another `trigger`.
#[cfg(feature = "hydrate")]
pub struct Debounced {
    state: Debounce,
    wait_ms: u32,
    callback: Rc<dyn Fn()>,
    pending: std::cell::RefCell<Option<gloo_timers::callback::Timeout>>,
}

#[cfg(feature = "hydrate")]
impl Debounced {
    pub fn new(wait_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            state: Debounce::new(),
            wait_ms,
            callback: Rc::new(callback),
            pending: std::cell::RefCell::new(None),
        }
    }

    pub fn trigger(&self) {
        let token = self.state.arm();
        let state = self.state.clone();
        let callback = Rc::clone(&self.callback);
        let timeout = gloo_timers::callback::Timeout::new(self.wait_ms, move || {
            if state.is_current(token) {
                callback();
            }
        });
        // Replacing the previous timeout drops it, which cancels it.
        *self.pending.borrow_mut() = Some(timeout);
    }
}
