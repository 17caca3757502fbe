//! Mock ready line implementation for testing

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use crate::platform::{traits::ReadyPin, BusError, Result};

#[derive(Debug, Default)]
struct PinState {
    level: Cell<bool>,
    script: RefCell<VecDeque<bool>>,
    fail_next: Cell<bool>,
    polls: Cell<usize>,
    released: Cell<bool>,
}

/// Mock conversion-done line
///
/// The pin is moved into the driver under test; the test keeps the
/// [`ReadyPinHandle`] returned alongside it to drive the level and observe
/// whether the driver released the pin.
#[derive(Debug)]
pub struct MockReadyPin {
    state: Rc<PinState>,
}

/// Test-side control of a [`MockReadyPin`]
#[derive(Debug, Clone)]
pub struct ReadyPinHandle {
    state: Rc<PinState>,
}

impl MockReadyPin {
    /// Create a new mock pin, initially low
    pub fn new() -> (Self, ReadyPinHandle) {
        let state = Rc::new(PinState::default());
        (
            Self {
                state: Rc::clone(&state),
            },
            ReadyPinHandle { state },
        )
    }
}

impl ReadyPinHandle {
    /// Set the steady line level
    pub fn set_ready(&self, ready: bool) {
        self.state.level.set(ready);
    }

    /// Queue levels returned by the next polls before falling back to the steady level
    pub fn script(&self, levels: &[bool]) {
        self.state.script.borrow_mut().extend(levels.iter().copied());
    }

    /// Make the next poll fail
    pub fn fail_next(&self) {
        self.state.fail_next.set(true);
    }

    /// Number of polls performed so far
    pub fn polls(&self) -> usize {
        self.state.polls.get()
    }

    /// Whether the pin has been dropped by its owner
    pub fn is_released(&self) -> bool {
        self.state.released.get()
    }
}

impl ReadyPin for MockReadyPin {
    fn poll_ready(&mut self) -> Result<bool> {
        self.state.polls.set(self.state.polls.get() + 1);

        if self.state.fail_next.replace(false) {
            return Err(BusError::Ready {
                source: io::Error::other("injected fault"),
            });
        }

        let scripted = self.state.script.borrow_mut().pop_front();
        Ok(scripted.unwrap_or_else(|| self.state.level.get()))
    }
}

impl Drop for MockReadyPin {
    fn drop(&mut self) {
        self.state.released.set(true);
    }
}
