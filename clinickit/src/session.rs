// Login session contract

use std::cell::Cell;

/// Placeholder login state. This is not a security boundary.
pub trait Session {
    fn is_logged_in(&self) -> bool;
    fn logout(&self);
}

/// Session flag held in memory.
#[derive(Debug, Default)]
pub struct MemorySession {
    logged_in: Cell<bool>,
}

impl MemorySession {
    pub fn new(logged_in: bool) -> Self {
        Self {
            logged_in: Cell::new(logged_in),
        }
    }

    pub fn login(&self) {
        self.logged_in.set(true);
    }
}

impl Session for MemorySession {
    fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    fn logout(&self) {
        self.logged_in.set(false);
    }
}
