//! Cancellable tick scheduling.
//!
//! The engine hands out a [`TickHandle`] when a countdown starts and
//! requires it back on every tick. Cancelling (pause, reset) or re-arming
//! invalidates all previously issued handles, so a tick that was already
//! scheduled when the countdown stopped cannot land on fresh state.

/// Identifies one armed countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle(u64);

/// Issues and validates tick handles.
#[derive(Debug, Default)]
pub struct Ticker {
    next_id: u64,
    armed: Option<TickHandle>,
}

impl Ticker {
    /// Create an unarmed ticker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the ticker, invalidating any previously issued handle.
    pub fn arm(&mut self) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.armed = Some(handle);
        handle
    }

    /// Cancel the armed handle, if any. Idempotent.
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Whether a handle is currently armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// The currently armed handle, if any.
    #[must_use]
    pub const fn armed(&self) -> Option<TickHandle> {
        self.armed
    }

    /// Whether `handle` is the one currently armed.
    #[must_use]
    pub fn accepts(&self, handle: TickHandle) -> bool {
        self.armed == Some(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unarmed() {
        let ticker = Ticker::new();
        assert!(!ticker.is_armed());
        assert_eq!(ticker.armed(), None);
    }

    #[test]
    fn test_arm_and_accept() {
        let mut ticker = Ticker::new();
        let handle = ticker.arm();

        assert!(ticker.is_armed());
        assert!(ticker.accepts(handle));
    }

    #[test]
    fn test_cancel_rejects_handle() {
        let mut ticker = Ticker::new();
        let handle = ticker.arm();

        ticker.cancel();

        assert!(!ticker.is_armed());
        assert!(!ticker.accepts(handle));

        // Cancelling again is fine
        ticker.cancel();
    }

    #[test]
    fn test_rearm_invalidates_old_handle() {
        let mut ticker = Ticker::new();
        let stale = ticker.arm();
        let fresh = ticker.arm();

        assert!(!ticker.accepts(stale));
        assert!(ticker.accepts(fresh));
    }

    #[test]
    fn test_handle_survives_copy() {
        let mut ticker = Ticker::new();
        let handle = ticker.arm();
        let copy = handle;

        assert!(ticker.accepts(copy));
    }
}
