// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debounce.
//!
//! [`Debounce`] keeps the most recently scheduled value and releases it once
//! no new value has been scheduled for `delay` milliseconds. The caller owns
//! the clock: it polls with the current time, and can ask for the
//! [`Debounce::deadline`] to arm a host timer.

/// Holds the latest value until a quiet period has elapsed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Debounce<T> {
    delay: u64,
    pending: Option<(T, u64)>,
}

impl<T: Copy> Debounce<T> {
    /// Creates an idle debouncer with a quiet period of `delay` milliseconds.
    #[must_use]
    pub const fn new(delay: u64) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replaces the pending value and restarts the quiet period at `now`.
    pub fn schedule(&mut self, value: T, now: u64) {
        self.pending = Some((value, now.saturating_add(self.delay)));
    }

    /// Releases the pending value if its deadline has passed at `now`.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        match self.pending {
            Some((value, deadline)) if now >= deadline => {
                self.pending = None;
                Some(value)
            }
            _ => None,
        }
    }

    /// Time at which the pending value will be released.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending.map(|(_, deadline)| deadline)
    }

    /// Drops the pending value.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns `true` while a value is waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Debounce;

    #[test]
    fn releases_after_quiet_period() {
        let mut d = Debounce::new(100);
        d.schedule(3_u32, 1_000);
        assert_eq!(d.deadline(), Some(1_100));
        assert_eq!(d.poll(1_099), None);
        assert_eq!(d.poll(1_100), Some(3));
        assert_eq!(d.poll(1_200), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn rescheduling_restarts_the_period_and_keeps_the_latest() {
        let mut d = Debounce::new(100);
        d.schedule(1_u32, 0);
        d.schedule(2, 90);
        d.schedule(3, 180);
        assert_eq!(d.poll(200), None);
        assert_eq!(d.poll(280), Some(3));
    }

    #[test]
    fn cancel_drops_the_value() {
        let mut d = Debounce::new(10);
        d.schedule(1_u32, 0);
        d.cancel();
        assert_eq!(d.poll(100), None);
        assert_eq!(d.deadline(), None);
    }
}
