//! Terminal focus tracking.
//!
//! The terminal's focus-reporting stream plays the role the on-screen
//! keyboard notifications play on mobile: form screens subscribe while
//! mounted, release the subscription on unmount, and use the flag only to
//! anchor the form panel vertically. Signals that arrive while no screen
//! is subscribed are dropped.

/// A focus notification from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSignal {
    Gained,
    Lost,
}

/// Subscription-gated focus state.
#[derive(Debug, Default, Clone, Copy)]
pub struct FocusTracker {
    subscribed: bool,
    focused: bool,
}

impl FocusTracker {
    /// Starts delivering focus signals (called when a form screen mounts).
    pub fn subscribe(&mut self) {
        self.subscribed = true;
    }

    /// Stops delivering focus signals and resets the flag (screen unmount).
    pub fn unsubscribe(&mut self) {
        self.subscribed = false;
        self.focused = false;
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Whether the terminal currently has focus, as far as the active
    /// subscription has observed.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Applies a signal. Returns true when the flag changed; signals
    /// delivered without a subscription are ignored.
    pub fn on_signal(&mut self, signal: FocusSignal) -> bool {
        if !self.subscribed {
            return false;
        }
        let focused = matches!(signal, FocusSignal::Gained);
        let changed = self.focused != focused;
        self.focused = focused;
        changed
    }
}
