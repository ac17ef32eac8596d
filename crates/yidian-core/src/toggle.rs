/// Pair window for the double-press gesture.
pub const DOUBLE_PRESS_INTERVAL_MS: u64 = 500;

/// Outcome of a toggle-key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleTransition {
    pub enabled: bool,
}

/// Enabled/disabled gate for the hover pipeline, driven by presses of the
/// cancel key. A single press disables; a second press within the pair
/// window re-enables.
#[derive(Debug)]
pub struct HoverToggle {
    enabled: bool,
    /// Millisecond timestamp of the last press; 0 means no prior press
    /// (also re-armed after a successful pair, so a third rapid press
    /// starts a fresh pair instead of extending the old one).
    last_press_ms: u64,
    interval_ms: u64,
}

impl Default for HoverToggle {
    fn default() -> Self {
        Self {
            enabled: true,
            last_press_ms: 0,
            interval_ms: DOUBLE_PRESS_INTERVAL_MS,
        }
    }
}

impl HoverToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interval(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a press of the cancel key at `now_ms` (monotonic
    /// milliseconds) and return the resulting state.
    pub fn press(&mut self, now_ms: u64) -> ToggleTransition {
        let paired = self.last_press_ms != 0
            && now_ms.saturating_sub(self.last_press_ms) < self.interval_ms;

        if paired {
            self.enabled = true;
            self.last_press_ms = 0;
        } else {
            self.enabled = false;
            self.last_press_ms = now_ms;
        }

        ToggleTransition {
            enabled: self.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_enabled() {
        assert!(HoverToggle::new().is_enabled());
    }

    #[test]
    fn single_press_disables_double_press_reenables() {
        let mut toggle = HoverToggle::new();

        // First press, no prior: disable.
        assert_eq!(toggle.press(1000).enabled, false);
        // Second press within the window: enable, timestamp reset.
        assert_eq!(toggle.press(1300).enabled, true);
        // Third press 600ms later, outside any window: disable again.
        assert_eq!(toggle.press(1900).enabled, false);
    }

    #[test]
    fn pair_timestamp_reset_prevents_chained_pairs() {
        let mut toggle = HoverToggle::new();

        toggle.press(1000);
        assert!(toggle.press(1200).enabled);
        // 250ms after the pair completed; without the reset this would
        // read as another pair and re-enable.
        assert!(!toggle.press(1450).enabled);
    }

    #[test]
    fn press_while_enabled_outside_window_still_disables() {
        let mut toggle = HoverToggle::new();

        assert!(!toggle.press(1000).enabled);
        assert!(toggle.press(1100).enabled);
        // Enabled now; a lone press far later disables.
        assert!(!toggle.press(5000).enabled);
        // And arms a new pair.
        assert!(toggle.press(5200).enabled);
    }

    #[test]
    fn early_first_press_is_not_a_pair() {
        // Monotonic clocks start near zero; a first press inside the
        // nominal window must still read as a lone press.
        let mut toggle = HoverToggle::new();
        assert!(!toggle.press(120).enabled);
    }

    #[test]
    fn custom_interval_is_honored() {
        let mut toggle = HoverToggle::with_interval(100);
        toggle.press(1000);
        assert!(!toggle.press(1150).enabled);
        toggle.press(2000);
        assert!(toggle.press(2050).enabled);
    }
}
