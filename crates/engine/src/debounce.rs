/// Rejects action presses that arrive too soon after an accepted one.
///
/// Times are caller-supplied milliseconds from any monotonic origin, which keeps
/// the rule testable without a clock.
#[derive(Debug, Clone)]
pub struct Debounce {
    window_ms: u64,
    quiet_until_ms: u64,
    armed: bool,
}

impl Debounce {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            quiet_until_ms: 0,
            armed: false,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Whether a press at `now_ms` should be processed.
    pub fn accepts(&self, now_ms: u64) -> bool {
        !self.armed || now_ms >= self.quiet_until_ms
    }

    /// Start the quiet window; call once the accepted press has been handled.
    pub fn arm(&mut self, now_ms: u64) {
        self.armed = true;
        self.quiet_until_ms = now_ms.saturating_add(self.window_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_press_is_accepted() {
        let d = Debounce::new(250);
        assert!(d.accepts(0));
    }

    #[test]
    fn presses_inside_window_are_rejected() {
        let mut d = Debounce::new(250);
        d.arm(1000);
        assert!(!d.accepts(1000));
        assert!(!d.accepts(1249));
        assert!(d.accepts(1250));
    }

    #[test]
    fn zero_window_never_rejects() {
        let mut d = Debounce::new(0);
        d.arm(10);
        assert!(d.accepts(10));
    }
}
