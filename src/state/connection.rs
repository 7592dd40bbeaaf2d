// Connection status + automatic-reconnect bookkeeping for the socket client.

/// Lifecycle of the link to the PC, mirrored into the header UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionStatus {
    pub fn is_connected(self) -> bool {
        self == ConnectionStatus::Connected
    }
}

/// Retries after an unexpected close before giving up.
pub const RECONNECT_ATTEMPTS: u32 = 3;
/// Fixed delay between reconnect attempts.
pub const RECONNECT_DELAY_MS: u32 = 1000;

/// Counts reconnect attempts for one connection. Reset whenever the user
/// connects manually or the socket opens successfully.
#[derive(Clone, Debug, Default)]
pub struct ReconnectPolicy {
    attempts_made: u32,
}

impl ReconnectPolicy {
    /// Delay before the next attempt, or None once the budget is spent.
    pub fn next_delay_ms(&mut self) -> Option<u32> {
        if self.attempts_made >= RECONNECT_ATTEMPTS {
            return None;
        }
        self.attempts_made += 1;
        Some(RECONNECT_DELAY_MS)
    }

    pub fn reset(&mut self) {
        self.attempts_made = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_a_fixed_number_of_attempts() {
        let mut policy = ReconnectPolicy::default();
        for _ in 0..RECONNECT_ATTEMPTS {
            assert_eq!(policy.next_delay_ms(), Some(RECONNECT_DELAY_MS));
        }
        assert_eq!(policy.next_delay_ms(), None);
        assert_eq!(policy.next_delay_ms(), None);
    }

    #[test]
    fn reset_restores_the_full_budget() {
        let mut policy = ReconnectPolicy::default();
        while policy.next_delay_ms().is_some() {}
        policy.reset();
        assert_eq!(policy.next_delay_ms(), Some(RECONNECT_DELAY_MS));
    }

    #[test]
    fn status_default_is_disconnected() {
        assert_eq!(ConnectionStatus::default(), ConnectionStatus::Disconnected);
        assert!(!ConnectionStatus::Connecting.is_connected());
        assert!(ConnectionStatus::Connected.is_connected());
    }
}
