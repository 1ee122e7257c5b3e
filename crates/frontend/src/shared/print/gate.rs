//! Exactly-once guard for print cycles.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GateState {
    Idle,
    Armed { ticket: u64, expected: usize },
    Fired { ticket: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Render target not populated yet
    Wait,
    /// Invoke the print pipeline now; never returned twice for a ticket
    Fire,
    /// Ticket does not belong to the active cycle
    Stale,
}

#[derive(Clone, Debug)]
pub struct PrintGate {
    state: GateState,
    last_ticket: u64,
}

impl Default for PrintGate {
    fn default() -> Self {
        Self {
            state: GateState::Idle,
            last_ticket: 0,
        }
    }
}

impl PrintGate {
    /// Open a cycle for `expected` labels. Refused while a cycle is active.
    pub fn arm(&mut self, expected: usize) -> Option<u64> {
        if expected == 0 || self.is_active() {
            return None;
        }
        self.last_ticket += 1;
        self.state = GateState::Armed {
            ticket: self.last_ticket,
            expected,
        };
        Some(self.last_ticket)
    }

    /// Report how many labels the render target currently holds
    pub fn observe(&mut self, ticket: u64, rendered: usize) -> GateDecision {
        match self.state {
            GateState::Armed { ticket: t, expected } if t == ticket => {
                if rendered >= expected {
                    self.state = GateState::Fired { ticket };
                    GateDecision::Fire
                } else {
                    GateDecision::Wait
                }
            }
            _ => GateDecision::Stale,
        }
    }

    /// Close the cycle (printed or abandoned)
    pub fn finish(&mut self, ticket: u64) -> bool {
        match self.state {
            GateState::Armed { ticket: t, .. } | GateState::Fired { ticket: t } if t == ticket => {
                self.state = GateState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state != GateState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_only_after_render_and_only_once() {
        let mut gate = PrintGate::default();
        let ticket = gate.arm(3).unwrap();

        assert_eq!(gate.observe(ticket, 0), GateDecision::Wait);
        assert_eq!(gate.observe(ticket, 2), GateDecision::Wait);
        assert_eq!(gate.observe(ticket, 3), GateDecision::Fire);
        assert_eq!(gate.observe(ticket, 3), GateDecision::Stale);

        assert!(gate.finish(ticket));
        assert!(!gate.is_active());
    }

    #[test]
    fn test_second_arm_is_refused_while_active() {
        let mut gate = PrintGate::default();
        let ticket = gate.arm(1).unwrap();
        assert_eq!(gate.arm(1), None);

        gate.finish(ticket);
        let next = gate.arm(1).unwrap();
        assert_ne!(next, ticket);
        assert_eq!(gate.observe(ticket, 1), GateDecision::Stale);
    }

    #[test]
    fn test_nothing_to_print_is_refused() {
        let mut gate = PrintGate::default();
        assert_eq!(gate.arm(0), None);
        assert!(!gate.is_active());
    }

    #[test]
    fn test_abandoned_cycle_can_be_finished_before_firing() {
        let mut gate = PrintGate::default();
        let ticket = gate.arm(2).unwrap();
        assert!(!gate.finish(ticket + 1));
        assert!(gate.finish(ticket));
        assert_eq!(gate.observe(ticket, 2), GateDecision::Stale);
    }
}
