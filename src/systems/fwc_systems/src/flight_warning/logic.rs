use std::time::Duration;

/// A confirmation circuit, which only passes a signal once it has been stable for a certain amount
/// of time. It models the CONF nodes of the FWC logic sheets. A leading node confirms its input
/// becoming hi, a falling node confirms it becoming lo. While the monitored condition holds the
/// node accumulates time, and once the time delay is reached it emits the confirmed value. Any
/// reversion of the input fully resets the accumulated time, so a new stable period has to start
/// from zero.
///
/// A time delay of zero makes the node transparent: it confirms on the very update in which the
/// condition appears.
pub struct ConfirmationNode {
    leading_edge: bool,
    time_delay: Duration,
    condition_since: Duration,
    output: bool,
}

impl ConfirmationNode {
    pub fn new(leading_edge: bool, time_delay: Duration) -> Self {
        Self {
            leading_edge,
            time_delay,
            condition_since: Duration::ZERO,
            output: !leading_edge,
        }
    }

    pub fn new_leading(time_delay: Duration) -> Self {
        Self::new(true, time_delay)
    }

    pub fn new_falling(time_delay: Duration) -> Self {
        Self::new(false, time_delay)
    }

    pub fn update(&mut self, hi: bool, delta: Duration) -> bool {
        let condition_met = hi == self.leading_edge;
        if condition_met {
            self.condition_since = self.condition_since.saturating_add(delta);
            self.output = if self.condition_since >= self.time_delay {
                self.leading_edge
            } else {
                !self.leading_edge
            };
        } else {
            self.condition_since = Duration::ZERO;
            self.output = !self.leading_edge;
        }
        self.output
    }

    pub fn output(&self) -> bool {
        self.output
    }

    /// For how long the monitored condition has held without interruption.
    pub fn condition_since(&self) -> Duration {
        self.condition_since
    }
}

/// A monostable trigger. It outputs lo until it sees the edge it watches for (rising for a
/// leading node, falling for a falling node) and then outputs hi until the time delay has
/// elapsed. A plain node ignores further edges while it is hi. A retriggerable node restarts
/// the delay on every matching edge.
pub struct MonostableTriggerNode {
    leading_edge: bool,
    time_delay: Duration,
    retriggerable: bool,
    remaining_trigger: Duration,
    last_hi: bool,
    output: bool,
}

impl MonostableTriggerNode {
    pub fn new(leading_edge: bool, time_delay: Duration) -> Self {
        Self {
            leading_edge,
            time_delay,
            retriggerable: false,
            remaining_trigger: Duration::ZERO,
            last_hi: false,
            output: false,
        }
    }

    pub fn new_retriggerable(leading_edge: bool, time_delay: Duration) -> Self {
        Self {
            retriggerable: true,
            ..Self::new(leading_edge, time_delay)
        }
    }

    pub fn new_leading(time_delay: Duration) -> Self {
        Self::new(true, time_delay)
    }

    pub fn new_falling(time_delay: Duration) -> Self {
        Self::new(false, time_delay)
    }

    pub fn update(&mut self, hi: bool, delta: Duration) -> bool {
        self.remaining_trigger = self.remaining_trigger.saturating_sub(delta);
        if self.retriggerable || self.remaining_trigger == Duration::ZERO {
            let edge = self.last_hi != hi && hi == self.leading_edge;
            if edge {
                self.remaining_trigger = self.time_delay;
            }
        }
        self.last_hi = hi;
        self.output = self.remaining_trigger > Duration::ZERO;
        self.output
    }

    pub fn output(&self) -> bool {
        self.output
    }
}

/// A node that detects a rising or a falling edge and emits hi for exactly one update. The update
/// following a pulse always returns lo, even if the input keeps toggling.
pub struct PulseNode {
    leading_edge: bool,
    last_hi: bool,
    output: bool,
}

impl PulseNode {
    pub fn new(leading_edge: bool) -> Self {
        Self {
            leading_edge,
            output: false,
            last_hi: false,
        }
    }

    pub fn new_leading() -> Self {
        Self::new(true)
    }

    pub fn new_falling() -> Self {
        Self::new(false)
    }

    pub fn update(&mut self, hi: bool) -> bool {
        self.output = if self.output {
            false
        } else if self.leading_edge {
            !self.last_hi && hi
        } else {
            self.last_hi && !hi
        };
        self.last_hi = hi;
        self.output
    }

    pub fn output(&self) -> bool {
        self.output
    }
}

/// A flip-flop or memory circuit that stores a single bit. It starts out lo. A signal on the set
/// input makes it emit hi until a signal arrives on the reset input. When neither input is
/// asserted the stored bit is kept as is. When both are asserted at once the precedence chosen at
/// construction decides; all FWC latches built here use reset precedence.
pub struct MemoryNode {
    has_set_precedence: bool,
    output: bool,
}

impl MemoryNode {
    pub fn new(has_set_precedence: bool) -> Self {
        Self {
            has_set_precedence,
            output: false,
        }
    }

    pub fn new_reset_precedence() -> Self {
        Self::new(false)
    }

    pub fn update(&mut self, set: bool, reset: bool) -> bool {
        self.output = if set && reset {
            self.has_set_precedence
        } else if set {
            true
        } else if reset {
            false
        } else {
            self.output
        };
        self.output
    }

    pub fn output(&self) -> bool {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(test)]
    mod confirmation_node_tests {
        use super::*;

        #[test]
        fn leading_stays_lo_when_lo() {
            let mut node = ConfirmationNode::new_leading(Duration::from_secs(1));
            assert_eq!(node.update(false, Duration::from_secs(1)), false);
        }

        #[test]
        fn falling_stays_hi_when_hi() {
            let mut node = ConfirmationNode::new_falling(Duration::from_secs(1));
            assert_eq!(node.update(true, Duration::from_secs(1)), true);
        }

        #[test]
        fn leading_initially_stays_lo_when_hi() {
            let mut node = ConfirmationNode::new_leading(Duration::from_secs(1));
            assert_eq!(node.update(true, Duration::from_secs_f64(0.1)), false);
        }

        #[test]
        fn falling_initially_stays_hi_when_lo() {
            let mut node = ConfirmationNode::new_falling(Duration::from_secs(1));
            assert_eq!(node.update(false, Duration::from_secs_f64(0.1)), true);
        }

        #[test]
        fn leading_eventually_becomes_hi_when_hi() {
            let mut node = ConfirmationNode::new_leading(Duration::from_secs(1));
            assert_eq!(node.update(true, Duration::from_secs(1)), true);
        }

        #[test]
        fn falling_eventually_becomes_lo_when_lo() {
            let mut node = ConfirmationNode::new_falling(Duration::from_secs(1));
            assert_eq!(node.update(false, Duration::from_secs(1)), false);
        }

        #[test]
        fn leading_does_not_confirm_before_time_delay() {
            let mut node = ConfirmationNode::new_leading(Duration::from_secs(2));
            for _ in 0..19 {
                assert_eq!(node.update(true, Duration::from_millis(100)), false);
            }
            assert_eq!(node.update(true, Duration::from_millis(100)), true);
            assert_eq!(node.update(true, Duration::from_millis(100)), true);
        }

        #[test]
        fn leading_resets_timer_when_lo() {
            let mut node = ConfirmationNode::new_leading(Duration::from_secs(1));
            node.update(true, Duration::from_secs(1));
            node.update(false, Duration::from_secs_f64(0.1));
            assert_eq!(node.update(true, Duration::from_secs_f64(0.1)), false);
        }

        #[test]
        fn single_lo_update_half_way_restarts_the_full_delay() {
            let mut node = ConfirmationNode::new_leading(Duration::from_secs(1));
            node.update(true, Duration::from_millis(600));
            node.update(false, Duration::from_millis(100));
            assert_eq!(node.condition_since(), Duration::ZERO);

            assert_eq!(node.update(true, Duration::from_millis(600)), false);
            assert_eq!(node.update(true, Duration::from_millis(300)), false);
            assert_eq!(node.update(true, Duration::from_millis(100)), true);
        }

        #[test]
        fn falling_resets_timer_when_hi() {
            let mut node = ConfirmationNode::new_falling(Duration::from_secs(1));
            node.update(false, Duration::from_secs(1));
            node.update(true, Duration::from_secs_f64(0.1));
            assert_eq!(node.update(false, Duration::from_secs_f64(0.1)), true);
        }

        #[test]
        fn zero_delay_passes_through_immediately() {
            let mut node = ConfirmationNode::new_leading(Duration::ZERO);
            assert_eq!(node.update(true, Duration::ZERO), true);
            assert_eq!(node.update(false, Duration::ZERO), false);
            assert_eq!(node.update(true, Duration::from_millis(16)), true);
        }

        #[test]
        fn zero_delta_does_not_advance_time() {
            let mut node = ConfirmationNode::new_leading(Duration::from_secs(1));
            for _ in 0..100 {
                assert_eq!(node.update(true, Duration::ZERO), false);
            }
            assert_eq!(node.condition_since(), Duration::ZERO);
        }
    }

    #[cfg(test)]
    mod monostable_trigger_node_tests {
        use super::*;

        #[test]
        fn when_created_outputs_lo() {
            let mut node = MonostableTriggerNode::new_leading(Duration::from_secs(1));
            assert_eq!(node.update(false, Duration::from_secs(1)), false);
        }

        #[test]
        fn when_triggered_outputs_hi() {
            let mut node = MonostableTriggerNode::new_leading(Duration::from_secs(1));
            assert_eq!(node.update(true, Duration::from_secs(1)), true);
        }

        #[test]
        fn stays_hi_until_the_delay_elapsed_even_if_input_drops() {
            let mut node = MonostableTriggerNode::new_leading(Duration::from_secs(1));
            node.update(true, Duration::from_millis(100));
            assert_eq!(node.update(false, Duration::from_millis(500)), true);
            assert_eq!(node.update(false, Duration::from_millis(400)), true);
            assert_eq!(node.update(false, Duration::from_millis(100)), false);
        }

        #[test]
        fn held_input_does_not_retrigger() {
            let mut node = MonostableTriggerNode::new_leading(Duration::from_secs(1));
            node.update(true, Duration::from_millis(100));
            assert_eq!(node.update(true, Duration::from_secs(1)), false);
        }

        #[test]
        fn edge_while_hi_is_ignored() {
            let mut node = MonostableTriggerNode::new_leading(Duration::from_secs(1));
            node.update(true, Duration::from_secs(1));
            node.update(false, Duration::from_secs_f64(0.5));
            node.update(true, Duration::from_secs_f64(0.4));
            assert_eq!(node.update(false, Duration::from_secs_f64(0.1)), false);
        }

        #[test]
        fn retriggerable_restarts_the_delay_on_edge() {
            let mut node =
                MonostableTriggerNode::new_retriggerable(true, Duration::from_secs(1));
            node.update(true, Duration::from_secs(1));
            node.update(false, Duration::from_secs_f64(0.5));
            node.update(true, Duration::from_secs_f64(0.4));
            assert_eq!(node.update(false, Duration::from_secs_f64(0.1)), true);
        }

        #[test]
        fn falling_triggers_on_falling_edge() {
            let mut node = MonostableTriggerNode::new_falling(Duration::from_secs(1));
            assert_eq!(node.update(true, Duration::from_millis(100)), false);
            assert_eq!(node.update(false, Duration::from_millis(100)), true);
            assert_eq!(node.output(), true);
        }

        #[test]
        fn zero_delta_keeps_the_trigger_running() {
            let mut node = MonostableTriggerNode::new_leading(Duration::from_secs(1));
            node.update(true, Duration::ZERO);
            for _ in 0..10 {
                assert_eq!(node.update(false, Duration::ZERO), true);
            }
        }
    }

    #[cfg(test)]
    mod pulse_node_tests {
        use super::*;

        #[test]
        fn when_created_outputs_lo() {
            let mut node = PulseNode::new_leading();
            assert_eq!(node.update(false), false);
        }

        #[test]
        fn leading_emits_a_single_pulse_on_rising_edge() {
            let mut node = PulseNode::new_leading();
            assert_eq!(node.update(true), true);
            assert_eq!(node.update(true), false);
            assert_eq!(node.update(false), false);
        }

        #[test]
        fn leading_pulses_again_after_release() {
            let mut node = PulseNode::new_leading();
            node.update(true);
            node.update(false);
            assert_eq!(node.update(true), true);
        }

        #[test]
        fn falling_emits_a_single_pulse_on_falling_edge() {
            let mut node = PulseNode::new_falling();
            assert_eq!(node.update(true), false);
            assert_eq!(node.update(false), true);
            assert_eq!(node.update(false), false);
        }
    }

    #[cfg(test)]
    mod memory_node_tests {
        use super::*;

        #[test]
        fn when_created_outputs_lo() {
            let mut node = MemoryNode::new_reset_precedence();
            assert_eq!(node.update(false, false), false);
        }

        #[test]
        fn set_stores_hi() {
            let mut node = MemoryNode::new_reset_precedence();
            assert_eq!(node.update(true, false), true);
        }

        #[test]
        fn holds_hi_without_inputs() {
            let mut node = MemoryNode::new_reset_precedence();
            node.update(true, false);
            for _ in 0..50 {
                assert_eq!(node.update(false, false), true);
            }
        }

        #[test]
        fn holds_lo_without_inputs() {
            let mut node = MemoryNode::new_reset_precedence();
            node.update(true, false);
            node.update(false, true);
            for _ in 0..50 {
                assert_eq!(node.update(false, false), false);
            }
        }

        #[test]
        fn reset_stores_lo() {
            let mut node = MemoryNode::new_reset_precedence();
            node.update(true, false);
            assert_eq!(node.update(false, true), false);
        }

        #[test]
        fn reset_precedence_wins_when_both_asserted() {
            let mut node = MemoryNode::new_reset_precedence();
            node.update(true, false);
            assert_eq!(node.update(true, true), false);
            assert_eq!(node.output(), false);
        }

        #[test]
        fn set_precedence_wins_when_both_asserted() {
            let mut node = MemoryNode::new(true);
            assert_eq!(node.update(true, true), true);
        }
    }
}
