use super::*;
use fwc_systems::flight_warning::logic::*;
use fwc_systems::flight_warning::parameters::Value;
use tracing::debug;

pub(in crate::flight_warning::runtime) trait PushButtons {
    /// This signal is hi for the single update in which the T.O CONFIG push-button was pressed.
    fn to_config_test(&self) -> bool;

    /// This signal is hi for the single update in which the RECALL push-button was pressed.
    fn recall_pulse(&self) -> bool;

    /// This signal indicates that either master warning push-button is pressed.
    fn warning_pressed(&self) -> bool;

    /// This signal indicates that either master caution push-button is pressed. None of the
    /// sheets here is cancelled by master caution; the level is reported to the host through
    /// [`A320FlightWarningComputer::master_caution`].
    ///
    /// [`A320FlightWarningComputer::master_caution`]: crate::A320FlightWarningComputer::master_caution
    fn caution_pressed(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct ButtonsActivation {
    to_config_pulse: PulseNode,
    recall_pulse_node: PulseNode,
    to_config_test: bool,
    recall_pulse: bool,
    warning_pressed: bool,
    caution_pressed: bool,
}

impl Default for ButtonsActivation {
    fn default() -> Self {
        Self {
            to_config_pulse: PulseNode::new_leading(),
            recall_pulse_node: PulseNode::new_leading(),
            to_config_test: false,
            recall_pulse: false,
            warning_pressed: false,
            caution_pressed: false,
        }
    }
}

impl ButtonsActivation {
    pub fn update(
        &mut self,
        signals: &(impl ToConfigTest + RecallOn + MwCancelOn + McCancelOn),
    ) {
        self.to_config_test = self
            .to_config_pulse
            .update(signals.to_config_test().value());
        self.recall_pulse = self.recall_pulse_node.update(signals.recall_on().value());

        self.warning_pressed =
            signals.mw_cancel_on(1).value() || signals.mw_cancel_on(2).value();
        self.caution_pressed =
            signals.mc_cancel_on(1).value() || signals.mc_cancel_on(2).value();

        if self.to_config_test {
            debug!("T.O CONFIG test requested");
        }
        if self.recall_pulse {
            debug!("RECALL requested");
        }
    }
}

impl PushButtons for ButtonsActivation {
    fn to_config_test(&self) -> bool {
        self.to_config_test
    }

    fn recall_pulse(&self) -> bool {
        self.recall_pulse
    }

    fn warning_pressed(&self) -> bool {
        self.warning_pressed
    }

    fn caution_pressed(&self) -> bool {
        self.caution_pressed
    }
}

pub(in crate::flight_warning::runtime) trait InhibitOverride {
    fn inhibit_override(&self) -> bool;
}

/// Pressing RECALL while the FWC inhibits alerts around liftoff and landing overrides the
/// inhibition until the aircraft leaves the inhibited phase.
pub(in crate::flight_warning::runtime) struct InhibitOverrideActivation {
    mem: MemoryNode,
    inhibit_override: bool,
}

impl Default for InhibitOverrideActivation {
    fn default() -> Self {
        Self {
            mem: MemoryNode::new_reset_precedence(),
            inhibit_override: false,
        }
    }
}

impl InhibitOverrideActivation {
    pub fn update(&mut self, signals: &impl CurrentFlightPhase, buttons: &impl PushButtons) {
        let inhibited = matches!(
            signals.flight_phase(),
            Some(FlightPhase::Liftoff) | Some(FlightPhase::Landing)
        );

        let previous = self.inhibit_override;
        self.inhibit_override = self.mem.update(buttons.recall_pulse() && inhibited, !inhibited);
        if self.inhibit_override != previous {
            debug!(inhibit_override = self.inhibit_override, "FWC inhibit override changed");
        }
    }
}

impl InhibitOverride for InhibitOverrideActivation {
    fn inhibit_override(&self) -> bool {
        self.inhibit_override
    }
}
