use super::*;
use crate::flight_warning::config::A320FwcConfiguration;
use fwc_systems::flight_warning::logic::*;
use fwc_systems::flight_warning::parameters::Value;
use std::time::Duration;
use tracing::{debug, trace};
use uom::si::f64::*;
use uom::si::length::foot;

pub(in crate::flight_warning::runtime) trait AutoFlightTargetAltitude {
    /// The altitude the crew expects the aircraft to level off at. This is the altitude
    /// constraint when one applies to a selected altitude, and the FCU altitude otherwise.
    fn target_altitude(&self) -> Length;
}

pub(in crate::flight_warning::runtime) struct AutoFlightTargetAltitudeActivation {
    target_altitude: Length,
}

impl Default for AutoFlightTargetAltitudeActivation {
    fn default() -> Self {
        Self {
            target_altitude: Length::new::<foot>(f64::NAN),
        }
    }
}

impl AutoFlightTargetAltitudeActivation {
    pub fn update(
        &mut self,
        signals: &(impl AltitudeConstraint + FcuSelectedAltitude + AltitudeManaged),
    ) {
        let constraint = signals.altitude_constraint().value();
        let constraint_active = constraint.get::<foot>() != 0. && !constraint.is_nan();

        self.target_altitude = if constraint_active && !signals.altitude_managed().value() {
            constraint
        } else {
            signals.fcu_selected_altitude().value()
        };
    }
}

impl AutoFlightTargetAltitude for AutoFlightTargetAltitudeActivation {
    fn target_altitude(&self) -> Length {
        self.target_altitude
    }
}

pub(in crate::flight_warning::runtime) trait AutoFlightAutopilotOffVoluntary {
    /// This signal indicates that the cavalry charge should be playing because the autopilot was
    /// disconnected with one of the instinctive disconnect push-buttons.
    fn ap_off_audio(&self) -> bool;

    /// This signal indicates that the master warning should be flashing because the autopilot was
    /// disconnected with one of the instinctive disconnect push-buttons.
    fn ap_off_mw(&self) -> bool;

    /// This signal indicates that the "AP OFF" line should be shown on the EWD because the
    /// autopilot was disconnected with one of the instinctive disconnect push-buttons.
    fn ap_off_text(&self) -> bool;
}

/// Voluntary autopilot disconnection. Disengaging the autopilot within 1.3 s of pressing an
/// instinctive disconnect push-button starts the AP OFF audio, master warning and text. A second
/// press of the push-button or a master warning press, once the autopilot has been off for at
/// least 0.2 s, cancels them.
pub(in crate::flight_warning::runtime) struct AutoFlightAutopilotOffVoluntaryActivation {
    ap_disengage_pulse: PulseNode,
    audio_elapsed_pulse: PulseNode,
    cavalry_charge_elapsed_pulse: PulseNode,
    instinctive_disconnect_pulse: PulseNode,
    ap_off_confirmation: ConfirmationNode,
    capt_instinctive_disconnect_trigger: MonostableTriggerNode,
    fo_instinctive_disconnect_trigger: MonostableTriggerNode,
    audio_trigger: MonostableTriggerNode,
    cavalry_charge_trigger: MonostableTriggerNode,
    mw_trigger: MonostableTriggerNode,
    mw_cancel_trigger: MonostableTriggerNode,
    text_trigger: MonostableTriggerNode,
    text_cancel_trigger: MonostableTriggerNode,
    audio_cancel_delay_trigger: MonostableTriggerNode,
    audio_cancel_trigger: MonostableTriggerNode,
    audio_mem: MemoryNode,
    ap_off_audio: bool,
    ap_off_mw: bool,
    ap_off_text: bool,
}

impl Default for AutoFlightAutopilotOffVoluntaryActivation {
    fn default() -> Self {
        Self {
            ap_disengage_pulse: PulseNode::new_falling(),
            audio_elapsed_pulse: PulseNode::new_falling(),
            cavalry_charge_elapsed_pulse: PulseNode::new_falling(),
            instinctive_disconnect_pulse: PulseNode::new_leading(),
            ap_off_confirmation: ConfirmationNode::new_leading(Duration::from_secs_f64(0.2)),
            capt_instinctive_disconnect_trigger: MonostableTriggerNode::new_leading(
                Duration::from_secs_f64(1.3),
            ),
            fo_instinctive_disconnect_trigger: MonostableTriggerNode::new_leading(
                Duration::from_secs_f64(1.3),
            ),
            audio_trigger: MonostableTriggerNode::new_leading(Duration::from_secs(5)),
            cavalry_charge_trigger: MonostableTriggerNode::new_leading(Duration::from_secs_f64(
                1.5,
            )),
            mw_trigger: MonostableTriggerNode::new_leading(Duration::from_secs(3)),
            mw_cancel_trigger: MonostableTriggerNode::new_leading(Duration::from_secs(3)),
            text_trigger: MonostableTriggerNode::new_leading(Duration::from_secs(9)),
            text_cancel_trigger: MonostableTriggerNode::new_leading(Duration::from_secs(9)),
            audio_cancel_delay_trigger: MonostableTriggerNode::new_leading(
                Duration::from_secs_f64(0.5),
            ),
            audio_cancel_trigger: MonostableTriggerNode::new_falling(Duration::from_secs_f64(
                1.5,
            )),
            audio_mem: MemoryNode::new_reset_precedence(),
            ap_off_audio: false,
            ap_off_mw: false,
            ap_off_text: false,
        }
    }
}

impl AutoFlightAutopilotOffVoluntaryActivation {
    pub fn update(
        &mut self,
        delta: Duration,
        signals: &(impl ApEngaged + InstinctiveDisconnect + CavalryChargeEmitted),
        buttons: &impl PushButtons,
    ) {
        let one_ap_engd = signals.ap_engaged(1).value() || signals.ap_engaged(2).value();

        let allow_cancel = self.ap_off_confirmation.update(!one_ap_engd, delta);

        let capt_instinctive_disconnect = signals.instinctive_disconnect(1).value();
        let fo_instinctive_disconnect = signals.instinctive_disconnect(2).value();
        let instinctive_disconnect_pressed = self
            .instinctive_disconnect_pulse
            .update(capt_instinctive_disconnect || fo_instinctive_disconnect);
        let do_cancel =
            allow_cancel && (buttons.warning_pressed() || instinctive_disconnect_pressed);

        // Both triggers have to see every update.
        let capt_recent = self
            .capt_instinctive_disconnect_trigger
            .update(capt_instinctive_disconnect, delta);
        let fo_recent = self
            .fo_instinctive_disconnect_trigger
            .update(fo_instinctive_disconnect, delta);
        let ap_disengaged = self.ap_disengage_pulse.update(one_ap_engd);
        let voluntary_disconnect = ap_disengaged && (capt_recent || fo_recent);

        let audio_elapsed = self
            .audio_elapsed_pulse
            .update(self.audio_trigger.update(voluntary_disconnect, delta));
        let cavalry_charge_elapsed = self.cavalry_charge_elapsed_pulse.update(
            self.cavalry_charge_trigger
                .update(signals.cavalry_charge_emitted().value(), delta),
        );

        let audio = self
            .audio_mem
            .update(voluntary_disconnect, audio_elapsed || cavalry_charge_elapsed);
        let mw = self.mw_trigger.update(voluntary_disconnect, delta);
        let text = self.text_trigger.update(voluntary_disconnect, delta);

        let cancel_audio = self.audio_cancel_trigger.update(
            self.audio_cancel_delay_trigger.update(do_cancel, delta),
            delta,
        );
        let cancel_mw = self.mw_cancel_trigger.update(do_cancel, delta);
        let cancel_text = self.text_cancel_trigger.update(do_cancel, delta);

        if voluntary_disconnect {
            debug!("autopilot disconnected with instinctive disconnect push-button");
        }

        self.ap_off_audio = audio && !one_ap_engd && !cancel_audio;
        self.ap_off_mw = mw && !one_ap_engd && !cancel_mw;
        self.ap_off_text = text && !one_ap_engd && !cancel_text;
    }
}

impl AutoFlightAutopilotOffVoluntary for AutoFlightAutopilotOffVoluntaryActivation {
    fn ap_off_audio(&self) -> bool {
        self.ap_off_audio
    }

    fn ap_off_mw(&self) -> bool {
        self.ap_off_mw
    }

    fn ap_off_text(&self) -> bool {
        self.ap_off_text
    }
}

pub(in crate::flight_warning::runtime) trait AltitudeAlertGeneralInhibit {
    /// This signal indicates that the altitude alerts should be inhibited because a descent is
    /// expected (gear down with flaps extended, on glide slope, gear locked down) or because a
    /// TCAS resolution advisory commands the vertical path.
    fn general_inhibit(&self) -> bool;
}

#[derive(Default)]
pub(in crate::flight_warning::runtime) struct AltitudeAlertGeneralInhibitActivation {
    general_inhibit: bool,
}

impl AltitudeAlertGeneralInhibitActivation {
    pub fn update(
        &mut self,
        signals: &(impl GearHandlePosition + FlapsHandleIndex + FmaVerticalMode + TcasState),
        lg_downlocked_sheet: &impl LgDownlocked,
    ) {
        let slat_inhibit = signals.gear_handle_position().value() > 0.5
            && signals.flaps_handle_index().value() >= 1.;

        let vertical_mode = signals.fma_vertical_mode().value();
        let gs_mode_on = (30. ..=34.).contains(&vertical_mode);

        let tcas_ra = signals.tcas_state().value() > 1.;

        let general_inhibit =
            slat_inhibit || gs_mode_on || lg_downlocked_sheet.lg_locked_down() || tcas_ra;
        if general_inhibit && !self.general_inhibit {
            trace!(slat_inhibit, gs_mode_on, tcas_ra, "altitude alert inhibited");
        }
        self.general_inhibit = general_inhibit;
    }
}

impl AltitudeAlertGeneralInhibit for AltitudeAlertGeneralInhibitActivation {
    fn general_inhibit(&self) -> bool {
        self.general_inhibit
    }
}

pub(in crate::flight_warning::runtime) trait AltitudeDeviation {
    /// This signal indicates a persistent deviation from the target altitude, either after the
    /// target was captured or after the aircraft moved away without ever capturing it.
    fn alt_deviation(&self) -> bool;

    /// This signal is hi for the single update in which the aircraft, coming from more than
    /// 750 ft away, enters the band around the target altitude without an autopilot engaged.
    fn alt_deviation_short(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct AltitudeDeviationActivation {
    inner_threshold: Length,
    outer_threshold: Length,
    previous_target_altitude: Option<Length>,
    was_below_inner: bool,
    was_above_outer: bool,
    was_in_band: bool,
    was_reached_inner: bool,
    alt_deviation: bool,
    alt_deviation_short: bool,
}

impl AltitudeDeviationActivation {
    pub fn new(configuration: &A320FwcConfiguration) -> Self {
        Self {
            inner_threshold: configuration.altitude_alert_inner_threshold,
            outer_threshold: configuration.altitude_alert_outer_threshold,
            previous_target_altitude: None,
            was_below_inner: false,
            was_above_outer: false,
            was_in_band: false,
            was_reached_inner: false,
            alt_deviation: false,
            alt_deviation_short: false,
        }
    }

    pub fn update(
        &mut self,
        signals: &(impl IndicatedAltitude + OnGround + ApEngaged),
        buttons: &impl PushButtons,
        target_sheet: &impl AutoFlightTargetAltitude,
        inhibit_sheet: &impl AltitudeAlertGeneralInhibit,
    ) {
        self.alt_deviation_short = false;

        if buttons.warning_pressed() {
            self.reset("master warning pressed");
            return;
        }

        if signals.on_ground().value() {
            self.set_alt_deviation(false);
        }

        let target_altitude = target_sheet.target_altitude();
        // NaN never compares equal, so an undefined target always counts as a change.
        let target_changed = self.previous_target_altitude != Some(target_altitude);
        self.previous_target_altitude = Some(target_altitude);
        if target_changed {
            self.reset("target altitude changed");
            return;
        }

        if inhibit_sheet.general_inhibit() {
            self.reset("altitude alert inhibited");
            return;
        }

        let delta = (signals.indicated_altitude().value() - target_altitude).abs();
        if delta < self.inner_threshold {
            self.was_below_inner = true;
            self.was_above_outer = false;
            self.was_reached_inner = true;
        } else if delta > self.outer_threshold {
            self.was_above_outer = true;
            self.was_below_inner = false;
        } else if delta >= self.inner_threshold && delta <= self.outer_threshold {
            self.was_in_band = true;
        }

        if self.was_below_inner && self.was_reached_inner {
            self.set_alt_deviation(delta >= self.inner_threshold);
        } else if self.was_above_outer && delta <= self.outer_threshold && !self.was_reached_inner
        {
            let ap_engaged = signals.ap_engaged(1).value() || signals.ap_engaged(2).value();
            if !ap_engaged {
                self.set_alt_deviation(false);
                self.alt_deviation_short = true;
                // The approach is reported once.
                self.was_above_outer = false;
                debug!(delta = delta.get::<foot>(), "approaching target altitude");
            }
        } else if delta > self.outer_threshold && self.was_in_band && !self.was_reached_inner {
            self.set_alt_deviation(true);
        }
    }

    fn set_alt_deviation(&mut self, alt_deviation: bool) {
        if alt_deviation != self.alt_deviation {
            debug!(alt_deviation, "altitude deviation changed");
        }
        self.alt_deviation = alt_deviation;
    }

    fn reset(&mut self, reason: &'static str) {
        trace!(reason, "altitude deviation history reset");
        self.was_below_inner = false;
        self.was_above_outer = false;
        self.was_in_band = false;
        self.was_reached_inner = false;
        self.set_alt_deviation(false);
        self.alt_deviation_short = false;
    }
}

impl Default for AltitudeDeviationActivation {
    fn default() -> Self {
        Self::new(&A320FwcConfiguration::default())
    }
}

impl AltitudeDeviation for AltitudeDeviationActivation {
    fn alt_deviation(&self) -> bool {
        self.alt_deviation
    }

    fn alt_deviation_short(&self) -> bool {
        self.alt_deviation_short
    }
}

impl WarningActivation for AltitudeDeviationActivation {
    fn warning(&self) -> bool {
        self.alt_deviation
    }
}
