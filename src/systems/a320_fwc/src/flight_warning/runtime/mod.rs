use super::config::A320FwcConfiguration;
use super::parameters::A320FwcParameterTable;
use std::time::Duration;
use warnings::*;

mod warnings;

/// This struct represents a simulation of the software runtime that is executed on an A320
/// Flight Warning Computer. Its task is to run the warning logic sheets on the parameters that
/// were acquired for the current update, in a fixed order so that later sheets see the outputs
/// of earlier ones from the same update.
pub(super) struct A320FlightWarningComputerRuntime {
    buttons: ButtonsActivation,
    inhibit_override: InhibitOverrideActivation,
    to_memo: ToMemoActivation,
    lg_downlocked: LgDownlockedActivation,
    ldg_memo: LdgMemoActivation,
    ap_off_voluntary: AutoFlightAutopilotOffVoluntaryActivation,
    target_altitude: AutoFlightTargetAltitudeActivation,
    altitude_alert_inhibit: AltitudeAlertGeneralInhibitActivation,
    altitude_deviation: AltitudeDeviationActivation,
}

impl A320FlightWarningComputerRuntime {
    pub fn new(configuration: &A320FwcConfiguration) -> Self {
        Self {
            buttons: ButtonsActivation::default(),
            inhibit_override: InhibitOverrideActivation::default(),
            to_memo: ToMemoActivation::new(configuration),
            lg_downlocked: LgDownlockedActivation::new(configuration),
            ldg_memo: LdgMemoActivation::new(configuration),
            ap_off_voluntary: AutoFlightAutopilotOffVoluntaryActivation::default(),
            target_altitude: AutoFlightTargetAltitudeActivation::default(),
            altitude_alert_inhibit: AltitudeAlertGeneralInhibitActivation::default(),
            altitude_deviation: AltitudeDeviationActivation::new(configuration),
        }
    }

    pub fn update(&mut self, delta: Duration, parameters: &A320FwcParameterTable) {
        self.buttons.update(parameters);
        self.inhibit_override.update(parameters, &self.buttons);

        // Memos

        self.to_memo.update(delta, parameters, &self.buttons);
        self.lg_downlocked.update(parameters);
        self.ldg_memo
            .update(delta, parameters, &self.lg_downlocked);

        // Autopilot

        self.ap_off_voluntary
            .update(delta, parameters, &self.buttons);

        // Altitude alert

        self.target_altitude.update(parameters);
        self.altitude_alert_inhibit
            .update(parameters, &self.lg_downlocked);
        self.altitude_deviation.update(
            parameters,
            &self.buttons,
            &self.target_altitude,
            &self.altitude_alert_inhibit,
        );
    }

    pub fn to_config_test(&self) -> bool {
        self.buttons.to_config_test()
    }

    pub fn recall(&self) -> bool {
        self.buttons.recall_pulse()
    }

    pub fn master_caution(&self) -> bool {
        self.buttons.caution_pressed()
    }

    pub fn inhibit_override(&self) -> bool {
        self.inhibit_override.inhibit_override()
    }

    pub fn to_memo(&self) -> bool {
        self.to_memo.warning()
    }

    pub fn ldg_memo(&self) -> bool {
        self.ldg_memo.warning()
    }

    pub fn alt_deviation(&self) -> bool {
        self.altitude_deviation.warning()
    }

    pub fn alt_deviation_short(&self) -> bool {
        self.altitude_deviation.alt_deviation_short()
    }

    pub fn ap_off_audio(&self) -> bool {
        self.ap_off_voluntary.ap_off_audio()
    }

    pub fn ap_off_mw(&self) -> bool {
        self.ap_off_voluntary.ap_off_mw()
    }

    pub fn ap_off_text(&self) -> bool {
        self.ap_off_voluntary.ap_off_text()
    }
}
