use config::{A320FwcConfiguration, ConfigurationError};
use fwc_systems::simulation::{delta_from_secs, SignalBus, Write};
use parameters::A320FwcParameterTable;
use runtime::A320FlightWarningComputerRuntime;
use std::time::Duration;
use tracing::debug;

pub(crate) mod config;
pub mod identifiers;
pub(crate) mod parameters;
mod runtime;
mod signals;
#[cfg(test)]
mod test;

/// This struct represents a physical flight warning computer, as installed on an A320.
///
/// Once per update it acquires its parameters from the signal bus, consumes the momentary
/// push-buttons, runs the warning logic and writes the resulting flags back to the bus. The
/// runtime holding the latched state is created on the first update and dropped by [`reset`],
/// after which the computer starts over as if it was just powered up.
///
/// [`reset`]: A320FlightWarningComputer::reset
pub struct A320FlightWarningComputer {
    configuration: A320FwcConfiguration,
    runtime: Option<A320FlightWarningComputerRuntime>,
}

impl A320FlightWarningComputer {
    pub fn new(configuration: A320FwcConfiguration) -> Result<Self, ConfigurationError> {
        configuration.validate()?;
        Ok(Self {
            configuration,
            runtime: None,
        })
    }

    pub fn configuration(&self) -> &A320FwcConfiguration {
        &self.configuration
    }

    /// Runs one update. `delta_time` is the time in seconds since the previous update; zero,
    /// negative and NaN values mean no time has passed.
    pub fn update(&mut self, delta_time: f64, bus: &mut impl SignalBus) {
        self.update_with_delta(delta_from_secs(delta_time), bus);
    }

    pub fn update_with_delta(&mut self, delta: Duration, bus: &mut impl SignalBus) {
        let parameters = A320FwcParameterTable::acquire(&*bus);
        Self::consume_push_buttons(bus);

        let configuration = &self.configuration;
        let runtime = self.runtime.get_or_insert_with(|| {
            debug!("FWC runtime started");
            A320FlightWarningComputerRuntime::new(configuration)
        });
        runtime.update(delta, &parameters);

        Self::write_outputs(runtime, bus);
    }

    /// Drops all latched state. The next update starts with every memo and alert cleared and
    /// without a previous target altitude.
    pub fn reset(&mut self) {
        if self.runtime.take().is_some() {
            debug!("FWC runtime reset");
        }
    }

    pub fn to_memo(&self) -> bool {
        self.runtime.as_ref().map_or(false, |runtime| runtime.to_memo())
    }

    pub fn ldg_memo(&self) -> bool {
        self.runtime.as_ref().map_or(false, |runtime| runtime.ldg_memo())
    }

    pub fn altitude_deviation(&self) -> bool {
        self.runtime
            .as_ref()
            .map_or(false, |runtime| runtime.alt_deviation())
    }

    pub fn altitude_deviation_short(&self) -> bool {
        self.runtime
            .as_ref()
            .map_or(false, |runtime| runtime.alt_deviation_short())
    }

    pub fn inhibit_override(&self) -> bool {
        self.runtime
            .as_ref()
            .map_or(false, |runtime| runtime.inhibit_override())
    }

    /// Whether the T.O CONFIG push-button was pressed in the last update.
    pub fn to_config_test(&self) -> bool {
        self.runtime
            .as_ref()
            .map_or(false, |runtime| runtime.to_config_test())
    }

    /// Whether the RECALL push-button was pressed in the last update.
    pub fn recall(&self) -> bool {
        self.runtime.as_ref().map_or(false, |runtime| runtime.recall())
    }

    /// Whether either master caution push-button was pressed in the last update.
    pub fn master_caution(&self) -> bool {
        self.runtime
            .as_ref()
            .map_or(false, |runtime| runtime.master_caution())
    }

    /// Whether the cavalry charge should play after a voluntary autopilot disconnection.
    pub fn ap_off_audio(&self) -> bool {
        self.runtime
            .as_ref()
            .map_or(false, |runtime| runtime.ap_off_audio())
    }

    pub fn ap_off_master_warning(&self) -> bool {
        self.runtime.as_ref().map_or(false, |runtime| runtime.ap_off_mw())
    }

    pub fn ap_off_text(&self) -> bool {
        self.runtime
            .as_ref()
            .map_or(false, |runtime| runtime.ap_off_text())
    }

    fn consume_push_buttons(bus: &mut impl SignalBus) {
        bus.write(identifiers::TO_CONFIG_BUTTON, false);
        bus.write(identifiers::RECALL_BUTTON, false);
        for name in identifiers::MASTER_WARNING_BUTTON
            .iter()
            .chain(identifiers::MASTER_CAUTION_BUTTON.iter())
        {
            bus.write(name, false);
        }
    }

    fn write_outputs(runtime: &A320FlightWarningComputerRuntime, bus: &mut impl SignalBus) {
        bus.write(identifiers::TO_MEMO, runtime.to_memo());
        bus.write(identifiers::LDG_MEMO, runtime.ldg_memo());
        bus.write(identifiers::ALT_DEVIATION, runtime.alt_deviation());
        bus.write(
            identifiers::ALT_DEVIATION_SHORT,
            runtime.alt_deviation_short(),
        );
        bus.write(identifiers::INHIBIT_OVERRIDE, runtime.inhibit_override());
        bus.write(identifiers::TO_CONFIG, runtime.to_config_test());
        bus.write(identifiers::RECALL, runtime.recall());
        bus.write(identifiers::AP_OFF_AUDIO, runtime.ap_off_audio());
        bus.write(identifiers::AP_OFF_MASTER_WARNING, runtime.ap_off_mw());
        bus.write(identifiers::AP_OFF_TEXT, runtime.ap_off_text());
    }
}

impl Default for A320FlightWarningComputer {
    fn default() -> Self {
        Self {
            configuration: A320FwcConfiguration::default(),
            runtime: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parameters::FlightPhase;
    use super::*;
    use fwc_systems::shared::arinc429::{to_arinc429, SignStatus};
    use fwc_systems::simulation::{InMemorySignalBus, Read};
    use uom::si::f64::*;
    use uom::si::length::foot;

    struct FwcTestBed {
        fwc: A320FlightWarningComputer,
        bus: InMemorySignalBus,
    }

    impl FwcTestBed {
        fn new() -> Self {
            Self {
                fwc: A320FlightWarningComputer::default(),
                bus: InMemorySignalBus::new(),
            }
        }

        fn flight_phase(mut self, phase: FlightPhase) -> Self {
            self.bus.write(identifiers::FLIGHT_PHASE, f64::from(phase));
            self
        }

        fn radio_height(mut self, height: f64) -> Self {
            self.bus.write(
                identifiers::RADIO_HEIGHT,
                to_arinc429(height, SignStatus::NormalOperation),
            );
            self
        }

        fn press(mut self, name: &str) -> Self {
            self.bus.write(name, true);
            self
        }

        fn altitudes(mut self, target: f64, indicated: f64) -> Self {
            self.bus
                .write(identifiers::FCU_SELECTED_ALTITUDE, Length::new::<foot>(target));
            self.bus.write(
                identifiers::INDICATED_ALTITUDE,
                Length::new::<foot>(indicated),
            );
            self
        }

        fn run(mut self, delta_time: f64) -> Self {
            self.fwc.update(delta_time, &mut self.bus);
            self
        }

        fn flag(&self, name: &str) -> bool {
            self.bus.read(name)
        }
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let configuration = A320FwcConfiguration {
            ldg_memo_below_height: Length::new::<foot>(2500.),
            ..Default::default()
        };
        assert!(A320FlightWarningComputer::new(configuration).is_err());
    }

    #[test]
    fn valid_configuration_is_accepted() {
        let fwc = A320FlightWarningComputer::new(A320FwcConfiguration::default()).unwrap();
        assert_eq!(fwc.configuration(), &A320FwcConfiguration::default());
    }

    #[test]
    fn outputs_are_cleared_before_the_first_update() {
        let fwc = A320FlightWarningComputer::default();
        assert!(!fwc.to_memo());
        assert!(!fwc.ldg_memo());
        assert!(!fwc.altitude_deviation());
        assert!(!fwc.altitude_deviation_short());
        assert!(!fwc.inhibit_override());
        assert!(!fwc.ap_off_audio());
        assert!(!fwc.ap_off_master_warning());
        assert!(!fwc.ap_off_text());
    }

    #[test]
    fn writes_all_outputs_on_update() {
        let test_bed = FwcTestBed::new().run(0.05);
        for name in [
            identifiers::TO_MEMO,
            identifiers::LDG_MEMO,
            identifiers::ALT_DEVIATION,
            identifiers::ALT_DEVIATION_SHORT,
            identifiers::INHIBIT_OVERRIDE,
            identifiers::TO_CONFIG,
            identifiers::RECALL,
            identifiers::AP_OFF_AUDIO,
            identifiers::AP_OFF_MASTER_WARNING,
            identifiers::AP_OFF_TEXT,
        ] {
            assert!(test_bed.bus.contains(name), "{} not written", name);
            assert!(!test_bed.flag(name));
        }
    }

    #[test]
    fn push_buttons_are_consumed() {
        let test_bed = FwcTestBed::new()
            .press(identifiers::TO_CONFIG_BUTTON)
            .press(identifiers::RECALL_BUTTON)
            .press(identifiers::MASTER_WARNING_BUTTON[0])
            .press(identifiers::MASTER_CAUTION_BUTTON[1])
            .run(0.05);

        assert!(!test_bed.flag(identifiers::TO_CONFIG_BUTTON));
        assert!(!test_bed.flag(identifiers::RECALL_BUTTON));
        assert!(!test_bed.flag(identifiers::MASTER_WARNING_BUTTON[0]));
        assert!(!test_bed.flag(identifiers::MASTER_CAUTION_BUTTON[1]));
        assert!(test_bed.fwc.master_caution());
    }

    #[test]
    fn to_config_pulse_is_mirrored_for_one_update() {
        let test_bed = FwcTestBed::new()
            .flight_phase(FlightPhase::Takeoff)
            .press(identifiers::TO_CONFIG_BUTTON)
            .run(0.05);
        assert!(test_bed.flag(identifiers::TO_CONFIG));
        assert!(test_bed.fwc.to_config_test());
        assert!(test_bed.flag(identifiers::TO_MEMO));

        let test_bed = test_bed.run(0.05);
        assert!(!test_bed.flag(identifiers::TO_CONFIG));
        assert!(test_bed.flag(identifiers::TO_MEMO));
    }

    #[test]
    fn reset_clears_latched_memos() {
        let mut test_bed = FwcTestBed::new()
            .flight_phase(FlightPhase::Takeoff)
            .press(identifiers::TO_CONFIG_BUTTON)
            .run(0.05);
        assert!(test_bed.fwc.to_memo());

        test_bed.fwc.reset();
        assert!(!test_bed.fwc.to_memo());

        let test_bed = test_bed.run(0.05);
        assert!(!test_bed.flag(identifiers::TO_MEMO));
    }

    #[test]
    fn reset_forgets_the_previous_target_altitude() {
        let mut test_bed = FwcTestBed::new()
            .altitudes(10000., 10000.)
            .run(0.05)
            .run(0.05)
            .altitudes(10000., 10300.)
            .run(0.05);
        assert!(test_bed.flag(identifiers::ALT_DEVIATION));

        test_bed.fwc.reset();
        let test_bed = test_bed.run(0.05);
        assert!(!test_bed.flag(identifiers::ALT_DEVIATION));
    }

    #[test]
    fn ldg_memo_follows_radio_height() {
        let test_bed = FwcTestBed::new()
            .flight_phase(FlightPhase::Approach)
            .radio_height(2500.)
            .run(1.5)
            .radio_height(1800.)
            .run(0.05);
        assert!(test_bed.flag(identifiers::LDG_MEMO));
        assert!(test_bed.fwc.ldg_memo());
    }

    #[test]
    fn non_positive_delta_time_does_not_advance_timers() {
        let mut test_bed = FwcTestBed::new()
            .flight_phase(FlightPhase::Approach)
            .radio_height(2500.);
        for delta_time in [0., -1., f64::NAN] {
            test_bed = test_bed.run(delta_time);
        }
        let test_bed = test_bed.radio_height(1800.).run(0.05);
        assert!(!test_bed.flag(identifiers::LDG_MEMO));
    }
}
