use super::identifiers;
use super::signals::*;
use fwc_systems::flight_warning::parameters::*;
use fwc_systems::shared::arinc429::Arinc429Word;
use fwc_systems::simulation::{Read, SignalBus, SignalError};
use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use tracing::{debug, warn};
use uom::si::f64::*;
use uom::si::length::foot;
#[cfg(test)]
use uom::si::ratio::percent;

/// The flight phases the FWC logic is gated on. The numeric codes are the values carried by the
/// flight phase variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlightPhase {
    Preflight = 0,
    Taxi = 1,
    Takeoff = 2,
    Liftoff = 3,
    Climb = 4,
    Cruise = 5,
    Descent = 6,
    Approach = 7,
    GoAround = 8,
    Landing = 9,
    Done = 10,
}

impl FlightPhase {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<f64> for FlightPhase {
    type Error = SignalError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.fract() != 0. {
            return Err(SignalError::UnknownFlightPhase(value));
        }

        match value as i64 {
            0 => Ok(FlightPhase::Preflight),
            1 => Ok(FlightPhase::Taxi),
            2 => Ok(FlightPhase::Takeoff),
            3 => Ok(FlightPhase::Liftoff),
            4 => Ok(FlightPhase::Climb),
            5 => Ok(FlightPhase::Cruise),
            6 => Ok(FlightPhase::Descent),
            7 => Ok(FlightPhase::Approach),
            8 => Ok(FlightPhase::GoAround),
            9 => Ok(FlightPhase::Landing),
            10 => Ok(FlightPhase::Done),
            _ => Err(SignalError::UnknownFlightPhase(value)),
        }
    }
}

impl From<FlightPhase> for f64 {
    fn from(phase: FlightPhase) -> f64 {
        phase.code() as f64
    }
}

impl Display for FlightPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}

/// The parameters the FWC acquired for one update. All logic sheets read their inputs from this
/// table only, never from the bus directly.
pub struct A320FwcParameterTable {
    flight_phase: Option<FlightPhase>,
    eng1_n1: Arinc429Parameter<Ratio>,
    eng2_n1: Arinc429Parameter<Ratio>,
    radio_height: Arinc429Parameter<Length>,
    gear_extension: Arinc429Parameter<Ratio>,
    gear_handle_position: Arinc429Parameter<f64>,
    flaps_handle_index: Arinc429Parameter<f64>,
    fma_vertical_mode: Arinc429Parameter<f64>,
    tcas_state: Arinc429Parameter<f64>,
    ap1_engaged: DiscreteParameter,
    ap2_engaged: DiscreteParameter,
    altitude_constraint: Arinc429Parameter<Length>,
    fcu_selected_altitude: Arinc429Parameter<Length>,
    altitude_managed: DiscreteParameter,
    indicated_altitude: Arinc429Parameter<Length>,
    on_ground: DiscreteParameter,
    to_config_test: DiscreteParameter,
    recall_on: DiscreteParameter,
    capt_mw_cancel_on: DiscreteParameter,
    fo_mw_cancel_on: DiscreteParameter,
    capt_mc_cancel_on: DiscreteParameter,
    fo_mc_cancel_on: DiscreteParameter,
    capt_instinctive_disconnect: DiscreteParameter,
    fo_instinctive_disconnect: DiscreteParameter,
    cavalry_charge_emitted: DiscreteParameter,
}

impl A320FwcParameterTable {
    /// Acquires all parameters from the bus. Values that can't be decoded are replaced by the
    /// conservative value for the respective parameter, so acquisition itself never fails.
    pub fn acquire(bus: &impl SignalBus) -> Self {
        Self {
            flight_phase: Self::acquire_flight_phase(bus),
            eng1_n1: Arinc429Parameter::new(bus.read(identifiers::ENGINE_N1[0])),
            eng2_n1: Arinc429Parameter::new(bus.read(identifiers::ENGINE_N1[1])),
            radio_height: Self::acquire_radio_height(bus),
            gear_extension: Arinc429Parameter::new(bus.read(identifiers::GEAR_EXTENSION)),
            gear_handle_position: Arinc429Parameter::new(
                bus.read(identifiers::GEAR_HANDLE_POSITION),
            ),
            flaps_handle_index: Arinc429Parameter::new(bus.read(identifiers::FLAPS_HANDLE_INDEX)),
            fma_vertical_mode: Arinc429Parameter::new(bus.read(identifiers::FMA_VERTICAL_MODE)),
            tcas_state: Arinc429Parameter::new(bus.read(identifiers::TCAS_STATE)),
            ap1_engaged: DiscreteParameter::new(bus.read(identifiers::AUTOPILOT_ACTIVE[0])),
            ap2_engaged: DiscreteParameter::new(bus.read(identifiers::AUTOPILOT_ACTIVE[1])),
            altitude_constraint: Arinc429Parameter::new(
                bus.read(identifiers::ALTITUDE_CONSTRAINT),
            ),
            fcu_selected_altitude: Self::acquire_altitude(bus, identifiers::FCU_SELECTED_ALTITUDE),
            altitude_managed: DiscreteParameter::new(bus.read(identifiers::ALTITUDE_MANAGED)),
            indicated_altitude: Self::acquire_altitude(bus, identifiers::INDICATED_ALTITUDE),
            on_ground: DiscreteParameter::new(bus.read(identifiers::ON_GROUND)),
            to_config_test: DiscreteParameter::new(bus.read(identifiers::TO_CONFIG_BUTTON)),
            recall_on: DiscreteParameter::new(bus.read(identifiers::RECALL_BUTTON)),
            capt_mw_cancel_on: DiscreteParameter::new(
                bus.read(identifiers::MASTER_WARNING_BUTTON[0]),
            ),
            fo_mw_cancel_on: DiscreteParameter::new(
                bus.read(identifiers::MASTER_WARNING_BUTTON[1]),
            ),
            capt_mc_cancel_on: DiscreteParameter::new(
                bus.read(identifiers::MASTER_CAUTION_BUTTON[0]),
            ),
            fo_mc_cancel_on: DiscreteParameter::new(
                bus.read(identifiers::MASTER_CAUTION_BUTTON[1]),
            ),
            capt_instinctive_disconnect: DiscreteParameter::new(
                bus.read(identifiers::INSTINCTIVE_DISCONNECT[0]),
            ),
            fo_instinctive_disconnect: DiscreteParameter::new(
                bus.read(identifiers::INSTINCTIVE_DISCONNECT[1]),
            ),
            cavalry_charge_emitted: DiscreteParameter::new(
                bus.read(identifiers::CAVALRY_CHARGE_EMITTED),
            ),
        }
    }

    fn acquire_flight_phase(bus: &impl SignalBus) -> Option<FlightPhase> {
        match FlightPhase::try_from(bus.read::<f64>(identifiers::FLIGHT_PHASE)) {
            Ok(phase) => Some(phase),
            Err(error) => {
                debug!(%error, "flight phase not decodable, phase gated logic is frozen");
                None
            }
        }
    }

    fn acquire_radio_height(bus: &impl SignalBus) -> Arinc429Parameter<Length> {
        let word = bus
            .try_read::<f64>(identifiers::RADIO_HEIGHT)
            .and_then(Arinc429Word::<f64>::try_from);

        match word {
            Ok(word) => word.map(|feet| Length::new::<foot>(feet)).into(),
            Err(error @ SignalError::Missing(_)) => {
                debug!(%error, "radio height treated as failed");
                Arinc429Parameter::new_inv(Length::new::<foot>(0.))
            }
            Err(error) => {
                warn!(%error, "radio height treated as failed");
                Arinc429Parameter::new_inv(Length::new::<foot>(0.))
            }
        }
    }

    /// Altitudes that are absent from the bus are undefined rather than zero.
    fn acquire_altitude(bus: &impl SignalBus, name: &str) -> Arinc429Parameter<Length> {
        match bus.try_read::<Length>(name) {
            Ok(altitude) if !altitude.is_nan() => Arinc429Parameter::new(altitude),
            Ok(altitude) => Arinc429Parameter::new_ncd(altitude),
            Err(_) => Arinc429Parameter::new_ncd(Length::new::<foot>(f64::NAN)),
        }
    }
}

#[cfg(test)]
impl A320FwcParameterTable {
    pub fn new() -> Self {
        Self {
            flight_phase: None,
            eng1_n1: Arinc429Parameter::new(Ratio::new::<percent>(0.)),
            eng2_n1: Arinc429Parameter::new(Ratio::new::<percent>(0.)),
            radio_height: Arinc429Parameter::new_inv(Length::new::<foot>(0.)),
            gear_extension: Arinc429Parameter::new(Ratio::new::<percent>(0.)),
            gear_handle_position: Arinc429Parameter::new(0.),
            flaps_handle_index: Arinc429Parameter::new(0.),
            fma_vertical_mode: Arinc429Parameter::new(0.),
            tcas_state: Arinc429Parameter::new(0.),
            ap1_engaged: DiscreteParameter::new(false),
            ap2_engaged: DiscreteParameter::new(false),
            altitude_constraint: Arinc429Parameter::new(Length::new::<foot>(0.)),
            fcu_selected_altitude: Arinc429Parameter::new_ncd(Length::new::<foot>(f64::NAN)),
            altitude_managed: DiscreteParameter::new(false),
            indicated_altitude: Arinc429Parameter::new_ncd(Length::new::<foot>(f64::NAN)),
            on_ground: DiscreteParameter::new(false),
            to_config_test: DiscreteParameter::new(false),
            recall_on: DiscreteParameter::new(false),
            capt_mw_cancel_on: DiscreteParameter::new(false),
            fo_mw_cancel_on: DiscreteParameter::new(false),
            capt_mc_cancel_on: DiscreteParameter::new(false),
            fo_mc_cancel_on: DiscreteParameter::new(false),
            capt_instinctive_disconnect: DiscreteParameter::new(false),
            fo_instinctive_disconnect: DiscreteParameter::new(false),
            cavalry_charge_emitted: DiscreteParameter::new(false),
        }
    }

    pub fn set_flight_phase(&mut self, flight_phase: Option<FlightPhase>) {
        self.flight_phase = flight_phase;
    }

    pub fn set_eng1_n1(&mut self, n1: Arinc429Parameter<Ratio>) {
        self.eng1_n1 = n1;
    }

    pub fn set_eng2_n1(&mut self, n1: Arinc429Parameter<Ratio>) {
        self.eng2_n1 = n1;
    }

    pub fn set_radio_height(&mut self, radio_height: Arinc429Parameter<Length>) {
        self.radio_height = radio_height;
    }

    pub fn set_gear_extension(&mut self, gear_extension: Arinc429Parameter<Ratio>) {
        self.gear_extension = gear_extension;
    }

    pub fn set_gear_handle_position(&mut self, position: Arinc429Parameter<f64>) {
        self.gear_handle_position = position;
    }

    pub fn set_flaps_handle_index(&mut self, index: Arinc429Parameter<f64>) {
        self.flaps_handle_index = index;
    }

    pub fn set_fma_vertical_mode(&mut self, mode: Arinc429Parameter<f64>) {
        self.fma_vertical_mode = mode;
    }

    pub fn set_tcas_state(&mut self, state: Arinc429Parameter<f64>) {
        self.tcas_state = state;
    }

    pub fn set_ap1_engaged(&mut self, engaged: DiscreteParameter) {
        self.ap1_engaged = engaged;
    }

    pub fn set_ap2_engaged(&mut self, engaged: DiscreteParameter) {
        self.ap2_engaged = engaged;
    }

    pub fn set_altitude_constraint(&mut self, altitude: Arinc429Parameter<Length>) {
        self.altitude_constraint = altitude;
    }

    pub fn set_fcu_selected_altitude(&mut self, altitude: Arinc429Parameter<Length>) {
        self.fcu_selected_altitude = altitude;
    }

    pub fn set_altitude_managed(&mut self, managed: DiscreteParameter) {
        self.altitude_managed = managed;
    }

    pub fn set_indicated_altitude(&mut self, altitude: Arinc429Parameter<Length>) {
        self.indicated_altitude = altitude;
    }

    pub fn set_on_ground(&mut self, on_ground: DiscreteParameter) {
        self.on_ground = on_ground;
    }

    pub fn set_to_config_test(&mut self, pressed: DiscreteParameter) {
        self.to_config_test = pressed;
    }

    pub fn set_recall_on(&mut self, pressed: DiscreteParameter) {
        self.recall_on = pressed;
    }

    pub fn set_capt_mw_cancel_on(&mut self, pressed: DiscreteParameter) {
        self.capt_mw_cancel_on = pressed;
    }

    pub fn set_fo_mw_cancel_on(&mut self, pressed: DiscreteParameter) {
        self.fo_mw_cancel_on = pressed;
    }

    pub fn set_capt_mc_cancel_on(&mut self, pressed: DiscreteParameter) {
        self.capt_mc_cancel_on = pressed;
    }

    pub fn set_fo_mc_cancel_on(&mut self, pressed: DiscreteParameter) {
        self.fo_mc_cancel_on = pressed;
    }

    pub fn set_capt_instinctive_disconnect(&mut self, pressed: DiscreteParameter) {
        self.capt_instinctive_disconnect = pressed;
    }

    pub fn set_fo_instinctive_disconnect(&mut self, pressed: DiscreteParameter) {
        self.fo_instinctive_disconnect = pressed;
    }

    pub fn set_cavalry_charge_emitted(&mut self, emitted: DiscreteParameter) {
        self.cavalry_charge_emitted = emitted;
    }
}

impl CurrentFlightPhase for A320FwcParameterTable {
    fn flight_phase(&self) -> Option<FlightPhase> {
        self.flight_phase
    }
}

impl EngN1 for A320FwcParameterTable {
    fn eng_n1(&self, index: usize) -> &Arinc429Parameter<Ratio> {
        match index {
            1 => &self.eng1_n1,
            2 => &self.eng2_n1,
            _ => panic!("Invalid engine index {}", index),
        }
    }
}

impl RadioHeight for A320FwcParameterTable {
    fn radio_height(&self) -> &Arinc429Parameter<Length> {
        &self.radio_height
    }
}

impl GearExtension for A320FwcParameterTable {
    fn gear_extension(&self) -> &Arinc429Parameter<Ratio> {
        &self.gear_extension
    }
}

impl GearHandlePosition for A320FwcParameterTable {
    fn gear_handle_position(&self) -> &Arinc429Parameter<f64> {
        &self.gear_handle_position
    }
}

impl FlapsHandleIndex for A320FwcParameterTable {
    fn flaps_handle_index(&self) -> &Arinc429Parameter<f64> {
        &self.flaps_handle_index
    }
}

impl FmaVerticalMode for A320FwcParameterTable {
    fn fma_vertical_mode(&self) -> &Arinc429Parameter<f64> {
        &self.fma_vertical_mode
    }
}

impl TcasState for A320FwcParameterTable {
    fn tcas_state(&self) -> &Arinc429Parameter<f64> {
        &self.tcas_state
    }
}

impl ApEngaged for A320FwcParameterTable {
    fn ap_engaged(&self, index: usize) -> &DiscreteParameter {
        match index {
            1 => &self.ap1_engaged,
            2 => &self.ap2_engaged,
            _ => panic!("Invalid autopilot index {}", index),
        }
    }
}

impl AltitudeConstraint for A320FwcParameterTable {
    fn altitude_constraint(&self) -> &Arinc429Parameter<Length> {
        &self.altitude_constraint
    }
}

impl FcuSelectedAltitude for A320FwcParameterTable {
    fn fcu_selected_altitude(&self) -> &Arinc429Parameter<Length> {
        &self.fcu_selected_altitude
    }
}

impl AltitudeManaged for A320FwcParameterTable {
    fn altitude_managed(&self) -> &DiscreteParameter {
        &self.altitude_managed
    }
}

impl IndicatedAltitude for A320FwcParameterTable {
    fn indicated_altitude(&self) -> &Arinc429Parameter<Length> {
        &self.indicated_altitude
    }
}

impl OnGround for A320FwcParameterTable {
    fn on_ground(&self) -> &DiscreteParameter {
        &self.on_ground
    }
}

impl ToConfigTest for A320FwcParameterTable {
    fn to_config_test(&self) -> &DiscreteParameter {
        &self.to_config_test
    }
}

impl RecallOn for A320FwcParameterTable {
    fn recall_on(&self) -> &DiscreteParameter {
        &self.recall_on
    }
}

impl MwCancelOn for A320FwcParameterTable {
    fn mw_cancel_on(&self, index: usize) -> &DiscreteParameter {
        match index {
            1 => &self.capt_mw_cancel_on,
            2 => &self.fo_mw_cancel_on,
            _ => panic!("Invalid side {}", index),
        }
    }
}

impl McCancelOn for A320FwcParameterTable {
    fn mc_cancel_on(&self, index: usize) -> &DiscreteParameter {
        match index {
            1 => &self.capt_mc_cancel_on,
            2 => &self.fo_mc_cancel_on,
            _ => panic!("Invalid side {}", index),
        }
    }
}

impl InstinctiveDisconnect for A320FwcParameterTable {
    fn instinctive_disconnect(&self, index: usize) -> &DiscreteParameter {
        match index {
            1 => &self.capt_instinctive_disconnect,
            2 => &self.fo_instinctive_disconnect,
            _ => panic!("Invalid side {}", index),
        }
    }
}

impl CavalryChargeEmitted for A320FwcParameterTable {
    fn cavalry_charge_emitted(&self) -> &DiscreteParameter {
        &self.cavalry_charge_emitted
    }
}
