use super::parameters::FlightPhase;
use fwc_systems::flight_warning::parameters::*;
use uom::si::f64::*;

pub(super) trait CurrentFlightPhase {
    /// The decoded flight phase, or `None` when the bus carries a code outside of the known set.
    fn flight_phase(&self) -> Option<FlightPhase>;
}

pub(super) trait EngN1 {
    fn eng_n1(&self, index: usize) -> &Arinc429Parameter<Ratio>;
}

pub(super) trait RadioHeight {
    fn radio_height(&self) -> &Arinc429Parameter<Length>;
}

pub(super) trait GearExtension {
    fn gear_extension(&self) -> &Arinc429Parameter<Ratio>;
}

pub(super) trait GearHandlePosition {
    fn gear_handle_position(&self) -> &Arinc429Parameter<f64>;
}

pub(super) trait FlapsHandleIndex {
    fn flaps_handle_index(&self) -> &Arinc429Parameter<f64>;
}

pub(super) trait FmaVerticalMode {
    fn fma_vertical_mode(&self) -> &Arinc429Parameter<f64>;
}

pub(super) trait TcasState {
    fn tcas_state(&self) -> &Arinc429Parameter<f64>;
}

pub(super) trait ApEngaged {
    fn ap_engaged(&self, index: usize) -> &DiscreteParameter;
}

pub(super) trait AltitudeConstraint {
    fn altitude_constraint(&self) -> &Arinc429Parameter<Length>;
}

pub(super) trait FcuSelectedAltitude {
    fn fcu_selected_altitude(&self) -> &Arinc429Parameter<Length>;
}

pub(super) trait AltitudeManaged {
    fn altitude_managed(&self) -> &DiscreteParameter;
}

pub(super) trait IndicatedAltitude {
    fn indicated_altitude(&self) -> &Arinc429Parameter<Length>;
}

pub(super) trait OnGround {
    fn on_ground(&self) -> &DiscreteParameter;
}

pub(super) trait ToConfigTest {
    fn to_config_test(&self) -> &DiscreteParameter;
}

pub(super) trait RecallOn {
    fn recall_on(&self) -> &DiscreteParameter;
}

pub(super) trait MwCancelOn {
    /// 1 is the captain side (left), 2 the first officer side (right).
    fn mw_cancel_on(&self, index: usize) -> &DiscreteParameter;
}

pub(super) trait McCancelOn {
    fn mc_cancel_on(&self, index: usize) -> &DiscreteParameter;
}

pub(super) trait InstinctiveDisconnect {
    /// The autopilot instinctive disconnect push-button on the captain (1) or first officer (2)
    /// sidestick.
    fn instinctive_disconnect(&self, index: usize) -> &DiscreteParameter;
}

pub(super) trait CavalryChargeEmitted {
    /// Reported back by the sound system once the cavalry charge has been played.
    fn cavalry_charge_emitted(&self) -> &DiscreteParameter;
}
