use super::parameters::{A320FwcParameterTable, FlightPhase};
use fwc_systems::flight_warning::parameters::*;
use uom::si::f64::*;
use uom::si::length::foot;
use uom::si::ratio::percent;

pub struct A320FwcParameterTestBed {
    parameters: A320FwcParameterTable,
}
impl A320FwcParameterTestBed {
    pub fn new() -> Self {
        Self {
            parameters: A320FwcParameterTable::new(),
        }
    }

    pub fn and(self) -> Self {
        self
    }

    pub fn parameters(&self) -> &A320FwcParameterTable {
        &self.parameters
    }

    pub fn flight_phase(mut self, flight_phase: FlightPhase) -> Self {
        self.parameters.set_flight_phase(Some(flight_phase));
        self
    }

    pub fn unknown_flight_phase(mut self) -> Self {
        self.parameters.set_flight_phase(None);
        self
    }

    pub fn engines_running(self) -> Self {
        self.engines_n1(Ratio::new::<percent>(19.), Ratio::new::<percent>(19.))
    }

    pub fn engines_n1(mut self, eng1: Ratio, eng2: Ratio) -> Self {
        self.parameters.set_eng1_n1(Arinc429Parameter::new(eng1));
        self.parameters.set_eng2_n1(Arinc429Parameter::new(eng2));
        self
    }

    pub fn radio_height(mut self, height: Length) -> Self {
        self.parameters
            .set_radio_height(Arinc429Parameter::new(height));
        self
    }

    pub fn radio_height_ncd(mut self) -> Self {
        self.parameters
            .set_radio_height(Arinc429Parameter::new_ncd(Length::new::<foot>(0.)));
        self
    }

    pub fn radio_height_failed(mut self) -> Self {
        self.parameters
            .set_radio_height(Arinc429Parameter::new_inv(Length::new::<foot>(0.)));
        self
    }

    pub fn gear_extension(mut self, extension: Ratio) -> Self {
        self.parameters
            .set_gear_extension(Arinc429Parameter::new(extension));
        self
    }

    pub fn gear_down_locked(self) -> Self {
        self.gear_extension(Ratio::new::<percent>(100.))
    }

    pub fn gear_handle_down(mut self) -> Self {
        self.parameters
            .set_gear_handle_position(Arinc429Parameter::new(1.));
        self
    }

    pub fn flaps_handle_index(mut self, index: f64) -> Self {
        self.parameters
            .set_flaps_handle_index(Arinc429Parameter::new(index));
        self
    }

    pub fn vertical_mode(mut self, mode: f64) -> Self {
        self.parameters
            .set_fma_vertical_mode(Arinc429Parameter::new(mode));
        self
    }

    pub fn tcas_state(mut self, state: f64) -> Self {
        self.parameters.set_tcas_state(Arinc429Parameter::new(state));
        self
    }

    pub fn ap_engaged(mut self, index: usize, engaged: bool) -> Self {
        match index {
            1 => self.parameters.set_ap1_engaged(DiscreteParameter::new(engaged)),
            2 => self.parameters.set_ap2_engaged(DiscreteParameter::new(engaged)),
            _ => panic!("Invalid autopilot {}", index),
        }
        self
    }

    pub fn fcu_altitude(mut self, altitude: Length) -> Self {
        self.parameters
            .set_fcu_selected_altitude(Arinc429Parameter::new(altitude));
        self
    }

    pub fn altitude_constraint(mut self, altitude: Length) -> Self {
        self.parameters
            .set_altitude_constraint(Arinc429Parameter::new(altitude));
        self
    }

    pub fn altitude_managed(mut self) -> Self {
        self.parameters
            .set_altitude_managed(DiscreteParameter::new(true));
        self
    }

    pub fn indicated_altitude(mut self, altitude: Length) -> Self {
        self.parameters
            .set_indicated_altitude(Arinc429Parameter::new(altitude));
        self
    }

    pub fn on_ground(mut self) -> Self {
        self.parameters.set_on_ground(DiscreteParameter::new(true));
        self
    }

    pub fn takeoff_config_test_pressed(mut self) -> Self {
        self.parameters
            .set_to_config_test(DiscreteParameter::new(true));
        self
    }

    pub fn recall_pressed(mut self) -> Self {
        self.parameters.set_recall_on(DiscreteParameter::new(true));
        self
    }

    pub fn master_warning_pressed(mut self, side: usize) -> Self {
        match side {
            1 => self
                .parameters
                .set_capt_mw_cancel_on(DiscreteParameter::new(true)),
            2 => self
                .parameters
                .set_fo_mw_cancel_on(DiscreteParameter::new(true)),
            _ => panic!("Invalid side {}", side),
        }
        self
    }

    pub fn master_caution_pressed(mut self, side: usize) -> Self {
        match side {
            1 => self
                .parameters
                .set_capt_mc_cancel_on(DiscreteParameter::new(true)),
            2 => self
                .parameters
                .set_fo_mc_cancel_on(DiscreteParameter::new(true)),
            _ => panic!("Invalid side {}", side),
        }
        self
    }

    pub fn instinctive_disconnect_pressed(mut self, side: usize) -> Self {
        match side {
            1 => self
                .parameters
                .set_capt_instinctive_disconnect(DiscreteParameter::new(true)),
            2 => self
                .parameters
                .set_fo_instinctive_disconnect(DiscreteParameter::new(true)),
            _ => panic!("Invalid side {}", side),
        }
        self
    }

    pub fn cavalry_charge_emitted(mut self) -> Self {
        self.parameters
            .set_cavalry_charge_emitted(DiscreteParameter::new(true));
        self
    }
}

pub fn test_bed() -> A320FwcParameterTestBed {
    A320FwcParameterTestBed::new()
}

pub fn test_bed_with() -> A320FwcParameterTestBed {
    test_bed()
}
