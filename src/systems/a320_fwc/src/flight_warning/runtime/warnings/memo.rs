use std::time::Duration;

use super::*;
use crate::flight_warning::config::A320FwcConfiguration;
use fwc_systems::flight_warning::logic::*;
use fwc_systems::flight_warning::parameters::{SignStatusMatrix, Value};
use fwc_systems::flight_warning::utils::FwcSsm;
use tracing::debug;
use uom::si::f64::*;

pub(in crate::flight_warning::runtime) trait ToMemo {
    fn to_memo_computed(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct ToMemoActivation {
    engine_running_n1: Ratio,
    conf: ConfirmationNode,
    mem: MemoryNode,
    to_memo_computed: bool,
}

impl ToMemoActivation {
    pub fn new(configuration: &A320FwcConfiguration) -> Self {
        Self {
            engine_running_n1: configuration.engine_running_n1,
            conf: ConfirmationNode::new_leading(configuration.to_memo_engines_running_delay),
            mem: MemoryNode::new_reset_precedence(),
            to_memo_computed: false,
        }
    }

    pub fn update(
        &mut self,
        delta: Duration,
        signals: &(impl CurrentFlightPhase + EngN1),
        buttons: &impl PushButtons,
    ) {
        let phase = signals.flight_phase();
        let takeoff = phase == Some(FlightPhase::Takeoff);

        let set_mem = takeoff && buttons.to_config_test();
        let reset_mem = matches!(
            phase,
            Some(FlightPhase::Done)
                | Some(FlightPhase::Cruise)
                | Some(FlightPhase::Climb)
                | Some(FlightPhase::GoAround)
        );
        let mem_out = self.mem.update(set_mem, reset_mem);

        let both_eng_running = signals.eng_n1(1).value() >= self.engine_running_n1
            && signals.eng_n1(2).value() >= self.engine_running_n1;
        let conf_out = self.conf.update(both_eng_running, delta);

        let to_memo_computed = mem_out || (takeoff && conf_out);
        if to_memo_computed != self.to_memo_computed {
            debug!(
                to_memo = to_memo_computed,
                config_test = mem_out,
                engines_running_timer = conf_out,
                "T.O memo changed"
            );
        }
        self.to_memo_computed = to_memo_computed;
    }
}

impl Default for ToMemoActivation {
    fn default() -> Self {
        Self::new(&A320FwcConfiguration::default())
    }
}

impl ToMemo for ToMemoActivation {
    fn to_memo_computed(&self) -> bool {
        self.to_memo_computed
    }
}

impl WarningActivation for ToMemoActivation {
    fn warning(&self) -> bool {
        self.to_memo_computed
    }
}

pub(in crate::flight_warning::runtime) trait LdgMemo {
    fn ldg_memo(&self) -> bool;
    fn below_2000ft(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct LdgMemoActivation {
    below_height: Length,
    above_height: Length,
    conf1: ConfirmationNode,
    conf2: ConfirmationNode,
    mem_abv_2200: MemoryNode,
    mem_blw_2000: MemoryNode,
    ldg_memo: bool,
    below_2000ft: bool,
}

impl LdgMemoActivation {
    pub fn new(configuration: &A320FwcConfiguration) -> Self {
        Self {
            below_height: configuration.ldg_memo_below_height,
            above_height: configuration.ldg_memo_above_height,
            conf1: ConfirmationNode::new_leading(
                configuration.ldg_memo_above_height_confirmation,
            ),
            conf2: ConfirmationNode::new_leading(
                configuration.ldg_memo_failed_radio_confirmation,
            ),
            mem_abv_2200: MemoryNode::new_reset_precedence(),
            mem_blw_2000: MemoryNode::new_reset_precedence(),
            ldg_memo: false,
            below_2000ft: false,
        }
    }

    pub fn update(
        &mut self,
        delta: Duration,
        signals: &(impl CurrentFlightPhase + RadioHeight),
        lg_downlocked_sheet: &impl LgDownlocked,
    ) {
        let rh = signals.radio_height();
        let rh_inv = rh.is_inv();
        // A radio altimeter without ground return in cruise reports NCD, which counts as high.
        let rh_ncd = rh.is_ncd();
        let rh_abv_2200 = !rh_inv && (rh_ncd || rh.value() > self.above_height);
        let rh_blw_2000 = !rh_inv && !rh_ncd && rh.value() < self.below_height;

        let phase = signals.flight_phase();
        let landing_phases = matches!(
            phase,
            Some(FlightPhase::Approach) | Some(FlightPhase::Landing) | Some(FlightPhase::GoAround)
        );

        let set_mem_abv_2200 = self.conf1.update(rh_abv_2200, delta);
        let abv_2200 = self.mem_abv_2200.update(set_mem_abv_2200, !landing_phases);

        self.below_2000ft = self.mem_blw_2000.update(rh_blw_2000, rh_abv_2200);

        let rh_inv_lg_downlocked = self
            .conf2
            .update(rh_inv && lg_downlocked_sheet.lg_downlocked(), delta);

        let ldg_memo = (abv_2200 && self.below_2000ft && phase == Some(FlightPhase::Approach))
            || rh_inv_lg_downlocked
            || matches!(phase, Some(FlightPhase::Landing) | Some(FlightPhase::Done));
        if ldg_memo != self.ldg_memo {
            debug!(
                ldg_memo,
                armed_above_2200ft = abv_2200,
                below_2000ft = self.below_2000ft,
                failed_radio_altimeter = rh_inv_lg_downlocked,
                "LDG memo changed"
            );
        }
        self.ldg_memo = ldg_memo;
    }
}

impl Default for LdgMemoActivation {
    fn default() -> Self {
        Self::new(&A320FwcConfiguration::default())
    }
}

impl LdgMemo for LdgMemoActivation {
    fn ldg_memo(&self) -> bool {
        self.ldg_memo
    }

    fn below_2000ft(&self) -> bool {
        self.below_2000ft
    }
}

impl WarningActivation for LdgMemoActivation {
    fn warning(&self) -> bool {
        self.ldg_memo
    }
}
