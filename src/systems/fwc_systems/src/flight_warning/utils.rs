use crate::flight_warning::parameters::{Arinc429Parameter, DiscreteParameter, SignStatusMatrix};

/// The FWC treats a parameter as invalid only when it carries a failure warning. No computed data
/// and functional test values are still considered valid from its point of view.
pub trait FwcSsm: SignStatusMatrix {
    fn is_val(&self) -> bool {
        !self.is_fw()
    }
    fn is_inv(&self) -> bool {
        self.is_fw()
    }
}

impl FwcSsm for DiscreteParameter {}

impl<T> FwcSsm for Arinc429Parameter<T> {}
