use super::super::parameters::*;
use super::super::signals::*;

mod auto_flight;
mod buttons;
mod landing_gear;
mod memo;

pub(in crate::flight_warning::runtime) use auto_flight::*;
pub(in crate::flight_warning::runtime) use buttons::*;
pub(in crate::flight_warning::runtime) use landing_gear::*;
pub(in crate::flight_warning::runtime) use memo::*;

pub(super) trait WarningActivation {
    fn warning(&self) -> bool;
}
