//! Thresholds and delays of the FWC logic sheets.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use uom::si::f64::*;
use uom::si::length::foot;
use uom::si::ratio::percent;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("landing memo band is inverted: below {below:?} must be lower than above {above:?}")]
    InvertedLandingMemoBand { below: Length, above: Length },

    #[error("altitude alert thresholds are inverted: {inner:?} must be lower than {outer:?}")]
    InvertedAltitudeAlertThresholds { inner: Length, outer: Length },

    #[error("{0} must be positive")]
    NotPositive(&'static str),
}

/// Configuration of an A320 flight warning computer. The defaults are the values of the A320 FWC
/// standard and should only be changed for experiments.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct A320FwcConfiguration {
    /// N1 at or above which an engine counts as running for the T.O memo.
    pub engine_running_n1: Ratio,

    /// How long both engines have to be running in the takeoff phase before the T.O memo is shown
    /// without a T.O CONFIG test.
    pub to_memo_engines_running_delay: Duration,

    /// Radio height below which the LDG memo can be shown.
    pub ldg_memo_below_height: Length,

    /// Radio height above which the LDG memo below-height latch is reset, and which has to be
    /// exceeded before the approach is armed.
    pub ldg_memo_above_height: Length,

    pub ldg_memo_above_height_confirmation: Duration,

    /// How long both a failed radio altimeter and a downlocked gear have to persist before the
    /// LDG memo is shown regardless of height.
    pub ldg_memo_failed_radio_confirmation: Duration,

    /// Gear extension above which the gear counts as downlocked.
    pub gear_downlocked_extension: Ratio,

    /// Deviation from the target altitude under which the target counts as reached.
    pub altitude_alert_inner_threshold: Length,

    /// Deviation from the target altitude above which the aircraft counts as far from target.
    pub altitude_alert_outer_threshold: Length,
}

impl A320FwcConfiguration {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.engine_running_n1 <= Ratio::new::<percent>(0.) {
            return Err(ConfigurationError::NotPositive("engine_running_n1"));
        }
        if self.gear_downlocked_extension <= Ratio::new::<percent>(0.) {
            return Err(ConfigurationError::NotPositive("gear_downlocked_extension"));
        }
        if self.ldg_memo_below_height <= Length::new::<foot>(0.) {
            return Err(ConfigurationError::NotPositive("ldg_memo_below_height"));
        }
        if self.altitude_alert_inner_threshold <= Length::new::<foot>(0.) {
            return Err(ConfigurationError::NotPositive(
                "altitude_alert_inner_threshold",
            ));
        }
        if !(self.ldg_memo_below_height < self.ldg_memo_above_height) {
            return Err(ConfigurationError::InvertedLandingMemoBand {
                below: self.ldg_memo_below_height,
                above: self.ldg_memo_above_height,
            });
        }
        if !(self.altitude_alert_inner_threshold < self.altitude_alert_outer_threshold) {
            return Err(ConfigurationError::InvertedAltitudeAlertThresholds {
                inner: self.altitude_alert_inner_threshold,
                outer: self.altitude_alert_outer_threshold,
            });
        }
        Ok(())
    }
}

impl Default for A320FwcConfiguration {
    fn default() -> Self {
        Self {
            engine_running_n1: Ratio::new::<percent>(15.),
            to_memo_engines_running_delay: Duration::from_secs(120),
            ldg_memo_below_height: Length::new::<foot>(2000.),
            ldg_memo_above_height: Length::new::<foot>(2200.),
            ldg_memo_above_height_confirmation: Duration::from_secs(1),
            ldg_memo_failed_radio_confirmation: Duration::from_secs(10),
            gear_downlocked_extension: Ratio::new::<percent>(95.),
            altitude_alert_inner_threshold: Length::new::<foot>(200.),
            altitude_alert_outer_threshold: Length::new::<foot>(750.),
        }
    }
}
