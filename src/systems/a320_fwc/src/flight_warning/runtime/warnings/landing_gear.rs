use super::*;
use crate::flight_warning::config::A320FwcConfiguration;
use fwc_systems::flight_warning::parameters::Value;
use fwc_systems::flight_warning::utils::FwcSsm;
use uom::si::f64::*;
use uom::si::ratio::percent;

pub(in crate::flight_warning::runtime) trait LgDownlocked {
    /// This signal indicates that the landing gear is extended far enough to count as downlocked.
    fn lg_downlocked(&self) -> bool;

    /// This signal indicates that the landing gear is extended far enough to inhibit altitude
    /// alerts. It is hi before the gear is considered downlocked.
    fn lg_locked_down(&self) -> bool;
}

pub(in crate::flight_warning::runtime) struct LgDownlockedActivation {
    downlocked_extension: Ratio,
    locked_down_extension: Ratio,
    lg_downlocked: bool,
    lg_locked_down: bool,
}

impl LgDownlockedActivation {
    pub fn new(configuration: &A320FwcConfiguration) -> Self {
        Self {
            downlocked_extension: configuration.gear_downlocked_extension,
            locked_down_extension: Ratio::new::<percent>(90.),
            lg_downlocked: false,
            lg_locked_down: false,
        }
    }

    pub fn update(&mut self, signals: &impl GearExtension) {
        let gear_extension = signals.gear_extension();
        let extension = gear_extension.value();
        let valid = gear_extension.is_val();

        self.lg_downlocked = valid && extension > self.downlocked_extension;
        self.lg_locked_down = valid && extension > self.locked_down_extension;
    }
}

impl Default for LgDownlockedActivation {
    fn default() -> Self {
        Self::new(&A320FwcConfiguration::default())
    }
}

impl LgDownlocked for LgDownlockedActivation {
    fn lg_downlocked(&self) -> bool {
        self.lg_downlocked
    }

    fn lg_locked_down(&self) -> bool {
        self.lg_locked_down
    }
}

#[cfg(test)]
pub(in crate::flight_warning::runtime) mod tests {
    use super::*;
    use crate::flight_warning::test::{test_bed, test_bed_with};

    pub(in crate::flight_warning::runtime) struct TestLgDownlocked {
        lg_downlocked: bool,
        lg_locked_down: bool,
    }

    impl TestLgDownlocked {
        pub fn up() -> Self {
            Self {
                lg_downlocked: false,
                lg_locked_down: false,
            }
        }

        pub fn down() -> Self {
            Self {
                lg_downlocked: true,
                lg_locked_down: true,
            }
        }
    }

    impl LgDownlocked for TestLgDownlocked {
        fn lg_downlocked(&self) -> bool {
            self.lg_downlocked
        }

        fn lg_locked_down(&self) -> bool {
            self.lg_locked_down
        }
    }

    #[test]
    fn retracted_gear_is_not_downlocked() {
        let mut sheet = LgDownlockedActivation::default();
        sheet.update(test_bed().parameters());
        assert!(!sheet.lg_downlocked());
        assert!(!sheet.lg_locked_down());
    }

    #[test]
    fn fully_extended_gear_is_downlocked() {
        let mut sheet = LgDownlockedActivation::default();
        sheet.update(test_bed_with().gear_down_locked().parameters());
        assert!(sheet.lg_downlocked());
        assert!(sheet.lg_locked_down());
    }

    #[test]
    fn gear_in_transit_is_locked_down_before_it_is_downlocked() {
        let mut sheet = LgDownlockedActivation::default();
        sheet.update(
            test_bed_with()
                .gear_extension(Ratio::new::<percent>(92.))
                .parameters(),
        );
        assert!(!sheet.lg_downlocked());
        assert!(sheet.lg_locked_down());
    }

    #[test]
    fn thresholds_are_exclusive() {
        let mut sheet = LgDownlockedActivation::default();
        sheet.update(
            test_bed_with()
                .gear_extension(Ratio::new::<percent>(90.))
                .parameters(),
        );
        assert!(!sheet.lg_locked_down());

        sheet.update(
            test_bed_with()
                .gear_extension(Ratio::new::<percent>(95.))
                .parameters(),
        );
        assert!(!sheet.lg_downlocked());
        assert!(sheet.lg_locked_down());
    }

    #[test]
    fn downlocked_extension_can_be_configured() {
        let mut sheet = LgDownlockedActivation::new(&A320FwcConfiguration {
            gear_downlocked_extension: Ratio::new::<percent>(80.),
            ..Default::default()
        });
        sheet.update(
            test_bed_with()
                .gear_extension(Ratio::new::<percent>(85.))
                .parameters(),
        );
        assert!(sheet.lg_downlocked());
    }
}
