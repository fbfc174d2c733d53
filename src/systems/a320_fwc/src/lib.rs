pub mod flight_warning;

pub use flight_warning::config::{A320FwcConfiguration, ConfigurationError};
pub use flight_warning::parameters::FlightPhase;
pub use flight_warning::A320FlightWarningComputer;
