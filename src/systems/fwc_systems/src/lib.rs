pub mod flight_warning;
pub mod shared;
pub mod simulation;
