//! Access to the variables that connect the FWC with the rest of the aircraft.
//!
//! The host exposes a flat store of named `f64` variables. Systems don't talk to that store
//! directly but through the [`Read`] and [`Write`] traits, which convert between the raw value
//! and the unit the system works with.

use crate::shared::{from_bool, to_bool};
use fxhash::FxHashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::{trace, warn};
use uom::si::{f64::*, length::foot, ratio::percent};

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SignalError {
    #[error("variable {0} is not present on the bus")]
    Missing(String),

    #[error("unknown flight phase code {0}")]
    UnknownFlightPhase(f64),

    #[error("unknown ARINC 429 sign status {0:#b}")]
    UnknownSignStatus(u32),
}

/// The raw variable store. Writes are visible to subsequent reads immediately, also within the
/// same update, and other writers may change any variable between two reads.
pub trait SignalBus {
    fn get(&self, name: &str) -> Option<f64>;
    fn set(&mut self, name: &str, value: f64);
}

/// Conversion between the raw bus representation and a typed value.
pub trait SignalValue: Sized {
    fn from_signal(value: f64) -> Self;
    fn to_signal(self) -> f64;
}

impl SignalValue for f64 {
    fn from_signal(value: f64) -> Self {
        value
    }

    fn to_signal(self) -> f64 {
        self
    }
}

impl SignalValue for bool {
    fn from_signal(value: f64) -> Self {
        to_bool(value)
    }

    fn to_signal(self) -> f64 {
        from_bool(self)
    }
}

impl SignalValue for Length {
    fn from_signal(value: f64) -> Self {
        Length::new::<foot>(value)
    }

    fn to_signal(self) -> f64 {
        self.get::<foot>()
    }
}

impl SignalValue for Ratio {
    fn from_signal(value: f64) -> Self {
        Ratio::new::<percent>(value)
    }

    fn to_signal(self) -> f64 {
        self.get::<percent>()
    }
}

pub trait Read {
    /// Reads a variable, treating an absent variable as zero.
    fn read<T: SignalValue>(&self, name: &str) -> T;

    fn try_read<T: SignalValue>(&self, name: &str) -> Result<T, SignalError>;
}

impl<B: SignalBus + ?Sized> Read for B {
    fn read<T: SignalValue>(&self, name: &str) -> T {
        T::from_signal(self.get(name).unwrap_or(0.))
    }

    fn try_read<T: SignalValue>(&self, name: &str) -> Result<T, SignalError> {
        self.get(name)
            .map(T::from_signal)
            .ok_or_else(|| SignalError::Missing(name.to_owned()))
    }
}

pub trait Write {
    fn write<T: SignalValue>(&mut self, name: &str, value: T);
}

impl<B: SignalBus + ?Sized> Write for B {
    fn write<T: SignalValue>(&mut self, name: &str, value: T) {
        self.set(name, value.to_signal());
    }
}

/// A bus that keeps its variables in memory. Used by headless hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct InMemorySignalBus {
    variables: FxHashMap<String, f64>,
}

impl InMemorySignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.variables.remove(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl SignalBus for InMemorySignalBus {
    fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    fn set(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_owned(), value);
    }
}

/// Converts the frame time supplied by the host into a [`Duration`]. Zero, negative and NaN
/// frame times mean no time has passed.
pub fn delta_from_secs(seconds: f64) -> Duration {
    if seconds > 0. {
        Duration::try_from_secs_f64(seconds).unwrap_or_else(|error| {
            warn!(seconds, %error, "frame time not representable, no time advanced");
            Duration::ZERO
        })
    } else {
        if seconds != 0. {
            trace!(seconds, "non-positive frame time, no time advanced");
        }
        Duration::ZERO
    }
}
