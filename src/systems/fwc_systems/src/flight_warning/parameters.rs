use crate::shared::arinc429::{Arinc429Word, SignStatus};

/// Access to the payload of a parameter, regardless of its status. Callers that care whether the
/// payload can be trusted check the [`SignStatusMatrix`] first.
pub trait Value<T> {
    fn value(&self) -> T;
}

/// The sign status matrix (SSM) holds the two status bits that accompany a parameter's value.
/// `ssm1` is the high bit and `ssm2` the low bit of the ARINC 429 status field. Exactly one of
/// the four `is_*` predicates holds for any parameter. How the bit patterns map to the statuses
/// differs between discretes and ARINC 429 words, so each parameter type implements them.
pub trait SignStatusMatrix {
    fn ssm1(&self) -> bool;
    fn ssm2(&self) -> bool;

    /// A parameter has "no computed data" (ncd) when no explicit failure has been detected, but no
    /// data is available. For example, the radio altimeter in cruise won't return any valid data
    /// even if it has not failed.
    fn is_ncd(&self) -> bool;

    /// A parameter is considered "normal" (no) when the data is considered valid.
    fn is_no(&self) -> bool;

    /// A parameter is in "functional test" (ft) while its source forces it to a test value.
    fn is_ft(&self) -> bool;

    /// A parameter carries a "failure warning" (fw) when its source detected a failure. This is
    /// the only status the FWC treats as invalid, see [`FwcSsm`](super::utils::FwcSsm).
    fn is_fw(&self) -> bool;
}

/// A discrete (single wire) input. Discretes carry no status of their own, a failed discrete is
/// marked by both SSM bits being set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscreteParameter {
    value: bool,
    ssm1: bool,
    ssm2: bool,
}

impl DiscreteParameter {
    pub fn new(value: bool) -> Self {
        Self {
            value,
            ssm1: false,
            ssm2: false,
        }
    }

    pub fn new_inv(value: bool) -> Self {
        Self {
            value,
            ssm1: true,
            ssm2: true,
        }
    }
}

impl SignStatusMatrix for DiscreteParameter {
    fn ssm1(&self) -> bool {
        self.ssm1
    }
    fn ssm2(&self) -> bool {
        self.ssm2
    }

    fn is_ncd(&self) -> bool {
        self.ssm1() && !self.ssm2()
    }
    fn is_no(&self) -> bool {
        !self.ssm1() && !self.ssm2()
    }
    fn is_ft(&self) -> bool {
        !self.ssm1() && self.ssm2()
    }
    fn is_fw(&self) -> bool {
        self.ssm1() && self.ssm2()
    }
}

impl Default for DiscreteParameter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Value<bool> for DiscreteParameter {
    fn value(&self) -> bool {
        self.value
    }
}

/// A value received as an ARINC 429 word, together with the word's sign status. The status bits
/// follow the bus encoding: `11` is normal operation, `10` no computed data, `01` functional
/// test and `00` failure warning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arinc429Parameter<T> {
    value: T,
    ssm1: bool,
    ssm2: bool,
}

impl<T> Arinc429Parameter<T> {
    /// A value in normal operation.
    pub fn new(value: T) -> Self {
        Self {
            value,
            ssm1: true,
            ssm2: true,
        }
    }

    /// A value whose source has no computed data, e.g. a radio altimeter out of range.
    pub fn new_ncd(value: T) -> Self {
        Self {
            value,
            ssm1: true,
            ssm2: false,
        }
    }

    /// A value whose source reports a failure warning.
    pub fn new_inv(value: T) -> Self {
        Self {
            value,
            ssm1: false,
            ssm2: false,
        }
    }

    pub fn with_status(value: T, ssm: SignStatus) -> Self {
        let bits: u64 = ssm.into();
        Self {
            value,
            ssm1: bits & 0b10 != 0,
            ssm2: bits & 0b01 != 0,
        }
    }
}

impl<T> SignStatusMatrix for Arinc429Parameter<T> {
    fn ssm1(&self) -> bool {
        self.ssm1
    }
    fn ssm2(&self) -> bool {
        self.ssm2
    }

    fn is_ncd(&self) -> bool {
        self.ssm1() && !self.ssm2()
    }
    fn is_no(&self) -> bool {
        self.ssm1() && self.ssm2()
    }
    fn is_ft(&self) -> bool {
        !self.ssm1() && self.ssm2()
    }
    fn is_fw(&self) -> bool {
        !self.ssm1() && !self.ssm2()
    }
}

impl<T: Default> Default for Arinc429Parameter<T> {
    fn default() -> Self {
        Self::new_inv(T::default())
    }
}

impl<T> Value<T> for Arinc429Parameter<T>
where
    T: Copy,
{
    fn value(&self) -> T {
        self.value
    }
}

impl<T: Copy> From<Arinc429Word<T>> for Arinc429Parameter<T> {
    fn from(word: Arinc429Word<T>) -> Self {
        Self::with_status(word.value(), word.ssm())
    }
}
