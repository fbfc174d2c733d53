use crate::simulation::SignalError;
use std::convert::TryFrom;

/// An ARINC 429 word as it travels over the simulation bus: a value together with its sign
/// status matrix. The label and SDI are implied by the variable the word is stored in.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Arinc429Word<T: Copy> {
    value: T,
    ssm: SignStatus,
}

impl<T: Copy> Arinc429Word<T> {
    pub fn new(value: T, ssm: SignStatus) -> Self {
        Self { value, ssm }
    }

    pub fn new_norm(value: T) -> Self {
        Self::new(value, SignStatus::NormalOperation)
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn ssm(&self) -> SignStatus {
        self.ssm
    }

    pub fn is_normal(&self) -> bool {
        matches!(self.ssm, SignStatus::NormalOperation)
    }

    pub fn is_failure_warning(&self) -> bool {
        matches!(self.ssm, SignStatus::FailureWarning)
    }

    pub fn is_no_computed_data(&self) -> bool {
        matches!(self.ssm, SignStatus::NoComputedData)
    }

    pub fn map<U: Copy>(self, f: impl FnOnce(T) -> U) -> Arinc429Word<U> {
        Arinc429Word::new(f(self.value), self.ssm)
    }
}

impl TryFrom<f64> for Arinc429Word<f64> {
    type Error = SignalError;

    fn try_from(raw: f64) -> Result<Self, Self::Error> {
        let (value, status) = from_arinc429(raw);
        Ok(Self::new(value, SignStatus::try_from(status)?))
    }
}

impl From<Arinc429Word<f64>> for f64 {
    fn from(word: Arinc429Word<f64>) -> f64 {
        to_arinc429(word.value, word.ssm)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SignStatus {
    FailureWarning,
    FunctionalTest,
    NoComputedData,
    NormalOperation,
}

impl From<SignStatus> for u64 {
    fn from(value: SignStatus) -> Self {
        match value {
            SignStatus::FailureWarning => 0b00,
            SignStatus::FunctionalTest => 0b01,
            SignStatus::NoComputedData => 0b10,
            SignStatus::NormalOperation => 0b11,
        }
    }
}

impl TryFrom<u32> for SignStatus {
    type Error = SignalError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0b00 => Ok(SignStatus::FailureWarning),
            0b01 => Ok(SignStatus::FunctionalTest),
            0b10 => Ok(SignStatus::NoComputedData),
            0b11 => Ok(SignStatus::NormalOperation),
            _ => Err(SignalError::UnknownSignStatus(value)),
        }
    }
}

/// Splits a packed bus value into the `f32` payload held in the upper half and the raw status
/// held in the lower half.
pub fn from_arinc429(value: f64) -> (f64, u32) {
    let bits = value.to_bits();

    let value = (bits >> 32) as u32;
    let status = bits as u32;

    (f32::from_bits(value) as f64, status)
}

pub fn to_arinc429(value: f64, ssm: SignStatus) -> f64 {
    let value = value as f32;
    let status: u64 = ssm.into();

    let bits = (value.to_bits() as u64) << 32 | status;

    f64::from_bits(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_word_can_be_unpacked() {
        let raw = to_arinc429(1500., SignStatus::NormalOperation);
        let word = Arinc429Word::<f64>::try_from(raw).unwrap();

        assert_eq!(word.value(), 1500.);
        assert!(word.is_normal());
    }

    #[test]
    fn status_survives_packing() {
        for ssm in [
            SignStatus::FailureWarning,
            SignStatus::FunctionalTest,
            SignStatus::NoComputedData,
            SignStatus::NormalOperation,
        ] {
            let raw: f64 = Arinc429Word::new(42., ssm).into();
            assert_eq!(Arinc429Word::<f64>::try_from(raw).unwrap().ssm(), ssm);
        }
    }

    #[test]
    fn unknown_status_is_an_error() {
        let raw = f64::from_bits(((10_f32).to_bits() as u64) << 32 | 0b111);
        assert_eq!(
            Arinc429Word::<f64>::try_from(raw),
            Err(SignalError::UnknownSignStatus(0b111))
        );
    }

    #[test]
    fn map_keeps_status() {
        let word = Arinc429Word::new(2., SignStatus::NoComputedData).map(|v| v * 2.);
        assert_eq!(word.value(), 4.);
        assert!(word.is_no_computed_data());
    }
}
