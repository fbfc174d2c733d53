pub mod arinc429;

pub fn to_bool(value: f64) -> bool {
    value > 0.
}

pub fn from_bool(value: bool) -> f64 {
    if value {
        1.
    } else {
        0.
    }
}
