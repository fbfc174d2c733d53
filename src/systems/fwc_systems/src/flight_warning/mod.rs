pub mod logic;
pub mod parameters;
pub mod utils;
