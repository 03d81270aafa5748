pub mod acquisition;
pub mod analysis;
pub mod common;
pub mod ingredient;
