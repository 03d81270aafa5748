pub mod entities;
pub mod ports;
pub mod segmentation;

pub use entities::*;
pub use ports::*;
