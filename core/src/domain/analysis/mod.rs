pub mod entities;
pub mod ports;
pub mod prompt;
pub mod schema;
pub mod services;
pub mod validation;

pub use entities::*;
pub use ports::*;
