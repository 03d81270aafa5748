pub mod analysis;
pub mod health;
pub mod scan;
pub mod server;
