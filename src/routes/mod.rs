pub mod budget;
pub mod error;
pub mod ping;
pub mod services;
