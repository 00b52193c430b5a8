pub mod budget;
pub mod ping;
