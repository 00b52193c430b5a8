pub mod catalog;
pub mod pricing;
