pub mod budget;
pub mod postgres_repository;
