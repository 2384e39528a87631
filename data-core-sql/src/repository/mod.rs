pub mod country_repository;
pub mod sql_repository;
