pub mod classified_repository;
pub mod customer_repository;
pub mod taxonomy_repository;
pub mod user_repository;
