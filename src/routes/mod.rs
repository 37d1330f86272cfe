pub mod auth_routes;
pub mod classified_routes;
pub mod customer_routes;
pub mod favourites_routes;
pub mod taxonomy_routes;
