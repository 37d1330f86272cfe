pub mod auth_controller;
pub mod classified_controller;
pub mod customer_controller;
pub mod favourites_controller;
pub mod taxonomy_controller;
