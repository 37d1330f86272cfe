//! Búsqueda del inventario
//!
//! Parseo de query params a predicados tipados y su renderizado a SQL
//! parametrizado. Los repositorios ejecutan las queries; aquí no hay IO.

pub mod filter;
pub mod query;

pub use filter::{parse_filters, parse_page, ClassifiedFilter};
pub use query::{build_count_query, build_search_query, total_pages};
